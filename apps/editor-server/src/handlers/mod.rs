//! HTTP handlers and route configuration.

mod editor;
mod health;
mod posts;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(editor::editor_page)).service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .route("/preview", web::post().to(posts::preview))
            .route("/save", web::post().to(posts::save)),
    );
}
