//! The editor page.

use actix_web::HttpResponse;
use actix_web::http::header::ContentType;

/// Serve the single-page editor UI, embedded in the binary.
///
/// GET /
pub async fn editor_page() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(include_str!("../../static/editor.html"))
}
