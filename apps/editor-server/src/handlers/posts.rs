//! Preview and save handlers.

use actix_web::{HttpResponse, web};

use inkpost_core::domain::PostDraft;
use inkpost_shared::dto::{PreviewRequest, PreviewResponse, SaveRequest, SaveResponse};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// Render a live HTML preview of the submitted markdown.
///
/// POST /api/preview
pub async fn preview(state: web::Data<AppState>, body: web::Json<PreviewRequest>) -> HttpResponse {
    let html = state.renderer.render(&body.content);

    HttpResponse::Ok().json(PreviewResponse { html })
}

/// Persist a post: rewrite its image references into locally stored files
/// and write the frontmatter-prefixed document.
///
/// POST /api/save
pub async fn save(
    state: web::Data<AppState>,
    body: web::Json<SaveRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Validate input
    let draft = PostDraft::new(&req.title, &req.content)?;

    let saved = state.store.save(draft).await?;

    Ok(HttpResponse::Ok().json(SaveResponse {
        success: true,
        path: saved.path,
        directory: saved.directory,
    }))
}
