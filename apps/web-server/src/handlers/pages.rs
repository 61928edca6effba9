//! Public pages.

use actix_web::{HttpResponse, web};
use askama::Template;

use crate::middleware::error::AppResult;
use crate::state::AppState;
use crate::views::{PostItem, WelcomePage};

/// GET / - the landing page listing published posts.
pub async fn home(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    render_landing(&state).await
}

/// GET /category/{category}
///
/// The landing view carries no per-category index, so every category value
/// renders the same page.
pub async fn category(
    path: web::Path<String>,
    state: web::Data<AppState>,
) -> AppResult<HttpResponse> {
    let category = path.into_inner();
    tracing::debug!(%category, "Category page requested");

    render_landing(&state).await
}

async fn render_landing(state: &AppState) -> AppResult<HttpResponse> {
    let rows = state.posts.find_published().await?;

    let items = rows
        .into_iter()
        .map(|(post, author)| PostItem::new(post, author).render())
        .collect::<Result<Vec<_>, _>>()?;

    let html = WelcomePage { items }.render()?;

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html))
}
