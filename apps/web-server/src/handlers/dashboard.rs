//! Dashboard pages - gated on a valid token for a verified account.

use actix_web::{HttpResponse, web};
use askama::Template;

use crate::middleware::auth::VerifiedUser;
use crate::middleware::error::AppResult;
use crate::state::AppState;
use crate::views::{DashboardPage, PostItem};

/// GET /dashboard - lists the signed-in user's posts.
///
/// Also bound to `post/add` and `category/add`, which have no distinct
/// views wired and fall back to this page.
pub async fn index(user: VerifiedUser, state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let identity = user.0;

    let account = state.users.find_by_id(identity.user_id).await?;
    let name = account
        .as_ref()
        .map(|u| u.name.clone())
        .unwrap_or_else(|| identity.email.clone());

    let posts = state.posts.find_by_user_id(identity.user_id).await?;
    let items = posts
        .into_iter()
        .map(|post| PostItem::new(post, account.clone()).render())
        .collect::<Result<Vec<_>, _>>()?;

    let html = DashboardPage { name, items }.render()?;

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html))
}
