//! Authentication handlers.

use actix_web::{HttpResponse, web};
use std::sync::Arc;

use quill_core::ports::{PasswordService, TokenService};
use quill_shared::dto::{AuthResponse, LoginRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /auth/login
pub async fn login(
    state: web::Data<AppState>,
    token_service: web::Data<Arc<dyn TokenService>>,
    password_service: web::Data<Arc<dyn PasswordService>>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Find user by email
    let user = state
        .users
        .find_by_email(&req.email)
        .await?
        .ok_or(AppError::Unauthorized)?;

    // Verify password
    let valid = password_service
        .verify(&req.password, &user.password_hash)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    if !valid {
        return Err(AppError::Unauthorized);
    }

    // The verification status travels in the token; the dashboard gate
    // checks it without another user lookup.
    let token = token_service
        .generate_token(user.id, &user.email, user.is_verified())
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        access_token: token,
        token_type: "Bearer".to_string(),
        expires_in: token_service.expiration_seconds() as u64,
    }))
}
