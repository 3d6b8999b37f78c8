use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use common::UserResponse;
use crud::auth::INVALID_CREDENTIALS;
use tracing::debug;

use crate::error::ApiError;
use crate::schemas::AppState;

/// The authenticated principal, resolved from `Authorization: Bearer <token>`.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub UserResponse);

fn bearer_token(parts: &Parts) -> Option<&str> {
    let value = parts.headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    if scheme.eq_ignore_ascii_case("bearer") && !token.trim().is_empty() {
        Some(token.trim())
    } else {
        None
    }
}

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts).ok_or_else(|| {
            debug!("Missing or malformed Authorization header");
            ApiError::unauthorized(INVALID_CREDENTIALS)
        })?;
        let user = crud::auth::current_user(&state.db, &state.auth, token).await?;
        Ok(CurrentUser(user))
    }
}
