use axum::{
    Form,
    extract::State,
    response::Json,
};
use axum_valid::Valid;
use common::{LoginRequest, TokenResponse};
use tracing::{info, instrument, trace};

use crate::error::ApiError;
use crate::schemas::{AppState, ErrorResponse};

/// Log in with a JSON body and receive a bearer token
#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 401, description = "Incorrect username or password", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, credentials), fields(username = %credentials.username))]
pub async fn login(
    State(state): State<AppState>,
    Valid(Json(credentials)): Valid<Json<LoginRequest>>,
) -> Result<Json<TokenResponse>, ApiError> {
    trace!("Entering login function");
    let token = crud::auth::login(&state.db, &state.auth, &credentials).await?;
    info!("User {} logged in", token.username);
    Ok(Json(token))
}

/// OAuth2 password grant: form-encoded `username` and `password`
#[utoipa::path(
    post,
    path = "/token",
    tag = "auth",
    request_body(content = LoginRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Token issued", body = TokenResponse),
        (status = 401, description = "Incorrect username or password", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, credentials), fields(username = %credentials.username))]
pub async fn token(
    State(state): State<AppState>,
    Valid(Form(credentials)): Valid<Form<LoginRequest>>,
) -> Result<Json<TokenResponse>, ApiError> {
    trace!("Entering token function");
    let token = crud::auth::login(&state.db, &state.auth, &credentials).await?;
    info!("Issued token for {}", token.username);
    Ok(Json(token))
}
