use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use axum_valid::Valid;
use common::{
    Pagination, UserCreate, UserPreferencesUpdate, UserProfileUpdate, UserResponse, UserUpdate,
};
use tracing::{debug, info, instrument, trace};

use crate::auth::CurrentUser;
use crate::error::ApiError;
use crate::schemas::{AppState, ErrorResponse};

/// Register a new account with an empty profile and preferences
#[utoipa::path(
    post,
    path = "/users/",
    tag = "users",
    request_body = UserCreate,
    responses(
        (status = 200, description = "User created successfully", body = UserResponse),
        (status = 400, description = "Invalid request, email or username already registered", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, request), fields(username = %request.username))]
pub async fn create_user(
    State(state): State<AppState>,
    Valid(Json(request)): Valid<Json<UserCreate>>,
) -> Result<Json<UserResponse>, ApiError> {
    trace!("Entering create_user function");
    let user = crud::users::create_user(&state.db, &state.auth, request).await?;
    info!("User created successfully with ID: {}, username: {}", user.id, user.username);
    Ok(Json(user))
}

/// List users
#[utoipa::path(
    get,
    path = "/users/",
    tag = "users",
    params(Pagination),
    responses(
        (status = 200, description = "Users retrieved successfully", body = Vec<UserResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
    Valid(Query(page)): Valid<Query<Pagination>>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    trace!("Entering list_users function");
    let users = crud::users::list_users(&state.db, page).await?;
    info!("Successfully retrieved {} users", users.len());
    Ok(Json(users))
}

/// The user identified by the bearer token
#[utoipa::path(
    get,
    path = "/users/me/",
    tag = "users",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Current user", body = UserResponse),
        (status = 401, description = "Could not validate credentials", body = ErrorResponse)
    )
)]
#[instrument(skip_all, fields(username = %current.0.username))]
pub async fn read_current_user(current: CurrentUser) -> Json<UserResponse> {
    trace!("Entering read_current_user function");
    Json(current.0)
}

/// Get a user by numeric ID or, for non-numeric values, by username
#[utoipa::path(
    get,
    path = "/users/{user_id}",
    tag = "users",
    params(
        ("user_id" = String, Path, description = "Numeric user ID or username"),
    ),
    responses(
        (status = 200, description = "User retrieved successfully", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_user(
    Path(user_ref): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, ApiError> {
    trace!("Entering get_user function for: {}", user_ref);
    let user = match user_ref.parse::<i32>() {
        Ok(user_id) => crud::users::get_user(&state.db, user_id).await?,
        Err(_) => crud::users::get_user_by_username(&state.db, &user_ref).await?,
    };
    info!("Successfully retrieved user with ID: {}", user.id);
    Ok(Json(user))
}

/// Get a user by email address
#[utoipa::path(
    get,
    path = "/users/email/{email}",
    tag = "users",
    params(
        ("email" = String, Path, description = "Email address"),
    ),
    responses(
        (status = 200, description = "User retrieved successfully", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_user_by_email(
    Path(email): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, ApiError> {
    Ok(Json(crud::users::get_user_by_email(&state.db, &email).await?))
}

/// Get a user by username
#[utoipa::path(
    get,
    path = "/users/username/{username}",
    tag = "users",
    params(
        ("username" = String, Path, description = "Username"),
    ),
    responses(
        (status = 200, description = "User retrieved successfully", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_user_by_username(
    Path(username): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, ApiError> {
    Ok(Json(crud::users::get_user_by_username(&state.db, &username).await?))
}

/// Change username, email or password
#[utoipa::path(
    put,
    path = "/users/{user_id}",
    tag = "users",
    params(
        ("user_id" = i32, Path, description = "User ID"),
    ),
    request_body = UserUpdate,
    responses(
        (status = 200, description = "User updated successfully", body = UserResponse),
        (status = 400, description = "Invalid request, email or username already registered", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, request))]
pub async fn update_user(
    Path(user_id): Path<i32>,
    State(state): State<AppState>,
    Valid(Json(request)): Valid<Json<UserUpdate>>,
) -> Result<Json<UserResponse>, ApiError> {
    trace!("Entering update_user function for user_id: {}", user_id);
    debug!(
        username = ?request.username,
        email = ?request.email,
        password = request.password.is_some(),
        "Updating user"
    );
    let user = crud::users::update_user(&state.db, &state.auth, user_id, request).await?;
    info!("User with ID {} updated successfully", user_id);
    Ok(Json(user))
}

/// Update profile fields of a user
#[utoipa::path(
    put,
    path = "/users/profile/{user_id}",
    tag = "users",
    params(
        ("user_id" = i32, Path, description = "User ID"),
    ),
    request_body = UserProfileUpdate,
    responses(
        (status = 200, description = "Profile updated successfully", body = UserResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_user_profile(
    Path(user_id): Path<i32>,
    State(state): State<AppState>,
    Valid(Json(request)): Valid<Json<UserProfileUpdate>>,
) -> Result<Json<UserResponse>, ApiError> {
    trace!("Entering update_user_profile function for user_id: {}", user_id);
    let user = crud::users::update_user_profile(&state.db, user_id, request).await?;
    info!("Profile of user {} updated successfully", user_id);
    Ok(Json(user))
}

/// Update preferences of a user
#[utoipa::path(
    put,
    path = "/users/preferences/{user_id}",
    tag = "users",
    params(
        ("user_id" = i32, Path, description = "User ID"),
    ),
    request_body = UserPreferencesUpdate,
    responses(
        (status = 200, description = "Preferences updated successfully", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_user_preferences(
    Path(user_id): Path<i32>,
    State(state): State<AppState>,
    Json(request): Json<UserPreferencesUpdate>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = crud::users::update_user_preferences(&state.db, user_id, request).await?;
    Ok(Json(user))
}

/// Activate an account
#[utoipa::path(
    put,
    path = "/users/approve/{user_id}",
    tag = "users",
    params(
        ("user_id" = i32, Path, description = "User ID"),
    ),
    responses(
        (status = 200, description = "User approved", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn approve_user(
    Path(user_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = crud::users::approve_user(&state.db, user_id).await?;
    info!("User {} approved", user_id);
    Ok(Json(user))
}

/// Deactivate an account
#[utoipa::path(
    put,
    path = "/users/disapprove/{user_id}",
    tag = "users",
    params(
        ("user_id" = i32, Path, description = "User ID"),
    ),
    responses(
        (status = 200, description = "User disapproved", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn disapprove_user(
    Path(user_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = crud::users::disapprove_user(&state.db, user_id).await?;
    info!("User {} disapproved", user_id);
    Ok(Json(user))
}

/// Grant admin rights. Also served at `/users/promote/{user_id}`.
#[utoipa::path(
    put,
    path = "/users/promote-admin/{user_id}",
    tag = "users",
    params(
        ("user_id" = i32, Path, description = "User ID"),
    ),
    responses(
        (status = 200, description = "User promoted to admin", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn promote_user(
    Path(user_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = crud::users::promote_user(&state.db, user_id).await?;
    info!("User {} promoted to admin", user_id);
    Ok(Json(user))
}

/// Revoke admin rights. Also served at `/users/demote/{user_id}`.
#[utoipa::path(
    put,
    path = "/users/demote-admin/{user_id}",
    tag = "users",
    params(
        ("user_id" = i32, Path, description = "User ID"),
    ),
    responses(
        (status = 200, description = "Admin rights revoked", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn demote_user(
    Path(user_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = crud::users::demote_user(&state.db, user_id).await?;
    info!("User {} demoted", user_id);
    Ok(Json(user))
}

/// Delete a user together with profile and preferences
#[utoipa::path(
    delete,
    path = "/users/{user_id}",
    tag = "users",
    params(
        ("user_id" = i32, Path, description = "User ID"),
    ),
    responses(
        (status = 200, description = "User deleted successfully", body = bool),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_user(
    Path(user_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<bool>, ApiError> {
    trace!("Entering delete_user function for user_id: {}", user_id);
    crud::users::delete_user(&state.db, user_id).await?;
    info!("User with ID {} deleted successfully", user_id);
    Ok(Json(true))
}
