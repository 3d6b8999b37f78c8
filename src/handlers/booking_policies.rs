use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use axum_valid::Valid;
use common::{BookingPolicyCreate, BookingPolicyResponse, BookingPolicyUpdate, Pagination};
use tracing::{debug, info, instrument, trace};

use crate::error::ApiError;
use crate::schemas::{AppState, ErrorResponse};

/// List the booking policies of a hotel
#[utoipa::path(
    get,
    path = "/hotels/{hotel_id}/booking_policies",
    tag = "hotels",
    params(
        ("hotel_id" = i32, Path, description = "Hotel ID"),
        Pagination,
    ),
    responses(
        (status = 200, description = "Booking policies retrieved successfully", body = Vec<BookingPolicyResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_booking_policies(
    Path(hotel_id): Path<i32>,
    State(state): State<AppState>,
    Valid(Query(page)): Valid<Query<Pagination>>,
) -> Result<Json<Vec<BookingPolicyResponse>>, ApiError> {
    trace!("Entering list_booking_policies function for hotel_id: {}", hotel_id);
    let policies = crud::booking_policies::list_booking_policies(&state.db, hotel_id, page).await?;
    info!("Retrieved {} booking policies", policies.len());
    Ok(Json(policies))
}

/// Attach a booking policy to a hotel
#[utoipa::path(
    post,
    path = "/hotels/{hotel_id}/booking_policies",
    tag = "hotels",
    params(
        ("hotel_id" = i32, Path, description = "Hotel ID"),
    ),
    request_body = BookingPolicyCreate,
    responses(
        (status = 200, description = "Booking policy created successfully", body = BookingPolicyResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Hotel not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, request))]
pub async fn create_booking_policy(
    Path(hotel_id): Path<i32>,
    State(state): State<AppState>,
    Valid(Json(request)): Valid<Json<BookingPolicyCreate>>,
) -> Result<Json<BookingPolicyResponse>, ApiError> {
    trace!("Entering create_booking_policy function for hotel_id: {}", hotel_id);
    let policy = crud::booking_policies::create_booking_policy(&state.db, hotel_id, request).await?;
    info!("Booking policy created successfully with ID: {}", policy.id);
    Ok(Json(policy))
}

/// Get a booking policy by ID
#[utoipa::path(
    get,
    path = "/booking_policies/{policy_id}",
    tag = "hotels",
    params(
        ("policy_id" = i32, Path, description = "Booking policy ID"),
    ),
    responses(
        (status = 200, description = "Booking policy retrieved successfully", body = BookingPolicyResponse),
        (status = 404, description = "Booking policy not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_booking_policy(
    Path(policy_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<BookingPolicyResponse>, ApiError> {
    Ok(Json(crud::booking_policies::get_booking_policy(&state.db, policy_id).await?))
}

/// Partially update a booking policy
#[utoipa::path(
    put,
    path = "/booking_policies/{policy_id}",
    tag = "hotels",
    params(
        ("policy_id" = i32, Path, description = "Booking policy ID"),
    ),
    request_body = BookingPolicyUpdate,
    responses(
        (status = 200, description = "Booking policy updated successfully", body = BookingPolicyResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Booking policy not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, request))]
pub async fn update_booking_policy(
    Path(policy_id): Path<i32>,
    State(state): State<AppState>,
    Valid(Json(request)): Valid<Json<BookingPolicyUpdate>>,
) -> Result<Json<BookingPolicyResponse>, ApiError> {
    trace!("Entering update_booking_policy function for policy_id: {}", policy_id);
    debug!(?request, "Updating booking policy");
    let policy = crud::booking_policies::update_booking_policy(&state.db, policy_id, request).await?;
    info!("Booking policy with ID {} updated successfully", policy_id);
    Ok(Json(policy))
}

/// Delete a booking policy, returning the removed record
#[utoipa::path(
    delete,
    path = "/booking_policies/{policy_id}",
    tag = "hotels",
    params(
        ("policy_id" = i32, Path, description = "Booking policy ID"),
    ),
    responses(
        (status = 200, description = "Booking policy deleted successfully", body = BookingPolicyResponse),
        (status = 404, description = "Booking policy not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_booking_policy(
    Path(policy_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<BookingPolicyResponse>, ApiError> {
    trace!("Entering delete_booking_policy function for policy_id: {}", policy_id);
    let policy = crud::booking_policies::delete_booking_policy(&state.db, policy_id).await?;
    info!("Booking policy with ID {} deleted successfully", policy_id);
    Ok(Json(policy))
}
