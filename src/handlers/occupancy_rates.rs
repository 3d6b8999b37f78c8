use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use axum_valid::Valid;
use common::{OccupancyRateCreate, OccupancyRateInput, OccupancyRateResponse, Pagination};
use tracing::{debug, info, instrument, trace};

use crate::error::ApiError;
use crate::schemas::{AppState, ErrorResponse};

/// List the rates of a room type within a season
#[utoipa::path(
    get,
    path = "/room_types/{room_type_id}/seasons/{season_id}/occupancy_rates",
    tag = "pricing",
    params(
        ("room_type_id" = i32, Path, description = "Room type ID"),
        ("season_id" = i32, Path, description = "Season ID"),
        Pagination,
    ),
    responses(
        (status = 200, description = "Occupancy rates retrieved successfully", body = Vec<OccupancyRateResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_occupancy_rates(
    Path((room_type_id, season_id)): Path<(i32, i32)>,
    State(state): State<AppState>,
    Valid(Query(page)): Valid<Query<Pagination>>,
) -> Result<Json<Vec<OccupancyRateResponse>>, ApiError> {
    trace!("Entering list_occupancy_rates function");
    let rates =
        crud::occupancy_rates::list_occupancy_rates(&state.db, room_type_id, season_id, page).await?;
    info!("Retrieved {} occupancy rates", rates.len());
    Ok(Json(rates))
}

/// Set the rate of one occupancy category for a room type within a season
#[utoipa::path(
    post,
    path = "/room_types/{room_type_id}/seasons/{season_id}/occupancy_rates",
    tag = "pricing",
    params(
        ("room_type_id" = i32, Path, description = "Room type ID"),
        ("season_id" = i32, Path, description = "Season ID"),
    ),
    request_body = OccupancyRateInput,
    responses(
        (status = 200, description = "Occupancy rate created successfully", body = OccupancyRateResponse),
        (status = 400, description = "Invalid request or duplicate occupancy type", body = ErrorResponse),
        (status = 404, description = "Room type or season not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, request))]
pub async fn create_nested_occupancy_rate(
    Path((room_type_id, season_id)): Path<(i32, i32)>,
    State(state): State<AppState>,
    Valid(Json(request)): Valid<Json<OccupancyRateInput>>,
) -> Result<Json<OccupancyRateResponse>, ApiError> {
    trace!("Entering create_nested_occupancy_rate function");
    debug!("Occupancy type: {:?}, rate: {}", request.occupancy_type, request.rate);
    let rate = crud::occupancy_rates::create_for_room_and_season(
        &state.db,
        room_type_id,
        season_id,
        request,
    )
    .await?;
    info!("Occupancy rate created successfully with ID: {}", rate.id);
    Ok(Json(rate))
}

/// Create an occupancy rate with room type and season given in the body
#[utoipa::path(
    post,
    path = "/occupancy_rates",
    tag = "pricing",
    request_body = OccupancyRateCreate,
    responses(
        (status = 200, description = "Occupancy rate created successfully", body = OccupancyRateResponse),
        (status = 400, description = "Invalid request or duplicate occupancy type", body = ErrorResponse),
        (status = 404, description = "Room type or season not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, request))]
pub async fn create_occupancy_rate(
    State(state): State<AppState>,
    Valid(Json(request)): Valid<Json<OccupancyRateCreate>>,
) -> Result<Json<OccupancyRateResponse>, ApiError> {
    trace!("Entering create_occupancy_rate function");
    let rate = crud::occupancy_rates::create_occupancy_rate(&state.db, request).await?;
    info!("Occupancy rate created successfully with ID: {}", rate.id);
    Ok(Json(rate))
}

/// Get an occupancy rate by ID
#[utoipa::path(
    get,
    path = "/occupancy_rates/{rate_id}",
    tag = "pricing",
    params(
        ("rate_id" = i32, Path, description = "Occupancy rate ID"),
    ),
    responses(
        (status = 200, description = "Occupancy rate retrieved successfully", body = OccupancyRateResponse),
        (status = 404, description = "Occupancy rate not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_occupancy_rate(
    Path(rate_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<OccupancyRateResponse>, ApiError> {
    Ok(Json(crud::occupancy_rates::get_occupancy_rate(&state.db, rate_id).await?))
}
