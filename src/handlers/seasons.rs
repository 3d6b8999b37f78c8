use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use axum_valid::Valid;
use common::{Pagination, SeasonCreate, SeasonResponse};
use tracing::{debug, info, instrument, trace};

use crate::error::ApiError;
use crate::schemas::{AppState, ErrorResponse};

/// List the seasons of a hotel with their diving packages
#[utoipa::path(
    get,
    path = "/hotels/{hotel_id}/seasons",
    tag = "pricing",
    params(
        ("hotel_id" = i32, Path, description = "Hotel ID"),
        Pagination,
    ),
    responses(
        (status = 200, description = "Seasons retrieved successfully", body = Vec<SeasonResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_seasons(
    Path(hotel_id): Path<i32>,
    State(state): State<AppState>,
    Valid(Query(page)): Valid<Query<Pagination>>,
) -> Result<Json<Vec<SeasonResponse>>, ApiError> {
    trace!("Entering list_seasons function for hotel_id: {}", hotel_id);
    let seasons = crud::seasons::list_seasons(&state.db, hotel_id, page).await?;
    info!("Retrieved {} seasons", seasons.len());
    Ok(Json(seasons))
}

/// Add a season to a hotel. `start_date` must not be after `end_date`.
#[utoipa::path(
    post,
    path = "/hotels/{hotel_id}/seasons",
    tag = "pricing",
    params(
        ("hotel_id" = i32, Path, description = "Hotel ID"),
    ),
    request_body = SeasonCreate,
    responses(
        (status = 200, description = "Season created successfully", body = SeasonResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Hotel not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, request))]
pub async fn create_season(
    Path(hotel_id): Path<i32>,
    State(state): State<AppState>,
    Valid(Json(request)): Valid<Json<SeasonCreate>>,
) -> Result<Json<SeasonResponse>, ApiError> {
    trace!("Entering create_season function for hotel_id: {}", hotel_id);
    debug!("Season runs from {} to {}", request.start_date, request.end_date);
    let season = crud::seasons::create_season(&state.db, hotel_id, request).await?;
    info!("Season created successfully with ID: {}", season.id);
    Ok(Json(season))
}

/// Get a season by ID
#[utoipa::path(
    get,
    path = "/seasons/{season_id}",
    tag = "pricing",
    params(
        ("season_id" = i32, Path, description = "Season ID"),
    ),
    responses(
        (status = 200, description = "Season retrieved successfully", body = SeasonResponse),
        (status = 404, description = "Season not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_season(
    Path(season_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<SeasonResponse>, ApiError> {
    Ok(Json(crud::seasons::get_season(&state.db, season_id).await?))
}
