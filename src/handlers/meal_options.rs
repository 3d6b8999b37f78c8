use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use axum_valid::Valid;
use common::{MealOptionCreate, MealOptionResponse, Pagination};
use tracing::{info, instrument, trace};

use crate::error::ApiError;
use crate::schemas::{AppState, ErrorResponse};

/// List the meal options of a hotel
#[utoipa::path(
    get,
    path = "/hotels/{hotel_id}/meal_options",
    tag = "hotels",
    params(
        ("hotel_id" = i32, Path, description = "Hotel ID"),
        Pagination,
    ),
    responses(
        (status = 200, description = "Meal options retrieved successfully", body = Vec<MealOptionResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_meal_options(
    Path(hotel_id): Path<i32>,
    State(state): State<AppState>,
    Valid(Query(page)): Valid<Query<Pagination>>,
) -> Result<Json<Vec<MealOptionResponse>>, ApiError> {
    trace!("Entering list_meal_options function for hotel_id: {}", hotel_id);
    let options = crud::meal_options::list_meal_options(&state.db, hotel_id, page).await?;
    info!("Retrieved {} meal options", options.len());
    Ok(Json(options))
}

/// Add a meal option to a hotel
#[utoipa::path(
    post,
    path = "/hotels/{hotel_id}/meal_options",
    tag = "hotels",
    params(
        ("hotel_id" = i32, Path, description = "Hotel ID"),
    ),
    request_body = MealOptionCreate,
    responses(
        (status = 200, description = "Meal option created successfully", body = MealOptionResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Hotel not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, request))]
pub async fn create_meal_option(
    Path(hotel_id): Path<i32>,
    State(state): State<AppState>,
    Valid(Json(request)): Valid<Json<MealOptionCreate>>,
) -> Result<Json<MealOptionResponse>, ApiError> {
    trace!("Entering create_meal_option function for hotel_id: {}", hotel_id);
    let option = crud::meal_options::create_meal_option(&state.db, hotel_id, request).await?;
    info!("Meal option created successfully with ID: {}", option.id);
    Ok(Json(option))
}

/// Get a meal option by ID
#[utoipa::path(
    get,
    path = "/meal_options/{meal_option_id}",
    tag = "hotels",
    params(
        ("meal_option_id" = i32, Path, description = "Meal option ID"),
    ),
    responses(
        (status = 200, description = "Meal option retrieved successfully", body = MealOptionResponse),
        (status = 404, description = "Meal option not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_meal_option(
    Path(meal_option_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<MealOptionResponse>, ApiError> {
    Ok(Json(crud::meal_options::get_meal_option(&state.db, meal_option_id).await?))
}
