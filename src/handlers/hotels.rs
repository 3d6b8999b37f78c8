use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use axum_valid::Valid;
use common::{HotelCreate, HotelDetail, HotelListQuery, HotelResponse, HotelUpdate};
use tracing::{debug, info, instrument, trace};

use crate::error::ApiError;
use crate::schemas::{AppState, ErrorResponse};

/// List hotels
#[utoipa::path(
    get,
    path = "/hotels",
    tag = "hotels",
    params(HotelListQuery),
    responses(
        (status = 200, description = "Hotels retrieved successfully", body = Vec<HotelResponse>),
        (status = 400, description = "Invalid query parameters", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_hotels(
    State(state): State<AppState>,
    Valid(Query(query)): Valid<Query<HotelListQuery>>,
) -> Result<Json<Vec<HotelResponse>>, ApiError> {
    trace!("Entering list_hotels function");
    let hotels = crud::hotels::list_hotels(&state.db, query).await?;
    info!("Successfully retrieved {} hotels", hotels.len());
    Ok(Json(hotels))
}

/// Get a hotel with all of its room types, meal options, offers, policies,
/// seasons and group contracts
#[utoipa::path(
    get,
    path = "/hotels/{hotel_id}",
    tag = "hotels",
    params(
        ("hotel_id" = i32, Path, description = "Hotel ID"),
    ),
    responses(
        (status = 200, description = "Hotel retrieved successfully", body = HotelDetail),
        (status = 404, description = "Hotel not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_hotel(
    Path(hotel_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<HotelDetail>, ApiError> {
    trace!("Entering get_hotel function for hotel_id: {}", hotel_id);
    let hotel = crud::hotels::get_hotel(&state.db, hotel_id).await?;
    info!("Successfully retrieved hotel with ID: {}, name: {}", hotel.hotel.id, hotel.hotel.name);
    Ok(Json(hotel))
}

/// Create a hotel
#[utoipa::path(
    post,
    path = "/hotels",
    tag = "hotels",
    request_body = HotelCreate,
    responses(
        (status = 200, description = "Hotel created successfully", body = HotelResponse),
        (status = 400, description = "Invalid request or hotel name already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, request), fields(name = %request.name))]
pub async fn create_hotel(
    State(state): State<AppState>,
    Valid(Json(request)): Valid<Json<HotelCreate>>,
) -> Result<Json<HotelResponse>, ApiError> {
    trace!("Entering create_hotel function");
    debug!("Creating hotel in location: {}", request.location);
    let hotel = crud::hotels::create_hotel(&state.db, request).await?;
    info!("Hotel created successfully with ID: {}", hotel.id);
    Ok(Json(hotel))
}

/// Partially update a hotel. Omitted fields are unchanged; `null` clears a
/// nullable field.
#[utoipa::path(
    put,
    path = "/hotels/{hotel_id}",
    tag = "hotels",
    params(
        ("hotel_id" = i32, Path, description = "Hotel ID"),
    ),
    request_body = HotelUpdate,
    responses(
        (status = 200, description = "Hotel updated successfully", body = HotelResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Hotel not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, request))]
pub async fn update_hotel(
    Path(hotel_id): Path<i32>,
    State(state): State<AppState>,
    Valid(Json(request)): Valid<Json<HotelUpdate>>,
) -> Result<Json<HotelResponse>, ApiError> {
    trace!("Entering update_hotel function for hotel_id: {}", hotel_id);
    debug!(?request, "Updating hotel");
    let hotel = crud::hotels::update_hotel(&state.db, hotel_id, request).await?;
    info!("Hotel with ID {} updated successfully", hotel_id);
    Ok(Json(hotel))
}

/// Soft-delete a hotel. The hotel stays readable by id but is hidden from
/// the listing.
#[utoipa::path(
    delete,
    path = "/hotels/{hotel_id}",
    tag = "hotels",
    params(
        ("hotel_id" = i32, Path, description = "Hotel ID"),
    ),
    responses(
        (status = 200, description = "Hotel marked as deleted", body = HotelResponse),
        (status = 404, description = "Hotel not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_hotel(
    Path(hotel_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<HotelResponse>, ApiError> {
    trace!("Entering delete_hotel function for hotel_id: {}", hotel_id);
    let hotel = crud::hotels::soft_delete_hotel(&state.db, hotel_id).await?;
    info!("Hotel with ID {} marked as deleted", hotel_id);
    Ok(Json(hotel))
}
