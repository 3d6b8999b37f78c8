use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use axum_valid::Valid;
use common::{Pagination, RoomTypeCreate, RoomTypeResponse};
use tracing::{info, instrument, trace};

use crate::error::ApiError;
use crate::schemas::{AppState, ErrorResponse};

/// List the room types of a hotel with their occupancy rates
#[utoipa::path(
    get,
    path = "/hotels/{hotel_id}/room_types",
    tag = "pricing",
    params(
        ("hotel_id" = i32, Path, description = "Hotel ID"),
        Pagination,
    ),
    responses(
        (status = 200, description = "Room types retrieved successfully", body = Vec<RoomTypeResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_room_types(
    Path(hotel_id): Path<i32>,
    State(state): State<AppState>,
    Valid(Query(page)): Valid<Query<Pagination>>,
) -> Result<Json<Vec<RoomTypeResponse>>, ApiError> {
    trace!("Entering list_room_types function for hotel_id: {}", hotel_id);
    let rooms = crud::room_types::list_room_types(&state.db, hotel_id, page).await?;
    info!("Retrieved {} room types", rooms.len());
    Ok(Json(rooms))
}

/// Add a room type to a hotel
#[utoipa::path(
    post,
    path = "/hotels/{hotel_id}/room_types",
    tag = "pricing",
    params(
        ("hotel_id" = i32, Path, description = "Hotel ID"),
    ),
    request_body = RoomTypeCreate,
    responses(
        (status = 200, description = "Room type created successfully", body = RoomTypeResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Hotel not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, request))]
pub async fn create_room_type(
    Path(hotel_id): Path<i32>,
    State(state): State<AppState>,
    Valid(Json(request)): Valid<Json<RoomTypeCreate>>,
) -> Result<Json<RoomTypeResponse>, ApiError> {
    trace!("Entering create_room_type function for hotel_id: {}", hotel_id);
    let room = crud::room_types::create_room_type(&state.db, hotel_id, request).await?;
    info!("Room type created successfully with ID: {}", room.id);
    Ok(Json(room))
}

/// Get a room type by ID
#[utoipa::path(
    get,
    path = "/room_types/{room_type_id}",
    tag = "pricing",
    params(
        ("room_type_id" = i32, Path, description = "Room type ID"),
    ),
    responses(
        (status = 200, description = "Room type retrieved successfully", body = RoomTypeResponse),
        (status = 404, description = "Room type not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_room_type(
    Path(room_type_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<RoomTypeResponse>, ApiError> {
    Ok(Json(crud::room_types::get_room_type(&state.db, room_type_id).await?))
}
