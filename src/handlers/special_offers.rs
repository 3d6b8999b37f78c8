use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use axum_valid::Valid;
use common::{Pagination, SpecialOfferCreate, SpecialOfferResponse};
use tracing::{info, instrument, trace};

use crate::error::ApiError;
use crate::schemas::{AppState, ErrorResponse};

/// List the special offers of a hotel
#[utoipa::path(
    get,
    path = "/hotels/{hotel_id}/special_offers",
    tag = "hotels",
    params(
        ("hotel_id" = i32, Path, description = "Hotel ID"),
        Pagination,
    ),
    responses(
        (status = 200, description = "Special offers retrieved successfully", body = Vec<SpecialOfferResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_special_offers(
    Path(hotel_id): Path<i32>,
    State(state): State<AppState>,
    Valid(Query(page)): Valid<Query<Pagination>>,
) -> Result<Json<Vec<SpecialOfferResponse>>, ApiError> {
    trace!("Entering list_special_offers function for hotel_id: {}", hotel_id);
    let offers = crud::special_offers::list_special_offers(&state.db, hotel_id, page).await?;
    info!("Retrieved {} special offers", offers.len());
    Ok(Json(offers))
}

/// Add a special offer to a hotel
#[utoipa::path(
    post,
    path = "/hotels/{hotel_id}/special_offers",
    tag = "hotels",
    params(
        ("hotel_id" = i32, Path, description = "Hotel ID"),
    ),
    request_body = SpecialOfferCreate,
    responses(
        (status = 200, description = "Special offer created successfully", body = SpecialOfferResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Hotel not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, request))]
pub async fn create_special_offer(
    Path(hotel_id): Path<i32>,
    State(state): State<AppState>,
    Valid(Json(request)): Valid<Json<SpecialOfferCreate>>,
) -> Result<Json<SpecialOfferResponse>, ApiError> {
    trace!("Entering create_special_offer function for hotel_id: {}", hotel_id);
    let offer = crud::special_offers::create_special_offer(&state.db, hotel_id, request).await?;
    info!("Special offer created successfully with ID: {}", offer.id);
    Ok(Json(offer))
}

/// Get a special offer by ID
#[utoipa::path(
    get,
    path = "/special_offers/{offer_id}",
    tag = "hotels",
    params(
        ("offer_id" = i32, Path, description = "Special offer ID"),
    ),
    responses(
        (status = 200, description = "Special offer retrieved successfully", body = SpecialOfferResponse),
        (status = 404, description = "Special offer not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_special_offer(
    Path(offer_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<SpecialOfferResponse>, ApiError> {
    Ok(Json(crud::special_offers::get_special_offer(&state.db, offer_id).await?))
}
