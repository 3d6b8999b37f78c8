use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use axum_valid::Valid;
use common::{GroupContractCreate, GroupContractFilter, GroupContractResponse, GroupContractUpdate};
use tracing::{debug, info, instrument, trace};

use crate::error::ApiError;
use crate::schemas::{AppState, ErrorResponse};

/// Search group contracts across all hotels.
///
/// Text filters match case-insensitive substrings; all filters are ANDed.
/// A malformed `start_date` is ignored.
#[utoipa::path(
    get,
    path = "/group_contracts",
    tag = "group_contracts",
    params(GroupContractFilter),
    responses(
        (status = 200, description = "Group contracts retrieved successfully", body = Vec<GroupContractResponse>),
        (status = 400, description = "Invalid query parameters", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn search_group_contracts(
    State(state): State<AppState>,
    Valid(Query(filter)): Valid<Query<GroupContractFilter>>,
) -> Result<Json<Vec<GroupContractResponse>>, ApiError> {
    trace!("Entering search_group_contracts function");
    let contracts = crud::group_contracts::search_group_contracts(&state.db, &filter).await?;
    info!("Retrieved {} group contracts", contracts.len());
    Ok(Json(contracts))
}

/// Search the group contracts of one hotel
#[utoipa::path(
    get,
    path = "/hotels/{hotel_id}/group_contracts",
    tag = "group_contracts",
    params(
        ("hotel_id" = i32, Path, description = "Hotel ID"),
        GroupContractFilter,
    ),
    responses(
        (status = 200, description = "Group contracts retrieved successfully", body = Vec<GroupContractResponse>),
        (status = 400, description = "Invalid query parameters", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_hotel_group_contracts(
    Path(hotel_id): Path<i32>,
    State(state): State<AppState>,
    Valid(Query(mut filter)): Valid<Query<GroupContractFilter>>,
) -> Result<Json<Vec<GroupContractResponse>>, ApiError> {
    trace!("Entering list_hotel_group_contracts function for hotel_id: {}", hotel_id);
    filter.hotel_id = Some(hotel_id);
    let contracts = crud::group_contracts::search_group_contracts(&state.db, &filter).await?;
    info!("Retrieved {} group contracts", contracts.len());
    Ok(Json(contracts))
}

/// Register a group contract with a hotel
#[utoipa::path(
    post,
    path = "/hotels/{hotel_id}/group_contracts",
    tag = "group_contracts",
    params(
        ("hotel_id" = i32, Path, description = "Hotel ID"),
    ),
    request_body = GroupContractCreate,
    responses(
        (status = 200, description = "Group contract created successfully", body = GroupContractResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Hotel or diving package not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, request))]
pub async fn create_group_contract(
    Path(hotel_id): Path<i32>,
    State(state): State<AppState>,
    Valid(Json(request)): Valid<Json<GroupContractCreate>>,
) -> Result<Json<GroupContractResponse>, ApiError> {
    trace!("Entering create_group_contract function for hotel_id: {}", hotel_id);
    debug!("Creating contract for group: {}", request.group_name);
    let contract = crud::group_contracts::create_group_contract(&state.db, hotel_id, request).await?;
    info!("Group contract created successfully with ID: {}", contract.id);
    Ok(Json(contract))
}

/// Get a group contract by ID
#[utoipa::path(
    get,
    path = "/group_contracts/{contract_id}",
    tag = "group_contracts",
    params(
        ("contract_id" = i32, Path, description = "Group contract ID"),
    ),
    responses(
        (status = 200, description = "Group contract retrieved successfully", body = GroupContractResponse),
        (status = 404, description = "Group contract not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_group_contract(
    Path(contract_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<GroupContractResponse>, ApiError> {
    Ok(Json(crud::group_contracts::get_group_contract(&state.db, contract_id).await?))
}

/// Partially update a group contract
#[utoipa::path(
    put,
    path = "/group_contracts/{contract_id}",
    tag = "group_contracts",
    params(
        ("contract_id" = i32, Path, description = "Group contract ID"),
    ),
    request_body = GroupContractUpdate,
    responses(
        (status = 200, description = "Group contract updated successfully", body = GroupContractResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Group contract or diving package not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, request))]
pub async fn update_group_contract(
    Path(contract_id): Path<i32>,
    State(state): State<AppState>,
    Valid(Json(request)): Valid<Json<GroupContractUpdate>>,
) -> Result<Json<GroupContractResponse>, ApiError> {
    trace!("Entering update_group_contract function for contract_id: {}", contract_id);
    debug!(?request, "Updating group contract");
    let contract =
        crud::group_contracts::update_group_contract(&state.db, contract_id, request).await?;
    info!("Group contract with ID {} updated successfully", contract_id);
    Ok(Json(contract))
}
