use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use axum_valid::Valid;
use common::{DivingPackageCreate, DivingPackageResponse, Pagination};
use tracing::{info, instrument, trace};

use crate::error::ApiError;
use crate::schemas::{AppState, ErrorResponse};

/// List diving packages across all seasons
#[utoipa::path(
    get,
    path = "/diving_packages",
    tag = "pricing",
    params(Pagination),
    responses(
        (status = 200, description = "Diving packages retrieved successfully", body = Vec<DivingPackageResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_diving_packages(
    State(state): State<AppState>,
    Valid(Query(page)): Valid<Query<Pagination>>,
) -> Result<Json<Vec<DivingPackageResponse>>, ApiError> {
    trace!("Entering list_diving_packages function");
    let packages = crud::diving_packages::list_diving_packages(&state.db, page).await?;
    info!("Retrieved {} diving packages", packages.len());
    Ok(Json(packages))
}

/// List the diving packages of a season
#[utoipa::path(
    get,
    path = "/seasons/{season_id}/diving_packages",
    tag = "pricing",
    params(
        ("season_id" = i32, Path, description = "Season ID"),
        Pagination,
    ),
    responses(
        (status = 200, description = "Diving packages retrieved successfully", body = Vec<DivingPackageResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_season_packages(
    Path(season_id): Path<i32>,
    State(state): State<AppState>,
    Valid(Query(page)): Valid<Query<Pagination>>,
) -> Result<Json<Vec<DivingPackageResponse>>, ApiError> {
    trace!("Entering list_season_packages function for season_id: {}", season_id);
    let packages = crud::diving_packages::list_season_packages(&state.db, season_id, page).await?;
    info!("Retrieved {} diving packages", packages.len());
    Ok(Json(packages))
}

/// Add a diving package to a season
#[utoipa::path(
    post,
    path = "/seasons/{season_id}/diving_packages",
    tag = "pricing",
    params(
        ("season_id" = i32, Path, description = "Season ID"),
    ),
    request_body = DivingPackageCreate,
    responses(
        (status = 200, description = "Diving package created successfully", body = DivingPackageResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Season not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, request))]
pub async fn create_diving_package(
    Path(season_id): Path<i32>,
    State(state): State<AppState>,
    Valid(Json(request)): Valid<Json<DivingPackageCreate>>,
) -> Result<Json<DivingPackageResponse>, ApiError> {
    trace!("Entering create_diving_package function for season_id: {}", season_id);
    let package = crud::diving_packages::create_diving_package(&state.db, season_id, request).await?;
    info!("Diving package created successfully with ID: {}", package.id);
    Ok(Json(package))
}

/// Get a diving package by ID
#[utoipa::path(
    get,
    path = "/diving_packages/{package_id}",
    tag = "pricing",
    params(
        ("package_id" = i32, Path, description = "Diving package ID"),
    ),
    responses(
        (status = 200, description = "Diving package retrieved successfully", body = DivingPackageResponse),
        (status = 404, description = "Diving package not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_diving_package(
    Path(package_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<DivingPackageResponse>, ApiError> {
    Ok(Json(crud::diving_packages::get_diving_package(&state.db, package_id).await?))
}
