use common::{DivingPackageCreate, DivingPackageResponse, Pagination};
use model::entities::{diving_package, prelude::*};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use tracing::{info, instrument, warn};

use crate::error::{CrudError, Result};
use crate::seasons::find_season;

pub(crate) async fn find_diving_package(
    db: &DatabaseConnection,
    package_id: i32,
) -> Result<diving_package::Model> {
    DivingPackage::find_by_id(package_id).one(db).await?.ok_or_else(|| {
        warn!(package_id, "Diving package not found");
        CrudError::not_found("Diving package")
    })
}

#[instrument(skip(db))]
pub async fn get_diving_package(db: &DatabaseConnection, package_id: i32) -> Result<DivingPackageResponse> {
    Ok(DivingPackageResponse::from(find_diving_package(db, package_id).await?))
}

/// All packages across seasons.
#[instrument(skip(db))]
pub async fn list_diving_packages(
    db: &DatabaseConnection,
    page: Pagination,
) -> Result<Vec<DivingPackageResponse>> {
    let packages = DivingPackage::find()
        .order_by_asc(diving_package::Column::Id)
        .offset(page.offset())
        .limit(page.limit_or(Pagination::DEFAULT_LIMIT))
        .all(db)
        .await?;
    Ok(packages.into_iter().map(DivingPackageResponse::from).collect())
}

#[instrument(skip(db))]
pub async fn list_season_packages(
    db: &DatabaseConnection,
    season_id: i32,
    page: Pagination,
) -> Result<Vec<DivingPackageResponse>> {
    let packages = DivingPackage::find()
        .filter(diving_package::Column::SeasonId.eq(season_id))
        .order_by_asc(diving_package::Column::Id)
        .offset(page.offset())
        .limit(page.limit_or(Pagination::DEFAULT_LIMIT))
        .all(db)
        .await?;
    Ok(packages.into_iter().map(DivingPackageResponse::from).collect())
}

#[instrument(skip(db, input), fields(name = %input.name))]
pub async fn create_diving_package(
    db: &DatabaseConnection,
    season_id: i32,
    input: DivingPackageCreate,
) -> Result<DivingPackageResponse> {
    find_season(db, season_id).await?;

    let package = diving_package::ActiveModel {
        season_id: Set(season_id),
        name: Set(input.name),
        price: Set(input.price),
        foc_slots: Set(input.foc_slots.unwrap_or(0)),
        ..Default::default()
    }
    .insert(db)
    .await?;

    info!(package_id = package.id, "Diving package created");
    Ok(DivingPackageResponse::from(package))
}
