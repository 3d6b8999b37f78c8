use common::{Pagination, SeasonCreate, SeasonResponse};
use model::entities::{diving_package, prelude::*, season};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, LoaderTrait, ModelTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use tracing::{info, instrument, warn};

use crate::error::{CrudError, Result};
use crate::hotels::find_hotel;

pub(crate) async fn find_season(db: &DatabaseConnection, season_id: i32) -> Result<season::Model> {
    Season::find_by_id(season_id).one(db).await?.ok_or_else(|| {
        warn!(season_id, "Season not found");
        CrudError::not_found("Season")
    })
}

#[instrument(skip(db))]
pub async fn get_season(db: &DatabaseConnection, season_id: i32) -> Result<SeasonResponse> {
    let season = find_season(db, season_id).await?;
    let packages = season
        .find_related(DivingPackage)
        .order_by_asc(diving_package::Column::Id)
        .all(db)
        .await?;
    Ok(SeasonResponse::from((season, packages)))
}

/// Seasons of a hotel with their diving packages.
#[instrument(skip(db))]
pub async fn list_seasons(
    db: &DatabaseConnection,
    hotel_id: i32,
    page: Pagination,
) -> Result<Vec<SeasonResponse>> {
    let seasons = Season::find()
        .filter(season::Column::HotelId.eq(hotel_id))
        .order_by_asc(season::Column::Id)
        .offset(page.offset())
        .limit(page.limit_or(Pagination::DEFAULT_LIMIT))
        .all(db)
        .await?;
    let packages = seasons.load_many(DivingPackage, db).await?;
    Ok(seasons.into_iter().zip(packages).map(SeasonResponse::from).collect())
}

/// Date order is checked on the request shape before this is called.
#[instrument(skip(db, input), fields(name = %input.name))]
pub async fn create_season(
    db: &DatabaseConnection,
    hotel_id: i32,
    input: SeasonCreate,
) -> Result<SeasonResponse> {
    find_hotel(db, hotel_id).await?;

    let season = season::ActiveModel {
        hotel_id: Set(hotel_id),
        name: Set(input.name),
        start_date: Set(input.start_date),
        end_date: Set(input.end_date),
        hotel_foc_slots: Set(input.hotel_foc_slots),
        diving_foc_slots: Set(input.diving_foc_slots),
        ..Default::default()
    }
    .insert(db)
    .await?;

    info!(season_id = season.id, "Season created");
    Ok(SeasonResponse::from((season, Vec::new())))
}
