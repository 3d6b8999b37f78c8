//! Prices per room type, season and occupancy category.
//!
//! A (room type, season, category) triple has at most one rate. Inserts
//! check for an existing rate first and the unique index catches races.

use common::{OccupancyRateCreate, OccupancyRateInput, OccupancyRateResponse, Pagination};
use model::entities::{occupancy_rate, prelude::*};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use tracing::{debug, info, instrument, warn};

use crate::error::{CrudError, Result, conflict_on_unique};
use crate::room_types::find_room_type;
use crate::seasons::find_season;

pub const DUPLICATE_RATE: &str =
    "Occupancy rate already exists for this room type, season and occupancy type";

#[instrument(skip(db))]
pub async fn get_occupancy_rate(db: &DatabaseConnection, rate_id: i32) -> Result<OccupancyRateResponse> {
    OccupancyRate::find_by_id(rate_id)
        .one(db)
        .await?
        .map(OccupancyRateResponse::from)
        .ok_or_else(|| {
            warn!("Occupancy rate not found");
            CrudError::not_found("Occupancy rate")
        })
}

#[instrument(skip(db))]
pub async fn list_occupancy_rates(
    db: &DatabaseConnection,
    room_type_id: i32,
    season_id: i32,
    page: Pagination,
) -> Result<Vec<OccupancyRateResponse>> {
    let rates = OccupancyRate::find()
        .filter(occupancy_rate::Column::RoomTypeId.eq(room_type_id))
        .filter(occupancy_rate::Column::SeasonId.eq(season_id))
        .order_by_asc(occupancy_rate::Column::Id)
        .offset(page.offset())
        .limit(page.limit_or(Pagination::DEFAULT_LIMIT))
        .all(db)
        .await?;
    debug!(count = rates.len(), "Loaded occupancy rates");
    Ok(rates.into_iter().map(OccupancyRateResponse::from).collect())
}

#[instrument(skip(db, input), fields(room_type_id = input.room_type_id, season_id = input.season_id))]
pub async fn create_occupancy_rate(
    db: &DatabaseConnection,
    input: OccupancyRateCreate,
) -> Result<OccupancyRateResponse> {
    find_room_type(db, input.room_type_id).await?;
    find_season(db, input.season_id).await?;

    let existing = OccupancyRate::find()
        .filter(occupancy_rate::Column::RoomTypeId.eq(input.room_type_id))
        .filter(occupancy_rate::Column::SeasonId.eq(input.season_id))
        .filter(occupancy_rate::Column::OccupancyType.eq(input.occupancy_type))
        .one(db)
        .await?;
    if existing.is_some() {
        warn!(occupancy_type = ?input.occupancy_type, "{}", DUPLICATE_RATE);
        return Err(CrudError::Conflict(DUPLICATE_RATE.to_string()));
    }

    let rate = occupancy_rate::ActiveModel {
        room_type_id: Set(input.room_type_id),
        season_id: Set(input.season_id),
        occupancy_type: Set(input.occupancy_type),
        rate: Set(input.rate),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(|err| conflict_on_unique(err, DUPLICATE_RATE))?;

    info!(rate_id = rate.id, "Occupancy rate created");
    Ok(OccupancyRateResponse::from(rate))
}

/// Nested-route variant taking room type and season from the path.
pub async fn create_for_room_and_season(
    db: &DatabaseConnection,
    room_type_id: i32,
    season_id: i32,
    input: OccupancyRateInput,
) -> Result<OccupancyRateResponse> {
    create_occupancy_rate(db, input.for_room_and_season(room_type_id, season_id)).await
}
