use model::entities::{occupancy_rate, prelude::OccupancyRate};
use sea_orm_migration::prelude::*;

use crate::entity_iden::EntityIden;

const INDEX_NAME: &str = "ux_occupancy_rates_room_type_season_type";

/// One rate per occupancy category for a given room type and season.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name(INDEX_NAME)
                    .table(OccupancyRate::table())
                    .col(OccupancyRate::column(occupancy_rate::Column::RoomTypeId))
                    .col(OccupancyRate::column(occupancy_rate::Column::SeasonId))
                    .col(OccupancyRate::column(occupancy_rate::Column::OccupancyType))
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(INDEX_NAME)
                    .table(OccupancyRate::table())
                    .to_owned(),
            )
            .await
    }
}
