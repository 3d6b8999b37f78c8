use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::{room_type, season};

/// Number of guests sharing a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum OccupancyType {
    #[sea_orm(string_value = "single")]
    Single,
    #[sea_orm(string_value = "double")]
    Double,
    #[sea_orm(string_value = "triple")]
    Triple,
    #[sea_orm(string_value = "quadruple")]
    Quadruple,
}

/// Price of a room type during a season for one occupancy category.
/// At most one row exists per (room type, season, occupancy type).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "occupancy_rates")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub room_type_id: i32,
    pub season_id: i32,
    pub occupancy_type: OccupancyType,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub rate: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "room_type::Entity",
        from = "Column::RoomTypeId",
        to = "room_type::Column::Id",
        on_delete = "Cascade"
    )]
    RoomType,
    #[sea_orm(
        belongs_to = "season::Entity",
        from = "Column::SeasonId",
        to = "season::Column::Id",
        on_delete = "Cascade"
    )]
    Season,
}

impl Related<room_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoomType.def()
    }
}

impl Related<season::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Season.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
