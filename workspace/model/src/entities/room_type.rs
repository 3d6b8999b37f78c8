use sea_orm::entity::prelude::*;

use super::{hotel, occupancy_rate};

/// A category of room offered by a hotel (e.g. "Garden Bungalow").
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "room_types")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub hotel_id: i32,
    pub name: String,
    pub number_of_rooms: Option<i32>,
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "hotel::Entity",
        from = "Column::HotelId",
        to = "hotel::Column::Id",
        on_delete = "Cascade"
    )]
    Hotel,
    #[sea_orm(has_many = "occupancy_rate::Entity")]
    OccupancyRate,
}

impl Related<hotel::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Hotel.def()
    }
}

impl Related<occupancy_rate::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OccupancyRate.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
