use chrono::NaiveDate;
use sea_orm::entity::prelude::*;

use super::{diving_package, hotel, occupancy_rate};

/// A dated pricing period. Both bounds are inclusive.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "seasons")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub hotel_id: i32,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Free-of-charge room allocation notes, e.g. "1 per 15 paying guests".
    pub hotel_foc_slots: Option<String>,
    pub diving_foc_slots: Option<String>,
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
    #[sea_orm(has_many = "diving_package::Entity")]
    DivingPackage,
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

impl Related<diving_package::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DivingPackage.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
