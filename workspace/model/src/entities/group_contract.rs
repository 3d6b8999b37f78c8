use chrono::NaiveDate;
use sea_orm::entity::prelude::*;

use super::{diving_package, hotel};

/// A negotiated allotment for a travelling group.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "group_contracts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub hotel_id: i32,
    pub diving_package_id: Option<i32>,
    pub group_name: String,
    pub customer: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub travel_agent: Option<String>,
    /// Reference to the signed contract (number, file name or URL).
    pub contract: String,
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
    #[sea_orm(
        belongs_to = "diving_package::Entity",
        from = "Column::DivingPackageId",
        to = "diving_package::Column::Id",
        on_delete = "SetNull"
    )]
    DivingPackage,
}

impl Related<hotel::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Hotel.def()
    }
}

impl Related<diving_package::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DivingPackage.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
