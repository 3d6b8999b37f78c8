use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;

use super::{group_contract, season};

/// A bundle of dives sold during a season.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "diving_packages")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub season_id: i32,
    pub name: String,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub price: Decimal,
    #[sea_orm(default_value = "0")]
    pub foc_slots: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "season::Entity",
        from = "Column::SeasonId",
        to = "season::Column::Id",
        on_delete = "Cascade"
    )]
    Season,
    #[sea_orm(has_many = "group_contract::Entity")]
    GroupContract,
}

impl Related<season::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Season.def()
    }
}

impl Related<group_contract::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GroupContract.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
