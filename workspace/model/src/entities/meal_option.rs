use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;

use super::hotel;

/// A board option (breakfast, half board, ...) sold with a stay.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "meal_options")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub hotel_id: i32,
    pub name: String,
    pub description: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub price: Decimal,
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
}

impl Related<hotel::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Hotel.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
