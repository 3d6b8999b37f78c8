use sea_orm::entity::prelude::*;

use super::hotel;

/// Cancellation, deposit or child policy text published for a hotel.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "booking_policies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub hotel_id: i32,
    pub name: String,
    pub policy_text: Option<String>,
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
