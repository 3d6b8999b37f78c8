use sea_orm::entity::prelude::*;

/// A property (hotel or dive resort) and the root of all pricing data.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "hotels")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Display name. Uniqueness is checked when a hotel is created.
    pub name: String,
    pub location: String,
    pub description: Option<String>,
    pub contact_info: Option<String>,
    /// Free-form structured list of amenities (pool, dive center, ...).
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub amenities: Option<Json>,
    pub policies: Option<String>,
    #[sea_orm(default_value = "true")]
    pub is_active: bool,
    /// Hotels are never removed, only flagged.
    #[sea_orm(default_value = "false")]
    pub is_deleted: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::room_type::Entity")]
    RoomType,
    #[sea_orm(has_many = "super::meal_option::Entity")]
    MealOption,
    #[sea_orm(has_many = "super::special_offer::Entity")]
    SpecialOffer,
    #[sea_orm(has_many = "super::booking_policy::Entity")]
    BookingPolicy,
    #[sea_orm(has_many = "super::season::Entity")]
    Season,
    #[sea_orm(has_many = "super::group_contract::Entity")]
    GroupContract,
}

impl Related<super::room_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoomType.def()
    }
}

impl Related<super::meal_option::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MealOption.def()
    }
}

impl Related<super::special_offer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SpecialOffer.def()
    }
}

impl Related<super::booking_policy::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BookingPolicy.def()
    }
}

impl Related<super::season::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Season.def()
    }
}

impl Related<super::group_contract::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GroupContract.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
