use model::entities::special_offer;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate, PartialEq)]
pub struct SpecialOfferCreate {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SpecialOfferResponse {
    pub id: i32,
    pub hotel_id: i32,
    pub name: String,
    pub description: Option<String>,
}

impl From<special_offer::Model> for SpecialOfferResponse {
    fn from(model: special_offer::Model) -> Self {
        Self {
            id: model.id,
            hotel_id: model.hotel_id,
            name: model.name,
            description: model.description,
        }
    }
}
