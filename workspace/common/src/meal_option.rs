use model::entities::meal_option;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request body for adding a meal plan to a hotel
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate, PartialEq)]
pub struct MealOptionCreate {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub description: Option<String>,
    /// Price per person per night
    #[validate(custom(function = "crate::validation::validate_amount"))]
    pub price: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct MealOptionResponse {
    pub id: i32,
    pub hotel_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
}

impl From<meal_option::Model> for MealOptionResponse {
    fn from(model: meal_option::Model) -> Self {
        Self {
            id: model.id,
            hotel_id: model.hotel_id,
            name: model.name,
            description: model.description,
            price: model.price,
        }
    }
}
