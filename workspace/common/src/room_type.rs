use model::entities::{occupancy_rate, occupancy_rate::OccupancyType, room_type};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request body for creating a room type under a hotel
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate, PartialEq)]
pub struct RoomTypeCreate {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(range(min = 0))]
    pub number_of_rooms: Option<i32>,
    pub description: Option<String>,
}

/// Room type with its occupancy rates
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RoomTypeResponse {
    pub id: i32,
    pub hotel_id: i32,
    pub name: String,
    pub number_of_rooms: Option<i32>,
    pub description: Option<String>,
    pub occupancy_rates: Vec<OccupancyRateResponse>,
}

impl From<(room_type::Model, Vec<occupancy_rate::Model>)> for RoomTypeResponse {
    fn from((model, rates): (room_type::Model, Vec<occupancy_rate::Model>)) -> Self {
        Self {
            id: model.id,
            hotel_id: model.hotel_id,
            name: model.name,
            number_of_rooms: model.number_of_rooms,
            description: model.description,
            occupancy_rates: rates.into_iter().map(OccupancyRateResponse::from).collect(),
        }
    }
}

/// Request body for `POST /occupancy_rates`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate, PartialEq)]
pub struct OccupancyRateCreate {
    pub room_type_id: i32,
    pub season_id: i32,
    /// One of `single`, `double`, `triple`, `quadruple`
    #[schema(value_type = String, example = "double")]
    pub occupancy_type: OccupancyType,
    #[validate(custom(function = "crate::validation::validate_amount"))]
    pub rate: Decimal,
}

/// Request body for creating a rate under `/room_types/{id}/seasons/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate, PartialEq)]
pub struct OccupancyRateInput {
    #[schema(value_type = String, example = "double")]
    pub occupancy_type: OccupancyType,
    #[validate(custom(function = "crate::validation::validate_amount"))]
    pub rate: Decimal,
}

impl OccupancyRateInput {
    pub fn for_room_and_season(self, room_type_id: i32, season_id: i32) -> OccupancyRateCreate {
        OccupancyRateCreate {
            room_type_id,
            season_id,
            occupancy_type: self.occupancy_type,
            rate: self.rate,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct OccupancyRateResponse {
    pub id: i32,
    pub room_type_id: i32,
    pub season_id: i32,
    #[schema(value_type = String, example = "double")]
    pub occupancy_type: OccupancyType,
    pub rate: Decimal,
}

impl From<occupancy_rate::Model> for OccupancyRateResponse {
    fn from(model: occupancy_rate::Model) -> Self {
        Self {
            id: model.id,
            room_type_id: model.room_type_id,
            season_id: model.season_id,
            occupancy_type: model.occupancy_type,
            rate: model.rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occupancy_type_uses_lowercase_names() {
        let input: OccupancyRateInput =
            serde_json::from_str(r#"{"occupancy_type": "triple", "rate": 150.5}"#).unwrap();
        assert_eq!(input.occupancy_type, OccupancyType::Triple);
        assert_eq!(input.rate, Decimal::new(1505, 1));

        let unknown = serde_json::from_str::<OccupancyRateInput>(
            r#"{"occupancy_type": "sextuple", "rate": 1}"#,
        );
        assert!(unknown.is_err());
    }

    #[test]
    fn test_negative_rate_rejected() {
        let input = OccupancyRateInput {
            occupancy_type: OccupancyType::Single,
            rate: Decimal::new(-100, 2),
        };
        assert!(input.validate().is_err());
    }
}
