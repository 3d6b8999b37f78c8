use chrono::{DateTime, Utc};
use model::entities::hotel;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::booking_policy::BookingPolicyResponse;
use crate::group_contract::GroupContractResponse;
use crate::meal_option::MealOptionResponse;
use crate::pagination::Pagination;
use crate::room_type::RoomTypeResponse;
use crate::season::SeasonResponse;
use crate::special_offer::SpecialOfferResponse;

/// Request body for creating a hotel
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate, PartialEq)]
pub struct HotelCreate {
    /// Hotel name (must not already exist)
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    /// Town, island or address
    #[validate(length(min = 1))]
    pub location: String,
    pub description: Option<String>,
    pub contact_info: Option<String>,
    /// Structured amenities, e.g. `["pool", "nitrox"]`
    #[schema(value_type = Option<Object>)]
    pub amenities: Option<Value>,
    pub policies: Option<String>,
    /// Defaults to true
    pub is_active: Option<bool>,
}

/// Request body for a partial hotel update.
///
/// Omitted fields are left unchanged. Nullable fields can be cleared with an
/// explicit `null`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate, PartialEq)]
pub struct HotelUpdate {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[validate(length(min = 1))]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "crate::patch::double_option", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::patch::double_option", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub contact_info: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::patch::double_option", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub amenities: Option<Option<Value>>,
    #[serde(default, deserialize_with = "crate::patch::double_option", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub policies: Option<Option<String>>,
    pub is_active: Option<bool>,
    pub is_deleted: Option<bool>,
}

/// Query parameters for listing hotels
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, ToSchema, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct HotelListQuery {
    /// Number of rows to skip (default: 0)
    pub skip: Option<u64>,
    /// Maximum number of rows to return (default: 100)
    #[validate(range(max = 1000))]
    pub limit: Option<u64>,
    /// Include soft-deleted hotels (default: false)
    pub include_deleted: Option<bool>,
}

impl HotelListQuery {
    pub fn page(&self) -> Pagination {
        Pagination {
            skip: self.skip,
            limit: self.limit,
        }
    }
}

/// Hotel without its children, as returned by listings
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HotelResponse {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub description: Option<String>,
    pub contact_info: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub amenities: Option<Value>,
    pub policies: Option<String>,
    pub is_active: bool,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<hotel::Model> for HotelResponse {
    fn from(model: hotel::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            location: model.location,
            description: model.description,
            contact_info: model.contact_info,
            amenities: model.amenities,
            policies: model.policies,
            is_active: model.is_active,
            is_deleted: model.is_deleted,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Full hotel representation with every owned collection
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HotelDetail {
    #[serde(flatten)]
    pub hotel: HotelResponse,
    pub room_types: Vec<RoomTypeResponse>,
    pub meal_options: Vec<MealOptionResponse>,
    pub special_offers: Vec<SpecialOfferResponse>,
    pub booking_policies: Vec<BookingPolicyResponse>,
    pub group_contracts: Vec<GroupContractResponse>,
    pub seasons: Vec<SeasonResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_distinguishes_clear_from_keep() {
        let update: HotelUpdate = serde_json::from_str(
            r#"{"description": null, "location": "Marsa Alam", "policies": "No pets"}"#,
        )
        .unwrap();

        assert_eq!(update.name, None);
        assert_eq!(update.location.as_deref(), Some("Marsa Alam"));
        assert_eq!(update.description, Some(None));
        assert_eq!(update.contact_info, None);
        assert_eq!(update.policies, Some(Some("No pets".to_string())));
    }

    #[test]
    fn test_update_serializes_only_touched_fields() {
        let update = HotelUpdate {
            description: Some(None),
            is_active: Some(false),
            ..Default::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["description"], Value::Null);
        assert!(json.get("contact_info").is_none());
        assert_eq!(json["is_active"], false);
    }

    #[test]
    fn test_create_requires_name() {
        let create = HotelCreate {
            name: String::new(),
            location: "Dahab".to_string(),
            description: None,
            contact_info: None,
            amenities: None,
            policies: None,
            is_active: None,
        };
        assert!(create.validate().is_err());
    }
}
