use model::entities::booking_policy;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request body for attaching a named policy to a hotel
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate, PartialEq)]
pub struct BookingPolicyCreate {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub policy_text: Option<String>,
}

/// Partial update of a booking policy; `policy_text: null` clears the text
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate, PartialEq)]
pub struct BookingPolicyUpdate {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "crate::patch::double_option", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub policy_text: Option<Option<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct BookingPolicyResponse {
    pub id: i32,
    pub hotel_id: i32,
    pub name: String,
    pub policy_text: Option<String>,
}

impl From<booking_policy::Model> for BookingPolicyResponse {
    fn from(model: booking_policy::Model) -> Self {
        Self {
            id: model.id,
            hotel_id: model.hotel_id,
            name: model.name,
            policy_text: model.policy_text,
        }
    }
}
