use chrono::NaiveDate;
use model::entities::group_contract;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use crate::pagination::Pagination;
use crate::validation::{parse_filter_date, validate_date_range};

/// Default page size for contract searches
pub const CONTRACT_DEFAULT_LIMIT: u64 = 10;

/// Request body for registering a group contract with a hotel
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate, PartialEq)]
#[validate(schema(function = "validate_contract_dates"))]
pub struct GroupContractCreate {
    #[validate(length(min = 1, max = 200))]
    pub group_name: String,
    #[validate(length(min = 1, max = 200))]
    pub customer: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub travel_agent: Option<String>,
    /// Contract reference or terms
    #[validate(length(min = 1))]
    pub contract: String,
    /// Diving package booked by the group, if any
    pub diving_package_id: Option<i32>,
}

fn validate_contract_dates(contract: &GroupContractCreate) -> Result<(), ValidationError> {
    validate_date_range(contract.start_date, contract.end_date)
}

/// Partial update of a contract. Dates are checked against the stored
/// values once merged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate, PartialEq)]
pub struct GroupContractUpdate {
    #[validate(length(min = 1, max = 200))]
    pub group_name: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub customer: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "crate::patch::double_option", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub travel_agent: Option<Option<String>>,
    #[validate(length(min = 1))]
    pub contract: Option<String>,
    #[serde(default, deserialize_with = "crate::patch::double_option", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<i32>)]
    pub diving_package_id: Option<Option<i32>>,
}

/// Search filters for group contracts.
///
/// Text filters match case-insensitive substrings. `start_date` must be
/// `YYYY-MM-DD`; anything else is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct GroupContractFilter {
    pub hotel_id: Option<i32>,
    pub group_name: Option<String>,
    pub customer: Option<String>,
    pub travel_agent: Option<String>,
    /// Exact start date (YYYY-MM-DD)
    pub start_date: Option<String>,
    /// Number of rows to skip (default: 0)
    pub skip: Option<u64>,
    /// Maximum number of rows to return (default: 10)
    #[validate(range(max = 1000))]
    pub limit: Option<u64>,
}

impl GroupContractFilter {
    /// Start date filter, or None when absent or malformed.
    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date.as_deref().and_then(parse_filter_date)
    }

    pub fn page(&self) -> Pagination {
        Pagination {
            skip: self.skip,
            limit: self.limit,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GroupContractResponse {
    pub id: i32,
    pub hotel_id: i32,
    pub diving_package_id: Option<i32>,
    pub group_name: String,
    pub customer: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub travel_agent: Option<String>,
    pub contract: String,
}

impl From<group_contract::Model> for GroupContractResponse {
    fn from(model: group_contract::Model) -> Self {
        Self {
            id: model.id,
            hotel_id: model.hotel_id,
            diving_package_id: model.diving_package_id,
            group_name: model.group_name,
            customer: model.customer,
            start_date: model.start_date,
            end_date: model.end_date,
            travel_agent: model.travel_agent,
            contract: model.contract,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_ignores_malformed_start_date() {
        let filter = GroupContractFilter {
            start_date: Some("22/12/2024".to_string()),
            ..Default::default()
        };
        assert_eq!(filter.start_date(), None);

        let filter = GroupContractFilter {
            start_date: Some("2024-12-22".to_string()),
            ..Default::default()
        };
        assert_eq!(filter.start_date(), NaiveDate::from_ymd_opt(2024, 12, 22));
    }

    #[test]
    fn test_contract_page_defaults() {
        let page = GroupContractFilter::default().page();
        assert_eq!(page.offset(), 0);
        assert_eq!(page.limit_or(CONTRACT_DEFAULT_LIMIT), 10);
    }

    #[test]
    fn test_update_can_detach_package() {
        let update: GroupContractUpdate =
            serde_json::from_str(r#"{"diving_package_id": null}"#).unwrap();
        assert_eq!(update.diving_package_id, Some(None));
        assert_eq!(update.travel_agent, None);
    }
}
