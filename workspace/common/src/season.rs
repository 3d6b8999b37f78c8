use chrono::NaiveDate;
use model::entities::{diving_package, season};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::validation::validate_date_range;

/// Request body for creating a season under a hotel
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate, PartialEq)]
#[validate(schema(function = "validate_season_dates"))]
pub struct SeasonCreate {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    /// First day of the season (YYYY-MM-DD)
    pub start_date: NaiveDate,
    /// Last day of the season, inclusive (YYYY-MM-DD)
    pub end_date: NaiveDate,
    pub hotel_foc_slots: Option<String>,
    pub diving_foc_slots: Option<String>,
}

fn validate_season_dates(season: &SeasonCreate) -> Result<(), ValidationError> {
    validate_date_range(season.start_date, season.end_date)
}

/// Season with its diving packages
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SeasonResponse {
    pub id: i32,
    pub hotel_id: i32,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub hotel_foc_slots: Option<String>,
    pub diving_foc_slots: Option<String>,
    pub diving_packages: Vec<DivingPackageResponse>,
}

impl From<(season::Model, Vec<diving_package::Model>)> for SeasonResponse {
    fn from((model, packages): (season::Model, Vec<diving_package::Model>)) -> Self {
        Self {
            id: model.id,
            hotel_id: model.hotel_id,
            name: model.name,
            start_date: model.start_date,
            end_date: model.end_date,
            hotel_foc_slots: model.hotel_foc_slots,
            diving_foc_slots: model.diving_foc_slots,
            diving_packages: packages.into_iter().map(DivingPackageResponse::from).collect(),
        }
    }
}

/// Request body for creating a diving package under a season
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate, PartialEq)]
pub struct DivingPackageCreate {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(custom(function = "crate::validation::validate_amount"))]
    pub price: Decimal,
    /// Free-of-charge places included (default: 0)
    #[validate(range(min = 0))]
    pub foc_slots: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DivingPackageResponse {
    pub id: i32,
    pub season_id: i32,
    pub name: String,
    pub price: Decimal,
    pub foc_slots: i32,
}

impl From<diving_package::Model> for DivingPackageResponse {
    fn from(model: diving_package::Model) -> Self {
        Self {
            id: model.id,
            season_id: model.season_id,
            name: model.name,
            price: model.price,
            foc_slots: model.foc_slots,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn season(start: (i32, u32, u32), end: (i32, u32, u32)) -> SeasonCreate {
        SeasonCreate {
            name: "Winter".to_string(),
            start_date: NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
            hotel_foc_slots: None,
            diving_foc_slots: None,
        }
    }

    #[test]
    fn test_inverted_season_rejected() {
        assert!(season((2024, 12, 1), (2025, 2, 28)).validate().is_ok());
        assert!(season((2025, 2, 28), (2024, 12, 1)).validate().is_err());
    }

    #[test]
    fn test_package_price_must_not_be_negative() {
        let package = DivingPackageCreate {
            name: "Night dive".to_string(),
            price: Decimal::new(-1, 0),
            foc_slots: None,
        };
        assert!(package.validate().is_err());
    }
}
