//! Field validators shared by the request shapes.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::borrow::Cow;
use tracing::debug;
use validator::ValidationError;

/// Date format accepted by search filters.
pub const FILTER_DATE_FORMAT: &str = "%Y-%m-%d";

/// Usernames are ASCII letters and digits with at least one letter. A purely
/// numeric name would be read as a user id by `GET /users/{id_or_username}`.
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.chars().all(|c| c.is_ascii_alphanumeric())
        && username.chars().any(|c| c.is_ascii_alphabetic())
    {
        return Ok(());
    }
    let mut err = ValidationError::new("username");
    err.message = Some(Cow::from(
        "Username must contain only letters and digits, including at least one letter",
    ));
    Err(err)
}

/// Prices and rates cannot be negative.
pub fn validate_amount(amount: &Decimal) -> Result<(), ValidationError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        let mut err = ValidationError::new("amount");
        err.message = Some(Cow::from("Amount must not be negative"));
        return Err(err);
    }
    Ok(())
}

/// Checks that an inclusive date range is not inverted.
pub fn validate_date_range(start: NaiveDate, end: NaiveDate) -> Result<(), ValidationError> {
    if start > end {
        let mut err = ValidationError::new("date_range");
        err.message = Some(Cow::from("start_date must not be after end_date"));
        return Err(err);
    }
    Ok(())
}

/// Parses a date used as a search filter. Malformed input disables the
/// filter instead of failing the request.
pub fn parse_filter_date(raw: &str) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(raw.trim(), FILTER_DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(e) => {
            debug!("Ignoring malformed date filter '{}': {}", raw, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_rules() {
        assert!(validate_username("diver1").is_ok());
        assert!(validate_username("Reef42").is_ok());
        assert!(validate_username("").is_err());
        assert!(validate_username("dive master").is_err());
        assert!(validate_username("diver_1").is_err());
        assert!(validate_username("tauchér").is_err());
        assert!(validate_username("1").is_err());
        assert!(validate_username("2024").is_err());
        assert!(validate_username("2024a").is_ok());
    }

    #[test]
    fn test_amount_rules() {
        assert!(validate_amount(&Decimal::new(0, 0)).is_ok());
        assert!(validate_amount(&Decimal::new(12050, 2)).is_ok());
        assert!(validate_amount(&Decimal::new(-1, 2)).is_err());
    }

    #[test]
    fn test_date_range_rules() {
        let a = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let b = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        assert!(validate_date_range(a, b).is_ok());
        assert!(validate_date_range(a, a).is_ok());
        assert!(validate_date_range(b, a).is_err());
    }

    #[test]
    fn test_filter_date_parsing() {
        assert_eq!(
            parse_filter_date("2024-12-22"),
            NaiveDate::from_ymd_opt(2024, 12, 22)
        );
        assert_eq!(parse_filter_date("22/12/2024"), None);
        assert_eq!(parse_filter_date("2024-13-01"), None);
        assert_eq!(parse_filter_date(""), None);
    }
}
