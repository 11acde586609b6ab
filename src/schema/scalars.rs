/// Custom GraphQL scalar types for Date and DateTime
///
/// These scalars handle ISO 8601 formatted date and datetime strings and can be
/// added to a `TypeRegistry` like any other type.

use crate::schema::definition::{ScalarType, TypeDefinition};

use async_graphql::Value;
use chrono::{DateTime as ChronoDateTime, NaiveDate};

pub const DATE: &str = "Date";
pub const DATE_TIME: &str = "DateTime";

/// Custom scalars to register alongside user types
pub fn custom_scalars() -> Vec<TypeDefinition> {
    vec![date_scalar().into(), datetime_scalar().into()]
}

/// Create the Date scalar
pub fn date_scalar() -> ScalarType {
    ScalarType::new(DATE)
        .description("ISO 8601 date format (YYYY-MM-DD)")
        .validator(is_valid_date)
}

/// Create the DateTime scalar
pub fn datetime_scalar() -> ScalarType {
    ScalarType::new(DATE_TIME)
        .description("ISO 8601 datetime format with timezone")
        .specified_by_url("https://datatracker.ietf.org/doc/html/rfc3339")
        .validator(is_valid_datetime)
}

fn is_valid_date(value: &Value) -> bool {
    if let Value::String(s) = value {
        NaiveDate::parse_from_str(s.as_str(), "%Y-%m-%d").is_ok()
    } else {
        false
    }
}

fn is_valid_datetime(value: &Value) -> bool {
    if let Value::String(s) = value {
        ChronoDateTime::parse_from_rfc3339(s.as_str()).is_ok()
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_scalar_names() {
        let scalars = custom_scalars();
        let names: Vec<_> = scalars.iter().map(TypeDefinition::name).collect();
        assert_eq!(names, vec!["Date", "DateTime"]);
    }

    #[test]
    fn test_date_validation() {
        let validator = date_scalar().validator.expect("validator set");

        assert!(validator(&Value::String("2024-01-15".to_string())));
        assert!(!validator(&Value::String("invalid-date".to_string())));
        assert!(!validator(&Value::from(20240115)));
    }

    #[test]
    fn test_datetime_validation() {
        let validator = datetime_scalar().validator.expect("validator set");

        assert!(validator(&Value::String("2024-01-15T10:00:00Z".to_string())));
        assert!(!validator(&Value::String("not-a-datetime".to_string())));
    }
}
