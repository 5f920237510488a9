// src/validation.rs

use crate::error::{Bound, ValidationError};
use serde_json::Value;

/// Inclusive numeric bounds for a single field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberRange {
    pub min_value: f64,
    pub max_value: f64,
}

impl NumberRange {
    pub const LATITUDE: NumberRange = NumberRange {
        min_value: -90.0,
        max_value: 90.0,
    };

    pub const LONGITUDE: NumberRange = NumberRange {
        min_value: -180.0,
        max_value: 180.0,
    };

    pub fn contains(&self, value: f64) -> bool {
        (self.min_value..=self.max_value).contains(&value)
    }
}

/// Validates that `value` is finite and lies within `range`.
///
/// Non-finite input (NaN, infinity) is reported as a type violation before any
/// bound is checked.
pub fn validate_range(
    field: &str,
    value: f64,
    range: NumberRange,
) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        log::debug!("Rejected {}: {} is not a finite number", field, value);
        return Err(ValidationError::TypeValidation {
            field: field.to_string(),
            value: value.to_string(),
        });
    }

    let bound = if value < range.min_value {
        Bound::Min(range.min_value)
    } else if value > range.max_value {
        Bound::Max(range.max_value)
    } else {
        return Ok(value);
    };

    log::debug!("Rejected {}: {} violates {}", field, value, bound);
    Err(ValidationError::RangeValidation {
        field: field.to_string(),
        value,
        bound,
    })
}

/// Validates a dynamically typed JSON value as a number within `range`.
pub fn validate_number(
    field: &str,
    value: &Value,
    range: NumberRange,
) -> Result<f64, ValidationError> {
    match value.as_f64() {
        Some(number) => validate_range(field, number, range),
        None => {
            log::debug!("Rejected {}: expected a number, got {}", field, value);
            Err(ValidationError::TypeValidation {
                field: field.to_string(),
                value: value.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bounds_are_inclusive() {
        assert_eq!(validate_range("latitude", 90.0, NumberRange::LATITUDE), Ok(90.0));
        assert_eq!(validate_range("latitude", -90.0, NumberRange::LATITUDE), Ok(-90.0));
        assert!(NumberRange::LONGITUDE.contains(-180.0));
        assert!(!NumberRange::LONGITUDE.contains(180.5));
    }

    #[test]
    fn reports_violated_bound() {
        match validate_range("longitude", -180.5, NumberRange::LONGITUDE) {
            Err(ValidationError::RangeValidation { field, value, bound }) => {
                assert_eq!(field, "longitude");
                assert_eq!(value, -180.5);
                assert_eq!(bound, Bound::Min(-180.0));
            }
            other => panic!("Expected a range error, got {:?}", other),
        }

        match validate_range("latitude", 91.0, NumberRange::LATITUDE) {
            Err(ValidationError::RangeValidation { bound, .. }) => {
                assert_eq!(bound, Bound::Max(90.0))
            }
            other => panic!("Expected a range error, got {:?}", other),
        }
    }

    #[test]
    fn non_finite_is_a_type_violation() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = validate_range("latitude", value, NumberRange::LATITUDE).unwrap_err();
            assert!(
                matches!(err, ValidationError::TypeValidation { .. }),
                "{} should be a type error, got {:?}",
                value,
                err
            );
        }
    }

    #[test]
    fn json_non_numbers_are_type_violations() {
        let err = validate_number("latitude", &json!("12.5"), NumberRange::LATITUDE).unwrap_err();
        assert_eq!(
            err,
            ValidationError::TypeValidation {
                field: "latitude".to_string(),
                value: "\"12.5\"".to_string(),
            }
        );
        assert_eq!(
            validate_number("longitude", &json!(-45), NumberRange::LONGITUDE),
            Ok(-45.0)
        );
    }
}
