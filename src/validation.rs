// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Field validators and input coercion for activity submissions.

use crate::models::category::{CookingType, FoodType, Shopping, TransportType};
use std::str::FromStr;
use validator::ValidationError;

fn validate_category<T: FromStr>(value: &str, code: &'static str) -> Result<(), ValidationError> {
    if value.parse::<T>().is_ok() {
        return Ok(());
    }
    let mut error = ValidationError::new(code);
    error.message = Some(format!("'{}' is not a valid {}", value, code).into());
    Err(error)
}

/// Validates that a transport label belongs to [`TransportType`]
pub fn validate_transport_type(value: &str) -> Result<(), ValidationError> {
    validate_category::<TransportType>(value, "transport type")
}

/// Validates that a cooking label belongs to [`CookingType`]
pub fn validate_cooking_type(value: &str) -> Result<(), ValidationError> {
    validate_category::<CookingType>(value, "cooking type")
}

/// Validates that a food label belongs to [`FoodType`]
///
/// "Beef" has no emission factor and gets its own message.
pub fn validate_food_type(value: &str) -> Result<(), ValidationError> {
    if value == "Beef" {
        let mut error = ValidationError::new("unsupported_food_type");
        error.message = Some("'Beef' has no emission factor and cannot be recorded".into());
        return Err(error);
    }
    validate_category::<FoodType>(value, "food type")
}

/// Validates that a shopping label belongs to [`Shopping`]
pub fn validate_shopping(value: &str) -> Result<(), ValidationError> {
    validate_category::<Shopping>(value, "shopping category")
}

/// Largest accepted distance (km) or electricity usage (kWh) for one day.
pub const MAX_QUANTITY: f64 = 1_000_000.0;

/// Longest quantity string that is parsed at all; longer strings are 0.
pub const MAX_QUANTITY_STRING_LEN: usize = 64;

fn validate_ceiling(value: f64, code: &'static str, message: String) -> Result<(), ValidationError> {
    if value <= MAX_QUANTITY {
        return Ok(());
    }
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    Err(error)
}

/// Validates that a distance is at most [`MAX_QUANTITY`] km
pub fn validate_distance_ceiling(value: impl std::borrow::Borrow<f64>) -> Result<(), ValidationError> {
    validate_ceiling(
        *value.borrow(),
        "distance_too_large",
        format!("Distance cannot exceed {} km.", MAX_QUANTITY),
    )
}

/// Validates that electricity usage is at most [`MAX_QUANTITY`] kWh
pub fn validate_electricity_ceiling(value: impl std::borrow::Borrow<f64>) -> Result<(), ValidationError> {
    validate_ceiling(
        *value.borrow(),
        "electricity_too_large",
        format!("Electricity usage cannot exceed {} kWh.", MAX_QUANTITY),
    )
}

/// Label of a submitted categorical field.
///
/// Absent, `null` and `""` are missing. Strings are taken as-is; any other
/// JSON value becomes its JSON text, which no category matches.
pub fn category_label(value: Option<serde_json::Value>) -> Option<String> {
    match value? {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) if s.is_empty() => None,
        serde_json::Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

/// Coerce a submitted quantity to a number.
///
/// Numbers are taken as-is; strings are parsed from their longest numeric
/// prefix (`"12.5km"` is 12.5). Anything unparseable or non-finite is 0,
/// as is `null`.
pub fn coerce_quantity(value: &serde_json::Value) -> f64 {
    let parsed = match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) if s.len() <= MAX_QUANTITY_STRING_LEN => {
            parse_leading_float(s)
        }
        _ => None,
    };
    parsed.filter(|v| v.is_finite()).unwrap_or(0.0)
}

fn parse_leading_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let len = leading_float_len(s.as_bytes());
    if len == 0 {
        return None;
    }
    // The prefix is all ASCII, so `len` is a char boundary.
    s[..len].parse().ok()
}

/// Length of the longest prefix of the form
/// `[+-] digits [. digits] [(e|E) [+-] digits]` with at least one mantissa
/// digit, or 0 if there is none.
fn leading_float_len(b: &[u8]) -> usize {
    let digits_from = |mut i: usize| {
        while b.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        i
    };

    let mut i = usize::from(matches!(b.first(), Some(b'+' | b'-')));
    let int_end = digits_from(i);
    let mut mantissa_digits = int_end - i;
    i = int_end;

    if b.get(i) == Some(&b'.') {
        let frac_end = digits_from(i + 1);
        mantissa_digits += frac_end - (i + 1);
        if mantissa_digits > 0 {
            i = frac_end;
        }
    }
    if mantissa_digits == 0 {
        return 0;
    }

    if matches!(b.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(b.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_end = digits_from(j);
        if exp_end > j {
            i = exp_end;
        }
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_validators() {
        assert!(validate_transport_type("Electric Car").is_ok());
        assert!(validate_transport_type("Rocket").is_err());
        assert!(validate_cooking_type("Induction").is_ok());
        assert!(validate_shopping("Groceries").is_ok());
        assert!(validate_shopping("groceries").is_err());
    }

    #[test]
    fn test_beef_is_rejected_with_explanation() {
        let err = validate_food_type("Beef").unwrap_err();
        assert_eq!(err.code, "unsupported_food_type");
        assert!(err.message.unwrap().contains("no emission factor"));
    }

    #[test]
    fn test_unknown_value_message_names_the_value() {
        let err = validate_cooking_type("Campfire").unwrap_err();
        assert_eq!(
            err.message.unwrap(),
            "'Campfire' is not a valid cooking type"
        );
    }

    #[test]
    fn test_coerce_numbers_and_strings() {
        assert_eq!(coerce_quantity(&json!(12.5)), 12.5);
        assert_eq!(coerce_quantity(&json!(7)), 7.0);
        assert_eq!(coerce_quantity(&json!("3.25")), 3.25);
        assert_eq!(coerce_quantity(&json!("  42km")), 42.0);
        assert_eq!(coerce_quantity(&json!("-4")), -4.0);
    }

    #[test]
    fn test_coerce_falls_back_to_zero() {
        assert_eq!(coerce_quantity(&json!("")), 0.0);
        assert_eq!(coerce_quantity(&json!("abc")), 0.0);
        assert_eq!(coerce_quantity(&json!("NaN")), 0.0);
        assert_eq!(coerce_quantity(&json!(true)), 0.0);
        assert_eq!(coerce_quantity(&json!(null)), 0.0);
        assert_eq!(coerce_quantity(&json!([1, 2])), 0.0);
        assert_eq!(coerce_quantity(&json!(".")), 0.0);
        assert_eq!(coerce_quantity(&json!("-")), 0.0);
        assert_eq!(coerce_quantity(&json!("e5")), 0.0);
        assert_eq!(coerce_quantity(&json!("1e999")), 0.0);
    }

    #[test]
    fn test_coerce_numeric_prefix_forms() {
        assert_eq!(coerce_quantity(&json!("1e5x")), 100000.0);
        assert_eq!(coerce_quantity(&json!("1e")), 1.0);
        assert_eq!(coerce_quantity(&json!("2E-1kWh")), 0.2);
        assert_eq!(coerce_quantity(&json!(".5")), 0.5);
        assert_eq!(coerce_quantity(&json!("5.")), 5.0);
        assert_eq!(coerce_quantity(&json!("-.5e1")), -5.0);
        assert_eq!(coerce_quantity(&json!("+3")), 3.0);
        assert_eq!(coerce_quantity(&json!("1.2.3")), 1.2);
        assert_eq!(coerce_quantity(&json!("7€")), 7.0);
    }

    #[test]
    fn test_long_quantity_strings_are_zero() {
        let at_limit = format!("{}x", "1".repeat(MAX_QUANTITY_STRING_LEN - 1));
        assert!(coerce_quantity(&json!(at_limit)) > 0.0);

        let n = 500_000;
        let long = format!("{}{}", "1".repeat(n), "x".repeat(n));
        assert_eq!(coerce_quantity(&json!(long)), 0.0);
    }

    #[test]
    fn test_leading_float_len() {
        assert_eq!(leading_float_len(b"12.5km"), 4);
        assert_eq!(leading_float_len(b"-.5e+3x"), 6);
        assert_eq!(leading_float_len(b"3e+"), 1);
        assert_eq!(leading_float_len(b"+."), 0);

        let digits = "9".repeat(100_000);
        assert_eq!(leading_float_len(digits.as_bytes()), 100_000);
    }

    #[test]
    fn test_quantity_ceiling() {
        assert!(validate_distance_ceiling(&MAX_QUANTITY).is_ok());
        assert!(validate_electricity_ceiling(&0.0).is_ok());

        let err = validate_distance_ceiling(&1e307).unwrap_err();
        assert_eq!(err.message.unwrap(), "Distance cannot exceed 1000000 km.");
        assert!(validate_electricity_ceiling(&f64::MAX).is_err());
    }

    #[test]
    fn test_category_label() {
        assert_eq!(category_label(None), None);
        assert_eq!(category_label(Some(json!(null))), None);
        assert_eq!(category_label(Some(json!(""))), None);
        assert_eq!(category_label(Some(json!("Car"))), Some("Car".to_string()));
        assert_eq!(category_label(Some(json!(5))), Some("5".to_string()));
        assert_eq!(category_label(Some(json!(false))), Some("false".to_string()));
    }
}
