// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity submission payloads and their validation.
//!
//! A submission goes through three stages:
//! 1. [`CreateActivityRequest`]: raw JSON, every field optional
//! 2. [`ActivitySubmission`]: required fields present, quantities coerced
//! 3. [`ActivityInput`]: categories parsed into their closed enums

use crate::error::AppError;
use crate::models::ActivityInput;
use crate::validation::{
    category_label, coerce_quantity, validate_cooking_type, validate_distance_ceiling,
    validate_electricity_ceiling, validate_food_type, validate_shopping, validate_transport_type,
};
use serde::{Deserialize, Deserializer};
use validator::Validate;

pub const MISSING_CATEGORIES_MESSAGE: &str =
    "All categorical fields are required: transportType, cookingType, foodType, shopping";
pub const MISSING_QUANTITIES_MESSAGE: &str = "transportUnitKm and electricityUnitKwh are required";
pub const VALIDATION_FAILED_MESSAGE: &str =
    "Validation failed. Check your data types and enum values.";

/// Request body for `POST /api/activities`.
///
/// Fields are kept as raw JSON so type mismatches surface as validation
/// errors rather than extractor rejections. Quantities distinguish an absent
/// key (`None`) from an explicit `null` (`Some(Value::Null)`).
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateActivityRequest {
    pub transport_type: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "present")]
    pub transport_unit_km: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "present")]
    pub electricity_unit_kwh: Option<serde_json::Value>,
    pub cooking_type: Option<serde_json::Value>,
    pub food_type: Option<serde_json::Value>,
    pub shopping: Option<serde_json::Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<serde_json::Value>, D::Error>
where
    D: Deserializer<'de>,
{
    serde_json::Value::deserialize(deserializer).map(Some)
}

/// A submission with every field present, not yet checked against the
/// categorical domains.
#[derive(Debug, Clone, Validate)]
pub struct ActivitySubmission {
    #[validate(custom(function = "validate_transport_type"))]
    pub transport_type: String,

    #[validate(
        range(min = 0.0, message = "Distance cannot be negative."),
        custom(function = "validate_distance_ceiling")
    )]
    pub transport_unit_km: f64,

    #[validate(
        range(min = 0.0, message = "Electricity usage cannot be negative."),
        custom(function = "validate_electricity_ceiling")
    )]
    pub electricity_unit_kwh: f64,

    #[validate(custom(function = "validate_cooking_type"))]
    pub cooking_type: String,

    #[validate(custom(function = "validate_food_type"))]
    pub food_type: String,

    #[validate(custom(function = "validate_shopping"))]
    pub shopping: String,
}

impl TryFrom<CreateActivityRequest> for ActivitySubmission {
    type Error = AppError;

    /// Presence checks and quantity coercion.
    fn try_from(req: CreateActivityRequest) -> Result<Self, Self::Error> {
        let missing_categories = || AppError::BadRequest(MISSING_CATEGORIES_MESSAGE.to_string());

        let transport_type = category_label(req.transport_type).ok_or_else(missing_categories)?;
        let cooking_type = category_label(req.cooking_type).ok_or_else(missing_categories)?;
        let food_type = category_label(req.food_type).ok_or_else(missing_categories)?;
        let shopping = category_label(req.shopping).ok_or_else(missing_categories)?;

        let (Some(km), Some(kwh)) = (req.transport_unit_km, req.electricity_unit_kwh) else {
            return Err(AppError::BadRequest(MISSING_QUANTITIES_MESSAGE.to_string()));
        };

        Ok(Self {
            transport_type,
            transport_unit_km: coerce_quantity(&km),
            electricity_unit_kwh: coerce_quantity(&kwh),
            cooking_type,
            food_type,
            shopping,
        })
    }
}

impl ActivitySubmission {
    /// Check the submission against the categorical domains and numeric
    /// ranges, collecting every failure.
    pub fn into_input(self) -> Result<ActivityInput, AppError> {
        if let Err(errors) = self.validate() {
            let mut messages: Vec<(String, String)> = errors
                .field_errors()
                .into_iter()
                .flat_map(|(field, errs)| {
                    errs.iter().map(move |e| {
                        let message = e
                            .message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| format!("Invalid value for {}", field));
                        (field.to_string(), message)
                    })
                })
                .collect();
            messages.sort();

            return Err(AppError::Validation {
                message: VALIDATION_FAILED_MESSAGE.to_string(),
                errors: messages.into_iter().map(|(_, m)| m).collect(),
            });
        }

        let invalid = |e: crate::models::category::UnknownCategory| AppError::Validation {
            message: VALIDATION_FAILED_MESSAGE.to_string(),
            errors: vec![e.to_string()],
        };

        Ok(ActivityInput {
            transport_type: self.transport_type.parse().map_err(invalid)?,
            transport_unit_km: self.transport_unit_km,
            electricity_unit_kwh: self.electricity_unit_kwh,
            cooking_type: self.cooking_type.parse().map_err(invalid)?,
            food_type: self.food_type.parse().map_err(invalid)?,
            shopping: self.shopping.parse().map_err(invalid)?,
        })
    }
}

impl TryFrom<CreateActivityRequest> for ActivityInput {
    type Error = AppError;

    fn try_from(req: CreateActivityRequest) -> Result<Self, Self::Error> {
        ActivitySubmission::try_from(req)?.into_input()
    }
}
