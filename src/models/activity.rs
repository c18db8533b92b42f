// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activity model for storage and API.

use crate::models::category::{CookingType, FoodType, Shopping, TransportType};
use crate::time_utils::format_utc_rfc3339;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A validated submission, ready for the footprint calculator.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ActivityInput {
    pub transport_type: TransportType,
    /// Distance travelled (km)
    pub transport_unit_km: f64,
    /// Electricity consumed (kWh)
    pub electricity_unit_kwh: f64,
    pub cooking_type: CookingType,
    pub food_type: FoodType,
    pub shopping: Shopping,
}

/// Stored activity record.
///
/// Never mutated after creation; `carbon_footprint` is computed once from
/// the same fields at write time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Store-assigned identifier (also used as document ID)
    pub id: String,
    pub transport_type: TransportType,
    pub transport_unit_km: f64,
    pub electricity_unit_kwh: f64,
    pub cooking_type: CookingType,
    pub food_type: FoodType,
    pub shopping: Shopping,
    /// Footprint in kg CO2, rounded to two decimals
    pub carbon_footprint: f64,
    /// Submission time
    #[serde(with = "firestore::serialize_as_timestamp")]
    pub date: DateTime<Utc>,
}

impl Activity {
    pub fn new(id: String, input: ActivityInput, carbon_footprint: f64, date: DateTime<Utc>) -> Self {
        Self {
            id,
            transport_type: input.transport_type,
            transport_unit_km: input.transport_unit_km,
            electricity_unit_kwh: input.electricity_unit_kwh,
            cooking_type: input.cooking_type,
            food_type: input.food_type,
            shopping: input.shopping,
            carbon_footprint,
            date,
        }
    }

    /// The calculator input this record was created from.
    pub fn input(&self) -> ActivityInput {
        ActivityInput {
            transport_type: self.transport_type,
            transport_unit_km: self.transport_unit_km,
            electricity_unit_kwh: self.electricity_unit_kwh,
            cooking_type: self.cooking_type,
            food_type: self.food_type,
            shopping: self.shopping,
        }
    }
}

/// Activity as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActivityView {
    pub id: String,
    pub transport_type: TransportType,
    pub transport_unit_km: f64,
    pub electricity_unit_kwh: f64,
    pub cooking_type: CookingType,
    pub food_type: FoodType,
    pub shopping: Shopping,
    pub carbon_footprint: f64,
    /// RFC3339 UTC timestamp
    pub date: String,
}

impl From<&Activity> for ActivityView {
    fn from(a: &Activity) -> Self {
        Self {
            id: a.id.clone(),
            transport_type: a.transport_type,
            transport_unit_km: a.transport_unit_km,
            electricity_unit_kwh: a.electricity_unit_kwh,
            cooking_type: a.cooking_type,
            food_type: a.food_type,
            shopping: a.shopping,
            carbon_footprint: a.carbon_footprint,
            date: format_utc_rfc3339(a.date),
        }
    }
}
