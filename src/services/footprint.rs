// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Carbon footprint calculation and classification.
//!
//! The footprint is a weighted linear sum over fixed emission factors:
//!
//! ```text
//! transport_km * transport[type] + electricity_kwh * 0.5
//!     + cooking[type] + food[type] + shopping[type]
//! ```
//!
//! Factor tables are exhaustive matches over the closed category enums, so
//! every category has exactly one coefficient.

use crate::models::category::{CookingType, FoodType, Shopping, TransportType};
use crate::models::ActivityInput;
use crate::services::tips::{select_tips, RandomError, RandomSource};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// kg CO2 per kWh.
pub const ELECTRICITY_FACTOR: f64 = 0.5;

/// Footprints below this are "Low".
const MODERATE_THRESHOLD: f64 = 10.0;
/// Footprints at or above this are "High".
const HIGH_THRESHOLD: f64 = 20.0;

/// kg CO2 per km.
pub fn transport_factor(t: TransportType) -> f64 {
    match t {
        TransportType::None => 0.0,
        TransportType::Car => 0.21,
        TransportType::Bus => 0.09,
        TransportType::Train => 0.04,
        TransportType::Bike => 0.0,
        TransportType::Motorcycle => 0.11,
        TransportType::ElectricCar => 0.05,
    }
}

/// kg CO2 per day (estimated daily usage).
pub fn cooking_factor(c: CookingType) -> f64 {
    match c {
        CookingType::None => 0.0,
        CookingType::Gas => 2.0,
        CookingType::Electric => 1.2,
        CookingType::Induction => 0.4,
    }
}

/// kg CO2 per day (estimated daily consumption).
pub fn food_factor(f: FoodType) -> f64 {
    match f {
        FoodType::None => 0.0,
        FoodType::Chicken => 1.4,
        FoodType::Vegetarian => 0.8,
        FoodType::Vegan => 0.5,
        FoodType::Fish => 1.8,
        FoodType::Pork => 2.0,
    }
}

/// kg CO2 per item (weekly average).
pub fn shopping_factor(s: Shopping) -> f64 {
    match s {
        Shopping::None => 0.0,
        Shopping::Clothes => 15.0,
        Shopping::Electronics => 50.0,
        Shopping::Furniture => 80.0,
        Shopping::Plastic => 2.0,
        Shopping::Groceries => 5.0,
    }
}

/// Round to two decimal places, half away from zero.
///
/// Values too large to scale by 100 are returned unchanged; at that
/// magnitude they have no fractional part to round.
pub fn round_to_cents(value: f64) -> f64 {
    let scaled = value * 100.0;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / 100.0
}

/// Compute the footprint (kg CO2) of an activity, rounded to two decimals.
pub fn compute(input: &ActivityInput) -> f64 {
    let total = input.transport_unit_km * transport_factor(input.transport_type)
        + input.electricity_unit_kwh * ELECTRICITY_FACTOR
        + cooking_factor(input.cooking_type)
        + food_factor(input.food_type)
        + shopping_factor(input.shopping);

    round_to_cents(total)
}

/// Qualitative footprint band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum Level {
    Low,
    Moderate,
    High,
}

impl Level {
    /// Band for a footprint. Each band includes its lower bound.
    pub fn for_footprint(footprint: f64) -> Self {
        if footprint < MODERATE_THRESHOLD {
            Level::Low
        } else if footprint < HIGH_THRESHOLD {
            Level::Moderate
        } else {
            Level::High
        }
    }

    /// Display colour used by the frontend.
    pub fn color(self) -> &'static str {
        match self {
            Level::Low => "green",
            Level::Moderate => "orange",
            Level::High => "red",
        }
    }
}

/// Result of classifying a footprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Assessment {
    pub carbon_footprint: f64,
    pub message: String,
    pub level: Level,
    pub level_color: String,
    pub tips: Vec<String>,
}

/// Human-readable summary of a footprint.
pub fn footprint_message(footprint: f64) -> String {
    format!("Your carbon footprint is {} kg CO₂", footprint)
}

/// Classify a footprint and pick three tips for its band.
pub fn classify<R: RandomSource + ?Sized>(
    footprint: f64,
    rng: &R,
) -> Result<Assessment, RandomError> {
    let level = Level::for_footprint(footprint);
    let tips = select_tips(level, rng)?;

    Ok(Assessment {
        carbon_footprint: footprint,
        message: footprint_message(footprint),
        level,
        level_color: level.color().to_string(),
        tips: tips.iter().map(|t| t.to_string()).collect(),
    })
}
