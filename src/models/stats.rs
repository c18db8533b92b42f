// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Footprint statistics over the stored history.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::Activity;
use crate::services::footprint::round_to_cents;

/// Aggregate footprint statistics, rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct FootprintStatistics {
    /// Sum of all stored footprints (kg CO2)
    pub total_footprint: f64,
    /// `total / count`, or 0 when there are no activities
    pub average_footprint: f64,
}

impl FootprintStatistics {
    /// Compute statistics from a set of activities.
    ///
    /// Both figures are derived from the unrounded sum and rounded
    /// independently.
    pub fn from_activities(activities: &[Activity]) -> Self {
        let total: f64 = activities.iter().map(|a| a.carbon_footprint).sum();
        let average = if activities.is_empty() {
            0.0
        } else {
            total / activities.len() as f64
        };

        Self {
            total_footprint: round_to_cents(total),
            average_footprint: round_to_cents(average),
        }
    }
}
