// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod category;
pub mod stats;
pub mod submission;

pub use activity::{Activity, ActivityInput, ActivityView};
pub use category::{CookingType, FoodType, Shopping, TransportType};
pub use stats::FootprintStatistics;
pub use submission::{ActivitySubmission, CreateActivityRequest};
