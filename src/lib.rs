// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Carbon Tracker: daily activity carbon footprint API
//!
//! This crate provides the backend API that estimates the CO2 footprint of
//! a day's activities, suggests eco tips, and keeps a history of
//! submissions.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;
pub mod validation;

use config::Config;
use db::ActivityStore;
use services::RandomSource;
use std::sync::Arc;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: ActivityStore,
    /// Randomness for tip selection
    pub rng: Arc<dyn RandomSource>,
}
