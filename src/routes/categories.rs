// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Categorical domains and their emission factors, for building the
//! submission form.

use crate::models::category::{CookingType, FoodType, Shopping, TransportType};
use crate::services::footprint::{
    cooking_factor, food_factor, shopping_factor, transport_factor, ELECTRICITY_FACTOR,
};
use crate::AppState;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/categories", get(get_categories))
}

/// One selectable value with its emission factor.
#[derive(Serialize, Debug, Clone)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CategoryOption {
    pub value: &'static str,
    pub factor: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CategoriesResponse {
    pub success: bool,
    /// kg CO2 per km
    pub transport_type: Vec<CategoryOption>,
    /// kg CO2 per kWh
    pub electricity_factor: f64,
    /// kg CO2 per day
    pub cooking_type: Vec<CategoryOption>,
    /// kg CO2 per day
    pub food_type: Vec<CategoryOption>,
    /// kg CO2 per item, weekly average
    pub shopping: Vec<CategoryOption>,
}

fn options<T: Copy>(all: &[T], label: fn(T) -> &'static str, factor: fn(T) -> f64) -> Vec<CategoryOption> {
    all.iter()
        .map(|&c| CategoryOption {
            value: label(c),
            factor: factor(c),
        })
        .collect()
}

async fn get_categories() -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        success: true,
        transport_type: options(TransportType::ALL, TransportType::as_str, transport_factor),
        electricity_factor: ELECTRICITY_FACTOR,
        cooking_type: options(CookingType::ALL, CookingType::as_str, cooking_factor),
        food_type: options(FoodType::ALL, FoodType::as_str, food_factor),
        shopping: options(Shopping::ALL, Shopping::as_str, shopping_factor),
    })
}
