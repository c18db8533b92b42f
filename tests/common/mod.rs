// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use carbon_tracker::config::Config;
use carbon_tracker::db::{ActivityStore, FirestoreDb, MemoryDb};
use carbon_tracker::routes::create_router;
use carbon_tracker::services::SystemRandomSource;
use carbon_tracker::AppState;
use std::sync::Arc;
use tower::ServiceExt;

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Create a test database connection.
#[allow(dead_code)]
pub async fn test_db() -> FirestoreDb {
    FirestoreDb::new("test-project")
        .await
        .expect("Failed to connect to Firestore emulator")
}

fn app_with_store(store: ActivityStore) -> (Router, Arc<AppState>) {
    let state = Arc::new(AppState {
        config: Config::test_default(),
        store,
        rng: Arc::new(SystemRandomSource::new()),
    });

    (create_router(state.clone()), state)
}

/// Create a test app backed by an empty in-memory store.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (Router, Arc<AppState>) {
    app_with_store(ActivityStore::Memory(MemoryDb::new()))
}

/// Create a test app whose store is disconnected; every store call fails.
#[allow(dead_code)]
pub fn create_offline_test_app() -> (Router, Arc<AppState>) {
    app_with_store(ActivityStore::Firestore(FirestoreDb::new_mock()))
}

/// Send a request and decode the JSON response.
#[allow(dead_code)]
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();
    let json = if body.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null)
    };

    (status, json)
}

/// The reference day: 13.0 kg CO2.
#[allow(dead_code)]
pub fn reference_day() -> serde_json::Value {
    serde_json::json!({
        "transportType": "Car",
        "transportUnitKm": 10,
        "electricityUnitKwh": 5,
        "cookingType": "Gas",
        "foodType": "Chicken",
        "shopping": "Groceries"
    })
}

/// A day with nothing but electricity use.
#[allow(dead_code)]
pub fn electricity_day(kwh: f64) -> serde_json::Value {
    serde_json::json!({
        "transportType": "None",
        "transportUnitKm": 0,
        "electricityUnitKwh": kwh,
        "cookingType": "None",
        "foodType": "None",
        "shopping": "None"
    })
}
