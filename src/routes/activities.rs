// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity submission, history, latest result and deletion.

use crate::error::{AppError, Result};
use crate::models::{ActivityInput, ActivityView, CreateActivityRequest, FootprintStatistics};
use crate::services::footprint::{classify, compute, Assessment};
use crate::time_utils::format_utc_rfc3339;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub const NO_ACTIVITIES_MESSAGE: &str = "No activities found. Please add your first activity.";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/activities", get(get_activities).post(create_activity))
        .route("/api/activities/result", get(get_latest_result))
        .route("/api/activities/{id}", delete(delete_activity))
}

// ─── Submit ──────────────────────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CreatedActivity {
    pub activity: ActivityView,
    pub result: Assessment,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CreateActivityResponse {
    pub success: bool,
    pub data: CreatedActivity,
    pub message: String,
}

/// Record a day's activities and return its footprint with tips.
///
/// Everything that can fail for the caller (validation, tip selection)
/// happens before the single store write.
async fn create_activity(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<CreateActivityRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateActivityResponse>)> {
    let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let input = ActivityInput::try_from(request)?;
    let footprint = compute(&input);
    let result = classify(footprint, state.rng.as_ref()).map_err(anyhow::Error::from)?;

    let activity = state.store.create(input, footprint).await?;

    tracing::debug!(
        activity_id = %activity.id,
        footprint,
        level = ?result.level,
        "Activity recorded"
    );

    Ok((
        StatusCode::CREATED,
        Json(CreateActivityResponse {
            success: true,
            data: CreatedActivity {
                activity: ActivityView::from(&activity),
                result,
            },
            message: "Activity recorded successfully!".to_string(),
        }),
    ))
}

// ─── History ─────────────────────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActivitiesResponse {
    pub success: bool,
    pub count: usize,
    pub statistics: FootprintStatistics,
    /// Newest first
    pub data: Vec<ActivityView>,
}

/// All recorded activities with total and average footprint.
async fn get_activities(State(state): State<Arc<AppState>>) -> Result<Json<ActivitiesResponse>> {
    let activities = state.store.list_all().await?;
    let statistics = FootprintStatistics::from_activities(&activities);

    tracing::debug!(count = activities.len(), "Fetched activities");

    Ok(Json(ActivitiesResponse {
        success: true,
        count: activities.len(),
        statistics,
        data: activities.iter().map(ActivityView::from).collect(),
    }))
}

// ─── Latest Result ───────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LatestResult {
    #[serde(flatten)]
    #[cfg_attr(feature = "binding-generation", ts(flatten))]
    pub assessment: Assessment,
    /// Timestamp of the activity (RFC3339)
    pub last_updated: String,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LatestResultResponse {
    pub success: bool,
    pub data: LatestResult,
}

/// Footprint of the most recent activity with a fresh set of tips.
async fn get_latest_result(
    State(state): State<Arc<AppState>>,
) -> Result<Json<LatestResultResponse>> {
    let latest = state
        .store
        .find_latest()
        .await?
        .ok_or_else(|| AppError::NotFound(NO_ACTIVITIES_MESSAGE.to_string()))?;

    let assessment =
        classify(latest.carbon_footprint, state.rng.as_ref()).map_err(anyhow::Error::from)?;

    Ok(Json(LatestResultResponse {
        success: true,
        data: LatestResult {
            assessment,
            last_updated: format_utc_rfc3339(latest.date),
        },
    }))
}

// ─── Deletion ────────────────────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DeleteActivityResponse {
    pub success: bool,
    pub message: String,
}

/// Delete one activity by ID.
async fn delete_activity(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteActivityResponse>> {
    if !state.store.delete_by_id(&id).await? {
        return Err(AppError::NotFound(format!("Activity {} not found", id)));
    }

    Ok(Json(DeleteActivityResponse {
        success: true,
        message: "Activity deleted successfully".to_string(),
    }))
}
