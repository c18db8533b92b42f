// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity storage (Firestore or in-memory).

pub mod firestore;
pub mod memory;

pub use firestore::FirestoreDb;
pub use memory::MemoryDb;

use crate::config::{Config, StoreBackend};
use crate::error::AppError;
use crate::models::{Activity, ActivityInput};
use chrono::{SubsecRound, Utc};
use ring::rand::{SecureRandom, SystemRandom};

/// Collection names as constants.
pub mod collections {
    pub const ACTIVITIES: &str = "activities";
}

/// Generate a new opaque record identifier (32 hex chars).
pub fn new_activity_id() -> Result<String, AppError> {
    let mut bytes = [0u8; 16];
    SystemRandom::new()
        .fill(&mut bytes)
        .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to generate activity ID")))?;
    Ok(hex::encode(bytes))
}

/// Activity store used by the HTTP layer.
///
/// Records are created once and never updated; the store assigns the
/// identifier and timestamp.
#[derive(Clone)]
pub enum ActivityStore {
    Firestore(FirestoreDb),
    Memory(MemoryDb),
}

impl ActivityStore {
    /// Open the backend selected in the configuration.
    pub async fn connect(config: &Config) -> Result<Self, AppError> {
        match config.store_backend {
            StoreBackend::Firestore => Ok(Self::Firestore(
                FirestoreDb::new(&config.gcp_project_id).await?,
            )),
            StoreBackend::Memory => {
                tracing::info!("Using in-memory activity store");
                Ok(Self::Memory(MemoryDb::new()))
            }
        }
    }

    /// Persist a new activity with its computed footprint.
    pub async fn create(
        &self,
        input: ActivityInput,
        carbon_footprint: f64,
    ) -> Result<Activity, AppError> {
        // Firestore keeps microseconds; truncate so the returned record
        // matches what a later read yields.
        let date = Utc::now().trunc_subsecs(6);
        let activity = Activity::new(new_activity_id()?, input, carbon_footprint, date);

        match self {
            Self::Firestore(db) => db.insert_activity(&activity).await?,
            Self::Memory(db) => db.insert_activity(&activity),
        }

        tracing::info!(
            activity_id = %activity.id,
            carbon_footprint,
            "Activity stored"
        );
        Ok(activity)
    }

    /// All activities, newest first.
    pub async fn list_all(&self) -> Result<Vec<Activity>, AppError> {
        match self {
            Self::Firestore(db) => db.list_activities().await,
            Self::Memory(db) => Ok(db.list_activities()),
        }
    }

    /// The most recent activity, if any.
    pub async fn find_latest(&self) -> Result<Option<Activity>, AppError> {
        match self {
            Self::Firestore(db) => db.latest_activity().await,
            Self::Memory(db) => Ok(db.latest_activity()),
        }
    }

    /// Delete an activity. Returns `false` if no such activity exists.
    pub async fn delete_by_id(&self, id: &str) -> Result<bool, AppError> {
        let deleted = match self {
            Self::Firestore(db) => db.delete_activity(id).await?,
            Self::Memory(db) => db.delete_activity(id),
        };

        if deleted {
            tracing::info!(activity_id = id, "Activity deleted");
        }
        Ok(deleted)
    }
}
