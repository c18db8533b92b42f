// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-process activity store.
//!
//! Used for local development and offline tests. Contents are lost when the
//! process exits.

use crate::models::Activity;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Activity store backed by a concurrent map.
///
/// Each record carries an insertion sequence number that breaks ties
/// between records with identical timestamps.
#[derive(Clone, Default)]
pub struct MemoryDb {
    activities: Arc<DashMap<String, (u64, Activity)>>,
    next_seq: Arc<AtomicU64>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_activity(&self, activity: &Activity) {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        self.activities
            .insert(activity.id.clone(), (seq, activity.clone()));
    }

    /// All activities, newest first.
    pub fn list_activities(&self) -> Vec<Activity> {
        let mut entries: Vec<(u64, Activity)> = self
            .activities
            .iter()
            .map(|entry| entry.value().clone())
            .collect();

        entries.sort_by(|(seq_a, a), (seq_b, b)| b.date.cmp(&a.date).then(seq_b.cmp(seq_a)));
        entries.into_iter().map(|(_, a)| a).collect()
    }

    pub fn latest_activity(&self) -> Option<Activity> {
        self.activities
            .iter()
            .max_by(|x, y| {
                let (seq_x, x) = x.value();
                let (seq_y, y) = y.value();
                x.date.cmp(&y.date).then(seq_x.cmp(seq_y))
            })
            .map(|entry| entry.value().1.clone())
    }

    /// Returns `true` if the activity existed.
    pub fn delete_activity(&self, id: &str) -> bool {
        self.activities.remove(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActivityInput;
    use chrono::{Duration, TimeZone, Utc};

    fn activity_at(id: &str, hour: u32) -> Activity {
        let date = Utc.with_ymd_and_hms(2025, 3, 1, hour, 0, 0).unwrap();
        Activity::new(id.to_string(), ActivityInput::default(), 1.0, date)
    }

    #[test]
    fn test_list_sorted_by_date_not_insertion() {
        let db = MemoryDb::new();
        db.insert_activity(&activity_at("noon", 12));
        db.insert_activity(&activity_at("morning", 8));
        db.insert_activity(&activity_at("evening", 20));

        let ids: Vec<String> = db.list_activities().into_iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["evening", "noon", "morning"]);
        assert_eq!(db.latest_activity().unwrap().id, "evening");
    }

    #[test]
    fn test_same_timestamp_newest_insert_first() {
        let db = MemoryDb::new();
        let date = Utc::now();
        for id in ["a", "b", "c"] {
            db.insert_activity(&Activity::new(id.to_string(), ActivityInput::default(), 0.0, date));
        }

        let ids: Vec<String> = db.list_activities().into_iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["c", "b", "a"]);
        assert_eq!(db.latest_activity().unwrap().id, "c");
    }

    #[test]
    fn test_delete_missing_returns_false() {
        let db = MemoryDb::new();
        db.insert_activity(&activity_at("x", 1));

        assert!(!db.delete_activity("y"));
        assert!(db.delete_activity("x"));
        assert!(db.is_empty());
    }

    #[test]
    fn test_clones_share_storage() {
        let db = MemoryDb::new();
        let other = db.clone();
        db.insert_activity(&activity_at("x", 1));
        assert_eq!(other.len(), 1);

        let earlier = Activity::new(
            "y".to_string(),
            ActivityInput::default(),
            0.0,
            Utc::now() - Duration::days(1),
        );
        other.insert_activity(&earlier);
        assert_eq!(db.len(), 2);
    }
}
