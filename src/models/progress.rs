// ABOUTME: Body measurement progress entries logged by users over time
// ABOUTME: Entries are append-only; statistics compare the oldest and newest
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitSphere

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single logged body measurement entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressEntry {
    /// Unique entry identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Body weight in kilograms
    pub weight_kg: Option<f64>,
    /// Body fat percentage
    pub body_fat_pct: Option<f64>,
    /// Muscle mass in kilograms
    pub muscle_mass_kg: Option<f64>,
    /// Free-form tape measurements, e.g. {"waist_cm": 82.5}
    pub measurements: serde_json::Value,
    /// Optional note
    pub notes: Option<String>,
    /// When the entry was recorded
    pub recorded_at: DateTime<Utc>,
}

impl ProgressEntry {
    /// Create an entry recorded now for a user
    #[must_use]
    pub fn new(user_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            weight_kg: None,
            body_fat_pct: None,
            muscle_mass_kg: None,
            measurements: serde_json::Value::Object(serde_json::Map::new()),
            notes: None,
            recorded_at: Utc::now(),
        }
    }
}
