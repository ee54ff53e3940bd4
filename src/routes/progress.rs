// ABOUTME: Progress route handlers for body measurement logging and statistics
// ABOUTME: Statistics compare the oldest and newest entries with recorded weights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitSphere

//! Progress tracking routes

use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::{
    constants::limits,
    database_plugins::DatabaseProvider,
    errors::AppError,
    models::ProgressEntry,
    server::ServerResources,
};

/// Progress entry creation request
#[derive(Debug, Default, Deserialize)]
pub struct CreateProgressRequest {
    /// Body weight in kilograms
    pub weight_kg: Option<f64>,
    /// Body fat percentage
    pub body_fat_pct: Option<f64>,
    /// Muscle mass in kilograms
    pub muscle_mass_kg: Option<f64>,
    /// Free-form tape measurements
    pub measurements: Option<serde_json::Value>,
    /// Optional note
    pub notes: Option<String>,
}

/// Single-entry response
#[derive(Debug, Serialize)]
pub struct ProgressEntryResponse {
    /// The created entry
    pub entry: ProgressEntry,
}

/// History response
#[derive(Debug, Serialize)]
pub struct ProgressListResponse {
    /// Entries, newest first
    pub entries: Vec<ProgressEntry>,
    /// Number of entries returned
    pub total: usize,
}

/// One end of the statistics window
#[derive(Debug, Serialize)]
pub struct ProgressStatPoint {
    /// When the entry was recorded
    pub recorded_at: String,
    /// Weight at that point
    pub weight_kg: Option<f64>,
}

impl From<&ProgressEntry> for ProgressStatPoint {
    fn from(entry: &ProgressEntry) -> Self {
        Self {
            recorded_at: entry.recorded_at.to_rfc3339(),
            weight_kg: entry.weight_kg,
        }
    }
}

/// Statistics response
#[derive(Debug, Serialize)]
pub struct ProgressStatsResponse {
    /// Weight delta between the oldest and newest entry, to 0.1 kg
    pub weight_change_kg: f64,
    /// Total entries considered
    pub total_entries: usize,
    /// Oldest entry
    pub first_entry: Option<ProgressStatPoint>,
    /// Newest entry
    pub latest_entry: Option<ProgressStatPoint>,
}

/// Weight delta between the oldest and newest recorded weights, to 0.1 kg
fn weight_change_kg(oldest: Option<f64>, newest: Option<f64>) -> f64 {
    match (oldest, newest) {
        (Some(oldest), Some(newest)) => ((newest - oldest) * 10.0).round() / 10.0,
        _ => 0.0,
    }
}

/// Progress routes handler
pub struct ProgressRoutes;

impl ProgressRoutes {
    /// Create all progress routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/progress", post(Self::handle_create))
            .route("/api/progress", get(Self::handle_list))
            .route("/api/progress/stats", get(Self::handle_stats))
            .with_state(resources)
    }

    /// Handle POST /api/progress
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(request): Json<CreateProgressRequest>,
    ) -> Result<Response, AppError> {
        let auth = resources.auth_manager.authenticate(&headers)?;

        let mut entry = ProgressEntry::new(auth.user_id);
        entry.weight_kg = request.weight_kg;
        entry.body_fat_pct = request.body_fat_pct;
        entry.muscle_mass_kg = request.muscle_mass_kg;
        if let Some(measurements) = request.measurements {
            entry.measurements = measurements;
        }
        entry.notes = request.notes;

        resources.database.create_progress_entry(&entry).await?;

        Ok((StatusCode::CREATED, Json(ProgressEntryResponse { entry })).into_response())
    }

    /// Handle GET /api/progress
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let auth = resources.auth_manager.authenticate(&headers)?;
        let entries = resources
            .database
            .get_progress_entries(auth.user_id, limits::PROGRESS_HISTORY_LIMIT)
            .await?;

        let response = ProgressListResponse {
            total: entries.len(),
            entries,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle GET /api/progress/stats
    async fn handle_stats(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let auth = resources.auth_manager.authenticate(&headers)?;
        let entries = resources
            .database
            .get_progress_entries(auth.user_id, limits::PROGRESS_HISTORY_LIMIT)
            .await?;

        // Entries arrive newest first
        let latest = entries.first();
        let first = entries.last();

        let response = ProgressStatsResponse {
            weight_change_kg: weight_change_kg(
                first.and_then(|e| e.weight_kg),
                latest.and_then(|e| e.weight_kg),
            ),
            total_entries: entries.len(),
            first_entry: first.map(Into::into),
            latest_entry: latest.map(Into::into),
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
