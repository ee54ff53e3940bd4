// ABOUTME: Workout route handlers for generation, history, and completion
// ABOUTME: Completion drives the gamification ledger with a bounded CAS retry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitSphere

//! Workout routes

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    constants::{gamification, workout as workout_constants},
    database_plugins::DatabaseProvider,
    errors::AppError,
    intelligence::{apply_workout_completion, generate_workout, GamificationState, LedgerOutcome},
    models::{Workout, WorkoutVenue},
    server::ServerResources,
};

/// Workout generation request
#[derive(Debug, Default, Deserialize)]
pub struct GenerateWorkoutRequest {
    /// Venue, defaults to home
    pub venue: Option<WorkoutVenue>,
    /// Session length in minutes; falls back to the profile default
    pub time_available_minutes: Option<i64>,
}

/// Single-workout response
#[derive(Debug, Serialize)]
pub struct WorkoutResponse {
    /// The workout
    pub workout: Workout,
}

/// Workout history response
#[derive(Debug, Serialize)]
pub struct WorkoutListResponse {
    /// Workouts, newest first
    pub workouts: Vec<Workout>,
    /// Number of workouts returned
    pub total: usize,
}

/// Completion response with the ledger results
#[derive(Debug, Serialize)]
pub struct CompleteWorkoutResponse {
    /// The completed workout
    pub workout: Workout,
    /// XP earned by this completion
    pub xp_gained: i64,
    /// Streak after this completion
    pub streak: i64,
}

/// Workout routes handler
pub struct WorkoutRoutes;

impl WorkoutRoutes {
    /// Create all workout routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/workouts/generate", post(Self::handle_generate))
            .route("/api/workouts", get(Self::handle_list))
            .route("/api/workouts/:id/complete", put(Self::handle_complete))
            .with_state(resources)
    }

    /// Handle POST /api/workouts/generate
    async fn handle_generate(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(request): Json<GenerateWorkoutRequest>,
    ) -> Result<Response, AppError> {
        let auth = resources.auth_manager.authenticate(&headers)?;
        let profile = resources
            .database
            .get_profile(auth.user_id)
            .await?
            .ok_or_else(AppError::profile_incomplete)?;
        let user = resources
            .database
            .get_user(auth.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User"))?;

        let workout = generate_workout(
            auth.user_id,
            &profile,
            user.weeks_active(Utc::now()),
            request.venue.unwrap_or_default(),
            request.time_available_minutes,
        );
        resources.database.create_workout(&workout).await?;
        info!(
            "generated {} with {} exercises for user {}",
            workout.title,
            workout.exercises.len(),
            auth.user_id
        );

        Ok((StatusCode::CREATED, Json(WorkoutResponse { workout })).into_response())
    }

    /// Handle GET /api/workouts
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let auth = resources.auth_manager.authenticate(&headers)?;
        let workouts = resources
            .database
            .get_user_workouts(auth.user_id, workout_constants::HISTORY_LIMIT)
            .await?;

        let response = WorkoutListResponse {
            total: workouts.len(),
            workouts,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Commit the gamification ledger, retrying while concurrent
    /// completions win the compare-and-swap
    async fn commit_ledger(
        resources: &Arc<ServerResources>,
        user_id: Uuid,
        duration_minutes: i64,
    ) -> Result<LedgerOutcome, AppError> {
        let today = Utc::now().date_naive();

        for attempt in 1..=gamification::LEDGER_RETRY_LIMIT {
            let user = resources
                .database
                .get_user(user_id)
                .await?
                .ok_or_else(|| AppError::not_found("User"))?;
            let state = GamificationState::from(&user);
            let outcome = apply_workout_completion(&state, duration_minutes, today);

            let committed = resources
                .database
                .commit_workout_ledger(user_id, state.last_workout_date, &outcome)
                .await?;
            if committed {
                return Ok(outcome);
            }
            warn!(
                "ledger conflict for user {user_id}, attempt {attempt}/{}",
                gamification::LEDGER_RETRY_LIMIT
            );
        }

        Err(
            AppError::conflict("Workout recorded but the progress update conflicted, retry")
                .with_user_id(user_id),
        )
    }

    /// Handle PUT /api/workouts/:id/complete
    ///
    /// Transitions the workout to complete exactly once, then updates XP,
    /// streak, and badges.
    async fn handle_complete(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(workout_id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        let auth = resources.auth_manager.authenticate(&headers)?;
        let workout = resources
            .database
            .get_workout(auth.user_id, workout_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Workout").with_resource_id(workout_id.to_string())
            })?;

        if workout.completed {
            return Err(AppError::invalid_input("Workout already completed"));
        }

        let transitioned = resources
            .database
            .mark_workout_completed(auth.user_id, workout_id, Utc::now())
            .await?;
        if !transitioned {
            return Err(AppError::invalid_input("Workout already completed"));
        }

        let outcome =
            Self::commit_ledger(&resources, auth.user_id, workout.duration_minutes).await?;
        if !outcome.awarded_badges.is_empty() {
            info!(
                "user {} unlocked badges: {}",
                auth.user_id,
                outcome.awarded_badges.join(", ")
            );
        }

        let completed = resources
            .database
            .get_workout(auth.user_id, workout_id)
            .await?
            .ok_or_else(|| AppError::not_found("Workout"))?;

        let response = CompleteWorkoutResponse {
            workout: completed,
            xp_gained: outcome.xp_gained,
            streak: outcome.new_streak,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
