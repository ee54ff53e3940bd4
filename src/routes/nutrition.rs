// ABOUTME: Nutrition route handlers for the daily plan and meal suggestions
// ABOUTME: Requires a complete profile; the daily picks use an unseeded RNG
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitSphere

//! Nutrition routes

use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use crate::{
    database_plugins::DatabaseProvider,
    errors::AppError,
    intelligence::{meals, NutritionPlan},
    server::ServerResources,
};

/// Nutrition routes handler
pub struct NutritionRoutes;

impl NutritionRoutes {
    /// Create all nutrition routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/nutrition/plan", get(Self::handle_plan))
            .route("/api/nutrition/today", get(Self::handle_today))
            .with_state(resources)
    }

    /// Handle GET /api/nutrition/plan
    ///
    /// Fails with an incomplete-profile error when the profile is missing
    /// or lacks weight, height, or age.
    async fn handle_plan(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let auth = resources.auth_manager.authenticate(&headers)?;
        let profile = resources
            .database
            .get_profile(auth.user_id)
            .await?
            .ok_or_else(AppError::profile_incomplete)?;

        let plan = NutritionPlan::for_profile(&profile)?;
        Ok((StatusCode::OK, Json(plan)).into_response())
    }

    /// Handle GET /api/nutrition/today - one random dish per meal slot
    async fn handle_today(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let auth = resources.auth_manager.authenticate(&headers)?;
        let profile = resources
            .database
            .get_profile(auth.user_id)
            .await?
            .ok_or_else(AppError::profile_incomplete)?;

        let picks = meals::todays_picks(profile.food_preference, &mut rand::thread_rng());
        Ok((StatusCode::OK, Json(picks)).into_response())
    }
}
