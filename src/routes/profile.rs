// ABOUTME: Profile route handlers for reading and upserting the fitness profile
// ABOUTME: One profile per user, created on first save and updated in place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitSphere

//! Profile routes

use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{
    constants::limits,
    database_plugins::DatabaseProvider,
    errors::AppError,
    models::{FitnessGoal, FitnessLevel, FoodPreference, Gender, Profile},
    server::ServerResources,
};

/// Profile upsert request; absent fields keep their current values
#[derive(Debug, Default, Deserialize)]
pub struct SaveProfileRequest {
    /// Age in years
    pub age: Option<i64>,
    /// Height in centimetres
    pub height_cm: Option<f64>,
    /// Weight in kilograms
    pub weight_kg: Option<f64>,
    /// Self-reported gender
    pub gender: Option<Gender>,
    /// Primary training goal
    pub fitness_goal: Option<FitnessGoal>,
    /// Preferred daily workout time in minutes
    pub daily_workout_minutes: Option<i64>,
    /// Available equipment tags
    pub equipment: Option<Vec<String>>,
    /// Dietary preference
    pub food_preference: Option<FoodPreference>,
    /// Self-assessed training experience
    pub fitness_level: Option<FitnessLevel>,
}

/// Profile read response
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    /// Profile, absent until first saved
    pub profile: Option<Profile>,
}

/// Profile save response
#[derive(Debug, Serialize)]
pub struct SaveProfileResponse {
    /// Saved profile
    pub profile: Profile,
    /// Confirmation message
    pub message: String,
}

fn apply_updates(profile: &mut Profile, request: SaveProfileRequest) -> Result<(), AppError> {
    if let Some(age) = request.age {
        if age < limits::MIN_PROFILE_AGE_YEARS {
            return Err(AppError::invalid_input(format!(
                "Age must be at least {}",
                limits::MIN_PROFILE_AGE_YEARS
            )));
        }
        profile.age = Some(age);
    }
    if let Some(height_cm) = request.height_cm {
        if height_cm <= 0.0 {
            return Err(AppError::invalid_input("Height must be positive"));
        }
        profile.height_cm = Some(height_cm);
    }
    if let Some(weight_kg) = request.weight_kg {
        if weight_kg <= 0.0 {
            return Err(AppError::invalid_input("Weight must be positive"));
        }
        profile.weight_kg = Some(weight_kg);
    }
    if let Some(gender) = request.gender {
        profile.gender = gender;
    }
    if let Some(goal) = request.fitness_goal {
        profile.fitness_goal = goal;
    }
    if let Some(minutes) = request.daily_workout_minutes {
        if minutes <= 0 {
            return Err(AppError::invalid_input(
                "Daily workout time must be positive",
            ));
        }
        profile.daily_workout_minutes = minutes;
    }
    if let Some(equipment) = request.equipment {
        profile.equipment = equipment;
    }
    if let Some(preference) = request.food_preference {
        profile.food_preference = preference;
    }
    if let Some(level) = request.fitness_level {
        profile.fitness_level = level;
    }
    Ok(())
}

/// Profile routes handler
pub struct ProfileRoutes;

impl ProfileRoutes {
    /// Create all profile routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/profile", get(Self::handle_get))
            .route("/api/profile", post(Self::handle_save))
            .with_state(resources)
    }

    /// Handle GET /api/profile
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let auth = resources.auth_manager.authenticate(&headers)?;
        let profile = resources.database.get_profile(auth.user_id).await?;

        Ok((StatusCode::OK, Json(ProfileResponse { profile })).into_response())
    }

    /// Handle POST /api/profile - create or update
    async fn handle_save(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(request): Json<SaveProfileRequest>,
    ) -> Result<Response, AppError> {
        let auth = resources.auth_manager.authenticate(&headers)?;

        let mut profile = resources
            .database
            .get_profile(auth.user_id)
            .await?
            .unwrap_or_else(|| Profile::new(auth.user_id));

        apply_updates(&mut profile, request)?;
        profile.updated_at = Utc::now();

        resources.database.upsert_profile(&profile).await?;

        let response = SaveProfileResponse {
            profile,
            message: "Profile saved successfully".to_owned(),
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
