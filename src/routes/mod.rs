// ABOUTME: Route module organization for FitSphere HTTP endpoints
// ABOUTME: One module per domain with thin handlers delegating to the core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitSphere

//! Route modules
//!
//! Each domain module exposes a unit struct with a `routes` constructor
//! returning an axum `Router`. Handlers stay thin: authenticate, validate,
//! call into the intelligence or storage layer, serialize the response.

/// Registration, login, and current-user routes
pub mod auth;
/// Challenge listing, joining, and progress routes
pub mod challenges;
/// Health check and readiness routes
pub mod health;
/// Nutrition plan and daily meal suggestion routes
pub mod nutrition;
/// Profile read and upsert routes
pub mod profile;
/// Body measurement progress routes
pub mod progress;
/// Workout generation, history, and completion routes
pub mod workouts;

pub use auth::AuthRoutes;
pub use challenges::ChallengeRoutes;
pub use health::HealthRoutes;
pub use nutrition::NutritionRoutes;
pub use profile::ProfileRoutes;
pub use progress::ProgressRoutes;
pub use workouts::WorkoutRoutes;
