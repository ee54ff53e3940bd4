// ABOUTME: Domain model module organization for the FitSphere backend
// ABOUTME: Users, profiles, workouts, challenges, and progress entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitSphere

//! Common data models for fitness tracking

/// Challenge and participant models
pub mod challenge;
/// User profile and its closed enumerations
pub mod profile;
/// Body measurement progress entries
pub mod progress;
/// User account with gamification state
pub mod user;
/// Workouts and exercise prescriptions
pub mod workout;

pub use challenge::{Challenge, ChallengeParticipant};
pub use profile::{FitnessGoal, FitnessLevel, FoodPreference, Gender, Profile};
pub use progress::ProgressEntry;
pub use user::User;
pub use workout::{Exercise, Workout, WorkoutVenue};
