// ABOUTME: Workout model with ordered exercise prescriptions and venue tags
// ABOUTME: Workouts are created incomplete and transition to complete exactly once
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitSphere

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::FitnessLevel;

/// Where a workout takes place
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutVenue {
    /// Bodyweight training at home
    #[default]
    Home,
    /// Equipment-based training at a gym
    Gym,
    /// Outdoor training, served the home catalog
    Outdoor,
}

impl WorkoutVenue {
    /// Convert to string for database storage
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Gym => "gym",
            Self::Outdoor => "outdoor",
        }
    }

    /// Capitalized form used in workout titles
    #[must_use]
    pub const fn title_case(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Gym => "Gym",
            Self::Outdoor => "Outdoor",
        }
    }
}

impl Display for WorkoutVenue {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutVenue {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(Self::Home),
            "gym" => Ok(Self::Gym),
            "outdoor" => Ok(Self::Outdoor),
            _ => Err(AppError::invalid_input(format!(
                "Invalid workout venue: {s}"
            ))),
        }
    }
}

/// A single exercise prescription within a workout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Exercise {
    /// Exercise name
    pub name: String,
    /// Number of sets
    pub sets: i64,
    /// Repetitions per set (seconds for timed holds such as planks)
    pub reps: i64,
    /// Rest between sets in seconds
    pub rest_seconds: i64,
}

/// A generated workout session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
    /// Unique workout identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Display title, e.g. "Home Workout - Beginner"
    pub title: String,
    /// Ordered exercise prescriptions
    pub exercises: Vec<Exercise>,
    /// Estimated total duration in minutes
    pub duration_minutes: i64,
    /// Estimated energy expenditure in kcal
    pub calories_burned: i64,
    /// Venue the workout was generated for
    pub venue: WorkoutVenue,
    /// Effective difficulty after tenure progression
    pub difficulty: FitnessLevel,
    /// Whether the workout has been completed
    pub completed: bool,
    /// When the workout was completed
    pub completed_at: Option<DateTime<Utc>>,
    /// When the workout was generated
    pub created_at: DateTime<Utc>,
}
