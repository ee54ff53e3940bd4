// ABOUTME: User profile model driving workout and nutrition recommendations
// ABOUTME: Gender, goal, diet, and fitness level enumerations with storage conversions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitSphere

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::defaults;
use crate::errors::AppError;

/// Self-reported gender, used only by the BMR formula
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
    /// Other
    Other,
    /// Undisclosed
    #[default]
    PreferNotToSay,
}

impl Gender {
    /// Convert to string for database storage
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
            Self::PreferNotToSay => "prefer-not-to-say",
        }
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            "prefer-not-to-say" => Ok(Self::PreferNotToSay),
            _ => Err(AppError::invalid_input(format!("Invalid gender: {s}"))),
        }
    }
}

/// Primary training goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FitnessGoal {
    /// Calorie deficit and higher protein
    WeightLoss,
    /// Calorie surplus and higher protein
    MuscleGain,
    /// Moderate calorie surplus
    Endurance,
    /// Mobility focus, neutral energy target
    Flexibility,
    /// No specific adjustment
    #[default]
    GeneralFitness,
}

impl FitnessGoal {
    /// Convert to string for database storage
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WeightLoss => "weight-loss",
            Self::MuscleGain => "muscle-gain",
            Self::Endurance => "endurance",
            Self::Flexibility => "flexibility",
            Self::GeneralFitness => "general-fitness",
        }
    }
}

impl Display for FitnessGoal {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for FitnessGoal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weight-loss" => Ok(Self::WeightLoss),
            "muscle-gain" => Ok(Self::MuscleGain),
            "endurance" => Ok(Self::Endurance),
            "flexibility" => Ok(Self::Flexibility),
            "general-fitness" => Ok(Self::GeneralFitness),
            _ => Err(AppError::invalid_input(format!("Invalid fitness goal: {s}"))),
        }
    }
}

/// Dietary preference selecting the meal suggestion tables
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FoodPreference {
    /// Vegetarian menu
    Vegetarian,
    /// Non-vegetarian menu
    NonVegetarian,
    /// Vegan menu
    Vegan,
    /// No stated preference, served the vegetarian menu
    #[default]
    NoPreference,
}

impl FoodPreference {
    /// Convert to string for database storage
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vegetarian => "vegetarian",
            Self::NonVegetarian => "non-vegetarian",
            Self::Vegan => "vegan",
            Self::NoPreference => "no-preference",
        }
    }
}

impl Display for FoodPreference {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for FoodPreference {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vegetarian" => Ok(Self::Vegetarian),
            "non-vegetarian" => Ok(Self::NonVegetarian),
            "vegan" => Ok(Self::Vegan),
            "no-preference" => Ok(Self::NoPreference),
            _ => Err(AppError::invalid_input(format!(
                "Invalid food preference: {s}"
            ))),
        }
    }
}

/// Training experience, doubling as the workout difficulty tier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Default)]
#[serde(rename_all = "lowercase")]
pub enum FitnessLevel {
    /// New to training
    #[default]
    Beginner,
    /// Consistent training history
    Intermediate,
    /// Long training history
    Advanced,
}

impl FitnessLevel {
    /// Convert to string for database storage
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// Capitalized form used in workout titles
    #[must_use]
    pub const fn title_case(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl Display for FitnessLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for FitnessLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            _ => Err(AppError::invalid_input(format!(
                "Invalid fitness level: {s}"
            ))),
        }
    }
}

/// Fitness profile, exactly one per user
///
/// Created on first save and upserted in place thereafter; removed only when
/// the owning user is deleted. Weight, height, and age stay optional here;
/// the nutrition engine refuses to compute a plan until all three are set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Owning user
    pub user_id: Uuid,
    /// Age in years
    pub age: Option<i64>,
    /// Height in centimetres
    pub height_cm: Option<f64>,
    /// Weight in kilograms
    pub weight_kg: Option<f64>,
    /// Self-reported gender
    pub gender: Gender,
    /// Primary training goal
    pub fitness_goal: FitnessGoal,
    /// Preferred daily workout time in minutes
    pub daily_workout_minutes: i64,
    /// Available equipment tags
    pub equipment: Vec<String>,
    /// Dietary preference
    pub food_preference: FoodPreference,
    /// Self-assessed training experience
    pub fitness_level: FitnessLevel,
    /// When the profile was first saved
    pub created_at: DateTime<Utc>,
    /// When the profile was last updated
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Create an empty profile with default settings for a user
    #[must_use]
    pub fn new(user_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            age: None,
            height_cm: None,
            weight_kg: None,
            gender: Gender::default(),
            fitness_goal: FitnessGoal::default(),
            daily_workout_minutes: defaults::DAILY_WORKOUT_MINUTES,
            equipment: vec!["bodyweight".to_owned()],
            food_preference: FoodPreference::default(),
            fitness_level: FitnessLevel::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Weight, height, and age when all three are present
    ///
    /// Returns `None` when any is missing; callers must treat that as an
    /// incomplete-profile precondition failure rather than substituting
    /// defaults.
    #[must_use]
    pub const fn body_metrics(&self) -> Option<(f64, f64, i64)> {
        match (self.weight_kg, self.height_cm, self.age) {
            (Some(weight), Some(height), Some(age)) => Some((weight, height, age)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_storage_round_trip() {
        for goal in [
            FitnessGoal::WeightLoss,
            FitnessGoal::MuscleGain,
            FitnessGoal::Endurance,
            FitnessGoal::Flexibility,
            FitnessGoal::GeneralFitness,
        ] {
            assert_eq!(goal.as_str().parse::<FitnessGoal>().ok(), Some(goal));
        }
        for level in [
            FitnessLevel::Beginner,
            FitnessLevel::Intermediate,
            FitnessLevel::Advanced,
        ] {
            assert_eq!(level.as_str().parse::<FitnessLevel>().ok(), Some(level));
        }
    }

    #[test]
    fn test_body_metrics_requires_all_fields() {
        let mut profile = Profile::new(Uuid::new_v4());
        assert!(profile.body_metrics().is_none());

        profile.weight_kg = Some(70.0);
        profile.height_cm = Some(175.0);
        assert!(profile.body_metrics().is_none());

        profile.age = Some(25);
        assert_eq!(profile.body_metrics(), Some((70.0, 175.0, 25)));
    }
}
