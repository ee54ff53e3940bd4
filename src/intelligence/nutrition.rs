// ABOUTME: Energy and macronutrient formulas for daily nutrition planning
// ABOUTME: Mifflin-St Jeor BMR, goal-adjusted calorie targets, and macro splits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitSphere

//! Nutrition formula engine
//!
//! Deterministic arithmetic over profile attributes. Inputs are passed
//! through unchecked; range validation happens at the profile boundary,
//! and plan assembly refuses profiles missing weight, height, or age.

use serde::{Deserialize, Serialize};

use crate::constants::energy;
use crate::errors::AppResult;
use crate::intelligence::meals::{self, MealSuggestions};
use crate::models::{FitnessGoal, Gender, Profile};

/// Basal metabolic rate in kcal via the Mifflin-St Jeor equation
///
/// Male `10w + 6.25h - 5a + 5`, female `10w + 6.25h - 5a - 161`, any other
/// gender `10w + 6.25h - 5a - 50`.
#[must_use]
pub fn basal_metabolic_rate(weight_kg: f64, height_cm: f64, age_years: f64, gender: Gender) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years;
    match gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
        Gender::Other | Gender::PreferNotToSay => base - 50.0,
    }
}

/// Daily calorie target: TDEE scaled by the goal multiplier, rounded to kcal
#[must_use]
pub fn daily_calorie_target(bmr: f64, goal: FitnessGoal) -> i64 {
    daily_calorie_target_with_activity(bmr, goal, energy::ACTIVITY_MULTIPLIER)
}

/// Daily calorie target with an explicit activity multiplier
#[must_use]
pub fn daily_calorie_target_with_activity(
    bmr: f64,
    goal: FitnessGoal,
    activity_multiplier: f64,
) -> i64 {
    let tdee = bmr * activity_multiplier;
    let adjusted = match goal {
        FitnessGoal::WeightLoss => tdee * energy::WEIGHT_LOSS_FACTOR,
        FitnessGoal::MuscleGain => tdee * energy::MUSCLE_GAIN_FACTOR,
        FitnessGoal::Endurance => tdee * energy::ENDURANCE_FACTOR,
        FitnessGoal::Flexibility | FitnessGoal::GeneralFitness => tdee,
    };
    adjusted.round() as i64
}

/// Daily protein requirement in grams, scaled per kg bodyweight by goal
#[must_use]
pub fn protein_requirement_grams(weight_kg: f64, goal: FitnessGoal) -> i64 {
    let per_kg = match goal {
        FitnessGoal::WeightLoss => energy::PROTEIN_G_PER_KG_WEIGHT_LOSS,
        FitnessGoal::MuscleGain => energy::PROTEIN_G_PER_KG_MUSCLE_GAIN,
        FitnessGoal::Endurance | FitnessGoal::Flexibility | FitnessGoal::GeneralFitness => {
            energy::PROTEIN_G_PER_KG_DEFAULT
        }
    };
    (weight_kg * per_kg).round() as i64
}

/// Daily carbohydrate requirement in grams (45% of calories at 4 kcal/g)
#[must_use]
pub fn carbs_requirement_grams(daily_calories: i64) -> i64 {
    (daily_calories as f64 * energy::CARB_CALORIE_SHARE / energy::KCAL_PER_GRAM_CARBS).round()
        as i64
}

/// Daily fat requirement in grams (25% of calories at 9 kcal/g)
#[must_use]
pub fn fats_requirement_grams(daily_calories: i64) -> i64 {
    (daily_calories as f64 * energy::FAT_CALORIE_SHARE / energy::KCAL_PER_GRAM_FAT).round() as i64
}

/// Daily macronutrient targets in grams
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroTargets {
    /// Protein in grams
    pub protein_grams: i64,
    /// Carbohydrates in grams
    pub carbs_grams: i64,
    /// Fats in grams
    pub fats_grams: i64,
}

/// A complete daily nutrition plan for one profile
#[derive(Debug, Clone, Serialize)]
pub struct NutritionPlan {
    /// Goal-adjusted daily calorie target in kcal
    pub daily_calories: i64,
    /// Macronutrient targets
    pub macros: MacroTargets,
    /// Full meal suggestion lists for the profile's diet preference
    pub meals: &'static MealSuggestions,
    /// Fixed daily water intake target in millilitres
    pub water_intake_ml: i64,
}

impl NutritionPlan {
    /// Build a plan from a profile
    ///
    /// # Errors
    ///
    /// Returns an incomplete-profile error when weight, height, or age is
    /// missing; the engine never computes a plan from defaults.
    pub fn for_profile(profile: &Profile) -> AppResult<Self> {
        let (weight_kg, height_cm, age) = profile
            .body_metrics()
            .ok_or_else(crate::errors::AppError::profile_incomplete)?;

        let bmr = basal_metabolic_rate(weight_kg, height_cm, age as f64, profile.gender);
        let daily_calories = daily_calorie_target(bmr, profile.fitness_goal);

        Ok(Self {
            daily_calories,
            macros: MacroTargets {
                protein_grams: protein_requirement_grams(weight_kg, profile.fitness_goal),
                carbs_grams: carbs_requirement_grams(daily_calories),
                fats_grams: fats_requirement_grams(daily_calories),
            },
            meals: meals::suggestions_for(profile.food_preference),
            water_intake_ml: energy::DAILY_WATER_INTAKE_ML,
        })
    }
}
