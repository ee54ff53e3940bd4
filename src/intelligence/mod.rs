// ABOUTME: Recommendation and progression engine for workouts and nutrition
// ABOUTME: Pure, deterministic business rules separated from storage and transport
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitSphere

//! Fitness intelligence
//!
//! The behavioral core of the backend: energy and macro formulas, the meal
//! suggestion tables, the tenure-based difficulty progression, the exercise
//! catalog, workout assembly, and the gamification ledger computation.
//! Everything here is a pure function over domain values; persistence and
//! HTTP concerns live elsewhere.

/// Static exercise catalog keyed by difficulty and venue
pub mod catalog;
/// Gamification ledger computation (XP, streaks, badges)
pub mod gamification;
/// Workout assembly under a time budget
pub mod generator;
/// Meal suggestion tables and random daily picks
pub mod meals;
/// Energy and macronutrient formulas
pub mod nutrition;
/// Tenure-based difficulty progression
pub mod progression;

pub use catalog::{exercises_for, ExercisePrescription};
pub use gamification::{apply_workout_completion, GamificationState, LedgerOutcome};
pub use generator::generate_workout;
pub use meals::{suggestions_for, todays_picks, MealSuggestions, TodaysMeals};
pub use nutrition::{MacroTargets, NutritionPlan};
pub use progression::effective_difficulty;
