// ABOUTME: Workout assembler selecting a catalog prefix under a time budget
// ABOUTME: Computes estimated duration and calorie burn for the selected set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitSphere

//! Workout assembly
//!
//! Resolves the session time budget, the effective difficulty, and the
//! catalog cell, then takes a prefix of the catalog list at a fixed
//! four-minutes-per-exercise budget. A budget under four minutes yields an
//! empty workout with zero duration and calories; that is accepted, not
//! rejected.

use chrono::Utc;
use uuid::Uuid;

use crate::constants::workout;
use crate::intelligence::{catalog, progression};
use crate::models::{Exercise, Profile, Workout, WorkoutVenue};

/// Resolve the session length in minutes
///
/// The requested time wins when positive, then the profile's daily workout
/// time, then the global default.
fn resolve_minutes(profile: &Profile, requested_minutes: Option<i64>) -> i64 {
    match requested_minutes {
        Some(minutes) if minutes > 0 => minutes,
        _ if profile.daily_workout_minutes > 0 => profile.daily_workout_minutes,
        _ => workout::DEFAULT_SESSION_MINUTES,
    }
}

/// Assemble a workout for a user
///
/// `weeks_active` is the whole weeks since account creation and drives the
/// difficulty progression. The returned workout is not yet persisted and is
/// always incomplete.
#[must_use]
pub fn generate_workout(
    user_id: Uuid,
    profile: &Profile,
    weeks_active: i64,
    venue: WorkoutVenue,
    requested_minutes: Option<i64>,
) -> Workout {
    let available_minutes = resolve_minutes(profile, requested_minutes);
    let difficulty = progression::effective_difficulty(profile.fitness_level, weeks_active);
    let prescriptions = catalog::exercises_for(difficulty, venue);

    let budgeted = (available_minutes / workout::MINUTES_PER_EXERCISE).max(0) as usize;
    let selected: Vec<Exercise> = prescriptions
        .iter()
        .take(budgeted.min(prescriptions.len()))
        .map(Exercise::from)
        .collect();

    let total_seconds: i64 = selected
        .iter()
        .map(|exercise| exercise.sets * (exercise.rest_seconds + workout::WORK_SECONDS_PER_SET))
        .sum();
    let duration_minutes = (total_seconds as f64 / 60.0).round() as i64;
    let calories_burned = (duration_minutes as f64 * workout::CALORIES_PER_MINUTE).round() as i64;

    Workout {
        id: Uuid::new_v4(),
        user_id,
        title: format!("{} Workout - {}", venue.title_case(), difficulty.title_case()),
        exercises: selected,
        duration_minutes,
        calories_burned,
        venue,
        difficulty,
        completed: false,
        completed_at: None,
        created_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FitnessLevel;

    fn fresh_profile() -> Profile {
        Profile::new(Uuid::new_v4())
    }

    #[test]
    fn test_sixteen_minutes_selects_first_four() {
        let profile = fresh_profile();
        let generated = generate_workout(
            profile.user_id,
            &profile,
            0,
            WorkoutVenue::Home,
            Some(16),
        );

        let names: Vec<&str> = generated
            .exercises
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["Push-ups", "Bodyweight Squats", "Plank", "Jumping Jacks"]
        );
    }

    #[test]
    fn test_duration_and_calorie_estimates() {
        let profile = fresh_profile();
        let generated = generate_workout(
            profile.user_id,
            &profile,
            0,
            WorkoutVenue::Home,
            Some(16),
        );

        // 3*(60+30) + 3*(60+30) + 3*(60+30) + 3*(45+30) = 1035s -> 17 min
        assert_eq!(generated.duration_minutes, 17);
        assert_eq!(generated.calories_burned, 136);
    }

    #[test]
    fn test_very_short_budget_yields_empty_workout() {
        let profile = fresh_profile();
        let generated =
            generate_workout(profile.user_id, &profile, 0, WorkoutVenue::Home, Some(2));

        assert!(generated.exercises.is_empty());
        assert_eq!(generated.duration_minutes, 0);
        assert_eq!(generated.calories_burned, 0);
        assert!(!generated.completed);
    }

    #[test]
    fn test_budget_capped_at_catalog_length() {
        let profile = fresh_profile();
        let generated = generate_workout(
            profile.user_id,
            &profile,
            0,
            WorkoutVenue::Gym,
            Some(240),
        );
        assert_eq!(generated.exercises.len(), 6);
    }

    #[test]
    fn test_profile_default_minutes_used_when_request_absent() {
        let mut profile = fresh_profile();
        profile.daily_workout_minutes = 8;
        let generated =
            generate_workout(profile.user_id, &profile, 0, WorkoutVenue::Home, None);
        assert_eq!(generated.exercises.len(), 2);

        let generated =
            generate_workout(profile.user_id, &profile, 0, WorkoutVenue::Home, Some(-5));
        assert_eq!(generated.exercises.len(), 2);
    }

    #[test]
    fn test_title_and_progressed_difficulty() {
        let mut profile = fresh_profile();
        profile.fitness_level = FitnessLevel::Beginner;
        let generated =
            generate_workout(profile.user_id, &profile, 3, WorkoutVenue::Gym, Some(30));

        assert_eq!(generated.difficulty, FitnessLevel::Intermediate);
        assert_eq!(generated.title, "Gym Workout - Intermediate");
        assert_eq!(generated.venue, WorkoutVenue::Gym);
    }
}
