// ABOUTME: Integration tests for workout generation and persistence
// ABOUTME: Covers time budgeting, progression, venue fallback, and the zero-exercise boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitSphere

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitsphere::database_plugins::{factory::Database, DatabaseProvider};
use fitsphere::intelligence::{catalog, generate_workout};
use fitsphere::models::{FitnessLevel, Profile, User, WorkoutVenue};

async fn memory_database() -> Database {
    Database::new("sqlite::memory:").await.unwrap()
}

#[test]
fn test_prefix_selection_respects_catalog_order() {
    let profile = Profile::new(uuid::Uuid::new_v4());
    let workout = generate_workout(profile.user_id, &profile, 0, WorkoutVenue::Home, Some(16));

    let expected: Vec<String> = catalog::exercises_for(FitnessLevel::Beginner, WorkoutVenue::Home)
        .iter()
        .take(4)
        .map(|p| p.name.to_owned())
        .collect();
    let actual: Vec<String> = workout.exercises.iter().map(|e| e.name.clone()).collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_outdoor_venue_uses_home_catalog() {
    let mut profile = Profile::new(uuid::Uuid::new_v4());
    profile.fitness_level = FitnessLevel::Advanced;
    let workout = generate_workout(
        profile.user_id,
        &profile,
        0,
        WorkoutVenue::Outdoor,
        Some(30),
    );

    assert_eq!(workout.venue, WorkoutVenue::Outdoor);
    assert_eq!(workout.title, "Outdoor Workout - Advanced");
    // Catalog has no outdoor cell; the beginner home list backs it
    assert_eq!(workout.exercises[0].name, "Push-ups");
    assert_eq!(workout.exercises[0].sets, 3);
}

#[test]
fn test_zero_exercise_workout_is_accepted() {
    let profile = Profile::new(uuid::Uuid::new_v4());
    let workout = generate_workout(profile.user_id, &profile, 0, WorkoutVenue::Gym, Some(3));

    assert!(workout.exercises.is_empty());
    assert_eq!(workout.duration_minutes, 0);
    assert_eq!(workout.calories_burned, 0);
}

#[test]
fn test_tenure_promotes_difficulty() {
    let mut profile = Profile::new(uuid::Uuid::new_v4());
    profile.fitness_level = FitnessLevel::Intermediate;

    let fresh = generate_workout(profile.user_id, &profile, 0, WorkoutVenue::Gym, Some(30));
    assert_eq!(fresh.difficulty, FitnessLevel::Intermediate);

    let tenured = generate_workout(profile.user_id, &profile, 5, WorkoutVenue::Gym, Some(30));
    assert_eq!(tenured.difficulty, FitnessLevel::Advanced);
    assert_eq!(tenured.title, "Gym Workout - Advanced");
}

#[tokio::test]
async fn test_generated_workout_round_trips_through_storage() {
    let database = memory_database().await;
    let user = User::new("athlete@example.com".into(), "hash".into(), None);
    database.create_user(&user).await.unwrap();

    let mut profile = Profile::new(user.id);
    profile.fitness_level = FitnessLevel::Beginner;
    database.upsert_profile(&profile).await.unwrap();

    let workout = generate_workout(user.id, &profile, 0, WorkoutVenue::Home, Some(16));
    database.create_workout(&workout).await.unwrap();

    let stored = database.get_workout(user.id, workout.id).await.unwrap().unwrap();
    assert_eq!(stored.exercises, workout.exercises);
    assert_eq!(stored.duration_minutes, 17);
    assert_eq!(stored.calories_burned, 136);
    assert!(!stored.completed);
    assert!(stored.completed_at.is_none());

    let history = database.get_user_workouts(user.id, 50).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].id, workout.id);
}

#[tokio::test]
async fn test_workout_completes_exactly_once() {
    let database = memory_database().await;
    let user = User::new("athlete@example.com".into(), "hash".into(), None);
    database.create_user(&user).await.unwrap();

    let profile = Profile::new(user.id);
    let workout = generate_workout(user.id, &profile, 0, WorkoutVenue::Home, Some(20));
    database.create_workout(&workout).await.unwrap();

    let now = chrono::Utc::now();
    assert!(database
        .mark_workout_completed(user.id, workout.id, now)
        .await
        .unwrap());
    // The second transition is refused
    assert!(!database
        .mark_workout_completed(user.id, workout.id, now)
        .await
        .unwrap());

    let stored = database.get_workout(user.id, workout.id).await.unwrap().unwrap();
    assert!(stored.completed);
    assert!(stored.completed_at.is_some());
}
