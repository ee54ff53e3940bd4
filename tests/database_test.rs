// ABOUTME: Integration tests for the SQLite storage layer
// ABOUTME: User accounts, profile upsert semantics, challenges, and progress entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitSphere

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitsphere::database_plugins::{factory::Database, DatabaseProvider};
use fitsphere::models::{
    Challenge, ChallengeParticipant, FitnessGoal, FitnessLevel, FoodPreference, Gender, Profile,
    ProgressEntry, User,
};

async fn memory_database() -> Database {
    Database::new("sqlite::memory:").await.unwrap()
}

#[tokio::test]
async fn test_user_round_trip_and_duplicate_email() {
    let database = memory_database().await;

    let user = User::new(
        "user@example.com".into(),
        "hash".into(),
        Some("Test User".into()),
    );
    database.create_user(&user).await.unwrap();

    let by_id = database.get_user(user.id).await.unwrap().unwrap();
    assert_eq!(by_id.email, "user@example.com");
    assert_eq!(by_id.display_name.as_deref(), Some("Test User"));
    assert_eq!(by_id.xp, 0);
    assert!(by_id.badges.is_empty());

    let by_email = database
        .get_user_by_email("user@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_email.id, user.id);

    assert_eq!(database.get_user_count().await.unwrap(), 1);

    // The unique index refuses a second account on the same email
    let duplicate = User::new("user@example.com".into(), "other".into(), None);
    assert!(database.create_user(&duplicate).await.is_err());
}

#[tokio::test]
async fn test_profile_upsert_keeps_one_row_per_user() {
    let database = memory_database().await;
    let user = User::new("user@example.com".into(), "hash".into(), None);
    database.create_user(&user).await.unwrap();

    assert!(database.get_profile(user.id).await.unwrap().is_none());

    let mut profile = Profile::new(user.id);
    profile.age = Some(30);
    profile.weight_kg = Some(82.5);
    profile.gender = Gender::Female;
    profile.fitness_goal = FitnessGoal::Endurance;
    database.upsert_profile(&profile).await.unwrap();

    let stored = database.get_profile(user.id).await.unwrap().unwrap();
    assert_eq!(stored.age, Some(30));
    assert_eq!(stored.weight_kg, Some(82.5));
    assert_eq!(stored.gender, Gender::Female);
    assert_eq!(stored.fitness_goal, FitnessGoal::Endurance);
    assert_eq!(stored.daily_workout_minutes, 30);
    assert_eq!(stored.equipment, vec!["bodyweight".to_owned()]);

    // A second save mutates in place instead of inserting
    profile.fitness_level = FitnessLevel::Intermediate;
    profile.food_preference = FoodPreference::Vegan;
    profile.height_cm = Some(168.0);
    database.upsert_profile(&profile).await.unwrap();

    let updated = database.get_profile(user.id).await.unwrap().unwrap();
    assert_eq!(updated.fitness_level, FitnessLevel::Intermediate);
    assert_eq!(updated.food_preference, FoodPreference::Vegan);
    assert_eq!(updated.height_cm, Some(168.0));
    assert_eq!(updated.age, Some(30));
}

#[tokio::test]
async fn test_challenge_join_and_single_completion_grant() {
    let database = memory_database().await;
    let user = User::new("user@example.com".into(), "hash".into(), None);
    database.create_user(&user).await.unwrap();

    let challenge = Challenge::new(
        "7-Day Consistency".into(),
        "Complete a workout every day for a week".into(),
        "workout".into(),
        7,
        None,
    );
    database.create_challenge(&challenge).await.unwrap();

    let listed = database.list_active_challenges().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].xp_reward, 100);

    let participant = ChallengeParticipant::new(challenge.id, user.id);
    database.join_challenge(&participant).await.unwrap();
    assert_eq!(database.count_participants(challenge.id).await.unwrap(), 1);

    // Joining twice violates the composite primary key
    assert!(database.join_challenge(&participant).await.is_err());

    database
        .update_participant_progress(challenge.id, user.id, 6)
        .await
        .unwrap();
    let midway = database
        .get_participant(challenge.id, user.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(midway.progress, 6);
    assert!(!midway.completed);

    // Completion transitions once; the guard refuses a second grant
    assert!(database
        .complete_participant(challenge.id, user.id, 7)
        .await
        .unwrap());
    assert!(!database
        .complete_participant(challenge.id, user.id, 8)
        .await
        .unwrap());

    let done = database
        .get_participant(challenge.id, user.id)
        .await
        .unwrap()
        .unwrap();
    assert!(done.completed);
    assert_eq!(done.progress, 7);
}

#[tokio::test]
async fn test_progress_entries_newest_first() {
    let database = memory_database().await;
    let user = User::new("user@example.com".into(), "hash".into(), None);
    database.create_user(&user).await.unwrap();

    let mut first = ProgressEntry::new(user.id);
    first.weight_kg = Some(84.0);
    first.recorded_at = chrono::Utc::now() - chrono::Duration::days(14);
    database.create_progress_entry(&first).await.unwrap();

    let mut second = ProgressEntry::new(user.id);
    second.weight_kg = Some(82.6);
    second.notes = Some("two weeks in".into());
    second.measurements = serde_json::json!({"waist_cm": 86.0});
    database.create_progress_entry(&second).await.unwrap();

    let entries = database.get_progress_entries(user.id, 100).await.unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].id, second.id);
    assert_eq!(entries[1].id, first.id);
    assert_eq!(entries[0].measurements["waist_cm"], 86.0);
    assert_eq!(entries[0].notes.as_deref(), Some("two weeks in"));
}
