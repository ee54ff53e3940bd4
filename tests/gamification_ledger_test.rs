// ABOUTME: Integration tests for the gamification ledger against SQLite storage
// ABOUTME: Streak continuity, badge idempotence, and compare-and-swap conflict detection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitSphere

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{Days, Utc};
use fitsphere::database_plugins::{factory::Database, DatabaseProvider};
use fitsphere::intelligence::{apply_workout_completion, GamificationState};
use fitsphere::models::User;

async fn seeded_user(database: &Database) -> User {
    let user = User::new("streak@example.com".into(), "hash".into(), None);
    database.create_user(&user).await.unwrap();
    user
}

#[tokio::test]
async fn test_first_completion_commits_streak_of_one() {
    let database = Database::new("sqlite::memory:").await.unwrap();
    let user = seeded_user(&database).await;

    let today = Utc::now().date_naive();
    let state = GamificationState::from(&user);
    let outcome = apply_workout_completion(&state, 20, today);

    assert!(database
        .commit_workout_ledger(user.id, state.last_workout_date, &outcome)
        .await
        .unwrap());

    let stored = database.get_user(user.id).await.unwrap().unwrap();
    assert_eq!(stored.xp, 40);
    assert_eq!(stored.streak, 1);
    assert_eq!(stored.last_workout_date, Some(today));
    assert!(stored.badges.is_empty());
}

#[tokio::test]
async fn test_streak_reaching_seven_awards_badge_once() {
    let database = Database::new("sqlite::memory:").await.unwrap();
    let user = seeded_user(&database).await;

    let today = Utc::now().date_naive();
    let yesterday = today.checked_sub_days(Days::new(1)).unwrap();

    // Simulate a user six days into a streak as of yesterday
    let primed = GamificationState {
        xp: 600,
        streak: 6,
        last_workout_date: Some(yesterday.checked_sub_days(Days::new(1)).unwrap()),
        badges: Vec::new(),
    };
    let prime = apply_workout_completion(&primed, 0, yesterday);
    assert!(database
        .commit_workout_ledger(user.id, None, &prime)
        .await
        .unwrap());

    let stored = database.get_user(user.id).await.unwrap().unwrap();
    assert_eq!(stored.streak, 7);
    assert_eq!(stored.badges, vec!["7-day-streak".to_owned()]);

    // The next day's completion neither re-awards nor duplicates
    let state = GamificationState::from(&stored);
    let outcome = apply_workout_completion(&state, 10, today);
    assert!(database
        .commit_workout_ledger(user.id, state.last_workout_date, &outcome)
        .await
        .unwrap());

    let after = database.get_user(user.id).await.unwrap().unwrap();
    assert_eq!(after.streak, 8);
    assert_eq!(after.badges, vec!["7-day-streak".to_owned()]);
}

#[tokio::test]
async fn test_gap_resets_streak_in_storage() {
    let database = Database::new("sqlite::memory:").await.unwrap();
    let user = seeded_user(&database).await;

    let today = Utc::now().date_naive();
    let five_days_ago = today.checked_sub_days(Days::new(5)).unwrap();

    let primed = GamificationState {
        xp: 1000,
        streak: 10,
        last_workout_date: None,
        badges: vec!["7-day-streak".to_owned()],
    };
    let prime = apply_workout_completion(&primed, 0, five_days_ago);
    assert!(database
        .commit_workout_ledger(user.id, None, &prime)
        .await
        .unwrap());
    // apply_workout_completion resets an unknown history to 1; put the
    // streak back to 10 for the gap scenario
    let stored = database.get_user(user.id).await.unwrap().unwrap();
    let gap_state = GamificationState {
        streak: 10,
        ..GamificationState::from(&stored)
    };

    let outcome = apply_workout_completion(&gap_state, 30, today);
    assert!(database
        .commit_workout_ledger(user.id, gap_state.last_workout_date, &outcome)
        .await
        .unwrap());

    let after = database.get_user(user.id).await.unwrap().unwrap();
    assert_eq!(after.streak, 1);
    assert_eq!(after.last_workout_date, Some(today));
    // XP still accrues across the reset
    assert_eq!(after.xp, 1060);
    assert_eq!(after.badges, vec!["7-day-streak".to_owned()]);
}

#[tokio::test]
async fn test_stale_snapshot_write_is_refused() {
    let database = Database::new("sqlite::memory:").await.unwrap();
    let user = seeded_user(&database).await;

    let today = Utc::now().date_naive();
    let state = GamificationState::from(&user);
    let outcome = apply_workout_completion(&state, 15, today);

    // First writer wins
    assert!(database
        .commit_workout_ledger(user.id, state.last_workout_date, &outcome)
        .await
        .unwrap());

    // A concurrent completion computed from the same stale snapshot loses
    let racing = apply_workout_completion(&state, 45, today);
    assert!(!database
        .commit_workout_ledger(user.id, state.last_workout_date, &racing)
        .await
        .unwrap());

    // Recomputing from the fresh row succeeds and does not bump the streak
    let fresh = database.get_user(user.id).await.unwrap().unwrap();
    let fresh_state = GamificationState::from(&fresh);
    let retry = apply_workout_completion(&fresh_state, 45, today);
    assert!(database
        .commit_workout_ledger(user.id, fresh_state.last_workout_date, &retry)
        .await
        .unwrap());

    let after = database.get_user(user.id).await.unwrap().unwrap();
    assert_eq!(after.streak, 1);
    assert_eq!(after.xp, 30 + 90);
}

#[tokio::test]
async fn test_challenge_xp_is_a_plain_increment() {
    let database = Database::new("sqlite::memory:").await.unwrap();
    let user = seeded_user(&database).await;

    database.increment_user_xp(user.id, 100).await.unwrap();
    database.increment_user_xp(user.id, 250).await.unwrap();

    let stored = database.get_user(user.id).await.unwrap().unwrap();
    assert_eq!(stored.xp, 350);
    // Challenge rewards never touch the streak
    assert_eq!(stored.streak, 0);
}
