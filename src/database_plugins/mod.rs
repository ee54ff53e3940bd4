// ABOUTME: Database abstraction layer for the FitSphere backend
// ABOUTME: Plugin architecture keeping the storage backend swappable behind a trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitSphere

//! Database abstraction layer
//!
//! All database implementations provide this trait so the route layer is
//! independent of the concrete backend.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::intelligence::LedgerOutcome;
use crate::models::{
    Challenge, ChallengeParticipant, Profile, ProgressEntry, User, Workout,
};

/// Database factory selecting a backend from the connection string
pub mod factory;
/// SQLite backend
pub mod sqlite;

/// Core database abstraction trait
///
/// All database implementations must implement this trait to provide a
/// consistent interface for the application layer.
#[async_trait]
pub trait DatabaseProvider: Send + Sync + Clone {
    /// Create a new database connection
    async fn new(database_url: &str) -> Result<Self>
    where
        Self: Sized;

    /// Run database migrations to set up the schema
    async fn migrate(&self) -> Result<()>;

    // ================================
    // User Management
    // ================================

    /// Create a new user account
    async fn create_user(&self, user: &User) -> Result<Uuid>;

    /// Get user by ID
    async fn get_user(&self, user_id: Uuid) -> Result<Option<User>>;

    /// Get user by email address
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Update user's last active timestamp
    async fn update_last_active(&self, user_id: Uuid) -> Result<()>;

    /// Get total number of users
    async fn get_user_count(&self) -> Result<i64>;

    // ================================
    // Gamification Ledger
    // ================================

    /// Atomically add XP to a user
    async fn increment_user_xp(&self, user_id: Uuid, amount: i64) -> Result<()>;

    /// Commit a workout-completion ledger outcome with a compare-and-swap
    /// keyed on the previously read last-workout date; `false` on a lost race
    async fn commit_workout_ledger(
        &self,
        user_id: Uuid,
        expected_last_workout_date: Option<NaiveDate>,
        outcome: &LedgerOutcome,
    ) -> Result<bool>;

    // ================================
    // Profiles
    // ================================

    /// Create or update the profile for a user
    async fn upsert_profile(&self, profile: &Profile) -> Result<()>;

    /// Get the profile for a user
    async fn get_profile(&self, user_id: Uuid) -> Result<Option<Profile>>;

    // ================================
    // Workouts
    // ================================

    /// Persist a generated workout
    async fn create_workout(&self, workout: &Workout) -> Result<()>;

    /// Get one workout owned by a user
    async fn get_workout(&self, user_id: Uuid, workout_id: Uuid) -> Result<Option<Workout>>;

    /// Get a user's workouts, newest first
    async fn get_user_workouts(&self, user_id: Uuid, limit: i64) -> Result<Vec<Workout>>;

    /// Transition a workout from incomplete to complete, exactly once
    async fn mark_workout_completed(
        &self,
        user_id: Uuid,
        workout_id: Uuid,
        completed_at: DateTime<Utc>,
    ) -> Result<bool>;

    // ================================
    // Challenges
    // ================================

    /// Create a challenge
    async fn create_challenge(&self, challenge: &Challenge) -> Result<()>;

    /// Get a challenge by ID
    async fn get_challenge(&self, challenge_id: Uuid) -> Result<Option<Challenge>>;

    /// List active challenges, newest first
    async fn list_active_challenges(&self) -> Result<Vec<Challenge>>;

    /// Count participants of a challenge
    async fn count_participants(&self, challenge_id: Uuid) -> Result<i64>;

    /// Get one participant record
    async fn get_participant(
        &self,
        challenge_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<ChallengeParticipant>>;

    /// Add a participant to a challenge
    async fn join_challenge(&self, participant: &ChallengeParticipant) -> Result<()>;

    /// Update a participant's progress counter
    async fn update_participant_progress(
        &self,
        challenge_id: Uuid,
        user_id: Uuid,
        progress: i64,
    ) -> Result<()>;

    /// Mark a participant completed, exactly once
    async fn complete_participant(
        &self,
        challenge_id: Uuid,
        user_id: Uuid,
        progress: i64,
    ) -> Result<bool>;

    // ================================
    // Progress Entries
    // ================================

    /// Record a progress entry
    async fn create_progress_entry(&self, entry: &ProgressEntry) -> Result<()>;

    /// Get a user's progress entries, newest first
    async fn get_progress_entries(&self, user_id: Uuid, limit: i64)
        -> Result<Vec<ProgressEntry>>;
}
