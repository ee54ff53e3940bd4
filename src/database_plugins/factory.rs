// ABOUTME: Database factory dispatching to the backend selected by the URL
// ABOUTME: Currently SQLite only; the enum keeps the seam for further backends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitSphere

//! Database factory
//!
//! Routes and binaries hold this enum rather than a concrete backend.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use super::sqlite::SqliteDatabase;
use super::DatabaseProvider;
use crate::intelligence::LedgerOutcome;
use crate::models::{
    Challenge, ChallengeParticipant, Profile, ProgressEntry, User, Workout,
};

/// Database instance dispatching to the configured backend
#[derive(Clone)]
pub enum Database {
    /// SQLite backend
    Sqlite(SqliteDatabase),
}

impl Database {
    /// Human-readable backend description for startup logs
    #[must_use]
    pub const fn backend_info(&self) -> &'static str {
        match self {
            Self::Sqlite(_) => "SQLite",
        }
    }
}

#[async_trait]
impl DatabaseProvider for Database {
    async fn new(database_url: &str) -> Result<Self> {
        let sqlite = SqliteDatabase::new(database_url).await?;
        Ok(Self::Sqlite(sqlite))
    }

    async fn migrate(&self) -> Result<()> {
        match self {
            Self::Sqlite(db) => db.migrate().await,
        }
    }

    async fn create_user(&self, user: &User) -> Result<Uuid> {
        match self {
            Self::Sqlite(db) => db.create_user(user).await,
        }
    }

    async fn get_user(&self, user_id: Uuid) -> Result<Option<User>> {
        match self {
            Self::Sqlite(db) => db.get_user(user_id).await,
        }
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        match self {
            Self::Sqlite(db) => db.get_user_by_email(email).await,
        }
    }

    async fn update_last_active(&self, user_id: Uuid) -> Result<()> {
        match self {
            Self::Sqlite(db) => db.update_last_active(user_id).await,
        }
    }

    async fn get_user_count(&self) -> Result<i64> {
        match self {
            Self::Sqlite(db) => db.get_user_count().await,
        }
    }

    async fn increment_user_xp(&self, user_id: Uuid, amount: i64) -> Result<()> {
        match self {
            Self::Sqlite(db) => db.increment_user_xp(user_id, amount).await,
        }
    }

    async fn commit_workout_ledger(
        &self,
        user_id: Uuid,
        expected_last_workout_date: Option<NaiveDate>,
        outcome: &LedgerOutcome,
    ) -> Result<bool> {
        match self {
            Self::Sqlite(db) => {
                db.commit_workout_ledger(user_id, expected_last_workout_date, outcome)
                    .await
            }
        }
    }

    async fn upsert_profile(&self, profile: &Profile) -> Result<()> {
        match self {
            Self::Sqlite(db) => db.upsert_profile(profile).await,
        }
    }

    async fn get_profile(&self, user_id: Uuid) -> Result<Option<Profile>> {
        match self {
            Self::Sqlite(db) => db.get_profile(user_id).await,
        }
    }

    async fn create_workout(&self, workout: &Workout) -> Result<()> {
        match self {
            Self::Sqlite(db) => db.create_workout(workout).await,
        }
    }

    async fn get_workout(&self, user_id: Uuid, workout_id: Uuid) -> Result<Option<Workout>> {
        match self {
            Self::Sqlite(db) => db.get_workout(user_id, workout_id).await,
        }
    }

    async fn get_user_workouts(&self, user_id: Uuid, limit: i64) -> Result<Vec<Workout>> {
        match self {
            Self::Sqlite(db) => db.get_user_workouts(user_id, limit).await,
        }
    }

    async fn mark_workout_completed(
        &self,
        user_id: Uuid,
        workout_id: Uuid,
        completed_at: DateTime<Utc>,
    ) -> Result<bool> {
        match self {
            Self::Sqlite(db) => {
                db.mark_workout_completed(user_id, workout_id, completed_at)
                    .await
            }
        }
    }

    async fn create_challenge(&self, challenge: &Challenge) -> Result<()> {
        match self {
            Self::Sqlite(db) => db.create_challenge(challenge).await,
        }
    }

    async fn get_challenge(&self, challenge_id: Uuid) -> Result<Option<Challenge>> {
        match self {
            Self::Sqlite(db) => db.get_challenge(challenge_id).await,
        }
    }

    async fn list_active_challenges(&self) -> Result<Vec<Challenge>> {
        match self {
            Self::Sqlite(db) => db.list_active_challenges().await,
        }
    }

    async fn count_participants(&self, challenge_id: Uuid) -> Result<i64> {
        match self {
            Self::Sqlite(db) => db.count_participants(challenge_id).await,
        }
    }

    async fn get_participant(
        &self,
        challenge_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<ChallengeParticipant>> {
        match self {
            Self::Sqlite(db) => db.get_participant(challenge_id, user_id).await,
        }
    }

    async fn join_challenge(&self, participant: &ChallengeParticipant) -> Result<()> {
        match self {
            Self::Sqlite(db) => db.join_challenge(participant).await,
        }
    }

    async fn update_participant_progress(
        &self,
        challenge_id: Uuid,
        user_id: Uuid,
        progress: i64,
    ) -> Result<()> {
        match self {
            Self::Sqlite(db) => {
                db.update_participant_progress(challenge_id, user_id, progress)
                    .await
            }
        }
    }

    async fn complete_participant(
        &self,
        challenge_id: Uuid,
        user_id: Uuid,
        progress: i64,
    ) -> Result<bool> {
        match self {
            Self::Sqlite(db) => {
                db.complete_participant(challenge_id, user_id, progress)
                    .await
            }
        }
    }

    async fn create_progress_entry(&self, entry: &ProgressEntry) -> Result<()> {
        match self {
            Self::Sqlite(db) => db.create_progress_entry(entry).await,
        }
    }

    async fn get_progress_entries(
        &self,
        user_id: Uuid,
        limit: i64,
    ) -> Result<Vec<ProgressEntry>> {
        match self {
            Self::Sqlite(db) => db.get_progress_entries(user_id, limit).await,
        }
    }
}
