// ABOUTME: SQLite implementation of the DatabaseProvider trait
// ABOUTME: Thin wrapper delegating to the concrete Database manager
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitSphere

//! SQLite database implementation
//!
//! Wraps the concrete SQLite database manager to implement the
//! `DatabaseProvider` trait.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use super::DatabaseProvider;
use crate::intelligence::LedgerOutcome;
use crate::models::{
    Challenge, ChallengeParticipant, Profile, ProgressEntry, User, Workout,
};

/// SQLite database implementation
#[derive(Clone)]
pub struct SqliteDatabase {
    inner: crate::database::Database,
}

#[async_trait]
impl DatabaseProvider for SqliteDatabase {
    async fn new(database_url: &str) -> Result<Self> {
        let inner = crate::database::Database::new(database_url).await?;
        Ok(Self { inner })
    }

    async fn migrate(&self) -> Result<()> {
        self.inner.migrate().await
    }

    async fn create_user(&self, user: &User) -> Result<Uuid> {
        self.inner.create_user(user).await
    }

    async fn get_user(&self, user_id: Uuid) -> Result<Option<User>> {
        self.inner.get_user(user_id).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.inner.get_user_by_email(email).await
    }

    async fn update_last_active(&self, user_id: Uuid) -> Result<()> {
        self.inner.update_last_active(user_id).await
    }

    async fn get_user_count(&self) -> Result<i64> {
        self.inner.get_user_count().await
    }

    async fn increment_user_xp(&self, user_id: Uuid, amount: i64) -> Result<()> {
        self.inner.increment_user_xp(user_id, amount).await
    }

    async fn commit_workout_ledger(
        &self,
        user_id: Uuid,
        expected_last_workout_date: Option<NaiveDate>,
        outcome: &LedgerOutcome,
    ) -> Result<bool> {
        self.inner
            .commit_workout_ledger(user_id, expected_last_workout_date, outcome)
            .await
    }

    async fn upsert_profile(&self, profile: &Profile) -> Result<()> {
        self.inner.upsert_profile(profile).await
    }

    async fn get_profile(&self, user_id: Uuid) -> Result<Option<Profile>> {
        self.inner.get_profile(user_id).await
    }

    async fn create_workout(&self, workout: &Workout) -> Result<()> {
        self.inner.create_workout(workout).await
    }

    async fn get_workout(&self, user_id: Uuid, workout_id: Uuid) -> Result<Option<Workout>> {
        self.inner.get_workout(user_id, workout_id).await
    }

    async fn get_user_workouts(&self, user_id: Uuid, limit: i64) -> Result<Vec<Workout>> {
        self.inner.get_user_workouts(user_id, limit).await
    }

    async fn mark_workout_completed(
        &self,
        user_id: Uuid,
        workout_id: Uuid,
        completed_at: DateTime<Utc>,
    ) -> Result<bool> {
        self.inner
            .mark_workout_completed(user_id, workout_id, completed_at)
            .await
    }

    async fn create_challenge(&self, challenge: &Challenge) -> Result<()> {
        self.inner.create_challenge(challenge).await
    }

    async fn get_challenge(&self, challenge_id: Uuid) -> Result<Option<Challenge>> {
        self.inner.get_challenge(challenge_id).await
    }

    async fn list_active_challenges(&self) -> Result<Vec<Challenge>> {
        self.inner.list_active_challenges().await
    }

    async fn count_participants(&self, challenge_id: Uuid) -> Result<i64> {
        self.inner.count_participants(challenge_id).await
    }

    async fn get_participant(
        &self,
        challenge_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<ChallengeParticipant>> {
        self.inner.get_participant(challenge_id, user_id).await
    }

    async fn join_challenge(&self, participant: &ChallengeParticipant) -> Result<()> {
        self.inner.join_challenge(participant).await
    }

    async fn update_participant_progress(
        &self,
        challenge_id: Uuid,
        user_id: Uuid,
        progress: i64,
    ) -> Result<()> {
        self.inner
            .update_participant_progress(challenge_id, user_id, progress)
            .await
    }

    async fn complete_participant(
        &self,
        challenge_id: Uuid,
        user_id: Uuid,
        progress: i64,
    ) -> Result<bool> {
        self.inner
            .complete_participant(challenge_id, user_id, progress)
            .await
    }

    async fn create_progress_entry(&self, entry: &ProgressEntry) -> Result<()> {
        self.inner.create_progress_entry(entry).await
    }

    async fn get_progress_entries(
        &self,
        user_id: Uuid,
        limit: i64,
    ) -> Result<Vec<ProgressEntry>> {
        self.inner.get_progress_entries(user_id, limit).await
    }
}
