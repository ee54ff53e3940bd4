// ABOUTME: Community challenge models with per-participant progress tracking
// ABOUTME: Completion grants the challenge's fixed XP reward exactly once
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitSphere

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::gamification;

/// A community challenge users can join
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Challenge {
    /// Unique challenge identifier
    pub id: Uuid,
    /// Display title
    pub title: String,
    /// Longer description shown in listings
    pub description: String,
    /// Free-form category tag, e.g. "workout" or "streak"
    pub challenge_type: String,
    /// Progress target; a participant completes at this count
    pub duration_days: i64,
    /// XP granted on completion
    pub xp_reward: i64,
    /// When the challenge opened
    pub start_date: DateTime<Utc>,
    /// When the challenge closes
    pub end_date: Option<DateTime<Utc>>,
    /// Whether the challenge accepts participants
    pub is_active: bool,
    /// When the challenge was created
    pub created_at: DateTime<Utc>,
}

impl Challenge {
    /// Create an active challenge with the default XP reward
    #[must_use]
    pub fn new(
        title: String,
        description: String,
        challenge_type: String,
        duration_days: i64,
        end_date: Option<DateTime<Utc>>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            challenge_type,
            duration_days,
            xp_reward: gamification::DEFAULT_CHALLENGE_XP_REWARD,
            start_date: now,
            end_date,
            is_active: true,
            created_at: now,
        }
    }
}

/// A user's membership and progress within a challenge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChallengeParticipant {
    /// Challenge joined
    pub challenge_id: Uuid,
    /// Participating user
    pub user_id: Uuid,
    /// Progress counter toward the challenge duration
    pub progress: i64,
    /// Set once progress reaches the challenge duration
    pub completed: bool,
    /// When the user joined
    pub joined_at: DateTime<Utc>,
}

impl ChallengeParticipant {
    /// Create a fresh participant record
    #[must_use]
    pub fn new(challenge_id: Uuid, user_id: Uuid) -> Self {
        Self {
            challenge_id,
            user_id,
            progress: 0,
            completed: false,
            joined_at: Utc::now(),
        }
    }
}
