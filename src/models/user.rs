// ABOUTME: User account model with gamification state
// ABOUTME: XP, streak, last workout date, and the append-only badge set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitSphere

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user
///
/// Gamification state (`xp`, `streak`, `last_workout_date`, `badges`) is
/// mutated only by the ledger update that runs on workout or challenge
/// completion. XP never decreases, and a badge once earned is never removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: Uuid,
    /// Email address, lowercased and trimmed, unique across accounts
    pub email: String,
    /// Display name
    pub display_name: Option<String>,
    /// Hashed password for authentication
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Accumulated experience points, monotonically non-decreasing
    pub xp: i64,
    /// Current daily workout streak
    pub streak: i64,
    /// Calendar date (UTC) of the most recent completed workout
    pub last_workout_date: Option<NaiveDate>,
    /// Earned badge identifiers, append-only, duplicates forbidden
    pub badges: Vec<String>,
    /// Whether the account is active
    pub is_active: bool,
    /// When the account was created
    pub created_at: DateTime<Utc>,
    /// Last time the user accessed the system
    pub last_active: DateTime<Utc>,
}

impl User {
    /// Create a new user with the given email and password hash
    #[must_use]
    pub fn new(email: String, password_hash: String, display_name: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            display_name,
            password_hash,
            xp: 0,
            streak: 0,
            last_workout_date: None,
            badges: Vec::new(),
            is_active: true,
            created_at: now,
            last_active: now,
        }
    }

    /// Check whether the user already holds a badge
    #[must_use]
    pub fn has_badge(&self, badge: &str) -> bool {
        self.badges.iter().any(|b| b == badge)
    }

    /// Whole weeks elapsed since account creation, clamped non-negative
    #[must_use]
    pub fn weeks_active(&self, now: DateTime<Utc>) -> i64 {
        (now - self.created_at).num_weeks().max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_weeks_active_floors_partial_weeks() {
        let mut user = User::new("a@example.com".into(), "hash".into(), None);
        let now = Utc::now();
        user.created_at = now - Duration::days(13);
        assert_eq!(user.weeks_active(now), 1);
        user.created_at = now - Duration::days(14);
        assert_eq!(user.weeks_active(now), 2);
    }

    #[test]
    fn test_weeks_active_never_negative() {
        let mut user = User::new("a@example.com".into(), "hash".into(), None);
        let now = Utc::now();
        user.created_at = now + Duration::days(3);
        assert_eq!(user.weeks_active(now), 0);
    }
}
