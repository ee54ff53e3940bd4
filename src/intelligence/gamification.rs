// ABOUTME: Gamification ledger computation for XP, streaks, and badges
// ABOUTME: Pure function over a snapshot; the storage layer commits it with a CAS write
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitSphere

//! Gamification ledger
//!
//! Computes the next XP/streak/badge state for a workout completion.
//! "Today" is the UTC calendar date. The computation is pure; the caller
//! reads a snapshot, applies this function, and commits the outcome with a
//! compare-and-swap keyed on the previously read last-workout date, so
//! concurrent completions are detected instead of silently clobbering each
//! other.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::constants::gamification;
use crate::models::User;

/// Snapshot of the gamification-relevant user state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GamificationState {
    /// Accumulated experience points
    pub xp: i64,
    /// Current daily streak
    pub streak: i64,
    /// UTC date of the most recent completed workout
    pub last_workout_date: Option<NaiveDate>,
    /// Earned badges
    pub badges: Vec<String>,
}

impl From<&User> for GamificationState {
    fn from(user: &User) -> Self {
        Self {
            xp: user.xp,
            streak: user.streak,
            last_workout_date: user.last_workout_date,
            badges: user.badges.clone(),
        }
    }
}

/// The state to commit after a workout completion
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LedgerOutcome {
    /// XP earned by this completion
    pub xp_gained: i64,
    /// XP total to write back
    pub new_xp: i64,
    /// Streak to write back
    pub new_streak: i64,
    /// Last-workout date to write back, always today
    pub new_last_workout_date: NaiveDate,
    /// Full badge set to write back
    pub new_badges: Vec<String>,
    /// Badges unlocked by this completion
    pub awarded_badges: Vec<String>,
}

/// XP earned for completing a workout of the given length
#[must_use]
pub const fn workout_xp(duration_minutes: i64) -> i64 {
    duration_minutes * gamification::XP_PER_WORKOUT_MINUTE
}

/// Compute the ledger update for one workout completion
///
/// The first qualifying completion of a day extends the streak when the
/// previous workout was exactly yesterday and resets it to 1 otherwise.
/// Further completions on the same day add XP but leave the streak alone.
/// Badges unlock only at the instant the streak becomes exactly 7 or 30 and
/// are never duplicated.
#[must_use]
pub fn apply_workout_completion(
    state: &GamificationState,
    duration_minutes: i64,
    today: NaiveDate,
) -> LedgerOutcome {
    let xp_gained = workout_xp(duration_minutes);
    let new_xp = state.xp.saturating_add(xp_gained);

    let first_completion_today = state.last_workout_date.is_none_or(|last| last < today);

    let mut new_streak = state.streak;
    let mut new_badges = state.badges.clone();
    let mut awarded_badges = Vec::new();

    if first_completion_today {
        let yesterday = today.checked_sub_days(Days::new(1));
        new_streak = match (state.last_workout_date, yesterday) {
            (Some(last), Some(y)) if last == y => state.streak + 1,
            _ => 1,
        };

        for (threshold, badge) in [
            (
                gamification::WEEK_STREAK_THRESHOLD,
                gamification::WEEK_STREAK_BADGE,
            ),
            (
                gamification::MONTH_STREAK_THRESHOLD,
                gamification::MONTH_STREAK_BADGE,
            ),
        ] {
            if new_streak == threshold && !new_badges.iter().any(|b| b == badge) {
                new_badges.push(badge.to_owned());
                awarded_badges.push(badge.to_owned());
            }
        }
    }

    LedgerOutcome {
        xp_gained,
        new_xp,
        new_streak,
        new_last_workout_date: today,
        new_badges,
        awarded_badges,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
    }

    fn state(
        xp: i64,
        streak: i64,
        last: Option<NaiveDate>,
        badges: &[&str],
    ) -> GamificationState {
        GamificationState {
            xp,
            streak,
            last_workout_date: last,
            badges: badges.iter().map(|b| (*b).to_owned()).collect(),
        }
    }

    #[test]
    fn test_xp_rate() {
        assert_eq!(workout_xp(17), 34);
        assert_eq!(workout_xp(0), 0);
    }

    #[test]
    fn test_consecutive_day_extends_streak_and_awards_week_badge() {
        let today = date(2026, 3, 10);
        let outcome = apply_workout_completion(
            &state(100, 6, Some(date(2026, 3, 9)), &[]),
            20,
            today,
        );

        assert_eq!(outcome.new_streak, 7);
        assert_eq!(outcome.new_xp, 140);
        assert_eq!(outcome.awarded_badges, vec!["7-day-streak".to_owned()]);
        assert_eq!(outcome.new_last_workout_date, today);
    }

    #[test]
    fn test_gap_resets_streak_without_badges() {
        let today = date(2026, 3, 10);
        let outcome = apply_workout_completion(
            &state(500, 10, Some(date(2026, 3, 5)), &["7-day-streak"]),
            30,
            today,
        );

        assert_eq!(outcome.new_streak, 1);
        assert!(outcome.awarded_badges.is_empty());
        assert_eq!(outcome.new_badges, vec!["7-day-streak".to_owned()]);
    }

    #[test]
    fn test_first_ever_workout_starts_streak_at_one() {
        let outcome = apply_workout_completion(&state(0, 0, None, &[]), 15, date(2026, 1, 1));
        assert_eq!(outcome.new_streak, 1);
        assert_eq!(outcome.new_xp, 30);
    }

    #[test]
    fn test_same_day_completion_adds_xp_but_not_streak() {
        let today = date(2026, 3, 10);
        let outcome =
            apply_workout_completion(&state(140, 7, Some(today), &["7-day-streak"]), 20, today);

        assert_eq!(outcome.new_streak, 7);
        assert_eq!(outcome.new_xp, 180);
        assert!(outcome.awarded_badges.is_empty());
        // The date is still rewritten to today
        assert_eq!(outcome.new_last_workout_date, today);
    }

    #[test]
    fn test_week_badge_not_duplicated() {
        let today = date(2026, 3, 10);
        let outcome = apply_workout_completion(
            &state(0, 6, Some(date(2026, 3, 9)), &["7-day-streak"]),
            10,
            today,
        );

        assert_eq!(outcome.new_streak, 7);
        assert!(outcome.awarded_badges.is_empty());
        assert_eq!(
            outcome
                .new_badges
                .iter()
                .filter(|b| b.as_str() == "7-day-streak")
                .count(),
            1
        );
    }

    #[test]
    fn test_month_badge_awarded_at_exactly_thirty() {
        let today = date(2026, 3, 10);
        let outcome = apply_workout_completion(
            &state(0, 29, Some(date(2026, 3, 9)), &["7-day-streak"]),
            10,
            today,
        );

        assert_eq!(outcome.new_streak, 30);
        assert_eq!(outcome.awarded_badges, vec!["30-day-streak".to_owned()]);
    }

    #[test]
    fn test_streak_past_threshold_awards_nothing() {
        let today = date(2026, 3, 10);
        let outcome = apply_workout_completion(
            &state(0, 7, Some(date(2026, 3, 9)), &[]),
            10,
            today,
        );

        // Streak 8 passes the badge threshold without unlocking it
        assert_eq!(outcome.new_streak, 8);
        assert!(outcome.awarded_badges.is_empty());
    }
}
