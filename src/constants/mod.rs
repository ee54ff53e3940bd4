// ABOUTME: Application constants and policy values for the FitSphere backend
// ABOUTME: Energy formulas, workout budgets, gamification rates, and server defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitSphere

//! Application constants
//!
//! Numeric policy values live here rather than inline so the recommendation
//! engine, routes, and tests all agree on the same numbers.

/// Energy and macronutrient formula constants
pub mod energy {
    /// Activity multiplier applied to BMR to estimate total daily energy expenditure
    pub const ACTIVITY_MULTIPLIER: f64 = 1.5;

    /// Calorie adjustment for a weight-loss goal (15% deficit)
    pub const WEIGHT_LOSS_FACTOR: f64 = 0.85;
    /// Calorie adjustment for a muscle-gain goal (15% surplus)
    pub const MUSCLE_GAIN_FACTOR: f64 = 1.15;
    /// Calorie adjustment for an endurance goal (10% surplus)
    pub const ENDURANCE_FACTOR: f64 = 1.10;

    /// Protein target in grams per kg bodyweight for weight loss
    pub const PROTEIN_G_PER_KG_WEIGHT_LOSS: f64 = 2.2;
    /// Protein target in grams per kg bodyweight for muscle gain
    pub const PROTEIN_G_PER_KG_MUSCLE_GAIN: f64 = 2.0;
    /// Protein target in grams per kg bodyweight for all other goals
    pub const PROTEIN_G_PER_KG_DEFAULT: f64 = 1.6;

    /// Share of daily calories allotted to carbohydrates
    pub const CARB_CALORIE_SHARE: f64 = 0.45;
    /// Share of daily calories allotted to fats
    pub const FAT_CALORIE_SHARE: f64 = 0.25;
    /// Energy density of carbohydrates in kcal per gram
    pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
    /// Energy density of fat in kcal per gram
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

    /// Fixed daily water intake target in millilitres, not derived from the profile
    pub const DAILY_WATER_INTAKE_ML: i64 = 2500;
}

/// Workout assembly constants
pub mod workout {
    /// Time budget assumed per exercise when sizing a session, in minutes
    pub const MINUTES_PER_EXERCISE: i64 = 4;
    /// Estimated working time per set in seconds, added to the prescribed rest
    pub const WORK_SECONDS_PER_SET: i64 = 30;
    /// Estimated energy expenditure in kcal per workout minute
    pub const CALORIES_PER_MINUTE: f64 = 8.0;
    /// Session length used when neither the request nor the profile provides one
    pub const DEFAULT_SESSION_MINUTES: i64 = 30;
    /// Maximum number of workouts returned by the history endpoint
    pub const HISTORY_LIMIT: i64 = 50;
}

/// Difficulty progression thresholds, in whole weeks of account tenure
pub mod progression {
    /// Below this tenure the stored fitness level is used unchanged
    pub const EARLY_TENURE_WEEKS: i64 = 2;
    /// Below this tenure a beginner trains at intermediate difficulty
    pub const BEGINNER_PROMOTION_WEEKS: i64 = 4;
    /// Below this tenure an intermediate trains at advanced difficulty
    pub const INTERMEDIATE_PROMOTION_WEEKS: i64 = 8;
}

/// Gamification ledger constants
pub mod gamification {
    /// Experience points earned per workout minute
    pub const XP_PER_WORKOUT_MINUTE: i64 = 2;
    /// Streak length at which the weekly badge unlocks
    pub const WEEK_STREAK_THRESHOLD: i64 = 7;
    /// Streak length at which the monthly badge unlocks
    pub const MONTH_STREAK_THRESHOLD: i64 = 30;
    /// Badge identifier for a seven day streak
    pub const WEEK_STREAK_BADGE: &str = "7-day-streak";
    /// Badge identifier for a thirty day streak
    pub const MONTH_STREAK_BADGE: &str = "30-day-streak";
    /// Attempts made to commit a ledger update before surfacing a conflict
    pub const LEDGER_RETRY_LIMIT: u32 = 3;
    /// XP reward used when a challenge does not configure one
    pub const DEFAULT_CHALLENGE_XP_REWARD: i64 = 100;
}

/// Request handling limits
pub mod limits {
    /// Maximum progress entries returned by the history endpoint
    pub const PROGRESS_HISTORY_LIMIT: i64 = 100;
    /// Minimum accepted password length at registration
    pub const MIN_PASSWORD_LENGTH: usize = 8;
    /// Minimum accepted profile age in years
    pub const MIN_PROFILE_AGE_YEARS: i64 = 13;
    /// Request body size cap in bytes
    pub const MAX_REQUEST_BODY_BYTES: usize = 1024 * 1024;
    /// Per-request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
}

/// Server defaults used when the environment does not override them
pub mod defaults {
    /// Default HTTP listen port
    pub const HTTP_PORT: u16 = 8081;
    /// Default database location
    pub const DATABASE_URL: &str = "sqlite:./data/fitsphere.db";
    /// Default JWT lifetime in hours
    pub const TOKEN_EXPIRY_HOURS: i64 = 24;
    /// Default daily workout time stored on new profiles, in minutes
    pub const DAILY_WORKOUT_MINUTES: i64 = 30;
}

/// Service identity strings
pub mod service_names {
    /// Name reported by logs and the health endpoint
    pub const FITSPHERE_SERVER: &str = "fitsphere-server";
}
