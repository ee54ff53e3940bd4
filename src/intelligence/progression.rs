// ABOUTME: Tenure-based difficulty progression for generated workouts
// ABOUTME: Upgrades the stored fitness level as account age grows, never downgrades
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitSphere

//! Difficulty progression rule
//!
//! Maps a stored fitness level plus whole weeks of account tenure to the
//! effective difficulty tier a workout is generated at. First matching rule
//! wins; the mapping is monotonic in tenure and advanced is absorbing.

use crate::constants::progression;
use crate::models::FitnessLevel;

/// Effective difficulty for a user with the given tenure
#[must_use]
pub fn effective_difficulty(stored: FitnessLevel, weeks_active: i64) -> FitnessLevel {
    let weeks = weeks_active.max(0);
    if weeks < progression::EARLY_TENURE_WEEKS {
        return stored;
    }
    if weeks < progression::BEGINNER_PROMOTION_WEEKS && stored == FitnessLevel::Beginner {
        return FitnessLevel::Intermediate;
    }
    if weeks < progression::INTERMEDIATE_PROMOTION_WEEKS && stored == FitnessLevel::Intermediate {
        return FitnessLevel::Advanced;
    }
    match stored {
        FitnessLevel::Beginner => FitnessLevel::Intermediate,
        FitnessLevel::Intermediate | FitnessLevel::Advanced => FitnessLevel::Advanced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_early_tenure_keeps_stored_level() {
        for level in [
            FitnessLevel::Beginner,
            FitnessLevel::Intermediate,
            FitnessLevel::Advanced,
        ] {
            assert_eq!(effective_difficulty(level, 0), level);
            assert_eq!(effective_difficulty(level, 1), level);
        }
    }

    #[test]
    fn test_beginner_promotion_schedule() {
        assert_eq!(
            effective_difficulty(FitnessLevel::Beginner, 2),
            FitnessLevel::Intermediate
        );
        assert_eq!(
            effective_difficulty(FitnessLevel::Beginner, 3),
            FitnessLevel::Intermediate
        );
        // A long-tenured beginner still trains at intermediate
        assert_eq!(
            effective_difficulty(FitnessLevel::Beginner, 52),
            FitnessLevel::Intermediate
        );
    }

    #[test]
    fn test_intermediate_promotion_schedule() {
        assert_eq!(
            effective_difficulty(FitnessLevel::Intermediate, 4),
            FitnessLevel::Advanced
        );
        assert_eq!(
            effective_difficulty(FitnessLevel::Intermediate, 8),
            FitnessLevel::Advanced
        );
    }

    #[test]
    fn test_advanced_is_absorbing() {
        for weeks in [2, 4, 8, 100] {
            assert_eq!(
                effective_difficulty(FitnessLevel::Advanced, weeks),
                FitnessLevel::Advanced
            );
        }
    }

    #[test]
    fn test_monotonic_in_tenure() {
        let tiers: Vec<FitnessLevel> = [0, 1, 2, 3, 4, 5, 8, 20]
            .iter()
            .map(|&w| effective_difficulty(FitnessLevel::Beginner, w))
            .collect();
        assert!(tiers.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(tiers.first(), Some(&FitnessLevel::Beginner));
        assert_eq!(tiers.last(), Some(&FitnessLevel::Intermediate));

        let from_intermediate: Vec<FitnessLevel> = [0, 1, 2, 3, 4, 5, 8, 20]
            .iter()
            .map(|&w| effective_difficulty(FitnessLevel::Intermediate, w))
            .collect();
        assert!(from_intermediate.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(from_intermediate.last(), Some(&FitnessLevel::Advanced));
    }

    #[test]
    fn test_negative_tenure_clamped() {
        assert_eq!(
            effective_difficulty(FitnessLevel::Beginner, -3),
            FitnessLevel::Beginner
        );
    }
}
