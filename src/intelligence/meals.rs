// ABOUTME: Curated meal suggestion tables keyed by dietary preference
// ABOUTME: Full lists for browsing plus uniform-random single picks per slot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitSphere

//! Meal suggestion tables
//!
//! Process-wide constant menu data, Indian cuisine. The daily pick takes an
//! injected random source so callers can fix the seed; production handlers
//! pass `rand::thread_rng()`.

use rand::Rng;
use serde::Serialize;

use crate::models::FoodPreference;

/// Candidate dishes for each meal slot of one dietary preference
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct MealSuggestions {
    /// Breakfast candidates
    pub breakfast: &'static [&'static str],
    /// Lunch candidates
    pub lunch: &'static [&'static str],
    /// Dinner candidates
    pub dinner: &'static [&'static str],
    /// Snack candidates
    pub snacks: &'static [&'static str],
}

const VEGETARIAN: MealSuggestions = MealSuggestions {
    breakfast: &[
        "Oats with fruits and nuts",
        "Poha with vegetables",
        "Upma with vegetables",
        "Idli with sambar",
        "Paratha with curd",
    ],
    lunch: &[
        "Dal, rice, and vegetables",
        "Rajma with rice",
        "Chole with roti",
        "Vegetable curry with roti",
        "Sambar rice with vegetables",
    ],
    dinner: &[
        "Vegetable khichdi",
        "Dal tadka with roti",
        "Mixed vegetable curry with rice",
        "Palak paneer with roti",
        "Vegetable pulao",
    ],
    snacks: &[
        "Fruits with nuts",
        "Roasted chana",
        "Sprouts salad",
        "Yogurt with fruits",
    ],
};

const NON_VEGETARIAN: MealSuggestions = MealSuggestions {
    breakfast: &[
        "Eggs with toast",
        "Chicken sandwich",
        "Egg curry with roti",
        "Omelette with vegetables",
    ],
    lunch: &[
        "Chicken curry with rice",
        "Fish curry with rice",
        "Mutton curry with roti",
        "Egg curry with rice",
    ],
    dinner: &[
        "Grilled chicken with vegetables",
        "Fish fry with rice",
        "Chicken biryani",
        "Egg curry with roti",
    ],
    snacks: &["Boiled eggs", "Chicken salad", "Fish tikka"],
};

const VEGAN: MealSuggestions = MealSuggestions {
    breakfast: &[
        "Oats with fruits",
        "Poha with vegetables",
        "Upma",
        "Fruit smoothie",
    ],
    lunch: &[
        "Dal with rice",
        "Rajma with rice",
        "Chole with roti",
        "Vegetable curry",
    ],
    dinner: &[
        "Vegetable khichdi",
        "Dal tadka with roti",
        "Mixed vegetable curry",
    ],
    snacks: &["Fruits", "Roasted chana", "Sprouts salad"],
};

/// Full suggestion lists for a dietary preference
///
/// An unset or unrecognized preference is served the vegetarian menu.
#[must_use]
pub const fn suggestions_for(preference: FoodPreference) -> &'static MealSuggestions {
    match preference {
        FoodPreference::NonVegetarian => &NON_VEGETARIAN,
        FoodPreference::Vegan => &VEGAN,
        FoodPreference::Vegetarian | FoodPreference::NoPreference => &VEGETARIAN,
    }
}

/// One dish per slot for today
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct TodaysMeals {
    /// Breakfast pick
    pub breakfast: &'static str,
    /// Lunch pick
    pub lunch: &'static str,
    /// Dinner pick
    pub dinner: &'static str,
    /// Snack pick
    pub snack: &'static str,
}

fn pick<R: Rng + ?Sized>(rng: &mut R, candidates: &'static [&'static str]) -> &'static str {
    candidates[rng.gen_range(0..candidates.len())]
}

/// Choose one dish per slot, independently and uniformly at random
///
/// Repeated calls may repeat or vary freely within each slot's candidates;
/// determinism is up to the injected `rng`.
pub fn todays_picks<R: Rng + ?Sized>(preference: FoodPreference, rng: &mut R) -> TodaysMeals {
    let menu = suggestions_for(preference);
    TodaysMeals {
        breakfast: pick(rng, menu.breakfast),
        lunch: pick(rng, menu.lunch),
        dinner: pick(rng, menu.dinner),
        snack: pick(rng, menu.snacks),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_unknown_preference_falls_back_to_vegetarian() {
        assert_eq!(
            suggestions_for(FoodPreference::NoPreference),
            &VEGETARIAN
        );
    }

    #[test]
    fn test_list_shapes_match_menu() {
        assert_eq!(VEGETARIAN.breakfast.len(), 5);
        assert_eq!(VEGETARIAN.snacks.len(), 4);
        assert_eq!(NON_VEGETARIAN.lunch.len(), 4);
        assert_eq!(NON_VEGETARIAN.snacks.len(), 3);
        assert_eq!(VEGAN.dinner.len(), 3);
    }

    #[test]
    fn test_picks_are_deterministic_under_fixed_seed() {
        let mut a = ChaCha8Rng::seed_from_u64(42);
        let mut b = ChaCha8Rng::seed_from_u64(42);
        assert_eq!(
            todays_picks(FoodPreference::Vegan, &mut a),
            todays_picks(FoodPreference::Vegan, &mut b)
        );
    }

    #[test]
    fn test_picks_come_from_candidate_lists() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..50 {
            let picks = todays_picks(FoodPreference::NonVegetarian, &mut rng);
            assert!(NON_VEGETARIAN.breakfast.contains(&picks.breakfast));
            assert!(NON_VEGETARIAN.lunch.contains(&picks.lunch));
            assert!(NON_VEGETARIAN.dinner.contains(&picks.dinner));
            assert!(NON_VEGETARIAN.snacks.contains(&picks.snack));
        }
    }
}
