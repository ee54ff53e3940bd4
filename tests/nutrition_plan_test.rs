// ABOUTME: Integration tests for the nutrition formula engine and plan assembly
// ABOUTME: Verifies reference values, goal adjustments, and the incomplete-profile guard
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitSphere

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitsphere::intelligence::nutrition::{
    basal_metabolic_rate, carbs_requirement_grams, daily_calorie_target,
    daily_calorie_target_with_activity, fats_requirement_grams, protein_requirement_grams,
};
use fitsphere::intelligence::NutritionPlan;
use fitsphere::models::{FitnessGoal, FoodPreference, Gender, Profile};
use uuid::Uuid;

fn complete_profile() -> Profile {
    let mut profile = Profile::new(Uuid::new_v4());
    profile.weight_kg = Some(70.0);
    profile.height_cm = Some(175.0);
    profile.age = Some(25);
    profile.gender = Gender::Male;
    profile
}

#[test]
fn test_reference_plan_values() {
    let profile = complete_profile();
    let plan = NutritionPlan::for_profile(&profile).unwrap();

    // BMR 1673.75, TDEE 2510.625, general goal keeps it
    assert_eq!(plan.daily_calories, 2511);
    assert_eq!(plan.macros.protein_grams, 112);
    assert_eq!(plan.macros.carbs_grams, 282);
    assert_eq!(plan.macros.fats_grams, 70);
    assert_eq!(plan.water_intake_ml, 2500);
}

#[test]
fn test_goal_changes_calories_and_protein() {
    let mut profile = complete_profile();
    profile.fitness_goal = FitnessGoal::MuscleGain;
    let plan = NutritionPlan::for_profile(&profile).unwrap();

    assert_eq!(plan.daily_calories, 2887);
    assert_eq!(plan.macros.protein_grams, 140);

    profile.fitness_goal = FitnessGoal::WeightLoss;
    let plan = NutritionPlan::for_profile(&profile).unwrap();
    assert_eq!(plan.daily_calories, 2134);
    assert_eq!(plan.macros.protein_grams, 154);
}

#[test]
fn test_gender_offsets() {
    let male = basal_metabolic_rate(80.0, 180.0, 30.0, Gender::Male);
    let female = basal_metabolic_rate(80.0, 180.0, 30.0, Gender::Female);
    let other = basal_metabolic_rate(80.0, 180.0, 30.0, Gender::Other);

    assert!((male - female - 166.0).abs() < f64::EPSILON);
    assert!((male - other - 55.0).abs() < f64::EPSILON);
}

#[test]
fn test_activity_multiplier_is_configurable() {
    let sedentary = daily_calorie_target_with_activity(1600.0, FitnessGoal::GeneralFitness, 1.2);
    assert_eq!(sedentary, 1920);
    assert_eq!(
        daily_calorie_target(1600.0, FitnessGoal::GeneralFitness),
        2400
    );
}

#[test]
fn test_macro_formulas_are_deterministic() {
    for calories in [1500, 2000, 2500, 3200] {
        assert_eq!(
            carbs_requirement_grams(calories),
            carbs_requirement_grams(calories)
        );
        assert_eq!(
            fats_requirement_grams(calories),
            fats_requirement_grams(calories)
        );
    }
    assert_eq!(protein_requirement_grams(62.3, FitnessGoal::WeightLoss), 137);
}

#[test]
fn test_incomplete_profile_is_rejected() {
    for missing in ["weight", "height", "age"] {
        let mut profile = complete_profile();
        match missing {
            "weight" => profile.weight_kg = None,
            "height" => profile.height_cm = None,
            _ => profile.age = None,
        }
        let error = NutritionPlan::for_profile(&profile).unwrap_err();
        assert_eq!(error.http_status(), 400);
        assert_eq!(error.message, "Please complete your profile first");
    }
}

#[test]
fn test_plan_meals_follow_diet_preference() {
    let mut profile = complete_profile();
    profile.food_preference = FoodPreference::Vegan;
    let plan = NutritionPlan::for_profile(&profile).unwrap();
    assert!(plan.meals.breakfast.contains(&"Fruit smoothie"));

    // Unset preference serves the vegetarian menu
    profile.food_preference = FoodPreference::NoPreference;
    let plan = NutritionPlan::for_profile(&profile).unwrap();
    assert!(plan.meals.breakfast.contains(&"Idli with sambar"));
}
