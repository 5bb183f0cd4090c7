//! Daily calorie and macro targets derived from a user's biometrics.
//!
//! BMR via Mifflin-St Jeor, scaled to TDEE by activity level, shifted by a
//! fixed per-goal calorie adjustment, then split into macro grams.

use super::dto::{
    ActivityLevel, ConsumedNutrition, DailyCalorieNeeds, Gender, Goal, MacroDistribution,
    RemainingNutrition, TodayProgress, UserBiometrics,
};
use crate::meal_changes::MealType;

/// Basal Metabolic Rate (Mifflin-St Jeor).
///
/// men: `10w + 6.25h - 5a + 5`, women: `10w + 6.25h - 5a - 161`. For "other"
/// we use the average of the two adjustments (-78); that is our own choice,
/// not a published formula.
fn basal_metabolic_rate(weight_kg: f64, height_cm: f64, age_years: u32, gender: Gender) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age_years);
    match gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
        Gender::Other => base - 78.0,
    }
}

fn activity_multiplier(activity: ActivityLevel) -> f64 {
    match activity {
        ActivityLevel::Sedentary => 1.2,          // little or no exercise
        ActivityLevel::LightlyActive => 1.375,    // light exercise 1-3 days/week
        ActivityLevel::ModeratelyActive => 1.55,  // moderate exercise 3-5 days/week
        ActivityLevel::VeryActive => 1.725,       // hard exercise 6-7 days/week
        ActivityLevel::ExtraActive => 1.9,        // very hard exercise & physical job
    }
}

/// Daily calorie deficit/surplus per goal.
fn goal_adjustment(goal: Goal) -> f64 {
    match goal {
        Goal::LoseWeight => -500.0, // ~1 lb/week loss
        Goal::MaintainWeight => 0.0,
        Goal::GainWeight => 300.0,
        Goal::BuildMuscle => 400.0,
        Goal::ImproveHealth => 0.0,
    }
}

/// Fractions of total calories as (protein, fat, carbs). Higher protein for
/// the goals where satiety or muscle growth matters.
fn macro_split(goal: Goal) -> (f64, f64, f64) {
    match goal {
        Goal::LoseWeight | Goal::BuildMuscle => (0.35, 0.25, 0.40),
        Goal::MaintainWeight | Goal::GainWeight | Goal::ImproveHealth => (0.30, 0.30, 0.40),
    }
}

/// Compute the daily calorie target and macro gram targets.
///
/// Pure; inputs are not validated here (explicitly the caller's job).
pub fn daily_calorie_needs(biometrics: &UserBiometrics) -> DailyCalorieNeeds {
    let bmr = basal_metabolic_rate(
        biometrics.weight_kg,
        biometrics.height_cm,
        biometrics.age_years,
        biometrics.gender,
    );
    let tdee = bmr * activity_multiplier(biometrics.activity);
    let total_calories = (tdee + goal_adjustment(biometrics.goal)).round() as i32;

    // protein/carbs 4 kcal/g, fat 9 kcal/g
    let (protein_pct, fat_pct, carb_pct) = macro_split(biometrics.goal);
    let total = f64::from(total_calories);
    let macro_distribution = MacroDistribution {
        protein: (total * protein_pct / 4.0).round() as i32,
        carbohydrates: (total * carb_pct / 4.0).round() as i32,
        fat: (total * fat_pct / 9.0).round() as i32,
    };

    DailyCalorieNeeds {
        total_calories,
        macro_distribution,
    }
}

fn remaining_of(target: i32, consumed: f64) -> i32 {
    (f64::from(target) - consumed).round().max(0.0) as i32
}

/// Today's progress against a daily target: what is left to eat, floored at
/// zero, plus the meal slots not logged yet (canonical order).
pub fn today_progress(
    needs: &DailyCalorieNeeds,
    consumed: ConsumedNutrition,
    logged_meals: &[MealType],
) -> TodayProgress {
    let remaining = RemainingNutrition {
        calories: remaining_of(needs.total_calories, consumed.calories),
        protein: remaining_of(needs.macro_distribution.protein, consumed.protein),
        carbs: remaining_of(needs.macro_distribution.carbohydrates, consumed.carbs),
        fat: remaining_of(needs.macro_distribution.fat, consumed.fat),
    };
    let remaining_meals = MealType::ALL
        .into_iter()
        .filter(|meal| !logged_meals.contains(meal))
        .collect();

    TodayProgress {
        total_calories: needs.total_calories,
        macro_targets: needs.macro_distribution,
        consumed,
        remaining,
        remaining_meals,
    }
}
