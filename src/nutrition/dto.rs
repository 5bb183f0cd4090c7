use serde::{Deserialize, Serialize};

use crate::meal_changes::MealType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    ExtraActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::ExtraActive,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    LoseWeight,
    MaintainWeight,
    GainWeight,
    BuildMuscle,
    ImproveHealth,
}

/// Biometric and goal inputs for the daily-needs calculation. Values are
/// taken as-is; range validation happens upstream in the profile layer.
#[derive(Debug, Clone, Deserialize)]
pub struct UserBiometrics {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: u32,
    pub gender: Gender,
    pub activity: ActivityLevel,
    pub goal: Goal,
}

/// Macro targets in grams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroDistribution {
    pub protein: i32,
    pub carbohydrates: i32,
    pub fat: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCalorieNeeds {
    pub total_calories: i32,
    pub macro_distribution: MacroDistribution,
}

/// What the user has already eaten today, totalled across logged meals.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ConsumedNutrition {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RemainingNutrition {
    pub calories: i32,
    pub protein: i32,
    pub carbs: i32,
    pub fat: i32,
}

#[derive(Debug, Serialize)]
pub struct TodayProgress {
    pub total_calories: i32,
    pub macro_targets: MacroDistribution,
    pub consumed: ConsumedNutrition,
    pub remaining: RemainingNutrition,
    pub remaining_meals: Vec<MealType>,
}

#[derive(Debug, Deserialize)]
pub struct TodayProgressRequest {
    pub biometrics: UserBiometrics,
    #[serde(default)]
    pub consumed: ConsumedNutrition,
    #[serde(default)]
    pub logged_meals: Vec<MealType>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enums_use_snake_case_on_the_wire() {
        assert_eq!(
            serde_json::to_string(&ActivityLevel::ModeratelyActive).unwrap(),
            "\"moderately_active\""
        );
        assert_eq!(
            serde_json::from_str::<Goal>("\"lose_weight\"").unwrap(),
            Goal::LoseWeight
        );
        assert_eq!(
            serde_json::from_str::<Gender>("\"other\"").unwrap(),
            Gender::Other
        );
    }
}
