mod dto;
pub mod handlers;
pub mod planner;

pub use dto::{
    ActivityLevel, ConsumedNutrition, DailyCalorieNeeds, Gender, Goal, MacroDistribution,
    RemainingNutrition, TodayProgress, UserBiometrics,
};

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    handlers::routes()
}
