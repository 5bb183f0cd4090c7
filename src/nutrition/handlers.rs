use axum::{routing::post, Json, Router};
use tracing::instrument;

use crate::state::AppState;

use super::dto::{DailyCalorieNeeds, TodayProgress, TodayProgressRequest, UserBiometrics};
use super::planner;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/nutrition/daily-needs", post(daily_needs))
        .route("/nutrition/progress", post(today_progress))
}

#[instrument(skip(body))]
async fn daily_needs(Json(body): Json<UserBiometrics>) -> Json<DailyCalorieNeeds> {
    Json(planner::daily_calorie_needs(&body))
}

#[instrument(skip(body))]
async fn today_progress(Json(body): Json<TodayProgressRequest>) -> Json<TodayProgress> {
    let needs = planner::daily_calorie_needs(&body.biometrics);
    Json(planner::today_progress(
        &needs,
        body.consumed,
        &body.logged_meals,
    ))
}
