use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{error, instrument};

use crate::state::AppState;

use super::dto::{
    AllowanceResponse, MealSlotChange, MealType, NewDayResponse, RecordChangeRequest,
};

// --- public routers ---

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/meal-changes/changed", get(changed_meals))
        .route("/meal-changes/new-day", get(new_day))
        .route("/meal-changes/:meal_type", get(get_record))
        .route("/meal-changes/:meal_type/allowance", get(allowance))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/meal-changes/:meal_type", post(record_change))
        .route("/meal-changes/reset", post(reset_daily_changes))
}

// --- handlers ---

#[instrument(skip(state))]
async fn changed_meals(
    State(state): State<AppState>,
) -> Result<Json<Vec<MealType>>, (StatusCode, String)> {
    let meals = state.governor.changed_meals().await.map_err(internal)?;
    Ok(Json(meals))
}

#[instrument(skip(state))]
async fn new_day(
    State(state): State<AppState>,
) -> Result<Json<NewDayResponse>, (StatusCode, String)> {
    let new_day = state.governor.is_new_day().await.map_err(internal)?;
    Ok(Json(NewDayResponse { new_day }))
}

#[instrument(skip(state))]
async fn get_record(
    State(state): State<AppState>,
    Path(meal_type): Path<MealType>,
) -> Result<Json<MealSlotChange>, (StatusCode, String)> {
    match state
        .governor
        .meal_change_record(meal_type)
        .await
        .map_err(internal)?
    {
        Some(record) => Ok(Json(record)),
        None => Err((
            StatusCode::NOT_FOUND,
            format!("{meal_type} has not been changed today"),
        )),
    }
}

#[instrument(skip(state))]
async fn allowance(
    State(state): State<AppState>,
    Path(meal_type): Path<MealType>,
) -> Result<Json<AllowanceResponse>, (StatusCode, String)> {
    let can_change = state
        .governor
        .can_change_meal(meal_type)
        .await
        .map_err(internal)?;
    Ok(Json(AllowanceResponse { can_change }))
}

#[instrument(skip(state, body))]
async fn record_change(
    State(state): State<AppState>,
    Path(meal_type): Path<MealType>,
    Json(body): Json<RecordChangeRequest>,
) -> Result<StatusCode, (StatusCode, String)> {
    let recorded = state
        .governor
        .try_record_meal_change(meal_type, &body.food_id)
        .await
        .map_err(internal)?;
    if recorded {
        Ok(StatusCode::CREATED)
    } else {
        Err((
            StatusCode::CONFLICT,
            format!("{meal_type} was already changed today"),
        ))
    }
}

#[instrument(skip(state))]
async fn reset_daily_changes(
    State(state): State<AppState>,
) -> Result<StatusCode, (StatusCode, String)> {
    state
        .governor
        .reset_daily_changes()
        .await
        .map_err(internal)?;
    Ok(StatusCode::NO_CONTENT)
}

fn internal(e: anyhow::Error) -> (StatusCode, String) {
    error!(error = %e, "meal-change storage failure");
    (StatusCode::INTERNAL_SERVER_ERROR, "internal error".into())
}
