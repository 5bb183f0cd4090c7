mod dto;
mod governor;
pub mod handlers;

pub use dto::{DayChanges, MealSlotChange, MealType};
pub use governor::MealChangeGovernor;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(handlers::read_routes())
        .merge(handlers::write_routes())
}
