use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{delete, get, post, put},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/habits", get(handlers::list_habits).post(handlers::create_habit))
        .route("/api/habits/:id", put(handlers::update_habit).delete(handlers::delete_habit))
        .route("/api/habits/:id/checkin", post(handlers::check_in))
        .route("/api/habits/:id/entries/:date", delete(handlers::delete_entry))
        .route("/api/habits/:id/journal", get(handlers::journal))
        .route("/api/habits/:id/calendar", get(handlers::calendar))
        .route("/api/insights", get(handlers::insights))
        .with_state(state)
}
