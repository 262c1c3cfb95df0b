use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/habits", post(handlers::add_habit_form))
        .route("/habits/:id/toggle", post(handlers::toggle_habit_form))
        .route("/habits/:id/delete", post(handlers::delete_habit_form))
        .route("/api/habits", get(handlers::get_habits).post(handlers::add_habit))
        .route("/api/habits/:id", axum::routing::delete(handlers::delete_habit))
        .route("/api/habits/:id/toggle", post(handlers::toggle_habit))
        .route("/api/stats", get(handlers::get_stats))
        .with_state(state)
}
