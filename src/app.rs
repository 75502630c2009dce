use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/mode/daily", post(handlers::select_daily))
        .route("/mode/weekly", post(handlers::select_weekly))
        .route("/api/growth", get(handlers::get_growth))
        .route("/api/mode", post(handlers::select_mode))
        .with_state(state)
}
