use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use shared_database::AppState;

use crate::handlers;

pub fn appointment_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", post(handlers::book_appointment))
        .route("/availability", get(handlers::get_booked_times))
        .route("/latest", get(handlers::get_latest_appointment))
        .route("/reminders", get(handlers::get_appointment_reminders))
        .with_state(state)
}
