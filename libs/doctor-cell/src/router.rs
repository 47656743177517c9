use std::sync::Arc;

use axum::{routing::get, Router};

use shared_database::AppState;

use crate::handlers;

pub fn doctor_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::list_doctors))
        // Static segments take priority over `{doctor_id}`.
        .route("/availability", get(handlers::search_doctor_availability))
        .route("/available-today", get(handlers::get_doctors_available_today))
        .route("/{doctor_id}", get(handlers::get_doctor))
        .route("/{doctor_id}/availability", get(handlers::get_doctor_schedule))
        .with_state(state)
}

pub fn department_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::list_departments))
        .with_state(state)
}
