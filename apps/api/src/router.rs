use std::sync::Arc;

use axum::{http::StatusCode, response::IntoResponse, Json, Router};
use serde_json::json;

use appointment_cell::router::appointment_routes;
use chatbot_cell::router::chatbot_routes;
use doctor_cell::router::{department_routes, doctor_routes};
use monitoring_cell::router::monitoring_routes;
use shared_database::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(monitoring_routes(state.clone()))
        .nest("/api/departments", department_routes(state.clone()))
        .nest("/api/doctors", doctor_routes(state.clone()))
        .nest("/api/appointments", appointment_routes(state.clone()))
        .nest("/api", chatbot_routes(state))
        .fallback(route_not_found)
}

async fn route_not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Route not found" })))
}
