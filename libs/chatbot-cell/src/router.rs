use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use shared_database::AppState;

use crate::handlers;

/// Chat-facing endpoints, mounted under `/api`.
pub fn chatbot_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/faqs", get(handlers::list_faqs))
        .route("/symptom-checker", post(handlers::check_symptoms))
        .route("/chat-history", post(handlers::save_chat_history))
        .route("/chat-history/{chat_id}/feedback", put(handlers::submit_feedback))
        .route("/angry-response", get(handlers::angry_response))
        .with_state(state)
}
