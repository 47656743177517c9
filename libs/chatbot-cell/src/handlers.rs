use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};

use shared_database::AppState;
use shared_models::error::AppError;

use crate::models::{Faq, FaqQuery, FeedbackRequest, SaveChatRequest, SymptomAdvice, SymptomCheckRequest};
use crate::services::{advise, random_refusal, ChatHistoryService, FaqService};

#[axum::debug_handler]
pub async fn list_faqs(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FaqQuery>,
) -> Result<Json<Vec<Faq>>, AppError> {
    let category = query.category.as_deref().filter(|c| !c.is_empty());
    let faqs = FaqService::new(&state).list_faqs(category).await?;
    Ok(Json(faqs))
}

#[axum::debug_handler]
pub async fn check_symptoms(Json(request): Json<SymptomCheckRequest>) -> Json<SymptomAdvice> {
    Json(advise(&request.symptoms))
}

#[axum::debug_handler]
pub async fn save_chat_history(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SaveChatRequest>,
) -> Result<Json<Value>, AppError> {
    let chat_id = ChatHistoryService::new(&state)
        .save(&request.user_input, &request.bot_response)
        .await?;

    Ok(Json(json!({
        "message": "Chat history saved",
        "chatId": chat_id
    })))
}

#[axum::debug_handler]
pub async fn submit_feedback(
    State(state): State<Arc<AppState>>,
    Path(chat_id): Path<String>,
    Json(request): Json<FeedbackRequest>,
) -> Result<Json<Value>, AppError> {
    ChatHistoryService::new(&state)
        .record_feedback(&chat_id, request.is_correct)
        .await?;

    Ok(Json(json!({ "message": "Feedback received" })))
}

#[axum::debug_handler]
pub async fn angry_response() -> Json<Value> {
    Json(json!({ "response": random_refusal() }))
}
