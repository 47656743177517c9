use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Faq {
    pub id: i64,
    pub category: String,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ChatHistoryEntry {
    pub id: i64,
    pub user_input: String,
    pub bot_response: String,
    pub is_correct: Option<bool>,
    pub created_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomAdvice {
    pub recommendation: String,
    pub urgency: Urgency,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FaqQuery {
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SymptomCheckRequest {
    #[serde(default)]
    pub symptoms: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SaveChatRequest {
    pub user_input: String,
    pub bot_response: String,
}

/// `is_correct: null` clears earlier feedback.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedbackRequest {
    pub is_correct: Option<bool>,
}
