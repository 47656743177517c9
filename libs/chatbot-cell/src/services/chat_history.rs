use tracing::{info, warn};

use shared_database::{AppState, Database, DbError};

use crate::models::ChatHistoryEntry;

pub struct ChatHistoryService {
    db: Database,
}

impl ChatHistoryService {
    pub fn new(state: &AppState) -> Self {
        Self {
            db: state.db.clone(),
        }
    }

    pub async fn save(&self, user_input: &str, bot_response: &str) -> Result<i64, DbError> {
        let result = sqlx::query("INSERT INTO chat_history (user_input, bot_response) VALUES (?, ?)")
            .bind(user_input)
            .bind(bot_response)
            .execute(self.db.pool())
            .await?;

        Ok(result.last_insert_rowid())
    }

    /// Sets `is_correct` on the entry and returns the number of rows touched.
    /// The id is bound as received, so an unknown or malformed id updates nothing.
    pub async fn record_feedback(&self, chat_id: &str, is_correct: Option<bool>) -> Result<u64, DbError> {
        let result = sqlx::query("UPDATE chat_history SET is_correct = ? WHERE id = ?")
            .bind(is_correct)
            .bind(chat_id)
            .execute(self.db.pool())
            .await?;

        let updated = result.rows_affected();
        if updated == 0 {
            warn!("Feedback for unknown chat entry {:?}", chat_id);
        } else {
            info!("Recorded feedback {:?} for chat entry {}", is_correct, chat_id);
        }
        Ok(updated)
    }

    pub async fn find(&self, chat_id: i64) -> Result<Option<ChatHistoryEntry>, DbError> {
        let entry = sqlx::query_as::<_, ChatHistoryEntry>(
            "SELECT id, user_input, bot_response, is_correct, created_at FROM chat_history WHERE id = ?",
        )
        .bind(chat_id)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(entry)
    }
}
