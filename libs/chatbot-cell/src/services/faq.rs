use tracing::debug;

use shared_database::{AppState, Database, DbError};

use crate::models::Faq;

pub struct FaqService {
    db: Database,
}

impl FaqService {
    pub fn new(state: &AppState) -> Self {
        Self {
            db: state.db.clone(),
        }
    }

    /// All FAQs, or only those whose category equals `category` exactly.
    pub async fn list_faqs(&self, category: Option<&str>) -> Result<Vec<Faq>, DbError> {
        debug!("Listing FAQs for category {:?}", category);

        let faqs = match category {
            Some(category) => {
                sqlx::query_as::<_, Faq>(
                    "SELECT id, category, question, answer FROM faqs WHERE category = ? ORDER BY id",
                )
                .bind(category)
                .fetch_all(self.db.pool())
                .await?
            }
            None => {
                sqlx::query_as::<_, Faq>("SELECT id, category, question, answer FROM faqs ORDER BY id")
                    .fetch_all(self.db.pool())
                    .await?
            }
        };

        Ok(faqs)
    }
}
