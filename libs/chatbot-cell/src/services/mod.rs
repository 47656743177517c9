pub mod advisor;
pub mod chat_history;
pub mod faq;
pub mod replies;

pub use advisor::{advise, SymptomRule, SYMPTOM_RULES};
pub use chat_history::ChatHistoryService;
pub use faq::FaqService;
pub use replies::{random_refusal, REFUSALS};
