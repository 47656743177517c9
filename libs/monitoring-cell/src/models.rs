use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectivityReport {
    pub message: String,
    pub solution: i64,
}

impl ConnectivityReport {
    pub fn connected(solution: i64) -> Self {
        Self {
            message: "Database connection successful".to_string(),
            solution,
        }
    }
}
