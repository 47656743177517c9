use shared_database::{AppState, Database, DbError};

use crate::models::Department;

pub struct DepartmentService {
    db: Database,
}

impl DepartmentService {
    pub fn new(state: &AppState) -> Self {
        Self {
            db: state.db.clone(),
        }
    }

    pub async fn list_departments(&self) -> Result<Vec<Department>, DbError> {
        let departments = sqlx::query_as::<_, Department>(
            "SELECT id, name, description, location, phone FROM departments ORDER BY id",
        )
        .fetch_all(self.db.pool())
        .await?;

        Ok(departments)
    }
}
