use shared_models::error::AppError;

#[derive(thiserror::Error, Debug)]
pub enum DbError {
    #[error("sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

// Store failures surface as 500 with the driver's own message.
impl From<DbError> for AppError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::Sqlx(e) => AppError::Database(e.to_string()),
            DbError::Migration(e) => AppError::Database(e.to_string()),
        }
    }
}
