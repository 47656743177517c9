use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use tracing::{debug, info};

use crate::error::DbError;

static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

const DEMO_SEED: &str = include_str!("../seeds/demo.sql");

#[derive(Debug, Clone)]
pub struct Database(pub SqlitePool);

impl Database {
    pub async fn connect(database_url: &str, max: u32) -> Result<Self, DbError> {
        debug!("Opening database pool ({} connections max)", max);
        let pool = SqlitePoolOptions::new()
            .max_connections(max)
            .connect(database_url)
            .await?;
        Ok(Self(pool))
    }

    pub fn from_pool(pool: SqlitePool) -> Self {
        Self(pool)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.0
    }

    pub async fn migrate(&self) -> Result<(), DbError> {
        MIGRATOR.run(&self.0).await?;
        info!("Database migrations applied");
        Ok(())
    }

    /// Loads the demo departments, doctors and FAQs. Safe to run repeatedly.
    pub async fn seed_demo(&self) -> Result<(), DbError> {
        sqlx::raw_sql(DEMO_SEED).execute(&self.0).await?;
        info!("Demo data seeded");
        Ok(())
    }

    /// Connectivity probe: the store computes `1 + 1`.
    pub async fn ping(&self) -> Result<i64, DbError> {
        let solution: i64 = sqlx::query_scalar("SELECT 1 + 1 AS solution")
            .fetch_one(&self.0)
            .await?;
        Ok(solution)
    }

    pub async fn close(&self) {
        self.0.close().await;
    }
}
