use std::sync::Arc;

use axum::{extract::State, Json};
use tracing::{info, instrument};

use shared_database::AppState;
use shared_models::error::AppError;

use crate::models::ConnectivityReport;

/// Runs a trivial query so operators can tell whether the store is reachable.
#[instrument(skip(state))]
#[axum::debug_handler]
pub async fn test_db_connection(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ConnectivityReport>, AppError> {
    let solution = state.db.ping().await?;
    info!("Database probe answered {}", solution);
    Ok(Json(ConnectivityReport::connected(solution)))
}
