use std::sync::Arc;

use axum::{routing::get, Router};

use shared_database::AppState;

use crate::handlers::test_db_connection;

pub fn monitoring_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/test-db", get(test_db_connection))
        .with_state(state)
}
