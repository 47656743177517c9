// =====================================================================================
// MONITORING CELL - DATABASE CONNECTIVITY PROBE
// =====================================================================================

pub mod handlers;
pub mod models;
pub mod router;

pub use models::ConnectivityReport;
pub use router::monitoring_routes;
