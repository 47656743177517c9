pub mod error;
pub mod pool;
pub mod state;

pub use error::DbError;
pub use pool::Database;
pub use state::AppState;
