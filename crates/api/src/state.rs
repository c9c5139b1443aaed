use std::sync::Arc;

use taxpay_db::repositories::{PaymentRepo, PaymentStore};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, used directly only by the health check.
    pub pool: taxpay_db::DbPool,
    /// Payment persistence.
    pub payments: Arc<dyn PaymentStore>,
}

impl AppState {
    /// Build state backed by the SQLite payment repository on `pool`.
    pub fn new(pool: taxpay_db::DbPool) -> Self {
        let payments = Arc::new(PaymentRepo::new(pool.clone()));
        Self { pool, payments }
    }
}
