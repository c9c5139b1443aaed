pub mod health;
pub mod payment;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// ```text
/// /health                          service and database health
///
/// /payments                        list, create
/// /payments/{id}                   get, update, delete
/// /payments/due_date/{due_date}    payments due that day + flat-rate summary
/// /payments/calculate_tax          stored-average tax summary (POST)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/payments", payment::router())
}
