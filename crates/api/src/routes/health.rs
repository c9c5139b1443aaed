use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use taxpay_db::StoreStatus;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` when the payments table answers, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    /// Absent when the store could not be read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<StoreStatus>,
}

/// GET /health
///
/// Reads the payment count and schema version rather than pinging the
/// connection, so an unmigrated database also reports `degraded`.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let store = match taxpay_db::store_status(&state.pool).await {
        Ok(store) => Some(store),
        Err(err) => {
            tracing::warn!(error = %err, "Payments store unavailable");
            None
        }
    };

    Json(HealthResponse {
        status: if store.is_some() { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        store,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
