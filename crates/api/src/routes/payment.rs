//! Route definitions for the `/payments` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::payment;
use crate::state::AppState;

/// Routes mounted at `/payments`.
///
/// ```text
/// GET    /                        -> list
/// POST   /                        -> create
/// GET    /{id}                    -> get_by_id
/// PUT    /{id}                    -> update
/// DELETE /{id}                    -> delete
/// GET    /due_date/{due_date}     -> list_by_due_date
/// POST   /calculate_tax           -> calculate_tax
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(payment::list).post(payment::create))
        .route("/calculate_tax", post(payment::calculate_tax))
        .route("/due_date/{due_date}", get(payment::list_by_due_date))
        .route(
            "/{id}",
            get(payment::get_by_id)
                .put(payment::update)
                .delete(payment::delete),
        )
}
