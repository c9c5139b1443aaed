//! Shared response bodies for payment handlers.

use serde::Serialize;
use taxpay_core::types::DbId;

/// `{ "id": n }` returned after a create.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: DbId,
}

/// `{ "message": "..." }` returned after an update or delete.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
