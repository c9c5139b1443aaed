//! Handlers for the `/payments` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use taxpay_core::error::CoreError;
use taxpay_core::payment::{CalculateTaxPayload, PaymentPayload};
use taxpay_core::tax::{self, CalculatedTax, FixedRateSummary, TaxLine};
use taxpay_core::types::DbId;
use taxpay_core::validation::parse_date;
use taxpay_db::models::payment::PaymentRecord;

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, PathParam};
use crate::response::{CreatedResponse, MessageResponse};
use crate::state::AppState;

const ENTITY: &str = "Payment";

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

fn tax_lines(payments: &[PaymentRecord]) -> Vec<TaxLine> {
    payments.iter().map(PaymentRecord::tax_line).collect()
}

/// Payments sharing a due date, with the flat-rate summary.
#[derive(Debug, Serialize)]
pub struct DueDateListing {
    pub payments: Vec<PaymentRecord>,
    #[serde(flatten)]
    pub summary: FixedRateSummary,
}

/// POST /payments
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<PaymentPayload>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let fields = input.validate_fields()?;
    let id = state.payments.create(&fields).await?;
    tracing::info!(id, company = %fields.company, "Payment created");
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// GET /payments
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<PaymentRecord>>> {
    let payments = state.payments.list().await?;
    Ok(Json(payments))
}

/// GET /payments/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<PaymentRecord>> {
    let payment = state.payments.get(id).await?.ok_or_else(|| not_found(id))?;
    Ok(Json(payment))
}

/// PUT /payments/{id}
///
/// An unknown id is reported as 404 even when the body is also invalid.
pub async fn update(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
    body: Result<JsonBody<PaymentPayload>, AppError>,
) -> AppResult<Json<MessageResponse>> {
    state.payments.get(id).await?.ok_or_else(|| not_found(id))?;

    let JsonBody(input) = body?;
    let fields = input.validate_fields()?;
    state
        .payments
        .update(id, &fields)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(id, "Payment updated");
    Ok(Json(MessageResponse {
        message: "Payment updated",
    }))
}

/// DELETE /payments/{id}
pub async fn delete(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !state.payments.delete(id).await? {
        return Err(not_found(id));
    }
    tracing::info!(id, "Payment deleted");
    Ok(Json(MessageResponse {
        message: "Payment deleted",
    }))
}

/// GET /payments/due_date/{due_date}
///
/// Lists the payments due on the given day and applies the flat 6% rate to
/// their total.
pub async fn list_by_due_date(
    State(state): State<AppState>,
    PathParam(raw_date): PathParam<String>,
) -> AppResult<Json<DueDateListing>> {
    let due_date = parse_date("due_date", &raw_date)
        .map_err(|_| AppError::BadRequest("Invalid date format".to_string()))?;

    let payments = state.payments.list_by_due_date(due_date).await?;
    let summary = tax::fixed_rate_summary(&tax_lines(&payments))?;

    Ok(Json(DueDateListing { payments, summary }))
}

/// POST /payments/calculate_tax
///
/// The reported `tax_rate` is the average of the stored rates of the matched
/// payments and `tax_due` is derived from it. The rate in the request body
/// is validated but does not change the response.
pub async fn calculate_tax(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CalculateTaxPayload>,
) -> AppResult<Json<CalculatedTax>> {
    let query = input.validate_query().map_err(|err| match err {
        CoreError::Validation(msg) => AppError::BadRequest(format!("Invalid input: {msg}")),
        other => AppError::Core(other),
    })?;

    let payments = state.payments.list_by_due_date(query.due_date).await?;
    let result = tax::calculate_tax(&tax_lines(&payments), query.tax_rate)?;

    tracing::debug!(
        due_date = %query.due_date,
        input_rate = query.tax_rate,
        matched = payments.len(),
        total_amount = result.total_amount,
        input_tax_due = result.input_tax_due,
        tax_rate = result.tax_rate,
        tax_due = result.tax_due,
        "Calculated tax for due date"
    );

    Ok(Json(result))
}
