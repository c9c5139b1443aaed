//! Payment entity model.

use serde::Serialize;
use sqlx::FromRow;
use taxpay_core::tax::TaxLine;
use taxpay_core::types::{Date, DbId};

/// A row from the `payments` table.
///
/// Dates serialize as `YYYY-MM-DD`; an unpaid record has `payment_date: null`.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct PaymentRecord {
    pub id: DbId,
    pub company: String,
    pub amount: f64,
    pub payment_date: Option<Date>,
    pub status: String,
    pub due_date: Date,
    pub tax_rate: f64,
}

impl PaymentRecord {
    /// The figures this record contributes to a due-date tax summary.
    pub fn tax_line(&self) -> TaxLine {
        TaxLine::new(self.amount, self.tax_rate)
    }
}
