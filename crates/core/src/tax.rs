//! Due-date tax summaries.
//!
//! Two summaries exist for the same set of payments and they intentionally
//! disagree:
//!
//! - [`fixed_rate_summary`] applies the flat [`FIXED_TAX_RATE`] to the total.
//! - [`calculate_tax`] reports the mean of the *stored* per-payment rates and
//!   multiplies the total by that mean. The caller-supplied rate only feeds
//!   [`CalculatedTax::input_tax_due`], which is never serialized.
//!
//! Both fail with [`CoreError::Validation`] when a reported figure overflows
//! `f64`, since such a figure cannot be represented in JSON.

use serde::Serialize;

use crate::error::CoreError;
use crate::validation::ensure_finite;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Flat rate used by the due-date listing summary (6%).
pub const FIXED_TAX_RATE: f64 = 0.06;

/// Divisor converting a percentage (`6.0`) into a fraction (`0.06`).
pub const PERCENT: f64 = 100.0;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// The two figures of a payment that take part in tax aggregation.
///
/// Missing values are skipped: a missing amount contributes nothing to the
/// total, and a missing rate is left out of both the sum and the count of
/// the average.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TaxLine {
    pub amount: Option<f64>,
    pub tax_rate: Option<f64>,
}

impl TaxLine {
    pub fn new(amount: f64, tax_rate: f64) -> Self {
        Self {
            amount: Some(amount),
            tax_rate: Some(tax_rate),
        }
    }
}

/// Result of the dynamic calculate-tax aggregation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculatedTax {
    pub total_amount: f64,
    /// Total multiplied by the caller-supplied percentage.
    #[serde(skip)]
    pub input_tax_due: f64,
    /// Average of the stored per-payment rates.
    pub tax_rate: f64,
    /// `total_amount * tax_rate`.
    pub tax_due: f64,
}

/// Result of the fixed-rate summary attached to a due-date listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FixedRateSummary {
    pub total_amount: f64,
    pub tax_rate: f64,
    pub tax_due: f64,
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Sum of all present amounts.
pub fn total_amount(lines: &[TaxLine]) -> f64 {
    lines.iter().filter_map(|l| l.amount).sum()
}

/// Arithmetic mean of the present stored rates, or `0.0` when there are none.
pub fn average_tax_rate(lines: &[TaxLine]) -> f64 {
    let (sum, count) = lines
        .iter()
        .filter_map(|l| l.tax_rate)
        .fold((0.0, 0u32), |(sum, count), rate| (sum + rate, count + 1));

    if count == 0 {
        0.0
    } else {
        sum / f64::from(count)
    }
}

/// Compute the calculate-tax summary for the payments sharing a due date.
///
/// `input_rate` is a percentage (`6.0` means 6%).
pub fn calculate_tax(lines: &[TaxLine], input_rate: f64) -> Result<CalculatedTax, CoreError> {
    let total_amount = ensure_finite("total_amount", total_amount(lines))?;
    let input_tax_due = total_amount * (input_rate / PERCENT);
    let tax_rate = ensure_finite("tax_rate", average_tax_rate(lines))?;
    let tax_due = ensure_finite("tax_due", total_amount * tax_rate)?;

    Ok(CalculatedTax {
        total_amount,
        input_tax_due,
        tax_rate,
        tax_due,
    })
}

/// Compute the flat-rate summary for the payments sharing a due date.
pub fn fixed_rate_summary(lines: &[TaxLine]) -> Result<FixedRateSummary, CoreError> {
    let total_amount = ensure_finite("total_amount", total_amount(lines))?;
    Ok(FixedRateSummary {
        total_amount,
        tax_rate: FIXED_TAX_RATE,
        tax_due: ensure_finite("tax_due", total_amount * FIXED_TAX_RATE)?,
    })
}
