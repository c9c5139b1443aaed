//! Field-level parsing shared by request payloads and path parameters.

use serde_json::Value;

use crate::error::CoreError;
use crate::types::Date;

/// Wire format for every date the service accepts or returns.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date.
///
/// The year is exactly four digits; month and day are one or two digits.
/// Whitespace and signs are rejected before the calendar check.
pub fn parse_date(field: &str, raw: &str) -> Result<Date, CoreError> {
    let invalid =
        || CoreError::Validation(format!("{field} must be a date in YYYY-MM-DD format"));

    if !has_date_shape(raw) {
        return Err(invalid());
    }
    Date::parse_from_str(raw, DATE_FORMAT).map_err(|_| invalid())
}

fn has_date_shape(raw: &str) -> bool {
    let parts: Vec<&str> = raw.split('-').collect();
    let [year, month, day] = parts.as_slice() else {
        return false;
    };
    let digits = |s: &str, lens: std::ops::RangeInclusive<usize>| {
        lens.contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
    };
    digits(*year, 4..=4) && digits(*month, 1..=2) && digits(*day, 1..=2)
}

/// Parse an optional date where `None` and the empty string both mean "unset".
pub fn parse_optional_date(field: &str, raw: Option<&str>) -> Result<Option<Date>, CoreError> {
    match raw {
        None | Some("") => Ok(None),
        Some(value) => parse_date(field, value).map(Some),
    }
}

/// Unwrap a required field, reporting its name when absent.
pub fn require<T>(field: &str, value: Option<T>) -> Result<T, CoreError> {
    value.ok_or_else(|| CoreError::Validation(format!("{field} is required")))
}

/// Reject NaN and infinities.
pub fn ensure_finite(field: &str, value: f64) -> Result<f64, CoreError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CoreError::Validation(format!(
            "{field} must be a finite number"
        )))
    }
}

/// Parse a rate given either as a JSON number or as a numeric string.
pub fn parse_rate(field: &str, raw: &Value) -> Result<f64, CoreError> {
    let parsed = match raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    let value =
        parsed.ok_or_else(|| CoreError::Validation(format!("{field} must be numeric")))?;
    ensure_finite(field, value)
}
