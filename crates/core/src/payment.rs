//! Request schemas for payment writes and tax calculation.
//!
//! Raw payloads deserialize leniently (every field optional) so that a
//! missing or malformed field becomes a [`CoreError::Validation`] naming the
//! field, rather than an opaque deserialization failure.

use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

use crate::error::CoreError;
use crate::types::Date;
use crate::validation::{ensure_finite, parse_date, parse_optional_date, parse_rate, require};

/// Body of `POST /payments` and `PUT /payments/{id}` as received.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct PaymentPayload {
    #[validate(length(min = 1, max = 100))]
    pub company: Option<String>,
    pub amount: Option<f64>,
    pub payment_date: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub status: Option<String>,
    pub due_date: Option<String>,
    pub tax_rate: Option<f64>,
}

/// Validated payment fields ready for the store.
///
/// `tax_rate` stays optional: on create a missing rate is stored as `0`, on
/// update it leaves the stored rate untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentFields {
    pub company: String,
    pub amount: f64,
    pub payment_date: Option<Date>,
    pub status: String,
    pub due_date: Date,
    pub tax_rate: Option<f64>,
}

impl PaymentPayload {
    pub fn validate_fields(self) -> Result<PaymentFields, CoreError> {
        self.validate()?;

        let company = require("company", self.company)?;
        let amount = ensure_finite("amount", require("amount", self.amount)?)?;
        let status = require("status", self.status)?;
        let due_date = parse_date("due_date", &require("due_date", self.due_date)?)?;
        let payment_date = parse_optional_date("payment_date", self.payment_date.as_deref())?;
        let tax_rate = self
            .tax_rate
            .map(|rate| ensure_finite("tax_rate", rate))
            .transpose()?;

        Ok(PaymentFields {
            company,
            amount,
            payment_date,
            status,
            due_date,
            tax_rate,
        })
    }
}

/// Body of `POST /payments/calculate_tax` as received.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalculateTaxPayload {
    pub due_date: Option<String>,
    pub tax_rate: Option<Value>,
}

/// Validated calculate-tax query. `tax_rate` is a percentage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaxQuery {
    pub due_date: Date,
    pub tax_rate: f64,
}

impl CalculateTaxPayload {
    pub fn validate_query(self) -> Result<TaxQuery, CoreError> {
        let due_date = parse_date("due_date", &require("due_date", self.due_date)?)?;
        let tax_rate = parse_rate("tax_rate", &require("tax_rate", self.tax_rate)?)?;
        Ok(TaxQuery { due_date, tax_rate })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    fn payload(value: Value) -> PaymentPayload {
        serde_json::from_value(value).unwrap()
    }

    fn full() -> Value {
        json!({
            "company": "Acme",
            "amount": 100.0,
            "payment_date": null,
            "status": "pending",
            "due_date": "2024-01-01",
            "tax_rate": 5.0
        })
    }

    #[test]
    fn valid_payload_produces_fields() {
        let fields = payload(full()).validate_fields().unwrap();

        assert_eq!(fields.company, "Acme");
        assert_eq!(fields.amount, 100.0);
        assert_eq!(fields.payment_date, None);
        assert_eq!(fields.status, "pending");
        assert_eq!(fields.due_date, Date::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(fields.tax_rate, Some(5.0));
    }

    #[test]
    fn tax_rate_and_payment_date_are_optional() {
        let fields = payload(json!({
            "company": "Acme",
            "amount": 1,
            "status": "paid",
            "due_date": "2024-01-01",
            "payment_date": ""
        }))
        .validate_fields()
        .unwrap();

        assert_eq!(fields.tax_rate, None);
        assert_eq!(fields.payment_date, None);
    }

    #[test]
    fn each_required_field_is_enforced() {
        for field in ["company", "amount", "status", "due_date"] {
            let mut value = full();
            value.as_object_mut().unwrap().remove(field);

            let err = payload(value).validate_fields().unwrap_err();
            assert_matches!(&err, CoreError::Validation(msg) if msg.contains(field));
        }
    }

    #[test]
    fn empty_company_fails_length_check() {
        let mut value = full();
        value["company"] = json!("");
        assert_matches!(
            payload(value).validate_fields(),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn overlong_status_fails_length_check() {
        let mut value = full();
        value["status"] = json!("x".repeat(51));
        assert_matches!(
            payload(value).validate_fields(),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn malformed_payment_date_is_rejected() {
        let mut value = full();
        value["payment_date"] = json!("2024/01/05");
        assert_matches!(
            payload(value).validate_fields(),
            Err(CoreError::Validation(msg)) if msg.contains("payment_date")
        );
    }

    #[test]
    fn calculate_tax_query_accepts_string_rate() {
        let query: CalculateTaxPayload =
            serde_json::from_value(json!({"due_date": "2024-01-01", "tax_rate": "10"})).unwrap();
        let query = query.validate_query().unwrap();

        assert_eq!(query.due_date, Date::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(query.tax_rate, 10.0);
    }

    #[test]
    fn calculate_tax_query_rejects_bad_input() {
        let cases = [
            json!({"due_date": "2024-1-x", "tax_rate": 10}),
            json!({"due_date": "2024-01-01", "tax_rate": "ten"}),
            json!({"due_date": "2024-01-01"}),
            json!({"tax_rate": 10}),
        ];
        for case in cases {
            let query: CalculateTaxPayload = serde_json::from_value(case).unwrap();
            assert_matches!(query.validate_query(), Err(CoreError::Validation(_)));
        }
    }
}
