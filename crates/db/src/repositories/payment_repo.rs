//! Repository for the `payments` table.

use async_trait::async_trait;
use taxpay_core::payment::PaymentFields;
use taxpay_core::types::{Date, DbId};

use crate::models::payment::PaymentRecord;
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, company, amount, payment_date, status, due_date, tax_rate";

/// Durable CRUD access to payment records.
///
/// Every mutating call commits before it returns. Lookups that find nothing
/// return `None` / `false`; the caller decides how to report absence.
#[async_trait]
pub trait PaymentStore: Send + Sync {
    /// Insert a new payment and return its assigned id.
    ///
    /// A missing `tax_rate` is stored as `0`.
    async fn create(&self, input: &PaymentFields) -> Result<DbId, sqlx::Error>;

    /// Find a payment by id.
    async fn get(&self, id: DbId) -> Result<Option<PaymentRecord>, sqlx::Error>;

    /// All payments in insertion order.
    async fn list(&self) -> Result<Vec<PaymentRecord>, sqlx::Error>;

    /// Payments whose due date is exactly `due_date`, in insertion order.
    async fn list_by_due_date(&self, due_date: Date) -> Result<Vec<PaymentRecord>, sqlx::Error>;

    /// Overwrite every field of a payment. `tax_rate` is only replaced when
    /// supplied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    async fn update(
        &self,
        id: DbId,
        input: &PaymentFields,
    ) -> Result<Option<PaymentRecord>, sqlx::Error>;

    /// Remove a payment. Returns `true` if a row was removed.
    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error>;
}

/// SQLite-backed [`PaymentStore`].
#[derive(Clone, Debug)]
pub struct PaymentRepo {
    pool: DbPool,
}

impl PaymentRepo {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PaymentStore for PaymentRepo {
    async fn create(&self, input: &PaymentFields) -> Result<DbId, sqlx::Error> {
        let id: DbId = sqlx::query_scalar(
            "INSERT INTO payments (company, amount, payment_date, status, due_date, tax_rate)
             VALUES (?1, ?2, ?3, ?4, ?5, COALESCE(?6, 0))
             RETURNING id",
        )
        .bind(&input.company)
        .bind(input.amount)
        .bind(input.payment_date)
        .bind(&input.status)
        .bind(input.due_date)
        .bind(input.tax_rate)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(id, company = %input.company, "Payment row inserted");
        Ok(id)
    }

    async fn get(&self, id: DbId) -> Result<Option<PaymentRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM payments WHERE id = ?1");
        sqlx::query_as::<_, PaymentRecord>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn list(&self) -> Result<Vec<PaymentRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM payments ORDER BY id");
        sqlx::query_as::<_, PaymentRecord>(&query)
            .fetch_all(&self.pool)
            .await
    }

    async fn list_by_due_date(&self, due_date: Date) -> Result<Vec<PaymentRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM payments WHERE due_date = ?1 ORDER BY id");
        sqlx::query_as::<_, PaymentRecord>(&query)
            .bind(due_date)
            .fetch_all(&self.pool)
            .await
    }

    async fn update(
        &self,
        id: DbId,
        input: &PaymentFields,
    ) -> Result<Option<PaymentRecord>, sqlx::Error> {
        let query = format!(
            "UPDATE payments SET
                company = ?2,
                amount = ?3,
                payment_date = ?4,
                status = ?5,
                due_date = ?6,
                tax_rate = COALESCE(?7, tax_rate)
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PaymentRecord>(&query)
            .bind(id)
            .bind(&input.company)
            .bind(input.amount)
            .bind(input.payment_date)
            .bind(&input.status)
            .bind(input.due_date)
            .bind(input.tax_rate)
            .fetch_optional(&self.pool)
            .await
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM payments WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
