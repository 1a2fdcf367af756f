use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use tracing::info;

use crate::db::models::Payment;
use crate::db::sqlite::SchoolStorage;
use crate::error::{Entity, SchoolError};
use crate::types::PaymentCreate;

const SELECT_PAYMENT: &str =
    "SELECT id, student_id, amount, month, method, status, created_at FROM payments";

impl SchoolStorage {
    /// Record a payment for an existing student.
    ///
    /// The existence check and the insert share one pooled connection, which
    /// returns to the pool when it drops on any exit path.
    pub async fn create_payment(&self, input: PaymentCreate) -> Result<Payment, SchoolError> {
        let mut conn = self.pool.acquire().await?;

        let student: Option<i64> = sqlx::query_scalar("SELECT id FROM students WHERE id = ?")
            .bind(input.student_id)
            .fetch_optional(&mut *conn)
            .await?;
        if student.is_none() {
            return Err(SchoolError::NotFound(Entity::Student));
        }

        let status = input.status_or_default().to_string();
        let created_at = Utc::now();
        let result = sqlx::query(
            r#"INSERT INTO payments (student_id, amount, month, method, status, created_at)
               VALUES (?, ?, ?, ?, ?, ?)"#,
        )
        .bind(input.student_id)
        .bind(input.amount)
        .bind(&input.month)
        .bind(&input.method)
        .bind(&status)
        .bind(created_at.to_rfc3339())
        .execute(&mut *conn)
        .await?;

        let payment = Payment {
            id: result.last_insert_rowid(),
            student_id: input.student_id,
            amount: input.amount,
            month: input.month,
            method: input.method,
            status,
            created_at,
        };
        info!(
            id = payment.id,
            student_id = payment.student_id,
            status = %payment.status,
            "payment recorded"
        );
        Ok(payment)
    }

    pub async fn list_payments(&self) -> Result<Vec<Payment>, SchoolError> {
        let rows = sqlx::query(&format!("{SELECT_PAYMENT} ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter().map(Self::row_to_payment).collect()
    }

    pub async fn get_payment(&self, id: i64) -> Result<Payment, SchoolError> {
        let row = sqlx::query(&format!("{SELECT_PAYMENT} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(SchoolError::NotFound(Entity::Payment))?;
        Self::row_to_payment(row)
    }

    fn row_to_payment(row: SqliteRow) -> Result<Payment, SchoolError> {
        let created_at_str: String = row.try_get("created_at")?;
        let created_at: DateTime<Utc> = DateTime::parse_from_rfc3339(&created_at_str)
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?
            .with_timezone(&Utc);

        Ok(Payment {
            id: row.try_get("id")?,
            student_id: row.try_get("student_id")?,
            amount: row.try_get("amount")?,
            month: row.try_get("month")?,
            method: row.try_get("method")?,
            status: row.try_get("status")?,
            created_at,
        })
    }
}
