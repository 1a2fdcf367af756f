use tracing::info;

use crate::db::models::FeeStructure;
use crate::db::sqlite::SchoolStorage;
use crate::error::{Entity, SchoolError};
use crate::types::FeeCreate;

impl SchoolStorage {
    /// Duplicate (grade, semester) pairs are allowed.
    pub async fn create_fee(&self, input: FeeCreate) -> Result<FeeStructure, SchoolError> {
        let result =
            sqlx::query("INSERT INTO fee_structure (grade, semester, amount) VALUES (?, ?, ?)")
                .bind(&input.grade)
                .bind(&input.semester)
                .bind(input.amount)
                .execute(&self.pool)
                .await?;

        let fee = FeeStructure {
            id: result.last_insert_rowid(),
            grade: input.grade,
            semester: input.semester,
            amount: input.amount,
        };
        info!(id = fee.id, grade = %fee.grade, semester = %fee.semester, "fee structure created");
        Ok(fee)
    }

    pub async fn list_fees(&self) -> Result<Vec<FeeStructure>, SchoolError> {
        let fees = sqlx::query_as::<_, FeeStructure>(
            "SELECT id, grade, semester, amount FROM fee_structure ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(fees)
    }

    pub async fn get_fee(&self, id: i64) -> Result<FeeStructure, SchoolError> {
        sqlx::query_as::<_, FeeStructure>(
            "SELECT id, grade, semester, amount FROM fee_structure WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(SchoolError::NotFound(Entity::FeeStructure))
    }

    pub async fn delete_fee(&self, id: i64) -> Result<(), SchoolError> {
        let result = sqlx::query("DELETE FROM fee_structure WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(SchoolError::NotFound(Entity::FeeStructure));
        }
        info!(id, "fee structure deleted");
        Ok(())
    }
}
