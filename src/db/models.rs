use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub grade: String,
    pub section: String,
    pub student_code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct FeeStructure {
    pub id: i64,
    pub grade: String,
    pub semester: String,
    pub amount: f64,
}

/// Stored payment. `student_id` is a plain value and may outlive the student.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Payment {
    pub id: i64,
    pub student_id: i64,
    pub amount: f64,
    pub month: String,
    pub method: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
