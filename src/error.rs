use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use std::fmt;
use thiserror::Error as ThisError;
use tracing::error;

/// Record kinds, used to name the missing or conflicting entity in messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Student,
    FeeStructure,
    Payment,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Entity::Student => "Student",
            Entity::FeeStructure => "Fee",
            Entity::Payment => "Payment",
        };
        f.write_str(name)
    }
}

#[derive(Debug, ThisError)]
pub enum SchoolError {
    #[error("{0} not found")]
    NotFound(Entity),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Validation(String),

    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),

    /// Boxed, figment errors carry the whole provider metadata.
    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for SchoolError {
    fn from(err: figment::Error) -> Self {
        SchoolError::Config(Box::new(err))
    }
}

impl SchoolError {
    /// Translate a failed insert/update: SQLite unique violations become
    /// `Conflict`, anything else stays a database error.
    pub fn from_write(err: SqlxError, conflict_message: impl FnOnce() -> String) -> Self {
        match &err {
            SqlxError::Database(db_err) if db_err.is_unique_violation() => {
                SchoolError::Conflict(conflict_message())
            }
            _ => SchoolError::DatabaseError(err),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            SchoolError::NotFound(_) => StatusCode::NOT_FOUND,
            SchoolError::Conflict(_) => StatusCode::CONFLICT,
            SchoolError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            SchoolError::DatabaseError(_) | SchoolError::Config(_) | SchoolError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for SchoolError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        let error_body = match self {
            SchoolError::NotFound(_) => ApiErrorBody {
                code: "NOT_FOUND".to_string(),
                message: self.to_string(),
            },
            SchoolError::Conflict(msg) => ApiErrorBody {
                code: "CONFLICT".to_string(),
                message: msg,
            },
            SchoolError::Validation(msg) => ApiErrorBody {
                code: "VALIDATION_ERROR".to_string(),
                message: msg,
            },
            SchoolError::DatabaseError(_) | SchoolError::Config(_) | SchoolError::Io(_) => {
                error!(error = %self, "request failed with internal error");
                ApiErrorBody {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred.".to_string(),
                }
            }
        };
        (status, Json(ApiErrorResponse { error: error_body })).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}
