//! Input shapes accepted by the HTTP layer and the checks they must pass
//! before any storage call.

pub mod fee;
pub mod payment;
pub mod student;

pub use fee::FeeCreate;
pub use payment::{DEFAULT_PAYMENT_STATUS, PaymentCreate};
pub use student::StudentCreate;

use serde::Serialize;

use crate::error::SchoolError;

pub trait Validate {
    fn validate(&self) -> Result<(), SchoolError>;
}

/// A batch is valid only if every element is; the error names the first bad index.
impl<T: Validate> Validate for Vec<T> {
    fn validate(&self) -> Result<(), SchoolError> {
        self.iter().enumerate().try_for_each(|(idx, item)| {
            item.validate().map_err(|e| match e {
                SchoolError::Validation(msg) => SchoolError::Validation(format!("item {idx}: {msg}")),
                other => other,
            })
        })
    }
}

/// Acknowledgement returned by delete endpoints.
#[derive(Debug, Serialize)]
pub struct Ack {
    pub detail: String,
}

impl Ack {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

pub(crate) fn require_non_blank(field: &str, value: &str) -> Result<(), SchoolError> {
    if value.trim().is_empty() {
        return Err(SchoolError::Validation(format!("`{field}` must not be empty")));
    }
    Ok(())
}

pub(crate) fn require_non_negative(field: &str, value: f64) -> Result<(), SchoolError> {
    if !value.is_finite() || value < 0.0 {
        return Err(SchoolError::Validation(format!(
            "`{field}` must be a non-negative amount"
        )));
    }
    Ok(())
}
