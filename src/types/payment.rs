use serde::Deserialize;

use super::{Validate, require_non_blank, require_non_negative};
use crate::error::SchoolError;

/// Status stored when the caller does not supply one.
pub const DEFAULT_PAYMENT_STATUS: &str = "PAID";

/// `method` and `status` are free-form labels. By convention `method` is one
/// of cash/bank/mobile and `status` one of PAID/PARTIAL/PENDING.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentCreate {
    pub student_id: i64,
    pub amount: f64,
    pub month: String,
    pub method: String,
    #[serde(default)]
    pub status: Option<String>,
}

impl PaymentCreate {
    pub fn status_or_default(&self) -> &str {
        self.status.as_deref().unwrap_or(DEFAULT_PAYMENT_STATUS)
    }
}

impl Validate for PaymentCreate {
    fn validate(&self) -> Result<(), SchoolError> {
        require_non_negative("amount", self.amount)?;
        require_non_blank("month", &self.month)?;
        require_non_blank("method", &self.method)?;
        if let Some(status) = self.status.as_deref() {
            require_non_blank("status", status)?;
        }
        Ok(())
    }
}
