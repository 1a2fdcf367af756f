use serde::Deserialize;

use super::{Validate, require_non_blank, require_non_negative};
use crate::error::SchoolError;

#[derive(Debug, Clone, Deserialize)]
pub struct FeeCreate {
    pub grade: String,
    pub semester: String,
    pub amount: f64,
}

impl Validate for FeeCreate {
    fn validate(&self) -> Result<(), SchoolError> {
        require_non_blank("grade", &self.grade)?;
        require_non_blank("semester", &self.semester)?;
        require_non_negative("amount", self.amount)
    }
}
