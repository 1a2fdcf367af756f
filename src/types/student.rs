use serde::Deserialize;

use super::{Validate, require_non_blank};
use crate::error::SchoolError;

/// Fields for creating a student, also used as the full replacement on update.
#[derive(Debug, Clone, Deserialize)]
pub struct StudentCreate {
    pub name: String,
    pub grade: String,
    pub section: String,
    pub student_code: String,
}

impl Validate for StudentCreate {
    fn validate(&self) -> Result<(), SchoolError> {
        require_non_blank("name", &self.name)?;
        require_non_blank("grade", &self.grade)?;
        require_non_blank("section", &self.section)?;
        require_non_blank("student_code", &self.student_code)
    }
}
