use axum::{Json, extract::State};
use tracing::debug;

use crate::db::Student;
use crate::middleware::{IdPath, ValidJson};
use crate::types::{Ack, StudentCreate};
use crate::{SchoolError, router::SchoolState};

/// POST /students/
pub async fn create_student(
    State(state): State<SchoolState>,
    ValidJson(input): ValidJson<StudentCreate>,
) -> Result<Json<Student>, SchoolError> {
    Ok(Json(state.storage.create_student(input).await?))
}

/// GET /students/
pub async fn list_students(
    State(state): State<SchoolState>,
) -> Result<Json<Vec<Student>>, SchoolError> {
    let students = state.storage.list_students().await?;
    debug!(count = students.len(), "listed students");
    Ok(Json(students))
}

/// GET /students/{id}
pub async fn get_student(
    State(state): State<SchoolState>,
    IdPath(id): IdPath,
) -> Result<Json<Student>, SchoolError> {
    Ok(Json(state.storage.get_student(id).await?))
}

/// PUT /students/{id} -> full replacement of the student's fields.
pub async fn update_student(
    State(state): State<SchoolState>,
    IdPath(id): IdPath,
    ValidJson(input): ValidJson<StudentCreate>,
) -> Result<Json<Student>, SchoolError> {
    Ok(Json(state.storage.update_student(id, input).await?))
}

/// DELETE /students/{id}
pub async fn delete_student(
    State(state): State<SchoolState>,
    IdPath(id): IdPath,
) -> Result<Json<Ack>, SchoolError> {
    state.storage.delete_student(id).await?;
    Ok(Json(Ack::new("Student deleted")))
}

/// POST /students/batch -> all or nothing.
pub async fn create_students_batch(
    State(state): State<SchoolState>,
    ValidJson(inputs): ValidJson<Vec<StudentCreate>>,
) -> Result<Json<Vec<Student>>, SchoolError> {
    Ok(Json(state.storage.create_students_batch(inputs).await?))
}
