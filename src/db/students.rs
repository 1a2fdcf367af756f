use sqlx::{Executor, Sqlite};
use tracing::info;

use crate::db::models::Student;
use crate::db::sqlite::SchoolStorage;
use crate::error::{Entity, SchoolError};
use crate::types::StudentCreate;

const SELECT_STUDENT: &str = "SELECT id, name, grade, section, student_code FROM students";

fn duplicate_code(code: &str) -> impl FnOnce() -> String + '_ {
    move || format!("student_code '{code}' already exists")
}

async fn insert_student<'e, E>(executor: E, input: StudentCreate) -> Result<Student, SchoolError>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query(
        "INSERT INTO students (name, grade, section, student_code) VALUES (?, ?, ?, ?)",
    )
    .bind(&input.name)
    .bind(&input.grade)
    .bind(&input.section)
    .bind(&input.student_code)
    .execute(executor)
    .await
    .map_err(|e| SchoolError::from_write(e, duplicate_code(&input.student_code)))?;

    Ok(Student {
        id: result.last_insert_rowid(),
        name: input.name,
        grade: input.grade,
        section: input.section,
        student_code: input.student_code,
    })
}

impl SchoolStorage {
    pub async fn create_student(&self, input: StudentCreate) -> Result<Student, SchoolError> {
        let student = insert_student(&self.pool, input).await?;
        info!(id = student.id, student_code = %student.student_code, "student created");
        Ok(student)
    }

    /// Insert every student in one transaction; any failure rolls back the lot.
    pub async fn create_students_batch(
        &self,
        inputs: Vec<StudentCreate>,
    ) -> Result<Vec<Student>, SchoolError> {
        let mut tx = self.pool.begin().await?;
        let mut created = Vec::with_capacity(inputs.len());

        for input in inputs.into_iter() {
            created.push(insert_student(&mut *tx, input).await?);
        }

        tx.commit().await?;
        info!(count = created.len(), "student batch created");
        Ok(created)
    }

    pub async fn list_students(&self) -> Result<Vec<Student>, SchoolError> {
        let students = sqlx::query_as::<_, Student>(&format!("{SELECT_STUDENT} ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;
        Ok(students)
    }

    pub async fn get_student(&self, id: i64) -> Result<Student, SchoolError> {
        sqlx::query_as::<_, Student>(&format!("{SELECT_STUDENT} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(SchoolError::NotFound(Entity::Student))
    }

    /// Replace all mutable fields of an existing student.
    pub async fn update_student(
        &self,
        id: i64,
        input: StudentCreate,
    ) -> Result<Student, SchoolError> {
        let result = sqlx::query(
            r#"UPDATE students SET
                name = ?,
                grade = ?,
                section = ?,
                student_code = ?
              WHERE id = ?"#,
        )
        .bind(&input.name)
        .bind(&input.grade)
        .bind(&input.section)
        .bind(&input.student_code)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| SchoolError::from_write(e, duplicate_code(&input.student_code)))?;

        if result.rows_affected() == 0 {
            return Err(SchoolError::NotFound(Entity::Student));
        }
        info!(id, "student updated");
        Ok(Student {
            id,
            name: input.name,
            grade: input.grade,
            section: input.section,
            student_code: input.student_code,
        })
    }

    /// Payments referencing the student are left untouched.
    pub async fn delete_student(&self, id: i64) -> Result<(), SchoolError> {
        let result = sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(SchoolError::NotFound(Entity::Student));
        }
        info!(id, "student deleted");
        Ok(())
    }
}
