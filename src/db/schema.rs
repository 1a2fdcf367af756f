//! SQL DDL for the school fee tables.

/// SQLite schema with:
/// - `students.student_code` UNIQUE, enforced by a unique index
/// - `payments.student_id` indexed but without a foreign-key clause, so
///   deleting a student leaves its payments in place
/// - `payments.created_at` TEXT, RFC3339
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS students (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    grade TEXT NOT NULL,
    section TEXT NOT NULL,
    student_code TEXT NOT NULL
);

CREATE UNIQUE INDEX IF NOT EXISTS idx_students_student_code ON students(student_code);

CREATE TABLE IF NOT EXISTS fee_structure (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    grade TEXT NOT NULL,
    semester TEXT NOT NULL,
    amount REAL NOT NULL
);

CREATE TABLE IF NOT EXISTS payments (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    student_id INTEGER NOT NULL,
    amount REAL NOT NULL,
    month TEXT NOT NULL,
    method TEXT NOT NULL,
    status TEXT NOT NULL DEFAULT 'PAID',
    created_at TEXT NOT NULL -- RFC3339
);

CREATE INDEX IF NOT EXISTS idx_payments_student_id ON payments(student_id);
"#;
