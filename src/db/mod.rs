//! Database module: row models, schema and the SQLite-backed storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows, serialized as API output
//! - `schema.rs`: SQL DDL applied at startup
//! - `sqlite.rs`: pool setup and the `SchoolStorage` handle
//! - `students.rs`, `fees.rs`, `payments.rs`: per-entity operations

pub mod fees;
pub mod models;
pub mod payments;
pub mod schema;
pub mod sqlite;
pub mod students;

pub use models::{FeeStructure, Payment, Student};
pub use schema::SQLITE_INIT;
pub use sqlite::{SchoolStorage, SqlitePool, connect};

#[cfg(test)]
pub(crate) async fn memory_storage() -> SchoolStorage {
    let pool = connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");
    let storage = SchoolStorage::new(pool);
    storage.init_schema().await.expect("failed to init schema");
    storage
}
