use axum::{
    Router,
    routing::{MethodRouter, get, post},
};

use crate::db::SchoolStorage;
use crate::handlers::{
    fees::{create_fee, delete_fee, get_fee, list_fees},
    payments::{create_payment, get_payment, list_payments},
    root,
    students::{
        create_student, create_students_batch, delete_student, get_student, list_students,
        update_student,
    },
};

/// State handed to every handler; clones share the same pool.
#[derive(Clone)]
pub struct SchoolState {
    pub storage: SchoolStorage,
}

impl SchoolState {
    pub fn new(storage: SchoolStorage) -> Self {
        Self { storage }
    }
}

pub fn school_router(state: SchoolState) -> Router {
    let students: MethodRouter<SchoolState> = post(create_student).get(list_students);
    let fees: MethodRouter<SchoolState> = post(create_fee).get(list_fees);
    let payments: MethodRouter<SchoolState> = post(create_payment).get(list_payments);

    Router::new()
        .route("/", get(root))
        // collections answer with and without the trailing slash
        .route("/students/", students.clone())
        .route("/students", students)
        .route("/students/batch", post(create_students_batch))
        .route(
            "/students/{id}",
            get(get_student).put(update_student).delete(delete_student),
        )
        .route("/fees/", fees.clone())
        .route("/fees", fees)
        .route("/fees/{id}", get(get_fee).delete(delete_fee))
        .route("/payments/", payments.clone())
        .route("/payments", payments)
        .route("/payments/{id}", get(get_payment))
        .with_state(state)
}
