use axum::{Json, extract::State};
use tracing::debug;

use crate::db::Payment;
use crate::middleware::{IdPath, ValidJson};
use crate::types::PaymentCreate;
use crate::{SchoolError, router::SchoolState};

/// POST /payments/ -> 404 when the referenced student does not exist.
pub async fn create_payment(
    State(state): State<SchoolState>,
    ValidJson(input): ValidJson<PaymentCreate>,
) -> Result<Json<Payment>, SchoolError> {
    Ok(Json(state.storage.create_payment(input).await?))
}

pub async fn list_payments(
    State(state): State<SchoolState>,
) -> Result<Json<Vec<Payment>>, SchoolError> {
    let payments = state.storage.list_payments().await?;
    debug!(count = payments.len(), "listed payments");
    Ok(Json(payments))
}

pub async fn get_payment(
    State(state): State<SchoolState>,
    IdPath(id): IdPath,
) -> Result<Json<Payment>, SchoolError> {
    Ok(Json(state.storage.get_payment(id).await?))
}
