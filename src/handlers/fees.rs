use axum::{Json, extract::State};
use tracing::debug;

use crate::db::FeeStructure;
use crate::middleware::{IdPath, ValidJson};
use crate::types::{Ack, FeeCreate};
use crate::{SchoolError, router::SchoolState};

pub async fn create_fee(
    State(state): State<SchoolState>,
    ValidJson(input): ValidJson<FeeCreate>,
) -> Result<Json<FeeStructure>, SchoolError> {
    Ok(Json(state.storage.create_fee(input).await?))
}

pub async fn list_fees(
    State(state): State<SchoolState>,
) -> Result<Json<Vec<FeeStructure>>, SchoolError> {
    let fees = state.storage.list_fees().await?;
    debug!(count = fees.len(), "listed fee structures");
    Ok(Json(fees))
}

pub async fn get_fee(
    State(state): State<SchoolState>,
    IdPath(id): IdPath,
) -> Result<Json<FeeStructure>, SchoolError> {
    Ok(Json(state.storage.get_fee(id).await?))
}

pub async fn delete_fee(
    State(state): State<SchoolState>,
    IdPath(id): IdPath,
) -> Result<Json<Ack>, SchoolError> {
    state.storage.delete_fee(id).await?;
    Ok(Json(Ack::new("Fee deleted")))
}
