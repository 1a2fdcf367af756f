use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::error::SchoolError;
use crate::types::Validate;

/// JSON body that has been decoded and validated.
///
/// Every decoding rejection (syntax, missing field, wrong type, content type)
/// is reported as a validation error so clients always see 422.
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = SchoolError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| SchoolError::Validation(rejection.body_text()))?;
        body.validate()?;
        Ok(ValidJson(body))
    }
}

/// Integer record id taken from the `{id}` path segment.
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub i64);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = SchoolError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| SchoolError::Validation(rejection.body_text()))?;
        Ok(IdPath(id))
    }
}
