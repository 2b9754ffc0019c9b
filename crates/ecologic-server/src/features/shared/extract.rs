//! Request extractors that validate before a handler runs
//!
//! Both extractors reject with [`AppError::InvalidPayload`], so malformed
//! bodies get the same error envelope as semantic violations.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Form, Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::validation::FromPayload;
use crate::error::AppError;

/// JSON body converted through [`FromPayload`]
#[derive(Debug)]
pub struct Validated<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for Validated<T>
where
    T: FromPayload,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::invalid_body(rejection.body_text()))?;

        T::from_payload(&payload)
            .map(Validated)
            .map_err(AppError::InvalidPayload)
    }
}

/// URL-encoded form body deserialized with serde
#[derive(Debug)]
pub struct FormPayload<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for FormPayload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::invalid_body(rejection.body_text()))?;

        Ok(FormPayload(value))
    }
}
