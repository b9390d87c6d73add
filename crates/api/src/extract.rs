//! JSON body extractor that reports rejections in the API's error format.

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Drop-in replacement for [`axum::Json`] as a request extractor.
///
/// A missing `Content-Type`, unparseable JSON, or a body of the wrong shape
/// becomes [`AppError::BadRequest`], so every failure the client sees is a
/// `{ "error": ... }` object.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!(error = %rejection, "Rejected request body");
            AppError::BadRequest(rejection.body_text())
        })?;
        Ok(JsonBody(value))
    }
}
