use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use axum::http::StatusCode;

use crate::errors::JsonApiError;

/// `Json` extractor whose rejection is the structured error body instead of
/// axum's plain-text default, so malformed payloads (bad JSON, unknown enum
/// values, missing fields) come back as a 400 with `{"error", "detail"}`.
pub struct ApiJson<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = JsonApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) =
            axum::Json::<T>::from_request(req, state).await.map_err(|rej| {
                JsonApiError::new(StatusCode::BAD_REQUEST, "Validation Error", Some(rej.body_text()))
            })?;
        Ok(ApiJson(value))
    }
}

/// `Query` counterpart of [`ApiJson`]: filter values outside the closed enum
/// sets reject with the same structured 400.
pub struct ApiQuery<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    T: serde::de::DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = JsonApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rej: QueryRejection| {
                JsonApiError::new(StatusCode::BAD_REQUEST, "Validation Error", Some(rej.body_text()))
            })?;
        Ok(ApiQuery(value))
    }
}
