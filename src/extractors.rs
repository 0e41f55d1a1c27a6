use axum::{
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;

use crate::rejections::AppError;

/// JSON request body. Bodies that are not JSON at all are rejected with 400;
/// JSON that does not fit `T` is rejected with 422.
pub struct Payload<T>(pub T);

impl<S, T> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Payload(value)),
            Err(JsonRejection::JsonDataError(e)) => {
                tracing::warn!("request body has the wrong shape: {e}");
                Err(AppError::Unprocessable("request body has the wrong shape"))
            }
            Err(e) => {
                tracing::warn!("malformed request body: {e}");
                Err(AppError::BadRequest("malformed request body"))
            }
        }
    }
}

/// Integer id taken from the last path segment. Ids that do not parse name
/// no resource, so they are reported as 404.
pub struct PathId(pub i64);

impl<S: Send + Sync> FromRequestParts<S> for PathId {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                tracing::debug!("unparsable id in path: {e}");
                AppError::NotFound("resource not found")
            })?;
        Ok(PathId(id))
    }
}
