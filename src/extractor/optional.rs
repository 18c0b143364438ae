use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::error::ApiError;

/// Extracts an optional value from the request.
///
/// Missing credentials yield `None`. Any other rejection of `X`, such as a malformed
/// `Authorization` header, is still returned.
pub struct Optional<X>(pub Option<X>);

#[async_trait]
impl<X, S> FromRequestParts<S> for Optional<X>
where
    X: FromRequestParts<S, Rejection = ApiError>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[tracing::instrument(name = "optional_extractor", skip_all)]
    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match X::from_request_parts(parts, state).await {
            Ok(inner) => Ok(Optional(Some(inner))),
            Err(err) if err.is_missing_credentials() => Ok(Optional(None)),
            Err(err) => Err(err),
        }
    }
}
