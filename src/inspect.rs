use axum::{
    body::Bytes,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, header::InvalidHeaderValue, HeaderValue, Request, StatusCode},
    response::IntoResponse,
};
use http_body_util::BodyExt;

use crate::{extractor::api_key::ApiKey, state::ApiState, types::used_api_key::UsedApiKey};

#[derive(Debug, thiserror::Error)]
pub enum InspectError {
    #[error("Authorization value is not a valid header value: {0}")]
    InvalidHeaderValue(#[source] InvalidHeaderValue),
    #[error("Request would be rejected with {status}")]
    Rejected { status: StatusCode, body: Bytes },
    #[error("Failed to read rejection body: {0}")]
    Body(#[source] axum::Error),
}

/// Runs the [`ApiKey`] extractor on a request carrying `authorization`, if any.
///
/// On rejection, returns the status and body a handler would have answered with.
#[tracing::instrument(skip_all)]
pub async fn inspect(
    state: &ApiState,
    authorization: Option<&str>,
) -> Result<UsedApiKey, InspectError> {
    let mut request = Request::new(());

    if let Some(authorization) = authorization {
        let value = HeaderValue::from_bytes(authorization.as_bytes())
            .map_err(InspectError::InvalidHeaderValue)?;

        request.headers_mut().insert(AUTHORIZATION, value);
    }

    let (mut parts, _) = request.into_parts();

    match ApiKey::from_request_parts(&mut parts, state).await {
        Ok(ApiKey(used_api_key)) => Ok(used_api_key),
        Err(err) => {
            let response = err.into_response();
            let status = response.status();

            let body = response
                .into_body()
                .collect()
                .await
                .map_err(InspectError::Body)?
                .to_bytes();

            Err(InspectError::Rejected { status, body })
        }
    }
}
