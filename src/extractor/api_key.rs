use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::{
    credential::{extract_api_key, CredentialError},
    error::{ApiError, ApiKeyError},
    traits::ErrorVerbosityProvider,
    types::used_api_key::UsedApiKey,
};

/// Extracts the API key from the `Authorization: ApiKey <value>` request header.
///
/// The API key is not validated.
#[derive(Debug, Clone)]
pub struct ApiKey(pub UsedApiKey);

#[async_trait]
impl<S> FromRequestParts<S> for ApiKey
where
    S: Send + Sync + ErrorVerbosityProvider,
{
    type Rejection = ApiError;

    #[tracing::instrument(name = "api_key_extractor", skip_all)]
    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let verbosity = state.error_verbosity();

        let used_api_key = extract_api_key(&parts.headers).map_err(|err| {
            match err {
                CredentialError::NoAuthHeader => {
                    tracing::warn!("Rejection. Authorization header not found")
                }
                CredentialError::MalformedHeader => {
                    tracing::warn!("Rejection. Authorization header is not 'ApiKey <value>'")
                }
            }

            ApiKeyError::new(verbosity, err.into())
        })?;

        tracing::trace!(?used_api_key, "Extracted");

        Ok(ApiKey(used_api_key))
    }
}
