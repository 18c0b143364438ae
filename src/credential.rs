use http::{header::AUTHORIZATION, HeaderMap};

use crate::types::used_api_key::UsedApiKey;

/// Scheme token expected as the first word of the `Authorization` header.
///
/// Matched case-sensitively.
pub const API_KEY_SCHEME: &str = "ApiKey";

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CredentialError {
    /// The request carries no `Authorization` header, or an empty one.
    #[error("no authorization header included")]
    NoAuthHeader,
    /// The `Authorization` header is not of the form `ApiKey <value>`.
    #[error("malformed authorization header")]
    MalformedHeader,
}

/// Extracts the API key from an `Authorization: ApiKey <value>` header.
///
/// Only the first `Authorization` value is considered. The key is the second
/// whitespace-delimited field; any further fields are ignored.
pub fn extract_api_key(headers: &HeaderMap) -> Result<UsedApiKey, CredentialError> {
    let authorization = match headers.get(AUTHORIZATION) {
        Some(authorization) if !authorization.is_empty() => authorization,
        _ => return Err(CredentialError::NoAuthHeader),
    };

    // Any UTF-8 text is accepted, not only visible ASCII.
    let authorization = std::str::from_utf8(authorization.as_bytes())
        .map_err(|_| CredentialError::MalformedHeader)?;

    let mut fields = authorization.split_whitespace();

    match (fields.next(), fields.next()) {
        (Some(API_KEY_SCHEME), Some(value)) => Ok(UsedApiKey {
            value: value.to_string(),
        }),
        _ => Err(CredentialError::MalformedHeader),
    }
}
