use std::borrow::Cow;

use axum::{
    http::{header::WWW_AUTHENTICATE, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use derive_more::From;
use serde::{Deserialize, Serialize};

use crate::credential::{CredentialError, API_KEY_SCHEME};

/// How much of a rejection reaches the client.
///
/// Headers such as the `WWW-Authenticate` challenge are sent from [`ErrorVerbosity::StatusCode`] upwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum ErrorVerbosity {
    /// Every rejection becomes an empty [`StatusCode::NO_CONTENT`].
    None,
    /// Rejection status and headers, no body.
    StatusCode,
    /// Adds a JSON body holding only `message`.
    Message,
    /// Adds `error_type` and `error` to the body, without the human readable reason.
    Type,
    /// Like [`ErrorVerbosity::Type`], with the reason filled in.
    #[default]
    Full,
}

impl ErrorVerbosity {
    pub fn should_generate_error_reason(&self) -> bool {
        matches!(self, ErrorVerbosity::Full)
    }
}

/// JSON body of a rejection.
#[derive(Debug, Serialize)]
struct RejectionBody {
    #[serde(flatten)]
    error: Option<ApiError>,
    message: &'static str,
}

#[derive(Debug, From, Serialize)]
#[serde(tag = "error_type", content = "error")]
/// API error
pub enum ApiError {
    /// API key error
    ///
    /// This error is returned when the API key is missing or the `Authorization` header is malformed.
    ApiKey(ApiKeyError),
}

impl ApiError {
    fn verbosity(&self) -> ErrorVerbosity {
        match self {
            ApiError::ApiKey(err) => err.verbosity,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            ApiError::ApiKey(_) => "API key error",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::ApiKey(err) => err.status_code(),
        }
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();

        match self {
            ApiError::ApiKey(err) if err.is_missing() => {
                headers.insert(WWW_AUTHENTICATE, HeaderValue::from_static(API_KEY_SCHEME));
            }
            _ => {}
        }

        headers
    }

    /// Returns `true` if the request carried no credentials at all.
    pub fn is_missing_credentials(&self) -> bool {
        match self {
            ApiError::ApiKey(err) => err.is_missing(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let headers = self.headers();
        let status_code = self.status_code();
        let message = self.message();

        match self.verbosity() {
            ErrorVerbosity::None => StatusCode::NO_CONTENT.into_response(),
            ErrorVerbosity::StatusCode => (status_code, headers).into_response(),
            ErrorVerbosity::Message => {
                let body = RejectionBody {
                    error: None,
                    message,
                };

                (status_code, headers, Json(body)).into_response()
            }
            ErrorVerbosity::Type | ErrorVerbosity::Full => {
                let body = RejectionBody {
                    error: Some(self),
                    message,
                };

                (status_code, headers, Json(body)).into_response()
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ApiKeyErrorType {
    Missing,
    Malformed,
}

impl From<CredentialError> for ApiKeyErrorType {
    fn from(err: CredentialError) -> Self {
        match err {
            CredentialError::NoAuthHeader => ApiKeyErrorType::Missing,
            CredentialError::MalformedHeader => ApiKeyErrorType::Malformed,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiKeyError {
    #[serde(skip)]
    verbosity: ErrorVerbosity,
    api_key_error_type: ApiKeyErrorType,
    api_key_error_reason: Option<Cow<'static, str>>,
}

impl ApiKeyError {
    pub fn new(verbosity: ErrorVerbosity, api_key_error_type: ApiKeyErrorType) -> Self {
        let api_key_error_reason = verbosity
            .should_generate_error_reason()
            .then(|| Self::reason(api_key_error_type));

        ApiKeyError {
            verbosity,
            api_key_error_type,
            api_key_error_reason,
        }
    }

    fn reason(api_key_error_type: ApiKeyErrorType) -> Cow<'static, str> {
        match api_key_error_type {
            ApiKeyErrorType::Missing => Cow::Borrowed("`Authorization` header is missing"),
            ApiKeyErrorType::Malformed => Cow::Owned(format!(
                "`Authorization` header must be `{API_KEY_SCHEME} <value>`"
            )),
        }
    }

    fn is_missing(&self) -> bool {
        self.api_key_error_type == ApiKeyErrorType::Missing
    }

    fn status_code(&self) -> StatusCode {
        match self.api_key_error_type {
            ApiKeyErrorType::Missing => StatusCode::UNAUTHORIZED,
            ApiKeyErrorType::Malformed => StatusCode::BAD_REQUEST,
        }
    }
}
