use std::sync::Arc;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use base64::{engine::general_purpose, Engine as _};
use thiserror::Error;
use tracing::debug;

use crate::app_state::AppState;

#[derive(Error, Debug)]
pub enum BasicAuthError {
    #[error("Missing Authorization header")]
    MissingAuthHeader,

    #[error("Invalid Authorization header format")]
    InvalidHeaderFormat,

    #[error("Invalid base64 encoding")]
    InvalidBase64,

    #[error("Empty username or password")]
    EmptyCredentials,

    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// One username/password pair. The expected pair comes from configuration
/// and never changes after startup; candidate pairs are parsed per request.
#[derive(Debug, Clone)]
pub struct BasicAuthCredentials {
    pub username: String,
    pub password: String,
}

impl BasicAuthCredentials {
    /// Parses a raw `Authorization` header value into a candidate pair.
    ///
    /// The value must carry the literal `Basic ` scheme prefix followed by
    /// standard base64 of `username:password`. The split happens on the
    /// first colon; a payload without any colon is a bare username with an
    /// empty password.
    pub fn from_header_value(auth_header: &str) -> Result<Self, BasicAuthError> {
        let base64_credentials =
            auth_header.strip_prefix("Basic ").ok_or(BasicAuthError::InvalidHeaderFormat)?;

        let decoded = general_purpose::STANDARD
            .decode(base64_credentials)
            .map_err(|_| BasicAuthError::InvalidBase64)?;

        let credentials_str =
            String::from_utf8(decoded).map_err(|_| BasicAuthError::InvalidBase64)?;

        let (username, password) =
            credentials_str.split_once(':').unwrap_or((credentials_str.as_str(), ""));

        Ok(BasicAuthCredentials { username: username.to_string(), password: password.to_string() })
    }

    /// Validates this candidate pair against the expected credentials.
    ///
    /// An empty username or password is rejected in its own branch, distinct
    /// from a mismatch: browsers send `user:` with an empty password when the
    /// user wants a remembered credential discarded and the prompt shown
    /// again, and that reset path must stay observable even though the
    /// outward response is the same challenge.
    pub fn validate(&self, expected: &BasicAuthCredentials) -> Result<(), BasicAuthError> {
        if self.username.is_empty() || self.password.is_empty() {
            return Err(BasicAuthError::EmptyCredentials);
        }

        if self.username == expected.username && self.password == expected.password {
            Ok(())
        } else {
            Err(BasicAuthError::InvalidCredentials)
        }
    }
}

/// Outcome of evaluating one request's credential header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthResult {
    Authorized { username: String },
    Unauthorized,
}

/// Evaluates an optional `Authorization` header value against the expected
/// credentials. Pure and stateless: malformed input of any kind collapses to
/// `Unauthorized`, never to a panic or a server error.
pub fn evaluate(header_value: Option<&str>, expected: &BasicAuthCredentials) -> AuthResult {
    let checked = header_value
        .ok_or(BasicAuthError::MissingAuthHeader)
        .and_then(BasicAuthCredentials::from_header_value)
        .and_then(|candidate| candidate.validate(expected).map(|_| candidate));

    match checked {
        Ok(candidate) => AuthResult::Authorized { username: candidate.username },
        Err(_) => AuthResult::Unauthorized,
    }
}

/// Rejection that renders the challenge: 401 with a `WWW-Authenticate`
/// header advertising the Basic scheme and an empty body. No realm is sent;
/// clients never deliver it back and it adds no functional value.
#[derive(Debug)]
pub struct AuthChallenge;

impl IntoResponse for AuthChallenge {
    fn into_response(self) -> Response {
        let mut response = StatusCode::UNAUTHORIZED.into_response();
        response
            .headers_mut()
            .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Basic"));
        response
    }
}

/// Authenticated user guard - carries the validated username into handlers
pub struct AuthenticatedUser(pub String);

impl FromRequestParts<Arc<AppState>> for AuthenticatedUser {
    type Rejection = AuthChallenge;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let header_value =
            parts.headers.get("Authorization").and_then(|value| value.to_str().ok());

        match evaluate(header_value, &state.credentials) {
            AuthResult::Authorized { username } => Ok(AuthenticatedUser(username)),
            AuthResult::Unauthorized => {
                debug!("basic auth rejected, answering with the Basic challenge");
                Err(AuthChallenge)
            }
        }
    }
}
