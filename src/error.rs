/*!
OAuth 2.0 errors.
*/
use crate::{extract, JsonElement};
use std::fmt;
use thiserror::Error;

/// OAuth 2.0 error carried in a response body.
///
/// See [RFC 6749, section 5.2](http://tools.ietf.org/html/rfc6749#section-5.2)
/// and [RFC 7591, section 3.2.2](https://datatracker.ietf.org/doc/html/rfc7591#section-3.2.2).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuth2Error {
    /// Error code.
    pub error: OAuth2ErrorCode,

    /// Human-readable text providing additional information about the error.
    pub error_description: Option<String>,

    /// A URI identifying a human-readable web page with information about the error.
    pub error_uri: Option<String>,
}

impl OAuth2Error {
    /// Reads the `error`, `error_description` and `error_uri` members of a
    /// response. `None` unless `error` is a non-empty string.
    pub fn from_json(root: JsonElement<'_>) -> Option<Self> {
        let error = match extract::try_get_value(root, "error") {
            JsonElement::String(error) if !error.is_empty() => error,
            _ => return None,
        };
        Some(Self {
            error: OAuth2ErrorCode::from(error),
            error_description: extract::try_get_string(root, "error_description"),
            error_uri: extract::try_get_string(root, "error_uri"),
        })
    }
}

impl fmt::Display for OAuth2Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.error)?;
        if let Some(ref description) = self.error_description {
            write!(f, ": {}", description)?;
        }
        if let Some(ref uri) = self.error_uri {
            write!(f, " ({})", uri)?;
        }
        Ok(())
    }
}

impl std::error::Error for OAuth2Error {}

/// OAuth 2.0 error codes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OAuth2ErrorCode {
    /// The request is missing a required parameter, includes an unsupported parameter value (other
    /// than grant type), repeats a parameter, includes multiple credentials, utilizes more than
    /// one mechanism for authenticating the client, or is otherwise malformed.
    InvalidRequest,

    /// Client authentication failed (e.g., unknown client, no client authentication included, or
    /// unsupported authentication method).
    InvalidClient,

    /// The provided authorization grant (e.g., authorization code, resource owner credentials) or
    /// refresh token is invalid, expired, revoked, does not match the redirection URI used in the
    /// authorization request, or was issued to another client.
    InvalidGrant,

    /// The authenticated client is not authorized to use this authorization grant type.
    UnauthorizedClient,

    /// The authorization grant type is not supported by the authorization server.
    UnsupportedGrantType,

    /// The requested scope is invalid, unknown, malformed, or exceeds the scope granted by the
    /// resource owner.
    InvalidScope,

    /// The access token provided is expired, revoked, malformed, or invalid (RFC 6750).
    InvalidToken,

    /// The request requires higher privileges than provided by the access token (RFC 6750).
    InsufficientScope,

    /// The value of one or more redirection URIs is invalid (RFC 7591).
    InvalidRedirectUri,

    /// The value of one of the client metadata fields is invalid (RFC 7591).
    InvalidClientMetadata,

    /// The software statement presented is invalid (RFC 7591).
    InvalidSoftwareStatement,

    /// The software statement presented is not approved for use by this server (RFC 7591).
    UnapprovedSoftwareStatement,

    /// The authorization request is still pending (RFC 8628).
    AuthorizationPending,

    /// The client should poll the device endpoint less often (RFC 8628).
    SlowDown,

    /// The device code has expired (RFC 8628).
    ExpiredToken,

    /// The resource owner or authorization server denied the request.
    AccessDenied,

    /// An unrecognized error code.
    Unrecognized(String),
}

impl OAuth2ErrorCode {
    pub fn as_str(&self) -> &str {
        use OAuth2ErrorCode::*;
        match self {
            InvalidRequest => "invalid_request",
            InvalidClient => "invalid_client",
            InvalidGrant => "invalid_grant",
            UnauthorizedClient => "unauthorized_client",
            UnsupportedGrantType => "unsupported_grant_type",
            InvalidScope => "invalid_scope",
            InvalidToken => "invalid_token",
            InsufficientScope => "insufficient_scope",
            InvalidRedirectUri => "invalid_redirect_uri",
            InvalidClientMetadata => "invalid_client_metadata",
            InvalidSoftwareStatement => "invalid_software_statement",
            UnapprovedSoftwareStatement => "unapproved_software_statement",
            AuthorizationPending => "authorization_pending",
            SlowDown => "slow_down",
            ExpiredToken => "expired_token",
            AccessDenied => "access_denied",
            Unrecognized(s) => s.as_str(),
        }
    }
}

impl<'a> From<&'a str> for OAuth2ErrorCode {
    fn from(s: &str) -> OAuth2ErrorCode {
        match s {
            "invalid_request" => OAuth2ErrorCode::InvalidRequest,
            "invalid_client" => OAuth2ErrorCode::InvalidClient,
            "invalid_grant" => OAuth2ErrorCode::InvalidGrant,
            "unauthorized_client" => OAuth2ErrorCode::UnauthorizedClient,
            "unsupported_grant_type" => OAuth2ErrorCode::UnsupportedGrantType,
            "invalid_scope" => OAuth2ErrorCode::InvalidScope,
            "invalid_token" => OAuth2ErrorCode::InvalidToken,
            "insufficient_scope" => OAuth2ErrorCode::InsufficientScope,
            "invalid_redirect_uri" => OAuth2ErrorCode::InvalidRedirectUri,
            "invalid_client_metadata" => OAuth2ErrorCode::InvalidClientMetadata,
            "invalid_software_statement" => OAuth2ErrorCode::InvalidSoftwareStatement,
            "unapproved_software_statement" => OAuth2ErrorCode::UnapprovedSoftwareStatement,
            "authorization_pending" => OAuth2ErrorCode::AuthorizationPending,
            "slow_down" => OAuth2ErrorCode::SlowDown,
            "expired_token" => OAuth2ErrorCode::ExpiredToken,
            "access_denied" => OAuth2ErrorCode::AccessDenied,
            s => OAuth2ErrorCode::Unrecognized(s.to_owned()),
        }
    }
}

impl fmt::Display for OAuth2ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub use serde_json::Error as Json;

#[derive(Debug, Error)]
pub enum Error {
    /// Text or JSON tree could not be turned into the requested document.
    #[error("{0}")]
    Json(#[from] Json),
    /// The authorization server answered with an OAuth 2.0 error.
    #[error("{0}")]
    OAuth2(#[from] OAuth2Error),
}
