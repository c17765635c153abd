use crate::{response::json_response, JsonResponse};
use chrono::{DateTime, Duration, Utc};
use serde_json::Value;

pub mod keys {
    pub const ACCESS_TOKEN: &str = "access_token";
    pub const ID_TOKEN: &str = "id_token";
    pub const TOKEN_TYPE: &str = "token_type";
    pub const REFRESH_TOKEN: &str = "refresh_token";
    pub const EXPIRES_IN: &str = "expires_in";
    pub const ISSUED_TOKEN_TYPE: &str = "issued_token_type";
    pub const SCOPE: &str = "scope";
}

const MAX_SECONDS: i64 = i64::MAX / 1_000;

/// Successful or failed answer of a token endpoint.
///
/// See [RFC 6749, section 5.1](http://tools.ietf.org/html/rfc6749#section-5.1).
/// The ID token, if any, is returned as its compact serialization; decoding
/// and validating it is left to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenResponse {
    json: Value,
}

json_response!(TokenResponse);

impl TokenResponse {
    pub fn access_token(&self) -> Option<String> {
        self.try_get_string(keys::ACCESS_TOKEN)
    }

    pub fn id_token(&self) -> Option<String> {
        self.try_get_string(keys::ID_TOKEN)
    }

    /// Usually `Bearer`, or `DPoP` for sender-constrained tokens.
    pub fn token_type(&self) -> Option<String> {
        self.try_get_string(keys::TOKEN_TYPE)
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.try_get_string(keys::REFRESH_TOKEN)
    }

    /// Lifetime of the access token in seconds.
    pub fn expires_in(&self) -> Option<i64> {
        self.try_get_int(keys::EXPIRES_IN)
    }

    /// Token type URI of a token exchange result ([RFC 8693](https://datatracker.ietf.org/doc/html/rfc8693)).
    pub fn issued_token_type(&self) -> Option<String> {
        self.try_get_string(keys::ISSUED_TOKEN_TYPE)
    }

    pub fn scope(&self) -> Option<String> {
        self.try_get_string(keys::SCOPE)
    }

    /// When the access token expires, given when the response was received.
    pub fn expires_at(&self, received_at: DateTime<Utc>) -> Option<DateTime<Utc>> {
        // Duration::seconds panics beyond i64::MAX milliseconds.
        let expires_in = self.expires_in()?.clamp(-MAX_SECONDS, MAX_SECONDS);
        received_at.checked_add_signed(Duration::seconds(expires_in))
    }

    pub fn expired(&self, received_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        if let Some(expires) = self.expires_at(received_at) {
            expires < now
        } else {
            false
        }
    }
}
