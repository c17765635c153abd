use crate::{
    error::Error, response::json_response, DynamicClientRegistrationDocument, JsonResponse,
};
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

pub mod keys {
    pub const CLIENT_ID: &str = "client_id";
    pub const CLIENT_SECRET: &str = "client_secret";
    pub const REGISTRATION_ACCESS_TOKEN: &str = "registration_access_token";
    pub const REGISTRATION_CLIENT_URI: &str = "registration_client_uri";
    pub const CLIENT_ID_ISSUED_AT: &str = "client_id_issued_at";
    pub const CLIENT_SECRET_EXPIRES_AT: &str = "client_secret_expires_at";
}

/// Client information returned by a Dynamic Client Registration endpoint.
///
/// See [RFC 7591, section 3.2.1](https://datatracker.ietf.org/doc/html/rfc7591#section-3.2.1)
/// and [RFC 7592](https://datatracker.ietf.org/doc/html/rfc7592) for the
/// management members.
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicClientRegistrationResponse {
    json: Value,
}

json_response!(DynamicClientRegistrationResponse);

impl DynamicClientRegistrationResponse {
    pub fn client_id(&self) -> Option<String> {
        self.try_get_string(keys::CLIENT_ID)
    }

    pub fn client_secret(&self) -> Option<String> {
        self.try_get_string(keys::CLIENT_SECRET)
    }

    /// Token for the client configuration endpoint.
    pub fn registration_access_token(&self) -> Option<String> {
        self.try_get_string(keys::REGISTRATION_ACCESS_TOKEN)
    }

    /// Location of the client configuration endpoint.
    pub fn registration_client_uri(&self) -> Option<String> {
        self.try_get_string(keys::REGISTRATION_CLIENT_URI)
    }

    /// Seconds since the epoch at which `client_id` was issued.
    pub fn client_id_issued_at(&self) -> Option<i64> {
        self.try_get_int(keys::CLIENT_ID_ISSUED_AT)
    }

    /// Seconds since the epoch at which `client_secret` expires, `0` if it
    /// never does.
    pub fn client_secret_expires_at(&self) -> Option<i64> {
        self.try_get_int(keys::CLIENT_SECRET_EXPIRES_AT)
    }

    pub fn client_id_issued(&self) -> Option<DateTime<Utc>> {
        self.client_id_issued_at()
            .and_then(|secs| Utc.timestamp_opt(secs, 0).single())
    }

    /// Expiry of `client_secret`. `None` when absent or when the secret
    /// does not expire.
    pub fn client_secret_expires(&self) -> Option<DateTime<Utc>> {
        match self.client_secret_expires_at()? {
            0 => None,
            secs => Utc.timestamp_opt(secs, 0).single(),
        }
    }

    /// The registered metadata echoed back by the server.
    ///
    /// Credentials and management members end up in
    /// [`extensions`](DynamicClientRegistrationDocument::extensions).
    pub fn metadata(&self) -> Result<DynamicClientRegistrationDocument, Error> {
        DynamicClientRegistrationDocument::from_value(self.json.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OAuth2ErrorCode;
    use serde_json::json;

    const RESPONSE: &str = r#"
        {
            "client_id": "s6BhdRkqt3",
            "client_secret": "cf136dc3c1fc93f31185e5885805d",
            "client_id_issued_at": 2893256800,
            "client_secret_expires_at": 2893276800,
            "registration_access_token": "this.is.an.access.token.value.ffx83",
            "registration_client_uri": "https://server.example.com/connect/register?client_id=s6BhdRkqt3",
            "redirect_uris": [
                "https://client.example.org/callback",
                "https://client.example.org/callback2"
            ],
            "grant_types": ["authorization_code", "refresh_token"],
            "client_name": "My Example Client",
            "token_endpoint_auth_method": "client_secret_basic"
        }
    "#;

    #[test]
    fn credentials() {
        let response = DynamicClientRegistrationResponse::from_json(RESPONSE).unwrap();
        assert_eq!(Some("s6BhdRkqt3".to_owned()), response.client_id());
        assert_eq!(
            Some("cf136dc3c1fc93f31185e5885805d".to_owned()),
            response.client_secret()
        );
        assert_eq!(
            Some("this.is.an.access.token.value.ffx83".to_owned()),
            response.registration_access_token()
        );
        assert_eq!(
            Some("https://server.example.com/connect/register?client_id=s6BhdRkqt3".to_owned()),
            response.registration_client_uri()
        );
        assert!(!response.is_error());
    }

    #[test]
    fn timestamps() {
        let response = DynamicClientRegistrationResponse::from_json(RESPONSE).unwrap();
        assert_eq!(Some(2893256800), response.client_id_issued_at());
        assert_eq!(
            Some(2893256800),
            response.client_id_issued().map(|t| t.timestamp())
        );
        assert_eq!(
            Some(2893276800),
            response.client_secret_expires().map(|t| t.timestamp())
        );
    }

    #[test]
    fn secret_that_never_expires() {
        let response = DynamicClientRegistrationResponse::from_json(
            r#"{ "client_id": "a", "client_secret_expires_at": 0 }"#,
        )
        .unwrap();
        assert_eq!(Some(0), response.client_secret_expires_at());
        assert_eq!(None, response.client_secret_expires());
        assert_eq!(None, response.client_id_issued());
    }

    #[test]
    fn metadata() {
        let response = DynamicClientRegistrationResponse::from_json(RESPONSE).unwrap();
        let metadata = response.metadata().unwrap();
        assert_eq!(Some("My Example Client"), metadata.client_name.as_deref());
        assert_eq!(
            vec!["authorization_code", "refresh_token"],
            metadata.grant_types
        );
        assert_eq!(Some(&json!("s6BhdRkqt3")), metadata.extensions.get("client_id"));
    }

    #[test]
    fn error_response() {
        let response = DynamicClientRegistrationResponse::from_json(
            r#"{
                "error": "invalid_client_metadata",
                "error_description": "The grant type 'authorization_code' must be registered along with the response type 'code' but found only 'implicit' instead."
            }"#,
        )
        .unwrap();
        assert_eq!(None, response.client_id());
        let error = response.error().unwrap();
        assert_eq!(OAuth2ErrorCode::InvalidClientMetadata, error.error);
        assert!(matches!(response.into_result(), Err(Error::OAuth2(_))));
    }
}
