use crate::{response::json_response, JsonResponse, MtlsEndpointAliases};
use serde_json::Value;

/// Member names of OpenID Provider / OAuth 2.0 Authorization Server metadata.
pub mod keys {
    pub const ISSUER: &str = "issuer";
    pub const AUTHORIZATION_ENDPOINT: &str = "authorization_endpoint";
    pub const TOKEN_ENDPOINT: &str = "token_endpoint";
    pub const USERINFO_ENDPOINT: &str = "userinfo_endpoint";
    pub const INTROSPECTION_ENDPOINT: &str = "introspection_endpoint";
    pub const REVOCATION_ENDPOINT: &str = "revocation_endpoint";
    pub const DEVICE_AUTHORIZATION_ENDPOINT: &str = "device_authorization_endpoint";
    pub const END_SESSION_ENDPOINT: &str = "end_session_endpoint";
    pub const CHECK_SESSION_IFRAME: &str = "check_session_iframe";
    pub const REGISTRATION_ENDPOINT: &str = "registration_endpoint";
    pub const PUSHED_AUTHORIZATION_REQUEST_ENDPOINT: &str =
        "pushed_authorization_request_endpoint";
    pub const BACKCHANNEL_AUTHENTICATION_ENDPOINT: &str = "backchannel_authentication_endpoint";
    pub const JWKS_URI: &str = "jwks_uri";
    pub const SCOPES_SUPPORTED: &str = "scopes_supported";
    pub const CLAIMS_SUPPORTED: &str = "claims_supported";
    pub const GRANT_TYPES_SUPPORTED: &str = "grant_types_supported";
    pub const RESPONSE_TYPES_SUPPORTED: &str = "response_types_supported";
    pub const RESPONSE_MODES_SUPPORTED: &str = "response_modes_supported";
    pub const SUBJECT_TYPES_SUPPORTED: &str = "subject_types_supported";
    pub const ID_TOKEN_SIGNING_ALG_VALUES_SUPPORTED: &str =
        "id_token_signing_alg_values_supported";
    pub const TOKEN_ENDPOINT_AUTH_METHODS_SUPPORTED: &str =
        "token_endpoint_auth_methods_supported";
    pub const TOKEN_ENDPOINT_AUTH_SIGNING_ALG_VALUES_SUPPORTED: &str =
        "token_endpoint_auth_signing_alg_values_supported";
    pub const CODE_CHALLENGE_METHODS_SUPPORTED: &str = "code_challenge_methods_supported";
    pub const DPOP_SIGNING_ALG_VALUES_SUPPORTED: &str = "dpop_signing_alg_values_supported";
    pub const FRONTCHANNEL_LOGOUT_SUPPORTED: &str = "frontchannel_logout_supported";
    pub const FRONTCHANNEL_LOGOUT_SESSION_SUPPORTED: &str =
        "frontchannel_logout_session_supported";
    pub const BACKCHANNEL_LOGOUT_SUPPORTED: &str = "backchannel_logout_supported";
    pub const BACKCHANNEL_LOGOUT_SESSION_SUPPORTED: &str = "backchannel_logout_session_supported";
    pub const REQUIRE_PUSHED_AUTHORIZATION_REQUESTS: &str =
        "require_pushed_authorization_requests";
    pub const TLS_CLIENT_CERTIFICATE_BOUND_ACCESS_TOKENS: &str =
        "tls_client_certificate_bound_access_tokens";
    pub const MTLS_ENDPOINT_ALIASES: &str = "mtls_endpoint_aliases";
}

/// OpenID / OAuth 2.0 provider metadata, as published at
/// `.well-known/openid-configuration`.
///
/// The document is kept as JSON. Endpoints, lists and flags are read on
/// demand and any member the provider left out or got wrong simply reads as
/// absent.
///
/// See:
///
/// - [OpenID Connect Discovery 1.0: OpenID Provider Metadata](https://openid.net/specs/openid-connect-discovery-1_0.html#ProviderMetadata)
/// - [https://datatracker.ietf.org/doc/html/rfc8414](https://datatracker.ietf.org/doc/html/rfc8414)
///
/// # Examples
///
/// ```
/// use openid_document::DiscoveryDocument;
///
/// let document = DiscoveryDocument::from_json(r#"{
///     "issuer": "https://idp.example.com",
///     "token_endpoint": "https://idp.example.com/token",
///     "mtls_endpoint_aliases": { "token_endpoint": "https://mtls.idp.example.com/token" }
/// }"#).unwrap();
///
/// assert_eq!(Some("https://idp.example.com".to_string()), document.issuer());
/// assert_eq!(
///     Some("https://mtls.idp.example.com/token".to_string()),
///     document.mtls_endpoint_aliases().token_endpoint
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoveryDocument {
    json: Value,
}

json_response!(DiscoveryDocument);

impl DiscoveryDocument {
    /// The authorization server's issuer identifier.
    pub fn issuer(&self) -> Option<String> {
        self.try_get_string(keys::ISSUER)
    }

    /// URL of the OAuth 2.0 Authorization Endpoint.
    pub fn authorize_endpoint(&self) -> Option<String> {
        self.try_get_string(keys::AUTHORIZATION_ENDPOINT)
    }

    /// URL of the OAuth 2.0 Token Endpoint.
    pub fn token_endpoint(&self) -> Option<String> {
        self.try_get_string(keys::TOKEN_ENDPOINT)
    }

    pub fn userinfo_endpoint(&self) -> Option<String> {
        self.try_get_string(keys::USERINFO_ENDPOINT)
    }

    /// URL of the token introspection endpoint ([RFC 7662](https://datatracker.ietf.org/doc/html/rfc7662)).
    pub fn introspection_endpoint(&self) -> Option<String> {
        self.try_get_string(keys::INTROSPECTION_ENDPOINT)
    }

    /// URL of the token revocation endpoint ([RFC 7009](https://datatracker.ietf.org/doc/html/rfc7009)).
    pub fn revocation_endpoint(&self) -> Option<String> {
        self.try_get_string(keys::REVOCATION_ENDPOINT)
    }

    /// URL of the device authorization endpoint ([RFC 8628](https://datatracker.ietf.org/doc/html/rfc8628)).
    pub fn device_authorization_endpoint(&self) -> Option<String> {
        self.try_get_string(keys::DEVICE_AUTHORIZATION_ENDPOINT)
    }

    pub fn end_session_endpoint(&self) -> Option<String> {
        self.try_get_string(keys::END_SESSION_ENDPOINT)
    }

    pub fn check_session_iframe(&self) -> Option<String> {
        self.try_get_string(keys::CHECK_SESSION_IFRAME)
    }

    /// URL of the Dynamic Client Registration Endpoint.
    pub fn registration_endpoint(&self) -> Option<String> {
        self.try_get_string(keys::REGISTRATION_ENDPOINT)
    }

    /// URL of the pushed authorization request endpoint ([RFC 9126](https://datatracker.ietf.org/doc/html/rfc9126)).
    pub fn pushed_authorization_request_endpoint(&self) -> Option<String> {
        self.try_get_string(keys::PUSHED_AUTHORIZATION_REQUEST_ENDPOINT)
    }

    pub fn backchannel_authentication_endpoint(&self) -> Option<String> {
        self.try_get_string(keys::BACKCHANNEL_AUTHENTICATION_ENDPOINT)
    }

    /// URL of the provider's JWK Set document.
    pub fn jwks_uri(&self) -> Option<String> {
        self.try_get_string(keys::JWKS_URI)
    }

    pub fn scopes_supported(&self) -> Vec<String> {
        self.try_get_string_array(keys::SCOPES_SUPPORTED)
    }

    pub fn claims_supported(&self) -> Vec<String> {
        self.try_get_string_array(keys::CLAIMS_SUPPORTED)
    }

    pub fn grant_types_supported(&self) -> Vec<String> {
        self.try_get_string_array(keys::GRANT_TYPES_SUPPORTED)
    }

    pub fn response_types_supported(&self) -> Vec<String> {
        self.try_get_string_array(keys::RESPONSE_TYPES_SUPPORTED)
    }

    pub fn response_modes_supported(&self) -> Vec<String> {
        self.try_get_string_array(keys::RESPONSE_MODES_SUPPORTED)
    }

    pub fn subject_types_supported(&self) -> Vec<String> {
        self.try_get_string_array(keys::SUBJECT_TYPES_SUPPORTED)
    }

    pub fn id_token_signing_alg_values_supported(&self) -> Vec<String> {
        self.try_get_string_array(keys::ID_TOKEN_SIGNING_ALG_VALUES_SUPPORTED)
    }

    pub fn token_endpoint_auth_methods_supported(&self) -> Vec<String> {
        self.try_get_string_array(keys::TOKEN_ENDPOINT_AUTH_METHODS_SUPPORTED)
    }

    pub fn token_endpoint_auth_signing_alg_values_supported(&self) -> Vec<String> {
        self.try_get_string_array(keys::TOKEN_ENDPOINT_AUTH_SIGNING_ALG_VALUES_SUPPORTED)
    }

    /// PKCE code challenge methods, e.g. `S256`.
    pub fn code_challenge_methods_supported(&self) -> Vec<String> {
        self.try_get_string_array(keys::CODE_CHALLENGE_METHODS_SUPPORTED)
    }

    pub fn dpop_signing_alg_values_supported(&self) -> Vec<String> {
        self.try_get_string_array(keys::DPOP_SIGNING_ALG_VALUES_SUPPORTED)
    }

    pub fn frontchannel_logout_supported(&self) -> Option<bool> {
        self.try_get_boolean(keys::FRONTCHANNEL_LOGOUT_SUPPORTED)
    }

    pub fn frontchannel_logout_session_supported(&self) -> Option<bool> {
        self.try_get_boolean(keys::FRONTCHANNEL_LOGOUT_SESSION_SUPPORTED)
    }

    pub fn backchannel_logout_supported(&self) -> Option<bool> {
        self.try_get_boolean(keys::BACKCHANNEL_LOGOUT_SUPPORTED)
    }

    pub fn backchannel_logout_session_supported(&self) -> Option<bool> {
        self.try_get_boolean(keys::BACKCHANNEL_LOGOUT_SESSION_SUPPORTED)
    }

    pub fn require_pushed_authorization_requests(&self) -> Option<bool> {
        self.try_get_boolean(keys::REQUIRE_PUSHED_AUTHORIZATION_REQUESTS)
    }

    pub fn tls_client_certificate_bound_access_tokens(&self) -> Option<bool> {
        self.try_get_boolean(keys::TLS_CLIENT_CERTIFICATE_BOUND_ACCESS_TOKENS)
    }

    /// Endpoints to use instead of the regular ones under mutual TLS.
    pub fn mtls_endpoint_aliases(&self) -> MtlsEndpointAliases {
        MtlsEndpointAliases::new(self.try_get_value(keys::MTLS_ENDPOINT_ALIASES))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::Error, OAuth2ErrorCode};

    const GOOGLE_LIKE: &str = r#"{
        "issuer": "https://accounts.example.com",
        "authorization_endpoint": "https://accounts.example.com/o/oauth2/v2/auth",
        "device_authorization_endpoint": "https://oauth2.example.com/device/code",
        "token_endpoint": "https://oauth2.example.com/token",
        "userinfo_endpoint": "https://openidconnect.example.com/v1/userinfo",
        "revocation_endpoint": "https://oauth2.example.com/revoke",
        "jwks_uri": "https://www.example.com/oauth2/v3/certs",
        "response_types_supported": ["code", "token", "id_token", "code token", "none"],
        "subject_types_supported": ["public"],
        "id_token_signing_alg_values_supported": ["RS256"],
        "scopes_supported": ["openid", "email", "profile"],
        "token_endpoint_auth_methods_supported": ["client_secret_post", "client_secret_basic"],
        "claims_supported": ["aud", "email", "email_verified", "exp", "iat", "iss", "sub"],
        "code_challenge_methods_supported": ["plain", "S256"],
        "grant_types_supported": [
            "authorization_code",
            "refresh_token",
            "urn:ietf:params:oauth:grant-type:device_code"
        ],
        "frontchannel_logout_supported": "true",
        "backchannel_logout_supported": false,
        "require_pushed_authorization_requests": null,
        "tls_client_certificate_bound_access_tokens": true,
        "mtls_endpoint_aliases": {
            "token_endpoint": "https://mtls.oauth2.example.com/token",
            "revocation_endpoint": "https://mtls.oauth2.example.com/revoke"
        }
    }"#;

    #[test]
    fn endpoints() {
        let document = DiscoveryDocument::from_json(GOOGLE_LIKE).unwrap();
        assert_eq!(
            Some("https://accounts.example.com".to_owned()),
            document.issuer()
        );
        assert_eq!(
            Some("https://accounts.example.com/o/oauth2/v2/auth".to_owned()),
            document.authorize_endpoint()
        );
        assert_eq!(
            Some("https://oauth2.example.com/token".to_owned()),
            document.token_endpoint()
        );
        assert_eq!(
            Some("https://oauth2.example.com/device/code".to_owned()),
            document.device_authorization_endpoint()
        );
        assert_eq!(None, document.introspection_endpoint());
        assert_eq!(None, document.end_session_endpoint());
        assert_eq!(None, document.registration_endpoint());
    }

    #[test]
    fn lists() {
        let document = DiscoveryDocument::from_json(GOOGLE_LIKE).unwrap();
        assert_eq!(vec!["openid", "email", "profile"], document.scopes_supported());
        assert_eq!(vec!["plain", "S256"], document.code_challenge_methods_supported());
        assert_eq!(3, document.grant_types_supported().len());
        assert!(document.response_modes_supported().is_empty());
    }

    #[test]
    fn flags() {
        let document = DiscoveryDocument::from_json(GOOGLE_LIKE).unwrap();
        assert_eq!(Some(true), document.frontchannel_logout_supported());
        assert_eq!(Some(false), document.backchannel_logout_supported());
        assert_eq!(None, document.require_pushed_authorization_requests());
        assert_eq!(None, document.backchannel_logout_session_supported());
        assert_eq!(Some(true), document.tls_client_certificate_bound_access_tokens());
    }

    #[test]
    fn mtls_aliases() {
        let document = DiscoveryDocument::from_json(GOOGLE_LIKE).unwrap();
        let aliases = document.mtls_endpoint_aliases();
        assert_eq!(
            Some("https://mtls.oauth2.example.com/token".to_owned()),
            aliases.token_endpoint
        );
        assert_eq!(
            Some("https://mtls.oauth2.example.com/revoke".to_owned()),
            aliases.revocation_endpoint
        );
        assert_eq!(None, aliases.introspection_endpoint);
    }

    #[test]
    fn missing_mtls_aliases() {
        let document = DiscoveryDocument::from_json(r#"{ "issuer": "https://idp" }"#).unwrap();
        assert_eq!(MtlsEndpointAliases::default(), document.mtls_endpoint_aliases());
    }

    #[test]
    fn mistyped_members_read_as_absent() {
        let document = DiscoveryDocument::from_json(
            r#"{ "scopes_supported": "openid", "frontchannel_logout_supported": "yes" }"#,
        )
        .unwrap();
        assert!(document.scopes_supported().is_empty());
        assert_eq!(None, document.frontchannel_logout_supported());
    }

    #[test]
    fn non_object_document_reads_as_empty() {
        let document = DiscoveryDocument::from_json("[]").unwrap();
        assert_eq!(None, document.issuer());
        assert!(document.scopes_supported().is_empty());
    }

    #[test]
    fn invalid_json() {
        assert!(matches!(
            DiscoveryDocument::from_json("{ issuer"),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn error_body() {
        let document = DiscoveryDocument::from_json(r#"{ "error": "invalid_request" }"#).unwrap();
        assert!(document.is_error());
        match document.into_result() {
            Err(Error::OAuth2(error)) => assert_eq!(OAuth2ErrorCode::InvalidRequest, error.error),
            other => panic!("unexpected {:?}", other),
        }
    }
}
