use crate::{deserializers::option_bool_from_str_or_bool, error::Error};
use biscuit::{jwk::JWKSet, Empty};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use url::Url;

/// Client metadata sent to a Dynamic Client Registration endpoint.
///
/// Collections default to empty and are left out of the serialized request
/// when empty; unset optional members are left out as well. Members this
/// struct does not know are kept in [`extensions`](Self::extensions) and
/// written back unchanged.
///
/// See:
///
/// - [RFC 7591, section 2](https://datatracker.ietf.org/doc/html/rfc7591#section-2)
/// - [OpenID Connect Dynamic Client Registration 1.0](https://openid.net/specs/openid-connect-registration-1_0.html#ClientMetadata)
///
/// # Examples
///
/// ```
/// use openid_document::DynamicClientRegistrationDocument;
///
/// let document = DynamicClientRegistrationDocument {
///     client_name: Some("My Example".into()),
///     redirect_uris: vec!["https://client.example.org/callback".parse().unwrap()],
///     grant_types: vec!["authorization_code".into()],
///     ..Default::default()
/// };
///
/// assert_eq!(
///     r#"{"redirect_uris":["https://client.example.org/callback"],"grant_types":["authorization_code"],"client_name":"My Example"}"#,
///     document.to_json().unwrap()
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DynamicClientRegistrationDocument {
    /// Redirection URIs for use in redirect-based flows.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub redirect_uris: Vec<Url>,
    /// OAuth 2.0 `response_type` values the client will restrict itself to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub response_types: Vec<String>,
    /// OAuth 2.0 grant types the client will restrict itself to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub grant_types: Vec<String>,
    /// Kind of the application, `web` or `native`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_type: Option<String>,
    /// Ways to contact people responsible for this client, typically email addresses.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contacts: Vec<String>,
    /// Human-readable name of the client.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_uri: Option<Url>,
    /// Home page of the client.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_uri: Option<Url>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_uri: Option<Url>,
    /// Terms of service of the client.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tos_uri: Option<Url>,
    /// Reference to the client's JWK Set. MUST NOT be used together with `jwks`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jwks_uri: Option<Url>,
    /// The client's JWK Set passed by value. MUST NOT be used together with `jwks_uri`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jwks: Option<JWKSet<Empty>>,
    /// Used by the provider to group `redirect_uris` for pairwise subject identifiers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector_identifier_uri: Option<Url>,
    /// `pairwise` or `public`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_token_signed_response_alg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_token_encrypted_response_alg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_token_encrypted_response_enc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub userinfo_signed_response_alg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub userinfo_encrypted_response_alg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub userinfo_encrypted_response_enc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_object_signing_alg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_object_encryption_alg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_object_encryption_enc: Option<String>,
    /// Requested client authentication method for the token endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_endpoint_auth_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_endpoint_auth_signing_alg: Option<String>,
    /// Default maximum authentication age, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_max_age: Option<i64>,
    #[serde(
        default,
        deserialize_with = "option_bool_from_str_or_bool",
        skip_serializing_if = "Option::is_none"
    )]
    pub require_auth_time: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub default_acr_values: Vec<String>,
    /// URI a third party can use to initiate a login by the client.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initiate_login_uri: Option<Url>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub request_uris: Vec<Url>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub post_logout_redirect_uris: Vec<Url>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frontchannel_logout_uri: Option<Url>,
    #[serde(
        default,
        deserialize_with = "option_bool_from_str_or_bool",
        skip_serializing_if = "Option::is_none"
    )]
    pub frontchannel_logout_session_required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backchannel_logout_uri: Option<Url>,
    #[serde(
        default,
        deserialize_with = "option_bool_from_str_or_bool",
        skip_serializing_if = "Option::is_none"
    )]
    pub backchannel_logout_session_required: Option<bool>,
    /// Space-separated scope values the client can use.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// Identifier of the client software, stable across instances and versions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub software_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub software_version: Option<String>,
    /// Signed JWT asserting metadata values about the client software.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub software_statement: Option<String>,
    // JWT Secured Authorization Response Mode (JARM)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorization_signed_response_alg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorization_encrypted_response_alg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorization_encrypted_response_enc: Option<String>,
    // JWT response for token introspection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub introspection_signed_response_alg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub introspection_encrypted_response_alg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub introspection_encrypted_response_enc: Option<String>,
    // RFC 8705 certificate bound clients
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_client_auth_subject_dn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_client_auth_san_dns: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_client_auth_san_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_client_auth_san_ip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_client_auth_san_email: Option<String>,
    #[serde(
        default,
        deserialize_with = "option_bool_from_str_or_bool",
        skip_serializing_if = "Option::is_none"
    )]
    pub tls_client_certificate_bound_access_tokens: Option<bool>,
    #[serde(
        default,
        deserialize_with = "option_bool_from_str_or_bool",
        skip_serializing_if = "Option::is_none"
    )]
    pub require_signed_request_object: Option<bool>,
    #[serde(
        default,
        deserialize_with = "option_bool_from_str_or_bool",
        skip_serializing_if = "Option::is_none"
    )]
    pub require_pushed_authorization_requests: Option<bool>,
    #[serde(
        default,
        deserialize_with = "option_bool_from_str_or_bool",
        skip_serializing_if = "Option::is_none"
    )]
    pub dpop_bound_access_tokens: Option<bool>,
    /// Any member not listed above, kept verbatim.
    ///
    /// Meant for unknown members only. When a key here names a typed field
    /// that is set, [`to_json`](Self::to_json) and [`to_value`](Self::to_value)
    /// write the typed field and drop the entry.
    #[serde(flatten)]
    pub extensions: Map<String, Value>,
}

impl DynamicClientRegistrationDocument {
    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(Error::from)
    }

    pub fn from_value(json: Value) -> Result<Self, Error> {
        serde_json::from_value(json).map_err(Error::from)
    }

    /// Compact JSON request body.
    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string(&self.to_value()?).map_err(Error::from)
    }

    pub fn to_value(&self) -> Result<Value, Error> {
        let typed = Self {
            extensions: Map::new(),
            ..self.clone()
        };
        let mut members = match serde_json::to_value(typed)? {
            Value::Object(members) => members,
            other => return Ok(other),
        };
        for (name, value) in &self.extensions {
            if !members.contains_key(name) {
                members.insert(name.clone(), value.clone());
            }
        }
        Ok(Value::Object(members))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_serializes_to_empty_object() {
        let document = DynamicClientRegistrationDocument::default();
        assert_eq!("{}", document.to_json().unwrap());
    }

    #[test]
    fn from_rfc7591_example() {
        let json = r#"
            {
                "redirect_uris": [
                    "https://client.example.org/callback",
                    "https://client.example.org/callback2"
                ],
                "client_name": "My Example Client",
                "client_name#ja-Jpan-JP": "クライアント名",
                "token_endpoint_auth_method": "client_secret_basic",
                "logo_uri": "https://client.example.org/logo.png",
                "jwks_uri": "https://client.example.org/my_public_keys.jwks",
                "example_extension_parameter": "example_value"
            }
        "#;
        let document = DynamicClientRegistrationDocument::from_json(json).unwrap();
        assert_eq!(2, document.redirect_uris.len());
        assert_eq!(
            "https://client.example.org/callback",
            document.redirect_uris[0].as_str()
        );
        assert_eq!(Some("My Example Client"), document.client_name.as_deref());
        assert_eq!(
            Some("client_secret_basic"),
            document.token_endpoint_auth_method.as_deref()
        );
        assert!(document.grant_types.is_empty());
        assert_eq!(
            vec!["client_name#ja-Jpan-JP", "example_extension_parameter"],
            document.extensions.keys().collect::<Vec<_>>()
        );
        assert_eq!(
            Some(&json!("example_value")),
            document.extensions.get("example_extension_parameter")
        );
    }

    #[test]
    fn extensions_are_written_back() {
        let mut document = DynamicClientRegistrationDocument {
            client_name: Some("c".to_owned()),
            ..Default::default()
        };
        document
            .extensions
            .insert("vendor_flags".to_owned(), json!({ "beta": [1, 2] }));
        let value = document.to_value().unwrap();
        assert_eq!(json!({ "client_name": "c", "vendor_flags": { "beta": [1, 2] } }), value);

        let back = DynamicClientRegistrationDocument::from_value(value).unwrap();
        assert_eq!(document, back);
    }

    #[test]
    fn typed_field_wins_over_same_named_extension() {
        let mut document = DynamicClientRegistrationDocument {
            client_name: Some("typed".to_owned()),
            ..Default::default()
        };
        document
            .extensions
            .insert("client_name".to_owned(), json!("extension"));
        document
            .extensions
            .insert("scope".to_owned(), json!("openid"));

        assert_eq!(
            r#"{"client_name":"typed","scope":"openid"}"#,
            document.to_json().unwrap()
        );
    }

    #[test]
    fn optional_scalars() {
        let json = r#"
            {
                "default_max_age": 3600,
                "require_auth_time": "true",
                "frontchannel_logout_session_required": false,
                "backchannel_logout_session_required": null,
                "application_type": "native",
                "subject_type": "pairwise",
                "post_logout_redirect_uris": ["com.example.app:/logout"]
            }
        "#;
        let document = DynamicClientRegistrationDocument::from_json(json).unwrap();
        assert_eq!(Some(3600), document.default_max_age);
        assert_eq!(Some(true), document.require_auth_time);
        assert_eq!(Some(false), document.frontchannel_logout_session_required);
        assert_eq!(None, document.backchannel_logout_session_required);
        assert_eq!(Some("native"), document.application_type.as_deref());
        assert_eq!(
            "com.example.app:/logout",
            document.post_logout_redirect_uris[0].as_str()
        );
        assert!(document.extensions.is_empty());
    }

    #[test]
    fn empty_collections_are_omitted() {
        let document = DynamicClientRegistrationDocument {
            software_id: Some("4NRB1-0XZABZI9E6-5SM3R".to_owned()),
            contacts: Vec::new(),
            require_auth_time: Some(false),
            ..Default::default()
        };
        assert_eq!(
            json!({ "software_id": "4NRB1-0XZABZI9E6-5SM3R", "require_auth_time": false }),
            document.to_value().unwrap()
        );
    }

    #[test]
    fn jwks_by_value() {
        let json = r#"
            {
                "jwks": {
                    "keys": [
                        { "kty": "oct", "k": "GawgguFyGrWKav7AX4VKUg" }
                    ]
                }
            }
        "#;
        let document = DynamicClientRegistrationDocument::from_json(json).unwrap();
        assert_eq!(1, document.jwks.map(|jwks| jwks.keys.len()).unwrap_or_default());
    }

    #[test]
    fn invalid_uri_is_an_error() {
        let json = r#"{ "redirect_uris": ["not a uri"] }"#;
        assert!(matches!(
            DynamicClientRegistrationDocument::from_json(json),
            Err(Error::Json(_))
        ));
    }
}
