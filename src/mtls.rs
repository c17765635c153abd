use crate::{extract, JsonElement};
use serde_json::Value;

/// Member names inside `mtls_endpoint_aliases`.
pub mod keys {
    pub const TOKEN_ENDPOINT: &str = "token_endpoint";
    pub const REVOCATION_ENDPOINT: &str = "revocation_endpoint";
    pub const INTROSPECTION_ENDPOINT: &str = "introspection_endpoint";
    pub const DEVICE_AUTHORIZATION_ENDPOINT: &str = "device_authorization_endpoint";
}

/// Alternative endpoints to use when the client authenticates with mutual
/// TLS.
///
/// See [RFC 8705, section 5](https://datatracker.ietf.org/doc/html/rfc8705#section-5).
/// An absent or malformed `mtls_endpoint_aliases` member gives aliases with
/// every endpoint unset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MtlsEndpointAliases {
    json: Option<Value>,
    /// mTLS alias of the token endpoint.
    pub token_endpoint: Option<String>,
    /// mTLS alias of the revocation endpoint.
    pub revocation_endpoint: Option<String>,
    /// mTLS alias of the introspection endpoint.
    pub introspection_endpoint: Option<String>,
    /// mTLS alias of the device authorization endpoint.
    pub device_authorization_endpoint: Option<String>,
}

impl MtlsEndpointAliases {
    pub fn new(json: JsonElement<'_>) -> Self {
        Self {
            json: json.to_value(),
            token_endpoint: extract::try_get_string(json, keys::TOKEN_ENDPOINT),
            revocation_endpoint: extract::try_get_string(json, keys::REVOCATION_ENDPOINT),
            introspection_endpoint: extract::try_get_string(json, keys::INTROSPECTION_ENDPOINT),
            device_authorization_endpoint: extract::try_get_string(
                json,
                keys::DEVICE_AUTHORIZATION_ENDPOINT,
            ),
        }
    }

    /// The raw aliases object, [`JsonElement::Undefined`] when the document
    /// had none.
    pub fn json(&self) -> JsonElement<'_> {
        self.json.as_ref().into()
    }
}
