/*!
# OpenID Connect & OAuth 2.0 protocol documents

## Legal

Dual-licensed under `MIT` or the [UNLICENSE](http://unlicense.org/).

## Features

Reads the JSON documents exchanged with an OpenID Connect / OAuth 2.0
authorization server without failing on the members a server leaves out or
gets wrong:

- [OpenID Connect Discovery 1.0](https://openid.net/specs/openid-connect-discovery-1_0.html) and
  [RFC 8414](https://datatracker.ietf.org/doc/html/rfc8414) provider metadata, including
  [RFC 8705](https://datatracker.ietf.org/doc/html/rfc8705#section-5) mTLS endpoint aliases.
- [RFC 7591](https://datatracker.ietf.org/doc/html/rfc7591) Dynamic Client Registration request
  metadata (typed) and response.
- Token, [RFC 7662](https://datatracker.ietf.org/doc/html/rfc7662) introspection and userinfo
  responses.
- Flattening of any JSON object into a list of string [`Claim`]s.

Everything is built on a small set of lenient accessors over
[`serde_json`](https://crates.io/crates/serde_json) values, see [`extract`].
Nothing is fetched over the network; bring your own HTTP client.

Logging goes through the [log](https://crates.io/crates/log) facade; install
any logger to see parse failures at `debug` level and claim extraction at
`trace` level.

## Usage

Add dependency to Cargo.toml:

```toml
[dependencies]
openid-document = "0.1"
```

### Use case: reading provider metadata

```rust
use openid_document::{DiscoveryDocument, JsonResponse};

let document = DiscoveryDocument::from_json(r#"{
    "issuer": "https://accounts.example.com",
    "token_endpoint": "https://oauth2.example.com/token",
    "scopes_supported": ["openid", "email", "profile"],
    "claims_parameter_supported": "true"
}"#)?;

assert_eq!(Some("https://oauth2.example.com/token".to_string()), document.token_endpoint());
assert_eq!(vec!["openid", "email", "profile"], document.scopes_supported());
assert_eq!(Some(true), document.try_get_boolean("claims_parameter_supported"));
# Ok::<(), openid_document::error::Error>(())
```

### Use case: claims from an arbitrary payload

```rust
use openid_document::{to_claims, JsonElement};
use serde_json::json;

let payload = json!({ "sub": "42", "roles": ["admin", "dev"], "address": { "country": "DE" } });
let claims = to_claims(JsonElement::from(&payload), Some("https://idp"), &["address"]);

let pairs: Vec<_> = claims.iter().map(|c| (c.claim_type(), c.value())).collect();
assert_eq!(vec![("sub", "42"), ("roles", "admin"), ("roles", "dev")], pairs);
```

### Use case: registering a client

```rust
use openid_document::{DynamicClientRegistrationDocument, DynamicClientRegistrationResponse};

let request = DynamicClientRegistrationDocument {
    client_name: Some("My Example".into()),
    redirect_uris: vec!["https://client.example.org/callback".parse()?],
    ..Default::default()
};
let body = request.to_json()?;

// POST `body` to the registration endpoint, then:
let response = DynamicClientRegistrationResponse::from_json(
    r#"{ "client_id": "s6BhdRkqt3", "client_secret_expires_at": 0 }"#,
)?
.into_result()?;

assert_eq!(Some("s6BhdRkqt3".to_string()), response.client_id());
assert_eq!(None, response.client_secret_expires());
# Ok::<(), Box<dyn std::error::Error>>(())
```
*/

mod claims;
mod deserializers;
pub mod discovery;
mod element;
pub mod error;
pub mod extract;
pub mod introspection;
pub mod mtls;
mod registration;
pub mod registration_response;
mod response;
pub mod token;
pub mod userinfo;

pub use ::biscuit::Empty;
pub use claims::{stringify, to_claims, to_claims_with, Claim, ClaimsOptions, CLAIM_VALUE_TYPE_STRING};
pub use discovery::DiscoveryDocument;
pub use element::{JsonElement, JsonValueKind};
pub use error::{OAuth2Error, OAuth2ErrorCode};
pub use extract::{try_get_boolean, try_get_int, try_get_string, try_get_string_array, try_get_value};
pub use introspection::IntrospectionResponse;
pub use mtls::MtlsEndpointAliases;
pub use registration::DynamicClientRegistrationDocument;
pub use registration_response::DynamicClientRegistrationResponse;
pub use response::JsonResponse;
pub use token::TokenResponse;
pub use userinfo::UserinfoResponse;

/// Reimport `biscuit` dependency.
pub mod biscuit {
    pub use biscuit::*;
}
