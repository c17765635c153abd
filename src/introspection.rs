use crate::{response::json_response, to_claims, Claim, JsonElement, JsonResponse};
use serde_json::Value;

pub mod keys {
    pub const ACTIVE: &str = "active";
    pub const SCOPE: &str = "scope";
    pub const CLIENT_ID: &str = "client_id";
    pub const USERNAME: &str = "username";
    pub const TOKEN_TYPE: &str = "token_type";
    pub const EXP: &str = "exp";
    pub const IAT: &str = "iat";
    pub const NBF: &str = "nbf";
    pub const SUB: &str = "sub";
    pub const AUD: &str = "aud";
    pub const ISS: &str = "iss";
    pub const JTI: &str = "jti";
}

/// Token introspection answer, see [RFC 7662, section 2.2](https://datatracker.ietf.org/doc/html/rfc7662#section-2.2).
#[derive(Debug, Clone, PartialEq)]
pub struct IntrospectionResponse {
    json: Value,
}

json_response!(IntrospectionResponse);

impl IntrospectionResponse {
    /// Whether the presented token is currently active. A missing or
    /// unreadable `active` member counts as inactive.
    pub fn is_active(&self) -> bool {
        self.try_get_boolean(keys::ACTIVE).unwrap_or(false)
    }

    /// Scopes associated with the token.
    ///
    /// The RFC mandates a space-separated string; an array of strings is
    /// accepted too.
    pub fn scopes(&self) -> Vec<String> {
        match self.try_get_value(keys::SCOPE) {
            JsonElement::String(scope) => scope.split_whitespace().map(str::to_owned).collect(),
            JsonElement::Array(_) => self.try_get_string_array(keys::SCOPE),
            _ => Vec::new(),
        }
    }

    /// Client identifier for the OAuth 2.0 client that requested this token.
    pub fn client_id(&self) -> Option<String> {
        self.try_get_string(keys::CLIENT_ID)
    }

    /// Human-readable identifier for the resource owner who authorized this token.
    pub fn username(&self) -> Option<String> {
        self.try_get_string(keys::USERNAME)
    }

    pub fn token_type(&self) -> Option<String> {
        self.try_get_string(keys::TOKEN_TYPE)
    }

    // RFC 7662 allows an arbitrarily large number here. An i64 unix time
    // is up to 293 billion years from 1970.
    pub fn exp(&self) -> Option<i64> {
        self.try_get_int(keys::EXP)
    }

    pub fn iat(&self) -> Option<i64> {
        self.try_get_int(keys::IAT)
    }

    pub fn nbf(&self) -> Option<i64> {
        self.try_get_int(keys::NBF)
    }

    pub fn sub(&self) -> Option<String> {
        self.try_get_string(keys::SUB)
    }

    /// Audiences of the token, whether sent as a single string or an array.
    pub fn aud(&self) -> Vec<String> {
        match self.try_get_value(keys::AUD) {
            JsonElement::String(aud) => vec![aud.to_owned()],
            _ => self.try_get_string_array(keys::AUD),
        }
    }

    pub fn iss(&self) -> Option<String> {
        self.try_get_string(keys::ISS)
    }

    pub fn jti(&self) -> Option<String> {
        self.try_get_string(keys::JTI)
    }

    /// All members as claims issued by `iss`, with `scope` split into one
    /// claim per scope value.
    pub fn claims(&self) -> Vec<Claim> {
        let issuer = self.iss();
        let mut claims = to_claims(self.root(), issuer.as_deref(), &[keys::SCOPE]);
        claims.extend(
            self.scopes()
                .into_iter()
                .map(|scope| Claim::new(keys::SCOPE, scope, issuer.as_deref())),
        );
        claims
    }
}
