use crate::{response::json_response, to_claims, Claim, JsonElement, JsonResponse};
use serde_json::Value;

pub mod keys {
    pub const SUB: &str = "sub";
    pub const NAME: &str = "name";
    pub const PREFERRED_USERNAME: &str = "preferred_username";
    pub const EMAIL: &str = "email";
    pub const EMAIL_VERIFIED: &str = "email_verified";
    pub const PHONE_NUMBER: &str = "phone_number";
    pub const PHONE_NUMBER_VERIFIED: &str = "phone_number_verified";
    pub const ADDRESS: &str = "address";
    pub const UPDATED_AT: &str = "updated_at";
}

/// Claims about the authenticated End-User returned by the userinfo endpoint.
/// See [OpenID Connect Core, section 5.3.2](https://openid.net/specs/openid-connect-core-1_0.html#UserInfoResponse).
#[derive(Debug, Clone, PartialEq)]
pub struct UserinfoResponse {
    json: Value,
}

json_response!(UserinfoResponse);

impl UserinfoResponse {
    /// Subject - Identifier for the End-User at the Issuer.
    pub fn sub(&self) -> Option<String> {
        self.try_get_string(keys::SUB)
    }

    pub fn name(&self) -> Option<String> {
        self.try_get_string(keys::NAME)
    }

    pub fn preferred_username(&self) -> Option<String> {
        self.try_get_string(keys::PREFERRED_USERNAME)
    }

    pub fn email(&self) -> Option<String> {
        self.try_get_string(keys::EMAIL)
    }

    // Some servers send "true" instead of true.
    pub fn email_verified(&self) -> bool {
        self.try_get_boolean(keys::EMAIL_VERIFIED).unwrap_or(false)
    }

    pub fn phone_number(&self) -> Option<String> {
        self.try_get_string(keys::PHONE_NUMBER)
    }

    pub fn phone_number_verified(&self) -> bool {
        self.try_get_boolean(keys::PHONE_NUMBER_VERIFIED)
            .unwrap_or(false)
    }

    /// End-User's preferred postal address, a JSON object.
    pub fn address(&self) -> JsonElement<'_> {
        self.try_get_value(keys::ADDRESS)
    }

    /// Seconds since the epoch of the last profile change.
    pub fn updated_at(&self) -> Option<i64> {
        self.try_get_int(keys::UPDATED_AT)
    }

    /// Every member as a claim, in document order.
    pub fn claims(&self, issuer: Option<&str>) -> Vec<Claim> {
        to_claims(self.root(), issuer, &[])
    }
}
