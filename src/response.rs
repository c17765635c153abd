use crate::{
    claims::{self, Claim, ClaimsOptions},
    extract, JsonElement, OAuth2Error,
};
use serde_json::Value;

/// A protocol response kept as its raw JSON tree.
///
/// Implementors only point at the tree; every typed read is provided on top
/// of the lenient accessors in [`crate::extract`], so an unexpected or
/// missing member never fails the response as a whole.
pub trait JsonResponse {
    /// The raw response body.
    fn json(&self) -> &Value;

    fn root(&self) -> JsonElement<'_> {
        JsonElement::from(self.json())
    }

    fn try_get_value(&self, name: &str) -> JsonElement<'_> {
        extract::try_get_value(self.root(), name)
    }

    fn try_get_string(&self, name: &str) -> Option<String> {
        extract::try_get_string(self.root(), name)
    }

    fn try_get_int(&self, name: &str) -> Option<i64> {
        extract::try_get_int(self.root(), name)
    }

    fn try_get_boolean(&self, name: &str) -> Option<bool> {
        extract::try_get_boolean(self.root(), name)
    }

    fn try_get_string_array(&self, name: &str) -> Vec<String> {
        extract::try_get_string_array(self.root(), name)
    }

    /// All top-level members as claims.
    fn to_claims(&self, options: &ClaimsOptions) -> Vec<Claim> {
        claims::to_claims_with(self.root(), options)
    }

    /// The OAuth 2.0 error carried by the body, if any.
    fn error(&self) -> Option<OAuth2Error> {
        OAuth2Error::from_json(self.root())
    }

    fn is_error(&self) -> bool {
        self.error().is_some()
    }
}

/// Implements [`JsonResponse`] and the usual constructors for a newtype over
/// a JSON tree.
macro_rules! json_response {
    ($name:ident) => {
        impl $name {
            /// Parses a response body.
            pub fn from_json(json: &str) -> Result<Self, $crate::error::Error> {
                let value: serde_json::Value = serde_json::from_str(json).map_err(|e| {
                    log::debug!("{} is not valid JSON: {}", stringify!($name), e);
                    e
                })?;
                Ok(Self::from_value(value))
            }

            /// Wraps an already parsed response body.
            pub fn from_value(json: serde_json::Value) -> Self {
                Self { json }
            }

            /// Turns a body carrying an OAuth 2.0 error into `Err`.
            pub fn into_result(self) -> Result<Self, $crate::error::Error> {
                match $crate::JsonResponse::error(&self) {
                    Some(error) => {
                        log::debug!("{} carries an error: {}", stringify!($name), error);
                        Err(error.into())
                    }
                    None => Ok(self),
                }
            }
        }

        impl $crate::JsonResponse for $name {
            fn json(&self) -> &serde_json::Value {
                &self.json
            }
        }
    };
}

pub(crate) use json_response;
