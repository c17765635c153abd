use crate::JsonElement;
use log::trace;
use std::collections::HashSet;

/// Value type of every claim produced by [`to_claims`].
pub const CLAIM_VALUE_TYPE_STRING: &str = "string";

/// A single assertion about a subject, optionally tagged with its issuer.
///
/// Multi-valued members (for example `amr`) produce one `Claim` per value,
/// all sharing the same [`Claim::claim_type`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Claim {
    claim_type: String,
    value: String,
    value_type: &'static str,
    issuer: Option<String>,
}

impl Claim {
    pub fn new(
        claim_type: impl Into<String>,
        value: impl Into<String>,
        issuer: Option<&str>,
    ) -> Self {
        Self {
            claim_type: claim_type.into(),
            value: value.into(),
            value_type: CLAIM_VALUE_TYPE_STRING,
            issuer: issuer.map(str::to_owned),
        }
    }

    /// The member name the claim was read from, e.g. `sub`.
    pub fn claim_type(&self) -> &str {
        &self.claim_type
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn value_type(&self) -> &'static str {
        self.value_type
    }

    pub fn issuer(&self) -> Option<&str> {
        self.issuer.as_deref()
    }
}

/// Optional parameters for turning a JSON object into claims.
/// Derives Default, so remember to ..Default::default() after you specify what you want.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaimsOptions {
    /// Issuer attached to every produced claim.
    pub issuer: Option<String>,
    /// Member names that produce no claims. Matched exactly.
    pub exclude: HashSet<String>,
}

impl ClaimsOptions {
    pub fn issuer(issuer: impl Into<String>) -> Self {
        Self {
            issuer: Some(issuer.into()),
            ..Default::default()
        }
    }

    pub fn excluding<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude.extend(names.into_iter().map(Into::into));
        self
    }
}

/// Canonical claim value of a JSON node.
///
/// Strings are taken verbatim, without quotes or escaping. Everything else
/// is written as compact JSON, so `42`, `true`, `null`, `[1,2]` and
/// `{"a":1}` stay machine readable.
pub fn stringify(element: JsonElement<'_>) -> String {
    match element {
        JsonElement::String(s) => s.to_owned(),
        other => other.to_json_string(),
    }
}

/// Flattens a JSON object into claims.
///
/// Members are visited in document order, members named in `exclude` are
/// skipped and array members fan out into one claim per element. A
/// non-object input gives no claims.
///
/// # Examples
///
/// ```
/// use openid_document::{to_claims, JsonElement};
/// use serde_json::json;
///
/// let payload = json!({ "sub": "123", "amr": ["pwd", "otp"] });
/// let claims = to_claims(JsonElement::from(&payload), Some("https://idp"), &[]);
///
/// let pairs: Vec<_> = claims.iter().map(|c| (c.claim_type(), c.value())).collect();
/// assert_eq!(vec![("sub", "123"), ("amr", "pwd"), ("amr", "otp")], pairs);
/// ```
pub fn to_claims(element: JsonElement<'_>, issuer: Option<&str>, exclude: &[&str]) -> Vec<Claim> {
    collect_claims(element, issuer, |name| exclude.iter().any(|e| *e == name))
}

/// [`to_claims`] driven by [`ClaimsOptions`].
pub fn to_claims_with(element: JsonElement<'_>, options: &ClaimsOptions) -> Vec<Claim> {
    collect_claims(element, options.issuer.as_deref(), |name| {
        options.exclude.contains(name)
    })
}

fn collect_claims<F>(element: JsonElement<'_>, issuer: Option<&str>, excluded: F) -> Vec<Claim>
where
    F: Fn(&str) -> bool,
{
    let map = match element {
        JsonElement::Object(map) => map,
        _ => return Vec::new(),
    };

    let mut claims = Vec::with_capacity(map.len());
    for (name, value) in map.iter().filter(|(name, _)| !excluded(name.as_str())) {
        match JsonElement::from(value) {
            JsonElement::Array(items) => claims.extend(
                items
                    .iter()
                    .map(|item| Claim::new(name.as_str(), stringify(item.into()), issuer)),
            ),
            value => claims.push(Claim::new(name.as_str(), stringify(value), issuer)),
        }
    }
    trace!("materialized {} claims from {} members", claims.len(), map.len());

    claims
}
