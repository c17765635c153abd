use serde_json::{Map, Number, Value};
use std::fmt;

/// The kind of a [`JsonElement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonValueKind {
    Undefined,
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

/// A borrowed view of a node in a parsed JSON tree.
///
/// Unlike [`serde_json::Value`] this can also represent a member that is not
/// there at all. A present member holding `null` is [`JsonElement::Null`], an
/// absent member is [`JsonElement::Undefined`]; the accessors in
/// [`crate::extract`] keep the two apart.
///
/// # Examples
///
/// ```
/// use openid_document::{JsonElement, JsonValueKind};
/// use serde_json::json;
///
/// let document = json!({ "end_session_endpoint": null });
///
/// let present = JsonElement::from(document.get("end_session_endpoint"));
/// let absent = JsonElement::from(document.get("check_session_iframe"));
///
/// assert_eq!(present.kind(), JsonValueKind::Null);
/// assert_eq!(absent.kind(), JsonValueKind::Undefined);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JsonElement<'a> {
    Undefined,
    Null,
    Bool(bool),
    Number(&'a Number),
    String(&'a str),
    Array(&'a [Value]),
    Object(&'a Map<String, Value>),
}

impl<'a> JsonElement<'a> {
    pub fn kind(&self) -> JsonValueKind {
        match *self {
            JsonElement::Undefined => JsonValueKind::Undefined,
            JsonElement::Null => JsonValueKind::Null,
            JsonElement::Bool(_) => JsonValueKind::Boolean,
            JsonElement::Number(_) => JsonValueKind::Number,
            JsonElement::String(_) => JsonValueKind::String,
            JsonElement::Array(_) => JsonValueKind::Array,
            JsonElement::Object(_) => JsonValueKind::Object,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, JsonElement::Undefined)
    }

    /// Owned copy of the node, `None` for [`JsonElement::Undefined`].
    pub fn to_value(&self) -> Option<Value> {
        match *self {
            JsonElement::Undefined => None,
            JsonElement::Null => Some(Value::Null),
            JsonElement::Bool(b) => Some(Value::Bool(b)),
            JsonElement::Number(n) => Some(Value::Number(n.clone())),
            JsonElement::String(s) => Some(Value::String(s.to_owned())),
            JsonElement::Array(items) => Some(Value::Array(items.to_vec())),
            JsonElement::Object(map) => Some(Value::Object(map.clone())),
        }
    }

    /// Compact JSON text of the node. `Undefined` has no JSON form and
    /// yields an empty string.
    pub fn to_json_string(&self) -> String {
        match *self {
            JsonElement::Undefined => String::new(),
            JsonElement::Null => "null".to_owned(),
            JsonElement::Bool(b) => b.to_string(),
            JsonElement::Number(n) => n.to_string(),
            JsonElement::String(s) => Value::from(s).to_string(),
            JsonElement::Array(items) => serde_json::to_string(items).unwrap_or_default(),
            JsonElement::Object(map) => serde_json::to_string(map).unwrap_or_default(),
        }
    }
}

impl<'a> From<&'a Value> for JsonElement<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Null => JsonElement::Null,
            Value::Bool(b) => JsonElement::Bool(*b),
            Value::Number(n) => JsonElement::Number(n),
            Value::String(s) => JsonElement::String(s),
            Value::Array(items) => JsonElement::Array(items),
            Value::Object(map) => JsonElement::Object(map),
        }
    }
}

impl<'a> From<Option<&'a Value>> for JsonElement<'a> {
    fn from(value: Option<&'a Value>) -> Self {
        value.map(JsonElement::from).unwrap_or(JsonElement::Undefined)
    }
}

impl<'a> From<&'a Map<String, Value>> for JsonElement<'a> {
    fn from(map: &'a Map<String, Value>) -> Self {
        JsonElement::Object(map)
    }
}

/// Generic textual form of the node.
///
/// Strings are written raw, `null` as the `null` token, booleans and numbers
/// as their JSON literals, arrays and objects as indented JSON.
impl fmt::Display for JsonElement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            JsonElement::Undefined => Ok(()),
            JsonElement::Null => f.write_str("null"),
            JsonElement::Bool(b) => write!(f, "{}", b),
            JsonElement::Number(n) => write!(f, "{}", n),
            JsonElement::String(s) => f.write_str(s),
            JsonElement::Array(items) => {
                f.write_str(&serde_json::to_string_pretty(items).map_err(|_| fmt::Error)?)
            }
            JsonElement::Object(map) => {
                f.write_str(&serde_json::to_string_pretty(map).map_err(|_| fmt::Error)?)
            }
        }
    }
}
