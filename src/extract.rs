/*!
Lenient typed accessors over a parsed JSON tree.

None of these functions fail. A missing member and a member of the wrong
shape both come back as `None`, an empty `Vec` or [`JsonElement::Undefined`],
so optional metadata from an authorization server can be read without
letting one malformed member reject the whole document.
*/
use crate::JsonElement;

/// Member `name` of `root`.
///
/// Returns [`JsonElement::Undefined`] when `root` is undefined, is not an
/// object, or has no such member.
pub fn try_get_value<'a>(root: JsonElement<'a>, name: &str) -> JsonElement<'a> {
    match root {
        JsonElement::Object(map) => map.get(name).into(),
        JsonElement::Undefined
        | JsonElement::Null
        | JsonElement::Bool(_)
        | JsonElement::Number(_)
        | JsonElement::String(_)
        | JsonElement::Array(_) => JsonElement::Undefined,
    }
}

/// Member `name` of `root` in its generic textual form.
///
/// A present `null` comes back as `Some("null")`, only an undefined member
/// gives `None`.
pub fn try_get_string(root: JsonElement<'_>, name: &str) -> Option<String> {
    match try_get_value(root, name) {
        JsonElement::Undefined => None,
        value => Some(value.to_string()),
    }
}

/// Member `name` of `root` parsed as a base-10 integer.
pub fn try_get_int(root: JsonElement<'_>, name: &str) -> Option<i64> {
    try_get_string(root, name)?.trim().parse().ok()
}

/// Member `name` of `root` parsed as a boolean.
///
/// Accepts JSON booleans and the strings `true` / `false` in any letter case.
pub fn try_get_boolean(root: JsonElement<'_>, name: &str) -> Option<bool> {
    parse_bool(&try_get_string(root, name)?)
}

/// Elements of the array member `name` in their generic textual form.
///
/// Order and duplicates are kept. Anything other than an array gives an
/// empty `Vec`.
pub fn try_get_string_array(root: JsonElement<'_>, name: &str) -> Vec<String> {
    match try_get_value(root, name) {
        JsonElement::Array(items) => items
            .iter()
            .map(|item| JsonElement::from(item).to_string())
            .collect(),
        _ => Vec::new(),
    }
}

pub(crate) fn parse_bool(value: &str) -> Option<bool> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}
