use crate::extract::parse_bool;
use de::Visitor;
use serde::de;
use serde::Deserializer;

/// Optional boolean that some servers send as a string.
pub fn option_bool_from_str_or_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(OptionBoolOrStringVisitor)
}

struct OptionBoolOrStringVisitor;

impl<'de> Visitor<'de> for OptionBoolOrStringVisitor {
    type Value = Option<bool>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a boolean, null or string of \"true\", \"false\".")
    }

    fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Some(value))
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        match parse_bool(value) {
            Some(b) => Ok(Some(b)),
            None => Err(E::custom(format!("Unknown string value: {}", value))),
        }
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(None)
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(None)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }
}
