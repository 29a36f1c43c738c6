//! Envelope codec
//!
//! The API wraps every payload in at least one object key:
//!
//! ```text
//! single:      {"storage": {...}}
//! collection:  {"storages": {"storage": [{...}, {...}]}}
//! write body:  {"storage": {...}}            (never double nested)
//! ```
//!
//! [`encode`] and [`decode`] are the only places that know about this wrapping.
//! The field-level quirks (integers sent as strings, lists of scalars wrapped in
//! an object) are handled by the serde helpers in [`string_number`] and
//! [`nested`], which the model types opt into per field.

use crate::error::{Error, Result};
use serde::de::{self, DeserializeOwned};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Expected envelope layout of a response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape<'a> {
    /// `{"<key>": {...}}`
    Single(&'a str),
    /// `{"<plural>": {"<singular>": [...]}}`
    Collection { plural: &'a str, singular: &'a str },
}

/// Nest `fields` one level under `key` and serialize to bytes
pub fn encode<T>(key: &str, fields: &T) -> Result<Vec<u8>>
where
    T: Serialize + ?Sized,
{
    let mut envelope = serde_json::Map::with_capacity(1);
    envelope.insert(key.to_string(), serde_json::to_value(fields)?);
    Ok(serde_json::to_vec(&Value::Object(envelope))?)
}

/// Unwrap `bytes` according to `shape` and decode each resource
///
/// A single-resource shape yields a one-element vector.
pub fn decode<T>(bytes: &[u8], shape: Shape<'_>) -> Result<Vec<T>>
where
    T: DeserializeOwned,
{
    let root: Value = serde_json::from_slice(bytes)
        .map_err(|e| Error::MalformedEnvelope(format!("response is not JSON: {e}")))?;

    match shape {
        Shape::Single(key) => {
            let inner = take_key(root, key)?;
            if !inner.is_object() {
                return Err(Error::MalformedEnvelope(format!(
                    "expected an object under \"{key}\", found {}",
                    kind_of(&inner)
                )));
            }
            Ok(vec![from_value(inner, key)?])
        }
        Shape::Collection { plural, singular } => {
            let wrapper = take_key(root, plural)?;
            let items = match take_key(wrapper, singular)? {
                Value::Array(items) => items,
                other => {
                    return Err(Error::MalformedEnvelope(format!(
                        "expected an array under \"{plural}.{singular}\", found {}",
                        kind_of(&other)
                    )));
                }
            };
            items
                .into_iter()
                .map(|item| from_value(item, singular))
                .collect()
        }
    }
}

/// Decode a single-resource envelope
pub fn decode_one<T>(bytes: &[u8], key: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    decode(bytes, Shape::Single(key))?
        .pop()
        .ok_or_else(|| Error::MalformedEnvelope(format!("no resource under \"{key}\"")))
}

/// Decode a collection envelope, preserving array order
pub fn decode_many<T>(bytes: &[u8], plural: &str, singular: &str) -> Result<Vec<T>>
where
    T: DeserializeOwned,
{
    decode(bytes, Shape::Collection { plural, singular })
}

fn take_key(value: Value, key: &str) -> Result<Value> {
    match value {
        Value::Object(mut map) => map
            .remove(key)
            .ok_or_else(|| Error::MalformedEnvelope(format!("missing key \"{key}\""))),
        other => Err(Error::MalformedEnvelope(format!(
            "expected an object containing \"{key}\", found {}",
            kind_of(&other)
        ))),
    }
}

fn from_value<T: DeserializeOwned>(value: Value, key: &str) -> Result<T> {
    serde_json::from_value(value)
        .map_err(|e| Error::MalformedEnvelope(format!("invalid \"{key}\": {e}")))
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Integers the API sends and expects as quoted strings
///
/// Deserialization accepts either form, so the same field decodes from both
/// the string-encoding endpoints and the ones that send plain numbers.
pub mod string_number {
    use super::*;
    use std::fmt::Display;
    use std::str::FromStr;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr<T> {
        Number(T),
        Text(String),
    }

    pub fn serialize<T, S>(value: &T, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        T: Display,
        S: Serializer,
    {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> std::result::Result<T, D::Error>
    where
        T: Deserialize<'de> + FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        match Repr::<T>::deserialize(deserializer)? {
            Repr::Number(n) => Ok(n),
            Repr::Text(s) => s.trim().parse().map_err(de::Error::custom),
        }
    }

    /// Optional variant; `null` and `""` decode to `None`
    pub mod option {
        use super::*;

        pub fn serialize<T, S>(
            value: &Option<T>,
            serializer: S,
        ) -> std::result::Result<S::Ok, S::Error>
        where
            T: Display,
            S: Serializer,
        {
            match value {
                Some(v) => serializer.collect_str(v),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, T, D>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
        where
            T: Deserialize<'de> + FromStr,
            T::Err: Display,
            D: Deserializer<'de>,
        {
            match Option::<Repr<T>>::deserialize(deserializer)? {
                None => Ok(None),
                Some(Repr::Number(n)) => Ok(Some(n)),
                Some(Repr::Text(s)) if s.trim().is_empty() => Ok(None),
                Some(Repr::Text(s)) => s.trim().parse().map(Some).map_err(de::Error::custom),
            }
        }
    }
}

/// Optional durations sent as whole seconds in a string, e.g. `"60"`
pub mod seconds {
    use super::*;
    use std::time::Duration;

    pub fn serialize<S>(
        value: &Option<Duration>,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(d) => serializer.collect_str(&d.as_secs()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> std::result::Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs: Option<u64> = string_number::option::deserialize(deserializer)?;
        Ok(secs.map(Duration::from_secs))
    }
}

/// Serialize `items` as `{"<key>": [...]}`
pub fn serialize_nested<T, S>(
    key: &'static str,
    items: &[T],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(1))?;
    map.serialize_entry(key, items)?;
    map.end()
}

/// Deserialize either `[...]` or `{"<key>": [...]}` into a vector
///
/// Other keys next to `key` are ignored. A missing `key` or `null` yields an
/// empty vector.
pub fn deserialize_nested<'de, T, D>(
    key: &'static str,
    deserializer: D,
) -> std::result::Result<Vec<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Null => return Ok(Vec::new()),
        Value::Object(mut map) => match map.remove(key) {
            None | Some(Value::Null) => return Ok(Vec::new()),
            Some(items) => items,
        },
        items @ Value::Array(_) => items,
        other => {
            return Err(de::Error::custom(format!(
                "expected a list under {key:?}, found {}",
                kind_of(&other)
            )));
        }
    };

    Vec::<T>::deserialize(items).map_err(de::Error::custom)
}

macro_rules! nested_list {
    ($($(#[$meta:meta])* $name:ident => $key:literal;)*) => {
        $(
            $(#[$meta])*
            pub mod $name {
                use serde::{Deserialize, Deserializer, Serialize, Serializer};

                pub const KEY: &str = $key;

                pub fn serialize<T, S>(items: &[T], serializer: S) -> Result<S::Ok, S::Error>
                where
                    T: Serialize,
                    S: Serializer,
                {
                    crate::codec::serialize_nested(KEY, items, serializer)
                }

                pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Vec<T>, D::Error>
                where
                    T: Deserialize<'de>,
                    D: Deserializer<'de>,
                {
                    crate::codec::deserialize_nested(KEY, deserializer)
                }
            }
        )*
    };
}

/// Lists the API wraps in an object keyed by the singular item name
pub mod nested {
    nested_list! {
        /// `{"tag": [...]}`
        tag => "tag";
        /// `{"server": [...]}`
        server => "server";
        /// `{"backup": [...]}`
        backup => "backup";
        /// `{"ip_address": [...]}`
        ip_address => "ip_address";
        /// `{"storage_device": [...]}`
        storage_device => "storage_device";
        /// `{"ssh_key": [...]}`
        ssh_key => "ssh_key";
    }
}
