//! Tag resources

use super::Resource;
use crate::codec::{self, nested};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;

/// Set of tag names attached to a server
///
/// On the wire this is `{"tag": [...]}`; a bare array is accepted on decode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagList(BTreeSet<String>);

impl TagList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.0.insert(name.into())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for TagList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl IntoIterator for TagList {
    type Item = String;
    type IntoIter = std::collections::btree_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Serialize for TagList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let names: Vec<&String> = self.0.iter().collect();
        codec::serialize_nested(nested::tag::KEY, &names, serializer)
    }
}

impl<'de> Deserialize<'de> for TagList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let names: Vec<String> = codec::deserialize_nested(nested::tag::KEY, deserializer)?;
        Ok(Self(names.into_iter().collect()))
    }
}

/// Tag definition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    pub name: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// UUIDs of the servers carrying this tag
    #[serde(with = "nested::server")]
    pub servers: Vec<String>,
}

impl Resource for Tag {
    const KEY: &'static str = "tag";
    const PLURAL: &'static str = "tags";
}
