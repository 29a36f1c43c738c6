//! Tag requests
//!
//! Tags are addressed by name.

use super::{Request, envelope};
use crate::codec::nested;
use crate::error::Result;
use crate::transport::Method;
use serde::Serialize;

#[derive(Debug, Clone, Default)]
pub struct GetTags;

impl Request for GetTags {
    fn method(&self) -> Method {
        Method::Get
    }

    fn path(&self) -> String {
        "/tag".to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateTag {
    pub name: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// UUIDs of servers to tag right away
    #[serde(with = "nested::server", skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<String>,
}

impl Request for CreateTag {
    fn method(&self) -> Method {
        Method::Post
    }

    fn path(&self) -> String {
        "/tag".to_string()
    }

    fn body(&self) -> Result<Option<Vec<u8>>> {
        envelope("tag", self)
    }
}

/// Rename a tag or change its description and servers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModifyTag {
    /// Current name of the tag
    #[serde(skip)]
    pub name: String,

    /// New name, unchanged when empty
    #[serde(rename = "name", skip_serializing_if = "String::is_empty")]
    pub new_name: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Replaces the full server list when set
    #[serde(with = "nested::server", skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<String>,
}

impl Request for ModifyTag {
    fn method(&self) -> Method {
        Method::Put
    }

    fn path(&self) -> String {
        format!("/tag/{}", self.name)
    }

    fn body(&self) -> Result<Option<Vec<u8>>> {
        envelope("tag", self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct DeleteTag {
    pub name: String,
}

impl Request for DeleteTag {
    fn method(&self) -> Method {
        Method::Delete
    }

    fn path(&self) -> String {
        format!("/tag/{}", self.name)
    }
}

/// Attach tags to a server, creating unknown tags on the fly
#[derive(Debug, Clone, Default)]
pub struct TagServer {
    pub uuid: String,
    pub tags: Vec<String>,
}

impl Request for TagServer {
    fn method(&self) -> Method {
        Method::Post
    }

    fn path(&self) -> String {
        format!("/server/{}/tag/{}", self.uuid, self.tags.join(","))
    }
}

#[derive(Debug, Clone, Default)]
pub struct UntagServer {
    pub uuid: String,
    pub tags: Vec<String>,
}

impl Request for UntagServer {
    fn method(&self) -> Method {
        Method::Post
    }

    fn path(&self) -> String {
        format!("/server/{}/untag/{}", self.uuid, self.tags.join(","))
    }
}
