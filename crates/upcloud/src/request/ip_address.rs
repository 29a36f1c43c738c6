//! IP address requests
//!
//! IP addresses are addressed by the address itself rather than a UUID.

use super::{Request, envelope};
use crate::error::Result;
use crate::model::{IpAddressAccess, IpAddressFamily};
use crate::transport::Method;
use serde::Serialize;

#[derive(Debug, Clone, Default)]
pub struct GetIpAddresses;

impl Request for GetIpAddresses {
    fn method(&self) -> Method {
        Method::Get
    }

    fn path(&self) -> String {
        "/ip_address".to_string()
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetIpAddressDetails {
    pub address: String,
}

impl Request for GetIpAddressDetails {
    fn method(&self) -> Method {
        Method::Get
    }

    fn path(&self) -> String {
        format!("/ip_address/{}", self.address)
    }
}

/// Allocate a new address, optionally assigning it to a server
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssignIpAddress {
    pub access: IpAddressAccess,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<IpAddressFamily>,

    /// UUID of the server to assign the address to
    #[serde(rename = "server", skip_serializing_if = "String::is_empty")]
    pub server_uuid: String,

    /// Required for floating addresses
    #[serde(skip_serializing_if = "String::is_empty")]
    pub zone: String,

    /// `"yes"` to allocate a floating address
    #[serde(skip_serializing_if = "String::is_empty")]
    pub floating: String,
}

impl Request for AssignIpAddress {
    fn method(&self) -> Method {
        Method::Post
    }

    fn path(&self) -> String {
        "/ip_address".to_string()
    }

    fn body(&self) -> Result<Option<Vec<u8>>> {
        envelope("ip_address", self)
    }
}

/// Change the reverse DNS record of an address
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModifyIpAddress {
    #[serde(skip)]
    pub address: String,

    pub ptr_record: String,
}

impl Request for ModifyIpAddress {
    fn method(&self) -> Method {
        Method::Put
    }

    fn path(&self) -> String {
        format!("/ip_address/{}", self.address)
    }

    fn body(&self) -> Result<Option<Vec<u8>>> {
        envelope("ip_address", self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReleaseIpAddress {
    pub address: String,
}

impl Request for ReleaseIpAddress {
    fn method(&self) -> Method {
        Method::Delete
    }

    fn path(&self) -> String {
        format!("/ip_address/{}", self.address)
    }
}
