//! IP address resources

use super::Resource;
use serde::{Deserialize, Serialize};

string_enum! {
    pub enum IpAddressAccess {
        Public => "public",
        Private => "private",
        Utility => "utility",
    }
}

string_enum! {
    pub enum IpAddressFamily {
        IPv4 => "IPv4",
        IPv6 => "IPv6",
    }
}

/// IP address, keyed by the address itself
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IpAddress {
    pub access: IpAddressAccess,

    pub address: String,

    pub family: IpAddressFamily,

    /// `"yes"` for floating addresses
    #[serde(skip_serializing_if = "String::is_empty")]
    pub floating: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub mac: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub part_of_plan: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub ptr_record: String,

    /// UUID of the server the address is assigned to
    #[serde(skip_serializing_if = "String::is_empty")]
    pub server: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub zone: String,
}

impl Resource for IpAddress {
    const KEY: &'static str = "ip_address";
    const PLURAL: &'static str = "ip_addresses";
}
