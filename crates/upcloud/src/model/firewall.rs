//! Firewall rules
//!
//! A rule has no identifier of its own; it is addressed by the UUID of the
//! server it belongs to plus its 1-based `position` in that server's rule list.

use super::Resource;
use super::ip_address::IpAddressFamily;
use crate::codec::string_number;
use serde::{Deserialize, Serialize};

string_enum! {
    pub enum FirewallRuleAction {
        Accept => "accept",
        Reject => "reject",
        Drop => "drop",
    }
}

string_enum! {
    pub enum FirewallRuleDirection {
        In => "in",
        Out => "out",
    }
}

string_enum! {
    pub enum FirewallRuleProtocol {
        Tcp => "tcp",
        Udp => "udp",
        Icmp => "icmp",
    }
}

/// Firewall rule of a server
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FirewallRule {
    pub action: FirewallRuleAction,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub comment: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub destination_address_end: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub destination_address_start: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub destination_port_end: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub destination_port_start: String,

    pub direction: FirewallRuleDirection,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<IpAddressFamily>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub icmp_type: String,

    /// Assigned by the API when omitted on create
    #[serde(
        with = "string_number::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub position: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<FirewallRuleProtocol>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub source_address_end: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub source_address_start: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub source_port_end: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub source_port_start: String,
}

impl Resource for FirewallRule {
    const KEY: &'static str = "firewall_rule";
    const PLURAL: &'static str = "firewall_rules";
}
