//! Server resources

use super::ip_address::{IpAddressAccess, IpAddressFamily};
use super::tag::TagList;
use super::{Resource, Stateful};
use crate::codec::{nested, string_number};
use serde::{Deserialize, Serialize};

string_enum! {
    /// Lifecycle state of a server
    pub enum ServerState {
        Started => "started",
        Stopped => "stopped",
        Maintenance => "maintenance",
        Error => "error",
    }
}

string_enum! {
    /// How a server is shut down
    pub enum StopType {
        /// ACPI shutdown, falls back to hard stop after the timeout
        Soft => "soft",
        Hard => "hard",
    }
}

string_enum! {
    /// Kind of device a storage is attached as
    pub enum StorageDeviceType {
        Disk => "disk",
        Cdrom => "cdrom",
    }
}

string_enum! {
    pub enum VideoModel {
        Vga => "vga",
        Cirrus => "cirrus",
    }
}

/// A CPU/memory combination available for custom plans
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfiguration {
    #[serde(with = "string_number")]
    pub core_number: u32,

    /// Memory in MiB
    #[serde(with = "string_number")]
    pub memory_amount: u32,
}

impl Resource for ServerConfiguration {
    const KEY: &'static str = "server_size";
    const PLURAL: &'static str = "server_sizes";
}

/// Server as returned by the server list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Server {
    #[serde(with = "string_number")]
    pub core_number: u32,

    pub hostname: String,

    pub license: f64,

    /// Memory in MiB
    #[serde(with = "string_number")]
    pub memory_amount: u32,

    pub plan: String,

    #[serde(with = "string_number")]
    pub progress: u32,

    pub state: ServerState,

    pub tags: TagList,

    pub title: String,

    pub uuid: String,

    pub zone: String,
}

impl Server {
    pub fn is_stopped(&self) -> bool {
        self.state == ServerState::Stopped
    }
}

impl Resource for Server {
    const KEY: &'static str = "server";
    const PLURAL: &'static str = "servers";
}

impl Stateful for Server {
    type State = ServerState;

    fn identifier(&self) -> &str {
        &self.uuid
    }

    fn state(&self) -> &ServerState {
        &self.state
    }
}

/// Full server description returned by detail, create and lifecycle calls
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerDetails {
    #[serde(flatten)]
    pub server: Server,

    pub boot_order: String,

    /// `"on"` or `"off"`
    pub firewall: String,

    pub host: u64,

    #[serde(with = "nested::ip_address")]
    pub ip_addresses: Vec<ServerIpAddress>,

    pub nic_model: String,

    #[serde(with = "nested::storage_device")]
    pub storage_devices: Vec<ServerStorageDevice>,

    pub timezone: String,

    pub video_model: VideoModel,

    /// `"on"` or `"off"`
    pub vnc: String,

    pub vnc_host: String,

    pub vnc_password: String,

    #[serde(
        with = "string_number::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub vnc_port: Option<u16>,
}

impl std::ops::Deref for ServerDetails {
    type Target = Server;

    fn deref(&self) -> &Server {
        &self.server
    }
}

impl Resource for ServerDetails {
    const KEY: &'static str = "server";
    const PLURAL: &'static str = "servers";
}

impl Stateful for ServerDetails {
    type State = ServerState;

    fn identifier(&self) -> &str {
        &self.server.uuid
    }

    fn state(&self) -> &ServerState {
        &self.server.state
    }
}

/// Storage device attached to a server
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerStorageDevice {
    /// Bus address, e.g. `virtio:0`
    pub address: String,

    pub part_of_plan: String,

    #[serde(rename = "storage")]
    pub uuid: String,

    #[serde(rename = "storage_size", with = "string_number")]
    pub size: u32,

    #[serde(rename = "storage_title")]
    pub title: String,

    #[serde(rename = "type")]
    pub kind: StorageDeviceType,

    #[serde(
        with = "string_number::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub boot_disk: Option<u8>,
}

/// IP address as listed inside server details
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerIpAddress {
    pub access: IpAddressAccess,

    pub address: String,

    pub family: IpAddressFamily,
}
