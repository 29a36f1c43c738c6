//! Server requests

use super::{Request, envelope};
use crate::codec::{nested, seconds, string_number};
use crate::error::Result;
use crate::model::{
    IpAddressAccess, IpAddressFamily, StopType, StorageDeviceType, StorageTier, VideoModel,
};
use crate::transport::Method;
use serde::Serialize;
use std::time::Duration;

string_enum! {
    /// How the root password of a new server is delivered
    pub enum PasswordDelivery {
        None => "none",
        Email => "email",
        Sms => "sms",
    }
}

string_enum! {
    /// What to do with a storage device when creating a server
    pub enum StorageDeviceAction {
        Create => "create",
        Clone => "clone",
        Attach => "attach",
    }
}

string_enum! {
    /// What a restart does when a soft stop does not finish in time
    pub enum RestartTimeoutAction {
        Destroy => "destroy",
        Ignore => "ignore",
    }
}

/// List the CPU/memory combinations available for custom plans
#[derive(Debug, Clone, Default)]
pub struct GetServerConfigurations;

impl Request for GetServerConfigurations {
    fn method(&self) -> Method {
        Method::Get
    }

    fn path(&self) -> String {
        "/server_size".to_string()
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetServers;

impl Request for GetServers {
    fn method(&self) -> Method {
        Method::Get
    }

    fn path(&self) -> String {
        "/server".to_string()
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetServerDetails {
    pub uuid: String,
}

impl Request for GetServerDetails {
    fn method(&self) -> Method {
        Method::Get
    }

    fn path(&self) -> String {
        format!("/server/{}", self.uuid)
    }
}

/// Login user created on a new server
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoginUser {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub username: String,

    /// `"yes"` or `"no"`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub create_password: String,

    #[serde(with = "nested::ssh_key", skip_serializing_if = "Vec::is_empty")]
    pub ssh_keys: Vec<String>,
}

/// Storage device to set up while creating a server
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateServerStorageDevice {
    pub action: StorageDeviceAction,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub address: String,

    /// Source storage UUID for `clone` and `attach`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub storage: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,

    /// Size in GiB
    #[serde(
        with = "string_number::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub size: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<StorageTier>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<StorageDeviceType>,
}

/// IP address to assign while creating a server
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateServerIpAddress {
    pub access: IpAddressAccess,

    pub family: IpAddressFamily,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateServer {
    pub zone: String,

    pub title: String,

    pub hostname: String,

    /// Preconfigured plan name; leave empty to use `core_number`/`memory_amount`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub plan: String,

    #[serde(
        with = "string_number::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub core_number: Option<u32>,

    /// Memory in MiB
    #[serde(
        with = "string_number::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub memory_amount: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub avoid_host: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<u64>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub boot_order: String,

    /// `"on"` or `"off"`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub firewall: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub nic_model: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub timezone: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_model: Option<VideoModel>,

    /// `"on"` or `"off"`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub vnc: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub vnc_password: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_delivery: Option<PasswordDelivery>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub login_user: Option<LoginUser>,

    #[serde(with = "nested::storage_device")]
    pub storage_devices: Vec<CreateServerStorageDevice>,

    #[serde(with = "nested::ip_address", skip_serializing_if = "Vec::is_empty")]
    pub ip_addresses: Vec<CreateServerIpAddress>,
}

impl Request for CreateServer {
    fn method(&self) -> Method {
        Method::Post
    }

    fn path(&self) -> String {
        "/server".to_string()
    }

    fn body(&self) -> Result<Option<Vec<u8>>> {
        envelope("server", self)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ModifyServer {
    #[serde(skip)]
    pub uuid: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub hostname: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub plan: String,

    #[serde(
        with = "string_number::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub core_number: Option<u32>,

    #[serde(
        with = "string_number::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub memory_amount: Option<u32>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub boot_order: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub firewall: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub nic_model: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub timezone: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_model: Option<VideoModel>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub vnc: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub vnc_password: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub zone: String,
}

impl Request for ModifyServer {
    fn method(&self) -> Method {
        Method::Put
    }

    fn path(&self) -> String {
        format!("/server/{}", self.uuid)
    }

    fn body(&self) -> Result<Option<Vec<u8>>> {
        envelope("server", self)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StartServer {
    #[serde(skip)]
    pub uuid: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub avoid_host: Option<u64>,

    #[serde(skip)]
    pub call_timeout: Option<Duration>,
}

impl Request for StartServer {
    fn method(&self) -> Method {
        Method::Post
    }

    fn path(&self) -> String {
        format!("/server/{}/start", self.uuid)
    }

    fn body(&self) -> Result<Option<Vec<u8>>> {
        if self.host.is_none() && self.avoid_host.is_none() {
            return Ok(None);
        }
        envelope("server", self)
    }

    fn timeout(&self) -> Option<Duration> {
        self.call_timeout
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StopServer {
    #[serde(skip)]
    pub uuid: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_type: Option<StopType>,

    /// Grace period of a soft stop
    #[serde(with = "seconds", skip_serializing_if = "Option::is_none")]
    pub timeout: Option<Duration>,

    #[serde(skip)]
    pub call_timeout: Option<Duration>,
}

impl Request for StopServer {
    fn method(&self) -> Method {
        Method::Post
    }

    fn path(&self) -> String {
        format!("/server/{}/stop", self.uuid)
    }

    fn body(&self) -> Result<Option<Vec<u8>>> {
        envelope("stop_server", self)
    }

    fn timeout(&self) -> Option<Duration> {
        self.call_timeout
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RestartServer {
    #[serde(skip)]
    pub uuid: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_type: Option<StopType>,

    #[serde(with = "seconds", skip_serializing_if = "Option::is_none")]
    pub timeout: Option<Duration>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_action: Option<RestartTimeoutAction>,

    #[serde(skip)]
    pub call_timeout: Option<Duration>,
}

impl Request for RestartServer {
    fn method(&self) -> Method {
        Method::Post
    }

    fn path(&self) -> String {
        format!("/server/{}/restart", self.uuid)
    }

    fn body(&self) -> Result<Option<Vec<u8>>> {
        envelope("restart_server", self)
    }

    fn timeout(&self) -> Option<Duration> {
        self.call_timeout
    }
}

/// Delete a server, keeping its storages
#[derive(Debug, Clone, Default)]
pub struct DeleteServer {
    pub uuid: String,
}

impl Request for DeleteServer {
    fn method(&self) -> Method {
        Method::Delete
    }

    fn path(&self) -> String {
        format!("/server/{}", self.uuid)
    }
}

/// Delete a server together with every storage attached to it
#[derive(Debug, Clone, Default)]
pub struct DeleteServerAndStorages {
    pub uuid: String,
}

impl Request for DeleteServerAndStorages {
    fn method(&self) -> Method {
        Method::Delete
    }

    fn path(&self) -> String {
        format!("/server/{}/?storages=1", self.uuid)
    }
}
