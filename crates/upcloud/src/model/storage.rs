//! Storage resources

use super::{Resource, Stateful};
use crate::codec::{nested, string_number};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

string_enum! {
    /// Lifecycle state of a storage
    pub enum StorageState {
        Online => "online",
        Maintenance => "maintenance",
        Cloning => "cloning",
        Backuping => "backuping",
        Syncing => "syncing",
        Error => "error",
    }
}

string_enum! {
    pub enum StorageAccess {
        Public => "public",
        Private => "private",
    }
}

string_enum! {
    pub enum StorageTier {
        Hdd => "hdd",
        MaxIops => "maxiops",
    }
}

string_enum! {
    pub enum StorageType {
        Normal => "normal",
        Backup => "backup",
        Cdrom => "cdrom",
        Template => "template",
    }
}

string_enum! {
    /// How often an automatic backup is taken
    pub enum BackupInterval {
        Daily => "daily",
        Monday => "mon",
        Tuesday => "tue",
        Wednesday => "wed",
        Thursday => "thu",
        Friday => "fri",
        Saturday => "sat",
        Sunday => "sun",
    }
}

/// Automatic backup schedule of a storage
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackupRule {
    pub interval: BackupInterval,

    /// Time of day as `hhmm`
    pub time: String,

    /// Days to keep each backup
    #[serde(with = "string_number")]
    pub retention: u32,
}

/// Storage as returned by the storage list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Storage {
    pub access: StorageAccess,

    /// Only set on backups
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    pub license: f64,

    /// UUID of the storage a backup was taken from
    #[serde(skip_serializing_if = "String::is_empty")]
    pub origin: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub part_of_plan: String,

    /// Size in GiB
    #[serde(with = "string_number")]
    pub size: u32,

    pub state: StorageState,

    pub tier: StorageTier,

    pub title: String,

    #[serde(rename = "type")]
    pub kind: StorageType,

    pub uuid: String,

    pub zone: String,
}

impl Resource for Storage {
    const KEY: &'static str = "storage";
    const PLURAL: &'static str = "storages";
}

impl Stateful for Storage {
    type State = StorageState;

    fn identifier(&self) -> &str {
        &self.uuid
    }

    fn state(&self) -> &StorageState {
        &self.state
    }
}

/// Full storage description
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageDetails {
    #[serde(flatten)]
    pub storage: Storage,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_rule: Option<BackupRule>,

    #[serde(rename = "backups", with = "nested::backup")]
    pub backup_uuids: Vec<String>,

    #[serde(rename = "servers", with = "nested::server")]
    pub server_uuids: Vec<String>,
}

impl std::ops::Deref for StorageDetails {
    type Target = Storage;

    fn deref(&self) -> &Storage {
        &self.storage
    }
}

impl Resource for StorageDetails {
    const KEY: &'static str = "storage";
    const PLURAL: &'static str = "storages";
}

impl Stateful for StorageDetails {
    type State = StorageState;

    fn identifier(&self) -> &str {
        &self.storage.uuid
    }

    fn state(&self) -> &StorageState {
        &self.storage.state
    }
}
