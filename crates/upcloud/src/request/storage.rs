//! Storage requests

use super::{Request, envelope};
use crate::codec::string_number;
use crate::error::Result;
use crate::model::{BackupRule, StorageAccess, StorageDeviceType, StorageTier, StorageType};
use crate::transport::Method;
use serde::Serialize;

/// List storages, optionally filtered
///
/// Filters are exclusive; the first one set wins in the order access, type,
/// favorite.
#[derive(Debug, Clone, Default)]
pub struct GetStorages {
    pub access: Option<StorageAccess>,
    pub kind: Option<StorageType>,
    pub favorite: bool,
}

impl Request for GetStorages {
    fn method(&self) -> Method {
        Method::Get
    }

    fn path(&self) -> String {
        if let Some(access) = &self.access {
            return format!("/storage/{access}");
        }
        if let Some(kind) = &self.kind {
            return format!("/storage/{kind}");
        }
        if self.favorite {
            return "/storage/favorite".to_string();
        }
        "/storage".to_string()
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetStorageDetails {
    pub uuid: String,
}

impl Request for GetStorageDetails {
    fn method(&self) -> Method {
        Method::Get
    }

    fn path(&self) -> String {
        format!("/storage/{}", self.uuid)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateStorage {
    /// Size in GiB
    #[serde(with = "string_number")]
    pub size: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<StorageTier>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,

    pub zone: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_rule: Option<BackupRule>,
}

impl Request for CreateStorage {
    fn method(&self) -> Method {
        Method::Post
    }

    fn path(&self) -> String {
        "/storage".to_string()
    }

    fn body(&self) -> Result<Option<Vec<u8>>> {
        envelope("storage", self)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModifyStorage {
    #[serde(skip)]
    pub uuid: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,

    #[serde(
        with = "string_number::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub size: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_rule: Option<BackupRule>,
}

impl Request for ModifyStorage {
    fn method(&self) -> Method {
        Method::Put
    }

    fn path(&self) -> String {
        format!("/storage/{}", self.uuid)
    }

    fn body(&self) -> Result<Option<Vec<u8>>> {
        envelope("storage", self)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CloneStorage {
    #[serde(skip)]
    pub uuid: String,

    pub zone: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<StorageTier>,

    pub title: String,
}

impl Request for CloneStorage {
    fn method(&self) -> Method {
        Method::Post
    }

    fn path(&self) -> String {
        format!("/storage/{}/clone", self.uuid)
    }

    fn body(&self) -> Result<Option<Vec<u8>>> {
        envelope("storage", self)
    }
}

/// Turn a storage into a template
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TemplatizeStorage {
    #[serde(skip)]
    pub uuid: String,

    pub title: String,
}

impl Request for TemplatizeStorage {
    fn method(&self) -> Method {
        Method::Post
    }

    fn path(&self) -> String {
        format!("/storage/{}/templatize", self.uuid)
    }

    fn body(&self) -> Result<Option<Vec<u8>>> {
        envelope("storage", self)
    }
}

/// Take a manual backup of a storage
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateBackup {
    #[serde(skip)]
    pub uuid: String,

    pub title: String,
}

impl Request for CreateBackup {
    fn method(&self) -> Method {
        Method::Post
    }

    fn path(&self) -> String {
        format!("/storage/{}/backup", self.uuid)
    }

    fn body(&self) -> Result<Option<Vec<u8>>> {
        envelope("storage", self)
    }
}

/// Restore the storage a backup was taken from
#[derive(Debug, Clone, Default)]
pub struct RestoreBackup {
    /// UUID of the backup
    pub uuid: String,
}

impl Request for RestoreBackup {
    fn method(&self) -> Method {
        Method::Post
    }

    fn path(&self) -> String {
        format!("/storage/{}/restore", self.uuid)
    }
}

#[derive(Debug, Clone, Default)]
pub struct DeleteStorage {
    pub uuid: String,
}

impl Request for DeleteStorage {
    fn method(&self) -> Method {
        Method::Delete
    }

    fn path(&self) -> String {
        format!("/storage/{}", self.uuid)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AttachStorage {
    #[serde(skip)]
    pub server_uuid: String,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<StorageDeviceType>,

    /// Bus address, e.g. `virtio:1`; assigned by the API when empty
    #[serde(skip_serializing_if = "String::is_empty")]
    pub address: String,

    #[serde(rename = "storage", skip_serializing_if = "String::is_empty")]
    pub storage_uuid: String,

    #[serde(
        with = "string_number::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub boot_disk: Option<u8>,
}

impl Request for AttachStorage {
    fn method(&self) -> Method {
        Method::Post
    }

    fn path(&self) -> String {
        format!("/server/{}/storage/attach", self.server_uuid)
    }

    fn body(&self) -> Result<Option<Vec<u8>>> {
        envelope("storage_device", self)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DetachStorage {
    #[serde(skip)]
    pub server_uuid: String,

    pub address: String,
}

impl Request for DetachStorage {
    fn method(&self) -> Method {
        Method::Post
    }

    fn path(&self) -> String {
        format!("/server/{}/storage/detach", self.server_uuid)
    }

    fn body(&self) -> Result<Option<Vec<u8>>> {
        envelope("storage_device", self)
    }
}

/// Insert a storage into the CD-ROM device of a server
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadCdrom {
    #[serde(skip)]
    pub server_uuid: String,

    #[serde(rename = "storage")]
    pub storage_uuid: String,
}

impl Request for LoadCdrom {
    fn method(&self) -> Method {
        Method::Post
    }

    fn path(&self) -> String {
        format!("/server/{}/cdrom/load", self.server_uuid)
    }

    fn body(&self) -> Result<Option<Vec<u8>>> {
        envelope("storage_device", self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct EjectCdrom {
    pub server_uuid: String,
}

impl Request for EjectCdrom {
    fn method(&self) -> Method {
        Method::Post
    }

    fn path(&self) -> String {
        format!("/server/{}/cdrom/eject", self.server_uuid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec;
    use crate::model::{BackupInterval, ServerStorageDevice, StorageDetails};
    use crate::request::test_support::body_json;
    use serde_json::json;

    fn backup_rule() -> BackupRule {
        BackupRule {
            interval: BackupInterval::Daily,
            time: "0430".to_string(),
            retention: 30,
        }
    }

    #[test]
    fn test_get_storages_path() {
        assert_eq!(GetStorages::default().path(), "/storage");
        assert_eq!(
            GetStorages {
                access: Some(StorageAccess::Private),
                ..Default::default()
            }
            .path(),
            "/storage/private"
        );
        assert_eq!(
            GetStorages {
                kind: Some(StorageType::Template),
                ..Default::default()
            }
            .path(),
            "/storage/template"
        );
        assert_eq!(
            GetStorages {
                favorite: true,
                ..Default::default()
            }
            .path(),
            "/storage/favorite"
        );
    }

    #[test]
    fn test_create_storage_body() {
        let request = CreateStorage {
            size: 10,
            tier: Some(StorageTier::MaxIops),
            title: "Test storage".to_string(),
            zone: "fi-hel2".to_string(),
            backup_rule: Some(backup_rule()),
        };

        assert_eq!(request.method(), Method::Post);
        assert_eq!(request.path(), "/storage");
        assert_eq!(
            body_json(&request),
            json!({
                "storage": {
                    "size": "10",
                    "tier": "maxiops",
                    "title": "Test storage",
                    "zone": "fi-hel2",
                    "backup_rule": {"interval": "daily", "time": "0430", "retention": "30"}
                }
            })
        );
    }

    #[test]
    fn test_create_storage_round_trip() {
        let request = CreateStorage {
            size: 50,
            tier: Some(StorageTier::Hdd),
            title: "Archive".to_string(),
            zone: "de-fra1".to_string(),
            backup_rule: Some(backup_rule()),
        };

        let bytes = request.body().unwrap().unwrap();
        let details: StorageDetails = codec::decode_one(&bytes, "storage").unwrap();

        assert_eq!(details.size, request.size);
        assert_eq!(Some(&details.tier), request.tier.as_ref());
        assert_eq!(details.title, request.title);
        assert_eq!(details.zone, request.zone);
        assert_eq!(details.backup_rule, request.backup_rule);
    }

    #[test]
    fn test_modify_storage_omits_unset_fields() {
        let request = ModifyStorage {
            uuid: "01d4fcd4".to_string(),
            title: "New title".to_string(),
            ..Default::default()
        };

        assert_eq!(request.method(), Method::Put);
        assert_eq!(request.path(), "/storage/01d4fcd4");
        assert_eq!(
            body_json(&request),
            json!({"storage": {"title": "New title"}})
        );
    }

    #[test]
    fn test_storage_action_paths() {
        let uuid = "01d4fcd4".to_string();

        let clone = CloneStorage {
            uuid: uuid.clone(),
            zone: "fi-hel1".to_string(),
            tier: None,
            title: "Clone".to_string(),
        };
        assert_eq!(clone.path(), "/storage/01d4fcd4/clone");
        assert_eq!(
            body_json(&clone),
            json!({"storage": {"zone": "fi-hel1", "title": "Clone"}})
        );

        let templatize = TemplatizeStorage {
            uuid: uuid.clone(),
            title: "Template".to_string(),
        };
        assert_eq!(templatize.path(), "/storage/01d4fcd4/templatize");
        assert_eq!(
            body_json(&templatize),
            json!({"storage": {"title": "Template"}})
        );

        let backup = CreateBackup {
            uuid: uuid.clone(),
            title: "Backup".to_string(),
        };
        assert_eq!(backup.path(), "/storage/01d4fcd4/backup");

        let restore = RestoreBackup { uuid: uuid.clone() };
        assert_eq!(restore.method(), Method::Post);
        assert_eq!(restore.path(), "/storage/01d4fcd4/restore");
        assert!(restore.body().unwrap().is_none());

        let delete = DeleteStorage { uuid };
        assert_eq!(delete.method(), Method::Delete);
        assert_eq!(delete.path(), "/storage/01d4fcd4");
    }

    #[test]
    fn test_attach_storage_round_trip() {
        let request = AttachStorage {
            server_uuid: "0077".to_string(),
            kind: Some(StorageDeviceType::Disk),
            address: "virtio:1".to_string(),
            storage_uuid: "01d4fcd4".to_string(),
            boot_disk: Some(1),
        };

        assert_eq!(request.path(), "/server/0077/storage/attach");
        assert_eq!(
            body_json(&request),
            json!({
                "storage_device": {
                    "type": "disk",
                    "address": "virtio:1",
                    "storage": "01d4fcd4",
                    "boot_disk": "1"
                }
            })
        );

        let device: ServerStorageDevice =
            codec::decode_one(&request.body().unwrap().unwrap(), "storage_device").unwrap();
        assert_eq!(device.address, request.address);
        assert_eq!(device.uuid, request.storage_uuid);
        assert_eq!(device.boot_disk, request.boot_disk);
        assert_eq!(device.kind, StorageDeviceType::Disk);
    }

    #[test]
    fn test_detach_and_cdrom() {
        let detach = DetachStorage {
            server_uuid: "0077".to_string(),
            address: "virtio:1".to_string(),
        };
        assert_eq!(detach.path(), "/server/0077/storage/detach");
        assert_eq!(
            body_json(&detach),
            json!({"storage_device": {"address": "virtio:1"}})
        );

        let load = LoadCdrom {
            server_uuid: "0077".to_string(),
            storage_uuid: "01000000".to_string(),
        };
        assert_eq!(load.path(), "/server/0077/cdrom/load");
        assert_eq!(
            body_json(&load),
            json!({"storage_device": {"storage": "01000000"}})
        );

        let eject = EjectCdrom {
            server_uuid: "0077".to_string(),
        };
        assert_eq!(eject.path(), "/server/0077/cdrom/eject");
        assert!(eject.body().unwrap().is_none());
    }
}
