use super::Service;
use crate::error::Result;
use crate::model::{ServerDetails, Storage, StorageDetails, StorageState};
use crate::request::{
    AttachStorage, CloneStorage, CreateBackup, CreateStorage, DeleteStorage, DetachStorage,
    EjectCdrom, GetStorageDetails, GetStorages, LoadCdrom, ModifyStorage, RestoreBackup,
    TemplatizeStorage,
};
use crate::retry::{self, DELETE_ATTEMPTS};
use crate::wait::WaitSpec;

impl Service {
    pub async fn get_storages(&self, request: &GetStorages) -> Result<Vec<Storage>> {
        self.fetch_all(request).await
    }

    pub async fn get_storage_details(&self, request: &GetStorageDetails) -> Result<StorageDetails> {
        self.fetch(request).await
    }

    pub async fn create_storage(&self, request: &CreateStorage) -> Result<StorageDetails> {
        let details: StorageDetails = self.fetch(request).await?;
        tracing::info!("Created storage {} ({} GiB)", details.uuid, details.size);
        Ok(details)
    }

    pub async fn modify_storage(&self, request: &ModifyStorage) -> Result<StorageDetails> {
        self.fetch(request).await
    }

    pub async fn clone_storage(&self, request: &CloneStorage) -> Result<StorageDetails> {
        self.fetch(request).await
    }

    pub async fn templatize_storage(&self, request: &TemplatizeStorage) -> Result<StorageDetails> {
        self.fetch(request).await
    }

    pub async fn create_backup(&self, request: &CreateBackup) -> Result<StorageDetails> {
        self.fetch(request).await
    }

    pub async fn restore_backup(&self, request: &RestoreBackup) -> Result<()> {
        self.send(request).await
    }

    pub async fn delete_storage(&self, request: &DeleteStorage) -> Result<()> {
        self.send(request).await
    }

    /// Delete a storage, retrying while the API still reports it busy
    ///
    /// A storage detached from a server moments ago can be rejected for a
    /// short while. Up to [`DELETE_ATTEMPTS`] calls are made back to back.
    pub async fn delete_storage_with_retry(&self, request: &DeleteStorage) -> Result<()> {
        retry::bounded(DELETE_ATTEMPTS, |attempt| {
            tracing::debug!("Deleting storage {} (attempt {})", request.uuid, attempt);
            self.delete_storage(request)
        })
        .await
    }

    pub async fn attach_storage(&self, request: &AttachStorage) -> Result<ServerDetails> {
        self.fetch(request).await
    }

    pub async fn detach_storage(&self, request: &DetachStorage) -> Result<ServerDetails> {
        self.fetch(request).await
    }

    pub async fn load_cdrom(&self, request: &LoadCdrom) -> Result<ServerDetails> {
        self.fetch(request).await
    }

    pub async fn eject_cdrom(&self, request: &EjectCdrom) -> Result<ServerDetails> {
        self.fetch(request).await
    }

    /// Poll storage details until the state condition holds
    pub async fn wait_for_storage_state(
        &self,
        spec: &WaitSpec<StorageState>,
    ) -> Result<StorageDetails> {
        let request = GetStorageDetails {
            uuid: spec.uuid.clone(),
        };
        self.poller
            .wait(spec, || self.get_storage_details(&request))
            .await
    }
}
