use super::Summary;
use colored::Colorize;
use upcloud::Service;
use upcloud::model::StorageAccess;
use upcloud::request::{DeleteStorage, GetStorages};

/// Delete every private storage on the account
pub async fn handle(service: &Service) -> anyhow::Result<Summary> {
    println!("{}", "Fetching private storages...".blue());
    let storages = service
        .get_storages(&GetStorages {
            access: Some(StorageAccess::Private),
            ..Default::default()
        })
        .await?;
    println!("Found {} storages", storages.len().to_string().cyan());

    let mut summary = Summary::default();

    for storage in &storages {
        let label = format!("{} ({})", storage.title, storage.uuid);
        let request = DeleteStorage {
            uuid: storage.uuid.clone(),
        };

        match service.delete_storage_with_retry(&request).await {
            Ok(()) => summary.record_deleted(label),
            Err(e) => summary.record_failure(label, e),
        }
    }

    Ok(summary)
}
