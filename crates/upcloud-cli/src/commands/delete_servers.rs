use super::Summary;
use colored::Colorize;
use std::time::Duration;
use upcloud::model::StopType;
use upcloud::request::{DeleteServerAndStorages, StopServer};
use upcloud::{Server, ServerState, Service, WaitSpec};

/// Stop and delete every server on the account
///
/// Failures on one server are recorded and the next one is processed.
pub async fn handle(service: &Service, stop_timeout: Duration) -> anyhow::Result<Summary> {
    println!("{}", "Fetching servers...".blue());
    let servers = service.get_servers().await?;
    println!("Found {} servers", servers.len().to_string().cyan());

    let mut summary = Summary::default();

    for server in &servers {
        let label = format!("{} ({})", server.title, server.uuid);
        println!();
        println!("{}", format!("■ {label}").yellow().bold());

        match delete_server(service, server, stop_timeout).await {
            Ok(()) => summary.record_deleted(label),
            Err(e) => summary.record_failure(label, e),
        }
    }

    Ok(summary)
}

async fn delete_server(
    service: &Service,
    server: &Server,
    stop_timeout: Duration,
) -> upcloud::Result<()> {
    if !server.is_stopped() {
        println!("  state is {}, stopping", server.state.to_string().cyan());
        service
            .stop_server(&StopServer {
                uuid: server.uuid.clone(),
                stop_type: Some(StopType::Hard),
                ..Default::default()
            })
            .await?;

        service
            .wait_for_server_state(&WaitSpec::until(
                &server.uuid,
                ServerState::Stopped,
                stop_timeout,
            ))
            .await?;
    }

    tracing::debug!("Deleting server {} with its storages", server.uuid);
    service
        .delete_server_and_storages(&DeleteServerAndStorages {
            uuid: server.uuid.clone(),
        })
        .await
}
