mod common;

use common::{MockTransport, server_details, service};
use serde_json::{Value, json};
use std::time::Duration;
use upcloud::model::{IpAddressAccess, IpAddressFamily, StopType, StorageTier};
use upcloud::request::{
    CreateServer, CreateServerIpAddress, CreateServerStorageDevice, DeleteServer,
    DeleteServerAndStorages, GetServerDetails, ModifyServer, PasswordDelivery, StopServer,
    StorageDeviceAction, TagServer,
};
use upcloud::{ErrorKind, Method, ServerState, WaitSpec};

const UUID: &str = "0077fa3d-32db-4b09-9f5f-30d9e9afb565";

fn body(request: &upcloud::HttpRequest) -> Value {
    serde_json::from_slice(request.body.as_deref().unwrap()).unwrap()
}

#[tokio::test]
async fn test_server_lifecycle() {
    let transport = MockTransport::new();
    let (svc, clock) = service(&transport);

    transport
        .respond(202, server_details(UUID, "maintenance"))
        .respond(200, server_details(UUID, "maintenance"))
        .respond(200, server_details(UUID, "started"))
        .respond(202, server_details(UUID, "started"))
        .respond(200, server_details(UUID, "started"))
        .respond(202, server_details(UUID, "started"))
        .respond(200, server_details(UUID, "stopped"))
        .respond_empty();

    // 1. Create
    let created = svc
        .create_server(&CreateServer {
            zone: "fi-hel2".to_string(),
            title: "Integration test server #1".to_string(),
            hostname: "debian.example.com".to_string(),
            password_delivery: Some(PasswordDelivery::None),
            storage_devices: vec![CreateServerStorageDevice {
                action: StorageDeviceAction::Clone,
                storage: "01000000-0000-4000-8000-000030060200".to_string(),
                title: "disk1".to_string(),
                size: Some(30),
                tier: Some(StorageTier::MaxIops),
                ..Default::default()
            }],
            ip_addresses: vec![CreateServerIpAddress {
                access: IpAddressAccess::Public,
                family: IpAddressFamily::IPv4,
            }],
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(created.uuid, UUID);
    assert_eq!(created.state, ServerState::Maintenance);
    assert_eq!(created.storage_devices.len(), 1);

    // 2. Wait for the server to start
    let started = svc
        .wait_for_server_state(&WaitSpec::until(
            UUID,
            ServerState::Started,
            Duration::from_secs(600),
        ))
        .await
        .unwrap();
    assert_eq!(started.state, ServerState::Started);
    assert_eq!(clock.elapsed(), Duration::from_secs(5));

    // 3. Modify
    let modified = svc
        .modify_server(&ModifyServer {
            uuid: UUID.to_string(),
            title: "Modified server".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(modified.uuid, UUID);

    // 4. Wait until the modification is applied
    svc.wait_for_server_state(&WaitSpec::until_not(
        UUID,
        ServerState::Maintenance,
        Duration::from_secs(600),
    ))
    .await
    .unwrap();

    // 5. Stop and wait for it to stop
    svc.stop_server(&StopServer {
        uuid: UUID.to_string(),
        stop_type: Some(StopType::Hard),
        timeout: Some(Duration::from_secs(60)),
        ..Default::default()
    })
    .await
    .unwrap();
    svc.wait_for_server_state(&WaitSpec::until(
        UUID,
        ServerState::Stopped,
        Duration::from_secs(600),
    ))
    .await
    .unwrap();

    // 6. Delete
    svc.delete_server(&DeleteServer {
        uuid: UUID.to_string(),
    })
    .await
    .unwrap();

    assert_eq!(transport.remaining(), 0);
    assert_eq!(
        transport.request_paths(),
        [
            "POST /server".to_string(),
            format!("GET /server/{UUID}"),
            format!("GET /server/{UUID}"),
            format!("PUT /server/{UUID}"),
            format!("GET /server/{UUID}"),
            format!("POST /server/{UUID}/stop"),
            format!("GET /server/{UUID}"),
            format!("DELETE /server/{UUID}"),
        ]
    );

    let requests = transport.requests();
    assert_eq!(
        body(&requests[0])["server"]["storage_devices"]["storage_device"][0]["size"],
        json!("30")
    );
    assert_eq!(
        body(&requests[3]),
        json!({"server": {"title": "Modified server"}})
    );
    assert_eq!(
        body(&requests[5]),
        json!({"stop_server": {"stop_type": "hard", "timeout": "60"}})
    );
    assert!(requests[7].body.is_none());
}

#[tokio::test]
async fn test_wait_times_out_with_last_state() {
    let transport = MockTransport::new();
    let (svc, clock) = service(&transport);

    for _ in 0..4 {
        transport.respond(200, server_details(UUID, "maintenance"));
    }

    let err = svc
        .wait_for_server_state(&WaitSpec::until_not(
            UUID,
            ServerState::Maintenance,
            Duration::from_secs(15),
        ))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ConvergenceTimeout);
    assert_eq!(err.last_state(), Some("maintenance"));
    assert_eq!(clock.elapsed(), Duration::from_secs(15));
    assert_eq!(transport.remaining(), 0);
}

#[tokio::test]
async fn test_wait_tolerates_unknown_states() {
    let transport = MockTransport::new();
    let (svc, _clock) = service(&transport);

    transport
        .respond(200, server_details(UUID, "starting"))
        .respond(200, server_details(UUID, "starting"))
        .respond(200, server_details(UUID, "started"));

    let server = svc
        .wait_for_server_state(&WaitSpec::until(
            UUID,
            ServerState::Started,
            Duration::from_secs(60),
        ))
        .await
        .unwrap();

    assert_eq!(server.state, ServerState::Started);
    assert_eq!(transport.requests().len(), 3);
}

#[tokio::test]
async fn test_wait_contract_violation_makes_no_calls() {
    let transport = MockTransport::new();
    let (svc, _clock) = service(&transport);

    let spec = WaitSpec {
        uuid: UUID.to_string(),
        desired: None,
        undesired: None,
        timeout: Duration::from_secs(60),
    };
    let err = svc.wait_for_server_state(&spec).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::CallerContractViolation);
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_wait_surfaces_read_failure() {
    let transport = MockTransport::new();
    let (svc, clock) = service(&transport);

    transport
        .respond(200, server_details(UUID, "maintenance"))
        .respond_error(404, "SERVER_NOT_FOUND", "The server does not exist.");

    let err = svc
        .wait_for_server_state(&WaitSpec::until(
            UUID,
            ServerState::Started,
            Duration::from_secs(60),
        ))
        .await
        .unwrap_err();

    assert_eq!(err.code(), Some("SERVER_NOT_FOUND"));
    assert_eq!(clock.elapsed(), Duration::from_secs(5));
}

#[tokio::test]
async fn test_server_details_decoding() {
    let transport = MockTransport::new();
    let (svc, _clock) = service(&transport);

    transport.respond(200, server_details(UUID, "started"));

    let details = svc
        .get_server_details(&GetServerDetails {
            uuid: UUID.to_string(),
        })
        .await
        .unwrap();

    assert_eq!(details.core_number, 2);
    assert_eq!(details.memory_amount, 2048);
    assert_eq!(details.host, 7171);
    assert_eq!(details.ip_addresses.len(), 2);
    assert_eq!(details.ip_addresses[1].address, "94.237.0.207");
    assert_eq!(details.storage_devices[0].size, 30);
    assert_eq!(details.storage_devices[0].boot_disk, Some(0));
    assert!(details.tags.is_empty());
}

#[tokio::test]
async fn test_server_list_and_tagging() {
    let transport = MockTransport::new();
    let (svc, _clock) = service(&transport);

    transport
        .respond(
            200,
            json!({"servers": {"server": [
                {"uuid": "a", "state": "started", "tags": {"tag": ["DEV"]}},
                {"uuid": "b", "state": "stopped", "tags": []},
            ]}}),
        )
        .respond(200, server_details(UUID, "started"))
        .respond(
            200,
            json!({"server_sizes": {"server_size": [
                {"core_number": "1", "memory_amount": "1024"},
                {"core_number": "2", "memory_amount": "2048"},
            ]}}),
        );

    let servers = svc.get_servers().await.unwrap();
    assert_eq!(servers.len(), 2);
    assert!(servers[0].tags.contains("DEV"));
    assert!(servers[1].is_stopped());

    svc.tag_server(&TagServer {
        uuid: UUID.to_string(),
        tags: vec!["DEV".to_string(), "WEB".to_string()],
    })
    .await
    .unwrap();

    let sizes = svc.get_server_configurations().await.unwrap();
    assert_eq!(sizes[1].memory_amount, 2048);

    let requests = transport.requests();
    assert_eq!(requests[1].method, Method::Post);
    assert_eq!(requests[1].path, format!("/server/{UUID}/tag/DEV,WEB"));
    assert_eq!(requests[2].path, "/server_size");
}

#[tokio::test]
async fn test_delete_server_and_storages() {
    let transport = MockTransport::new();
    let (svc, _clock) = service(&transport);

    transport.respond_empty();

    svc.delete_server_and_storages(&DeleteServerAndStorages {
        uuid: UUID.to_string(),
    })
    .await
    .unwrap();

    let requests = transport.requests();
    assert_eq!(requests[0].method, Method::Delete);
    assert_eq!(requests[0].path, format!("/server/{UUID}/?storages=1"));
}

#[tokio::test]
async fn test_illegal_state_is_provider_error() {
    let transport = MockTransport::new();
    let (svc, _clock) = service(&transport);

    transport.respond_error(
        409,
        "SERVER_STATE_ILLEGAL",
        "The server is not in a state that allows this operation.",
    );

    let err = svc
        .delete_server(&DeleteServer {
            uuid: UUID.to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Provider);
    assert_eq!(err.code(), Some("SERVER_STATE_ILLEGAL"));
    assert_eq!(
        err.to_string(),
        "The server is not in a state that allows this operation. (SERVER_STATE_ILLEGAL)"
    );
}
