use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use upcloud::{HttpRequest, HttpResponse, ManualClock, Service, Transport};

/// Transport that answers from a script and records what it was sent
#[derive(Clone, Default)]
pub struct MockTransport {
    responses: Arc<Mutex<VecDeque<HttpResponse>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: Value) -> &Self {
        self.respond_raw(status, body.to_string().into_bytes())
    }

    pub fn respond_raw(&self, status: u16, body: impl Into<Vec<u8>>) -> &Self {
        self.responses.lock().unwrap().push_back(HttpResponse {
            status,
            body: body.into(),
        });
        self
    }

    #[allow(dead_code)]
    pub fn respond_empty(&self) -> &Self {
        self.respond_raw(204, Vec::new())
    }

    #[allow(dead_code)]
    pub fn respond_error(&self, status: u16, code: &str, message: &str) -> &Self {
        self.respond(
            status,
            serde_json::json!({"error": {"error_code": code, "error_message": message}}),
        )
    }

    #[allow(dead_code)]
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    #[allow(dead_code)]
    pub fn request_paths(&self) -> Vec<String> {
        self.requests()
            .into_iter()
            .map(|r| format!("{} {}", r.method, r.path))
            .collect()
    }

    #[allow(dead_code)]
    pub fn remaining(&self) -> usize {
        self.responses.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: HttpRequest) -> upcloud::Result<HttpResponse> {
        self.requests.lock().unwrap().push(request.clone());

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| upcloud::Error::Transport {
                status: None,
                body: format!(
                    "no scripted response for {} {}",
                    request.method, request.path
                ),
            })
    }
}

/// Service over a mock transport and a virtual clock
pub fn service(transport: &MockTransport) -> (Service, ManualClock) {
    let clock = ManualClock::new();
    let service = Service::new(transport.clone())
        .with_poll_interval(Duration::from_secs(5))
        .with_clock(clock.clone());
    (service, clock)
}

#[allow(dead_code)]
pub fn server_details(uuid: &str, state: &str) -> Value {
    serde_json::json!({
        "server": {
            "boot_order": "disk",
            "core_number": "2",
            "firewall": "off",
            "host": 7171,
            "hostname": "debian.example.com",
            "ip_addresses": {
                "ip_address": [
                    {"access": "private", "address": "10.0.0.1", "family": "IPv4"},
                    {"access": "public", "address": "94.237.0.207", "family": "IPv4"}
                ]
            },
            "license": 0,
            "memory_amount": "2048",
            "nic_model": "virtio",
            "plan": "custom",
            "progress": "0",
            "state": state,
            "storage_devices": {
                "storage_device": [{
                    "address": "virtio:0",
                    "part_of_plan": "",
                    "storage": "01c8df16-d1c0-4ef1-ba2f-7e7b3a5d1b30",
                    "storage_size": 30,
                    "storage_title": "disk1",
                    "type": "disk",
                    "boot_disk": "0"
                }]
            },
            "tags": {"tag": []},
            "timezone": "UTC",
            "title": "Integration test server #1",
            "uuid": uuid,
            "video_model": "cirrus",
            "vnc": "off",
            "vnc_password": "aabbccdd",
            "zone": "fi-hel2"
        }
    })
}

#[allow(dead_code)]
pub fn storage_details(uuid: &str, state: &str) -> Value {
    serde_json::json!({
        "storage": {
            "access": "private",
            "backup_rule": {"interval": "daily", "time": "0430", "retention": "30"},
            "backups": {"backup": []},
            "license": 0,
            "servers": {"server": []},
            "size": 10,
            "state": state,
            "tier": "maxiops",
            "title": "Test storage",
            "type": "normal",
            "uuid": uuid,
            "zone": "fi-hel2"
        }
    })
}
