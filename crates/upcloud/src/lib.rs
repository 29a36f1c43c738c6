//! UpCloud API client
//!
//! Typed requests for servers, storages, IP addresses, tags and firewall
//! rules, plus waits that poll a resource until it reaches (or leaves) a
//! lifecycle state.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                    Service                       │
//! │   get_servers / create_storage / wait_for_...    │
//! └───────┬──────────────┬───────────────┬──────────┘
//!         │              │               │
//! ┌───────▼──────┐ ┌─────▼──────┐ ┌──────▼───────┐
//! │   request    │ │   codec    │ │ wait / retry │
//! │ method, path │ │  envelope  │ │ Poller,      │
//! │ body         │ │  en/decode │ │ bounded      │
//! └───────┬──────┘ └────────────┘ └──────────────┘
//!         │
//! ┌───────▼─────────────────────────────────────────┐
//! │        Transport (ReqwestTransport)              │
//! │        HTTPS + basic auth                        │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use upcloud::model::StopType;
//! use upcloud::request::StopServer;
//! use upcloud::{ServerState, Service, WaitSpec};
//!
//! # async fn run() -> upcloud::Result<()> {
//! let service = Service::from_env()?;
//!
//! for server in service.get_servers().await? {
//!     if !server.is_stopped() {
//!         service
//!             .stop_server(&StopServer {
//!                 uuid: server.uuid.clone(),
//!                 stop_type: Some(StopType::Hard),
//!                 ..Default::default()
//!             })
//!             .await?;
//!
//!         let timeout = Duration::from_secs(300);
//!         let spec = WaitSpec::until(&server.uuid, ServerState::Stopped, timeout);
//!         service.wait_for_server_state(&spec).await?;
//!     }
//! }
//! # Ok(())
//! # }
//! ```

#[macro_use]
pub mod model;

pub mod codec;
pub mod config;
pub mod error;
pub mod request;
pub mod retry;
pub mod service;
pub mod transport;
pub mod wait;

// Re-exports
pub use config::ClientConfig;
pub use error::{Error, ErrorKind, ProviderError, Result};
pub use model::{
    FirewallRule, IpAddress, Resource, Server, ServerDetails, ServerState, Stateful, Storage,
    StorageDetails, StorageState, Tag, TagList,
};
pub use service::Service;
pub use transport::{HttpRequest, HttpResponse, Method, ReqwestTransport, Transport};
pub use wait::{Clock, ManualClock, Poller, TokioClock, WaitSpec};
