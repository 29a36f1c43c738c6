//! API client
//!
//! [`Service`] turns requests into HTTP exchanges, maps non-2xx responses to
//! [`Error`], and decodes envelopes into model types. One method per API
//! operation lives in the family submodules.

mod firewall;
mod ip_address;
mod server;
mod storage;
mod tag;

use crate::codec;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::model::Resource;
use crate::request::Request;
use crate::transport::{HttpResponse, ReqwestTransport, Transport};
use crate::wait::{Clock, Poller};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

/// UpCloud API client
///
/// Cheap to clone; clones share the transport. Holds no mutable state, so
/// one instance can serve concurrent callers.
#[derive(Clone)]
pub struct Service {
    transport: Arc<dyn Transport>,
    poller: Poller,
}

impl std::fmt::Debug for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Service")
            .field("poller", &self.poller)
            .finish_non_exhaustive()
    }
}

impl Service {
    pub fn new(transport: impl Transport + 'static) -> Self {
        Self {
            transport: Arc::new(transport),
            poller: Poller::default(),
        }
    }

    /// Build a client talking HTTP with the given settings
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        Ok(Self::new(ReqwestTransport::new(config)?))
    }

    /// Build a client from `UPCLOUD_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_config(ClientConfig::from_env()?)
    }

    /// Interval between reads while waiting for a state
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poller = self.poller.with_interval(interval);
        self
    }

    /// Time source used by state waits
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.poller = self.poller.with_clock(clock);
        self
    }

    pub fn poller(&self) -> &Poller {
        &self.poller
    }

    async fn execute(&self, request: &impl Request) -> Result<HttpResponse> {
        let http = request.to_http()?;
        let (method, path) = (http.method, http.path.clone());

        let response = self.transport.execute(http).await?;
        if response.is_success() {
            return Ok(response);
        }

        let err = Error::from_response(response.status, &response.body);
        tracing::debug!("{} {} failed: {}", method, path, err);
        Err(err)
    }

    /// Perform a call that answers with a single resource
    async fn fetch<T>(&self, request: &impl Request) -> Result<T>
    where
        T: Resource + DeserializeOwned,
    {
        let response = self.execute(request).await?;
        codec::decode_one(&response.body, T::KEY)
    }

    /// Perform a call that answers with a collection
    async fn fetch_all<T>(&self, request: &impl Request) -> Result<Vec<T>>
    where
        T: Resource + DeserializeOwned,
    {
        let response = self.execute(request).await?;
        codec::decode_many(&response.body, T::PLURAL, T::KEY)
    }

    /// Perform a call whose response body is irrelevant
    async fn send(&self, request: &impl Request) -> Result<()> {
        self.execute(request).await.map(|_| ())
    }
}
