//! Request declarations
//!
//! Each request type knows its HTTP method, its path and, for writes, the
//! envelope key its fields are nested under. Bodies are always produced by
//! [`codec::encode`].

pub mod firewall;
pub mod ip_address;
pub mod server;
pub mod storage;
pub mod tag;

pub use firewall::*;
pub use ip_address::*;
pub use server::*;
pub use storage::*;
pub use tag::*;

use crate::codec;
use crate::error::Result;
use crate::transport::{HttpRequest, Method};
use serde::Serialize;
use std::time::Duration;

/// A single API call
pub trait Request: Send + Sync {
    fn method(&self) -> Method;

    /// Path relative to the API root
    fn path(&self) -> String;

    /// Encoded body, if the call carries one
    fn body(&self) -> Result<Option<Vec<u8>>> {
        Ok(None)
    }

    /// Per-call override of the transport timeout
    fn timeout(&self) -> Option<Duration> {
        None
    }

    fn to_http(&self) -> Result<HttpRequest> {
        Ok(HttpRequest {
            method: self.method(),
            path: self.path(),
            body: self.body()?,
            timeout: self.timeout(),
        })
    }
}

/// Body nesting `fields` under `key`
pub(crate) fn envelope<T>(key: &str, fields: &T) -> Result<Option<Vec<u8>>>
where
    T: Serialize + ?Sized,
{
    codec::encode(key, fields).map(Some)
}
