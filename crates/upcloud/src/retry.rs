//! Bounded retry
//!
//! Some calls fail transiently right after a related state change, e.g.
//! deleting a storage that was detached a moment ago. [`bounded`] re-issues
//! such a call a fixed number of times without delay.

use crate::error::{Error, Result};
use std::future::Future;

/// Attempts made when deleting a storage
pub const DELETE_ATTEMPTS: u32 = 5;

/// Run `op` up to `attempts` times, returning the first success
///
/// `op` receives the 1-based attempt number. Every error is retried; once the
/// attempts are exhausted the last error is returned. Zero attempts is
/// treated as one.
pub async fn bounded<T, F, Fut>(attempts: u32, mut op: F) -> Result<T>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let attempts = attempts.max(1);
    let mut attempt = 1;

    loop {
        match op(attempt).await {
            Ok(value) => return Ok(value),
            Err(e) if attempt < attempts => {
                tracing::warn!("Attempt {}/{} failed, retrying: {}", attempt, attempts, e);
                attempt += 1;
            }
            Err(e) => return Err(exhausted(e, attempts)),
        }
    }
}

fn exhausted(err: Error, attempts: u32) -> Error {
    tracing::warn!("Giving up after {} attempts: {}", attempts, err);
    err
}
