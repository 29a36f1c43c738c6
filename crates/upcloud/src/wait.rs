//! State convergence
//!
//! Resource operations complete asynchronously on the API side. [`Poller`]
//! repeatedly reads a resource until its state satisfies a [`WaitSpec`] or the
//! wait times out.
//!
//! ```text
//!            read ok, condition met
//! Polling ───────────────────────────▶ Satisfied
//!    │  ▲
//!    │  └── read ok, not met, time left (sleep one interval)
//!    ├────── read ok, not met, deadline passed ──▶ TimedOut
//!    └────── read failed ────────────────────────▶ Failed
//! ```

use crate::error::{Error, Result};
use crate::model::Stateful;
use async_trait::async_trait;
use std::fmt;
use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Interval between reads unless configured otherwise
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Shorter poll intervals, including zero, are raised to this value
pub const MIN_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Time source used by the poller
#[async_trait]
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;

    async fn sleep(&self, duration: Duration);
}

/// Wall clock backed by tokio timers
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

#[async_trait]
impl Clock for TokioClock {
    fn now(&self) -> Instant {
        tokio::time::Instant::now().into_std()
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Virtual clock that advances only when slept on
///
/// Clones share the same timeline.
#[derive(Debug, Clone)]
pub struct ManualClock {
    origin: Instant,
    offset: Arc<Mutex<Duration>>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            offset: Arc::new(Mutex::new(Duration::ZERO)),
        }
    }

    /// Virtual time passed since creation
    pub fn elapsed(&self) -> Duration {
        *self.offset.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn advance(&self, duration: Duration) {
        *self.offset.lock().unwrap_or_else(|e| e.into_inner()) += duration;
    }
}

#[async_trait]
impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.elapsed()
    }

    async fn sleep(&self, duration: Duration) {
        self.advance(duration);
    }
}

/// What to wait for
///
/// Exactly one of `desired` and `undesired` must be set.
#[derive(Debug, Clone, PartialEq)]
pub struct WaitSpec<S> {
    /// UUID of the resource to read
    pub uuid: String,

    /// Wait until the state equals this
    pub desired: Option<S>,

    /// Wait until the state is no longer this
    pub undesired: Option<S>,

    pub timeout: Duration,
}

impl<S> WaitSpec<S> {
    /// Wait until the resource reaches `state`
    pub fn until(uuid: impl Into<String>, state: S, timeout: Duration) -> Self {
        Self {
            uuid: uuid.into(),
            desired: Some(state),
            undesired: None,
            timeout,
        }
    }

    /// Wait until the resource leaves `state`
    pub fn until_not(uuid: impl Into<String>, state: S, timeout: Duration) -> Self {
        Self {
            uuid: uuid.into(),
            desired: None,
            undesired: Some(state),
            timeout,
        }
    }

    fn condition(&self) -> Result<Condition<'_, S>> {
        match (&self.desired, &self.undesired) {
            (Some(state), None) => Ok(Condition::Reach(state)),
            (None, Some(state)) => Ok(Condition::Leave(state)),
            (Some(_), Some(_)) => Err(Error::CallerContractViolation(
                "desired and undesired state are mutually exclusive".to_string(),
            )),
            (None, None) => Err(Error::CallerContractViolation(
                "either a desired or an undesired state must be set".to_string(),
            )),
        }
    }
}

enum Condition<'a, S> {
    Reach(&'a S),
    Leave(&'a S),
}

impl<S: PartialEq> Condition<'_, S> {
    fn is_met(&self, observed: &S) -> bool {
        match self {
            Condition::Reach(state) => observed == *state,
            Condition::Leave(state) => observed != *state,
        }
    }
}

impl<S: fmt::Display> fmt::Display for Condition<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Reach(state) => write!(f, "state {state}"),
            Condition::Leave(state) => write!(f, "state other than {state}"),
        }
    }
}

enum PollState<R> {
    Polling,
    Satisfied(R),
    TimedOut,
    Failed(Error),
}

/// Drives reads until a [`WaitSpec`] is satisfied
#[derive(Clone)]
pub struct Poller {
    interval: Duration,
    clock: Arc<dyn Clock>,
}

impl fmt::Debug for Poller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Poller")
            .field("interval", &self.interval)
            .finish_non_exhaustive()
    }
}

impl Default for Poller {
    fn default() -> Self {
        Self::new(DEFAULT_POLL_INTERVAL, TokioClock)
    }
}

impl Poller {
    pub fn new(interval: Duration, clock: impl Clock + 'static) -> Self {
        Self {
            interval: interval.max(MIN_POLL_INTERVAL),
            clock: Arc::new(clock),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval.max(MIN_POLL_INTERVAL);
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Poll `read` until the wait condition holds
    ///
    /// Read failures are returned immediately. On timeout the last observed
    /// state is carried by [`Error::ConvergenceTimeout`].
    pub async fn wait<R, F, Fut>(&self, spec: &WaitSpec<R::State>, mut read: F) -> Result<R>
    where
        R: Stateful,
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<R>>,
    {
        let condition = spec.condition()?;
        let started = self.clock.now();
        let mut last_state: Option<String> = None;
        let mut state = PollState::Polling;

        loop {
            state = match state {
                PollState::Polling => match read().await {
                    Err(e) => PollState::Failed(e),
                    Ok(resource) => {
                        let observed = resource.state();
                        tracing::debug!(
                            "{} {} is {}, waiting for {}",
                            R::KEY,
                            spec.uuid,
                            observed,
                            condition
                        );

                        if condition.is_met(observed) {
                            PollState::Satisfied(resource)
                        } else {
                            last_state = Some(observed.to_string());
                            let elapsed = self.clock.now().saturating_duration_since(started);
                            if elapsed >= spec.timeout {
                                PollState::TimedOut
                            } else {
                                self.clock
                                    .sleep(self.interval.min(spec.timeout - elapsed))
                                    .await;
                                PollState::Polling
                            }
                        }
                    }
                },
                PollState::Satisfied(resource) => {
                    tracing::info!(
                        "{} {} reached {}",
                        R::KEY,
                        resource.identifier(),
                        resource.state()
                    );
                    return Ok(resource);
                }
                PollState::TimedOut => {
                    tracing::warn!(
                        "Timed out after {:?} waiting for {} {} to reach {}",
                        spec.timeout,
                        R::KEY,
                        spec.uuid,
                        condition
                    );
                    return Err(Error::ConvergenceTimeout {
                        resource: format!("{} {}", R::KEY, spec.uuid),
                        timeout: spec.timeout,
                        last_state,
                    });
                }
                PollState::Failed(e) => return Err(e),
            };
        }
    }
}
