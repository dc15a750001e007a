//! Fixed-interval retry after a failed fetch
//!
//! ```text
//! Idle ──failure──► Waiting(interval) ──► Retrying ──success──► Idle
//!                        ▲                    │
//!                        └──────failure───────┘
//! ```
//!
//! There is no retry limit. The wait is a plain tokio sleep, so aborting the
//! task that owns the scheduler cancels a pending retry.

use std::time::Duration;

use serde::Serialize;
use tokio::time::sleep;
use tracing::{debug, info, warn};

/// Shortest wait between attempts; anything lower is raised to this
pub const MIN_RETRY_INTERVAL: Duration = Duration::from_secs(1);

/// Retry timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Time between a failure and the next attempt
    pub interval: Duration,
    /// Countdown step; each step logs a notice
    pub tick: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(5),
            tick: Duration::from_secs(1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RetryState {
    Idle,
    Waiting,
    Retrying,
}

/// Tracks the retry state of one fetch task
#[derive(Debug)]
pub struct RetryScheduler {
    policy: RetryPolicy,
    state: RetryState,
    retries: u64,
}

impl RetryScheduler {
    /// Intervals below [`MIN_RETRY_INTERVAL`] are raised to it
    pub fn new(mut policy: RetryPolicy) -> Self {
        if policy.interval < MIN_RETRY_INTERVAL {
            warn!(
                "Retry interval {:?} is too low; using minimum of {:?}",
                policy.interval, MIN_RETRY_INTERVAL
            );
            policy.interval = MIN_RETRY_INTERVAL;
        }

        Self {
            policy,
            state: RetryState::Idle,
            retries: 0,
        }
    }

    pub fn state(&self) -> RetryState {
        self.state
    }

    /// Number of retries fired so far
    pub fn retries(&self) -> u64 {
        self.retries
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    /// Wait out the retry interval after a failure
    ///
    /// Returns once the next attempt should start; the state is then
    /// `Retrying`.
    pub async fn wait(&mut self) {
        self.state = RetryState::Waiting;

        let interval = self.policy.interval;
        let step = if self.policy.tick.is_zero() {
            interval
        } else {
            self.policy.tick.min(interval)
        };

        let mut remaining = interval;
        while !remaining.is_zero() {
            info!(
                "Could not retrieve data. Will try again every {} seconds ({}s left)",
                interval.as_secs(),
                remaining.as_secs()
            );
            let this_step = step.min(remaining);
            sleep(this_step).await;
            remaining = remaining.saturating_sub(this_step);
        }

        self.retries += 1;
        self.state = RetryState::Retrying;
        debug!("Retry #{} starting", self.retries);
    }

    /// A fetch succeeded; no further retries are scheduled
    pub fn succeeded(&mut self) {
        if self.retries > 0 {
            info!("Fetch succeeded after {} retries", self.retries);
        }
        self.state = RetryState::Idle;
    }
}
