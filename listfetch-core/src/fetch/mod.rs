//! Fetch orchestration
//!
//! A fetch runs as one tokio task: clear the view, signal loading, fetch,
//! run the pipeline, publish the result. Failures are logged and retried
//! after the configured interval with an empty search string until a fetch
//! succeeds. The task never touches the view itself; it sends
//! [`ViewEvent`]s to the single display loop.
//!
//! [`FetchController`] keeps at most one fetch in flight. Starting a new one
//! aborts the previous task, including any retry it was waiting on, and
//! tags the new task's events with a higher generation so the display loop
//! ignores anything the old task still manages to send.

mod retry;

pub use retry::{RetryPolicy, RetryScheduler, RetryState, MIN_RETRY_INTERVAL};

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::{AbortHandle, JoinHandle};
use tracing::{debug, error, info, warn};

use crate::pipeline::{self, PipelineOutput};
use crate::source::ItemSource;
use crate::view::{ViewEvent, ViewUpdate};

/// Outcome of a fetch task that ran to success
#[derive(Debug, Clone)]
pub struct FetchReport {
    /// Retries needed before the successful attempt
    pub retries: u64,
    pub output: PipelineOutput,
}

/// Handle to a running fetch, owned by whoever started it
#[derive(Debug)]
pub struct FetchTask {
    handle: JoinHandle<FetchReport>,
}

impl FetchTask {
    /// Wait for the fetch to succeed
    ///
    /// Returns `None` if the task was cancelled (replaced by a newer fetch
    /// or aborted explicitly).
    pub async fn join(self) -> Option<FetchReport> {
        match self.handle.await {
            Ok(report) => Some(report),
            Err(e) if e.is_cancelled() => None,
            Err(e) => {
                error!("Fetch task failed: {}", e);
                None
            }
        }
    }

    pub fn abort(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

/// Starts fetches with single-flight, cancel-and-replace semantics
pub struct FetchController {
    source: Arc<dyn ItemSource>,
    events: UnboundedSender<ViewEvent>,
    policy: RetryPolicy,
    in_flight: Option<AbortHandle>,
    generation: u64,
}

impl FetchController {
    pub fn new(
        source: Arc<dyn ItemSource>,
        events: UnboundedSender<ViewEvent>,
        policy: RetryPolicy,
    ) -> Self {
        Self {
            source,
            events,
            policy,
            in_flight: None,
            generation: 0,
        }
    }

    /// Start a fetch filtered by `query` ("" shows everything)
    ///
    /// Any fetch still in flight is cancelled first.
    pub fn start(&mut self, query: &str) -> FetchTask {
        self.cancel();
        self.generation += 1;

        info!(
            "Starting fetch #{} from {} source (query: {:?})",
            self.generation,
            self.source.name(),
            query
        );

        let handle = tokio::spawn(run_fetch(
            Arc::clone(&self.source),
            Publisher {
                events: self.events.clone(),
                generation: self.generation,
            },
            self.policy,
            query.to_string(),
        ));
        self.in_flight = Some(handle.abort_handle());

        FetchTask { handle }
    }

    /// Cancel the in-flight fetch and its pending retry, if any
    pub fn cancel(&mut self) {
        if let Some(previous) = self.in_flight.take() {
            if !previous.is_finished() {
                debug!("Cancelling in-flight fetch");
                previous.abort();
            }
        }
    }

    /// Whether a fetch (or its retry wait) is still running
    pub fn is_busy(&self) -> bool {
        self.in_flight
            .as_ref()
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }
}

impl Drop for FetchController {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// One fetch, retried until it succeeds
async fn run_fetch(
    source: Arc<dyn ItemSource>,
    publisher: Publisher,
    policy: RetryPolicy,
    mut query: String,
) -> FetchReport {
    let mut scheduler = RetryScheduler::new(policy);

    loop {
        publisher.send(ViewUpdate::Clear);
        publisher.send(ViewUpdate::Loading);

        match source.fetch().await {
            Ok(items) => {
                let output = pipeline::run(items, &query);
                scheduler.succeeded();
                info!(
                    "Loaded {} entries ({:?} order)",
                    output.entries.len(),
                    output.strategy
                );
                publisher.send(ViewUpdate::Loaded(output.clone()));
                return FetchReport {
                    retries: scheduler.retries(),
                    output,
                };
            }
            Err(e) => {
                warn!("Fetch from {} source failed: {}", source.name(), e);
                scheduler.wait().await;
                // A retry always drops the user's filter
                query.clear();
            }
        }
    }
}

/// Sends one fetch's events, tagged with its generation
struct Publisher {
    events: UnboundedSender<ViewEvent>,
    generation: u64,
}

impl Publisher {
    fn send(&self, update: ViewUpdate) {
        if self.events.send(ViewEvent::new(self.generation, update)).is_err() {
            debug!("Display loop is gone; dropping view event");
        }
    }
}
