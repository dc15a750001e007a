//! Display collaborator interface
//!
//! Fetch tasks run on the runtime's worker threads and only send
//! [`ViewEvent`]s. A single display loop ([`drive`]) owns the view and
//! applies events in order, so every view mutation happens in one place.
//!
//! Aborting a fetch task only takes effect at its next `.await`, so a
//! replaced fetch can still send a result after its successor has started.
//! Every event carries the generation of the fetch that sent it, and the
//! display loop drops events older than the newest generation it has seen.

use tokio::sync::mpsc::UnboundedReceiver;
use tracing::debug;

use crate::model::ListEntry;
use crate::pipeline::PipelineOutput;

/// Something that can show the ordered list
pub trait ListView {
    /// Forget previously shown entries
    fn clear(&mut self);

    /// A fetch is about to start
    fn show_loading(&mut self);

    /// Replace the shown list with `entries`
    fn show_entries(&mut self, entries: &[ListEntry]);

    /// The fetch completed successfully
    fn hide_loading(&mut self);
}

/// Change requested by a fetch task
#[derive(Debug, Clone)]
pub enum ViewUpdate {
    Clear,
    Loading,
    Loaded(PipelineOutput),
}

/// Message from a fetch task to the display loop
#[derive(Debug, Clone)]
pub struct ViewEvent {
    /// Fetch that sent the event; increases with every started fetch
    pub generation: u64,
    pub update: ViewUpdate,
}

impl ViewEvent {
    pub fn new(generation: u64, update: ViewUpdate) -> Self {
        Self { generation, update }
    }
}

/// Drops events from fetches that have been replaced
#[derive(Debug, Default)]
pub struct GenerationGate {
    latest: u64,
}

impl GenerationGate {
    /// Whether `event` belongs to the newest fetch seen so far
    pub fn admit(&mut self, event: &ViewEvent) -> bool {
        if event.generation < self.latest {
            debug!(
                "Dropping event from replaced fetch #{} (current #{})",
                event.generation, self.latest
            );
            return false;
        }
        self.latest = event.generation;
        true
    }
}

/// Apply one update to the view
pub fn apply<V: ListView + ?Sized>(view: &mut V, update: ViewUpdate) {
    match update {
        ViewUpdate::Clear => view.clear(),
        ViewUpdate::Loading => view.show_loading(),
        ViewUpdate::Loaded(output) => {
            view.show_entries(&output.entries);
            view.hide_loading();
        }
    }
}

/// Apply events until every sender is dropped
pub async fn drive<V: ListView + ?Sized>(view: &mut V, mut events: UnboundedReceiver<ViewEvent>) {
    let mut gate = GenerationGate::default();
    while let Some(event) = events.recv().await {
        if gate.admit(&event) {
            apply(view, event.update);
        }
    }
    debug!("Display loop finished");
}
