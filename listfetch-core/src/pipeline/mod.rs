//! Clean, filter and sort a freshly fetched item list
//!
//! Every run starts from the raw response and produces a new ordered list;
//! nothing is carried over between runs.

mod clean;
mod filter;
mod sort;

pub use clean::clean;
pub use filter::filter_by_name;
pub use sort::{fallback_sort, numeric_suffix, sort_entries, SortStrategy, SortedEntries};

use serde::Serialize;

use crate::model::{Item, ListEntry};

/// Result of one pipeline run
#[derive(Debug, Clone, Serialize)]
pub struct PipelineOutput {
    /// Search string the run was filtered with ("" = show all)
    pub query: String,
    pub strategy: SortStrategy,
    pub entries: Vec<ListEntry>,
}

/// Cleaner -> Filter -> Sorter
pub fn run(items: Vec<Item>, query: &str) -> PipelineOutput {
    let cleaned = clean(items);
    let filtered = filter_by_name(cleaned, query);
    let sorted = sort_entries(filtered);

    tracing::debug!(
        "Pipeline produced {} entries (query: {:?}, strategy: {:?})",
        sorted.entries.len(),
        query,
        sorted.strategy
    );

    PipelineOutput {
        query: query.to_string(),
        strategy: sorted.strategy,
        entries: sorted.entries,
    }
}
