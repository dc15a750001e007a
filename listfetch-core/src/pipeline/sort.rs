//! Display ordering: group id first, then the number at the end of the name
//!
//! Names look like `"Item 599"`. Comparing them as strings puts `"Item 6"`
//! between `"Item 599"` and `"Item 601"`, so the suffix after the first space
//! is parsed and compared as an integer instead. If any single name in the
//! set has no parseable suffix, the whole set is ordered lexically so one
//! policy applies to every row.
//!
//! Both strategies use two stable passes: secondary key first, then group id.
//! The second pass keeps the secondary order inside each group.

use serde::Serialize;
use tracing::debug;

use crate::error::SuffixError;
use crate::model::ListEntry;

/// Which ordering produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortStrategy {
    /// group id, then integer suffix
    Numeric,
    /// group id, then the whole name compared ordinally
    Lexical,
}

/// Sorted entries plus how they were sorted
#[derive(Debug, Clone)]
pub struct SortedEntries {
    pub entries: Vec<ListEntry>,
    pub strategy: SortStrategy,
    /// First name that forced the lexical fallback
    pub fallback_reason: Option<SuffixError>,
}

/// Parse the integer that follows the first space of `name`
pub fn numeric_suffix(name: &str) -> Result<i32, SuffixError> {
    let (_, suffix) = name.split_once(' ').ok_or_else(|| SuffixError::NoSpace {
        name: name.to_string(),
    })?;

    suffix
        .parse::<i32>()
        .map_err(|source| SuffixError::NotNumeric {
            name: name.to_string(),
            source,
        })
}

/// Order entries for display, falling back to lexical order when needed
pub fn sort_entries(entries: Vec<ListEntry>) -> SortedEntries {
    let keys: Result<Vec<i32>, SuffixError> =
        entries.iter().map(|e| numeric_suffix(&e.name)).collect();

    match keys {
        Ok(keys) => {
            let mut keyed: Vec<(i32, ListEntry)> = keys.into_iter().zip(entries).collect();
            keyed.sort_by_key(|(suffix, _)| *suffix);
            keyed.sort_by_key(|(_, entry)| entry.group_id);

            SortedEntries {
                entries: keyed.into_iter().map(|(_, entry)| entry).collect(),
                strategy: SortStrategy::Numeric,
                fallback_reason: None,
            }
        }
        Err(reason) => {
            debug!("Numeric ordering unavailable ({}); using lexical order", reason);
            SortedEntries {
                entries: fallback_sort(entries),
                strategy: SortStrategy::Lexical,
                fallback_reason: Some(reason),
            }
        }
    }
}

/// Stable sort by name, then stable sort by group id
pub fn fallback_sort(mut entries: Vec<ListEntry>) -> Vec<ListEntry> {
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    entries.sort_by_key(|e| e.group_id);
    entries
}
