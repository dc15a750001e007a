//! Shared helpers for listfetch-core integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use listfetch_core::{FetchError, Item, ItemSource, ListEntry, ListView};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, Once};

static INIT: Once = Once::new();

/// Initialize logging for tests (only once per test run)
pub fn init_test_logging() {
    INIT.call_once(|| {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_test_writer()
                    .with_target(true)
                    .with_level(true),
            )
            .with(tracing_subscriber::filter::EnvFilter::from_default_env())
            .try_init();
    });
}

pub fn item(id: i64, group_id: i64, name: &str) -> Item {
    Item::new(id, group_id, Some(name))
}

/// Scenario A from the design notes
pub fn scenario_a() -> Vec<Item> {
    vec![
        item(1, 2, "Item 21"),
        item(2, 1, "Item 5"),
        item(3, 1, "Item 6"),
    ]
}

pub fn summary(entries: &[ListEntry]) -> Vec<(i64, &str)> {
    entries
        .iter()
        .map(|e| (e.group_id, e.name.as_str()))
        .collect()
}

/// Source that plays back a fixed sequence of results, then keeps
/// returning the last configured success
pub struct ScriptedSource {
    script: Mutex<VecDeque<Result<Vec<Item>, FetchError>>>,
    fallback: Vec<Item>,
    calls: AtomicUsize,
}

impl ScriptedSource {
    pub fn new(script: Vec<Result<Vec<Item>, FetchError>>, fallback: Vec<Item>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            fallback,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

pub fn unreachable() -> FetchError {
    FetchError::Transport {
        url: "http://test.invalid/items.json".to_string(),
        message: "connection refused".to_string(),
    }
}

#[async_trait]
impl ItemSource for ScriptedSource {
    async fn fetch(&self) -> Result<Vec<Item>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self.script.lock().unwrap().pop_front();
        next.unwrap_or_else(|| Ok(self.fallback.clone()))
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}

/// Source that never succeeds
pub struct DownSource {
    calls: AtomicUsize,
}

impl DownSource {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ItemSource for DownSource {
    async fn fetch(&self) -> Result<Vec<Item>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(unreachable())
    }

    fn name(&self) -> &'static str {
        "down"
    }
}

/// In-memory display state
#[derive(Debug, Default)]
pub struct MemoryView {
    pub entries: Vec<ListEntry>,
    pub loading: bool,
    pub clears: usize,
}

impl ListView for MemoryView {
    fn clear(&mut self) {
        self.entries.clear();
        self.clears += 1;
    }

    fn show_loading(&mut self) {
        self.loading = true;
    }

    fn show_entries(&mut self, entries: &[ListEntry]) {
        self.entries = entries.to_vec();
    }

    fn hide_loading(&mut self) {
        self.loading = false;
    }
}
