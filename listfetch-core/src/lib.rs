//! listfetch core library exports
//!
//! Fetches catalog items from a remote JSON endpoint, drops entries without a
//! name, filters them by a search string and orders them for display.
//!
//! ```text
//! ItemSource ──► clean ──► filter ──► sort ──► ViewEvent ──► ListView
//!     ▲
//!     └──── RetryScheduler (on fetch failure) ◄────────────────
//! ```

pub mod config;
pub mod error;
pub mod fetch;
pub mod model;
pub mod pipeline;
pub mod source;
pub mod view;

pub use config::ListConfig;
pub use error::{ConfigError, FetchError, SuffixError};
pub use fetch::{
    FetchController, FetchReport, FetchTask, RetryPolicy, RetryScheduler, RetryState,
};
pub use model::{Item, ListEntry, Row};
pub use pipeline::{PipelineOutput, SortStrategy};
pub use source::{ItemSource, StaticSource};
pub use view::{GenerationGate, ListView, ViewEvent, ViewUpdate};

#[cfg(feature = "http")]
pub use source::HttpSource;
