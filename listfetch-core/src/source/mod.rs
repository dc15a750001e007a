//! Item source trait - abstraction over where the item list comes from
//!
//! - HTTP endpoint (production, `http` feature)
//! - Static / scripted sources (testing)

use async_trait::async_trait;

use crate::error::FetchError;
use crate::model::Item;

#[cfg(feature = "http")]
mod http;

#[cfg(feature = "http")]
pub use http::HttpSource;

/// Trait for item list providers
///
/// Implementations handle their own transport and decoding and report every
/// failure as a [`FetchError`]; retrying is the caller's job.
#[async_trait]
pub trait ItemSource: Send + Sync {
    /// Retrieve the complete, unprocessed item list
    async fn fetch(&self) -> Result<Vec<Item>, FetchError>;

    /// Source identifier for logging
    fn name(&self) -> &'static str;
}

/// Source that always returns the same items
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    items: Vec<Item>,
}

impl StaticSource {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }
}

#[async_trait]
impl ItemSource for StaticSource {
    async fn fetch(&self) -> Result<Vec<Item>, FetchError> {
        Ok(self.items.clone())
    }

    fn name(&self) -> &'static str {
        "static"
    }
}
