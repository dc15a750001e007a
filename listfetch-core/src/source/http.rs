//! HTTP source for the item list
//!
//! A single GET against the configured endpoint; the body must be a JSON
//! array of `{id, listId, name}` records.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use super::ItemSource;
use crate::config::ListConfig;
use crate::error::FetchError;
use crate::model::Item;

/// Remote JSON endpoint
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("listfetch/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Client {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Use a preconfigured client (proxy, TLS or header settings)
    pub fn with_client(url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// Build a source for the configured endpoint and timeout
    pub fn from_config(config: &ListConfig) -> Result<Self, FetchError> {
        Self::new(config.endpoint(), config.timeout())
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ItemSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<Item>, FetchError> {
        debug!("Fetching item list from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| FetchError::Transport {
                url: self.url.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Item endpoint returned HTTP {} from {}", status, self.url);
            return Err(FetchError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| FetchError::Transport {
            url: self.url.clone(),
            message: format!("Failed to read response body: {e}"),
        })?;

        let items: Vec<Item> =
            serde_json::from_str(&body).map_err(|source| FetchError::Decode {
                url: self.url.clone(),
                source,
            })?;

        debug!("Fetched {} items from {}", items.len(), self.url);
        Ok(items)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_uses_endpoint() {
        let config = ListConfig {
            base_url: "http://localhost:8080/".to_string(),
            path: "/items.json".to_string(),
            ..Default::default()
        };

        let source = HttpSource::from_config(&config).unwrap();
        assert_eq!(source.url(), "http://localhost:8080/items.json");
        assert_eq!(source.name(), "http");
    }
}
