//! Error types for fetching, sorting and configuration

use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// Failures while retrieving or decoding the remote item list
///
/// None of these are fatal: the fetch controller logs them and hands
/// control to the retry scheduler.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The HTTP client could not be constructed
    #[error("Failed to create HTTP client: {message}")]
    Client { message: String },

    /// Network-level failure (unreachable host, timeout, reset)
    #[error("Failed to fetch items from {url}: {message}")]
    Transport { url: String, message: String },

    /// The endpoint answered with a non-2xx status
    #[error("Failed to fetch items: HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    /// The body was not a JSON array of items
    #[error("Failed to parse item list from {url}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Why a name has no usable numeric suffix
///
/// Not an error for the caller: the sorter reacts by switching the whole
/// set to lexical ordering.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SuffixError {
    #[error("name {name:?} contains no space")]
    NoSpace { name: String },

    #[error("suffix of name {name:?} is not an integer")]
    NotNumeric {
        name: String,
        #[source]
        source: ParseIntError,
    },
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Endpoint URL must start with http:// or https://, got {url:?}")]
    InvalidUrl { url: String },
}
