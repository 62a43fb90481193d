//! Error types for subnet resolution.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SubnetError>;

#[derive(Error, Debug)]
pub enum SubnetError {
    /// Gate answered with a non-OK status. Retried by the inventory client.
    #[error("Gate failed to respond in time (status {status}): {body}")]
    RemoteTimeout { status: u16, body: String },

    /// A subnet record is missing one of the keys the pipeline relies on.
    #[error("Subnet record #{index} is missing required field '{field}'")]
    MissingField { field: &'static str, index: usize },

    /// No subnets exist for the requested account/region combination.
    #[error("No subnets found for env '{env}' in region '{region}'")]
    SubnetScope { env: String, region: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Error decoding subnet inventory at '{}': {}", .0.path(), .0.inner())]
    Decode(#[from] serde_path_to_error::Error<serde_json::Error>),

    /// Valid records followed by anything but whitespace.
    #[error("Trailing data after subnet inventory: {0}")]
    TrailingData(#[source] serde_json::Error),

    #[error("Error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl SubnetError {
    /// True for the non-OK response condition the inventory client retries on.
    pub fn is_remote_timeout(&self) -> bool {
        matches!(self, SubnetError::RemoteTimeout { .. })
    }
}
