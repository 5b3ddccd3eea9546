//! Transport configuration
//!
//! Settings for the reqwest-backed transport: default headers, content
//! negotiation, and client timeouts. Per-request overrides live in
//! `RequestOptions`; this is the baseline every request starts from.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use storelink_adapter::error::{AdapterError, AdapterResult};

/// Configuration for the reqwest-backed transport.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Headers added to every request. Per-request headers with the same
    /// name take precedence.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub default_headers: HashMap<String, String>,

    /// Content type for request bodies.
    #[serde(default = "default_content_type")]
    pub content_type: String,

    /// Accept header value.
    #[serde(default = "default_accept")]
    pub accept: String,

    /// Connection establishment timeout in seconds.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Whole-request timeout in seconds. A per-request `timeout` option
    /// overrides this for that request only.
    #[serde(default = "default_read_timeout_secs")]
    pub read_timeout_secs: u64,
}

fn default_content_type() -> String {
    "application/json".to_string()
}

fn default_accept() -> String {
    "application/json".to_string()
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_read_timeout_secs() -> u64 {
    30
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            default_headers: HashMap::new(),
            content_type: default_content_type(),
            accept: default_accept(),
            connect_timeout_secs: default_connect_timeout_secs(),
            read_timeout_secs: default_read_timeout_secs(),
        }
    }
}

impl HttpConfig {
    /// Create a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a default header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(name.into(), value.into());
        self
    }

    /// Set the whole-request timeout in seconds.
    pub fn with_read_timeout_secs(mut self, secs: u64) -> Self {
        self.read_timeout_secs = secs;
        self
    }

    /// Set the connection timeout in seconds.
    pub fn with_connect_timeout_secs(mut self, secs: u64) -> Self {
        self.connect_timeout_secs = secs;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> AdapterResult<()> {
        if self.connect_timeout_secs == 0 {
            return Err(AdapterError::invalid_configuration(
                "connect_timeout_secs must be greater than zero",
            ));
        }
        if self.read_timeout_secs == 0 {
            return Err(AdapterError::invalid_configuration(
                "read_timeout_secs must be greater than zero",
            ));
        }
        Ok(())
    }
}
