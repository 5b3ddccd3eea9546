//! Resource configuration
//!
//! Describes where a resource collection lives. Supplied by the calling
//! data-store layer on every invocation; the adapter keeps no copy.

use serde::{Deserialize, Serialize};

use crate::error::{AdapterError, AdapterResult};

/// Location of a resource collection: a base URL plus an optional
/// endpoint path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceConfig {
    /// Base URL for the remote API (e.g., "https://api.example.com/v1").
    pub base_url: String,

    /// Endpoint path for the resource (e.g., "users").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

impl ResourceConfig {
    /// Create a resource config from a base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            endpoint: None,
        }
    }

    /// Set the endpoint path.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Build the URL for this resource, optionally pointing at a single
    /// entity.
    ///
    /// This is the only place path strings are assembled: non-empty
    /// segments are joined with exactly one `/`, empty or absent segments
    /// are omitted, and stray slashes on either side of a segment never
    /// produce duplicate separators.
    pub fn url(&self, id: Option<&str>) -> String {
        let mut url = self.base_url.trim_end_matches('/').to_string();
        for segment in [self.endpoint.as_deref(), id] {
            let Some(segment) = segment else { continue };
            let segment = segment.trim_matches('/');
            if segment.is_empty() {
                continue;
            }
            url.push('/');
            url.push_str(segment);
        }
        url
    }

    /// Validate the configuration.
    pub fn validate(&self) -> AdapterResult<()> {
        if self.base_url.is_empty() {
            return Err(AdapterError::invalid_configuration("base_url is required"));
        }
        url::Url::parse(&self.base_url)
            .map_err(|e| AdapterError::invalid_configuration(format!("invalid base_url: {e}")))?;
        Ok(())
    }
}
