//! Reqwest-backed transport
//!
//! The default [`Transport`] implementation. Maps a `RequestDescriptor`
//! onto a reqwest request, classifies non-success statuses as errors, and
//! parses successful bodies as JSON.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use storelink_adapter::error::{AdapterError, AdapterResult};
use storelink_adapter::request::{
    HttpMethod, RequestContext, RequestDescriptor, ResponseEnvelope,
};
use storelink_adapter::traits::Transport;

use crate::config::HttpConfig;

/// Transport that executes requests with a shared reqwest [`Client`].
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    config: HttpConfig,
}

impl ReqwestTransport {
    /// Build a transport from the given configuration.
    pub fn new(config: HttpConfig) -> AdapterResult<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.read_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| {
                AdapterError::invalid_configuration(format!("failed to build HTTP client: {e}"))
            })?;

        Ok(Self { client, config })
    }

    /// Build a transport with default configuration.
    pub fn with_defaults() -> AdapterResult<Self> {
        Self::new(HttpConfig::default())
    }

    fn method_for(method: HttpMethod) -> reqwest::Method {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Flatten JSON params into query-string pairs.
///
/// Strings pass through as-is, numbers and booleans use their display
/// form, objects and arrays are carried as JSON text, and null params are
/// dropped entirely.
fn query_pairs(params: &serde_json::Map<String, Value>) -> Vec<(String, String)> {
    let mut pairs = Vec::with_capacity(params.len());
    for (key, value) in params {
        let rendered = match value {
            Value::Null => continue,
            Value::String(s) => s.clone(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            other => other.to_string(),
        };
        pairs.push((key.clone(), rendered));
    }
    pairs
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: RequestDescriptor) -> AdapterResult<ResponseEnvelope> {
        let context = RequestContext {
            method: request.method,
            url: request.url.clone(),
        };

        let mut builder = self
            .client
            .request(Self::method_for(request.method), &request.url)
            .header("Accept", &self.config.accept);

        for (name, value) in &self.config.default_headers {
            builder = builder.header(name, value);
        }
        for (name, value) in &request.options.headers {
            builder = builder.header(name, value);
        }

        let pairs = query_pairs(&request.options.params);
        if !pairs.is_empty() {
            builder = builder.query(&pairs);
        }

        if let Some(data) = &request.data {
            builder = builder
                .header("Content-Type", &self.config.content_type)
                .json(data);
        }

        if let Some(timeout) = request.options.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await.map_err(|e| {
            AdapterError::transport_with_source(
                format!("{} {} failed", context.method, context.url),
                e,
            )
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            AdapterError::transport_with_source(
                format!("failed to read response body from {}", context.url),
                e,
            )
        })?;

        if !status.is_success() {
            return Err(AdapterError::UnexpectedStatus {
                status: status.as_u16(),
                url: context.url,
                body,
            });
        }

        let data = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&body).map_err(|e| {
                AdapterError::transport_with_source(
                    format!("invalid JSON response from {}", context.url),
                    e,
                )
            })?
        };

        Ok(ResponseEnvelope {
            status: status.as_u16(),
            data,
            config: context,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(value: Value) -> serde_json::Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_query_pairs_scalars() {
        let pairs = query_pairs(&params(json!({
            "name": "ada",
            "page": 2,
            "active": true,
        })));

        assert!(pairs.contains(&("name".to_string(), "ada".to_string())));
        assert!(pairs.contains(&("page".to_string(), "2".to_string())));
        assert!(pairs.contains(&("active".to_string(), "true".to_string())));
    }

    #[test]
    fn test_query_pairs_objects_render_as_json() {
        let pairs = query_pairs(&params(json!({
            "query": {"where": {"active": true}},
        })));

        assert_eq!(
            pairs,
            vec![(
                "query".to_string(),
                "{\"where\":{\"active\":true}}".to_string()
            )]
        );
    }

    #[test]
    fn test_query_pairs_skip_null() {
        let pairs = query_pairs(&params(json!({"skip": null, "keep": 1})));
        assert_eq!(pairs, vec![("keep".to_string(), "1".to_string())]);
    }

    #[test]
    fn test_transport_rejects_invalid_config() {
        let err = ReqwestTransport::new(HttpConfig::new().with_read_timeout_secs(0)).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CONFIG");
    }
}
