//! Request and response types exchanged with the transport.
//!
//! A [`RequestDescriptor`] is built per call and consumed once by the
//! transport; a [`ResponseEnvelope`] comes back on success. Neither is
//! reused between calls, so every operation stays independent.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-supplied per-request configuration.
///
/// The typed replacement for an opaque options object: query parameters,
/// headers and a timeout get dedicated fields, anything else the transport
/// understands rides along in `extra`. Verb wrappers override only
/// `url`/`method`/`data` on the descriptor; everything here passes through
/// to the transport unmodified.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Query-string parameters. The `query` key is special-cased by
    /// `find_all`/`destroy_all`, which run it through the configured query
    /// transform before the request goes out.
    pub params: Map<String, Value>,

    /// Additional request headers.
    pub headers: HashMap<String, String>,

    /// Per-request timeout, passed through to the transport. The adapter
    /// adds no timeout semantics of its own.
    pub timeout: Option<Duration>,

    /// Transport-specific passthrough fields.
    pub extra: Map<String, Value>,
}

impl RequestOptions {
    /// Create empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a query-string parameter.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Set the `query` parameter, the input of the query transform.
    pub fn with_query(self, query: impl Into<Value>) -> Self {
        self.with_param("query", query)
    }

    /// Add a request header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Set a per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set a transport-specific passthrough field.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Deep-merge `other` into `self`, with `other` taking precedence.
    ///
    /// JSON objects are merged key-by-key recursively; scalars and arrays
    /// are replaced wholesale. Headers are inserted per key and the timeout
    /// is replaced when `other` carries one. `find_all`/`destroy_all` use
    /// this to fold their `params` argument into the call options, which
    /// means a `params` argument can overwrite sibling option fields such
    /// as headers when key names collide.
    pub fn merge_from(&mut self, other: &RequestOptions) {
        merge_map(&mut self.params, &other.params);
        for (name, value) in &other.headers {
            self.headers.insert(name.clone(), value.clone());
        }
        if other.timeout.is_some() {
            self.timeout = other.timeout;
        }
        merge_map(&mut self.extra, &other.extra);
    }
}

fn merge_map(target: &mut Map<String, Value>, incoming: &Map<String, Value>) {
    for (key, value) in incoming {
        match target.get_mut(key) {
            Some(existing) => merge_value(existing, value),
            None => {
                target.insert(key.clone(), value.clone());
            }
        }
    }
}

fn merge_value(target: &mut Value, incoming: &Value) {
    match (target, incoming) {
        (Value::Object(target), Value::Object(incoming)) => merge_map(target, incoming),
        (target, incoming) => *target = incoming.clone(),
    }
}

/// An HTTP request described as plain data.
///
/// Built by the adapter's verb wrappers and consumed exactly once by the
/// transport collaborator.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub url: String,
    pub method: HttpMethod,
    /// JSON request body, already serialized through the pipeline.
    pub data: Option<Value>,
    pub options: RequestOptions,
}

/// Request echo carried on a successful response, used by the timing log.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub method: HttpMethod,
    pub url: String,
}

/// The envelope a transport resolves with on success.
///
/// `data` holds the parsed response payload; the default deserialize
/// transform returns it unchanged. Failed exchanges never produce an
/// envelope, so error bodies never reach the deserialize transform.
#[derive(Debug, Clone)]
pub struct ResponseEnvelope {
    pub status: u16,
    pub data: Value,
    pub config: RequestContext,
}
