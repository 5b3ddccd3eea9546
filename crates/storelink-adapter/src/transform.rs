//! Request/response transform pipeline.
//!
//! Three user-overridable hooks sit between the operation layer and the
//! transport: `serialize` shapes an outgoing payload, `deserialize` pulls
//! the payload out of a successful response envelope, and
//! `query_transform` rewrites a query object into whatever the server
//! expects. All three are pure, synchronous data transforms; an error
//! returned by one fails the enclosing call unchanged.

use serde_json::Value;

use crate::error::AdapterResult;
use crate::request::ResponseEnvelope;

/// Serializes an outgoing payload before it becomes a request body.
pub type SerializeFn = Box<dyn Fn(Value) -> AdapterResult<Value> + Send + Sync>;

/// Extracts the payload from a successful response envelope.
pub type DeserializeFn = Box<dyn Fn(ResponseEnvelope) -> AdapterResult<Value> + Send + Sync>;

/// Rewrites a query object into the server-specific representation.
pub type QueryTransformFn = Box<dyn Fn(Value) -> AdapterResult<Value> + Send + Sync>;

/// The adapter's transform hooks.
///
/// Configured once before requests are issued and read-only while a call
/// is in flight. Fields are public so callers can reassign individual
/// hooks, mirroring how the builder methods work:
///
/// ```
/// use storelink_adapter::transform::TransformPipeline;
/// use serde_json::json;
///
/// let pipeline = TransformPipeline::default()
///     .with_serialize(|data| Ok(json!({ "record": data })));
/// ```
pub struct TransformPipeline {
    /// Called exactly once on the attrs of a create/update before the
    /// request body is attached. Default: identity.
    pub serialize: SerializeFn,

    /// Called exactly once on every successful response envelope, and
    /// never on a failed one. Default: extracts the envelope's `data`.
    pub deserialize: DeserializeFn,

    /// Called once on the `query` entry of the call's params when present
    /// and non-null; absent queries are left untouched. Default: identity.
    pub query_transform: QueryTransformFn,
}

impl Default for TransformPipeline {
    fn default() -> Self {
        Self {
            serialize: Box::new(Ok),
            deserialize: Box::new(|envelope| Ok(envelope.data)),
            query_transform: Box::new(Ok),
        }
    }
}

impl std::fmt::Debug for TransformPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransformPipeline").finish_non_exhaustive()
    }
}

impl TransformPipeline {
    /// Create a pipeline with the default hooks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the serialize hook.
    pub fn with_serialize<F>(mut self, serialize: F) -> Self
    where
        F: Fn(Value) -> AdapterResult<Value> + Send + Sync + 'static,
    {
        self.serialize = Box::new(serialize);
        self
    }

    /// Replace the deserialize hook.
    pub fn with_deserialize<F>(mut self, deserialize: F) -> Self
    where
        F: Fn(ResponseEnvelope) -> AdapterResult<Value> + Send + Sync + 'static,
    {
        self.deserialize = Box::new(deserialize);
        self
    }

    /// Replace the query transform hook.
    pub fn with_query_transform<F>(mut self, query_transform: F) -> Self
    where
        F: Fn(Value) -> AdapterResult<Value> + Send + Sync + 'static,
    {
        self.query_transform = Box::new(query_transform);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AdapterError;
    use crate::request::{HttpMethod, RequestContext};
    use serde_json::json;

    fn envelope(data: Value) -> ResponseEnvelope {
        ResponseEnvelope {
            status: 200,
            data,
            config: RequestContext {
                method: HttpMethod::Get,
                url: "http://api.example.com/users".to_string(),
            },
        }
    }

    #[test]
    fn test_default_serialize_is_identity() {
        let pipeline = TransformPipeline::default();
        let attrs = json!({"name": "Ada"});
        assert_eq!((pipeline.serialize)(attrs.clone()).unwrap(), attrs);
    }

    #[test]
    fn test_default_deserialize_extracts_data() {
        let pipeline = TransformPipeline::default();
        let payload = json!([{"id": 1}, {"id": 2}]);
        let result = (pipeline.deserialize)(envelope(payload.clone())).unwrap();
        assert_eq!(result, payload);
    }

    #[test]
    fn test_default_query_transform_is_identity() {
        let pipeline = TransformPipeline::default();
        let query = json!({"where": {"active": true}});
        assert_eq!((pipeline.query_transform)(query.clone()).unwrap(), query);
    }

    #[test]
    fn test_custom_hooks() {
        let pipeline = TransformPipeline::default()
            .with_serialize(|data| Ok(json!({ "record": data })))
            .with_deserialize(|envelope| Ok(json!({ "payload": envelope.data })))
            .with_query_transform(|query| Ok(json!({ "q": query })));

        assert_eq!(
            (pipeline.serialize)(json!({"a": 1})).unwrap(),
            json!({"record": {"a": 1}})
        );
        assert_eq!(
            (pipeline.deserialize)(envelope(json!(7))).unwrap(),
            json!({"payload": 7})
        );
        assert_eq!(
            (pipeline.query_transform)(json!("abc")).unwrap(),
            json!({"q": "abc"})
        );
    }

    #[test]
    fn test_hook_errors_surface_unchanged() {
        let pipeline = TransformPipeline::default()
            .with_serialize(|_| Err(AdapterError::transform("serialize", "rejected")));

        let err = (pipeline.serialize)(json!({})).unwrap_err();
        assert_eq!(err.error_code(), "TRANSFORM_FAILED");
        assert_eq!(err.to_string(), "serialize transform failed: rejected");
    }
}
