//! Adapter framework traits
//!
//! Two seams: [`Transport`] is the collaborator that performs the actual
//! network exchange, and [`Adapter`] is the contract the calling
//! data-store layer consumes.

use async_trait::async_trait;
use serde_json::Value;

use crate::config::ResourceConfig;
use crate::error::{AdapterError, AdapterResult};
use crate::request::{RequestDescriptor, RequestOptions, ResponseEnvelope};

/// The external collaborator that carries out HTTP exchanges.
///
/// Accepts a [`RequestDescriptor`] and resolves with a
/// [`ResponseEnvelope`] on success. Failure — a network error or a
/// non-success status, per the implementation's convention — surfaces as
/// `Err` and is propagated by the adapter unchanged: no retry, no
/// deserialize. Cancellation and timeout semantics belong entirely to the
/// implementation; the adapter only passes the `timeout` option through.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute a single request.
    async fn send(&self, request: RequestDescriptor) -> AdapterResult<ResponseEnvelope>;
}

/// Entity-access operations exposed to the calling data-store layer.
///
/// Every operation takes the [`ResourceConfig`] describing where the
/// collection lives and optional per-request options; `None` options are
/// replaced with empty ones before any merging, so callers never guard.
/// Calls are independent and may run concurrently; results resolve in
/// whatever order the transport completes them.
#[async_trait]
pub trait Adapter: Send + Sync {
    /// Retrieve a single entity. Sends a GET to `base_url/endpoint/id`.
    async fn find(
        &self,
        resource: &ResourceConfig,
        id: &str,
        options: Option<RequestOptions>,
    ) -> AdapterResult<Value>;

    /// Retrieve a collection. Sends a GET to `base_url/endpoint`.
    ///
    /// When the call options carry a non-null `query` param it is run
    /// through the query transform first; `params` is then deep-merged
    /// into the options, `params` winning on conflicts.
    async fn find_all(
        &self,
        resource: &ResourceConfig,
        params: Option<RequestOptions>,
        options: Option<RequestOptions>,
    ) -> AdapterResult<Value>;

    /// Create an entity. Sends a POST to `base_url/endpoint` with the
    /// serialized attrs as body.
    async fn create(
        &self,
        resource: &ResourceConfig,
        attrs: Value,
        options: Option<RequestOptions>,
    ) -> AdapterResult<Value>;

    /// Batch create. Intentionally unsupported: fails with
    /// [`AdapterError::NotImplemented`] without contacting the transport.
    async fn create_many(
        &self,
        resource: &ResourceConfig,
        attrs: Value,
        options: Option<RequestOptions>,
    ) -> AdapterResult<Value> {
        let _ = (resource, attrs, options);
        Err(AdapterError::not_implemented("create_many"))
    }

    /// Update an entity. Sends a PUT to `base_url/endpoint/id` with the
    /// serialized attrs as body.
    async fn update(
        &self,
        resource: &ResourceConfig,
        id: &str,
        attrs: Value,
        options: Option<RequestOptions>,
    ) -> AdapterResult<Value>;

    /// Batch update. Intentionally unsupported: fails with
    /// [`AdapterError::NotImplemented`] without contacting the transport.
    async fn update_many(
        &self,
        resource: &ResourceConfig,
        attrs: Value,
        options: Option<RequestOptions>,
    ) -> AdapterResult<Value> {
        let _ = (resource, attrs, options);
        Err(AdapterError::not_implemented("update_many"))
    }

    /// Delete a single entity. Sends a DELETE to `base_url/endpoint/id`.
    async fn destroy(
        &self,
        resource: &ResourceConfig,
        id: &str,
        options: Option<RequestOptions>,
    ) -> AdapterResult<Value>;

    /// Delete a collection. Sends a DELETE to `base_url/endpoint` with
    /// the same query-transform-then-merge handling as `find_all`.
    async fn destroy_all(
        &self,
        resource: &ResourceConfig,
        params: Option<RequestOptions>,
        options: Option<RequestOptions>,
    ) -> AdapterResult<Value>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // Minimal adapter that answers every supported operation with Null,
    // used to exercise the default batch-operation methods.
    struct NullAdapter;

    #[async_trait]
    impl Adapter for NullAdapter {
        async fn find(
            &self,
            _resource: &ResourceConfig,
            _id: &str,
            _options: Option<RequestOptions>,
        ) -> AdapterResult<Value> {
            Ok(Value::Null)
        }

        async fn find_all(
            &self,
            _resource: &ResourceConfig,
            _params: Option<RequestOptions>,
            _options: Option<RequestOptions>,
        ) -> AdapterResult<Value> {
            Ok(Value::Null)
        }

        async fn create(
            &self,
            _resource: &ResourceConfig,
            _attrs: Value,
            _options: Option<RequestOptions>,
        ) -> AdapterResult<Value> {
            Ok(Value::Null)
        }

        async fn update(
            &self,
            _resource: &ResourceConfig,
            _id: &str,
            _attrs: Value,
            _options: Option<RequestOptions>,
        ) -> AdapterResult<Value> {
            Ok(Value::Null)
        }

        async fn destroy(
            &self,
            _resource: &ResourceConfig,
            _id: &str,
            _options: Option<RequestOptions>,
        ) -> AdapterResult<Value> {
            Ok(Value::Null)
        }

        async fn destroy_all(
            &self,
            _resource: &ResourceConfig,
            _params: Option<RequestOptions>,
            _options: Option<RequestOptions>,
        ) -> AdapterResult<Value> {
            Ok(Value::Null)
        }
    }

    #[tokio::test]
    async fn test_batch_operations_default_to_not_implemented() {
        let adapter = NullAdapter;
        let resource = ResourceConfig::new("http://api.example.com").with_endpoint("users");

        let err = adapter
            .create_many(&resource, json!([{"name": "Ada"}]), None)
            .await
            .unwrap_err();
        assert!(matches!(err, AdapterError::NotImplemented { .. }));

        let err = adapter
            .update_many(&resource, json!([{"name": "Ada"}]), None)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "update_many is not implemented");
    }
}
