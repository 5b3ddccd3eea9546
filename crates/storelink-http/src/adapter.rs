//! HTTP adapter implementation
//!
//! Implements the [`Adapter`] trait by building request descriptors and
//! delegating them to a pluggable [`Transport`]. All URL assembly routes
//! through [`ResourceConfig::url`]; all requests route through
//! [`HttpAdapter::http`], the single choke point that times the exchange
//! and applies the deserialize transform.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, instrument};

use storelink_adapter::config::ResourceConfig;
use storelink_adapter::error::AdapterResult;
use storelink_adapter::request::{HttpMethod, RequestDescriptor, RequestOptions};
use storelink_adapter::traits::{Adapter, Transport};
use storelink_adapter::transform::TransformPipeline;

/// Adapter that turns entity-access operations into HTTP requests.
///
/// Holds the transport and the transform pipeline by explicit
/// composition; both are fixed at construction and read-only while a
/// call is in flight. Each call is independent, so any number may run
/// concurrently.
pub struct HttpAdapter {
    transport: Arc<dyn Transport>,
    transforms: TransformPipeline,
}

impl std::fmt::Debug for HttpAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpAdapter")
            .field("transforms", &self.transforms)
            .finish_non_exhaustive()
    }
}

impl HttpAdapter {
    /// Create an adapter over the given transport with the default
    /// transform pipeline.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            transforms: TransformPipeline::default(),
        }
    }

    /// Replace the transform pipeline. Reconfigure before issuing
    /// requests, not mid-flight.
    pub fn with_transforms(mut self, transforms: TransformPipeline) -> Self {
        self.transforms = transforms;
        self
    }

    /// Execute a request. The single choke point: records a start
    /// timestamp, delegates to the transport, and on success emits a
    /// debug timing event and applies the deserialize transform. On
    /// failure the error propagates unchanged — no deserialize, no
    /// timing log, since the error envelope shape is not guaranteed to
    /// match a success envelope.
    pub async fn http(&self, request: RequestDescriptor) -> AdapterResult<Value> {
        let start = Instant::now();
        let envelope = self.transport.send(request).await?;
        debug!(
            method = %envelope.config.method,
            url = %envelope.config.url,
            status = envelope.status,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "request complete"
        );
        (self.transforms.deserialize)(envelope)
    }

    /// Issue a GET request.
    pub async fn get(
        &self,
        url: impl Into<String>,
        options: RequestOptions,
    ) -> AdapterResult<Value> {
        self.http(RequestDescriptor {
            url: url.into(),
            method: HttpMethod::Get,
            data: None,
            options,
        })
        .await
    }

    /// Issue a POST request with a JSON body.
    pub async fn post(
        &self,
        url: impl Into<String>,
        data: Value,
        options: RequestOptions,
    ) -> AdapterResult<Value> {
        self.http(RequestDescriptor {
            url: url.into(),
            method: HttpMethod::Post,
            data: Some(data),
            options,
        })
        .await
    }

    /// Issue a PUT request with a JSON body.
    pub async fn put(
        &self,
        url: impl Into<String>,
        data: Value,
        options: RequestOptions,
    ) -> AdapterResult<Value> {
        self.http(RequestDescriptor {
            url: url.into(),
            method: HttpMethod::Put,
            data: Some(data),
            options,
        })
        .await
    }

    /// Issue a DELETE request.
    pub async fn delete(
        &self,
        url: impl Into<String>,
        options: RequestOptions,
    ) -> AdapterResult<Value> {
        self.http(RequestDescriptor {
            url: url.into(),
            method: HttpMethod::Delete,
            data: None,
            options,
        })
        .await
    }

    /// Run the query transform on the options' `query` param when present
    /// and non-null. A null or absent query leaves the params untouched.
    fn apply_query_transform(&self, options: &mut RequestOptions) -> AdapterResult<()> {
        let has_query = options
            .params
            .get("query")
            .is_some_and(|query| !query.is_null());
        if has_query {
            if let Some(query) = options.params.remove("query") {
                let transformed = (self.transforms.query_transform)(query)?;
                options.params.insert("query".to_string(), transformed);
            }
        }
        Ok(())
    }
}

#[async_trait]
impl Adapter for HttpAdapter {
    #[instrument(skip(self, options))]
    async fn find(
        &self,
        resource: &ResourceConfig,
        id: &str,
        options: Option<RequestOptions>,
    ) -> AdapterResult<Value> {
        let options = options.unwrap_or_default();
        self.get(resource.url(Some(id)), options).await
    }

    #[instrument(skip(self, params, options))]
    async fn find_all(
        &self,
        resource: &ResourceConfig,
        params: Option<RequestOptions>,
        options: Option<RequestOptions>,
    ) -> AdapterResult<Value> {
        let mut options = options.unwrap_or_default();
        self.apply_query_transform(&mut options)?;
        if let Some(params) = params {
            options.merge_from(&params);
        }
        self.get(resource.url(None), options).await
    }

    #[instrument(skip(self, attrs, options))]
    async fn create(
        &self,
        resource: &ResourceConfig,
        attrs: Value,
        options: Option<RequestOptions>,
    ) -> AdapterResult<Value> {
        let options = options.unwrap_or_default();
        let body = (self.transforms.serialize)(attrs)?;
        self.post(resource.url(None), body, options).await
    }

    #[instrument(skip(self, attrs, options))]
    async fn update(
        &self,
        resource: &ResourceConfig,
        id: &str,
        attrs: Value,
        options: Option<RequestOptions>,
    ) -> AdapterResult<Value> {
        let options = options.unwrap_or_default();
        let body = (self.transforms.serialize)(attrs)?;
        self.put(resource.url(Some(id)), body, options).await
    }

    #[instrument(skip(self, options))]
    async fn destroy(
        &self,
        resource: &ResourceConfig,
        id: &str,
        options: Option<RequestOptions>,
    ) -> AdapterResult<Value> {
        let options = options.unwrap_or_default();
        self.delete(resource.url(Some(id)), options).await
    }

    #[instrument(skip(self, params, options))]
    async fn destroy_all(
        &self,
        resource: &ResourceConfig,
        params: Option<RequestOptions>,
        options: Option<RequestOptions>,
    ) -> AdapterResult<Value> {
        let mut options = options.unwrap_or_default();
        self.apply_query_transform(&mut options)?;
        if let Some(params) = params {
            options.merge_from(&params);
        }
        self.delete(resource.url(None), options).await
    }
}
