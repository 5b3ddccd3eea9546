//! # Adapter Framework
//!
//! Core abstractions for translating generic entity-access operations
//! into requests against a remote resource collection.
//!
//! ## Architecture
//!
//! Two traits form the seams of the system:
//!
//! - [`Adapter`](traits::Adapter) - the CRUD contract the calling
//!   data-store layer consumes (find, `find_all`, create, update,
//!   destroy, `destroy_all`)
//! - [`Transport`](traits::Transport) - the collaborator that performs
//!   the actual network exchange
//!
//! Between them sits the [`TransformPipeline`](transform::TransformPipeline):
//! three user-overridable hooks (`serialize`, `deserialize`,
//! `query_transform`) applied at fixed points of every call.
//!
//! ## Crate Organization
//!
//! - [`config`] - Resource location (`ResourceConfig`) and URL assembly
//! - [`request`] - Request/response data model (`RequestDescriptor`,
//!   `ResponseEnvelope`, `RequestOptions`)
//! - [`transform`] - The transform pipeline and its defaults
//! - [`traits`] - The `Adapter` and `Transport` traits
//! - [`error`] - Error types with transient/permanent classification

pub mod config;
pub mod error;
pub mod request;
pub mod traits;
pub mod transform;

/// Prelude module for convenient imports.
///
/// ```
/// use storelink_adapter::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::ResourceConfig;
    pub use crate::error::{AdapterError, AdapterResult};
    pub use crate::request::{
        HttpMethod, RequestContext, RequestDescriptor, RequestOptions, ResponseEnvelope,
    };
    pub use crate::traits::{Adapter, Transport};
    pub use crate::transform::TransformPipeline;
}

// Re-export async_trait for adapter and transport implementors
pub use async_trait::async_trait;
