//! # HTTP Adapter
//!
//! An [`Adapter`](storelink_adapter::traits::Adapter) implementation that
//! translates entity-access operations into HTTP requests against a REST
//! backend:
//!
//! - `find` / `find_all` → GET
//! - `create` → POST
//! - `update` → PUT
//! - `destroy` / `destroy_all` → DELETE
//!
//! Every request passes through [`HttpAdapter::http`], which times the
//! exchange and applies the deserialize transform. The actual network
//! work is delegated to a [`Transport`](storelink_adapter::traits::Transport);
//! [`ReqwestTransport`] is the default implementation.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use storelink_adapter::prelude::*;
//! use storelink_http::{HttpAdapter, HttpConfig, ReqwestTransport};
//!
//! # async fn run() -> AdapterResult<()> {
//! let transport = Arc::new(ReqwestTransport::new(HttpConfig::default())?);
//! let adapter = HttpAdapter::new(transport);
//!
//! let users = ResourceConfig::new("https://api.example.com").with_endpoint("users");
//! let user = adapter.find(&users, "42", None).await?;
//! # let _ = user;
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod config;
pub mod transport;

pub use adapter::HttpAdapter;
pub use config::HttpConfig;
pub use transport::ReqwestTransport;
