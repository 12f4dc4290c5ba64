//! Structural comparator for API documents.
//!
//! # Architecture
//!
//! The diff system is built on traits for extensibility:
//!
//! - [`ChangeComputer`](traits::ChangeComputer): Trait for computing one area of changes
//! - Individual change computers in the [`changes`] module
//!
//! Endpoints are matched by [`EndpointKey`](crate::model::EndpointKey);
//! every shared endpoint is diffed independently, in parallel for large
//! documents.
//!
//! # Example
//!
//! ```
//! use api_compat::diff::DiffEngine;
//! use api_compat::model::{ApiSpec, Endpoint};
//!
//! let old = ApiSpec::default().with_endpoint(Endpoint::http("GET", "/api/users"));
//! let new = ApiSpec::default();
//! let changes = DiffEngine::new().compare(&old, &new);
//! assert_eq!(changes.len(), 1);
//! ```

pub mod changes;
mod engine;
mod engine_config;
pub mod traits;

pub use engine::{DiffEngine, EngineConfig};
pub use traits::{ChangeComputer, ChangeSet};
