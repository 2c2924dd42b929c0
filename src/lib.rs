//! Diagnostics/version endpoint middleware for Axum applications.
//!
//! Mounts a JSON endpoint describing build/environment metadata into a host
//! router, optionally gated by a shared-secret or predicate guard with a
//! companion login form.
//!
//! ```no_run
//! use axum::Router;
//! use version_inspector::InspectorExt;
//!
//! let app: Router = Router::new().with_inspector(|x| {
//!     x.environment("development")
//!         .name("Inspector Usage Sample")
//!         .version("1.0.0")
//!         .key_value("Some Key", "Some Value");
//! });
//! ```

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod http;
pub mod security;

pub use config::builder::{Inspector, InspectorBuilder};
pub use config::schema::EndpointOptions;
pub use diagnostics::DiagnosticsSnapshot;
pub use error::InspectorError;
pub use http::{InspectorExt, AUTHORIZATION_HEADER};
pub use security::AccessGuard;
