//! Configuration subsystem.
//!
//! # Data Flow
//! ```text
//! host startup closure
//!     → builder.rs (accumulate fields, entries, guard, options)
//!     → section.rs (flatten configuration subtrees into entries)
//!     → frozen DiagnosticsSnapshot + EndpointOptions + AccessGuard
//!     → shared via Arc with every request handler
//! ```
//!
//! # Design Decisions
//! - Configuration is immutable once built; there is no runtime mutation
//! - Builder calls never fail; absent fields are omitted from the output
//! - Entries are strictly last-write-wins in call order, whether they come
//!   from `key_value` or a section import

pub mod builder;
pub mod schema;
pub mod section;

pub use builder::{Inspector, InspectorBuilder};
pub use schema::EndpointOptions;
