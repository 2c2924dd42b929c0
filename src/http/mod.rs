//! HTTP endpoint subsystem.
//!
//! # Data Flow
//! ```text
//! host request
//!     → router.rs (path match under base path; unmatched falls through)
//!     → auth.rs (session cookie or credential header, 401 on failure)
//!     → handlers.rs (serialize snapshot / render login form)
//! ```

pub mod auth;
pub mod handlers;
pub mod router;

pub use auth::AUTHORIZATION_HEADER;
pub use router::{InspectorExt, InspectorState};
