//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → http::auth (extract credential: header or session cookie)
//!     → guard.rs (authorize, fail closed)
//!     → Pass to the version handler, or 401
//!
//! Form login:
//!     → guard.rs (authorize submitted password)
//!     → session.rs (mint short-lived token, set cookie)
//! ```
//!
//! # Design Decisions
//! - Fail closed: reject on any guard failure, including predicate panics
//! - No trust in client input; secrets never appear in logs or Debug output

pub mod guard;
pub mod session;

pub use guard::AccessGuard;
pub use session::SessionStore;
