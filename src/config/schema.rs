//! Endpoint configuration schema.
//!
//! Options controlling where the inspector routes are mounted and how
//! cross-origin requests are treated. All fields have defaults so a host can
//! deserialize a partial table from its own config file.

use serde::{Deserialize, Serialize};

/// Routing options for the inspector endpoints.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct EndpointOptions {
    /// Path prefix the routes are mounted under. Empty means the host root,
    /// so the version endpoint answers at `/version`.
    pub base_path: String,

    /// When true, cross-origin requests to the version endpoint are refused:
    /// no `Access-Control-Allow-Origin` header is emitted and preflight
    /// requests are rejected. When false (default), permissive CORS headers
    /// are attached.
    pub restrict_cross_origin: bool,
}
