//! Startup-time configuration of the inspector.
//!
//! The builder accumulates diagnostic fields, configuration-section imports,
//! an optional access guard, and routing options, then freezes everything
//! into the immutable state shared by the request handlers. No builder call
//! performs I/O and none can fail; unset fields are simply omitted from the
//! emitted JSON.

use std::sync::Arc;

use axum::Router;
use serde_json::Value;

use crate::config::schema::EndpointOptions;
use crate::config::section::flatten_section;
use crate::diagnostics::DiagnosticsSnapshot;
use crate::http::router::{build_router, InspectorState};
use crate::security::{AccessGuard, SessionStore};

/// Accumulates inspector configuration before the routes are built.
#[derive(Debug, Default)]
pub struct InspectorBuilder {
    environment: Option<String>,
    name: Option<String>,
    version: Option<String>,
    entries: Vec<(String, String)>,
    guard: Option<AccessGuard>,
    options: EndpointOptions,
}

impl InspectorBuilder {
    /// Deployment environment reported by the version endpoint. Last call
    /// wins.
    pub fn environment(&mut self, value: impl Into<String>) -> &mut Self {
        self.environment = Some(value.into());
        self
    }

    /// Product name reported by the version endpoint. Last call wins.
    pub fn name(&mut self, value: impl Into<String>) -> &mut Self {
        self.name = Some(value.into());
        self
    }

    /// Version string reported by the version endpoint. Last call wins.
    pub fn version(&mut self, value: impl Into<String>) -> &mut Self {
        self.version = Some(value.into());
        self
    }

    /// Append a free-form diagnostic entry. Entries keep call order; reusing
    /// a key overwrites the stored value in place.
    pub fn key_value(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.insert_entry(key.into(), value.into());
        self
    }

    /// Flatten the configuration subtree at `path` (colon-delimited, see
    /// [`flatten_section`]) and append each leaf as a diagnostic entry,
    /// under the same last-write-wins rule as [`Self::key_value`].
    pub fn configuration_section(&mut self, tree: &Value, path: &str) -> &mut Self {
        for (key, value) in flatten_section(tree, path) {
            self.insert_entry(key, value);
        }
        self
    }

    /// Mount the endpoints under `path` instead of the host root. The value
    /// is normalized to a leading slash and no trailing slash.
    pub fn base_endpoint(&mut self, path: impl Into<String>) -> &mut Self {
        self.options.base_path = normalize_base_path(&path.into());
        self
    }

    /// Require one of `secrets` (exact match) to access the version
    /// endpoint. Installing a guard replaces any previous one.
    pub fn authenticate_with_secrets<I, S>(&mut self, secrets: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.guard = Some(AccessGuard::secrets(secrets));
        self
    }

    /// Delegate the access decision to `predicate`. Installing a guard
    /// replaces any previous one.
    pub fn authenticate_with<F>(&mut self, predicate: F) -> &mut Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(AccessGuard::predicate(predicate));
        self
    }

    /// Refuse cross-origin requests to the version endpoint.
    pub fn restrict_cross_origin(&mut self) -> &mut Self {
        self.options.restrict_cross_origin = true;
        self
    }

    /// Freeze the accumulated configuration.
    pub fn build(self) -> Inspector {
        let snapshot =
            DiagnosticsSnapshot::new(self.environment, self.name, self.version, self.entries);
        Inspector {
            state: InspectorState {
                snapshot: Arc::new(snapshot),
                guard: self.guard,
                sessions: Arc::new(SessionStore::default()),
                options: self.options,
            },
        }
    }

    fn insert_entry(&mut self, key: String, value: String) {
        if let Some(entry) = self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }
}

/// A configured inspector ready to be mounted into a host router.
pub struct Inspector {
    state: InspectorState,
}

impl Inspector {
    /// Run `configure` against a fresh builder and freeze the result.
    pub fn build(configure: impl FnOnce(&mut InspectorBuilder)) -> Self {
        let mut builder = InspectorBuilder::default();
        configure(&mut builder);
        builder.build()
    }

    /// The frozen snapshot the version endpoint will serve.
    pub fn snapshot(&self) -> &DiagnosticsSnapshot {
        &self.state.snapshot
    }

    /// Routes to merge into the host router.
    pub fn into_router(self) -> Router {
        build_router(self.state)
    }
}

fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return String::new();
    }
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}
