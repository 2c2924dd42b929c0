//! Immutable diagnostics snapshot.
//!
//! # Design Decisions
//! - Frozen at startup, shared via `Arc`, read concurrently without locks
//! - Entries keep insertion order; a duplicate key overwrites the stored
//!   value in place so the key keeps its original position
//! - Serialization order is fixed: `Environment`, `Name`, `Version`, then
//!   entries in insertion order; unset fields are omitted individually

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Diagnostic metadata served by the version endpoint.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticsSnapshot {
    environment: Option<String>,
    name: Option<String>,
    version: Option<String>,
    entries: Vec<(String, String)>,
}

impl DiagnosticsSnapshot {
    pub(crate) fn new(
        environment: Option<String>,
        name: Option<String>,
        version: Option<String>,
        entries: Vec<(String, String)>,
    ) -> Self {
        Self {
            environment,
            name,
            version,
            entries,
        }
    }

    pub fn environment(&self) -> Option<&str> {
        self.environment.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Free-form diagnostic entries in insertion order.
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }
}

impl Serialize for DiagnosticsSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if let Some(environment) = &self.environment {
            map.serialize_entry("Environment", environment)?;
        }
        if let Some(name) = &self.name {
            map.serialize_entry("Name", name)?;
        }
        if let Some(version) = &self.version {
            map.serialize_entry("Version", version)?;
        }
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
