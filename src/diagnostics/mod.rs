//! Diagnostic payload subsystem.

pub mod snapshot;

pub use snapshot::DiagnosticsSnapshot;
