//! Access guard for the version endpoint.
//!
//! # Design Decisions
//! - Fail closed: a missing credential is never authorized
//! - Secret comparison is exact (case-sensitive, no trimming)
//! - A panicking predicate denies the credential instead of poisoning the
//!   request pipeline with a 5xx that could leak guard internals

use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

/// Authorization strategy gating the version endpoint.
///
/// Absence of a guard (`Option<AccessGuard>::None` in the endpoint state)
/// means no authentication is required.
#[derive(Clone)]
pub enum AccessGuard {
    /// Any exact match against one of the configured secrets grants access.
    SharedSecrets(Vec<String>),
    /// A caller-supplied predicate over the presented credential.
    Predicate(Arc<dyn Fn(&str) -> bool + Send + Sync>),
}

impl AccessGuard {
    /// Guard accepting any of the given literal secrets.
    pub fn secrets<I, S>(secrets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::SharedSecrets(secrets.into_iter().map(Into::into).collect())
    }

    /// Guard delegating the decision to `predicate`.
    pub fn predicate<F>(predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self::Predicate(Arc::new(predicate))
    }

    /// Decide whether `credential` may reach the version endpoint.
    pub fn authorize(&self, credential: Option<&str>) -> bool {
        let Some(credential) = credential else {
            return false;
        };
        match self {
            Self::SharedSecrets(secrets) => secrets.iter().any(|secret| secret == credential),
            Self::Predicate(predicate) => {
                let predicate = Arc::clone(predicate);
                match catch_unwind(AssertUnwindSafe(|| predicate(credential))) {
                    Ok(decision) => decision,
                    Err(_) => {
                        tracing::warn!("access guard predicate panicked, denying credential");
                        false
                    }
                }
            }
        }
    }
}

// Never expose configured secrets through Debug output.
impl fmt::Debug for AccessGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SharedSecrets(secrets) => f
                .debug_struct("SharedSecrets")
                .field("count", &secrets.len())
                .finish(),
            Self::Predicate(_) => f.debug_struct("Predicate").finish_non_exhaustive(),
        }
    }
}
