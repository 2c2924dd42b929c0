//! Login session token store.
//!
//! Successful form logins mint an opaque token so follow-up requests to the
//! version endpoint succeed without resubmitting the credential. Tokens are
//! short-lived and expiry is checked lazily on access; there is no background
//! sweeper.

use std::time::{Duration, Instant};

use dashmap::DashMap;
use uuid::Uuid;

/// Cookie carrying the login session token.
pub const SESSION_COOKIE: &str = "wondertools-session";

/// How long a minted session stays valid.
pub const SESSION_TTL: Duration = Duration::from_secs(15 * 60);

/// Concurrent map of session token → expiry instant.
#[derive(Debug)]
pub struct SessionStore {
    sessions: DashMap<String, Instant>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: DashMap::new(),
            ttl,
        }
    }

    /// Mint a fresh opaque token valid for the configured TTL.
    pub fn issue(&self) -> String {
        // Opportunistic cleanup keeps the map bounded without a sweeper task.
        self.purge_expired();
        let token = Uuid::new_v4().to_string();
        self.sessions.insert(token.clone(), Instant::now() + self.ttl);
        token
    }

    /// True iff `token` was issued here and has not expired. Expired tokens
    /// are removed on the way out.
    pub fn is_valid(&self, token: &str) -> bool {
        let Some(expiry) = self.sessions.get(token).map(|entry| *entry.value()) else {
            return false;
        };
        if expiry > Instant::now() {
            true
        } else {
            self.sessions.remove(token);
            false
        }
    }

    fn purge_expired(&self) {
        let now = Instant::now();
        self.sessions.retain(|_, expiry| *expiry > now);
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(SESSION_TTL)
    }
}
