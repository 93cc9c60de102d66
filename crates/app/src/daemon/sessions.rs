use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

/// Tokens issued by setup/verify live this long.
pub const TOKEN_TTL: Duration = Duration::hours(12);

/// In-memory registry of the bearer tokens handed out by
/// `setup_password`/`verify_password` and required by `save_data`.
///
/// Expired entries are pruned on access. Restarting the daemon forgets
/// every token, which is acceptable for a single-operator deployment: the
/// operator just logs in again.
#[derive(Debug, Clone, Default)]
pub struct SessionRegistry {
    tokens: Arc<Mutex<HashMap<Uuid, OffsetDateTime>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a fresh token.
    pub fn issue(&self) -> Uuid {
        let token = Uuid::new_v4();
        let now = OffsetDateTime::now_utc();
        let mut tokens = self.tokens.lock();
        tokens.retain(|_, expires_at| *expires_at > now);
        tokens.insert(token, now + TOKEN_TTL);
        token
    }

    /// True iff the token was issued by this process and has not expired.
    pub fn validate(&self, token: &Uuid) -> bool {
        let now = OffsetDateTime::now_utc();
        let mut tokens = self.tokens.lock();
        tokens.retain(|_, expires_at| *expires_at > now);
        tokens.contains_key(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_tokens_validate() {
        let registry = SessionRegistry::new();
        let token = registry.issue();
        assert!(registry.validate(&token));
    }

    #[test]
    fn unknown_tokens_do_not() {
        let registry = SessionRegistry::new();
        registry.issue();
        assert!(!registry.validate(&Uuid::new_v4()));
    }

    #[test]
    fn registries_are_independent() {
        let a = SessionRegistry::new();
        let b = SessionRegistry::new();
        let token = a.issue();
        assert!(!b.validate(&token));
    }
}
