use common::auth::AuthGate;
use common::document::SnippetLimits;
use common::store::DocumentStore;

use super::config::Config;
use super::sessions::SessionRegistry;

/// Main service state - wires the document store, the credential gate,
/// and the issued-token registry together. Every request routes through
/// this so alternate storage backends only touch the store construction.
#[derive(Clone)]
pub struct State {
    store: DocumentStore,
    gate: AuthGate,
    sessions: SessionRegistry,
    limits: SnippetLimits,
}

impl State {
    pub fn from_config(config: &Config) -> Self {
        let store =
            DocumentStore::new(&config.data_path).with_access_guard(config.write_access_guard);

        // Deployment hardening, not part of the data contract; failure is
        // logged inside and never fatal.
        store.ensure_access_guard();

        tracing::info!(path = %config.data_path.display(), "document store ready");

        let gate = AuthGate::new(store.clone());

        Self {
            store,
            gate,
            sessions: SessionRegistry::new(),
            limits: config.limits,
        }
    }

    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    pub fn gate(&self) -> &AuthGate {
        &self.gate
    }

    pub fn sessions(&self) -> &SessionRegistry {
        &self.sessions
    }

    pub fn limits(&self) -> &SnippetLimits {
        &self.limits
    }
}
