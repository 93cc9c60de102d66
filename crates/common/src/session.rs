//! Client-held session state.
//!
//! Three mutually exclusive steady states govern what a client renders and
//! which operations it offers: locked, shared-link viewer, and admin. A
//! fourth transient state, bootstrapping, precedes all of them on a fresh
//! deployment and can only exit through a successful bootstrap.

use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// The server reported no credential; nothing else applies until
    /// bootstrap succeeds.
    Bootstrapping,
    /// No trust flag, no share ids: nothing is visible.
    Locked,
    /// Share ids are present in the request context; read-only regardless
    /// of the trust flag.
    Shared,
    /// Trust flag set and no share filter; full collection, writes offered.
    Admin,
}

#[derive(Debug, Clone)]
pub struct SessionState {
    mode: ViewMode,
    trusted: bool,
    share_ids: Vec<String>,
}

impl SessionState {
    /// Compute the state once at process start from the server's setup
    /// report, the client's persisted trust flag, and any share ids carried
    /// by the inbound request.
    pub fn resolve(needs_setup: bool, trusted: bool, share_ids: Option<Vec<String>>) -> Self {
        let share_ids = share_ids.unwrap_or_default();
        let mode = if needs_setup {
            ViewMode::Bootstrapping
        } else if !share_ids.is_empty() {
            ViewMode::Shared
        } else if trusted {
            ViewMode::Admin
        } else {
            ViewMode::Locked
        };
        Self {
            mode,
            trusted,
            share_ids,
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// The trust flag itself. In `Shared` mode this tells whether dropping
    /// the share filter would land in `Admin` rather than `Locked`.
    pub fn is_authenticated(&self) -> bool {
        self.trusted
    }

    /// Write operations are offered in `Admin` only.
    pub fn may_write(&self) -> bool {
        self.mode == ViewMode::Admin
    }

    /// The share id set for capability filtering, if any.
    pub fn requested_ids(&self) -> Option<HashSet<String>> {
        if self.share_ids.is_empty() {
            None
        } else {
            Some(self.share_ids.iter().cloned().collect())
        }
    }

    /// A successful verify grants trust and discards any share filter so
    /// the admin sees the full collection.
    pub fn verify_succeeded(&mut self) {
        self.trusted = true;
        self.share_ids.clear();
        self.mode = ViewMode::Admin;
    }

    /// A successful bootstrap moves `Bootstrapping` straight to `Admin`.
    pub fn bootstrap_succeeded(&mut self) {
        if self.mode == ViewMode::Bootstrapping {
            self.trusted = true;
            self.mode = ViewMode::Admin;
        }
    }

    /// Clears the trust flag; no server call is involved.
    pub fn logout(&mut self) {
        self.trusted = false;
        self.share_ids.clear();
        self.mode = ViewMode::Locked;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(set: &[&str]) -> Option<Vec<String>> {
        Some(set.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn resolution_matrix() {
        assert_eq!(
            SessionState::resolve(true, true, ids(&["a"])).mode(),
            ViewMode::Bootstrapping
        );
        assert_eq!(
            SessionState::resolve(false, false, None).mode(),
            ViewMode::Locked
        );
        assert_eq!(
            SessionState::resolve(false, false, ids(&["a"])).mode(),
            ViewMode::Shared
        );
        assert_eq!(
            SessionState::resolve(false, true, ids(&["a"])).mode(),
            ViewMode::Shared
        );
        assert_eq!(
            SessionState::resolve(false, true, None).mode(),
            ViewMode::Admin
        );
    }

    #[test]
    fn verify_discards_share_filter() {
        let mut session = SessionState::resolve(false, false, ids(&["a", "b"]));
        assert_eq!(session.mode(), ViewMode::Shared);
        assert!(!session.may_write());

        session.verify_succeeded();
        assert_eq!(session.mode(), ViewMode::Admin);
        assert!(session.requested_ids().is_none());
        assert!(session.may_write());
    }

    #[test]
    fn bootstrap_only_exits_bootstrapping() {
        let mut session = SessionState::resolve(true, false, None);
        session.bootstrap_succeeded();
        assert_eq!(session.mode(), ViewMode::Admin);

        let mut locked = SessionState::resolve(false, false, None);
        locked.bootstrap_succeeded();
        assert_eq!(locked.mode(), ViewMode::Locked);
    }

    #[test]
    fn logout_clears_trust_and_filter() {
        let mut session = SessionState::resolve(false, true, None);
        session.logout();
        assert_eq!(session.mode(), ViewMode::Locked);
        assert!(!session.is_authenticated());
        assert!(session.requested_ids().is_none());
    }

    #[test]
    fn shared_mode_remembers_trust() {
        let session = SessionState::resolve(false, true, ids(&["a"]));
        assert_eq!(session.mode(), ViewMode::Shared);
        assert!(session.is_authenticated());
        assert!(!session.may_write());
    }
}
