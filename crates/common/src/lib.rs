/**
 * Credential gate built on top of the document store.
 *  Handles one-time bootstrap and stateless verification
 *  of the single admin password.
 */
pub mod auth;
/**
 * The document model: the single persisted object holding
 *  the credential hash and the snippet collection, plus
 *  shape recovery for legacy/malformed on-disk data and
 *  write-time validation.
 */
pub mod document;
/**
 * Client-held session state machine. Decides which of
 *  {bootstrapping, locked, shared, admin} governs a view
 *  and which operations are permitted.
 */
pub mod session;
/**
 * Storage layer implementation.
 *  Durable whole-document read/write against a single
 *  JSON file, replace-on-save.
 */
pub mod store;
/**
 * Helper for setting build version information
 *  at compile time.
 */
pub mod version;
/**
 * Capability-scoped views: derive the snippet subset
 *  visible to a caller from the full collection, an
 *  optional share id-set, and the authentication state.
 */
pub mod view;

pub mod prelude {
    pub use crate::auth::{AuthError, AuthGate};
    pub use crate::document::{Document, Snippet, SnippetLimits, Source, ValidationError};
    pub use crate::session::{SessionState, ViewMode};
    pub use crate::store::{DocumentStore, StoreError};
    pub use crate::version::build_info;
}
