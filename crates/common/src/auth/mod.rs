//! The credential gate: one-time bootstrap and stateless verification of
//! the single admin password.
//!
//! The stored credential is `v1$<salt-hex>$<sha256-hex>` where the digest
//! covers salt followed by the password bytes. Verification recomputes the
//! digest and compares in constant time. The gate issues no server-side
//! session of its own; callers re-assert trust per privileged action.

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::document::Document;
use crate::store::{DocumentStore, StoreError};

const SALT_SIZE: usize = 16;
const HASH_SCHEME: &str = "v1";

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("password must not be empty")]
    EmptyCredential,
    #[error("a password has already been set")]
    AlreadyBootstrapped,
    #[error("no password has been set yet")]
    NoCredential,
    #[error("password mismatch")]
    Mismatch,
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone)]
pub struct AuthGate {
    store: DocumentStore,
}

impl AuthGate {
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }

    /// True iff the document carries no usable credential. Pure query.
    pub fn needs_setup(document: &Document) -> bool {
        document
            .meta
            .password_hash
            .as_deref()
            .map_or(true, |hash| hash.is_empty())
    }

    /// Establish the credential. Allowed exactly once per document
    /// lifetime; this is the only path that ever sets the hash.
    pub fn bootstrap(&self, candidate: &str) -> Result<(), AuthError> {
        if candidate.is_empty() {
            return Err(AuthError::EmptyCredential);
        }
        let mut document = self.store.load();
        if !Self::needs_setup(&document) {
            return Err(AuthError::AlreadyBootstrapped);
        }
        document.meta.password_hash = Some(hash_password(candidate));
        self.store.save(&document)?;
        Ok(())
    }

    /// Check a candidate against the stored credential. Never mutates the
    /// document.
    pub fn verify(&self, candidate: &str) -> Result<(), AuthError> {
        let document = self.store.load();
        let stored = document
            .meta
            .password_hash
            .as_deref()
            .filter(|hash| !hash.is_empty())
            .ok_or(AuthError::NoCredential)?;
        if verify_password(candidate, stored) {
            Ok(())
        } else {
            Err(AuthError::Mismatch)
        }
    }
}

fn hash_password(password: &str) -> String {
    let mut salt = [0u8; SALT_SIZE];
    getrandom::getrandom(&mut salt).expect("failed to generate random bytes");
    format!(
        "{}${}${}",
        HASH_SCHEME,
        hex::encode(salt),
        hex::encode(digest(&salt, password))
    )
}

fn digest(salt: &[u8], password: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hasher.finalize().into()
}

fn verify_password(candidate: &str, stored: &str) -> bool {
    let mut parts = stored.splitn(3, '$');
    let (Some(scheme), Some(salt_hex), Some(digest_hex)) =
        (parts.next(), parts.next(), parts.next())
    else {
        return false;
    };
    if scheme != HASH_SCHEME {
        return false;
    }
    let Ok(salt) = hex::decode(salt_hex) else {
        return false;
    };
    let Ok(expected) = hex::decode(digest_hex) else {
        return false;
    };
    let actual = digest(&salt, candidate);
    expected.as_slice().ct_eq(&actual).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_round_trip() {
        let stored = hash_password("hunter2");
        assert!(verify_password("hunter2", &stored));
        assert!(!verify_password("hunter3", &stored));
        assert!(!verify_password("", &stored));
    }

    #[test]
    fn hashes_are_salted() {
        assert_ne!(hash_password("same"), hash_password("same"));
    }

    #[test]
    fn malformed_stored_hash_never_verifies() {
        assert!(!verify_password("x", ""));
        assert!(!verify_password("x", "v1$zz"));
        assert!(!verify_password("x", "v2$00$11"));
        assert!(!verify_password("x", "v1$nothex$nothex"));
    }
}
