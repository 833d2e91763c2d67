//! Server-side record of which refresh tokens are still usable.
//!
//! A refresh token is accepted by `/refresh` only while it is in the registry,
//! regardless of whether its signature and expiry are still valid. Logout
//! removes it; expired entries are dropped by [`RefreshTokenRegistry::retain`].

use std::collections::HashSet;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Concurrency-safe set of active refresh tokens.
///
/// Cloning is cheap and every clone shares the same set.
#[derive(Debug, Clone, Default)]
pub struct RefreshTokenRegistry {
    inner: Arc<RwLock<HashSet<String>>>,
}

impl RefreshTokenRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `token` as active. Registering it twice is a no-op.
    pub fn register(&self, token: impl Into<String>) {
        self.write().insert(token.into());
    }

    pub fn is_active(&self, token: &str) -> bool {
        self.read().contains(token)
    }

    /// Revokes `token`. Returns whether it was active; revoking an unknown
    /// token is not an error.
    pub fn revoke(&self, token: &str) -> bool {
        self.write().remove(token)
    }

    /// Replaces `old` with `new` in one step.
    ///
    /// Returns `false` without registering `new` if `old` is no longer active,
    /// e.g. because a logout won the race.
    pub fn rotate(&self, old: &str, new: impl Into<String>) -> bool {
        let mut tokens = self.write();
        if !tokens.remove(old) {
            return false;
        }
        tokens.insert(new.into());
        true
    }

    /// Keeps only the tokens for which `keep` returns true and reports how
    /// many were dropped.
    pub fn retain<F>(&self, mut keep: F) -> usize
    where
        F: FnMut(&str) -> bool,
    {
        let mut tokens = self.write();
        let before = tokens.len();
        tokens.retain(|token| keep(token.as_str()));
        before - tokens.len()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // Poisoning is ignored; a panicking writer cannot leave the set itself corrupt.
    fn read(&self) -> RwLockReadGuard<'_, HashSet<String>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashSet<String>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}
