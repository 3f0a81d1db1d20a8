//! Bounded memoization of [`compute_signature`].

use super::{compute_signature, Signature};
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Mutex;

/// Default number of memoized words
pub const DEFAULT_CACHE_SIZE: usize = 4096;

/// LRU cache of word -> signature.
///
/// Owned by whoever does the lookups (usually an [`crate::Unscrambler`]),
/// never shared process-wide. A capacity of 0 disables caching.
pub struct SignatureCache {
    entries: Option<Mutex<LruCache<String, Signature>>>,
}

impl SignatureCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: NonZeroUsize::new(capacity).map(|cap| Mutex::new(LruCache::new(cap))),
        }
    }

    /// Signature of `word`, computed at most once while it stays cached.
    pub fn get(&self, word: &str) -> Signature {
        let Some(entries) = &self.entries else {
            return compute_signature(word);
        };

        // A poisoned lock only means another thread panicked mid-insert; the
        // cached values are still correct.
        let mut entries = entries.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(&sig) = entries.get(word) {
            return sig;
        }
        let sig = compute_signature(word);
        entries.put(word.to_string(), sig);
        sig
    }

    /// Number of words currently cached
    pub fn len(&self) -> usize {
        self.entries
            .as_ref()
            .map(|e| e.lock().unwrap_or_else(|e| e.into_inner()).len())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.entries
            .as_ref()
            .map(|e| e.lock().unwrap_or_else(|e| e.into_inner()).cap().get())
            .unwrap_or(0)
    }
}

impl Default for SignatureCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_SIZE)
    }
}
