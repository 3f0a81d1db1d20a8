use crate::error::Result;
use crate::index::reader::IndexReader;
use crate::query::{LookupExecutor, LookupResult};
use crate::signature::{Signature, SignatureCache};
use crate::utils::AppConfig;
use std::path::Path;
use tracing::debug;

/// Looks up scrambled words in a signature index.
///
/// Holds the whole index in memory plus a bounded memo of word signatures.
/// The index never changes after construction, so one instance can be shared
/// across threads (`Arc<Unscrambler>`) without extra locking; the signature
/// memo has its own lock and never affects results. Rebuilding the index
/// means constructing a new `Unscrambler`.
pub struct Unscrambler {
    reader: IndexReader,
    signatures: SignatureCache,
}

impl Unscrambler {
    /// Load the index at `index_file` with the default cache size
    pub fn open(index_file: &Path) -> Result<Self> {
        Ok(Self::new(IndexReader::open(index_file)?, SignatureCache::default()))
    }

    /// Load the index chosen by `config`, or `index_file` when given
    pub fn with_config(config: &AppConfig, index_file: Option<&Path>) -> Result<Self> {
        let path = config.resolve_index_file(index_file)?;
        let reader = IndexReader::open(&path)?;
        debug!(capacity = config.signature_cache_size, "signature cache");
        Ok(Self::new(reader, SignatureCache::new(config.signature_cache_size)))
    }

    pub fn new(reader: IndexReader, signatures: SignatureCache) -> Self {
        Self { reader, signatures }
    }

    /// Signature of `word` (memoized)
    pub fn compute_signature(&self, word: &str) -> Signature {
        self.signatures.get(word)
    }

    /// Words with the same letters as `word`, plus up to `window_size`
    /// index neighbors on each side when `window_size > 0`.
    ///
    /// Values are `true` for exact anagrams and `false` for neighbors.
    pub fn lookup(&self, word: &str, window_size: usize) -> LookupResult {
        self.lookup_by_signature(self.compute_signature(word), window_size)
    }

    /// Same as [`Unscrambler::lookup`] for an already computed signature
    pub fn lookup_by_signature(&self, sig: Signature, window_size: usize) -> LookupResult {
        LookupExecutor::new(&self.reader).lookup_by_signature(sig, window_size)
    }

    pub fn reader(&self) -> &IndexReader {
        &self.reader
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::DEFAULT_WINDOW_SIZE;
    use std::io::Cursor;

    fn unscrambler(words: &[&str]) -> Unscrambler {
        let words: Vec<String> = words.iter().map(|w| w.to_string()).collect();
        let (writer, _) = crate::index::build::index_words(&words);
        let mut buf = Vec::new();
        writer.write_to(&mut buf).unwrap();
        let reader = IndexReader::from_reader(Cursor::new(buf), Path::new("mem")).unwrap();
        Unscrambler::new(reader, SignatureCache::new(16))
    }

    #[test]
    fn test_lookup_exact() {
        let u = unscrambler(&["encyclopedia", "stop", "pots", "test"]);
        let result = u.lookup("eanycleocipd", 0);
        assert_eq!(result.len(), 1);
        assert_eq!(result.get("encyclopedia"), Some(&true));
    }

    #[test]
    fn test_lookup_anagram_class() {
        let u = unscrambler(&["encyclopedia", "stop", "pots", "test", "tops"]);
        let result = u.lookup("spot", 0);
        let words: Vec<_> = result.keys().map(String::as_str).collect();
        assert_eq!(words, vec!["stop", "pots", "tops"]);
        assert!(result.values().all(|&exact| exact));
    }

    #[test]
    fn test_lookup_default_window_includes_neighbors() {
        let u = unscrambler(&["encyclopedia", "stop", "test", "apple"]);
        let result = u.lookup("tset", DEFAULT_WINDOW_SIZE);
        assert_eq!(result.len(), 4);
        assert_eq!(result.get("test"), Some(&true));
        assert_eq!(result.values().filter(|&&exact| exact).count(), 1);
    }

    #[test]
    fn test_signature_matches_free_function() {
        let u = unscrambler(&["test"]);
        assert_eq!(u.compute_signature("teste"), crate::compute_signature("teste"));
        assert_eq!(u.compute_signature("teste"), crate::compute_signature("teste"));
    }
}
