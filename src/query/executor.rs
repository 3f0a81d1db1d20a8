use crate::index::reader::IndexReader;
use crate::index::types::format_signature;
use crate::query::window::ScanWindow;
use crate::signature::Signature;
use indexmap::IndexMap;
use tracing::debug;

/// Word -> whether it is an exact anagram (`true`) or a positional
/// neighbor (`false`). Iteration follows index order.
pub type LookupResult = IndexMap<String, bool>;

/// Runs signature lookups against a loaded index
pub struct LookupExecutor<'a> {
    reader: &'a IndexReader,
}

impl<'a> LookupExecutor<'a> {
    pub fn new(reader: &'a IndexReader) -> Self {
        Self { reader }
    }

    /// Collect the words around `sig`.
    ///
    /// Every position in the [`ScanWindow`] contributes when `window_size`
    /// is non-zero; with a zero window only a position whose signature equals
    /// `sig` does. An empty result means nothing matched.
    pub fn lookup_by_signature(&self, sig: Signature, window_size: usize) -> LookupResult {
        let (found, location) = self.reader.search(sig);
        let window = ScanWindow::new(location, window_size, self.reader.len());

        let mut result = LookupResult::new();
        for pos in window.range() {
            let Some(pos_sig) = self.reader.signature_at(pos) else {
                continue;
            };
            let exact = pos_sig == sig;
            if window_size == 0 && !exact {
                continue;
            }
            for word in self.reader.words_at(pos) {
                result.insert(word.to_string(), exact);
            }
        }

        debug!(
            sig = %format_signature(sig),
            found,
            location,
            window_size,
            matches = result.len(),
            "lookup"
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::path::Path;

    fn reader() -> IndexReader {
        IndexReader::from_reader(
            Cursor::new("0x10+a\n0x20+b,c\n0x30+d\n0x40+e\n0x50+f\n"),
            Path::new("mem"),
        )
        .unwrap()
    }

    #[test]
    fn test_exact_only_with_zero_window() {
        let reader = reader();
        let exec = LookupExecutor::new(&reader);
        let result = exec.lookup_by_signature(0x20, 0);
        assert_eq!(result.len(), 2);
        assert_eq!(result.get("b"), Some(&true));
        assert_eq!(result.get("c"), Some(&true));
    }

    #[test]
    fn test_miss_with_zero_window_is_empty() {
        let reader = reader();
        let exec = LookupExecutor::new(&reader);
        assert!(exec.lookup_by_signature(0x25, 0).is_empty());
        assert!(exec.lookup_by_signature(u128::MAX, 0).is_empty());
    }

    #[test]
    fn test_window_marks_neighbors_fuzzy() {
        let reader = reader();
        let exec = LookupExecutor::new(&reader);
        let result = exec.lookup_by_signature(0x30, 1);
        let got: Vec<_> = result.iter().map(|(w, &e)| (w.as_str(), e)).collect();
        assert_eq!(
            got,
            vec![("b", false), ("c", false), ("d", true), ("e", false)]
        );
    }

    #[test]
    fn test_miss_with_window_returns_neighbors() {
        let reader = reader();
        let exec = LookupExecutor::new(&reader);
        // 0x35 would be inserted at position 3 (before 0x40)
        let result = exec.lookup_by_signature(0x35, 1);
        let got: Vec<_> = result.keys().map(String::as_str).collect();
        assert_eq!(got, vec!["d", "e", "f"]);
        assert!(result.values().all(|&exact| !exact));
    }

    #[test]
    fn test_past_end_of_index() {
        let reader = reader();
        let exec = LookupExecutor::new(&reader);
        let result = exec.lookup_by_signature(0x99, 2);
        let got: Vec<_> = result.keys().map(String::as_str).collect();
        assert_eq!(got, vec!["e", "f"]);
    }

    #[test]
    fn test_window_monotonic() {
        let reader = reader();
        let exec = LookupExecutor::new(&reader);
        for sig in [0x0, 0x10, 0x28, 0x30, 0x50, 0x60] {
            for k in 1..6 {
                let smaller = exec.lookup_by_signature(sig, k - 1);
                let larger = exec.lookup_by_signature(sig, k);
                for (word, exact) in &smaller {
                    assert_eq!(larger.get(word), Some(exact), "sig {sig:#x} k {k}");
                }
            }
        }
    }
}
