use crate::error::{Result, UnscrambleError};
use crate::index::types::{parse_line, WORD_SEPARATOR};
use crate::signature::Signature;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::info;

/// In-memory signature index.
///
/// Two parallel vectors: `signatures` (strictly ascending) and `words` (the
/// comma-joined word list for the signature at the same position, kept
/// verbatim from the file).
///
/// The reader is immutable once loaded. It has no `&mut self` methods, so a
/// single instance can be shared between threads without locking. To pick up
/// a rebuilt index, open a new reader.
#[derive(Debug, Clone)]
pub struct IndexReader {
    path: PathBuf,
    signatures: Vec<Signature>,
    words: Vec<String>,
}

impl IndexReader {
    /// Load an index file
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => UnscrambleError::IndexNotFound {
                path: path.to_path_buf(),
            },
            _ => UnscrambleError::io(path, e),
        })?;
        let reader = Self::from_reader(BufReader::new(file), path)?;

        info!(
            path = %path.display(),
            entries = reader.len(),
            "loaded signature index"
        );
        Ok(reader)
    }

    /// Parse an index from any buffered reader. `origin` is only used in
    /// error messages.
    ///
    /// The input must already be sorted by ascending signature with no
    /// repeated signatures; it is checked, never re-sorted.
    pub fn from_reader<R: BufRead>(reader: R, origin: &Path) -> Result<Self> {
        let mut signatures = Vec::new();
        let mut words = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line_no = idx + 1;
            let line = line.map_err(|e| UnscrambleError::io(origin, e))?;
            let line = line.strip_suffix('\r').unwrap_or(&line);

            let (sig, list) = parse_line(line)
                .map_err(|e| UnscrambleError::malformed(origin, line_no, e.to_string()))?;

            if signatures.last().is_some_and(|&prev| prev >= sig) {
                return Err(UnscrambleError::Unsorted {
                    path: origin.to_path_buf(),
                    line: line_no,
                });
            }

            signatures.push(sig);
            words.push(list.to_string());
        }

        Ok(Self {
            path: origin.to_path_buf(),
            signatures,
            words,
        })
    }

    /// Lower-bound binary search.
    ///
    /// Returns `(true, i)` when `signatures[i] == sig`, otherwise
    /// `(false, i)` where `i` is the position `sig` would be inserted at to
    /// keep the array sorted (possibly `len()`).
    pub fn search(&self, sig: Signature) -> (bool, usize) {
        match self.signatures.binary_search(&sig) {
            Ok(i) => (true, i),
            Err(i) => (false, i),
        }
    }

    pub fn signature_at(&self, pos: usize) -> Option<Signature> {
        self.signatures.get(pos).copied()
    }

    /// The verbatim comma-joined word list at `pos`
    pub fn word_list_at(&self, pos: usize) -> Option<&str> {
        self.words.get(pos).map(String::as_str)
    }

    /// The words at `pos`, split
    pub fn words_at(&self, pos: usize) -> impl Iterator<Item = &str> {
        self.word_list_at(pos)
            .into_iter()
            .flat_map(|list| list.split(WORD_SEPARATOR))
    }

    pub fn signatures(&self) -> &[Signature] {
        &self.signatures
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }

    /// Where this index was loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn load(text: &str) -> Result<IndexReader> {
        IndexReader::from_reader(Cursor::new(text), Path::new("test-index"))
    }

    #[test]
    fn test_load_parallel_arrays() {
        let reader = load("0x1+a\n0x5+b,c\n0x9+d\n").unwrap();
        assert_eq!(reader.len(), 3);
        assert_eq!(reader.signatures(), &[1, 5, 9]);
        assert_eq!(reader.word_list_at(1), Some("b,c"));
        assert_eq!(reader.words_at(1).collect::<Vec<_>>(), vec!["b", "c"]);
        assert_eq!(reader.words_at(7).count(), 0);
    }

    #[test]
    fn test_load_without_trailing_newline_or_with_crlf() {
        let reader = load("0x1+a\r\n0x2+b").unwrap();
        assert_eq!(reader.word_list_at(0), Some("a"));
        assert_eq!(reader.word_list_at(1), Some("b"));
    }

    #[test]
    fn test_empty_index() {
        let reader = load("").unwrap();
        assert!(reader.is_empty());
        assert_eq!(reader.search(42), (false, 0));
    }

    #[test]
    fn test_search_lower_bound() {
        let reader = load("0x1+a\n0x4+b\n0x5+c\n0x6+d\n0x7+e\n0x9+f\n0xa+g\n0xb+h\n").unwrap();
        assert_eq!(reader.search(4), (true, 1));
        assert_eq!(reader.search(12), (false, 8));
        assert_eq!(reader.search(3), (false, 1));
        assert_eq!(reader.search(2), (false, 1));
        assert_eq!(reader.search(0), (false, 0));
    }

    #[test]
    fn test_rejects_unsorted() {
        let err = load("0x5+a\n0x1+b\n").unwrap_err();
        assert!(matches!(err, UnscrambleError::Unsorted { line: 2, .. }));
    }

    #[test]
    fn test_rejects_duplicate_signature() {
        let err = load("0x5+a\n0x5+b\n").unwrap_err();
        assert!(matches!(err, UnscrambleError::Unsorted { line: 2, .. }));
    }

    #[test]
    fn test_rejects_malformed_lines() {
        let err = load("0x1+a\nnot a line\n").unwrap_err();
        assert!(matches!(err, UnscrambleError::MalformedLine { line: 2, .. }));

        let err = load("0xq+a\n").unwrap_err();
        assert!(matches!(err, UnscrambleError::MalformedLine { line: 1, .. }));

        let err = load("0x1+a\n\n0x2+b\n").unwrap_err();
        assert!(matches!(err, UnscrambleError::MalformedLine { line: 2, .. }));

        let err = load("0x1+a\n0x2+b,,c\n").unwrap_err();
        assert!(err.to_string().ends_with("test-index:2: malformed index line: empty word in word list"));
    }

    #[test]
    fn test_open_missing_file() {
        let path = std::env::temp_dir().join(format!(
            "unscramble_missing_{}/index",
            std::process::id()
        ));
        let err = IndexReader::open(&path).unwrap_err();
        assert!(matches!(err, UnscrambleError::IndexNotFound { .. }));
    }
}
