use crate::error::{Result, UnscrambleError};
use crate::index::types::{format_signature, is_storable_word, IndexEntry};
use crate::signature::{compute_signature, Signature};
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Accumulates words grouped by signature and writes a sorted index.
///
/// Repeated words are dropped (first occurrence wins). Distinct words with
/// the same signature share one entry, in the order they were first added.
/// Words the line format cannot hold (empty, or containing `+` or `,`) are
/// never added.
#[derive(Debug, Default)]
pub struct IndexWriter {
    /// Signature -> words (BTreeMap keeps the output sorted)
    groups: BTreeMap<Signature, Vec<String>>,
    seen: FxHashSet<String>,
}

impl IndexWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a word, computing its signature. Returns false for a repeat or an
    /// unstorable word.
    pub fn add_word(&mut self, word: &str) -> bool {
        self.add_with_signature(word, compute_signature(word))
    }

    /// Add a word whose signature was already computed.
    pub fn add_with_signature(&mut self, word: &str, sig: Signature) -> bool {
        if !is_storable_word(word) || !self.seen.insert(word.to_string()) {
            return false;
        }
        self.groups.entry(sig).or_default().push(word.to_string());
        true
    }

    /// Number of distinct signatures
    pub fn entry_count(&self) -> usize {
        self.groups.len()
    }

    /// Number of distinct words
    pub fn word_count(&self) -> usize {
        self.seen.len()
    }

    /// Entries in ascending signature order
    pub fn entries(&self) -> impl Iterator<Item = IndexEntry> + '_ {
        self.groups
            .iter()
            .map(|(&sig, words)| IndexEntry::new(sig, words.clone()))
    }

    /// Write one line per signature, ascending
    pub fn write_to<W: Write>(&self, out: W) -> std::io::Result<()> {
        let mut out = BufWriter::new(out);
        for (sig, words) in &self.groups {
            writeln!(out, "{}+{}", format_signature(*sig), words.join(","))?;
        }
        out.flush()
    }

    /// Write the index to `path`.
    ///
    /// Writes to a sibling `.tmp` file first and renames it into place, so a
    /// failed build leaves any previous index untouched.
    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| UnscrambleError::io(parent, e))?;
        }

        let mut tmp_name = path.as_os_str().to_owned();
        tmp_name.push(".tmp");
        let tmp_path = Path::new(&tmp_name);

        let file = File::create(tmp_path).map_err(|e| UnscrambleError::io(tmp_path, e))?;
        let written = self
            .write_to(file)
            .map_err(|e| UnscrambleError::io(tmp_path, e))
            .and_then(|()| fs::rename(tmp_path, path).map_err(|e| UnscrambleError::io(path, e)));
        if written.is_err() {
            let _ = fs::remove_file(tmp_path);
        }
        written
    }
}
