use crate::error::{Result, UnscrambleError};
use crate::index::types::{format_signature, is_storable_word};
use crate::index::writer::IndexWriter;
use crate::signature::{compute_signature, Signature};
use crate::utils::progress::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Duration;
use tracing::{info, trace, warn};

/// Counters from one index build
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Non-blank dictionary lines
    pub words_read: usize,
    /// Distinct words written
    pub words_indexed: usize,
    /// Lines dropped because the word was already seen
    pub duplicates: usize,
    /// Lines dropped because the word contains `+` or `,`
    pub rejected: usize,
    /// Distinct signatures (= lines in the index file)
    pub entries: usize,
}

fn spinner(message: &'static str, silent: bool) -> Option<ProgressBar> {
    if silent {
        return None;
    }
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(80));
    Some(spinner)
}

/// Read a dictionary: one word per line, lower-cased, blank lines skipped.
pub fn read_dictionary(dict_path: &Path) -> Result<Vec<String>> {
    let file = File::open(dict_path).map_err(|e| UnscrambleError::io(dict_path, e))?;
    let mut words = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| UnscrambleError::io(dict_path, e))?;
        if line.is_empty() {
            continue;
        }
        words.push(line.to_lowercase());
    }
    Ok(words)
}

/// Group `words` by signature into a writer.
///
/// Signatures are computed in parallel; grouping is sequential and follows
/// input order, so the first occurrence of a word wins and anagram groups
/// keep first-seen order. Words containing `+` or `,` cannot be stored in
/// an index line and are skipped with a warning.
pub fn index_words(words: &[String]) -> (IndexWriter, BuildStats) {
    let signatures: Vec<Signature> = words.par_iter().map(|w| compute_signature(w)).collect();

    let mut writer = IndexWriter::new();
    let mut stats = BuildStats {
        words_read: words.len(),
        ..BuildStats::default()
    };

    for (word, &sig) in words.iter().zip(&signatures) {
        if !is_storable_word(word) {
            warn!(word = %word, "skipping word that contains '+' or ','");
            stats.rejected += 1;
            continue;
        }
        trace!("{} => {}", word, format_signature(sig));
        if !writer.add_with_signature(word, sig) {
            stats.duplicates += 1;
        }
    }

    stats.words_indexed = writer.word_count();
    stats.entries = writer.entry_count();
    (writer, stats)
}

/// Rebuild the index file at `index_path` from the dictionary at `dict_path`.
pub fn repopulate(dict_path: &Path, index_path: &Path) -> Result<BuildStats> {
    repopulate_with_progress(dict_path, index_path, true)
}

/// [`repopulate`] with an optional progress spinner on stderr
pub fn repopulate_with_progress(
    dict_path: &Path,
    index_path: &Path,
    silent: bool,
) -> Result<BuildStats> {
    let read_spinner = spinner("Reading dictionary...", silent);
    let words = read_dictionary(dict_path)?;
    if let Some(s) = read_spinner {
        s.finish_with_message(format!("Read {} words", words.len()));
    }

    let sig_spinner = spinner("Computing signatures...", silent);
    let (writer, stats) = index_words(&words);
    if let Some(s) = sig_spinner {
        s.finish_with_message(format!("{} signatures", stats.entries));
    }

    writer.write(index_path)?;

    info!(
        dict = %dict_path.display(),
        index = %index_path.display(),
        words = stats.words_indexed,
        duplicates = stats.duplicates,
        rejected = stats.rejected,
        entries = stats.entries,
        "index rebuilt"
    );
    Ok(stats)
}
