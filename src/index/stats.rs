use crate::index::reader::IndexReader;
use crate::index::types::format_signature;
use crate::signature::Signature;

/// Summary of a loaded index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexStats {
    pub entries: usize,
    pub words: usize,
    /// Words in the largest anagram class
    pub largest_class: Vec<String>,
    pub min_signature: Option<Signature>,
    pub max_signature: Option<Signature>,
}

impl IndexStats {
    pub fn collect(reader: &IndexReader) -> Self {
        let mut words = 0;
        let mut largest: Option<(usize, usize)> = None;

        for pos in 0..reader.len() {
            let count = reader.words_at(pos).count();
            words += count;
            if largest.is_none_or(|(_, best)| count > best) {
                largest = Some((pos, count));
            }
        }

        let largest_class = largest
            .map(|(pos, _)| reader.words_at(pos).map(str::to_string).collect())
            .unwrap_or_default();

        Self {
            entries: reader.len(),
            words,
            largest_class,
            min_signature: reader.signatures().first().copied(),
            max_signature: reader.signatures().last().copied(),
        }
    }
}

/// Display index statistics
pub fn show_stats(reader: &IndexReader) {
    let stats = IndexStats::collect(reader);

    println!("Index Statistics");
    println!("================");
    println!();
    println!("Index location:   {}", reader.path().display());
    println!("Signatures:       {}", stats.entries);
    println!("Words:            {}", stats.words);
    if stats.entries > 0 {
        println!(
            "Words/signature:  {:.2}",
            stats.words as f64 / stats.entries as f64
        );
    }

    if let (Some(min), Some(max)) = (stats.min_signature, stats.max_signature) {
        println!();
        println!("Lowest sig:       {}", format_signature(min));
        println!("Highest sig:      {}", format_signature(max));
    }

    if !stats.largest_class.is_empty() {
        println!();
        println!("Largest anagram class ({} words):", stats.largest_class.len());
        for word in stats.largest_class.iter().take(15) {
            println!("  {}", word);
        }
        if stats.largest_class.len() > 15 {
            println!("  ... and {} more", stats.largest_class.len() - 15);
        }
    }

    if let Ok(meta) = std::fs::metadata(reader.path()) {
        println!();
        println!("Index size:       {}", format_size(meta.len()));
    }
}

/// Format byte size to human readable
fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}
