use std::fs;
use std::path::{Path, PathBuf};
use unscramble::index::repopulate;

/// Fresh per-process scratch directory for one test
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir()
        .join("unscramble_test_fixtures")
        .join(format!("{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("Failed to create fixture dir");
    dir
}

/// Write `words` as a dictionary in `dir`
pub fn write_dictionary(dir: &Path, words: &[&str]) -> PathBuf {
    let dict = dir.join("words");
    let mut content = words.join("\n");
    content.push('\n');
    fs::write(&dict, content).expect("Failed to write dictionary");
    dict
}

/// Build an index from `words` and return its path
pub fn build_index(dir: &Path, words: &[&str]) -> PathBuf {
    let dict = write_dictionary(dir, words);
    let index = dir.join("sparse_index");
    repopulate(&dict, &index).expect("Failed to build index");
    index
}
