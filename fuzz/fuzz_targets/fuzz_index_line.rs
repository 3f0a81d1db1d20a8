#![no_main]

use libfuzzer_sys::fuzz_target;
use std::io::Cursor;
use std::path::Path;

fuzz_target!(|data: &[u8]| {
    // Arbitrary index files must load or fail cleanly, never panic
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = unscramble::index::parse_line(text);
    }
    if let Ok(reader) = unscramble::index::IndexReader::from_reader(Cursor::new(data), Path::new("fuzz")) {
        assert!(reader.signatures().windows(2).all(|w| w[0] < w[1]));
    }
});
