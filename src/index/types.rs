use crate::signature::Signature;

/// Default location of the signature index
pub const DEFAULT_INDEX_FILE: &str = "/usr/share/dict/sparse_index";

/// Default dictionary (one word per line) used to build the index
pub const DEFAULT_DICT_FILE: &str = "/usr/share/dict/words";

/// Separates the hex signature from the word list on an index line
pub const SIG_SEPARATOR: u8 = b'+';

/// Separates words within a word list
pub const WORD_SEPARATOR: char = ',';

/// One line of the index: a signature and every word that has it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub signature: Signature,
    pub words: Vec<String>,
}

impl IndexEntry {
    pub fn new(signature: Signature, words: Vec<String>) -> Self {
        Self { signature, words }
    }

    /// Format as `0x<hex>+word1,word2,...` (no trailing newline)
    pub fn to_line(&self) -> String {
        format!("{}+{}", format_signature(self.signature), self.words.join(","))
    }
}

/// Why a line could not be parsed. Converted into
/// [`crate::UnscrambleError::MalformedLine`] by the reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    MissingSeparator,
    ExtraSeparator,
    BadSignature(String),
    EmptyWordList,
    EmptyWord,
}

impl std::fmt::Display for LineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineError::MissingSeparator => write!(f, "missing '+' separator"),
            LineError::ExtraSeparator => write!(f, "more than one '+' separator"),
            LineError::BadSignature(s) => write!(f, "bad hex signature {s:?}"),
            LineError::EmptyWordList => write!(f, "empty word list"),
            LineError::EmptyWord => write!(f, "empty word in word list"),
        }
    }
}

/// Split an index line into its signature and verbatim word list.
pub fn parse_line(line: &str) -> Result<(Signature, &str), LineError> {
    let bytes = line.as_bytes();
    let split = memchr::memchr(SIG_SEPARATOR, bytes).ok_or(LineError::MissingSeparator)?;
    let (hex, words) = (&line[..split], &line[split + 1..]);

    if memchr::memchr(SIG_SEPARATOR, words.as_bytes()).is_some() {
        return Err(LineError::ExtraSeparator);
    }
    if words.is_empty() {
        return Err(LineError::EmptyWordList);
    }
    if words.split(WORD_SEPARATOR).any(str::is_empty) {
        return Err(LineError::EmptyWord);
    }

    let signature = parse_signature(hex).ok_or_else(|| LineError::BadSignature(hex.to_string()))?;
    Ok((signature, words))
}

/// Whether `word` can be stored in an index line: non-empty, with no `+`
/// and no `,`.
pub fn is_storable_word(word: &str) -> bool {
    !word.is_empty() && !word.contains([SIG_SEPARATOR as char, WORD_SEPARATOR])
}

/// Parse a base-16 signature, with or without a `0x` prefix
pub fn parse_signature(s: &str) -> Option<Signature> {
    let s = s.trim();
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    Signature::from_str_radix(digits, 16).ok()
}

/// Format a signature the way index files store it
#[inline]
pub fn format_signature(sig: Signature) -> String {
    format!("0x{sig:x}")
}
