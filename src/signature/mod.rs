//! Position-independent word signatures.
//!
//! A signature packs two fields into one integer:
//!
//! - bits `0..32`, the *letter-sig*: an XOR fold of a fixed 32-bit constant
//!   per letter (tagged with the letter's count when it repeats) and the
//!   word length.
//! - bits `32..84`, the *fingerprint*: a 2-bit saturating count per letter,
//!   with the most common English letters in the lowest bits.
//!
//! Both fields depend only on the letter population, so anagrams share a
//! signature. Because the fingerprint sits in the high bits, sorting by
//! signature places words with similar letter profiles next to each other,
//! which is what the fuzzy lookup window relies on.
//!
//! The tables below are fixed. Changing them invalidates every index file
//! built with the old values.

pub mod cache;

pub use cache::SignatureCache;

/// A word signature. The fingerprint needs 84 bits in total, so this is wider
/// than `u64`.
pub type Signature = u128;

/// Number of letters tracked (`a`..=`z`)
pub const LETTERS: usize = 26;

/// Width of the letter-sig field
pub const LETTER_SIG_BITS: u32 = 32;

/// Mask selecting the letter-sig field
pub const LETTER_SIG_MASK: Signature = (1 << LETTER_SIG_BITS) - 1;

/// Width of the fingerprint field
pub const FINGERPRINT_BITS: u32 = 52;

/// Mask selecting the fingerprint field (already shifted into place)
pub const FINGERPRINT_MASK: Signature = ((1 << FINGERPRINT_BITS) - 1) << LETTER_SIG_BITS;

/// Word lengths above this are tagged as this value
const MAX_TAGGED_LENGTH: usize = 31;

/// Counts saturate at this value in the fingerprint (2 bits per letter)
const MAX_FINGERPRINT_COUNT: u32 = 3;

/// Fingerprint bit offset per letter, indexed `a`..=`z`.
/// Ordered by English letter frequency: e=0, i=2, a=4, o=6, r=8, ...
const FINGERPRINT_SHIFT: [u32; LETTERS] = [
    4,  // a
    34, // b
    18, // c
    26, // d
    0,  // e
    36, // f
    32, // g
    28, // h
    2,  // i
    50, // j
    40, // k
    16, // l
    24, // m
    10, // n
    6,  // o
    22, // p
    48, // q
    8,  // r
    14, // s
    12, // t
    20, // u
    38, // v
    42, // w
    46, // x
    30, // y
    44, // z
];

/// Pseudo-random letter-sig constant per letter, indexed `a`..=`z`.
const LETTER_SIG: [u32; LETTERS] = [
    1789368711, // a
    3146859322, // b
    43676229,   // c
    3522623596, // d
    3544234957, // e
    3448207591, // f
    1282648386, // g
    3672791226, // h
    1582316135, // i
    4001984784, // j
    831769172,  // k
    1160692746, // l
    2430986565, // m
    1873586768, // n
    694443915,  // o
    1602297017, // p
    533722196,  // q
    3754550193, // r
    1859447115, // s
    1121373020, // t
    2414108708, // u
    2693866766, // v
    748799881,  // w
    2627529228, // x
    2376066489, // y
    802338724,  // z
];

/// Letter population of a word.
///
/// Only `a`..=`z` are counted as letters; every character, letter or not,
/// counts toward the length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterCounts {
    counts: [u32; LETTERS],
    chars: usize,
}

impl LetterCounts {
    pub fn from_word(word: &str) -> Self {
        let mut counts = [0u32; LETTERS];
        let mut chars = 0;
        for c in word.chars() {
            chars += 1;
            if c.is_ascii_lowercase() {
                let slot = &mut counts[(c as u8 - b'a') as usize];
                *slot = slot.saturating_add(1);
            }
        }
        Self { counts, chars }
    }

    /// Occurrences of `letter`, or 0 for anything outside `a`..=`z`
    pub fn count(&self, letter: char) -> u32 {
        if letter.is_ascii_lowercase() {
            self.counts[(letter as u8 - b'a') as usize]
        } else {
            0
        }
    }

    /// Length of the word in characters
    pub fn char_count(&self) -> usize {
        self.chars
    }

    /// (letter index, count) for every letter that occurs at least once
    pub fn present(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(idx, &count)| (idx, count))
    }
}

/// Compute the fingerprint field, already shifted above the letter-sig.
pub fn fingerprint(counts: &LetterCounts) -> Signature {
    let mut fp: u64 = 0;
    for (idx, count) in counts.present() {
        fp |= (count.min(MAX_FINGERPRINT_COUNT) as u64) << FINGERPRINT_SHIFT[idx];
    }
    (fp as Signature) << LETTER_SIG_BITS
}

/// Compute the 32-bit letter-sig field.
pub fn letter_sig(counts: &LetterCounts) -> Signature {
    let mut sig: Signature = 0;
    for (idx, count) in counts.present() {
        let mut s = LETTER_SIG[idx] as Signature;
        if count > 1 {
            // Shifting by 32 or more pushes every constant bit out of the mask.
            s = if count < LETTER_SIG_BITS { s << count } else { 0 };
            s |= count as Signature;
        }
        sig ^= s & LETTER_SIG_MASK;
    }
    sig ^= (counts.char_count().min(MAX_TAGGED_LENGTH) as Signature) << 8;
    sig & LETTER_SIG_MASK
}

/// Compute the signature of `word`.
///
/// The result depends only on the letter population and the length, so any
/// permutation of `word` yields the same value. Input is not case-folded:
/// upper-case letters count toward the length only.
///
/// ```
/// use unscramble::signature::compute_signature;
///
/// assert_eq!(compute_signature("test"), 105560478284788);
/// assert_eq!(compute_signature("stop"), compute_signature("pots"));
/// ```
pub fn compute_signature(word: &str) -> Signature {
    let counts = LetterCounts::from_word(word);
    let fp = fingerprint(&counts);
    let ls = letter_sig(&counts);
    assert_eq!(fp & ls, 0, "fingerprint and letter-sig overlap for {word:?}");
    fp | ls
}

/// Split a signature into its (fingerprint, letter-sig) fields
pub fn components(sig: Signature) -> (Signature, Signature) {
    (sig & FINGERPRINT_MASK, sig & LETTER_SIG_MASK)
}
