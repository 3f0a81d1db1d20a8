//! # unscramble - fast word unscrambler
//!
//! Finds the dictionary words that use exactly the letters of a scrambled
//! query, plus "fuzzy" neighbors with a similar letter profile, using a
//! pre-built index sorted by letter-population signature.
//!
//! ## Architecture
//!
//! - [`signature`] - Order-independent word signatures and their LRU memo
//! - [`index`] - Building, writing and loading the `signature -> words` index
//! - [`query`] - Lower-bound search and the positional fuzzy window
//! - [`output`] - Result formatting for the CLI
//! - [`utils`] - Configuration and progress spinners
//!
//! ## Quick Start
//!
//! ```no_run
//! use unscramble::index::repopulate;
//! use unscramble::Unscrambler;
//! use std::path::Path;
//!
//! // Build the index once from a word list
//! repopulate(Path::new("/usr/share/dict/words"), Path::new("/tmp/sparse_index")).unwrap();
//!
//! // Then look words up
//! let u = Unscrambler::open(Path::new("/tmp/sparse_index")).unwrap();
//! for (word, exact) in u.lookup("eanycleocipd", 0) {
//!     println!("{word} {exact}");
//! }
//! ```
//!
//! ## Index format
//!
//! One line per distinct signature, ascending:
//!
//! ```text
//! 0x4050405ae76525+stop,pots,tops,opts,post,spot
//! ```

pub mod error;
pub mod index;
pub mod output;
pub mod query;
pub mod signature;
pub mod unscrambler;
pub mod utils;

pub use error::{Result, UnscrambleError};
pub use query::{LookupResult, DEFAULT_WINDOW_SIZE};
pub use signature::{compute_signature, Signature};
pub use unscrambler::Unscrambler;
