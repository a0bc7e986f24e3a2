//! The pattern-matching core.
//!
//! # Pipeline
//!
//! For every document the engine runs the same steps:
//!
//! 1. **Decode** the raw bytes as UTF-8 (see [`crate::config::EncodingMode`])
//! 2. **Normalize** text and pattern when the search is case-insensitive
//!    ([`normalize`])
//! 3. **Match** with the configured [`Algorithm`]: a brute-force scan or a
//!    prefix-function automaton ([`matcher`], [`prefix`])
//! 4. **Filter** matches down to whole words when requested ([`boundary`])
//! 5. **Emit** one [`crate::results::MatchRecord`] per surviving offset
//!
//! Only step 3 is timed.
//!
//! # Offsets
//!
//! Matching happens on `char` slices, so every offset is a character index.
//! Case folding maps each character to exactly one character, which keeps
//! offsets computed on the folded text valid for the original.
//!
//! # Example
//!
//! ```rust
//! use textseek::{run, Algorithm, Document, SearchConfig};
//!
//! let documents = vec![
//!     Document::from_text("a.txt", "catalog cat cats"),
//!     Document::from_text("b.txt", "The Cat"),
//! ];
//! let config = SearchConfig::new("cat")
//!     .with_algorithm(Algorithm::Automaton)
//!     .case_insensitive()
//!     .whole_words();
//!
//! let records = run(&documents, &config).unwrap();
//! let found: Vec<_> = records
//!     .iter()
//!     .map(|r| (r.document_id.as_str(), r.offset))
//!     .collect();
//! assert_eq!(found, vec![("a.txt", 8), ("b.txt", 4)]);
//! ```
pub mod boundary;
pub mod engine;
pub mod matcher;
pub mod normalize;
pub mod prefix;

pub use engine::{run, run_parallel, run_report, Clock, Engine, MonotonicClock};
pub use matcher::Algorithm;
pub use prefix::PrefixTable;
