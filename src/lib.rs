#![no_std]

//! Normalization of romanized Mandarin into canonical, tone-marked pinyin.
//!
//! Tonemark reads pinyin written with tone numbers (`ni3hao3`), in the
//! conventions of the CC-CEDICT dictionary (`nu:3`, `hua1 r5`), or already
//! marked with diacritics, and produces the canonical spelling (`nǐhǎo`,
//! `nǚ`, `huār`). Every syllable is checked against the closed inventory of
//! Mandarin syllables.
//!
//! Tone marks in the output are combining characters placed after the
//! marked vowel.
//!
//! ```
//! let s = tonemark::parse("ke3ai4")?;
//! assert_eq!(s.as_str(), "ke\u{30C}'a\u{300}i");
//! ```
//!
//! Parsed strings have a compact binary form of two bytes per syllable. To
//! read and write it, most users should begin with the functions in the
//! [`avec`] module; the underlying finite-state machine is exposed in
//! [`sans`].
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: enable stream-based encoding and decoding (default).

extern crate alloc;

pub mod avec;
pub mod parser;
pub mod phonology;
pub mod sans;
pub mod string;
pub mod syllable;

pub use parser::{ParseError, ParseOptions, parse, parse_with};
pub use phonology::{Final, Initial, Place, Tone};
pub use string::{Comparison, PinyinString};
pub use syllable::Syllable;
