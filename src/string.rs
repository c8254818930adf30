//! Sequences of syllables and word breaks.

use alloc::{string::String, vec::Vec};
use core::{fmt, str::FromStr};

use crate::{
    parser::{ParseError, parse},
    syllable::Syllable,
};

/// How two pinyin strings (or syllables) are compared.
///
/// The default ignores both capitalization and word breaks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Comparison {
    /// Syllables must agree in capitalization.
    pub case_sensitive: bool,
    /// Word breaks must appear in the same places.
    pub space_sensitive: bool,
}

/// A string of pinyin text: syllables, with `None` entries for word breaks.
///
/// The canonical spelling is rendered once, on construction, and kept.
#[derive(Debug, Clone, Default)]
pub struct PinyinString {
    entries: Vec<Option<Syllable>>,
    spelling: String,
}

impl PinyinString {
    pub(crate) fn from_entries(entries: Vec<Option<Syllable>>) -> Self {
        let spelling = render(&entries);
        Self { entries, spelling }
    }

    /// The syllables and word breaks, in order.
    pub fn entries(&self) -> &[Option<Syllable>] {
        &self.entries
    }

    /// The syllables, skipping word breaks.
    pub fn syllables(&self) -> impl Iterator<Item = &Syllable> {
        self.entries.iter().flatten()
    }

    /// The number of entries, counting word breaks.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The canonical spelling with tone marks.
    ///
    /// Word breaks become single spaces. Within a word, an apostrophe is put
    /// before a syllable starting with a bare vowel, as in "kě'ài".
    pub fn as_str(&self) -> &str {
        &self.spelling
    }

    /// Compare with another pinyin string.
    pub fn eq_with(&self, other: &Self, comparison: Comparison) -> bool {
        let keep = |e: &&Option<Syllable>| comparison.space_sensitive || e.is_some();

        let mut a = self.entries.iter().filter(keep);
        let mut b = other.entries.iter().filter(keep);

        loop {
            match (a.next(), b.next()) {
                (None, None) => return true,
                (Some(None), Some(None)) => {}
                (Some(Some(x)), Some(Some(y))) if x.eq_with(y, comparison.case_sensitive) => {}
                _ => return false,
            }
        }
    }
}

fn render(entries: &[Option<Syllable>]) -> String {
    let mut spelling = String::new();
    let mut inside_word = false;

    for entry in entries {
        match entry {
            None => {
                spelling.push(' ');
                inside_word = false;
            }
            Some(syllable) => {
                if inside_word && !syllable.has_unambiguous_start() {
                    spelling.push('\'');
                }
                spelling.push_str(&syllable.to_pinyin());
                inside_word = true;
            }
        }
    }

    spelling
}

impl PartialEq for PinyinString {
    fn eq(&self, other: &Self) -> bool {
        self.eq_with(other, Comparison::default())
    }
}

impl Eq for PinyinString {}

impl fmt::Display for PinyinString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PinyinString {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl FromIterator<Option<Syllable>> for PinyinString {
    fn from_iter<T: IntoIterator<Item = Option<Syllable>>>(iter: T) -> Self {
        Self::from_entries(iter.into_iter().collect())
    }
}
