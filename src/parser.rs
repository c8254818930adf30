//! Scanner turning raw pinyin text into syllables.
//!
//! Accepted input mixes freely:
//!
//! - tone digits after each syllable (`ni3hao3`, with `0` or `5` for the
//!   neutral tone, which may also be left out),
//! - tone marks (`nǐhǎo`), either precomposed or as combining characters
//!   following the vowel,
//! - CC-CEDICT conventions: `v` or `u:` for "ü", a separate `r5` token for
//!   erhua, and spaces, commas and center dots between syllables.
//!
//! The scanner is a single left-to-right pass looking at most two
//! characters ahead. It stops at the first invalid character; there are no
//! partial results.

use alloc::{string::String, vec::Vec};

use thiserror::Error;
use tinyvec::TinyVec;

use crate::{
    phonology::{Final, Initial, Tone},
    string::PinyinString,
    syllable::{IllegalCombination, Syllable},
};

/// An error scanning pinyin text.
///
/// Positions are byte offsets into the text as passed in, before trimming.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The leading consonants do not spell an initial.
    #[error("Invalid initial \"{spelling}\" at {position}.")]
    InvalidInitial { spelling: String, position: usize },
    /// The vowels and coda do not spell a final after the initial.
    #[error("Invalid final \"{spelling}\" after initial \"{initial}\" at {position}.")]
    InvalidFinal {
        spelling: String,
        initial: Initial,
        position: usize,
    },
    /// The initial and final cannot be combined.
    #[error("Illegal syllable at {position}: {source}")]
    IllegalCombination {
        source: IllegalCombination,
        position: usize,
    },
    /// A syllable has no vowel.
    #[error("Unexpected character '{character}' at {position}.")]
    UnexpectedCharacter { character: char, position: usize },
    /// The text ends in the middle of a syllable.
    #[error("Unexpected ending at {position}.")]
    UnexpectedEnding { position: usize },
    /// A syllable separator is not followed by a vowel.
    #[error("Unexpected syllable separator after \"{syllable}\" at {position}.")]
    UnexpectedSeparator { syllable: String, position: usize },
    /// An `r5` token has no syllable to attach to.
    #[error("Erhua token without a preceding syllable at {position}.")]
    MisplacedErhua { position: usize },
    /// An `r5` token follows a syllable already ending in "r".
    #[error("Double erhua at {position}.")]
    DoubleErhua { position: usize },
}

/// Options for [`parse_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Keep word breaks (spaces, commas, center dots) as entries of the
    /// result. When unset, they only separate syllables.
    pub word_breaks: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { word_breaks: true }
    }
}

/// Parse pinyin text, keeping word breaks.
pub fn parse(text: &str) -> Result<PinyinString, ParseError> {
    parse_with(text, ParseOptions::default())
}

/// Parse pinyin text.
///
/// Leading and trailing whitespace is ignored, and runs of separators
/// collapse into a single word break.
pub fn parse_with(text: &str, options: ParseOptions) -> Result<PinyinString, ParseError> {
    let result = Scanner::new(text).run(options);

    if let Err(err) = &result {
        tracing::debug!(%err, text, "rejected pinyin");
    }

    result
}

struct Scanner<'a> {
    text: &'a str,
    /// Bytes trimmed from the front of the original text.
    offset: usize,
    index: usize,
    buffer: TinyVec<[char; 8]>,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        let trimmed = text.trim_start();

        Self {
            text: trimmed.trim_end(),
            offset: text.len() - trimmed.len(),
            index: 0,
            buffer: TinyVec::default(),
        }
    }

    fn run(mut self, options: ParseOptions) -> Result<PinyinString, ParseError> {
        let mut entries: Vec<Option<Syllable>> = Vec::new();

        while self.index < self.text.len() {
            let position = self.position();

            if self.erhua_token()? {
                // A break before the token is spacing, not a word boundary.
                if let Some(None) = entries.last() {
                    entries.pop();
                }

                let last = entries
                    .last_mut()
                    .and_then(Option::as_mut)
                    .ok_or(ParseError::MisplacedErhua { position })?;

                if last.is_erhua() {
                    Err(ParseError::DoubleErhua { position })?;
                }

                *last = last.with_erhua();
            } else {
                let syllable = self.syllable()?;
                entries.push(Some(syllable));
            }

            if self.skip_separators()? && self.index < self.text.len() && options.word_breaks {
                entries.push(None);
            }
        }

        Ok(PinyinString::from_entries(entries))
    }

    fn position(&self) -> usize {
        self.offset + self.index
    }

    /// Peek a character ahead of the cursor, or `None` past the end.
    fn lookahead(&self, n: usize) -> Option<char> {
        self.text[self.index..].chars().nth(n)
    }

    fn current(&self) -> Option<char> {
        self.lookahead(0)
    }

    fn accept(&mut self) -> Result<char, ParseError> {
        let c = self.current().ok_or(ParseError::UnexpectedEnding {
            position: self.position(),
        })?;
        self.index += c.len_utf8();
        Ok(c)
    }

    fn erhua_token(&mut self) -> Result<bool, ParseError> {
        if self.current() == Some('r') && self.lookahead(1) == Some('5') {
            self.accept()?;
            self.accept()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn skip_separators(&mut self) -> Result<bool, ParseError> {
        let mut skipped = false;

        while self
            .current()
            .is_some_and(|c| c.is_whitespace() || c == '\u{00B7}' || c == ',')
        {
            self.accept()?;
            skipped = true;
        }

        Ok(skipped)
    }

    /// Scan a syllable and the apostrophe that may follow it.
    fn syllable(&mut self) -> Result<Syllable, ParseError> {
        let syllable = self.bare_syllable()?;

        if self.current() == Some('\'') {
            let position = self.position();
            self.accept()?;

            if !is_vowel(self.current()) {
                Err(ParseError::UnexpectedSeparator {
                    syllable: syllable.to_pinyin(),
                    position,
                })?;
            }
        }

        tracing::trace!(%syllable, "scanned syllable");

        Ok(syllable)
    }

    fn bare_syllable(&mut self) -> Result<Syllable, ParseError> {
        self.buffer.clear();
        let start = self.position();

        self.append_while(is_consonant)?;
        let spelling = self.folded(0);
        let initial = Initial::from_spelling(&spelling).ok_or(ParseError::InvalidInitial {
            spelling,
            position: start,
        })?;
        let initial_len = self.buffer.len();

        self.append_while(is_glide)?;
        let mut marked = None;
        self.append_vowels(&mut marked)?;

        // A combining tone mark may sit inside the nucleus, as in "xiǎo".
        let mut mark = None;
        if marked.is_none() {
            if let Some(tone) = self.current().and_then(Tone::from_mark) {
                let position = self.position();
                mark = Some((self.accept()?, position));
                marked = Some(tone);
                self.append_vowels(&mut marked)?;
            }
        }

        // A mark with no vowel before or after it is the offender.
        if self.buffer.len() == initial_len {
            return Err(match (mark, self.current()) {
                (Some((character, position)), _) => {
                    ParseError::UnexpectedCharacter { character, position }
                }
                (None, Some(character)) => ParseError::UnexpectedCharacter {
                    character,
                    position: self.position(),
                },
                (None, None) => ParseError::UnexpectedEnding {
                    position: self.position(),
                },
            });
        }

        // An "n" or "g" followed by a vowel starts the next syllable.
        if self.coda('n')? {
            self.coda('g')?;
        }

        let spelling = self.folded(initial_len);
        let final_ = Final::from_spelling_after(initial, &spelling).ok_or(
            ParseError::InvalidFinal {
                spelling,
                initial,
                position: start,
            },
        )?;

        let capitalized = self.buffer.first().is_some_and(|c| c.is_uppercase());

        let erhua = matches!(self.current(), Some('r' | 'R')) && !is_vowel(self.lookahead(1));
        if erhua {
            self.accept()?;
        }

        let tone = match marked {
            Some(tone) => tone,
            None => match self.current().and_then(Tone::from_digit) {
                Some(tone) => {
                    self.accept()?;
                    tone
                }
                None => Tone::Neutral,
            },
        };

        Syllable::new(initial, final_, tone, erhua, capitalized).map_err(|source| {
            ParseError::IllegalCombination {
                source,
                position: start,
            }
        })
    }

    fn append_while(&mut self, class: fn(char) -> bool) -> Result<(), ParseError> {
        while self.current().is_some_and(class) {
            let c = self.accept()?;
            self.buffer.push(c);
        }

        Ok(())
    }

    /// Append vowels, translating "v" and "u:" to "ü", and splitting the
    /// tone from a precomposed vowel.
    fn append_vowels(&mut self, marked: &mut Option<Tone>) -> Result<(), ParseError> {
        while is_vowel(self.current()) {
            let position = self.position();
            let c = match self.accept()? {
                'v' => 'ü',
                'V' => 'Ü',
                c @ ('u' | 'U') if self.current() == Some(':') => {
                    self.accept()?;
                    if c == 'u' { 'ü' } else { 'Ü' }
                }
                c => match Tone::split_marked(c) {
                    Some(_) if marked.is_some() => {
                        Err(ParseError::UnexpectedCharacter {
                            character: c,
                            position,
                        })?
                    }
                    Some((vowel, tone)) => {
                        *marked = Some(tone);
                        vowel
                    }
                    None => c,
                },
            };
            self.buffer.push(c);
        }

        Ok(())
    }

    /// Take a coda letter unless a vowel follows it.
    fn coda(&mut self, expected: char) -> Result<bool, ParseError> {
        let found = self
            .current()
            .is_some_and(|c| c.eq_ignore_ascii_case(&expected));

        if found && !is_vowel(self.lookahead(1)) {
            let c = self.accept()?;
            self.buffer.push(c);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// The lowercase text of the buffer from an offset.
    fn folded(&self, from: usize) -> String {
        self.buffer[from..]
            .iter()
            .flat_map(|c| c.to_lowercase())
            .collect()
    }
}

fn is_consonant(c: char) -> bool {
    matches!(
        c.to_ascii_lowercase(),
        'b' | 'p'
            | 'm'
            | 'f'
            | 'd'
            | 't'
            | 'n'
            | 'l'
            | 'g'
            | 'k'
            | 'h'
            | 'j'
            | 'q'
            | 'x'
            | 'z'
            | 'c'
            | 's'
            | 'r'
    )
}

fn is_glide(c: char) -> bool {
    matches!(c, 'y' | 'w' | 'Y' | 'W')
}

/// Whether a character is a vowel, possibly with a precomposed tone mark.
fn is_vowel(c: Option<char>) -> bool {
    match c {
        Some('a' | 'o' | 'e' | 'i' | 'u' | 'ü' | 'v' | 'A' | 'O' | 'E' | 'I' | 'U' | 'Ü' | 'V') => {
            true
        }
        Some(c) => Tone::split_marked(c).is_some(),
        None => false,
    }
}
