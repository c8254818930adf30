//! Validated syllables, their canonical spelling, and their 16-bit form.

use alloc::string::String;
use core::{
    fmt,
    hash::{Hash, Hasher},
};

use tartan_bitfield::bitfield;
use thiserror::Error;

use crate::phonology::{Final, Initial, Tone, is_legal};

/// An initial and a final which cannot form a syllable together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Initial \"{initial}\" cannot be combined with final \"{final_}\".")]
pub struct IllegalCombination {
    /// The offending initial.
    pub initial: Initial,
    /// The final it cannot precede.
    pub final_: Final,
}

/// An error reconstructing a syllable from its 16-bit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The initial field is out of range.
    #[error("Unknown initial index ({0}).")]
    InitialIndex(u8),
    /// The final field is out of range.
    #[error("Unknown final index ({0}).")]
    FinalIndex(u8),
    /// The tone field is out of range.
    #[error("Unknown tone index ({0}).")]
    ToneIndex(u8),
    /// The fields are in range, but do not form a legal syllable.
    #[error(transparent)]
    IllegalCombination(#[from] IllegalCombination),
}

bitfield! {
    struct Layout(u16) {
        [0..5] initial: u8,
        [5..11] final_: u8,
        [11..14] tone: u8,
        [14] erhua,
        [15] capitalized,
    }
}

/// A single syllable, made of an initial, a final, a tone, and two flags.
///
/// Syllables are validated on construction: only combinations listed in
/// [`crate::phonology::legality`] can be built.
///
/// Equality ignores capitalization. Use [`Syllable::eq_with`] for a
/// case-sensitive comparison.
#[derive(Debug, Clone, Copy)]
pub struct Syllable {
    initial: Initial,
    final_: Final,
    tone: Tone,
    erhua: bool,
    capitalized: bool,
}

impl Syllable {
    /// Create a syllable, failing if the initial cannot precede the final.
    ///
    /// The `erhua` flag appends an "r" after the final (as in "wanr"). The
    /// syllable "er" is [`Final::E`] with this flag set.
    pub fn new(
        initial: Initial,
        final_: Final,
        tone: Tone,
        erhua: bool,
        capitalized: bool,
    ) -> Result<Self, IllegalCombination> {
        if !is_legal(initial, final_) {
            Err(IllegalCombination { initial, final_ })?;
        }

        Ok(Self {
            initial,
            final_,
            tone,
            erhua,
            capitalized,
        })
    }

    /// The consonant onset, possibly empty.
    pub fn initial(&self) -> Initial {
        self.initial
    }

    /// The final, spelled according to the initial.
    pub fn final_(&self) -> Final {
        self.final_
    }

    /// The tone, marked on the nucleus when rendered.
    pub fn tone(&self) -> Tone {
        self.tone
    }

    /// Whether an "r" is suffixed to the final.
    pub fn is_erhua(&self) -> bool {
        self.erhua
    }

    /// Whether the first letter is uppercase.
    pub fn is_capitalized(&self) -> bool {
        self.capitalized
    }

    pub(crate) fn with_erhua(self) -> Self {
        Self {
            erhua: true,
            ..self
        }
    }

    /// Whether this syllable starts with a consonant or glide, so that it
    /// cannot be read as the continuation of a preceding syllable.
    pub fn has_unambiguous_start(&self) -> bool {
        self.initial != Initial::Empty || self.final_.has_unambiguous_isolated_start()
    }

    /// Whether this syllable ends in a coda ("n", "ng", "r", "nr" or "ngr").
    pub fn has_coda(&self) -> bool {
        self.final_.has_coda() || self.erhua
    }

    /// Compare two syllables, optionally taking capitalization into account.
    pub fn eq_with(&self, other: &Self, case_sensitive: bool) -> bool {
        self.initial == other.initial
            && self.final_ == other.final_
            && self.tone == other.tone
            && self.erhua == other.erhua
            && (!case_sensitive || self.capitalized == other.capitalized)
    }

    /// Pack this syllable into 16 bits.
    ///
    /// From least significant: five bits of initial index, six of final
    /// index, three of tone index, then the erhua and capitalization flags.
    pub fn to_bits(self) -> u16 {
        let mut layout = Layout(0);
        layout.set_initial(self.initial.index());
        layout.set_final_(self.final_.index());
        layout.set_tone(self.tone.index());
        layout.set_erhua(self.erhua);
        layout.set_capitalized(self.capitalized);
        layout.0
    }

    /// Unpack a syllable from the 16 bits produced by [`Syllable::to_bits`].
    pub fn from_bits(bits: u16) -> Result<Self, DecodeError> {
        let layout = Layout(bits);

        let initial = Initial::from_index(layout.initial())
            .ok_or(DecodeError::InitialIndex(layout.initial()))?;
        let final_ =
            Final::from_index(layout.final_()).ok_or(DecodeError::FinalIndex(layout.final_()))?;
        let tone = Tone::from_index(layout.tone()).ok_or(DecodeError::ToneIndex(layout.tone()))?;

        Ok(Self::new(
            initial,
            final_,
            tone,
            layout.erhua(),
            layout.capitalized(),
        )?)
    }

    /// Spell this syllable with its tone mark.
    pub fn to_pinyin(&self) -> String {
        let mut spelling = String::with_capacity(16);
        spelling.push_str(self.initial.spelling());
        spelling.push_str(self.final_.spelling(self.initial.place()));
        if self.erhua {
            spelling.push('r');
        }

        if let (Some(mark), Some(i)) = (self.tone.mark(), mark_offset(&spelling)) {
            spelling.insert(i, mark);
        }

        if self.capitalized {
            let mut chars = spelling.chars();
            if let Some(first) = chars.next() {
                let mut capitalized: String = first.to_uppercase().collect();
                capitalized.push_str(chars.as_str());
                return capitalized;
            }
        }

        spelling
    }
}

/// Byte offset just past the vowel that carries the tone mark.
///
/// An "a" or "e" takes it (no syllable has both), else the "o" of "ou", else
/// the last vowel.
fn mark_offset(spelling: &str) -> Option<usize> {
    let (i, c) = spelling
        .char_indices()
        .find(|&(_, c)| matches!(c, 'a' | 'e'))
        .or_else(|| spelling.find("ou").map(|i| (i, 'o')))
        .or_else(|| {
            spelling
                .char_indices()
                .rev()
                .find(|&(_, c)| matches!(c, 'a' | 'o' | 'e' | 'i' | 'u' | 'ü'))
        })?;

    Some(i + c.len_utf8())
}

impl PartialEq for Syllable {
    fn eq(&self, other: &Self) -> bool {
        self.eq_with(other, false)
    }
}

impl Eq for Syllable {}

impl Hash for Syllable {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.initial.hash(state);
        self.final_.hash(state);
        self.tone.hash(state);
        self.erhua.hash(state);
    }
}

impl fmt::Display for Syllable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_pinyin())
    }
}

impl From<Syllable> for u16 {
    fn from(syllable: Syllable) -> Self {
        syllable.to_bits()
    }
}

impl TryFrom<u16> for Syllable {
    type Error = DecodeError;

    fn try_from(bits: u16) -> Result<Self, Self::Error> {
        Self::from_bits(bits)
    }
}
