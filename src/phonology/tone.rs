//! The four tones and the neutral tone.

/// The tone of a syllable.
///
/// The index of each tone is its ordinal in Chinese linguistics, with the
/// neutral tone at zero.
#[repr(u8)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tone {
    /// Unmarked, as in "de".
    #[default]
    Neutral = 0,
    /// First tone, marked "ā".
    High,
    /// Second tone, marked "á".
    Rising,
    /// Third tone, marked "ǎ".
    Low,
    /// Fourth tone, marked "à".
    Falling,
}

impl Tone {
    /// Every tone, ordered by index.
    pub const ALL: [Tone; 5] = [
        Self::Neutral,
        Self::High,
        Self::Rising,
        Self::Low,
        Self::Falling,
    ];

    /// A unique index in `0..5`.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Look up the tone with an index, if one exists.
    pub const fn from_index(index: u8) -> Option<Self> {
        if (index as usize) < Self::ALL.len() {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    /// The combining diacritic placed after the marked vowel, if any.
    pub const fn mark(self) -> Option<char> {
        match self {
            Self::Neutral => None,
            Self::High => Some('\u{0304}'),
            Self::Rising => Some('\u{0301}'),
            Self::Low => Some('\u{030C}'),
            Self::Falling => Some('\u{0300}'),
        }
    }

    /// Look up the tone carrying a combining diacritic.
    pub const fn from_mark(mark: char) -> Option<Self> {
        match mark {
            '\u{0304}' => Some(Self::High),
            '\u{0301}' => Some(Self::Rising),
            '\u{030C}' => Some(Self::Low),
            '\u{0300}' => Some(Self::Falling),
            _ => None,
        }
    }

    /// Split a precomposed vowel with a tone mark, such as "ǎ", into its
    /// base vowel and tone.
    pub const fn split_marked(c: char) -> Option<(char, Self)> {
        use Tone::*;

        Some(match c {
            'ā' => ('a', High),
            'á' => ('a', Rising),
            'ǎ' => ('a', Low),
            'à' => ('a', Falling),
            'ē' => ('e', High),
            'é' => ('e', Rising),
            'ě' => ('e', Low),
            'è' => ('e', Falling),
            'ī' => ('i', High),
            'í' => ('i', Rising),
            'ǐ' => ('i', Low),
            'ì' => ('i', Falling),
            'ō' => ('o', High),
            'ó' => ('o', Rising),
            'ǒ' => ('o', Low),
            'ò' => ('o', Falling),
            'ū' => ('u', High),
            'ú' => ('u', Rising),
            'ǔ' => ('u', Low),
            'ù' => ('u', Falling),
            'ǖ' => ('ü', High),
            'ǘ' => ('ü', Rising),
            'ǚ' => ('ü', Low),
            'ǜ' => ('ü', Falling),
            'Ā' => ('A', High),
            'Á' => ('A', Rising),
            'Ǎ' => ('A', Low),
            'À' => ('A', Falling),
            'Ē' => ('E', High),
            'É' => ('E', Rising),
            'Ě' => ('E', Low),
            'È' => ('E', Falling),
            'Ī' => ('I', High),
            'Í' => ('I', Rising),
            'Ǐ' => ('I', Low),
            'Ì' => ('I', Falling),
            'Ō' => ('O', High),
            'Ó' => ('O', Rising),
            'Ǒ' => ('O', Low),
            'Ò' => ('O', Falling),
            'Ū' => ('U', High),
            'Ú' => ('U', Rising),
            'Ǔ' => ('U', Low),
            'Ù' => ('U', Falling),
            'Ǖ' => ('Ü', High),
            'Ǘ' => ('Ü', Rising),
            'Ǚ' => ('Ü', Low),
            'Ǜ' => ('Ü', Falling),
            _ => return None,
        })
    }

    /// Look up the tone written as a trailing digit.
    ///
    /// Both `0` and `5` denote the neutral tone.
    pub const fn from_digit(digit: char) -> Option<Self> {
        match digit {
            '0'..='5' => Self::from_index((digit as u8 - b'0') % 5),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_round_trip() {
        assert_eq!(Tone::Neutral.mark(), None);
        for tone in &Tone::ALL[1..] {
            let mark = tone.mark().unwrap();
            assert_eq!(Tone::from_mark(mark), Some(*tone));
        }
        assert_eq!(Tone::from_mark('a'), None);
    }

    #[test]
    fn precomposed() {
        assert_eq!(Tone::split_marked('ǎ'), Some(('a', Tone::Low)));
        assert_eq!(Tone::split_marked('ǜ'), Some(('ü', Tone::Falling)));
        assert_eq!(Tone::split_marked('Ē'), Some(('E', Tone::High)));
        assert_eq!(Tone::split_marked('ü'), None);
        assert_eq!(Tone::split_marked('a'), None);
    }

    #[test]
    fn digits() {
        assert_eq!(Tone::from_digit('0'), Some(Tone::Neutral));
        assert_eq!(Tone::from_digit('3'), Some(Tone::Low));
        assert_eq!(Tone::from_digit('5'), Some(Tone::Neutral));
        assert_eq!(Tone::from_digit('6'), None);
        assert_eq!(Tone::from_digit('x'), None);
        assert_eq!(Tone::from_index(5), None);
    }
}
