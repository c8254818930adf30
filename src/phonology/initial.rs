//! Syllable onsets.

use core::fmt;

/// The initial (consonant onset) of a syllable, or its absence.
///
/// Glides are attributed to the final, so a syllable spelled with a leading
/// "y" or "w" has the [`Initial::Empty`] initial.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Initial {
    /// No onset, as in "e" or "you".
    Empty = 0,
    /// "b".
    B,
    /// "p".
    P,
    /// "m".
    M,
    /// "f".
    F,
    /// "d".
    D,
    /// "t".
    T,
    /// "n".
    N,
    /// "l".
    L,
    /// "g".
    G,
    /// "k".
    K,
    /// "h".
    H,
    /// "j".
    J,
    /// "q".
    Q,
    /// "x".
    X,
    /// "zh".
    Zh,
    /// "ch".
    Ch,
    /// "sh".
    Sh,
    /// "r".
    R,
    /// "z".
    Z,
    /// "c".
    C,
    /// "s".
    S,
}

/// Coarse place of articulation of an initial.
///
/// Only the distinctions that change the spelling of a following final are
/// kept; everything else is grouped under [`Place::Other`].
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Place {
    /// Not a place of articulation, but the category of [`Initial::Empty`].
    Empty = 0,
    /// "b", "p", "m" and "f". The final "uo" is written "o" after these.
    Labial,
    /// "j", "q" and "x". The "ü" of a final is written "u" after these.
    Palatal,
    /// Every other initial.
    Other,
}

impl Initial {
    /// Every initial, ordered by index.
    pub const ALL: [Initial; 22] = [
        Self::Empty,
        Self::B,
        Self::P,
        Self::M,
        Self::F,
        Self::D,
        Self::T,
        Self::N,
        Self::L,
        Self::G,
        Self::K,
        Self::H,
        Self::J,
        Self::Q,
        Self::X,
        Self::Zh,
        Self::Ch,
        Self::Sh,
        Self::R,
        Self::Z,
        Self::C,
        Self::S,
    ];

    /// A unique index in `0..22`.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Look up the initial with an index, if one exists.
    pub const fn from_index(index: u8) -> Option<Self> {
        if (index as usize) < Self::ALL.len() {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    /// The lowercase spelling of this initial (empty for [`Initial::Empty`]).
    pub const fn spelling(self) -> &'static str {
        match self {
            Self::Empty => "",
            Self::B => "b",
            Self::P => "p",
            Self::M => "m",
            Self::F => "f",
            Self::D => "d",
            Self::T => "t",
            Self::N => "n",
            Self::L => "l",
            Self::G => "g",
            Self::K => "k",
            Self::H => "h",
            Self::J => "j",
            Self::Q => "q",
            Self::X => "x",
            Self::Zh => "zh",
            Self::Ch => "ch",
            Self::Sh => "sh",
            Self::R => "r",
            Self::Z => "z",
            Self::C => "c",
            Self::S => "s",
        }
    }

    /// Look up the initial with a lowercase spelling, if one exists.
    ///
    /// The empty string is the spelling of [`Initial::Empty`].
    pub fn from_spelling(spelling: &str) -> Option<Self> {
        Some(match spelling {
            "" => Self::Empty,
            "b" => Self::B,
            "p" => Self::P,
            "m" => Self::M,
            "f" => Self::F,
            "d" => Self::D,
            "t" => Self::T,
            "n" => Self::N,
            "l" => Self::L,
            "g" => Self::G,
            "k" => Self::K,
            "h" => Self::H,
            "j" => Self::J,
            "q" => Self::Q,
            "x" => Self::X,
            "zh" => Self::Zh,
            "ch" => Self::Ch,
            "sh" => Self::Sh,
            "r" => Self::R,
            "z" => Self::Z,
            "c" => Self::C,
            "s" => Self::S,
            _ => return None,
        })
    }

    /// The place of articulation, selecting the spelling of the final.
    pub const fn place(self) -> Place {
        match self {
            Self::Empty => Place::Empty,
            Self::B | Self::P | Self::M | Self::F => Place::Labial,
            Self::J | Self::Q | Self::X => Place::Palatal,
            _ => Place::Other,
        }
    }
}

impl fmt::Display for Initial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("(empty)"),
            _ => f.write_str(self.spelling()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trip() {
        for (i, initial) in Initial::ALL.iter().enumerate() {
            assert_eq!(initial.index() as usize, i);
            assert_eq!(Initial::from_index(i as u8), Some(*initial));
        }
        assert_eq!(Initial::from_index(22), None);
        assert_eq!(Initial::from_index(31), None);
    }

    #[test]
    fn spelling_round_trip() {
        for initial in Initial::ALL {
            assert_eq!(Initial::from_spelling(initial.spelling()), Some(initial));
        }
        assert_eq!(Initial::from_spelling("y"), None);
        assert_eq!(Initial::from_spelling("ng"), None);
        assert_eq!(Initial::from_spelling("B"), None);
    }
}
