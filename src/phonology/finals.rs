//! Syllable finals and their place-dependent spellings.

use core::fmt;

use super::initial::{Initial, Place};

/// The final of a syllable: its nucleus, an optional nasal coda, and in
/// some cases a glide onset fused with the nucleus (as in "yan").
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Final {
    /// "a".
    A = 0,
    /// The interjection "o". Not the final of "mo", which is [`Final::Uo`].
    O,
    /// Also used for "er", built from this final and the erhua flag.
    E,
    /// "ai".
    Ai,
    /// "ei".
    Ei,
    /// "ao".
    Ao,
    /// "ou".
    Ou,
    /// "an".
    An,
    /// "en".
    En,
    /// "ang".
    Ang,
    /// "eng".
    Eng,
    /// Spelled "yi" in isolation. Includes the syllabic consonants of "zi",
    /// "ci", "si", "zhi", "chi", "shi" and "ri".
    I,
    /// "ia".
    Ia,
    /// Only occurs in isolation ("yo").
    Io,
    /// "ie".
    Ie,
    /// Only occurs in isolation ("yai").
    Iai,
    /// "iao".
    Iao,
    /// "iu".
    Iu,
    /// "ian".
    Ian,
    /// "in".
    In,
    /// "iang".
    Iang,
    /// "ing".
    Ing,
    /// "iong".
    Iong,
    /// "u".
    U,
    /// "ua".
    Ua,
    /// Spelled "wo" in isolation and "o" after a labial initial.
    Uo,
    /// "uai".
    Uai,
    /// "ui".
    Ui,
    /// "uan".
    Uan,
    /// "un".
    Un,
    /// "uang".
    Uang,
    /// Unified with "weng", as neither an isolated "ong" nor a "ueng" after
    /// an initial exist.
    Ong,
    /// "ü", spelled "yu" in isolation and "u" after a palatal initial.
    V,
    /// "üe".
    Ve,
    /// "ün".
    Vn,
    /// "üan".
    Van,
}

impl Final {
    /// Every final, ordered by index.
    pub const ALL: [Final; 36] = [
        Self::A,
        Self::O,
        Self::E,
        Self::Ai,
        Self::Ei,
        Self::Ao,
        Self::Ou,
        Self::An,
        Self::En,
        Self::Ang,
        Self::Eng,
        Self::I,
        Self::Ia,
        Self::Io,
        Self::Ie,
        Self::Iai,
        Self::Iao,
        Self::Iu,
        Self::Ian,
        Self::In,
        Self::Iang,
        Self::Ing,
        Self::Iong,
        Self::U,
        Self::Ua,
        Self::Uo,
        Self::Uai,
        Self::Ui,
        Self::Uan,
        Self::Un,
        Self::Uang,
        Self::Ong,
        Self::V,
        Self::Ve,
        Self::Vn,
        Self::Van,
    ];

    /// A unique index in `0..36`.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Look up the final with an index, if one exists.
    pub const fn from_index(index: u8) -> Option<Self> {
        if (index as usize) < Self::ALL.len() {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    /// Spellings after an empty, labial, palatal and other initial.
    const fn spellings(self) -> [&'static str; 4] {
        match self {
            Self::A => ["a"; 4],
            Self::O => ["o", "_", "o", "o"],
            Self::E => ["e"; 4],
            Self::Ai => ["ai"; 4],
            Self::Ei => ["ei"; 4],
            Self::Ao => ["ao"; 4],
            Self::Ou => ["ou"; 4],
            Self::An => ["an"; 4],
            Self::En => ["en"; 4],
            Self::Ang => ["ang"; 4],
            Self::Eng => ["eng"; 4],
            Self::I => ["yi", "i", "i", "i"],
            Self::Ia => ["ya", "ia", "ia", "ia"],
            Self::Io => ["yo", "io", "io", "io"],
            Self::Ie => ["ye", "ie", "ie", "ie"],
            Self::Iai => ["yai", "iai", "iai", "iai"],
            Self::Iao => ["yao", "iao", "iao", "iao"],
            Self::Iu => ["you", "iu", "iu", "iu"],
            Self::Ian => ["yan", "ian", "ian", "ian"],
            Self::In => ["yin", "in", "in", "in"],
            Self::Iang => ["yang", "iang", "iang", "iang"],
            Self::Ing => ["ying", "ing", "ing", "ing"],
            Self::Iong => ["yong", "iong", "iong", "iong"],
            Self::U => ["wu", "u", "u", "u"],
            Self::Ua => ["wa", "ua", "ua", "ua"],
            Self::Uo => ["wo", "o", "uo", "uo"],
            Self::Uai => ["wai", "uai", "uai", "uai"],
            Self::Ui => ["wei", "ui", "ui", "ui"],
            Self::Uan => ["wan", "uan", "uan", "uan"],
            Self::Un => ["wen", "un", "un", "un"],
            Self::Uang => ["wang", "uang", "uang", "uang"],
            Self::Ong => ["weng", "ong", "ong", "ong"],
            Self::V => ["yu", "ü", "u", "ü"],
            Self::Ve => ["yue", "üe", "ue", "üe"],
            Self::Vn => ["yun", "ün", "un", "ün"],
            Self::Van => ["yuan", "üan", "uan", "üan"],
        }
    }

    /// The lowercase spelling of this final after an initial of some place.
    ///
    /// The labial spelling of [`Final::O`] is the placeholder "_", keeping it
    /// distinct from that of [`Final::Uo`].
    pub const fn spelling(self, place: Place) -> &'static str {
        self.spellings()[place as usize]
    }

    /// Look up the final with a lowercase spelling after an initial of some
    /// place, if one exists.
    ///
    /// After a palatal initial, "u", "un" and "uan" resolve to the "ü"
    /// finals, the only ones legal there.
    pub fn from_spelling(place: Place, spelling: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .rev()
            .find(|f| f.spelling(place) == spelling)
            .copied()
    }

    /// Look up the final with a lowercase spelling after an initial, if one
    /// exists.
    ///
    /// Same as [`Final::from_spelling`] with the initial's place.
    pub fn from_spelling_after(initial: Initial, spelling: &str) -> Option<Self> {
        Self::from_spelling(initial.place(), spelling)
    }

    /// Whether this final ends in a nasal coda ("n" or "ng").
    pub const fn has_coda(self) -> bool {
        matches!(
            self,
            Self::An
                | Self::En
                | Self::Ang
                | Self::Eng
                | Self::Ian
                | Self::In
                | Self::Iang
                | Self::Ing
                | Self::Iong
                | Self::Uan
                | Self::Un
                | Self::Uang
                | Self::Ong
                | Self::Vn
                | Self::Van
        )
    }

    /// Whether the isolated spelling of this final starts unambiguously,
    /// that is with a glide rather than a bare vowel which could be read as
    /// part of the previous syllable.
    pub const fn has_unambiguous_isolated_start(self) -> bool {
        self as u8 >= Self::I as u8
    }
}

impl fmt::Display for Final {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spelling(Place::Other))
    }
}
