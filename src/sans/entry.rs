//! States processing sequence entries.

use either::Either::{self, Left, Right};
use zerocopy::byteorder::big_endian::U16;

use crate::syllable::{DecodeError, Syllable};

/// Byte encoding a word break.
pub const WORD_BREAK: u8 = 0x28;

/// Byte ending a sequence.
///
/// Neither this nor [`WORD_BREAK`] can be the first byte of a syllable, as
/// that would need a tone index of 5 or 6.
pub const TERMINATOR: u8 = 0x30;

/// State token to decode the first byte of an entry.
#[derive(Debug, Default)]
pub struct Entry(());

impl Entry {
    /// The state at the start of a pinyin string.
    pub fn new() -> Self {
        Self(())
    }

    /// Transition to another state by decoding the first byte of an entry.
    ///
    /// Returns `None` at the end of the sequence. Otherwise, returns either
    /// the next entry state, having decoded a word break, or a state to
    /// decode the second byte of a syllable.
    pub fn advance(self, r: [u8; 1]) -> Option<Either<Entry, SyllableTail>> {
        match r[0] {
            TERMINATOR => None,
            WORD_BREAK => Some(Left(Entry(()))),
            high => Some(Right(SyllableTail { high })),
        }
    }
}

/// State token to decode the second byte of a syllable.
#[derive(Debug)]
pub struct SyllableTail {
    high: u8,
}

impl SyllableTail {
    /// Transition to another state by decoding the second byte of a
    /// syllable.
    ///
    /// Returns the syllable, and the next entry state.
    pub fn advance(self, r: [u8; 1]) -> Result<(Syllable, Entry), DecodeError> {
        let bits: U16 = zerocopy::transmute!([self.high, r[0]]);
        let syllable = Syllable::from_bits(bits.get())
            .inspect_err(|err| tracing::debug!(%err, bits = bits.get(), "rejected syllable"))?;

        tracing::trace!(bits = bits.get(), %syllable, "decoded syllable");

        Ok((syllable, Entry(())))
    }
}

/// Encode an entry: a word break as one byte, a syllable as two.
pub fn encode(entry: Option<Syllable>) -> Either<[u8; 1], [u8; 2]> {
    match entry {
        None => Left([WORD_BREAK]),
        Some(syllable) => Right(zerocopy::transmute!(U16::new(syllable.to_bits()))),
    }
}
