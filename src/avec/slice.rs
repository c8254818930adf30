//! Slice-based codec implementation.

use alloc::vec::Vec;

use either::Either::{Left, Right};
use thiserror::Error;

use crate::{
    sans::{
        Decoder,
        entry::{self, TERMINATOR},
    },
    string::PinyinString,
    syllable::DecodeError,
};

/// Errors occurring while decoding from a slice.
#[derive(Debug, Error)]
pub enum Error {
    /// Unexpectedly reached the end of the slice.
    #[error("Unexpectedly reached the end of the slice.")]
    EndOfSlice,
    /// Found an invalid syllable.
    #[error("Invalid syllable: {0}")]
    Syllable(#[from] DecodeError),
}

/// Decode a pinyin string from the front of a slice.
///
/// Returns the string, and the bytes following its terminator.
///
/// This method is also re-exported as `tonemark::avec::decode_slice`.
pub fn decode(r: &[u8]) -> Result<(PinyinString, &[u8]), Error> {
    let i = &mut 0; // Offset of the next byte to read.

    let mut entries = Vec::new();
    let mut state = Decoder::new();

    while let Some(successor) = state.advance(take(r, i)?) {
        state = match successor {
            Left(state) => {
                entries.push(None);
                state
            }
            Right(tail) => {
                let (syllable, state) = tail.advance(take(r, i)?)?;
                entries.push(Some(syllable));
                state
            }
        };
    }

    tracing::trace!(entries = entries.len(), bytes = *i, "decoded pinyin string");

    Ok((PinyinString::from_entries(entries), &r[*i..]))
}

/// Encode a pinyin string, appending it to a buffer.
///
/// This method is also re-exported as `tonemark::avec::encode_vec`.
pub fn encode(s: &PinyinString, o: &mut Vec<u8>) {
    for item in s.entries() {
        match entry::encode(*item) {
            Left(bytes) => o.extend_from_slice(&bytes),
            Right(bytes) => o.extend_from_slice(&bytes),
        }
    }

    o.push(TERMINATOR);
}

/// Take an exact number of bytes from an offset in a slice, advancing the offset.
fn take<const N: usize>(r: &[u8], i: &mut usize) -> Result<[u8; N], Error> {
    let s = *i;
    *i += N;

    Ok(r.get(s..*i).ok_or(Error::EndOfSlice)?.try_into().unwrap())
}
