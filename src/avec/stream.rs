//! Stream-based codec implementation.
//!
//! _Requires Cargo feature `std`._

use std::{
    io::{Read, Write},
    vec::Vec,
};

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

extern crate std;

/// Errors occurring while decoding from a reader.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the supplied reader, including a premature end.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Found an invalid syllable.
    #[error("Invalid syllable: {0}")]
    Syllable(#[from] DecodeError),
}

/// Decode a pinyin string from a reader, stopping after its terminator.
///
/// This method is also re-exported as `tonemark::avec::decode_reader`.
///
/// _Requires Cargo feature `std`._
pub fn decode(r: &mut impl Read) -> Result<PinyinString, Error> {
    let mut entries = Vec::new();
    let mut state = Decoder::new();

    while let Some(successor) = state.advance(take(r)?) {
        state = match successor {
            Left(state) => {
                entries.push(None);
                state
            }
            Right(tail) => {
                let (syllable, state) = tail.advance(take(r)?)?;
                entries.push(Some(syllable));
                state
            }
        };
    }

    tracing::trace!(entries = entries.len(), "decoded pinyin string");

    Ok(PinyinString::from_entries(entries))
}

/// Encode a pinyin string to a writer.
///
/// This method is also re-exported as `tonemark::avec::encode_writer`.
///
/// _Requires Cargo feature `std`._
pub fn encode(s: &PinyinString, w: &mut impl Write) -> std::io::Result<()> {
    for item in s.entries() {
        match entry::encode(*item) {
            Left(bytes) => w.write_all(&bytes)?,
            Right(bytes) => w.write_all(&bytes)?,
        }
    }

    w.write_all(&[TERMINATOR])
}

/// Take an exact number of bytes from a reader.
fn take<const N: usize>(r: &mut impl Read) -> Result<[u8; N], Error> {
    let mut buf = [0; N];
    r.read_exact(&mut buf)?;
    Ok(buf)
}
