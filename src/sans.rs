//! Finite-state machine for the binary form of pinyin strings.
//!
//! This module is intended for applications that need to drive decoding
//! themselves, one byte at a time. See [`crate::avec`] for implementations
//! over slices and streams.
//!
//! # Format
//!
//! A pinyin string is written entry by entry, followed by the byte
//! [`entry::TERMINATOR`]:
//!
//! - a word break is the single byte [`entry::WORD_BREAK`],
//! - a syllable is its 16-bit form (see [`crate::Syllable::to_bits`]),
//!   big-endian.
//!
//! # Architecture
//!
//! All states are represented by a non-copy token. Once a byte is ready,
//! transition to another state by calling the token's `advance` method.
//! This will return a successor state token, along with any decoded data.
//!
//! Decoding ends when [`entry::Entry::advance`] returns `None`. Reading
//! bytes, and stopping at the end of the input, is left to the caller.

pub mod entry;

/// Entrypoint to the finite-state machine.
pub type Decoder = entry::Entry;
