//! Convenience interfaces for reading and writing the binary form.
//!
//! Strings are self-terminated, so several may be written back to back and
//! read in turn.

#[cfg(feature = "std")]
pub mod stream;
pub mod slice;

pub use slice::decode as decode_slice;
pub use slice::encode as encode_vec;
#[cfg(feature = "std")]
pub use stream::decode as decode_reader;
#[cfg(feature = "std")]
pub use stream::encode as encode_writer;
