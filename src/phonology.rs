//! The closed phonological inventory: initials, finals, tones, and the
//! table of legal combinations.
//!
//! All tables are constant data. Spellings are lowercase; callers fold case
//! before looking them up.

pub mod finals;
pub mod initial;
pub mod legality;
pub mod tone;

pub use finals::Final;
pub use initial::{Initial, Place};
pub use legality::{is_legal, legal_finals};
pub use tone::Tone;
