//! Simple8b: packs runs of small unsigned integers into self-describing 64-bit words.
//!
//! The word stream does not record how many values it holds. Callers must carry
//! that count alongside the words and hand it back to [`decode`].

pub mod pack;
pub mod selector;
pub mod stats;
pub mod unpack;

pub use pack::{encode, encode_into, max_encoded_words};
pub use selector::{Selector, MAX_VALUE, MAX_VALUES_PER_WORD, SELECTORS};
pub use stats::{analyze, PackingStats};
pub use unpack::{decode, decode_into};
