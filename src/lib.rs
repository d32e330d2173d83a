//! This file is the root of the `simple8b` Rust crate.
//!
//! A fixed-format integer codec: Simple8b packs sequences of small non-negative
//! integers into dense 64-bit words, and two reversible in-place transforms
//! (delta and zigzag) widen the set of sequences that pack well.
//!
//! ```
//! use simple8b::kernels::{delta, simple8b as s8b, zigzag};
//!
//! let original: Vec<i64> = vec![1000, 1003, 1001, 1001, 1010];
//! let mut buffer = original.clone();
//! delta::encode_inplace(&mut buffer);
//! let unsigned = zigzag::encode_inplace(&mut buffer);
//!
//! let mut words = Vec::new();
//! s8b::encode(unsigned, &mut words).unwrap();
//!
//! // The word stream does not store its length; the caller keeps it.
//! let mut restored: Vec<u64> = Vec::new();
//! s8b::decode(&words, original.len(), &mut restored).unwrap();
//! let signed = zigzag::decode_inplace(&mut restored);
//! delta::decode_inplace(&mut signed[..]);
//! assert_eq!(signed, original.as_slice());
//! ```
//!
//! All operations are synchronous and hold no state between calls. The in-place
//! transforms mutate only the slice they are given.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================
#[macro_use]
mod observability; // Make macros available throughout the crate

pub mod config;
pub mod error;
pub mod kernels;
pub mod pipeline;
pub mod traits;
pub mod utils;

//==================================================================================
// 2. Re-exports
//==================================================================================
pub use config::CodecConfig;
pub use error::Simple8bError;
pub use observability::init_logging;
pub use pipeline::{compress, decompress, EncodedColumn};

// Used by `log_metric!` so callers don't need `log` in scope.
#[doc(hidden)]
pub use log;
