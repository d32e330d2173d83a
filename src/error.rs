// In: src/error.rs

//! This module defines the single, unified error type for the entire simple8b crate.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.
//!
//! Every kernel reports precondition and format violations through this enum.
//! Nothing here is retried or recovered internally; that belongs to the caller.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Simple8bError {
    // =========================================================================
    // === Codec Errors (Word format and packing contract)
    // =========================================================================
    /// An encoder input cannot be represented even by the 60-bit scheme.
    #[error("Value {value} at index {index} exceeds the 60-bit Simple8b limit")]
    ValueTooLarge { index: usize, value: u64 },

    /// A selector code outside 0..=15 was encountered. Indicates a corrupted
    /// stream or a format/version mismatch.
    #[error("Invalid Simple8b selector code {code}")]
    InvalidSelector { code: u8 },

    /// The word stream ran out before the requested number of values was produced.
    #[error("Word stream exhausted after {decoded} of {expected} values ({words} words available)")]
    LengthMismatch {
        expected: usize,
        decoded: usize,
        words: usize,
    },

    /// A caller-owned output buffer is too small for the operation.
    #[error("Output buffer too small: required {required}, available {available}")]
    OutputTooSmall { required: usize, available: usize },

    /// A decoded value does not fit the requested output integer type.
    #[error("Decoded value {value} does not fit in {target}")]
    NarrowingOverflow { value: u64, target: &'static str },

    // =========================================================================
    // === Buffer Errors
    // =========================================================================
    #[error("Buffer length mismatch: expected a multiple of {0}, got {1}")]
    BufferMismatch(usize, usize),

    /// An error from a safe byte-casting operation failing.
    #[error("Byte slice casting error: {0}")]
    PodCast(String), // Manual `From` impl is needed as bytemuck::PodCastError doesn't impl Error

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// An error from the Serde JSON library, typically while parsing a `CodecConfig`.
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    /// An error originating from the underlying I/O subsystem (e.g. opening a log file).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal logic error (this is a bug): {0}")]
    InternalError(String),
}

// =============================================================================
// === Manual `From` Implementations ===
// =============================================================================

impl From<bytemuck::PodCastError> for Simple8bError {
    fn from(err: bytemuck::PodCastError) -> Self {
        Simple8bError::PodCast(err.to_string())
    }
}
