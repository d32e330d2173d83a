//! This module provides a set of shared, low-level utility functions for moving
//! word streams in and out of byte buffers.
//!
//! Its primary responsibilities include:
//! 1.  Providing safe, validated views of raw byte slices as typed slices.
//! 2.  Converting word streams to and from an explicit little-endian byte layout,
//!     independent of host endianness and buffer alignment.

use crate::error::Simple8bError;

//==================================================================================
// 1. Core Utility Functions
//==================================================================================

/// Safely reinterprets a byte slice as a slice of a primitive integer type.
///
/// This is a zero-copy view in native byte order. It fails if the length is not
/// a multiple of `size_of::<T>()` or if `bytes` is not aligned for `T`; use
/// [`le_bytes_to_words`] when the buffer alignment is not under your control.
///
/// # Errors
/// Returns `Simple8bError::PodCast` wrapping bytemuck's description of the failure.
pub fn safe_bytes_to_typed_slice<T>(bytes: &[u8]) -> Result<&[T], Simple8bError>
where
    T: bytemuck::Pod,
{
    Ok(bytemuck::try_cast_slice(bytes)?)
}

/// Converts a slice of primitive integers into a `Vec<u8>` in native byte order.
pub fn typed_slice_to_bytes<T: bytemuck::Pod>(data: &[T]) -> Vec<u8> {
    bytemuck::cast_slice(data).to_vec()
}

/// Serializes a word stream as little-endian bytes, 8 per word.
pub fn words_to_le_bytes(words: &[u64]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(words.len() * 8);
    for word in words {
        bytes.extend_from_slice(&word.to_le_bytes());
    }
    bytes
}

/// Parses little-endian bytes back into a word stream.
///
/// # Errors
/// Returns `Simple8bError::BufferMismatch` if `bytes.len()` is not a multiple of 8.
pub fn le_bytes_to_words(bytes: &[u8]) -> Result<Vec<u64>, Simple8bError> {
    const WORD: usize = std::mem::size_of::<u64>();
    if bytes.len() % WORD != 0 {
        return Err(Simple8bError::BufferMismatch(WORD, bytes.len()));
    }
    Ok(bytes
        .chunks_exact(WORD)
        .map(|chunk| {
            let mut raw = [0u8; WORD];
            raw.copy_from_slice(chunk);
            u64::from_le_bytes(raw)
        })
        .collect())
}

//==================================================================================
// 2. Unit Tests
//==================================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_bytes_to_typed_slice_success() {
        let original_vec: Vec<u64> = vec![1, 2, 1 << 60];
        let bytes = typed_slice_to_bytes(&original_vec);

        let typed_slice = safe_bytes_to_typed_slice::<u64>(&bytes).unwrap();
        assert_eq!(typed_slice, original_vec.as_slice());
    }

    #[test]
    fn test_safe_bytes_to_typed_slice_mismatch_error() {
        // 5 bytes is not divisible by size_of::<u32>(). It may also be unaligned.
        let bytes: Vec<u8> = vec![0, 1, 2, 3, 4];
        let result = safe_bytes_to_typed_slice::<u32>(&bytes);
        assert!(matches!(result, Err(Simple8bError::PodCast(_))));
    }

    #[test]
    fn test_le_bytes_layout() {
        let bytes = words_to_le_bytes(&[0x0102_0304_0506_0708, 15 << 60]);
        assert_eq!(&bytes[..8], &[8, 7, 6, 5, 4, 3, 2, 1]);
        assert_eq!(bytes[15], 0xF0);

        let words = le_bytes_to_words(&bytes).unwrap();
        assert_eq!(words, vec![0x0102_0304_0506_0708, 15 << 60]);
    }

    #[test]
    fn test_le_bytes_to_words_rejects_ragged_length() {
        let result = le_bytes_to_words(&[0u8; 12]);
        assert!(matches!(result, Err(Simple8bError::BufferMismatch(8, 12))));
    }

    #[test]
    fn test_le_bytes_handles_unaligned_input() {
        let mut padded = vec![0xAAu8];
        padded.extend_from_slice(&words_to_le_bytes(&[42, 7]));
        assert_eq!(le_bytes_to_words(&padded[1..]).unwrap(), vec![42, 7]);
    }
}
