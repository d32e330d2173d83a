//! This module contains the pure, stateless kernels for performing delta
//! encoding and decoding.
//!
//! This is the value-reduction step that runs ahead of the word packer. Both
//! directions work **in-place** on a caller-owned slice. Arithmetic wraps modulo
//! the integer width, which is what lets `decode_inplace` exactly undo
//! `encode_inplace` even when intermediate differences overflow.

use num_traits::{PrimInt, WrappingAdd, WrappingSub};

//==================================================================================
// 1. Generic Core Logic (In-Place)
//==================================================================================

/// Replaces every element after the first with its difference from its predecessor.
///
/// `data[0]` is left unchanged. Runs from the highest index down so that each
/// difference is computed against the still-original value at `i - 1`.
pub fn encode_inplace<T>(data: &mut [T])
where
    T: PrimInt + WrappingSub,
{
    if data.len() <= 1 {
        return;
    }
    for i in (1..data.len()).rev() {
        data[i] = data[i].wrapping_sub(&data[i - 1]);
    }
}

/// Reverses [`encode_inplace`] with a running (wrapping) sum.
///
/// Runs from the lowest index up so each step adds the already-restored predecessor.
pub fn decode_inplace<T>(data: &mut [T])
where
    T: PrimInt + WrappingAdd,
{
    if data.len() <= 1 {
        return;
    }
    for i in 1..data.len() {
        data[i] = data[i].wrapping_add(&data[i - 1]);
    }
}

//==================================================================================
// 2. Unit Tests
//==================================================================================
