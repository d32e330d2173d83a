//! This module contains the pure, stateless, and performant kernels for performing
//! Zig-zag encoding and decoding.
//!
//! This is a bit-width reduction transform: a lossless, bitwise mapping of signed
//! integers to unsigned integers of the same width, so that small negative values
//! (common after delta encoding) land on small unsigned values the word packer can
//! store at a low bit width. The slice kernels work in place and hand back a view
//! of the same memory under the counterpart type.

use bytemuck::Pod;
use num_traits::{PrimInt, Signed, Unsigned, WrappingSub};

use crate::traits::{HasSigned, HasUnsigned};

//==================================================================================
// 1. Generic Core Logic (The "Engine")
//==================================================================================

/// Encodes a single signed integer using the Zig-zag algorithm.
pub fn encode_val<T>(n: T) -> T::Unsigned
where
    T: PrimInt + Signed + HasUnsigned + Pod,
{
    let bits = std::mem::size_of::<T>() * 8;
    // `>>` on a signed primitive is arithmetic, so this is all-ones for negatives.
    let shifted = (n << 1) ^ (n >> (bits - 1));
    bytemuck::cast(shifted)
}

/// Decodes a single unsigned integer back to its signed representation.
pub fn decode_val<U>(n: U) -> U::Signed
where
    U: PrimInt + Unsigned + HasSigned + WrappingSub + Pod,
{
    // (n >> 1) ^ -(n & 1), with the negation done as a wrapping subtraction.
    let sign_mask = U::zero().wrapping_sub(&(n & U::one()));
    bytemuck::cast((n >> 1) ^ sign_mask)
}

//==================================================================================
// 2. Public API (In-Place)
//==================================================================================

/// Zig-zag encodes `data` in place and returns the same memory viewed as unsigned.
pub fn encode_inplace<T>(data: &mut [T]) -> &mut [T::Unsigned]
where
    T: PrimInt + Signed + HasUnsigned + Pod,
{
    for value in data.iter_mut() {
        *value = bytemuck::cast(encode_val(*value));
    }
    bytemuck::cast_slice_mut(data)
}

/// Reverses [`encode_inplace`] and returns the same memory viewed as signed.
pub fn decode_inplace<U>(data: &mut [U]) -> &mut [U::Signed]
where
    U: PrimInt + Unsigned + HasSigned + WrappingSub + Pod,
{
    for value in data.iter_mut() {
        *value = bytemuck::cast(decode_val(*value));
    }
    bytemuck::cast_slice_mut(data)
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
