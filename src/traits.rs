//! This module defines shared traits used across different kernels.
//!
//! ZigZag maps a signed integer onto the unsigned integer of the same width and
//! back again. These traits tie each pair together so the kernels can stay generic.

use bytemuck::Pod;
use num_traits::{PrimInt, Signed, Unsigned, WrappingSub};

/// A trait that maps a signed integer type to its unsigned counterpart.
pub trait HasUnsigned {
    type Unsigned: PrimInt + Unsigned + WrappingSub + Pod;
}

/// A trait that maps an unsigned integer type to its signed counterpart.
pub trait HasSigned {
    type Signed: PrimInt + Signed + Pod;
}

// Implement the traits for all primitive integer types.
macro_rules! impl_signed_unsigned_pair {
    ($S:ty, $U:ty) => {
        impl HasUnsigned for $S {
            type Unsigned = $U;
        }
        impl HasSigned for $U {
            type Signed = $S;
        }
    };
}

impl_signed_unsigned_pair!(i8, u8);
impl_signed_unsigned_pair!(i16, u16);
impl_signed_unsigned_pair!(i32, u32);
impl_signed_unsigned_pair!(i64, u64);
impl_signed_unsigned_pair!(i128, u128);
