//! The fixed Simple8b selector table and the bit helpers shared by the packer
//! and the unpacker.
//!
//! A word is 4 selector bits followed by 60 payload bits. The payload holds
//! `count` fields of `bit_width` bits each, first value in the highest-order field.

use crate::error::Simple8bError;

/// Number of high-order bits holding the selector code.
pub const SELECTOR_BITS: u32 = 4;
/// Number of payload bits below the selector.
pub const PAYLOAD_BITS: u32 = 64 - SELECTOR_BITS;
/// Largest value any scheme can hold (selector 15, one 60-bit field).
pub const MAX_VALUE: u64 = (1 << PAYLOAD_BITS) - 1;
/// Largest number of values a single word can represent (selector 0).
pub const MAX_VALUES_PER_WORD: usize = 240;

/// One packing scheme: `count` values of `bit_width` bits each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selector {
    code: u8,
    count: usize,
    bit_width: u32,
}

const fn sel(code: u8, count: usize, bit_width: u32) -> Selector {
    Selector {
        code,
        count,
        bit_width,
    }
}

/// All sixteen schemes, indexed by code. This is also the packer's priority order.
pub const SELECTORS: [Selector; 16] = [
    sel(0, 240, 0),
    sel(1, 120, 0),
    sel(2, 60, 1),
    sel(3, 30, 2),
    sel(4, 20, 3),
    sel(5, 15, 4),
    sel(6, 12, 5),
    sel(7, 10, 6),
    sel(8, 8, 7),
    sel(9, 7, 8),
    sel(10, 6, 10),
    sel(11, 5, 12),
    sel(12, 4, 15),
    sel(13, 3, 20),
    sel(14, 2, 30),
    sel(15, 1, 60),
];

impl Selector {
    /// Looks up a scheme by its 4-bit code.
    pub fn from_code(code: u8) -> Result<Selector, Simple8bError> {
        SELECTORS
            .get(code as usize)
            .copied()
            .ok_or(Simple8bError::InvalidSelector { code })
    }

    /// Reads the selector from the top bits of a word.
    pub fn of_word(word: u64) -> Result<Selector, Simple8bError> {
        Self::from_code((word >> PAYLOAD_BITS) as u8)
    }

    pub const fn code(&self) -> u8 {
        self.code
    }

    pub const fn count(&self) -> usize {
        self.count
    }

    pub const fn bit_width(&self) -> u32 {
        self.bit_width
    }

    /// True for the two schemes whose values are implicitly zero.
    pub const fn is_zero_run(&self) -> bool {
        self.bit_width == 0
    }

    /// Whether `value` is representable in this scheme's field width.
    #[inline]
    pub fn fits(&self, value: u64) -> bool {
        value >> self.bit_width == 0
    }

    #[inline]
    fn mask(&self) -> u64 {
        (1u64 << self.bit_width) - 1
    }

    /// Extracts field `k` (0 = most significant) from `word`.
    #[inline]
    pub fn field(&self, word: u64, k: usize) -> u64 {
        if self.bit_width == 0 {
            return 0;
        }
        let shift = PAYLOAD_BITS - self.bit_width * (k as u32 + 1);
        (word >> shift) & self.mask()
    }

    /// Selector code shifted into its position in a word.
    #[inline]
    pub fn tag(&self) -> u64 {
        (self.code as u64) << PAYLOAD_BITS
    }
}

impl TryFrom<u8> for Selector {
    type Error = Simple8bError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Selector::from_code(code)
    }
}

/// Appends `value` below the bits already accumulated in `word`.
#[inline]
pub fn write_bits(word: &mut u64, value: u64, num_bits: u32) {
    *word = if num_bits == 0 {
        *word
    } else {
        (*word << num_bits) | value
    };
}
