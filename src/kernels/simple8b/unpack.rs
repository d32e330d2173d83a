//! The Simple8b unpacker.
//!
//! Each word names its own scheme in the top nibble, but the stream does not
//! record how many values it holds in total: the caller supplies that count.
//! While more than 240 output slots remain every word is expanded in full; after
//! that each word yields `min(count, slots_remaining)` values, because the
//! encoder may have filled a tail word only partially.

use log::{debug, warn};

use super::selector::{Selector, MAX_VALUES_PER_WORD};
use crate::error::Simple8bError;

/// Decodes exactly `num_values` values from `words` into `output`, replacing its
/// contents. Returns the number of words consumed.
///
/// On error `output` is left empty.
pub fn decode<T>(
    words: &[u64],
    num_values: usize,
    output: &mut Vec<T>,
) -> Result<usize, Simple8bError>
where
    T: Copy + Default + TryFrom<u64>,
{
    output.clear();
    // No word holds more than 240 values, so a larger count cannot be satisfied.
    if num_values > words.len().saturating_mul(MAX_VALUES_PER_WORD) {
        warn!(
            "simple8b: {} values requested from only {} words",
            num_values,
            words.len()
        );
        return Err(Simple8bError::LengthMismatch {
            expected: num_values,
            decoded: 0,
            words: words.len(),
        });
    }
    output.resize(num_values, T::default());
    decode_into(words, output).map_err(|e| {
        output.clear();
        e
    })
}

/// Decodes `output.len()` values from `words` into a caller-owned slice.
/// Returns the number of words consumed, which lets callers walk concatenated streams.
pub fn decode_into<T>(words: &[u64], output: &mut [T]) -> Result<usize, Simple8bError>
where
    T: Copy + TryFrom<u64>,
{
    let expected = output.len();
    let mut out = 0;
    let mut consumed = 0;

    while expected - out > MAX_VALUES_PER_WORD {
        let word = next_word(words, consumed, out, expected)?;
        let s = Selector::of_word(word)?;
        unpack_fields(word, &s, &mut output[out..out + s.count()])?;
        out += s.count();
        consumed += 1;
    }
    while out < expected {
        let word = next_word(words, consumed, out, expected)?;
        let s = Selector::of_word(word)?;
        let n = s.count().min(expected - out);
        unpack_fields(word, &s, &mut output[out..out + n])?;
        out += n;
        consumed += 1;
    }

    debug!("simple8b: unpacked {} values from {} words", expected, consumed);
    Ok(consumed)
}

fn next_word(
    words: &[u64],
    index: usize,
    decoded: usize,
    expected: usize,
) -> Result<u64, Simple8bError> {
    words.get(index).copied().ok_or_else(|| {
        warn!(
            "simple8b: word stream exhausted at {} of {} values",
            decoded, expected
        );
        Simple8bError::LengthMismatch {
            expected,
            decoded,
            words: words.len(),
        }
    })
}

/// Extracts `out.len()` fields, most significant first.
#[inline]
fn unpack_fields<T>(word: u64, s: &Selector, out: &mut [T]) -> Result<(), Simple8bError>
where
    T: Copy + TryFrom<u64>,
{
    for (k, slot) in out.iter_mut().enumerate() {
        let value = s.field(word, k);
        *slot = T::try_from(value).map_err(|_| Simple8bError::NarrowingOverflow {
            value,
            target: std::any::type_name::<T>(),
        })?;
    }
    Ok(())
}
