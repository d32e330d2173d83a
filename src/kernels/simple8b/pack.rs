//! The Simple8b packer.
//!
//! Greedy and single pass: for every output word the first scheme in table order
//! whose window of values all fit is taken. There is no look-ahead and no
//! backtracking, so the output is bit-for-bit what the classic encoder produces.
//!
//! Two regimes share one selection policy:
//! - **bulk**, while at least a full 240-value window remains, checks complete
//!   windows and special-cases the 240/120 zero runs;
//! - **tail**, for the ragged end, packs `min(count, remaining)` values into a
//!   scheme's word. Zero-run schemes still require their full window here.

use log::{debug, warn};

use super::selector::{write_bits, Selector, MAX_VALUES_PER_WORD, PAYLOAD_BITS, SELECTORS};
use crate::error::Simple8bError;

/// Worst case output size: one word per input value.
pub fn max_encoded_words(num_values: usize) -> usize {
    num_values
}

/// Packs `input` into `output`, replacing its contents. Returns the number of words.
///
/// On error `output` is left empty.
pub fn encode<T>(input: &[T], output: &mut Vec<u64>) -> Result<usize, Simple8bError>
where
    T: Copy + Into<u64>,
{
    output.clear();
    output.resize(max_encoded_words(input.len()), 0);
    match encode_into(input, output) {
        Ok(written) => {
            output.truncate(written);
            Ok(written)
        }
        Err(e) => {
            output.clear();
            Err(e)
        }
    }
}

/// Packs `input` into a caller-owned buffer, which must hold at least
/// [`max_encoded_words`] words. Returns the number of words written.
pub fn encode_into<T>(input: &[T], output: &mut [u64]) -> Result<usize, Simple8bError>
where
    T: Copy + Into<u64>,
{
    let required = max_encoded_words(input.len());
    if output.len() < required {
        return Err(Simple8bError::OutputTooSmall {
            required,
            available: output.len(),
        });
    }

    let mut pos = 0;
    let mut written = 0;

    while input.len() - pos >= MAX_VALUES_PER_WORD {
        let (word, consumed) = pack_bulk(&input[pos..], pos)?;
        output[written] = word;
        written += 1;
        pos += consumed;
    }
    while pos < input.len() {
        let (word, consumed) = pack_tail(&input[pos..], pos)?;
        output[written] = word;
        written += 1;
        pos += consumed;
    }

    debug!("simple8b: packed {} values into {} words", input.len(), written);
    Ok(written)
}

/// Chooses and packs one word; `window` holds at least 240 values.
fn pack_bulk<T>(window: &[T], base: usize) -> Result<(u64, usize), Simple8bError>
where
    T: Copy + Into<u64>,
{
    let half = &SELECTORS[1];
    if all_fit(&window[..half.count()], half) {
        let full = &SELECTORS[0];
        return Ok(if all_fit(&window[half.count()..full.count()], half) {
            (full.tag(), full.count())
        } else {
            (half.tag(), half.count())
        });
    }

    for s in &SELECTORS[2..] {
        let chunk = &window[..s.count()];
        if all_fit(chunk, s) {
            return Ok((pack_word(s, chunk), chunk.len()));
        }
    }
    Err(too_large(window, base))
}

/// Chooses and packs one word from the ragged end of the input.
fn pack_tail<T>(window: &[T], base: usize) -> Result<(u64, usize), Simple8bError>
where
    T: Copy + Into<u64>,
{
    for s in SELECTORS.iter() {
        if s.is_zero_run() {
            if window.len() >= s.count() && all_fit(&window[..s.count()], s) {
                return Ok((s.tag(), s.count()));
            }
            continue;
        }
        let chunk = &window[..s.count().min(window.len())];
        if all_fit(chunk, s) {
            return Ok((pack_word(s, chunk), chunk.len()));
        }
    }
    Err(too_large(window, base))
}

#[inline]
fn all_fit<T>(values: &[T], s: &Selector) -> bool
where
    T: Copy + Into<u64>,
{
    values.iter().all(|&v| s.fits(v.into()))
}

/// Writes the selector, then each value below the previous one, then shifts the
/// whole thing up so the selector lands in the top nibble.
fn pack_word<T>(s: &Selector, values: &[T]) -> u64
where
    T: Copy + Into<u64>,
{
    let mut word = s.code() as u64;
    for &v in values {
        write_bits(&mut word, v.into(), s.bit_width());
    }
    word << (PAYLOAD_BITS - s.bit_width() * values.len() as u32)
}

/// Only the 60-bit scheme is left when nothing fits, and it checks a single value.
fn too_large<T>(window: &[T], base: usize) -> Simple8bError
where
    T: Copy + Into<u64>,
{
    let value: u64 = window.first().map(|&v| v.into()).unwrap_or_default();
    warn!("simple8b: value {} at index {} cannot be packed", value, base);
    Simple8bError::ValueTooLarge { index: base, value }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::simple8b::selector::MAX_VALUE;
    use proptest::prelude::*;

    fn selectors_of(words: &[u64]) -> Vec<u8> {
        words.iter().map(|w| (w >> 60) as u8).collect()
    }

    #[test]
    fn test_empty_input_writes_nothing() {
        let mut words = vec![7u64; 3];
        assert_eq!(encode::<u64>(&[], &mut words).unwrap(), 0);
        assert!(words.is_empty());
    }

    #[test]
    fn test_sixty_bits_pack_into_selector_2() {
        let values: Vec<u64> = (0..60).map(|i| i % 2).collect();
        let mut words = Vec::new();
        assert_eq!(encode(&values, &mut words).unwrap(), 1);
        assert_eq!(selectors_of(&words), vec![2]);
        // First value is the most significant payload bit.
        assert_eq!(words[0], (2u64 << 60) | 0x5555_5555_5555_555);
    }

    #[test]
    fn test_max_value_uses_selector_15() {
        let mut words = Vec::new();
        assert_eq!(encode(&[MAX_VALUE], &mut words).unwrap(), 1);
        assert_eq!(words[0], (15u64 << 60) | MAX_VALUE);
    }

    #[test]
    fn test_value_too_large_reports_index() {
        let mut words = Vec::new();
        let err = encode(&[1u64, 2, 1 << 60], &mut words).unwrap_err();
        // 1 and 2 are packed into one word before the oversized value is reached.
        assert!(matches!(
            err,
            Simple8bError::ValueTooLarge { index: 2, value } if value == 1 << 60
        ));
        assert!(words.is_empty());
    }

    #[test]
    fn test_value_too_large_in_bulk_regime() {
        let mut values = vec![1u64; 300];
        values[0] = u64::MAX;
        let mut words = Vec::new();
        let err = encode(&values, &mut words).unwrap_err();
        assert!(matches!(err, Simple8bError::ValueTooLarge { index: 0, .. }));
    }

    #[test]
    fn test_zero_runs_pick_240_then_120() {
        let mut words = Vec::new();
        encode(&vec![0u64; 240], &mut words).unwrap();
        assert_eq!(words, vec![0]);

        let mut values = vec![0u64; 480];
        values[400] = 1;
        encode(&values, &mut words).unwrap();
        // 240 zeros, then 120 zeros (next 240 are not all zero), then the tail.
        assert_eq!(&selectors_of(&words)[..2], &[0, 1]);
    }

    #[test]
    fn test_tail_zero_run_needs_full_window() {
        let mut words = Vec::new();
        encode(&vec![0u64; 200], &mut words).unwrap();
        // 120 zeros, then 60 + 20 one-bit zero fields.
        assert_eq!(selectors_of(&words), vec![1, 2, 2]);
    }

    #[test]
    fn test_partial_tail_word() {
        let values: Vec<u8> = vec![64, 65, 100, 127, 70, 99, 120];
        let mut words = Vec::new();
        assert_eq!(encode(&values, &mut words).unwrap(), 1);
        assert_eq!(selectors_of(&words), vec![8]);
        // Seven 7-bit fields occupy the top 49 payload bits.
        assert_eq!((words[0] >> 11) & 0x7f, 120);
        assert_eq!(words[0] & 0x7ff, 0);
    }

    #[test]
    fn test_greedy_does_not_look_ahead() {
        // A wide value inside every multi-value window pushes the two narrow
        // leading values into the 30-bit scheme.
        let values: Vec<u32> = vec![1, 1, 1 << 20];
        let mut words = Vec::new();
        encode(&values, &mut words).unwrap();
        assert_eq!(selectors_of(&words), vec![14, 14]);
    }

    fn arb_window_value() -> impl Strategy<Value = u64> {
        prop_oneof![
            6 => Just(0u64),
            2 => 0u64..2,
            2 => 0u64..256,
            1 => 0u64..(1 << 30),
            1 => 0u64..=MAX_VALUE,
        ]
    }

    proptest! {
        #[test]
        fn prop_bulk_and_tail_choose_alike(
            zeros in 0usize..500,
            rest in prop::collection::vec(arb_window_value(), 240..700),
        ) {
            let mut values = vec![0u64; zeros];
            values.extend_from_slice(&rest);

            let mut pos = 0;
            while values.len() - pos >= MAX_VALUES_PER_WORD {
                let bulk = pack_bulk(&values[pos..], pos).unwrap();
                let tail = pack_tail(&values[pos..], pos).unwrap();
                prop_assert_eq!(bulk, tail, "diverged at position {}", pos);
                pos += bulk.1;
            }
        }
    }

    #[test]
    fn test_encode_into_rejects_short_buffer() {
        let mut out = [0u64; 2];
        let err = encode_into(&[1u16, 2, 3], &mut out).unwrap_err();
        assert!(matches!(
            err,
            Simple8bError::OutputTooSmall {
                required: 3,
                available: 2
            }
        ));
    }
}
