//! Summary statistics over an encoded word stream, without decoding it.

use serde::{Deserialize, Serialize};

use super::selector::{Selector, SELECTORS};
use crate::error::Simple8bError;

/// How a stream of `values` integers was packed into `words` words.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PackingStats {
    pub words: usize,
    pub values: usize,
    /// Number of words using each selector code.
    pub selector_histogram: [usize; 16],
    /// Encoded bits spent per input value (64 for uncompressed `u64`).
    pub bits_per_value: f64,
}

impl PackingStats {
    /// Ratio of raw `u64` storage to encoded storage.
    pub fn compression_ratio(&self) -> f64 {
        if self.words == 0 {
            return 1.0;
        }
        self.values as f64 / self.words as f64
    }

    /// Code of the most frequently used selector, if any words were analyzed.
    pub fn dominant_selector(&self) -> Option<Selector> {
        if self.words == 0 {
            return None;
        }
        let (code, _) = self
            .selector_histogram
            .iter()
            .enumerate()
            .max_by_key(|&(code, count)| (*count, std::cmp::Reverse(code)))?;
        SELECTORS.get(code).copied()
    }
}

/// Builds [`PackingStats`] for a stream known to hold `num_values` values.
pub fn analyze(words: &[u64], num_values: usize) -> Result<PackingStats, Simple8bError> {
    let mut selector_histogram = [0usize; 16];
    for &word in words {
        let s = Selector::of_word(word)?;
        selector_histogram[s.code() as usize] += 1;
    }

    let bits_per_value = if num_values == 0 {
        0.0
    } else {
        (words.len() * 64) as f64 / num_values as f64
    };

    Ok(PackingStats {
        words: words.len(),
        values: num_values,
        selector_histogram,
        bits_per_value,
    })
}
