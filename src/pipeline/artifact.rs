//! The in-memory result of compressing one column.

use serde::{Deserialize, Serialize};

use super::models::Operation;
use crate::error::Simple8bError;
use crate::kernels::simple8b::{self, PackingStats};

/// A packed column together with everything needed to unpack it.
///
/// The word stream alone does not say how many values it holds, so the count
/// travels with it. Persist the whole struct, not just `words`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EncodedColumn {
    pub num_values: usize,
    pub plan: Vec<Operation>,
    pub words: Vec<u64>,
}

impl EncodedColumn {
    /// Size of the word stream in bytes.
    pub fn encoded_size_bytes(&self) -> usize {
        self.words.len() * std::mem::size_of::<u64>()
    }

    /// Packing statistics for the word stream.
    pub fn stats(&self) -> Result<PackingStats, Simple8bError> {
        simple8b::analyze(&self.words, self.num_values)
    }
}
