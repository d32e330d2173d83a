//! Executes a linear plan over a single working buffer.
//!
//! The executor is a non-strategic engine: it runs exactly the steps in the plan.
//! Transforms mutate the buffer in place; only the final packing step allocates
//! the word stream.

use log::debug;

use super::artifact::EncodedColumn;
use super::models::{build_plan, validate_plan, Operation};
use crate::config::CodecConfig;
use crate::error::Simple8bError;
use crate::kernels::{delta, simple8b, zigzag};

/// Compresses a signed column with the transforms selected in `config`.
pub fn compress(values: &[i64], config: &CodecConfig) -> Result<EncodedColumn, Simple8bError> {
    let plan = build_plan(config);
    let words = execute_linear_encode_pipeline(values, &plan)?;
    let column = EncodedColumn {
        num_values: values.len(),
        plan,
        words,
    };

    if config.enable_stats_collection {
        let stats = column.stats()?;
        debug!(
            "packed {} values into {} words, dominant selector {:?}",
            stats.values,
            stats.words,
            stats.dominant_selector().map(|s| s.code())
        );
        log_metric!(
            "event" = "compress",
            "values" = stats.values,
            "words" = stats.words,
            "bits_per_value" = format!("{:.3}", stats.bits_per_value),
        );
    }
    Ok(column)
}

/// Restores the original signed column.
pub fn decompress(column: &EncodedColumn) -> Result<Vec<i64>, Simple8bError> {
    execute_linear_decode_pipeline(&column.words, column.num_values, &column.plan)
}

/// Runs `plan` forward over a copy of `values`, returning the packed words.
pub(crate) fn execute_linear_encode_pipeline(
    values: &[i64],
    plan: &[Operation],
) -> Result<Vec<u64>, Simple8bError> {
    validate_plan(plan)?;

    let mut buffer = values.to_vec();
    let mut words = Vec::new();

    for (i, op) in plan.iter().enumerate() {
        debug!("encode step {}: {:?} over {} values", i, op, buffer.len());
        match op {
            Operation::Delta => delta::encode_inplace(&mut buffer),
            Operation::ZigZag => {
                zigzag::encode_inplace(&mut buffer);
            }
            Operation::Simple8b => {
                // Without a zigzag step, negative values reinterpret as huge
                // unsigned values and are rejected by the packer.
                let unsigned: &[u64] = bytemuck::cast_slice(&buffer);
                simple8b::encode(unsigned, &mut words)?;
            }
        }
    }

    debug!(
        "encode complete: {} values -> {} words",
        values.len(),
        words.len()
    );
    Ok(words)
}

/// Unpacks `num_values` values from `words` and runs the inverse of `plan`.
pub(crate) fn execute_linear_decode_pipeline(
    words: &[u64],
    num_values: usize,
    plan: &[Operation],
) -> Result<Vec<i64>, Simple8bError> {
    validate_plan(plan)?;

    let mut buffer: Vec<i64> = Vec::new();

    for (i, op) in plan.iter().enumerate().rev() {
        debug!("decode step {}: {:?}", i, op);
        match op {
            Operation::Simple8b => {
                // Packed values never exceed 2^60 - 1, so they always fit in i64.
                simple8b::decode(words, num_values, &mut buffer)?;
            }
            Operation::ZigZag => {
                zigzag::decode_inplace(bytemuck::cast_slice_mut::<i64, u64>(&mut buffer));
            }
            Operation::Delta => delta::decode_inplace(&mut buffer),
        }
    }
    Ok(buffer)
}
