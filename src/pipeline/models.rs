//! The operations a column passes through, and how a `CodecConfig` maps onto them.

use serde::{Deserialize, Serialize};

use crate::config::CodecConfig;
use crate::error::Simple8bError;

/// A single step of an encode plan. Decoding runs the inverses in reverse order.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "op")]
pub enum Operation {
    Delta,
    ZigZag,
    Simple8b,
}

/// Builds the linear plan described by `config`. It always ends with `Simple8b`.
pub fn build_plan(config: &CodecConfig) -> Vec<Operation> {
    let mut plan = Vec::with_capacity(3);
    if config.delta {
        plan.push(Operation::Delta);
    }
    if config.zigzag {
        plan.push(Operation::ZigZag);
    }
    plan.push(Operation::Simple8b);
    plan
}

/// A plan is executable when `Simple8b` appears exactly once, as its last step.
pub fn validate_plan(plan: &[Operation]) -> Result<(), Simple8bError> {
    let packers = plan.iter().filter(|op| **op == Operation::Simple8b).count();
    if packers != 1 || plan.last() != Some(&Operation::Simple8b) {
        return Err(Simple8bError::InternalError(format!(
            "Plan must end with exactly one Simple8b step, got {:?}",
            plan
        )));
    }
    Ok(())
}
