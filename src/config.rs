// In: src/config.rs

//! The single source of truth for codec configuration.
//!
//! `CodecConfig` is built once at the application boundary (typically parsed from
//! JSON) and passed by reference into the `pipeline`. It names the transforms the
//! caller wants; the crate never picks them on its own.

use serde::{Deserialize, Serialize};

use crate::error::Simple8bError;

/// Which reversible transforms run ahead of the word packer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct CodecConfig {
    /// Replace each value with its difference from the previous one.
    /// Effective for monotonic data such as timestamps or counters.
    #[serde(default = "default_true")]
    pub delta: bool,

    /// Map signed values to unsigned so small negatives stay small.
    /// Required whenever the (delta-encoded) column can go negative.
    #[serde(default = "default_true")]
    pub zigzag: bool,

    /// If true, per-column packing statistics are computed and logged.
    #[serde(default)]
    pub enable_stats_collection: bool,
}

impl CodecConfig {
    /// Packs values as they are, with no preprocessing.
    pub fn raw() -> Self {
        Self {
            delta: false,
            zigzag: false,
            enable_stats_collection: false,
        }
    }

    /// Parses a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, Simple8bError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            delta: true,
            zigzag: true,
            enable_stats_collection: false,
        }
    }
}

/// Helper for `serde` to default a boolean field to true.
fn default_true() -> bool {
    true
}
