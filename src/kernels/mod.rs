//! This module declares the collection of pure, stateless kernels.
//!
//! The intended order for a signed column is delta, then zigzag, then the
//! word packer; decoding runs the inverses in reverse order. Which transforms to
//! apply is the caller's decision (see `pipeline`).

/// Value reduction
pub mod delta;

/// Bit-width reduction
pub mod zigzag;

/// Word packing
pub mod simple8b;
