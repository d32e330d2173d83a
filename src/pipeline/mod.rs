//! Composes the kernels into the standard column path:
//! delta -> zigzag -> Simple8b, and back.

pub mod artifact;
pub mod executor;
pub mod models;


pub use artifact::EncodedColumn;
pub use executor::{compress, decompress};
pub use models::{build_plan, Operation};
