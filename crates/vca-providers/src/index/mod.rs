//! Vector index implementations
//!
//! The flat index is the only implementation in scope: the corpus is small,
//! built once at startup, and searched with an exact squared-L2 scan.

/// Flat squared-L2 index
pub mod flat;

pub use flat::FlatVectorIndex;
