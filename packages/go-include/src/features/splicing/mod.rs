//! Splicing Feature
//!
//! Edits are collected first as a `SplicePlan` (span + replacement, tagged by
//! origin) and applied afterwards in one forward pass over the original bytes.

mod plan;

pub use plan::{Splice, SpliceKind, SplicePlan, SpliceResult};
