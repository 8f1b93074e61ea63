//! Layer merging.

pub mod merge_policy;
