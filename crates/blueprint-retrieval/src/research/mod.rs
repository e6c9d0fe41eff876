//! Response shaping for `research`: summary statistics and follow-up guidance.

pub mod guidance;
pub mod summary;

pub use guidance::GuidanceInput;
