// Spike-frequency analysis core
//
// Pipeline: raw spike counts -> firing frequencies (Hz) -> per-group
// descriptives (n, mean, SEM, median) -> Welch's t-test -> significance tier.
//
// Implementation:
// - Uses aprender (crates.io) for statistical hypothesis testing (t-tests)
// - Uses statrs (crates.io) for the Student-t CDF behind the p-values
// - Uses trueno (crates.io) for SIMD-optimized vector statistics
// - Uses aprender's DescriptiveStats for the median calculation

mod comparison;
mod error;
mod frequency;
mod significance;
mod study;
mod summary;

pub use comparison::{compare, ComparisonResult};
pub use error::{AnalysisError, Result};
pub use frequency::{normalize, NormalizedSample, Sample};
pub use significance::{
    classify_significance, SignificanceTier, P_HIGHLY_SIGNIFICANT, P_SIGNIFICANT,
    P_VERY_SIGNIFICANT,
};
pub use study::{evaluate, StudyOutcome};
pub use summary::{summarize, GroupSummary};

#[cfg(test)]
mod tests;
