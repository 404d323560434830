// P-value tier classification
//
// Four tiers with the star annotations used in neurophysiology figures:
// p < 0.001 (***), p < 0.01 (**), p < 0.05 (*), otherwise ns. Boundaries
// are strict less-than, so p exactly 0.05 is not significant.

use crate::analysis::error::{AnalysisError, Result};
use std::fmt;

/// Threshold below which a p-value is "highly significant" (***)
pub const P_HIGHLY_SIGNIFICANT: f32 = 0.001;

/// Threshold below which a p-value is "very significant" (**)
pub const P_VERY_SIGNIFICANT: f32 = 0.01;

/// Threshold below which a p-value is "significant" (*)
pub const P_SIGNIFICANT: f32 = 0.05;

/// Four-tier significance classification of a two-tailed p-value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignificanceTier {
    /// p < 0.001
    HighlySignificant,

    /// 0.001 <= p < 0.01
    VerySignificant,

    /// 0.01 <= p < 0.05
    Significant,

    /// p >= 0.05
    NotSignificant,
}

impl SignificanceTier {
    /// Human-readable tier name
    pub fn label(&self) -> &'static str {
        match self {
            SignificanceTier::HighlySignificant => "highly significant",
            SignificanceTier::VerySignificant => "very significant",
            SignificanceTier::Significant => "significant",
            SignificanceTier::NotSignificant => "not significant",
        }
    }

    /// Star annotation drawn above the chart bracket
    pub fn annotation(&self) -> &'static str {
        match self {
            SignificanceTier::HighlySignificant => "***",
            SignificanceTier::VerySignificant => "**",
            SignificanceTier::Significant => "*",
            SignificanceTier::NotSignificant => "ns",
        }
    }

    /// True for any tier below the 0.05 threshold
    pub fn is_significant(&self) -> bool {
        !matches!(self, SignificanceTier::NotSignificant)
    }
}

impl fmt::Display for SignificanceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Classify a two-tailed p-value into one of the four tiers
///
/// # Errors
/// `InvalidInput` when the p-value is outside [0, 1] or NaN.
pub fn classify_significance(p_value: f32) -> Result<SignificanceTier> {
    if !(0.0..=1.0).contains(&p_value) {
        return Err(AnalysisError::InvalidInput(format!(
            "p-value must be in [0, 1], got {}",
            p_value
        )));
    }

    let tier = if p_value < P_HIGHLY_SIGNIFICANT {
        SignificanceTier::HighlySignificant
    } else if p_value < P_VERY_SIGNIFICANT {
        SignificanceTier::VerySignificant
    } else if p_value < P_SIGNIFICANT {
        SignificanceTier::Significant
    } else {
        SignificanceTier::NotSignificant
    };

    Ok(tier)
}
