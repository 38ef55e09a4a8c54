//! Error types for chart calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::branch::EarthlyBranch;
use crate::stem::HeavenlyStem;

/// Errors from the base chart calculations.
///
/// Every variant is a validation failure detected at the point of entry.
/// Calculations are pure, so the same input fails the same way every time.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ChartError {
    /// Unknown stem, branch, or element symbol.
    InvalidDomainValue(String),
    /// Symbol is not one of the 10 heavenly stems.
    InvalidStem(String),
    /// Stem/branch parities differ, so the pair is not in the 60-cycle.
    InvalidGanZhi {
        stem: HeavenlyStem,
        branch: EarthlyBranch,
    },
    /// Month, day, or hour outside its documented range.
    InvalidInput(&'static str),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDomainValue(s) => write!(f, "invalid domain value: {s}"),
            Self::InvalidStem(s) => write!(f, "not a heavenly stem: {s}"),
            Self::InvalidGanZhi { stem, branch } => write!(
                f,
                "invalid ganzhi: {}{} has mismatched parity",
                stem.symbol(),
                branch.symbol()
            ),
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl Error for ChartError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_ganzhi() {
        let e = ChartError::InvalidGanZhi {
            stem: HeavenlyStem::Jia,
            branch: EarthlyBranch::Chou,
        };
        assert_eq!(e.to_string(), "invalid ganzhi: 甲丑 has mismatched parity");
    }

    #[test]
    fn display_invalid_input() {
        let e = ChartError::InvalidInput("lunar month must be 1-12");
        assert_eq!(e.to_string(), "invalid input: lunar month must be 1-12");
    }
}
