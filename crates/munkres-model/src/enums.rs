//! Cell marks and solver phases.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label attached to a cell of the mark matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    #[default]
    None,
    /// Tentative member of the current partial assignment.
    Star,
    /// Temporary label used while building an augmenting path.
    Prime,
}

impl Mark {
    pub fn is_star(self) -> bool {
        self == Mark::Star
    }

    pub fn is_prime(self) -> bool {
        self == Mark::Prime
    }

    /// Suffix used when rendering a marked cell in text.
    pub fn symbol(self) -> &'static str {
        match self {
            Mark::None => "",
            Mark::Star => "*",
            Mark::Prime => "'",
        }
    }
}

/// The phase a solver will execute next.
///
/// Phases run in the order of the Hungarian method; the transition out
/// of each phase is decided by the solver, never by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Subtract row minima, then column minima.
    ReduceRowsCols,
    /// Greedily star independent zeros.
    StarZeros,
    /// Cover starred columns; finish when all n are covered.
    CoverStarredColumns,
    /// Prime uncovered zeros until one starts an augmenting path.
    PrimeZeros,
    /// Flip marks along the alternating star/prime path.
    AugmentPath,
    /// Shift the smallest uncovered value to create a new zero.
    AdjustByMinUncovered,
    /// A perfect matching of starred zeros has been found.
    Done,
}

impl Phase {
    /// Phase a freshly set up solver starts in.
    pub const FIRST: Phase = Phase::ReduceRowsCols;

    pub fn is_done(self) -> bool {
        self == Phase::Done
    }

    /// Classic step number of the Munkres formulation (1 through 7).
    pub fn step_number(self) -> u8 {
        match self {
            Phase::ReduceRowsCols => 1,
            Phase::StarZeros => 2,
            Phase::CoverStarredColumns => 3,
            Phase::PrimeZeros => 4,
            Phase::AugmentPath => 5,
            Phase::AdjustByMinUncovered => 6,
            Phase::Done => 7,
        }
    }

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            Phase::ReduceRowsCols => "reduce rows and columns",
            Phase::StarZeros => "star zeros",
            Phase::CoverStarredColumns => "cover starred columns",
            Phase::PrimeZeros => "prime zeros",
            Phase::AugmentPath => "augment path",
            Phase::AdjustByMinUncovered => "adjust by minimum uncovered",
            Phase::Done => "done",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
