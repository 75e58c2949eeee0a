//! The four rod-cutting algorithms.
//!
//! Each module exposes a free function and a unit strategy type that
//! implements [`CutStrategy`]:
//! - [`naive`]     : exhaustive recursion, exponential.
//! - [`memoized`]  : top-down recursion with a memo table.
//! - [`bottom_up`] : iterative table filling.
//! - [`extended`]  : bottom-up plus a choice table, and cut reconstruction.
//!
//! [`Strategy`] picks one of them at runtime.

pub mod bottom_up;
pub mod extended;
pub mod memoized;
pub mod naive;

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, RodCutError};
use crate::prices::PriceTable;
use crate::traits::{CutStrategy, Price};

pub use bottom_up::BottomUp;
pub use extended::ExtendedBottomUp;
pub use memoized::Memoized;
pub use naive::Naive;

/// Runtime choice among the built-in strategies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    Naive,
    Memoized,
    #[default]
    BottomUp,
    Extended,
}

impl Strategy {
    /// All strategies, slowest first.
    pub const ALL: [Strategy; 4] = [
        Strategy::Naive,
        Strategy::Memoized,
        Strategy::BottomUp,
        Strategy::Extended,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Naive => Naive.name(),
            Strategy::Memoized => Memoized.name(),
            Strategy::BottomUp => BottomUp.name(),
            Strategy::Extended => ExtendedBottomUp.name(),
        }
    }
}

impl CutStrategy for Strategy {
    fn name(&self) -> &'static str {
        self.as_str()
    }

    fn is_recursive(&self) -> bool {
        match self {
            Strategy::Naive => Naive.is_recursive(),
            Strategy::Memoized => Memoized.is_recursive(),
            Strategy::BottomUp => BottomUp.is_recursive(),
            Strategy::Extended => ExtendedBottomUp.is_recursive(),
        }
    }

    fn revenue<P: Price>(&self, prices: &PriceTable<P>, length: usize) -> Result<P> {
        match self {
            Strategy::Naive => Naive.revenue(prices, length),
            Strategy::Memoized => Memoized.revenue(prices, length),
            Strategy::BottomUp => BottomUp.revenue(prices, length),
            Strategy::Extended => ExtendedBottomUp.revenue(prices, length),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = RodCutError;

    fn from_str(value: &str) -> Result<Self> {
        Strategy::ALL
            .into_iter()
            .find(|s| s.as_str() == value)
            .ok_or_else(|| RodCutError::UnknownStrategy(value.to_string()))
    }
}
