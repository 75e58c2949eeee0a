//! Rod-cutting engine.
//!
//! [`RodCutter`] binds a price table to a [`CutStrategy`] and adds what the
//! bare algorithms leave to the caller:
//! 1. a recursion limit for the top-down strategies, whose stack depth grows
//!    with the rod length;
//! 2. full solutions (revenue plus the cuts that achieve it);
//! 3. revenue curves over many lengths, fanned out on rayon with the
//!    `parallel` feature.
//!
//! Every call allocates its own tables; an engine can be shared freely.

use std::fmt;

use crate::algorithms::extended::reconstruct_cuts;
use crate::algorithms::{BottomUp, Strategy};
use crate::error::{Result, RodCutError};
use crate::prices::PriceTable;
use crate::traits::{CutStrategy, Price};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Deepest recursion the engine allows for top-down strategies by default.
pub const DEFAULT_RECURSION_LIMIT: usize = 4096;

/// Optimal way to cut one rod.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<P> {
    /// Rod length that was solved.
    pub length: usize,
    /// Maximum revenue, as reported by the engine's strategy.
    pub revenue: P,
    /// Piece lengths, first piece first; they sum to `length`.
    pub cuts: Vec<usize>,
}

/// Space-separated piece lengths, e.g. `1 6`.
impl<P> fmt::Display for Solution<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, cut) in self.cuts.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{cut}")?;
        }
        Ok(())
    }
}

/// Rod-cutting engine over one price table.
///
/// Typical usage:
/// ```
/// use rod_cutting::{PriceTable, RodCutter};
///
/// let cutter = RodCutter::new(PriceTable::classic());
/// let solution = cutter.solve(7).unwrap();
/// assert_eq!(solution.revenue, 18);
/// assert_eq!(solution.cuts, vec![1, 6]);
/// assert_eq!(solution.to_string(), "1 6");
/// ```
#[derive(Debug, Clone)]
pub struct RodCutter<P, S = BottomUp> {
    prices: PriceTable<P>,
    strategy: S,
    recursion_limit: usize,
}

impl<P: Price> RodCutter<P> {
    /// Engine using the bottom-up strategy.
    pub fn new(prices: PriceTable<P>) -> Self {
        Self::with_strategy(prices, BottomUp)
    }
}

impl<P: Price, S: CutStrategy> RodCutter<P, S> {
    /// Engine using `strategy` and the default recursion limit.
    pub fn with_strategy(prices: PriceTable<P>, strategy: S) -> Self {
        Self {
            prices,
            strategy,
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }

    pub(crate) fn with_recursion_limit(mut self, limit: usize) -> Self {
        self.recursion_limit = limit;
        self
    }

    pub fn prices(&self) -> &PriceTable<P> {
        &self.prices
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    pub fn recursion_limit(&self) -> usize {
        self.recursion_limit
    }

    fn check_depth(&self, strategy: &impl CutStrategy, length: usize) -> Result<()> {
        if strategy.is_recursive() && length > self.recursion_limit {
            return Err(RodCutError::RecursionLimit {
                strategy: strategy.name(),
                length,
                limit: self.recursion_limit,
            });
        }
        Ok(())
    }

    /// Maximum revenue for a rod of `length`.
    pub fn revenue(&self, length: usize) -> Result<P> {
        self.check_depth(&self.strategy, length)?;
        self.strategy.revenue(&self.prices, length)
    }

    /// Maximum revenue together with an optimal set of cuts.
    pub fn solve(&self, length: usize) -> Result<Solution<P>> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("rod_cut_solve", strategy = self.strategy.name(), length);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let revenue = self.revenue(length)?;
        let cuts = reconstruct_cuts(&self.prices, length)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(pieces = cuts.len(), "reconstructed cuts");
        Ok(Solution {
            length,
            revenue,
            cuts,
        })
    }

    /// Revenue from every built-in strategy, in [`Strategy::ALL`] order.
    ///
    /// The recursion limit applies to the top-down strategies here too.
    pub fn compare(&self, length: usize) -> Result<Vec<(Strategy, P)>> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("rod_cut_compare", length);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        Strategy::ALL
            .into_iter()
            .map(|strategy| -> Result<(Strategy, P)> {
                self.check_depth(&strategy, length)?;
                Ok((strategy, strategy.revenue(&self.prices, length)?))
            })
            .collect()
    }
}

#[cfg(feature = "parallel")]
impl<P: Price, S: CutStrategy + Sync> RodCutter<P, S> {
    /// Revenue for every length `0..=max_length`, solved independently.
    ///
    /// Lengths are distributed over the rayon pool; the result is identical
    /// to the sequential build.
    pub fn revenue_curve(&self, max_length: usize) -> Result<Vec<P>> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("revenue_curve", strategy = self.strategy.name(), max_length);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        self.prices.ensure_covers(max_length)?;
        (0..=max_length)
            .into_par_iter()
            .map(|length| self.revenue(length))
            .collect()
    }
}

#[cfg(not(feature = "parallel"))]
impl<P: Price, S: CutStrategy> RodCutter<P, S> {
    /// Revenue for every length `0..=max_length`, solved independently.
    pub fn revenue_curve(&self, max_length: usize) -> Result<Vec<P>> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("revenue_curve", strategy = self.strategy.name(), max_length);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        self.prices.ensure_covers(max_length)?;
        (0..=max_length).map(|length| self.revenue(length)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::{Memoized, Naive};

    const CLASSIC: [u32; 11] = [0, 1, 5, 8, 10, 13, 17, 18, 22, 25, 30];

    #[test]
    fn default_engine_is_bottom_up() {
        let cutter = RodCutter::new(PriceTable::classic());
        assert_eq!(cutter.strategy().name(), "bottom-up");
        assert_eq!(cutter.recursion_limit(), DEFAULT_RECURSION_LIMIT);
        assert_eq!(cutter.revenue(10).unwrap(), 30);
    }

    #[test]
    fn solve_pairs_revenue_with_cuts() {
        let cutter = RodCutter::with_strategy(PriceTable::classic(), Memoized);
        let solution = cutter.solve(9).unwrap();
        assert_eq!(solution.length, 9);
        assert_eq!(solution.revenue, 25);
        assert_eq!(solution.cuts, vec![3, 6]);
        assert_eq!(
            cutter.prices().value_of(&solution.cuts),
            Some(solution.revenue)
        );

        let empty = cutter.solve(0).unwrap();
        assert!(empty.cuts.is_empty());
        assert_eq!(empty.to_string(), "");
    }

    #[test]
    fn recursion_limit_guards_top_down_only() {
        let cutter = RodCutter::with_strategy(PriceTable::classic(), Naive).with_recursion_limit(5);
        assert_eq!(cutter.revenue(5).unwrap(), 13);
        assert_eq!(
            cutter.revenue(6),
            Err(RodCutError::RecursionLimit {
                strategy: "naive",
                length: 6,
                limit: 5
            })
        );

        let cutter = RodCutter::new(PriceTable::classic()).with_recursion_limit(0);
        assert_eq!(cutter.revenue(10).unwrap(), 30);
        assert!(matches!(
            cutter.compare(1),
            Err(RodCutError::RecursionLimit { strategy: "naive", .. })
        ));
    }

    #[test]
    fn compare_lists_every_strategy() {
        let cutter = RodCutter::new(PriceTable::classic());
        let results = cutter.compare(8).unwrap();
        let names: Vec<_> = results.iter().map(|(s, _)| *s).collect();
        assert_eq!(names, Strategy::ALL.to_vec());
        assert!(results.iter().all(|&(_, revenue)| revenue == 22));
    }

    #[test]
    fn curve_covers_zero_through_max() {
        let cutter = RodCutter::with_strategy(PriceTable::classic(), Strategy::Extended);
        assert_eq!(cutter.revenue_curve(10).unwrap(), CLASSIC.to_vec());
        assert_eq!(cutter.revenue_curve(0).unwrap(), vec![0]);
        assert!(matches!(
            cutter.revenue_curve(11),
            Err(RodCutError::LengthOutOfRange { length: 11, .. })
        ));
    }
}
