use crate::algorithms::BottomUp;
use crate::engine::{RodCutter, DEFAULT_RECURSION_LIMIT};
use crate::prices::PriceTable;
use crate::traits::{CutStrategy, Price};

/// Step-by-step configuration for a [`RodCutter`].
///
/// ```
/// use rod_cutting::{PriceTable, RodCutterBuilder, Strategy};
///
/// let cutter = RodCutterBuilder::new(PriceTable::classic())
///     .with_strategy(Strategy::Memoized)
///     .with_recursion_limit(64)
///     .build();
/// assert_eq!(cutter.revenue(8).unwrap(), 22);
/// ```
pub struct RodCutterBuilder<P, S = BottomUp> {
    prices: PriceTable<P>,
    strategy: S,
    recursion_limit: Option<usize>,
}

impl<P: Price> RodCutterBuilder<P> {
    pub fn new(prices: PriceTable<P>) -> Self {
        Self {
            prices,
            strategy: BottomUp,
            recursion_limit: None,
        }
    }
}

impl<P: Price, S: CutStrategy> RodCutterBuilder<P, S> {
    pub fn with_strategy<T: CutStrategy>(self, strategy: T) -> RodCutterBuilder<P, T> {
        RodCutterBuilder {
            prices: self.prices,
            strategy,
            recursion_limit: self.recursion_limit,
        }
    }

    /// Longest rod the top-down strategies may recurse on.
    pub fn with_recursion_limit(mut self, limit: usize) -> Self {
        self.recursion_limit = Some(limit);
        self
    }

    pub fn build(self) -> RodCutter<P, S> {
        let limit = self.recursion_limit.unwrap_or(DEFAULT_RECURSION_LIMIT);
        RodCutter::with_strategy(self.prices, self.strategy).with_recursion_limit(limit)
    }
}
