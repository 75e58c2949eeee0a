//! Plain top-down recursion.
//!
//! Tries every first piece `i` in `1..=n` and recurses on the remaining
//! `n - i`, re-solving shared subproblems each time. It visits all
//! [`compositions`](crate::utils::compositions) of `n`, so the cost is
//! `Θ(2^n)`; it is here as the baseline the other strategies are checked
//! against.

use crate::error::Result;
use crate::prices::PriceTable;
use crate::traits::{CutStrategy, Price};
use crate::utils::{checked_candidate, keep_first_max};

/// Strategy handle for [`cut_rod`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Naive;

/// Maximum revenue for a rod of `length`, by exhaustive recursion.
///
/// Recursion depth equals `length`.
pub fn cut_rod<P: Price>(prices: &PriceTable<P>, length: usize) -> Result<P> {
    prices.ensure_covers(length)?;
    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("cut_rod", length);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();
    descend(prices, length)
}

fn descend<P: Price>(prices: &PriceTable<P>, length: usize) -> Result<P> {
    if length == 0 {
        return Ok(P::ZERO);
    }
    let mut best = None;
    for first in 1..=length {
        let rest = descend(prices, length - first)?;
        if let Some(candidate) = checked_candidate(prices[first], rest, length)? {
            best = keep_first_max(best, candidate, first);
        }
    }
    Ok(best.map_or(P::ZERO, |(revenue, _)| revenue))
}

impl CutStrategy for Naive {
    fn name(&self) -> &'static str {
        "naive"
    }

    fn is_recursive(&self) -> bool {
        true
    }

    fn revenue<P: Price>(&self, prices: &PriceTable<P>, length: usize) -> Result<P> {
        cut_rod(prices, length)
    }
}
