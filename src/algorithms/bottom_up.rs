//! Iterative table filling, smallest length first.
//!
//! When `r[j]` is computed every `r[j - i]` (`i ≥ 1`) is already final, so no
//! recursion is needed: `O(n²)` time, `O(n)` space, constant stack depth.

use crate::error::Result;
use crate::prices::PriceTable;
use crate::tables::RevenueTable;
use crate::traits::{CutStrategy, Price};
use crate::utils::{checked_candidate, keep_first_max};

/// Strategy handle for [`bottom_up_cut_rod`]. The engine's default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BottomUp;

/// Maximum revenue for a rod of `length`, filling `r[0..=length]` in order.
pub fn bottom_up_cut_rod<P: Price>(prices: &PriceTable<P>, length: usize) -> Result<P> {
    prices.ensure_covers(length)?;
    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("bottom_up_cut_rod", length);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let mut revenues = RevenueTable::zeroed(length);
    for j in 1..=length {
        let mut best = None;
        for i in 1..=j {
            if let Some(candidate) = checked_candidate(prices[i], revenues[j - i], j)? {
                best = keep_first_max(best, candidate, i);
            }
        }
        if let Some((revenue, _)) = best {
            revenues.set(j, revenue);
        }
    }
    Ok(revenues[length])
}

impl CutStrategy for BottomUp {
    fn name(&self) -> &'static str {
        "bottom-up"
    }

    fn is_recursive(&self) -> bool {
        false
    }

    fn revenue<P: Price>(&self, prices: &PriceTable<P>, length: usize) -> Result<P> {
        bottom_up_cut_rod(prices, length)
    }
}
