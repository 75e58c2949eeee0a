//! Top-down recursion with a memo table.
//!
//! Same recurrence as [`naive`](super::naive), but each length is solved at
//! most once and cached in a [`MemoTable`]. `n + 1` subproblems, `O(n)` work
//! each, `O(n²)` overall. Unsolved slots are `None`, so any price (zero or
//! negative included) is cached correctly.

use crate::error::Result;
use crate::prices::PriceTable;
use crate::tables::MemoTable;
use crate::traits::{CutStrategy, Price};
use crate::utils::{checked_candidate, keep_first_max};

/// Strategy handle for [`memoized_cut_rod`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Memoized;

/// Maximum revenue for a rod of `length`, memoizing every sub-length.
///
/// The memo table is allocated here and dropped on return.
pub fn memoized_cut_rod<P: Price>(prices: &PriceTable<P>, length: usize) -> Result<P> {
    prices.ensure_covers(length)?;
    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("memoized_cut_rod", length);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let mut memo = MemoTable::new(length);
    let revenue = descend(prices, length, &mut memo)?;
    #[cfg(feature = "tracing")]
    tracing::debug!(length, solved = memo.solved(), "memo filled");
    Ok(revenue)
}

/// Solve `length` against a caller-owned memo table.
///
/// Slots already holding a value are trusted as-is, so a table must only be
/// reused with the same price table. Fails if either table is too short.
///
/// ```
/// use rod_cutting::{algorithms::memoized::memoized_cut_rod_aux, MemoTable, PriceTable};
///
/// let prices = PriceTable::classic();
/// let mut memo = MemoTable::new(6);
/// assert_eq!(memoized_cut_rod_aux(&prices, 6, &mut memo).unwrap(), 17);
/// assert_eq!(memo.solved(), 7);
/// ```
pub fn memoized_cut_rod_aux<P: Price>(
    prices: &PriceTable<P>,
    length: usize,
    memo: &mut MemoTable<P>,
) -> Result<P> {
    prices.ensure_covers(length)?;
    memo.ensure_slot(length)?;
    descend(prices, length, memo)
}

fn descend<P: Price>(
    prices: &PriceTable<P>,
    length: usize,
    memo: &mut MemoTable<P>,
) -> Result<P> {
    if let Some(revenue) = memo.get(length) {
        return Ok(revenue);
    }
    let revenue = if length == 0 {
        P::ZERO
    } else {
        let mut best = None;
        for first in 1..=length {
            let rest = descend(prices, length - first, memo)?;
            if let Some(candidate) = checked_candidate(prices[first], rest, length)? {
                best = keep_first_max(best, candidate, first);
            }
        }
        best.map_or(P::ZERO, |(revenue, _)| revenue)
    };
    memo.record(length, revenue);
    Ok(revenue)
}

impl CutStrategy for Memoized {
    fn name(&self) -> &'static str {
        "memoized"
    }

    fn is_recursive(&self) -> bool {
        true
    }

    fn revenue<P: Price>(&self, prices: &PriceTable<P>, length: usize) -> Result<P> {
        memoized_cut_rod(prices, length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::naive::cut_rod;
    use crate::RodCutError;

    #[test]
    fn matches_naive_on_classic_table() {
        let prices = PriceTable::classic();
        for length in 0..=prices.max_length() {
            assert_eq!(
                memoized_cut_rod(&prices, length).unwrap(),
                cut_rod(&prices, length).unwrap()
            );
        }
    }

    #[test]
    fn helper_fills_every_sub_length() {
        let prices = PriceTable::classic();
        let mut memo = MemoTable::new(10);
        assert_eq!(memoized_cut_rod_aux(&prices, 10, &mut memo).unwrap(), 30);
        let revenues = memo.into_revenues().unwrap();
        assert_eq!(
            revenues.as_slice(),
            &[0, 1, 5, 8, 10, 13, 17, 18, 22, 25, 30]
        );
    }

    #[test]
    fn helper_only_touches_lengths_up_to_request() {
        let prices = PriceTable::classic();
        let mut memo = MemoTable::new(10);
        memoized_cut_rod_aux(&prices, 4, &mut memo).unwrap();
        assert_eq!(memo.solved(), 5);
        assert_eq!(memo.get(5), None);
        // Second call reuses the cached prefix.
        assert_eq!(memoized_cut_rod_aux(&prices, 5, &mut memo).unwrap(), 13);
        assert_eq!(memo.solved(), 6);
    }

    #[test]
    fn zero_revenue_is_cached_not_recomputed() {
        let prices = PriceTable::from_prices([0u32, 0, 0]);
        let mut memo = MemoTable::new(3);
        assert_eq!(memoized_cut_rod_aux(&prices, 3, &mut memo).unwrap(), 0);
        assert_eq!(memo.solved(), 4);
    }

    #[test]
    fn overflow_leaves_only_representable_lengths_cached() {
        let prices = PriceTable::from_prices([200u8, 201]);
        let mut memo = MemoTable::new(2);
        assert_eq!(
            memoized_cut_rod_aux(&prices, 2, &mut memo),
            Err(RodCutError::Overflow { length: 2 })
        );
        assert_eq!(memo.get(1), Some(200));
        assert_eq!(memo.get(2), None);
    }

    #[test]
    fn short_memo_table_is_rejected() {
        let prices = PriceTable::classic();
        let mut memo = MemoTable::new(2);
        assert_eq!(
            memoized_cut_rod_aux(&prices, 5, &mut memo),
            Err(RodCutError::MemoTooShort { length: 5, slots: 3 })
        );
        assert_eq!(
            memoized_cut_rod(&prices, 11),
            Err(RodCutError::LengthOutOfRange {
                length: 11,
                max_length: 10
            })
        );
    }
}
