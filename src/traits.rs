//! Core trait definitions for rod-cutting algorithms.
//!
//! Two seams live here:
//! - [`Price`]: the numeric type stored in a price table and returned as revenue.
//! - [`CutStrategy`]: one way of computing the maximum revenue for a length.
//!
//! The engine ([`crate::engine::RodCutter`]) only talks to algorithms through
//! [`CutStrategy`], so new strategies plug in without touching it.

use std::fmt::Debug;

use crate::error::Result;
use crate::prices::PriceTable;

/// Numeric value usable as a segment price and as accumulated revenue.
///
/// Only addition and ordering are needed. Ordering is partial so that
/// floating point prices work; the algorithms never compare against a
/// sentinel, so negative prices are fine too.
///
/// Addition goes through [`Price::checked_add`] so that a revenue too large
/// for the type is reported instead of wrapping.
pub trait Price: Copy + PartialOrd + Debug + Send + Sync + 'static {
    /// Revenue of an empty rod.
    const ZERO: Self;

    /// `self + rhs`, or `None` if the sum is not representable.
    fn checked_add(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_price {
    (int => $($t:ty),* $(,)?) => {
        $(
            impl Price for $t {
                const ZERO: Self = 0;

                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }
            }
        )*
    };
    (float => $($t:ty),* $(,)?) => {
        $(
            impl Price for $t {
                const ZERO: Self = 0.0;

                // Floats saturate to infinity, which still orders correctly.
                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    Some(self + rhs)
                }
            }
        )*
    };
}

impl_price!(int => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_price!(float => f32, f64);

/// A rod-cutting algorithm.
///
/// Semantics:
/// - `revenue(prices, n)` is the maximum of `Σ prices[cut]` over every way of
///   cutting a rod of length `n` into positive integer pieces.
/// - `n == 0` yields [`Price::ZERO`].
/// - Implementations validate `n` against the table and report
///   [`crate::RodCutError::LengthOutOfRange`] rather than panicking.
/// - Calls are independent; any working table is local to one call.
pub trait CutStrategy {
    /// Short stable name, used in logs and probe output.
    fn name(&self) -> &'static str;

    /// Whether the algorithm recurses to depth `n`.
    ///
    /// The engine refuses recursive strategies above its recursion limit.
    fn is_recursive(&self) -> bool;

    /// Maximum revenue for a rod of `length`.
    fn revenue<P: Price>(&self, prices: &PriceTable<P>, length: usize) -> Result<P>;
}
