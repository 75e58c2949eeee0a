//! Assorted utilities and helpers.

use crate::error::{Result, RodCutError};
use crate::traits::Price;

/// Revenue of selling a first piece at `price` and the rest for `rest`.
///
/// `Ok(None)` means the sum fell below the type's minimum: both terms were
/// negative, so the candidate loses to the uncut rod and can be dropped. An
/// overflow upwards means the optimum for `length` is unrepresentable.
#[inline]
pub fn checked_candidate<P: Price>(price: P, rest: P, length: usize) -> Result<Option<P>> {
    match price.checked_add(rest) {
        Some(sum) => Ok(Some(sum)),
        None if price < P::ZERO => Ok(None),
        None => Err(RodCutError::Overflow { length }),
    }
}

/// Fold one candidate into the running best, keeping the earliest maximum.
///
/// `best` pairs a revenue with the first-piece length that produced it. A
/// later candidate only replaces it on strict improvement, so among equally
/// good first pieces the smallest one wins. All four algorithms share this
/// tie-break; reconstruction depends on it being consistent.
#[inline]
pub fn keep_first_max<P: Copy + PartialOrd>(
    best: Option<(P, usize)>,
    candidate: P,
    first_cut: usize,
) -> Option<(P, usize)> {
    match best {
        None => Some((candidate, first_cut)),
        Some((revenue, _)) if candidate > revenue => Some((candidate, first_cut)),
        Some(_) => best,
    }
}

/// Number of ordered ways to cut a rod of `length`: `2^(length-1)`, or 1 for 0.
///
/// This is the number of leaves the naive recursion visits. Returns `None`
/// once the count no longer fits in a `u128`.
pub fn compositions(length: usize) -> Option<u128> {
    match length {
        0 => Some(1),
        n => 1u128.checked_shl(u32::try_from(n - 1).ok()?),
    }
}
