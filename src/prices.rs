//! Price tables.
//!
//! A [`PriceTable`] maps a segment length to the price of selling one uncut
//! piece of that length. Index 0 is the (zero) price of nothing, so a table
//! with `n + 1` entries prices every length `1..=n`.

use std::ops::Index;

use crate::error::{Result, RodCutError};
use crate::traits::Price;

/// Immutable price table indexed by segment length.
///
/// Invariant: non-empty, and `self[0] == P::ZERO`.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceTable<P> {
    prices: Vec<P>,
}

impl<P: Price> PriceTable<P> {
    /// Build from a full table whose index 0 is the zero-length entry.
    ///
    /// ```
    /// use rod_cutting::PriceTable;
    ///
    /// let table = PriceTable::new(vec![0, 1, 5, 8]).unwrap();
    /// assert_eq!(table.max_length(), 3);
    /// assert!(PriceTable::new(vec![2, 1, 5]).is_err());
    /// ```
    pub fn new(prices: Vec<P>) -> Result<Self> {
        match prices.first() {
            None => Err(RodCutError::EmptyPriceTable),
            Some(&base) if base != P::ZERO => Err(RodCutError::NonZeroBasePrice(format!("{base:?}"))),
            Some(_) => Ok(Self { prices }),
        }
    }

    /// Build from the prices of lengths `1, 2, ...`; the zero entry is prepended.
    pub fn from_prices<I>(segment_prices: I) -> Self
    where
        I: IntoIterator<Item = P>,
    {
        let prices = std::iter::once(P::ZERO).chain(segment_prices).collect();
        Self { prices }
    }

    /// Longest length with a price.
    #[inline]
    pub fn max_length(&self) -> usize {
        self.prices.len() - 1
    }

    /// Price of one uncut segment, if the table covers `length`.
    #[inline]
    pub fn price(&self, length: usize) -> Option<P> {
        self.prices.get(length).copied()
    }

    /// Whole table, index 0 included.
    pub fn as_slice(&self) -> &[P] {
        &self.prices
    }

    /// Fail unless every length `0..=length` has a price.
    pub fn ensure_covers(&self, length: usize) -> Result<()> {
        if length > self.max_length() {
            return Err(RodCutError::LengthOutOfRange {
                length,
                max_length: self.max_length(),
            });
        }
        Ok(())
    }

    /// Total sale price of the given pieces, or `None` if one is unpriced or
    /// the total does not fit in `P`.
    pub fn value_of(&self, cuts: &[usize]) -> Option<P> {
        cuts.iter()
            .try_fold(P::ZERO, |total, &cut| total.checked_add(self.price(cut)?))
    }
}

impl PriceTable<u32> {
    /// The textbook table for lengths 1..=10.
    pub fn classic() -> Self {
        Self::from_prices([1, 5, 8, 9, 10, 17, 17, 20, 24, 30])
    }
}

impl<P> Index<usize> for PriceTable<P> {
    type Output = P;

    #[inline]
    fn index(&self, length: usize) -> &P {
        &self.prices[length]
    }
}

impl<P: Price> TryFrom<Vec<P>> for PriceTable<P> {
    type Error = RodCutError;

    fn try_from(prices: Vec<P>) -> Result<Self> {
        Self::new(prices)
    }
}

#[cfg(test)]
mod tests {
    use super::PriceTable;
    use crate::RodCutError;

    #[test]
    fn classic_table_layout() {
        let table = PriceTable::classic();
        assert_eq!(table.max_length(), 10);
        assert_eq!(table[0], 0);
        assert_eq!(table[4], 9);
        assert_eq!(table.price(11), None);
        assert_eq!(
            table.as_slice(),
            &[0, 1, 5, 8, 9, 10, 17, 17, 20, 24, 30]
        );
    }

    #[test]
    fn rejects_malformed_tables() {
        assert_eq!(
            PriceTable::<i32>::new(vec![]),
            Err(RodCutError::EmptyPriceTable)
        );
        assert_eq!(
            PriceTable::new(vec![3, 4]),
            Err(RodCutError::NonZeroBasePrice("3".to_string()))
        );
        assert!(PriceTable::new(vec![0.0f64, 1.5]).is_ok());
    }

    #[test]
    fn zero_only_table_covers_length_zero() {
        let table = PriceTable::<u64>::from_prices([]);
        assert_eq!(table.max_length(), 0);
        assert!(table.ensure_covers(0).is_ok());
        assert_eq!(
            table.ensure_covers(1),
            Err(RodCutError::LengthOutOfRange {
                length: 1,
                max_length: 0
            })
        );
    }

    #[test]
    fn value_of_sums_piece_prices() {
        let table = PriceTable::classic();
        assert_eq!(table.value_of(&[]), Some(0));
        assert_eq!(table.value_of(&[1, 6]), Some(18));
        assert_eq!(table.value_of(&[2, 2]), Some(10));
        assert_eq!(table.value_of(&[11]), None);

        let small = PriceTable::from_prices([200u8]);
        assert_eq!(small.value_of(&[1]), Some(200));
        assert_eq!(small.value_of(&[1, 1]), None);
    }
}
