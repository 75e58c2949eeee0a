//! Per-call DP tables.
//!
//! - [`RevenueTable`]: `r[j]`, best revenue for a rod of length `j`.
//! - [`ChoiceTable`]: `s[j]`, first piece of an optimal cut of length `j`.
//! - [`MemoTable`]: the top-down cache, `None` until a length is solved.
//!
//! Tables are created fresh by each algorithm call and never reused.

use std::iter::FusedIterator;
use std::ops::Index;

use crate::error::{Result, RodCutError};
use crate::traits::Price;

/// Best revenue per length, `0..=n`.
#[derive(Debug, Clone, PartialEq)]
pub struct RevenueTable<P> {
    values: Vec<P>,
}

impl<P: Price> RevenueTable<P> {
    /// Table for lengths `0..=max_length`, all zero.
    pub(crate) fn zeroed(max_length: usize) -> Self {
        Self {
            values: vec![P::ZERO; max_length + 1],
        }
    }

    pub(crate) fn set(&mut self, length: usize, revenue: P) {
        self.values[length] = revenue;
    }

    /// Revenue for `length`, if the table reaches it.
    #[inline]
    pub fn get(&self, length: usize) -> Option<P> {
        self.values.get(length).copied()
    }

    /// Longest length held.
    #[inline]
    pub fn max_length(&self) -> usize {
        self.values.len() - 1
    }

    pub fn as_slice(&self) -> &[P] {
        &self.values
    }
}

impl<P> Index<usize> for RevenueTable<P> {
    type Output = P;

    #[inline]
    fn index(&self, length: usize) -> &P {
        &self.values[length]
    }
}

/// First optimal piece per length. `s[0]` is unused and stays 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceTable {
    first_cut: Vec<usize>,
}

impl ChoiceTable {
    pub(crate) fn empty(max_length: usize) -> Self {
        Self {
            first_cut: vec![0; max_length + 1],
        }
    }

    pub(crate) fn set(&mut self, length: usize, first_cut: usize) {
        debug_assert!((1..=length).contains(&first_cut));
        self.first_cut[length] = first_cut;
    }

    /// First piece of an optimal cut of `length`; `None` for 0 or out of range.
    #[inline]
    pub fn first_cut(&self, length: usize) -> Option<usize> {
        match self.first_cut.get(length) {
            Some(&cut) if cut > 0 => Some(cut),
            _ => None,
        }
    }

    #[inline]
    pub fn max_length(&self) -> usize {
        self.first_cut.len() - 1
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.first_cut
    }

    /// Walk the table from `length` down to 0, yielding each piece.
    ///
    /// ```
    /// use rod_cutting::{algorithms::extended::extended_bottom_up_cut_rod, PriceTable};
    ///
    /// let (_, choices) = extended_bottom_up_cut_rod(&PriceTable::classic(), 7).unwrap();
    /// assert_eq!(choices.cuts(7).unwrap().collect::<Vec<_>>(), vec![1, 6]);
    /// ```
    pub fn cuts(&self, length: usize) -> Result<Cuts<'_>> {
        if length > self.max_length() {
            return Err(RodCutError::LengthOutOfRange {
                length,
                max_length: self.max_length(),
            });
        }
        Ok(Cuts {
            table: self,
            remaining: length,
        })
    }
}

/// Iterator over the pieces of an optimal cut, see [`ChoiceTable::cuts`].
#[derive(Debug, Clone)]
pub struct Cuts<'a> {
    table: &'a ChoiceTable,
    remaining: usize,
}

impl Iterator for Cuts<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        // A zero entry would never shrink `remaining`; stop instead of looping.
        let cut = self.table.first_cut(self.remaining)?;
        self.remaining -= cut;
        Some(cut)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}

impl FusedIterator for Cuts<'_> {}

/// Top-down cache: slot `j` is `Some(r[j])` once length `j` is solved.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoTable<P> {
    slots: Vec<Option<P>>,
}

impl<P: Price> MemoTable<P> {
    /// Unsolved slots for lengths `0..=max_length`.
    pub fn new(max_length: usize) -> Self {
        Self {
            slots: vec![None; max_length + 1],
        }
    }

    #[inline]
    pub fn get(&self, length: usize) -> Option<P> {
        self.slots.get(length).copied().flatten()
    }

    pub(crate) fn record(&mut self, length: usize, revenue: P) {
        self.slots[length] = Some(revenue);
    }

    /// Number of slots, solved or not.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of lengths solved so far.
    pub fn solved(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub(crate) fn ensure_slot(&self, length: usize) -> Result<()> {
        if length >= self.slots.len() {
            return Err(RodCutError::MemoTooShort {
                length,
                slots: self.slots.len(),
            });
        }
        Ok(())
    }

    /// Convert into a revenue table once every slot is solved.
    pub fn into_revenues(self) -> Option<RevenueTable<P>> {
        let values = self.slots.into_iter().collect::<Option<Vec<P>>>()?;
        if values.is_empty() {
            return None;
        }
        Some(RevenueTable { values })
    }
}
