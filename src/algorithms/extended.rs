//! Bottom-up filling that also records how each optimum was reached.
//!
//! Alongside `r[j]` the first piece `s[j]` of an optimal cut is kept. Only a
//! strict improvement updates `s[j]`, so the smallest optimal first piece
//! wins; [`reconstruct_cuts`] relies on that to produce a deterministic cut
//! list.

use crate::error::Result;
use crate::prices::PriceTable;
use crate::tables::{ChoiceTable, RevenueTable};
use crate::traits::{CutStrategy, Price};
use crate::utils::{checked_candidate, keep_first_max};

/// Strategy handle for [`extended_bottom_up_cut_rod`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtendedBottomUp;

/// Full revenue and choice tables for lengths `0..=length`.
pub fn extended_bottom_up_cut_rod<P: Price>(
    prices: &PriceTable<P>,
    length: usize,
) -> Result<(RevenueTable<P>, ChoiceTable)> {
    prices.ensure_covers(length)?;
    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("extended_bottom_up_cut_rod", length);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let mut revenues = RevenueTable::zeroed(length);
    let mut choices = ChoiceTable::empty(length);
    for j in 1..=length {
        let mut best = None;
        for i in 1..=j {
            if let Some(candidate) = checked_candidate(prices[i], revenues[j - i], j)? {
                best = keep_first_max(best, candidate, i);
            }
        }
        if let Some((revenue, first_cut)) = best {
            revenues.set(j, revenue);
            choices.set(j, first_cut);
        }
    }
    Ok((revenues, choices))
}

/// Piece lengths of an optimal cut of `length`, first piece first.
///
/// The pieces sum to `length`; an empty list means `length == 0`.
///
/// ```
/// use rod_cutting::{algorithms::extended::reconstruct_cuts, PriceTable};
///
/// let prices = PriceTable::classic();
/// assert_eq!(reconstruct_cuts(&prices, 7).unwrap(), vec![1, 6]);
/// assert_eq!(reconstruct_cuts(&prices, 10).unwrap(), vec![10]);
/// ```
pub fn reconstruct_cuts<P: Price>(prices: &PriceTable<P>, length: usize) -> Result<Vec<usize>> {
    let (_, choices) = extended_bottom_up_cut_rod(prices, length)?;
    Ok(choices.cuts(length)?.collect())
}

impl CutStrategy for ExtendedBottomUp {
    fn name(&self) -> &'static str {
        "extended"
    }

    fn is_recursive(&self) -> bool {
        false
    }

    fn revenue<P: Price>(&self, prices: &PriceTable<P>, length: usize) -> Result<P> {
        let (revenues, _) = extended_bottom_up_cut_rod(prices, length)?;
        Ok(revenues[length])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RodCutError;

    #[test]
    fn classic_tables() {
        let (revenues, choices) = extended_bottom_up_cut_rod(&PriceTable::classic(), 10).unwrap();
        assert_eq!(
            revenues.as_slice(),
            &[0, 1, 5, 8, 10, 13, 17, 18, 22, 25, 30]
        );
        assert_eq!(choices.as_slice(), &[0, 1, 2, 3, 2, 2, 6, 1, 2, 3, 10]);
    }

    #[test]
    fn classic_reconstructions() {
        let prices = PriceTable::classic();
        let expected: [&[usize]; 11] = [
            &[],
            &[1],
            &[2],
            &[3],
            &[2, 2],
            &[2, 3],
            &[6],
            &[1, 6],
            &[2, 6],
            &[3, 6],
            &[10],
        ];
        for (length, &want) in expected.iter().enumerate() {
            assert_eq!(reconstruct_cuts(&prices, length).unwrap(), want);
        }
    }

    #[test]
    fn ties_keep_the_smallest_first_piece() {
        // Length 2 sells for the same as two unit pieces.
        let prices = PriceTable::from_prices([3u32, 6]);
        let (revenues, choices) = extended_bottom_up_cut_rod(&prices, 2).unwrap();
        assert_eq!(revenues[2], 6);
        assert_eq!(choices.first_cut(2), Some(1));
        assert_eq!(reconstruct_cuts(&prices, 2).unwrap(), vec![1, 1]);
    }

    #[test]
    fn overflow_stops_tables_and_reconstruction() {
        let prices = PriceTable::from_prices([200u8, 201]);
        assert!(matches!(
            extended_bottom_up_cut_rod(&prices, 2),
            Err(RodCutError::Overflow { length: 2 })
        ));
        assert_eq!(
            reconstruct_cuts(&prices, 2),
            Err(RodCutError::Overflow { length: 2 })
        );
        assert_eq!(reconstruct_cuts(&prices, 1), Ok(vec![1]));
    }

    #[test]
    fn zero_length_has_no_cuts() {
        let prices = PriceTable::<u32>::from_prices([]);
        let (revenues, choices) = extended_bottom_up_cut_rod(&prices, 0).unwrap();
        assert_eq!(revenues.as_slice(), &[0]);
        assert_eq!(choices.first_cut(0), None);
        assert!(reconstruct_cuts(&prices, 0).unwrap().is_empty());
    }
}
