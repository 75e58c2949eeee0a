#![cfg(feature = "parallel")]

use proptest::prelude::*;
use rod_cutting::algorithms::extended::extended_bottom_up_cut_rod;
use rod_cutting::{PriceTable, RodCutterBuilder};

proptest! {
    #[test]
    fn parallel_curve_matches_extended_table(
        segment_prices in proptest::collection::vec(0u64..1_000, 0..200),
        strategy_idx in 1usize..4,
    ) {
        let prices = PriceTable::from_prices(segment_prices);
        let n = prices.max_length();
        let (revenues, _) = extended_bottom_up_cut_rod(&prices, n).unwrap();
        let cutter = RodCutterBuilder::new(prices)
            .with_strategy(rod_cutting::Strategy::ALL[strategy_idx])
            .build();
        prop_assert_eq!(cutter.revenue_curve(n).unwrap(), revenues.as_slice().to_vec());
    }
}

#[test]
fn parallel_curve_is_deterministic() {
    let prices = PriceTable::from_prices((1..=300u64).map(|len| len * 2 + len % 5));
    let cutter = RodCutterBuilder::new(prices).build();
    let first = cutter.revenue_curve(300).unwrap();
    for _ in 0..5 {
        assert_eq!(cutter.revenue_curve(300).unwrap(), first);
    }
}
