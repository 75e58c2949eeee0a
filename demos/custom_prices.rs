//! Example: a caller-supplied price table with a per-length revenue curve.
//!
//! Run with:
//! `cargo run --example custom_prices`

use rod_cutting::{PriceTable, RodCutError, RodCutterBuilder, Strategy};

fn main() -> Result<(), RodCutError> {
    // Offcuts sell at a discount; lengths 4 and 8 are stock sizes with a premium.
    let prices = PriceTable::new(vec![0.0, 0.8, 1.9, 2.9, 4.6, 5.2, 6.1, 7.0, 9.6])?;

    let cutter = RodCutterBuilder::new(prices)
        .with_strategy(Strategy::Memoized)
        .with_recursion_limit(64)
        .build();

    let curve = cutter.revenue_curve(8)?;
    for (length, revenue) in curve.iter().enumerate().skip(1) {
        let solution = cutter.solve(length)?;
        println!("length {length}: revenue {revenue:.2}, cuts [{solution}]");
    }

    match cutter.solve(9) {
        Err(err) => println!("length 9: {err}"),
        Ok(solution) => println!("length 9: {solution}"),
    }
    Ok(())
}
