//! Example: the textbook price table, every strategy, lengths 1..=10.
//!
//! Run with:
//! `cargo run --example classic`

use rod_cutting::{PriceTable, RodCutter, Strategy};

fn main() {
    let prices = PriceTable::classic();

    for strategy in Strategy::ALL {
        println!("{strategy}");
        let cutter = RodCutter::with_strategy(prices.clone(), strategy);
        for length in 1..=10 {
            match cutter.revenue(length) {
                Ok(revenue) => println!("\tlength {length:>2}: max revenue {revenue}"),
                Err(err) => println!("\tlength {length:>2}: {err}"),
            }
        }
    }

    println!("optimal cuts");
    let cutter = RodCutter::new(prices);
    for length in 1..=10 {
        match cutter.solve(length) {
            Ok(solution) => println!("\tlength {length:>2}: {solution}"),
            Err(err) => println!("\tlength {length:>2}: {err}"),
        }
    }
}
