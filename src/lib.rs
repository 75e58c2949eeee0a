//! Rod cutting by dynamic programming.
//!
//! Given the price of an uncut segment of every length `1..=n`, find the
//! maximum revenue from cutting a rod of length `n` into integer pieces and
//! selling them, and recover a set of cuts that earns it.
//!
//! ## Algorithms
//! Four interchangeable strategies compute the same revenue:
//! - [`algorithms::naive`]: exhaustive recursion, `Θ(2^n)`.
//! - [`algorithms::memoized`]: top-down recursion with a memo table, `O(n²)`.
//! - [`algorithms::bottom_up`]: iterative table filling, `O(n²)`, no recursion.
//! - [`algorithms::extended`]: bottom-up plus the first optimal piece for
//!   every length, from which [`algorithms::extended::reconstruct_cuts`]
//!   walks out an optimal cut list.
//!
//! Among equally good first pieces the smallest one is chosen, so
//! reconstructions are deterministic.
//!
//! ## Quick start
//! ```
//! use rod_cutting::{PriceTable, RodCutter, Strategy};
//!
//! let prices = PriceTable::classic(); // 1, 5, 8, 9, 10, 17, 17, 20, 24, 30
//! let cutter = RodCutter::with_strategy(prices, Strategy::Memoized);
//! assert_eq!(cutter.revenue(4).unwrap(), 10);
//! assert_eq!(cutter.solve(7).unwrap().cuts, vec![1, 6]);
//! ```
//!
//! ## Features
//! - `tracing` (default): spans around each algorithm and engine call.
//! - `cli-logging`: installs a `tracing-subscriber` in the `rod_probe` binary.
//! - `parallel`: [`RodCutter::revenue_curve`] solves lengths on the rayon pool.
//! - `heavy`: enables long-running stress tests.

pub mod algorithms;
pub mod builder;
pub mod engine;
pub mod error;
pub mod prices;
pub mod tables;
pub mod traits;
pub mod utils;

pub use crate::algorithms::Strategy;
pub use crate::builder::RodCutterBuilder;
pub use crate::engine::{RodCutter, Solution};
pub use crate::error::{Result, RodCutError};
pub use crate::prices::PriceTable;
pub use crate::tables::{ChoiceTable, MemoTable, RevenueTable};
pub use crate::traits::{CutStrategy, Price};
