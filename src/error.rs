//! Error type shared by every rod-cutting entry point.

use thiserror::Error;

/// Failures reported by the rod-cutting algorithms and the engine.
///
/// Every operation either returns a fully correct result or one of these;
/// none of them can be retried into success without changing the input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RodCutError {
    /// The price table does not price every length up to the requested one.
    #[error("rod length {length} is out of range: prices cover lengths up to {max_length}")]
    LengthOutOfRange { length: usize, max_length: usize },

    /// A memo table handed to the memoized helper has no slot for `length`.
    #[error("memo table has {slots} slots, too few for rod length {length}")]
    MemoTooShort { length: usize, slots: usize },

    /// A price table must contain at least the zero-length entry.
    #[error("price table is empty")]
    EmptyPriceTable,

    /// Index 0 is the price of nothing and must be zero.
    #[error("price of a zero-length rod must be zero, got {0}")]
    NonZeroBasePrice(String),

    /// A strategy name that matches none of the known algorithms.
    #[error("unknown strategy '{0}' (expected naive, memoized, bottom-up or extended)")]
    UnknownStrategy(String),

    /// A recursive strategy was asked for a length deeper than the configured limit.
    #[error("{strategy} recursion for length {length} exceeds the limit of {limit}")]
    RecursionLimit {
        strategy: &'static str,
        length: usize,
        limit: usize,
    },

    /// The optimal revenue for some sub-length exceeds the price type's range.
    #[error("revenue for rod length {length} overflows the price type")]
    Overflow { length: usize },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RodCutError>;

#[cfg(test)]
mod tests {
    use super::RodCutError;

    #[test]
    fn messages_name_the_offending_values() {
        let err = RodCutError::LengthOutOfRange {
            length: 12,
            max_length: 10,
        };
        assert_eq!(
            err.to_string(),
            "rod length 12 is out of range: prices cover lengths up to 10"
        );

        let err = RodCutError::MemoTooShort { length: 4, slots: 3 };
        assert_eq!(
            err.to_string(),
            "memo table has 3 slots, too few for rod length 4"
        );

        let err = RodCutError::RecursionLimit {
            strategy: "naive",
            length: 40,
            limit: 30,
        };
        assert!(err.to_string().contains("limit of 30"));

        let err = RodCutError::Overflow { length: 2 };
        assert_eq!(
            err.to_string(),
            "revenue for rod length 2 overflows the price type"
        );
    }
}
