//! Errors raised when building positions and applying moves

use thiserror::Error;

/// Heap configuration that cannot start a game
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum InvalidConfiguration {
    /// Heap size is negative or does not fit in a heap
    #[error("heap {index} has size {value}, expected a non-negative count")]
    OutOfRange {
        /// Position of the offending entry
        index: usize,
        /// Entry as supplied by the caller
        value: String,
    },

    /// Heap size is not an integer, e.g. `1.5`
    #[error("heap {index} is not an integer: `{token}`")]
    NotAnInteger {
        /// Position of the offending entry
        index: usize,
        /// Entry as supplied by the caller
        token: String,
    },

    /// Input is not a list of heap sizes at all
    #[error("could not parse heap list")]
    Malformed,
}

/// Move that breaks the rules for the position it was applied to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum IllegalMove {
    #[error("heap {heap} does not exist, position has {heaps} heaps")]
    #[allow(missing_docs)]
    HeapOutOfRange { heap: usize, heaps: usize },

    #[error("cannot remove zero objects from heap {heap}")]
    #[allow(missing_docs)]
    ZeroAmount { heap: usize },

    #[error("cannot remove {amount} objects from heap {heap} holding {available}")]
    #[allow(missing_docs)]
    AmountExceedsHeap {
        heap: usize,
        amount: u32,
        available: u32,
    },
}

/// Any error produced by the engine
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum Error {
    #[error(transparent)]
    #[allow(missing_docs)]
    InvalidConfiguration(#[from] InvalidConfiguration),

    #[error(transparent)]
    #[allow(missing_docs)]
    IllegalMove(#[from] IllegalMove),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            InvalidConfiguration::OutOfRange {
                index: 2,
                value: "-1".to_owned()
            }
            .to_string(),
            "heap 2 has size -1, expected a non-negative count"
        );
        assert_eq!(
            IllegalMove::AmountExceedsHeap {
                heap: 0,
                amount: 5,
                available: 3
            }
            .to_string(),
            "cannot remove 5 objects from heap 0 holding 3"
        );
        assert_eq!(
            Error::from(IllegalMove::ZeroAmount { heap: 1 }).to_string(),
            "cannot remove zero objects from heap 1"
        );
    }
}
