use thiserror::Error;

/// Reasons a cycle list or a table does not describe a permutation of `1..=n`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PermutationError {
    #[error("element 0 is not allowed, elements are numbered from 1")]
    ZeroElement,

    #[error("element {0} appears more than once")]
    RepeatedElement(usize),

    #[error("table sentinel T[0] must be 0, found {0}")]
    NonZeroSentinel(usize),

    #[error("T[{index}] = {image} is outside 1..={degree}")]
    ImageOutOfRange {
        index: usize,
        image: usize,
        degree: usize,
    },

    #[error("{0} is the image of more than one element")]
    RepeatedImage(usize),
}
