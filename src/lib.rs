//! # taocp-perm
//!
//! Permutation algorithms from section 1.3.3 of *The Art of Computer
//! Programming*: converting between the table form and the cycle form of a
//! permutation, multiplying permutations given as products of cycles, and
//! inverting a permutation in place.
//!
//! ```
//! use taocp_perm::permutation::{product_a, product_b, Cycle};
//!
//! let knuth: Vec<Cycle> = vec![
//!     [1, 3, 6, 7].into(),
//!     [2, 3, 4].into(),
//!     [1, 5, 4].into(),
//!     [6, 1, 4, 5].into(),
//!     [2, 7, 6, 1, 5].into(),
//! ];
//! let expected: Vec<Cycle> = vec![[1, 4, 7].into(), [2, 3, 5].into()];
//! assert_eq!(product_a(knuth.clone()), expected);
//! assert_eq!(product_b(knuth), expected);
//! ```

pub mod notation;
pub mod permutation;
