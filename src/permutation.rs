//! # Permutations
//!
//! This module represents permutations of `1..=n` in the two forms used by
//! TAOCP §1.3.3 and implements the algorithms that move between them.
//!
//! ## Key Features:
//!
//! - **Representation**:
//!   - [`Cycle`]: one cycle `(a b c)` meaning `a -> b -> c -> a`.
//!   - Cycle form: a `Vec<Cycle>` of disjoint, normalized cycles sorted by
//!     their first element. Singleton cycles are never part of a result.
//!   - [`PermutationTable`]: the table form, `T[i]` is the image of `i` and
//!     `T[0]` is a sentinel holding `0`.
//!   - [`Factors`]: the input of a product, either a flat list of cycles or a
//!     list of permutations, each given as a list of cycles.
//! - **Conversions**: [`cycles_to_table`], [`table_to_cycles`],
//!   [`normalize_cycles`].
//! - **Products**: [`product_a`] scans the symbols of the formula and never
//!   builds a table, [`product_b`] applies every cycle to a working table.
//!   Cycles are applied left to right: in `(1 2)(1 3)` the transposition
//!   `(1 2)` acts first.
//! - **Inversion**: [`invert`] and [`invert_table`].
//! - **Validation**: [`validate_cycles`], `PermutationTable::try_from`.
//!
//! None of the algorithms validate their input: cycles are expected to be
//! made of distinct positive integers, and a cycle form to be disjoint.
//! Malformed input gives an unspecified result.

mod cycle;
mod error;
mod inverse;
mod product;
mod table;

pub use cycle::{normalize_cycles, validate_cycles, Cycle};
pub use error::PermutationError;
pub use inverse::{invert, invert_table};
pub use product::{product_a, product_b, Factors};
pub use table::{cycles_to_table, table_to_cycles, PermutationTable};
