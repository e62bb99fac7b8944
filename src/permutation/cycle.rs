use std::fmt;

use bitvec::vec::BitVec;
use itertools::Itertools;

use super::PermutationError;

/// A single cycle `(a b c)`, sending `a -> b`, `b -> c` and `c -> a`.
///
/// Elements are positive integers. A cycle of length one is the identity on
/// its element; algorithms drop such cycles from their output.
///
/// # Examples
///
/// ```
/// # use taocp_perm::permutation::Cycle;
/// let mut c = Cycle::from([4, 6, 2]);
/// c.normalize();
/// assert_eq!(c.elements(), &[2, 4, 6]);
/// assert_eq!(c.to_string(), "(2 4 6)");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cycle(Vec<usize>);

impl Cycle {
    /// Wraps `elements` without checking them.
    pub fn new(elements: Vec<usize>) -> Self {
        Cycle(elements)
    }

    /// Wraps `elements`, rejecting `0` and repeated elements.
    ///
    /// ```
    /// # use taocp_perm::permutation::{Cycle, PermutationError};
    /// assert!(Cycle::try_new(vec![3, 1, 2]).is_ok());
    /// assert_eq!(Cycle::try_new(vec![1, 2, 1]), Err(PermutationError::RepeatedElement(1)));
    /// ```
    pub fn try_new(elements: Vec<usize>) -> Result<Self, PermutationError> {
        let cycle = Cycle(elements);
        validate_cycles(std::slice::from_ref(&cycle))?;
        Ok(cycle)
    }

    pub fn elements(&self) -> &[usize] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// A cycle of length zero or one moves nothing.
    pub fn is_trivial(&self) -> bool {
        self.0.len() <= 1
    }

    pub fn first(&self) -> Option<usize> {
        self.0.first().copied()
    }

    pub fn max_element(&self) -> Option<usize> {
        self.0.iter().copied().max()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.0.iter()
    }

    /// Rotates the cycle so that its smallest element comes first, keeping the
    /// cyclic order.
    pub fn normalize(&mut self) {
        if let Some(pos) = self.0.iter().position_min() {
            self.0.rotate_left(pos);
        }
    }

    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }
}

impl From<Vec<usize>> for Cycle {
    fn from(elements: Vec<usize>) -> Self {
        Cycle(elements)
    }
}

impl From<&[usize]> for Cycle {
    fn from(elements: &[usize]) -> Self {
        Cycle(elements.to_vec())
    }
}

impl<const N: usize> From<[usize; N]> for Cycle {
    fn from(elements: [usize; N]) -> Self {
        Cycle(elements.to_vec())
    }
}

impl AsRef<[usize]> for Cycle {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Cycle {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.0.iter().join(" "))
    }
}

/// Brings a cycle list into canonical cycle form: trivial cycles dropped,
/// every cycle normalized, cycles sorted by their first element.
///
/// The input is assumed to be disjoint; overlapping cycles are not multiplied
/// out (use [`product_a`](super::product_a) for that).
///
/// ```
/// # use taocp_perm::permutation::{normalize_cycles, Cycle};
/// let cycles = vec![Cycle::from([6, 4]), Cycle::from([5]), Cycle::from([3, 1, 2])];
/// let expected = vec![Cycle::from([1, 2, 3]), Cycle::from([4, 6])];
/// assert_eq!(normalize_cycles(&cycles), expected);
/// ```
pub fn normalize_cycles(cycles: &[Cycle]) -> Vec<Cycle> {
    cycles
        .iter()
        .filter(|c| !c.is_trivial())
        .map(|c| c.clone().normalized())
        .sorted_unstable()
        .collect()
}

/// Checks that `cycles` is a well formed cycle form: every element positive
/// and no element used twice, within a cycle or across cycles.
pub fn validate_cycles(cycles: &[Cycle]) -> Result<(), PermutationError> {
    let n = cycles.iter().filter_map(Cycle::max_element).max().unwrap_or(0);
    let mut seen: BitVec = BitVec::repeat(false, n + 1);
    for &x in cycles.iter().flatten() {
        if x == 0 {
            return Err(PermutationError::ZeroElement);
        }
        if seen.replace(x, true) {
            return Err(PermutationError::RepeatedElement(x));
        }
    }
    Ok(())
}
