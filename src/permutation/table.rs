use std::{fmt, ops::Index};

use bitvec::vec::BitVec;
use itertools::Itertools;

use super::{Cycle, PermutationError};

/// The table form of a permutation of `1..=n`.
///
/// `T[i]` is the image of `i` for `i` in `1..=n`. `T[0]` is a sentinel holding
/// `0`, so the table is indexed by the elements themselves. The identity on the
/// empty domain is stored as `[0, 1]`.
///
/// # Examples
///
/// ```
/// # use taocp_perm::permutation::{Cycle, PermutationTable};
/// let t = PermutationTable::from_cycles(&[Cycle::from([1, 2, 3]), Cycle::from([4, 6])]);
/// assert_eq!(t.as_slice(), &[0, 2, 3, 1, 6, 5, 4]);
/// assert_eq!(t.degree(), 6);
/// assert_eq!(t[3], 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PermutationTable {
    map: Vec<usize>,
}

impl PermutationTable {
    /// The identity table on `1..=n`; `n` is raised to at least 1.
    pub fn id(n: usize) -> Self {
        PermutationTable {
            map: (0..=n.max(1)).collect(),
        }
    }

    /// Wraps a raw table without checking it. `map[0]` is the sentinel.
    pub fn from_map(map: Vec<usize>) -> Self {
        PermutationTable { map }
    }

    /// Builds a table from the images of `1, 2, ..., n` in order.
    ///
    /// ```
    /// # use taocp_perm::permutation::PermutationTable;
    /// let t = PermutationTable::from_images([2, 3, 1]).unwrap();
    /// assert_eq!(t.as_slice(), &[0, 2, 3, 1]);
    /// assert!(PermutationTable::from_images([2, 2, 1]).is_err());
    /// ```
    pub fn from_images<I>(images: I) -> Result<Self, PermutationError>
    where
        I: IntoIterator<Item = usize>,
    {
        let map = std::iter::once(0).chain(images).collect_vec();
        if map.len() == 1 {
            return Ok(Self::id(1));
        }
        Self::try_from(map)
    }

    pub fn from_cycles(cycles: &[Cycle]) -> Self {
        cycles_to_table(cycles)
    }

    pub fn to_cycles(&self) -> Vec<Cycle> {
        table_to_cycles(self)
    }

    /// The size `n` of the domain `1..=n`.
    pub fn degree(&self) -> usize {
        self.map.len().saturating_sub(1)
    }

    /// The image of `i`, or `None` outside `1..=n`.
    pub fn image(&self, i: usize) -> Option<usize> {
        if i == 0 {
            return None;
        }
        self.map.get(i).copied()
    }

    /// The images of `1..=n` in order.
    pub fn images(&self) -> &[usize] {
        self.map.get(1..).unwrap_or_default()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.map
    }

    pub fn into_inner(self) -> Vec<usize> {
        self.map
    }

    pub fn is_identity(&self) -> bool {
        self.map.iter().enumerate().all(|(i, &m)| i == m)
    }

    /// Checks that the table is a bijection of `1..=n` with a zero sentinel.
    pub fn validate(&self) -> Result<(), PermutationError> {
        let degree = self.degree();
        match self.map.first() {
            Some(0) => {}
            Some(&s) => return Err(PermutationError::NonZeroSentinel(s)),
            None => return Ok(()),
        }
        let mut hit: BitVec = BitVec::repeat(false, degree + 1);
        for (index, &image) in self.map.iter().enumerate().skip(1) {
            if image == 0 || image > degree {
                return Err(PermutationError::ImageOutOfRange {
                    index,
                    image,
                    degree,
                });
            }
            if hit.replace(image, true) {
                return Err(PermutationError::RepeatedImage(image));
            }
        }
        Ok(())
    }
}

impl Default for PermutationTable {
    fn default() -> Self {
        PermutationTable::id(1)
    }
}

impl TryFrom<Vec<usize>> for PermutationTable {
    type Error = PermutationError;

    fn try_from(map: Vec<usize>) -> Result<Self, Self::Error> {
        let table = PermutationTable { map };
        table.validate()?;
        Ok(table)
    }
}

impl Index<usize> for PermutationTable {
    type Output = usize;

    fn index(&self, index: usize) -> &Self::Output {
        &self.map[index]
    }
}

/// One-line notation: the images of `1..=n` separated by spaces.
impl fmt::Display for PermutationTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.images().iter().join(" "))
    }
}

/// Builds the table form of a disjoint cycle form.
///
/// The table has size `max(element) + 1` and starts as the identity; every
/// cycle then sends each of its elements to the next one, the last wrapping
/// around to the first. An empty cycle list gives `[0, 1]`.
///
/// ```
/// # use taocp_perm::permutation::{cycles_to_table, Cycle};
/// assert_eq!(cycles_to_table(&[]).as_slice(), &[0, 1]);
/// let t = cycles_to_table(&[Cycle::from([1, 2, 3]), Cycle::from([4, 6])]);
/// assert_eq!(t.as_slice(), &[0, 2, 3, 1, 6, 5, 4]);
/// ```
pub fn cycles_to_table(cycles: &[Cycle]) -> PermutationTable {
    let n = cycles.iter().filter_map(Cycle::max_element).max().unwrap_or(1);
    let mut map = (0..=n).collect_vec();
    for cycle in cycles {
        for (&from, &to) in cycle.iter().circular_tuple_windows() {
            map[from] = to;
        }
    }
    PermutationTable { map }
}

/// Reads the cycle form off a table.
///
/// Indices `1..=n` are scanned in increasing order; each index not yet visited
/// opens a cycle that follows `T` until it closes. The opening index is the
/// smallest of its cycle, so cycles come out normalized and sorted. Chains of
/// length one are fixed points and are dropped.
///
/// ```
/// # use taocp_perm::permutation::{table_to_cycles, Cycle, PermutationTable};
/// let t = PermutationTable::from_map(vec![0, 2, 3, 1, 6, 5, 4]);
/// assert_eq!(table_to_cycles(&t), vec![Cycle::from([1, 2, 3]), Cycle::from([4, 6])]);
/// assert!(table_to_cycles(&PermutationTable::id(5)).is_empty());
/// ```
pub fn table_to_cycles(table: &PermutationTable) -> Vec<Cycle> {
    let map = table.as_slice();
    let mut visited: BitVec = BitVec::repeat(false, map.len());
    if !visited.is_empty() {
        visited.set(0, true);
    }

    let mut cycles = Vec::new();
    for start in 1..map.len() {
        if visited[start] {
            continue;
        }
        let mut cycle = Vec::new();
        let mut i = start;
        while i < map.len() && !visited.replace(i, true) {
            cycle.push(i);
            i = map[i];
        }
        if cycle.len() > 1 {
            cycles.push(Cycle::new(cycle));
        }
    }
    log::trace!(
        "read {} cycles off a table of degree {}",
        cycles.len(),
        table.degree()
    );
    cycles
}

#[cfg(test)]
mod tests {
    use similar_asserts::assert_eq;

    use super::*;

    fn perm1() -> Vec<Cycle> {
        vec![Cycle::from([1, 2, 3]), Cycle::from([4, 6])]
    }

    #[test]
    fn table_of_cycles() {
        assert_eq!(
            cycles_to_table(&perm1()),
            PermutationTable::from_map(vec![0, 2, 3, 1, 6, 5, 4])
        );
        assert_eq!(cycles_to_table(&[]), PermutationTable::from_map(vec![0, 1]));
        assert_eq!(
            cycles_to_table(&[Cycle::from([1])]),
            PermutationTable::from_map(vec![0, 1])
        );
        assert_eq!(
            cycles_to_table(&[Cycle::from([1, 4, 5, 2])]),
            PermutationTable::from_map(vec![0, 4, 1, 3, 5, 2])
        );
    }

    #[test]
    fn cycles_of_table() {
        let t = PermutationTable::from_map(vec![0, 2, 3, 1, 6, 5, 4]);
        assert_eq!(table_to_cycles(&t), perm1());
        assert_eq!(
            table_to_cycles(&PermutationTable::from_map((0..6).collect())),
            Vec::<Cycle>::new()
        );
    }

    #[test]
    fn round_trip_normalizes() {
        let p = vec![Cycle::from([5, 2, 1, 4])];
        assert_eq!(
            table_to_cycles(&cycles_to_table(&p)),
            vec![Cycle::from([1, 4, 5, 2])]
        );
    }

    #[test]
    fn out_of_range_entries_do_not_panic() {
        let t = PermutationTable::from_map(vec![0, 9, 1]);
        assert_eq!(table_to_cycles(&t), Vec::<Cycle>::new());
    }

    #[test]
    fn accessors() {
        let t = cycles_to_table(&perm1());
        assert_eq!(t.degree(), 6);
        assert_eq!(t.image(0), None);
        assert_eq!(t.image(4), Some(6));
        assert_eq!(t.image(7), None);
        assert_eq!(t.images().to_vec(), vec![2, 3, 1, 6, 5, 4]);
        assert_eq!(t.to_string(), "2 3 1 6 5 4");
        assert!(!t.is_identity());
        assert!(PermutationTable::id(4).is_identity());
        assert_eq!(PermutationTable::id(0), PermutationTable::from_map(vec![0, 1]));
    }

    #[test]
    fn validation() {
        assert!(PermutationTable::try_from(vec![0, 2, 3, 1]).is_ok());
        assert_eq!(
            PermutationTable::try_from(vec![1, 2, 3, 1]),
            Err(PermutationError::NonZeroSentinel(1))
        );
        assert_eq!(
            PermutationTable::try_from(vec![0, 2, 4, 1]),
            Err(PermutationError::ImageOutOfRange {
                index: 2,
                image: 4,
                degree: 3
            })
        );
        assert_eq!(
            PermutationTable::try_from(vec![0, 0, 1]),
            Err(PermutationError::ImageOutOfRange {
                index: 1,
                image: 0,
                degree: 2
            })
        );
        assert_eq!(
            PermutationTable::try_from(vec![0, 2, 2]),
            Err(PermutationError::RepeatedImage(2))
        );
        assert_eq!(
            PermutationTable::from_images(Vec::new()),
            Ok(PermutationTable::id(1))
        );
    }
}
