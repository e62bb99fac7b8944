use bitvec::vec::BitVec;
use itertools::Itertools;

use super::{table_to_cycles, Cycle, PermutationTable};

/// The factors of a product of permutations.
///
/// A product can be written either as one flat list of cycles,
/// `(1 3 6 7)(2 3 4)(1 5 4)`, or as a list of permutations that are each a
/// list of cycles. Both shapes describe the same product once flattened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Factors {
    Cycles(Vec<Cycle>),
    Permutations(Vec<Vec<Cycle>>),
}

impl Factors {
    /// Concatenates the cycles of every factor, keeping their order.
    ///
    /// ```
    /// # use taocp_perm::permutation::{Cycle, Factors};
    /// let perms = Factors::from(vec![vec![vec![1usize, 2, 3], vec![4, 6]], vec![vec![3, 5]]]);
    /// let flat: Vec<Cycle> = vec![[1, 2, 3].into(), [4, 6].into(), [3, 5].into()];
    /// assert_eq!(perms.flatten(), flat);
    /// ```
    pub fn flatten(self) -> Vec<Cycle> {
        match self {
            Factors::Cycles(cycles) => cycles,
            Factors::Permutations(perms) => perms.into_iter().flatten().collect(),
        }
    }

    /// True when no factor holds an element, so the product is the identity.
    pub fn is_empty(&self) -> bool {
        match self {
            Factors::Cycles(cycles) => cycles.iter().all(Cycle::is_empty),
            Factors::Permutations(perms) => perms.iter().flatten().all(Cycle::is_empty),
        }
    }
}

impl From<Vec<Cycle>> for Factors {
    fn from(cycles: Vec<Cycle>) -> Self {
        Factors::Cycles(cycles)
    }
}

impl From<&[Cycle]> for Factors {
    fn from(cycles: &[Cycle]) -> Self {
        Factors::Cycles(cycles.to_vec())
    }
}

impl From<Vec<Vec<usize>>> for Factors {
    fn from(cycles: Vec<Vec<usize>>) -> Self {
        Factors::Cycles(cycles.into_iter().map(Cycle::from).collect())
    }
}

impl From<Vec<Vec<Cycle>>> for Factors {
    fn from(perms: Vec<Vec<Cycle>>) -> Self {
        Factors::Permutations(perms)
    }
}

impl From<&[Vec<Cycle>]> for Factors {
    fn from(perms: &[Vec<Cycle>]) -> Self {
        Factors::Permutations(perms.to_vec())
    }
}

impl From<Vec<Vec<Vec<usize>>>> for Factors {
    fn from(perms: Vec<Vec<Vec<usize>>>) -> Self {
        Factors::Permutations(
            perms
                .into_iter()
                .map(|p| p.into_iter().map(Cycle::from).collect())
                .collect(),
        )
    }
}

/// Multiplies permutations given as cycles by scanning the formula
/// (TAOCP Algorithm 1.3.3A).
///
/// The cycles are laid out as one stream of symbols, each cycle followed by a
/// tagged copy of its first element standing for the closing parenthesis. An
/// output cycle opens at the leftmost untagged symbol. From there `current`
/// follows the formula: every later symbol equal to `current` is tagged and
/// `current` becomes the symbol after it. When the scan reaches the end,
/// `current` is the image of the last element output; the scan restarts from
/// the left until `current` comes back to the opening element.
///
/// Tags live in a bit vector next to the symbols, and no table of the domain
/// is ever built.
///
/// ```
/// # use taocp_perm::permutation::{product_a, Cycle};
/// let p: Vec<Cycle> = vec![[1, 2].into(), [1, 3].into()];
/// assert_eq!(product_a(p), vec![Cycle::from([1, 2, 3])]);
/// ```
pub fn product_a(perms: impl Into<Factors>) -> Vec<Cycle> {
    let perms = perms.into();
    if perms.is_empty() {
        return Vec::new();
    }
    let cycles = perms.flatten();

    let mut symbols = Vec::new();
    let mut tagged: BitVec = BitVec::new();
    for cycle in &cycles {
        let Some(first) = cycle.first() else {
            continue;
        };
        symbols.extend_from_slice(cycle.elements());
        tagged.resize(symbols.len(), false);
        symbols.push(first);
        tagged.push(true);
    }
    let n = symbols.len();
    log::trace!("algorithm A over {n} symbols from {} cycles", cycles.len());

    let mut result = Vec::new();
    while let Some(open) = tagged.first_zero() {
        let start = symbols[open];
        tagged.set(open, true);
        let mut output = vec![start];

        let mut current = symbols[(open + 1) % n];
        let mut idx = open + 2;
        loop {
            while idx < n {
                if symbols[idx] == current {
                    tagged.set(idx, true);
                    current = symbols[(idx + 1) % n];
                    idx += 2;
                } else {
                    idx += 1;
                }
            }
            if current == start {
                break;
            }
            // a cycle can never be longer than the formula; only a malformed
            // cycle (repeated element) gets here
            if output.len() >= n {
                log::warn!("algorithm A: cycle through {start} does not close");
                break;
            }
            output.push(current);
            idx = 0;
        }

        if output.len() > 1 {
            result.push(Cycle::new(output).normalized());
        }
    }

    result.sort_unstable();
    log::debug!("algorithm A produced {} cycles", result.len());
    result
}

/// Multiplies permutations given as cycles on a table of the domain
/// (TAOCP Algorithm 1.3.3B).
///
/// The table `T` starts as the identity on `1..=n`, `n` being the largest
/// element referenced. Cycles are read from the last one to the first, each
/// from right to left. The value `Z` lives in `T[0]`: it is cleared at the
/// right end of a cycle and swapped with `T[i]` for each element `i`. The
/// element whose swap leaves `0` behind is remembered as `j`, and at the left
/// end of the cycle `T[j]` takes `Z`.
///
/// ```
/// # use taocp_perm::permutation::{product_b, Cycle};
/// let p: Vec<Cycle> = vec![[1, 2].into(), [1, 3].into()];
/// assert_eq!(product_b(p), vec![Cycle::from([1, 2, 3])]);
/// ```
pub fn product_b(perms: impl Into<Factors>) -> Vec<Cycle> {
    let perms = perms.into();
    if perms.is_empty() {
        return Vec::new();
    }
    let cycles = perms.flatten();
    let n = cycles.iter().filter_map(Cycle::max_element).max().unwrap_or(0);
    log::trace!("algorithm B on degree {n} over {} cycles", cycles.len());

    let mut table = (0..=n).collect_vec();
    for cycle in cycles.iter().rev() {
        let Some(&last) = cycle.elements().last() else {
            continue;
        };
        table[0] = 0;
        let mut j = last;
        for &i in cycle.elements().iter().rev() {
            table.swap(0, i);
            if table[i] == 0 {
                j = i;
            }
        }
        table[j] = table[0];
    }
    table[0] = 0;

    let result = table_to_cycles(&PermutationTable::from_map(table));
    log::debug!("algorithm B produced {} cycles", result.len());
    result
}
