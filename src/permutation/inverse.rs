use bitvec::vec::BitVec;

use super::{cycles_to_table, table_to_cycles, Cycle, PermutationTable};

/// Inverts a permutation given in cycle form.
///
/// The cycles are written into a table, inverted in place with
/// [`invert_table`], and read back.
///
/// ```
/// # use taocp_perm::permutation::{invert, Cycle};
/// let p = vec![Cycle::from([1, 2, 3]), Cycle::from([4, 6])];
/// assert_eq!(invert(&p), vec![Cycle::from([1, 3, 2]), Cycle::from([4, 6])]);
/// ```
pub fn invert(perm: &[Cycle]) -> Vec<Cycle> {
    if perm.iter().all(Cycle::is_empty) {
        return Vec::new();
    }
    let mut table = cycles_to_table(perm);
    invert_table(&mut table);
    table_to_cycles(&table)
}

/// Inverts a table in place (TAOCP Algorithm 1.3.3I).
///
/// `m` runs down from `n` to `1`. The first element met of each cycle is its
/// largest; from there the cycle is walked once, each entry `T[m]` being
/// replaced by the element `j` visited just before `m` and marked as negated.
/// When the walk comes back to a negated entry, the cycle is closed by storing
/// the last `j` there. Later steps of `m` only clear the marks of the entries
/// the walk already rewrote.
///
/// The table must be a bijection of `1..=n` with a zero sentinel.
///
/// ```
/// # use taocp_perm::permutation::{invert_table, PermutationTable};
/// let mut t = PermutationTable::from_map(vec![0, 2, 3, 1, 6, 5, 4]);
/// invert_table(&mut t);
/// assert_eq!(t.as_slice(), &[0, 3, 1, 2, 6, 5, 4]);
/// ```
pub fn invert_table(table: &mut PermutationTable) {
    let mut map = std::mem::take(table).into_inner();
    let n = map.len().saturating_sub(1);
    log::trace!("algorithm I on degree {n}");

    let mut negated: BitVec = BitVec::repeat(false, map.len());
    // magnitude of the trailing pointer, which is always negated
    let mut j = 1;
    let mut m = n;
    while m > 0 {
        if !negated[m] {
            let mut i = map[m];
            loop {
                map[m] = j;
                negated.set(m, true);
                j = m;
                m = i;
                i = map[m];
                if negated[m] {
                    break;
                }
            }
            map[m] = j;
        }
        negated.set(m, false);
        m -= 1;
    }

    *table = PermutationTable::from_map(map);
}

impl PermutationTable {
    /// Returns the inverse table, leaving `self` untouched.
    pub fn inverse(&self) -> Self {
        let mut inv = self.clone();
        invert_table(&mut inv);
        inv
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverse_of_three_cycle() {
        let mut t = PermutationTable::from_map(vec![0, 2, 3, 1]);
        invert_table(&mut t);
        assert_eq!(t.as_slice(), &[0, 3, 1, 2]);
    }

    #[test]
    fn identity_is_fixed() {
        let mut t = PermutationTable::id(5);
        invert_table(&mut t);
        assert_eq!(t, PermutationTable::id(5));
    }

    #[test]
    fn inverse_undoes_table() {
        let t = PermutationTable::from_map(vec![0, 4, 1, 5, 2, 6, 3]);
        let inv = t.inverse();
        for i in 1..=t.degree() {
            assert_eq!(inv[t[i]], i);
        }
        assert_eq!(inv.inverse(), t);
    }

    #[test]
    fn invert_cycles() {
        assert!(invert(&[]).is_empty());
        assert!(invert(&[Cycle::default()]).is_empty());
        assert!(invert(&[Cycle::from([3])]).is_empty());
        assert_eq!(
            invert(&[Cycle::from([1, 2, 3]), Cycle::from([4, 6])]),
            vec![Cycle::from([1, 3, 2]), Cycle::from([4, 6])]
        );
        let involution = vec![Cycle::from([1, 4]), Cycle::from([2, 7]), Cycle::from([3, 5])];
        assert_eq!(invert(&involution), involution);
    }
}
