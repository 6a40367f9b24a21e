//! Word-wise set algebra between bitsets of possibly different lengths.
//!
//! None of these operations mutate their operands, each returns a freshly
//! allocated [`Bitset`]. Past its own length an operand reads as all zeroes.

use std::ops::{BitAnd, BitOr, BitXor, Not, Sub};

use crate::bitset::{Bitset, Word};

/// Orders two operands as `(shorter, longer)`, keeping `a` first on ties.
fn sort_by_length<'a, W: Word>(
    a: &'a Bitset<W>,
    b: &'a Bitset<W>,
) -> (&'a Bitset<W>, &'a Bitset<W>) {
    if a.len() <= b.len() {
        (a, b)
    } else {
        (b, a)
    }
}

/// Clones the longer operand and folds the shorter one into its low words.
fn combine_into_longer<W: Word>(
    a: &Bitset<W>,
    b: &Bitset<W>,
    op: impl Fn(W, W) -> W,
) -> Bitset<W> {
    let (shorter, longer) = sort_by_length(a, b);
    let mut result = longer.clone();
    for (dst, &src) in result.words_mut().iter_mut().zip(shorter.words()) {
        *dst = op(src, *dst);
    }
    result
}

impl<W: Word> Bitset<W> {
    /// `self AND NOT other`, over `self`'s length.
    ///
    /// Order matters: the receiver is the set being subtracted from.
    ///
    /// # Examples
    /// ```
    /// use bitset::Bitset32;
    ///
    /// let mut a = Bitset32::new(10);
    /// a.set(1);
    /// a.set(2);
    /// let mut b = Bitset32::new(100);
    /// b.set(2);
    /// b.set(50);
    ///
    /// let d = a.difference(&b);
    /// assert_eq!(d.len(), 10);
    /// assert!(d.test(1) && !d.test(2));
    /// assert_eq!(b.difference(&a).count(), 1);
    /// ```
    pub fn difference(&self, other: &Self) -> Self {
        let mut result = self.clone();
        for (dst, &src) in result.words_mut().iter_mut().zip(other.words()) {
            *dst &= !src;
        }
        result
    }

    /// `self AND other`, truncated to the shorter length.
    pub fn intersection(&self, other: &Self) -> Self {
        let (shorter, longer) = sort_by_length(self, other);
        let words = shorter
            .words()
            .iter()
            .zip(longer.words())
            .map(|(&lhs, &rhs)| lhs & rhs)
            .collect();
        Bitset::from_parts(shorter.len(), words)
    }

    /// `self OR other`, over the longer length.
    pub fn union(&self, other: &Self) -> Self {
        combine_into_longer(self, other, |lhs, rhs| lhs | rhs)
    }

    /// `self XOR other`, over the longer length.
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        combine_into_longer(self, other, |lhs, rhs| lhs ^ rhs)
    }

    /// `NOT self`, restricted to `self`'s length.
    ///
    /// # Examples
    /// ```
    /// use bitset::Bitset32;
    ///
    /// let mut a = Bitset32::new(50);
    /// a.set(10);
    /// a.set(20);
    /// a.set(42);
    /// assert_eq!(a.complement().count(), 47);
    /// ```
    pub fn complement(&self) -> Self {
        let words = self.words().iter().map(|&word| !word).collect();
        let mut result = Bitset::from_parts(self.len(), words);
        result.clean_last_word();
        result
    }
}

impl<W: Word> BitOr for &Bitset<W> {
    type Output = Bitset<W>;

    fn bitor(self, rhs: Self) -> Bitset<W> {
        self.union(rhs)
    }
}

impl<W: Word> BitAnd for &Bitset<W> {
    type Output = Bitset<W>;

    fn bitand(self, rhs: Self) -> Bitset<W> {
        self.intersection(rhs)
    }
}

impl<W: Word> BitXor for &Bitset<W> {
    type Output = Bitset<W>;

    fn bitxor(self, rhs: Self) -> Bitset<W> {
        self.symmetric_difference(rhs)
    }
}

impl<W: Word> Sub for &Bitset<W> {
    type Output = Bitset<W>;

    fn sub(self, rhs: Self) -> Bitset<W> {
        self.difference(rhs)
    }
}

impl<W: Word> Not for &Bitset<W> {
    type Output = Bitset<W>;

    fn not(self) -> Bitset<W> {
        self.complement()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitset::{Bitset32, Bitset64};
    use hashbrown::HashSet;
    use rand::prelude::*;

    macro_rules! algebra_tests {
        ($modname:ident, $set:ty, $w:ty) => {
            mod $modname {
                use super::*;

                /// `a`: odd bits of 0..100, `b`: even bits of 0..100 plus 100..200.
                fn odd_and_even() -> ($set, $set) {
                    let mut a = <$set>::new(100);
                    let mut b = <$set>::new(200);
                    for i in (1..100).step_by(2) {
                        a.set(i);
                        b.set(i - 1);
                    }
                    for i in 100..200 {
                        b.set(i);
                    }
                    (a, b)
                }

                /// `a`: odd bits of 0..100, `b`: every bit of 0..200.
                fn odd_and_full() -> ($set, $set) {
                    let (a, mut b) = odd_and_even();
                    for i in (1..100).step_by(2) {
                        b.set(i);
                    }
                    (a, b)
                }

                fn random_set(rng: &mut StdRng, max_len: $w) -> $set {
                    let len: $w = rng.random_range(0..max_len);
                    let mut bs = <$set>::new(len);
                    if len > 0 {
                        for _ in 0..len / 2 {
                            bs.set(rng.random_range(0..len));
                        }
                    }
                    bs
                }

                fn members(bs: &$set) -> HashSet<u64> {
                    (0..bs.len()).filter(|&i| bs.test(i)).map(|i| i as u64).collect()
                }

                #[test]
                fn union_of_odd_and_even() {
                    let (a, b) = odd_and_even();
                    let c = a.union(&b);
                    assert_eq!(c.count(), 200);
                    assert_eq!(c.len(), 200);
                    assert!(c.all());
                    assert!(c.equal(&b.union(&a)));
                }

                #[test]
                fn intersection_of_odd_and_even_is_empty() {
                    let (a, b) = odd_and_even();
                    let c = a.intersection(&b);
                    assert_eq!(c.count(), 0);
                    assert_eq!(c.len(), 100);
                    assert!(c.none());
                }

                #[test]
                fn intersection_takes_the_shorter_length() {
                    let (a, b) = odd_and_full();
                    let c = a.intersection(&b);
                    let d = b.intersection(&a);
                    assert_eq!(c.count(), 50);
                    assert_eq!(c.len(), 100);
                    assert!(c.equal(&d));
                }

                #[test]
                fn difference_is_not_symmetric() {
                    let (a, b) = odd_and_even();
                    let c = a.difference(&b);
                    let d = b.difference(&a);
                    assert_eq!(c.count(), 50);
                    assert_eq!(d.count(), 150);
                    assert_eq!(c.len(), 100);
                    assert_eq!(d.len(), 200);
                    assert!(!c.equal(&d));
                }

                #[test]
                fn symmetric_difference_of_odd_and_full() {
                    let (a, b) = odd_and_full();
                    let c = a.symmetric_difference(&b);
                    let d = b.symmetric_difference(&a);
                    assert_eq!(c.count(), 150);
                    assert_eq!(d.count(), 150);
                    assert!(c.equal(&d));
                }

                #[test]
                fn complement_of_empty_fills_length_only() {
                    let a = <$set>::new(50);
                    let b = a.complement();
                    assert_eq!(b.count(), 50);
                    assert!(b.all());
                    assert!(!b.test(50));
                }

                #[test]
                fn complement_with_some_bits() {
                    let mut a = <$set>::new(50);
                    a.set(10);
                    a.set(20);
                    a.set(42);
                    let b = a.complement();
                    assert_eq!(b.count(), 47);
                    assert!(!b.test(10) && !b.test(20) && !b.test(42));
                }

                #[test]
                fn complement_of_zero_length_stays_empty() {
                    let a = <$set>::new(0);
                    let b = a.complement();
                    assert_eq!(b.count(), 0);
                    assert!(b.none());
                    assert!(b.equal(&a));
                }

                #[test]
                fn complement_on_word_boundary() {
                    let bits = <$w as Word>::BITS as $w;
                    let b = <$set>::new(bits * 2).complement();
                    assert_eq!(b.count(), bits * 2);
                }

                #[test]
                fn operands_are_left_untouched() {
                    let (a, b) = odd_and_even();
                    let (a0, b0) = (a.clone(), b.clone());
                    let _ = a.union(&b);
                    let _ = a.intersection(&b);
                    let _ = a.difference(&b);
                    let _ = b.difference(&a);
                    let _ = a.symmetric_difference(&b);
                    let _ = a.complement();
                    assert!(a.equal(&a0));
                    assert!(b.equal(&b0));
                }

                #[test]
                fn operators_match_methods() {
                    let (a, b) = odd_and_full();
                    assert_eq!(&a | &b, a.union(&b));
                    assert_eq!(&a & &b, a.intersection(&b));
                    assert_eq!(&a ^ &b, a.symmetric_difference(&b));
                    assert_eq!(&b - &a, b.difference(&a));
                    assert_eq!(!&a, a.complement());
                }

                #[test]
                fn test_randomized_consistency() {
                    let mut rng = StdRng::seed_from_u64(42);

                    for _ in 0..200 {
                        let a = random_set(&mut rng, 300);
                        let b = random_set(&mut rng, 300);
                        let (ma, mb) = (members(&a), members(&b));

                        // The "Truth": plain set algebra over the members
                        assert_eq!(members(&a.union(&b)), &ma | &mb);
                        assert_eq!(members(&a.intersection(&b)), &ma & &mb);
                        assert_eq!(members(&a.difference(&b)), &ma - &mb);
                        assert_eq!(members(&a.symmetric_difference(&b)), &ma ^ &mb);

                        let all_a: HashSet<u64> = (0..a.len() as u64).collect();
                        assert_eq!(members(&a.complement()), &all_a - &ma);

                        assert_eq!(a.count() as usize, ma.len());
                        assert_eq!(
                            a.difference(&b).count() + a.intersection(&b).count(),
                            a.count()
                        );
                        assert!(a.union(&b).equal(&b.union(&a)));
                        assert!(a.intersection(&b).equal(&b.intersection(&a)));
                        assert!(a.symmetric_difference(&b).equal(&b.symmetric_difference(&a)));
                        assert!(a.complement().complement().equal(&a));
                        assert_eq!(a.union(&b).len(), a.len().max(b.len()));
                        assert_eq!(a.intersection(&b).len(), a.len().min(b.len()));
                    }
                }
            }
        };
    }

    algebra_tests!(width32, Bitset32, u32);
    algebra_tests!(width64, Bitset64, u64);
}
