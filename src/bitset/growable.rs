use std::fmt;

use tracing::trace;

use crate::bitset::Word;

/// A growable set of boolean values packed into words of type `W`.
///
/// Word `k` holds the bits `[k * W::BITS, (k + 1) * W::BITS)`, least
/// significant bit first. Reading or clearing past the end is a no-op,
/// writing past the end grows the set.
///
/// Bits of the last word at positions `>= len()` are kept at zero. Every
/// operation that could set them masks them out again.
///
/// # Examples
///
/// ```
/// use bitset::Bitset32;
///
/// let mut bs = Bitset32::new(10);
/// assert!(!bs.test(3));
///
/// bs.set(3);
/// assert!(bs.test(3));
///
/// bs.set(40);
/// assert_eq!(bs.len(), 41);
/// assert_eq!(bs.count(), 2);
/// ```
#[derive(Clone)]
pub struct Bitset<W: Word> {
    /*private*/ length: W,
    /*private*/ words: Vec<W>,
}

impl<W: Word> Bitset<W> {
    /// Constructs a new [`Bitset`] with `n` addressable bits, all cleared.
    ///
    /// At least one word is always allocated, even for `n == 0`.
    ///
    /// # Examples
    /// ```
    /// use bitset::Bitset64;
    ///
    /// let bs = Bitset64::new(12);
    /// assert_eq!(bs.len(), 12);
    /// assert!(!bs.test(0));
    /// ```
    pub fn new(n: W) -> Self {
        Bitset {
            length: n,
            words: vec![W::ZERO; W::words_needed(n)],
        }
    }

    /// Number of addressable bits.
    pub fn len(&self) -> W {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == W::ZERO
    }

    /// Number of words covering `len()` bits.
    pub fn word_count(&self) -> usize {
        W::words_needed(self.length)
    }

    /// Returns `true` if bit `i` is set. Bits past the end read as unset.
    pub fn test(&self, i: W) -> bool {
        if i >= self.length {
            return false;
        }
        self.words[W::word_index(i)] & W::bit(i) != W::ZERO
    }

    /// Sets bit `i`, growing the set to `i + 1` bits if it is out of range.
    ///
    /// # Panics
    ///
    /// Panics if `i == W::MAX`, since no length of type `W` can cover it.
    ///
    /// # Examples
    /// ```
    /// use bitset::Bitset32;
    ///
    /// let mut bs = Bitset32::new(32);
    /// bs.set(32);
    /// assert!(!bs.test(31));
    /// assert!(bs.test(32));
    /// assert_eq!(bs.len(), 33);
    /// ```
    pub fn set(&mut self, i: W) {
        if i >= self.length {
            self.grow_to_cover(i);
        }
        self.words[W::word_index(i)] |= W::bit(i);
    }

    /// Clears bit `i`. Out of range indices are left alone, the set does not grow.
    pub fn clear(&mut self, i: W) {
        if i >= self.length {
            return;
        }
        self.words[W::word_index(i)] &= !W::bit(i);
    }

    /// Toggles bit `i`. Past the end, the implicit zero becomes a one, which
    /// is exactly [`Bitset::set`].
    ///
    /// # Panics
    ///
    /// Panics if `i == W::MAX`, like [`Bitset::set`].
    pub fn flip(&mut self, i: W) {
        if i >= self.length {
            self.set(i);
            return;
        }
        self.words[W::word_index(i)] ^= W::bit(i);
    }

    /// Clears every bit, keeping the length.
    pub fn clear_all(&mut self) {
        self.words.fill(W::ZERO);
    }

    /// Number of set bits.
    pub fn count(&self) -> W {
        self.words
            .iter()
            .fold(W::ZERO, |acc, &word| acc + word.pop_count())
    }

    /// Returns `true` if every one of the `len()` bits is set.
    ///
    /// An empty set vacuously has all of its bits set.
    pub fn all(&self) -> bool {
        self.count() == self.length
    }

    /// Returns `true` if no bit is set.
    pub fn none(&self) -> bool {
        self.words.iter().all(|&word| word == W::ZERO)
    }

    /// Returns `true` if at least one bit is set.
    pub fn any(&self) -> bool {
        !self.none()
    }

    /// Two sets are equal when they have the same length and the same bits set.
    ///
    /// # Examples
    /// ```
    /// use bitset::Bitset32;
    ///
    /// // same (empty) contents, different lengths
    /// assert!(!Bitset32::new(99).equal(&Bitset32::new(100)));
    /// assert!(Bitset32::new(100).equal(&Bitset32::new(100)));
    /// ```
    pub fn equal(&self, other: &Self) -> bool {
        self.length == other.length && self.words == other.words
    }

    /// Overlays this set's words onto `dest`, position by position, as far as
    /// both word sequences reach. `dest` keeps its length and any word past
    /// the copied range.
    ///
    /// Returns the smaller of the two lengths.
    ///
    /// # Examples
    /// ```
    /// use bitset::Bitset32;
    ///
    /// let mut src = Bitset32::new(100);
    /// src.set(3);
    /// src.set(70);
    ///
    /// let mut dest = Bitset32::new(40);
    /// assert_eq!(src.copy_into(&mut dest), 40);
    /// assert!(dest.test(3));
    /// assert_eq!(dest.len(), 40);
    /// ```
    pub fn copy_into(&self, dest: &mut Bitset<W>) -> W {
        let copied = self.words.len().min(dest.words.len());
        dest.words[..copied].copy_from_slice(&self.words[..copied]);
        if copied == dest.words.len() {
            // the source may carry live bits past dest's length
            dest.clean_last_word();
        }
        self.length.min(dest.length)
    }

    /// Renders the words, most significant first, each as a zero-padded
    /// binary string followed by a `.`. Meant for diagnostics only.
    ///
    /// # Examples
    /// ```
    /// use bitset::Bitset32;
    ///
    /// let mut bs = Bitset32::new(40);
    /// bs.set(0);
    /// bs.set(33);
    /// assert_eq!(
    ///     bs.dump(),
    ///     "00000000000000000000000000000010.00000000000000000000000000000001."
    /// );
    /// ```
    pub fn dump(&self) -> String {
        self.to_string()
    }

    pub(crate) fn from_parts(length: W, words: Vec<W>) -> Self {
        debug_assert_eq!(words.len(), W::words_needed(length));
        Bitset { length, words }
    }

    pub(crate) fn words(&self) -> &[W] {
        &self.words
    }

    pub(crate) fn words_mut(&mut self) -> &mut [W] {
        &mut self.words
    }

    /// Zeroes the bits of the last word that lie at or past `len()`.
    pub(crate) fn clean_last_word(&mut self) {
        let last = self.words.len() - 1;
        self.words[last] &= W::tail_mask(self.length);
    }

    fn grow_to_cover(&mut self, i: W) {
        assert!(
            i < W::MAX,
            "bit index {i} is the largest {}-bit index, no length can cover it",
            W::BITS
        );
        let length = i + W::ONE;
        let needed = W::words_needed(length);
        if needed > self.words.len() {
            trace!(from = self.words.len(), to = needed, "growing bitset words");
            self.words.resize(needed, W::ZERO);
        }
        self.length = length;
    }
}

impl<W: Word> Default for Bitset<W> {
    fn default() -> Self {
        Bitset::new(W::ZERO)
    }
}

impl<W: Word> PartialEq for Bitset<W> {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl<W: Word> Eq for Bitset<W> {}

impl<W: Word> fmt::Display for Bitset<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = W::BITS as usize;
        for word in self.words[..self.word_count()].iter().rev() {
            write!(f, "{word:0width$b}.")?;
        }
        Ok(())
    }
}

impl<W: Word> fmt::Debug for Bitset<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bitset")
            .field("length", &self.length)
            .field("words", &format_args!("{self}"))
            .finish()
    }
}
