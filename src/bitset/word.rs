use std::fmt::{Binary, Debug, Display};
use std::hash::Hash;
use std::ops::{
    Add, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shr,
};

/// An unsigned integer used both as the storage word of a [`Bitset`] and as
/// its index type.
///
/// The 32-bit variant packs `u32` words and is addressed by `u32` positions,
/// the 64-bit variant does the same with `u64`. Everything else about the
/// two variants is shared.
///
/// [`Bitset`]: crate::bitset::Bitset
pub trait Word:
    Copy
    + Eq
    + Ord
    + Hash
    + Default
    + Debug
    + Display
    + Binary
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + BitAnd<Output = Self>
    + BitAndAssign
    + BitOr<Output = Self>
    + BitOrAssign
    + BitXor<Output = Self>
    + BitXorAssign
    + Not<Output = Self>
    + Shr<u32, Output = Self>
{
    /// Number of bits packed in one word.
    const BITS: u32;
    /// `log2(BITS)`, the shift turning a bit index into a word index.
    const LOG2_BITS: u32;
    const ZERO: Self;
    const ONE: Self;
    /// A word with every bit set.
    const ALL: Self;
    /// The largest representable bit index.
    const MAX: Self;

    /// Single-bit mask for position `i mod BITS`.
    fn bit(i: Self) -> Self;

    /// Index of the word holding bit `i`.
    fn word_index(i: Self) -> usize;

    /// Number of words needed to hold `n` bits, never less than one.
    ///
    /// Computed without forming `n + BITS - 1`, so `n == MAX` does not wrap.
    fn words_needed(n: Self) -> usize;

    /// Mask of the bits of the last word that lie below a length of `n`.
    ///
    /// A length of zero owns no bits at all, so its mask is [`Word::ZERO`].
    fn tail_mask(n: Self) -> Self;

    fn pop_count(self) -> Self;

    /// Saturating conversion, only relevant for `u64` on narrow targets.
    fn to_usize(self) -> usize;

    fn to_u64(self) -> u64;
}

macro_rules! impl_word {
    ($($t:ty => $log2:expr),+ $(,)?) => {
        $(
            impl Word for $t {
                const BITS: u32 = <$t>::BITS;
                const LOG2_BITS: u32 = $log2;
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const ALL: Self = <$t>::MAX;
                const MAX: Self = <$t>::MAX;

                #[inline]
                fn bit(i: Self) -> Self {
                    1 << (i & (Self::BITS as $t - 1))
                }

                #[inline]
                fn word_index(i: Self) -> usize {
                    (i >> Self::LOG2_BITS).to_usize()
                }

                fn words_needed(n: Self) -> usize {
                    if n == 0 {
                        return 1;
                    }
                    let full = n >> Self::LOG2_BITS;
                    let partial = (n & (Self::BITS as $t - 1) != 0) as $t;
                    (full + partial).to_usize()
                }

                fn tail_mask(n: Self) -> Self {
                    let used = (n & (Self::BITS as $t - 1)) as u32;
                    if n == 0 {
                        0
                    } else if used == 0 {
                        Self::ALL
                    } else {
                        Self::ALL >> (Self::BITS - used)
                    }
                }

                #[inline]
                fn pop_count(self) -> Self {
                    self.count_ones() as $t
                }

                #[inline]
                fn to_usize(self) -> usize {
                    usize::try_from(self).unwrap_or(usize::MAX)
                }

                #[inline]
                fn to_u64(self) -> u64 {
                    self as u64
                }
            }
        )+
    };
}

impl_word!(u32 => 5, u64 => 6);
