//! Dynamically growable bitsets over a numeric index space.
//!
//! One generic [`Bitset`] backs both widths: [`Bitset32`] packs `u32` words
//! and is indexed by `u32`, [`Bitset64`] does the same with `u64`.
//!
//! # Submodules
//!
//! - `word`: the [`Word`] trait, the only thing separating the two widths
//! - `growable`: construction, per-bit access, aggregate queries and copies
//! - `algebra`: union, intersection, difference, symmetric difference, complement

mod algebra;
mod growable;
mod word;

pub use growable::*;
pub use word::*;

/// Bitset indexed by 32-bit positions, packing 32-bit words.
pub type Bitset32 = Bitset<u32>;

/// Bitset indexed by 64-bit positions, packing 64-bit words.
pub type Bitset64 = Bitset<u64>;
