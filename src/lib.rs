pub mod bench;
pub mod bitset;
pub mod statistics;

pub use bitset::{Bitset, Bitset32, Bitset64, Word};
