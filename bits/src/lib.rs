//! Bit twiddling primitives for the 64-way spatial tree: mapping single-hot words to bit
//! indices, the 6-bit child `Cell` and the 64-bit child occupancy `BitField`.

#[macro_use]
mod macros;

mod bit_twiddles;
mod masks;

pub mod cell;
pub mod field;
pub mod prng;

pub use bit_twiddles::{find_bit_index, lsb, more_than_one};
pub use cell::Cell;
pub use field::BitField;
pub use masks::INDEX_MASKS;
pub use prng::Prng;
