use crate::masks::INDEX_MASKS;

/// Returns the index of the single set bit in `x`.
///
/// Each mask in [`INDEX_MASKS`] answers one bit of the index: bit `i` of the result is set iff
/// the hot bit lies in a position whose own index has bit `i` set. There are no branches and no
/// loops over the word.
///
/// `x` must have exactly one bit set. This is not checked: zero returns 0 and a word with several
/// bits set returns the bitwise OR of their indices.
#[inline(always)]
pub fn find_bit_index(x: u64) -> u8 {
    ((x & INDEX_MASKS[0] != 0) as u8)
        | ((x & INDEX_MASKS[1] != 0) as u8) << 1
        | ((x & INDEX_MASKS[2] != 0) as u8) << 2
        | ((x & INDEX_MASKS[3] != 0) as u8) << 3
        | ((x & INDEX_MASKS[4] != 0) as u8) << 4
        | ((x & INDEX_MASKS[5] != 0) as u8) << 5
}

/// Returns if there are more than one bits in a u64.
#[inline(always)]
pub fn more_than_one(x: u64) -> bool {
    (x & (x.wrapping_sub(1))) != 0
}

/// Isolates the least significant set bit.
#[inline(always)]
pub fn lsb(x: u64) -> u64 {
    x & x.wrapping_neg()
}
