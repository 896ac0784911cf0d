/// Partitions of the 64 bit positions used by [`crate::find_bit_index`]. Mask `i` selects
/// every position whose index has bit `i` set.
#[rustfmt::skip]
pub const INDEX_MASKS: [u64; 6] = [
    0xAAAA_AAAA_AAAA_AAAA,
    0xCCCC_CCCC_CCCC_CCCC,
    0xF0F0_F0F0_F0F0_F0F0,
    0xFF00_FF00_FF00_FF00,
    0xFFFF_0000_FFFF_0000,
    0xFFFF_FFFF_0000_0000,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_mask_selects_positions_by_index_bit() {
        for (i, mask) in INDEX_MASKS.iter().enumerate() {
            for pos in 0..64u32 {
                let selected = mask & (1u64 << pos) != 0;
                assert_eq!(selected, pos & (1 << i) != 0, "mask {} position {}", i, pos);
            }
        }
    }

    #[test]
    fn masks_select_half_the_board() {
        for mask in INDEX_MASKS {
            assert_eq!(mask.count_ones(), 32);
        }
    }
}
