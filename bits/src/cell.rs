use crate::field::BitField;
use std::fmt;

/// Identifies one of the 64 sub-cubes of a tree node. A node covers two tree levels, so its cube
/// is split into quarters along each axis: bits 0-1 hold the x quarter, bits 2-3 the y quarter
/// and bits 4-5 the z quarter.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct Cell(pub u8);

impl Cell {
    /// Creates a cell from the quarter index on each axis. This asserts that every quarter is in
    /// bounds, so prefer the tuple constructor in hot paths where the index is already packed.
    pub fn from_xyz(x: u8, y: u8, z: u8) -> Self {
        assert!(x <= 3);
        assert!(y <= 3);
        assert!(z <= 3);
        Cell(x | y << 2 | z << 4)
    }

    #[inline]
    pub const fn is_okay(&self) -> bool {
        self.0 < 64
    }

    /// Returns the quarter index along the x axis.
    #[inline(always)]
    pub const fn x(self) -> u8 {
        self.0 & 0b00_00_11
    }

    /// Returns the quarter index along the y axis.
    #[inline(always)]
    pub const fn y(self) -> u8 {
        (self.0 >> 2) & 0b11
    }

    /// Returns the quarter index along the z axis.
    #[inline(always)]
    pub const fn z(self) -> u8 {
        (self.0 >> 4) & 0b11
    }

    /// Converts the given `Cell` to its equivalent `BitField`.
    #[inline]
    pub fn to_field(self) -> BitField {
        BitField((1 as u64).wrapping_shl(self.0 as u32))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.x(), self.y(), self.z())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_axes() {
        let c = Cell::from_xyz(1, 2, 3);
        assert_eq!(c, Cell(0b11_10_01));
        assert_eq!((c.x(), c.y(), c.z()), (1, 2, 3));
    }

    #[test]
    fn every_cell_round_trips_through_axes() {
        for i in 0..64u8 {
            let c = Cell(i);
            assert!(c.is_okay());
            assert_eq!(Cell::from_xyz(c.x(), c.y(), c.z()), c);
        }
        assert!(!Cell(64).is_okay());
    }

    #[test]
    #[should_panic]
    fn quarter_out_of_range() {
        Cell::from_xyz(4, 0, 0);
    }

    #[test]
    fn to_field() {
        assert_eq!(Cell(0).to_field(), BitField(1));
        assert_eq!(Cell(63).to_field(), BitField(1 << 63));
    }

    #[test]
    fn display() {
        assert_eq!(Cell::from_xyz(3, 0, 2).to_string(), "(3,0,2)");
    }
}
