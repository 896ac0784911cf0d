use crate::bit_twiddles::{find_bit_index, lsb};
use crate::cell::Cell;

use std::fmt;
use std::ops::*;

/// The set of occupied child cells of a tree node, one bit per [`Cell`].
///
/// Children are stored densely in ascending cell order, so the position of a child in that array
/// is the number of occupied cells below it (see [`BitField::slot`]).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[repr(transparent)]
pub struct BitField(pub u64);

impl BitField {
    /// No cells occupied.
    pub const EMPTY: BitField = BitField(0);
    /// Every cell occupied.
    pub const ALL: BitField = BitField(u64::MAX);

    pub fn new(bits: u64) -> Self {
        BitField(bits)
    }

    /// Returns the count of occupied cells.
    #[inline(always)]
    pub fn popcnt(&self) -> u32 {
        self.0.count_ones()
    }

    /// Returns true iff no cell is occupied.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Returns true iff at least one cell is occupied.
    #[inline(always)]
    pub fn is_not_empty(&self) -> bool {
        self.0 != 0
    }

    #[inline(always)]
    pub fn contains(&self, cell: Cell) -> bool {
        self.0 & cell.to_field().0 != 0
    }

    #[inline(always)]
    pub fn set(&mut self, cell: Cell) {
        *self |= cell.to_field();
    }

    #[inline(always)]
    pub fn clear(&mut self, cell: Cell) {
        *self &= !cell.to_field();
    }

    /// Returns the number of occupied cells strictly below `cell`.
    #[inline(always)]
    pub fn slot(&self, cell: Cell) -> usize {
        (self.0 & cell.to_field().0.wrapping_sub(1)).count_ones() as usize
    }

    /// Toggles off the current lowest significant bit which is set.
    #[inline(always)]
    pub fn toggle_lsb(&mut self) {
        self.0 &= self.0.wrapping_sub(1);
    }

    /// Returns the occupied cells in ascending order. The `n`th entry is the cell of the `n`th
    /// child of the node owning this field.
    ///
    /// ```
    /// use bits::{BitField, Cell};
    ///
    /// let field = BitField(0b0001_0000_0001_0001);
    /// assert_eq!(field.decode(), vec![Cell(0), Cell(4), Cell(12)]);
    /// ```
    pub fn decode(&self) -> Vec<Cell> {
        let mut v = *self;
        let mut cells = Vec::with_capacity(self.popcnt() as usize);
        while v.is_not_empty() {
            cells.push(v.lowest());
            v.toggle_lsb();
        }
        cells
    }

    /// Returns the lowest occupied cell. Meaningless for an empty field.
    #[inline(always)]
    fn lowest(&self) -> Cell {
        Cell(find_bit_index(lsb(self.0)))
    }
}

impl_bit_ops!(BitField, u64);

impl std::iter::Iterator for BitField {
    type Item = Cell;

    #[inline(always)]
    fn next(&mut self) -> Option<Cell> {
        if self.is_empty() {
            return None;
        }
        let cell = self.lowest();
        self.toggle_lsb();
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.popcnt() as usize;
        (n, Some(n))
    }
}

impl fmt::Display for BitField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for z in 0..4u8 {
            writeln!(f, "   z = {}", z)?;
            writeln!(f, "   ┌────────────┐")?;
            for y in (0..4u8).rev() {
                write!(f, " {} │", y)?;
                for x in 0..4u8 {
                    if self.contains(Cell::from_xyz(x, y, z)) {
                        write!(f, " 1 ")?;
                    } else {
                        write!(f, " . ")?;
                    }
                }
                writeln!(f, "│")?;
            }
            writeln!(f, "   └────────────┘")?;
        }
        writeln!(f, "     0  1  2  3 ")
    }
}
