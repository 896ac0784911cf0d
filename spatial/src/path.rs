//! Resolution of a point to the chain of cells leading to it from the root.

use crate::geom::{BBox, Point};
use bits::Cell;

/// The maximum number of node levels below the root. Each level consumes two bits of precision
/// per axis and an `f64` carries 53, so 26 levels is as deep as a coordinate can be resolved.
pub const MAX_DEPTH: usize = 26;

const SCALE_BITS: usize = 2 * MAX_DEPTH;
const COORD_LIMIT: u64 = (1 << (SCALE_BITS + 2)) - 1;

/// Maps points inside a root cube onto fixed point integers, two bits per tree level per axis.
#[derive(Copy, Clone, Debug)]
pub struct Resolver {
    bottom: Point,
    scale: f64,
}

impl Resolver {
    pub fn new(bounds: &BBox) -> Self {
        let quartersize = bounds.halfsize * 0.5;
        Resolver {
            bottom: bounds.bottom(),
            scale: (1u64 << SCALE_BITS) as f64 / quartersize,
        }
    }

    /// Returns the cell of `point` at every level of the tree, the root level first.
    pub fn path(&self, point: Point) -> [Cell; MAX_DEPTH] {
        let coords = self.coords(point);
        let mut path = [Cell(0); MAX_DEPTH];
        for (depth, cell) in path.iter_mut().enumerate() {
            *cell = pack(coords, shift_for(depth));
        }
        path
    }

    /// Returns the cell of `point` at a single level of the tree.
    #[inline]
    pub fn cell_at(&self, point: Point, depth: usize) -> Cell {
        debug_assert!(depth < MAX_DEPTH);
        pack(self.coords(point), shift_for(depth))
    }

    fn coords(&self, point: Point) -> [u64; 3] {
        let p = (point - self.bottom) * self.scale;
        [fix(p.x), fix(p.y), fix(p.z)]
    }
}

#[inline(always)]
fn shift_for(depth: usize) -> usize {
    2 * (MAX_DEPTH - depth)
}

// Float to int casts saturate and map NaN to 0, so only the upper end needs clamping.
#[inline(always)]
fn fix(v: f64) -> u64 {
    (v as u64).min(COORD_LIMIT)
}

#[inline(always)]
fn pack([x, y, z]: [u64; 3], shift: usize) -> Cell {
    let x = ((x >> shift) & 0b11) as u8;
    let y = ((y >> shift) & 0b11) as u8;
    let z = ((z >> shift) & 0b11) as u8;
    Cell(x | y << 2 | z << 4)
}
