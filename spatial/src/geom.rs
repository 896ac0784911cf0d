use bits::Cell;

use std::fmt;
use std::ops::{Add, Mul, Sub};

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    pub const ORIGIN: Point = Point::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Point { x, y, z }
    }

    #[inline]
    pub fn squared_dist(self, other: Point) -> f64 {
        let d = other - self;
        d.x * d.x + d.y * d.y + d.z * d.z
    }
}

impl Add for Point {
    type Output = Point;

    #[inline(always)]
    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Point {
    type Output = Point;

    #[inline(always)]
    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Add<f64> for Point {
    type Output = Point;

    #[inline(always)]
    fn add(self, d: f64) -> Point {
        Point::new(self.x + d, self.y + d, self.z + d)
    }
}

impl Sub<f64> for Point {
    type Output = Point;

    #[inline(always)]
    fn sub(self, d: f64) -> Point {
        Point::new(self.x - d, self.y - d, self.z - d)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    #[inline(always)]
    fn mul(self, s: f64) -> Point {
        Point::new(self.x * s, self.y * s, self.z * s)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3e}, {:.3e}, {:.3e})", self.x, self.y, self.z)
    }
}

/// An axis-aligned cube.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BBox {
    pub center: Point,
    pub halfsize: f64,
}

impl BBox {
    pub fn new(center: Point, halfsize: f64) -> Self {
        BBox { center, halfsize }
    }

    /// Creates the cube spanning two opposite corners. The halfsize is taken from the x extent.
    pub fn from_corners(top: Point, bottom: Point) -> Self {
        BBox {
            center: (top + bottom) * 0.5,
            halfsize: (top.x - bottom.x).abs() * 0.5,
        }
    }

    #[inline]
    pub fn top(&self) -> Point {
        self.center + self.halfsize
    }

    #[inline]
    pub fn bottom(&self) -> Point {
        self.center - self.halfsize
    }

    /// Returns true iff `point` lies strictly inside the cube.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        (point.x - self.center.x).abs() < self.halfsize
            && (point.y - self.center.y).abs() < self.halfsize
            && (point.z - self.center.z).abs() < self.halfsize
    }

    #[inline]
    pub fn intersects(&self, other: &BBox) -> bool {
        let reach = self.halfsize + other.halfsize;
        (other.center.x - self.center.x).abs() < reach
            && (other.center.y - self.center.y).abs() < reach
            && (other.center.z - self.center.z).abs() < reach
    }

    /// Returns the sub-cube, a quarter of the size along each axis, selected by `cell`.
    pub fn child(&self, cell: Cell) -> BBox {
        let quartersize = self.halfsize * 0.5;
        let offset = self.halfsize * 0.75;
        let c = self.center;
        BBox::new(
            Point::new(
                c.x + cell.x() as f64 * quartersize - offset,
                c.y + cell.y() as f64 * quartersize - offset,
                c.z + cell.z() as f64 * quartersize - offset,
            ),
            self.halfsize * 0.25,
        )
    }

    /// Returns the cell whose sub-cube holds `point`. Points outside the cube are clamped to the
    /// nearest boundary cell.
    pub fn cell_of(&self, point: Point) -> Cell {
        let quartersize = self.halfsize * 0.5;
        let bottom = self.bottom();
        let quarter = |p: f64, b: f64| ((p - b) / quartersize).floor().clamp(0.0, 3.0) as u8;
        Cell::from_xyz(
            quarter(point.x, bottom.x),
            quarter(point.y, bottom.y),
            quarter(point.z, bottom.z),
        )
    }

    /// Returns the squared distance from `point` to the closest point of the cube, or 0 if the
    /// point is inside.
    pub fn squared_dist(&self, point: Point) -> f64 {
        let gap = |p: f64, c: f64| ((p - c).abs() - self.halfsize).max(0.0);
        let x = gap(point.x, self.center.x);
        let y = gap(point.y, self.center.y);
        let z = gap(point.z, self.center.z);
        x * x + y * y + z * z
    }
}

impl fmt::Display for BBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BBox(top: {}, bottom: {})", self.top(), self.bottom())
    }
}

const MANTISSA: u64 = (1 << 52) - 1;

/// Rounds a positive, normal `n` up to the nearest power of two.
pub fn round_up_pow2(n: f64) -> f64 {
    let bits = n.to_bits();
    if bits & MANTISSA == 0 {
        n
    } else {
        f64::from_bits((bits & !MANTISSA) + (1 << 52))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners() {
        let b = BBox::from_corners(Point::new(4.0, 4.0, 4.0), Point::new(-2.0, -2.0, -2.0));
        assert_eq!(b.center, Point::new(1.0, 1.0, 1.0));
        assert_eq!(b.halfsize, 3.0);
        assert_eq!(b.top(), Point::new(4.0, 4.0, 4.0));
        assert_eq!(b.bottom(), Point::new(-2.0, -2.0, -2.0));
    }

    #[test]
    fn contains_is_strict() {
        let b = BBox::new(Point::ORIGIN, 1.0);
        assert!(b.contains(Point::new(0.5, -0.5, 0.99)));
        assert!(!b.contains(Point::new(1.0, 0.0, 0.0)));
        assert!(!b.contains(Point::new(0.0, 0.0, -1.5)));
    }

    #[test]
    fn intersects() {
        let a = BBox::new(Point::ORIGIN, 1.0);
        assert!(a.intersects(&BBox::new(Point::new(1.5, 0.0, 0.0), 1.0)));
        assert!(!a.intersects(&BBox::new(Point::new(2.0, 0.0, 0.0), 1.0)));
        assert!(!a.intersects(&BBox::new(Point::new(0.0, 0.0, 5.0), 1.0)));
    }

    #[test]
    fn children_tile_the_parent() {
        let parent = BBox::new(Point::new(8.0, -8.0, 0.0), 16.0);
        for i in 0..64u8 {
            let cell = Cell(i);
            let child = parent.child(cell);
            assert_eq!(child.halfsize, 4.0);
            assert!(parent.contains(child.center));
            assert_eq!(parent.cell_of(child.center), cell);
        }
        assert_eq!(parent.child(Cell(0)).bottom(), parent.bottom());
        assert_eq!(parent.child(Cell(63)).top(), parent.top());
    }

    #[test]
    fn cell_of_clamps_outside_points() {
        let b = BBox::new(Point::ORIGIN, 1.0);
        assert_eq!(b.cell_of(Point::new(-9.0, -9.0, -9.0)), Cell(0));
        assert_eq!(b.cell_of(Point::new(9.0, 9.0, 9.0)), Cell(63));
    }

    #[test]
    fn squared_dist_to_box() {
        let b = BBox::new(Point::ORIGIN, 1.0);
        assert_eq!(b.squared_dist(Point::new(0.5, 0.5, 0.5)), 0.0);
        assert_eq!(b.squared_dist(Point::new(3.0, 0.0, 0.0)), 4.0);
        assert_eq!(b.squared_dist(Point::new(2.0, -2.0, 0.0)), 2.0);
    }

    #[test]
    fn point_ops() {
        let p = Point::new(1.0, 2.0, 3.0);
        assert_eq!(p + Point::new(1.0, 1.0, 1.0), Point::new(2.0, 3.0, 4.0));
        assert_eq!(p - 1.0, Point::new(0.0, 1.0, 2.0));
        assert_eq!(p * 2.0, Point::new(2.0, 4.0, 6.0));
        assert_eq!(p.squared_dist(Point::ORIGIN), 14.0);
    }

    #[test]
    fn pow2() {
        assert_eq!(round_up_pow2(4.0), 4.0);
        assert_eq!(round_up_pow2(3.0), 4.0);
        assert_eq!(round_up_pow2(4.5), 8.0);
        assert_eq!(round_up_pow2(0.3), 0.5);
        assert_eq!(round_up_pow2(1.0e9), 1073741824.0);
    }
}
