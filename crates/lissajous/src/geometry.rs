//! Point types and bounds for sampled figures.
//!
//! ## Rust Lesson #3: Structs & Derives
//!
//! `#[derive(...)]` generates the boilerplate:
//! - `Debug` = printable with `{:?}`
//! - `Clone`/`Copy` = small stack values copied implicitly
//! - `PartialEq` = comparable with `==`
//! - `Serialize` = writable as JSON via serde

use serde::Serialize;

/// A 2D point with x,y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A 3D point, produced when a figure is generated in 3d mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Axis-aligned bounds of a planar point set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Point3 {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl Bounds {
    /// Bounds of paired coordinate slices, or `None` if either is empty.
    pub fn of(xs: &[f64], ys: &[f64]) -> Option<Self> {
        if xs.is_empty() || ys.is_empty() {
            return None;
        }

        let min_x = xs.iter().copied().fold(f64::INFINITY, f64::min);
        let max_x = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min_y = ys.iter().copied().fold(f64::INFINITY, f64::min);
        let max_y = ys.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Some(Self { min_x, min_y, max_x, max_y })
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Center of the box.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_of_coordinates() {
        let xs = [0.0, 10.0, 4.0];
        let ys = [-1.0, 5.0, 2.0];
        let b = Bounds::of(&xs, &ys).unwrap();
        assert_eq!((b.min_x, b.min_y, b.max_x, b.max_y), (0.0, -1.0, 10.0, 5.0));
        assert_eq!(b.width(), 10.0);
        assert_eq!(b.height(), 6.0);
        assert_eq!(b.center(), Point::new(5.0, 2.0));
    }

    #[test]
    fn empty_bounds() {
        assert_eq!(Bounds::of(&[], &[]), None);
    }
}
