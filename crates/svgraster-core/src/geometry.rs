//! Integer geometry primitives
//!
//! All scene coordinates are absolute integer pixel positions with y growing
//! downwards, so a positive rotation angle turns clockwise on screen.
//! Arithmetic saturates at the `i32` range instead of overflowing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// A 2D point in integer raster coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Creates a new point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns this point shifted by `(dx, dy)`.
    pub fn translate(self, dx: i32, dy: i32) -> Point {
        Point::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    /// Rotates this point about `pivot` by `angle_deg` degrees.
    ///
    /// The result is rounded to the nearest integer coordinate, which makes
    /// multiples of 90 degrees exact.
    pub fn rotate(self, pivot: Point, angle_deg: f64) -> Point {
        let angle_rad = angle_deg.to_radians();
        let s = angle_rad.sin();
        let c = angle_rad.cos();
        let dx = f64::from(self.x) - f64::from(pivot.x);
        let dy = f64::from(self.y) - f64::from(pivot.y);
        Point {
            x: to_coord(f64::from(pivot.x) + (dx * c - dy * s).round()),
            y: to_coord(f64::from(pivot.y) + (dx * s + dy * c).round()),
        }
    }

    /// Scales the distance from `pivot` by `factor`.
    ///
    /// Negative factors mirror through the pivot, zero collapses onto it.
    pub fn scale(self, pivot: Point, factor: i32) -> Point {
        let scale_axis = |v: i32, p: i32| {
            to_coord(f64::from(p) + (f64::from(v) - f64::from(p)) * f64::from(factor))
        };
        Point::new(scale_axis(self.x, pivot.x), scale_axis(self.y, pivot.y))
    }
}

/// Float to coordinate; `as` saturates at the `i32` bounds.
fn to_coord(v: f64) -> i32 {
    v as i32
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

impl std::ops::Mul<i32> for Point {
    type Output = Point;

    fn mul(self, factor: i32) -> Point {
        Point::new(self.x.saturating_mul(factor), self.y.saturating_mul(factor))
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_quarter_turn_is_clockwise_on_screen() {
        let p = Point::new(10, 0);
        assert_eq!(p.rotate(Point::new(0, 0), 90.0), Point::new(0, 10));
        assert_eq!(p.rotate(Point::new(0, 0), -90.0), Point::new(0, -10));
        assert_eq!(p.rotate(Point::new(0, 0), 180.0), Point::new(-10, 0));
    }

    #[test]
    fn test_rotate_about_pivot() {
        let p = Point::new(15, 10);
        assert_eq!(p.rotate(Point::new(10, 10), 90.0), Point::new(10, 15));
        assert_eq!(p.rotate(Point::new(10, 10), 270.0), Point::new(10, 5));
    }

    #[test]
    fn test_rotate_rounds_to_nearest() {
        // 10 * cos(45) = 7.07..
        let p = Point::new(10, 0).rotate(Point::new(0, 0), 45.0);
        assert_eq!(p, Point::new(7, 7));
    }

    #[test]
    fn test_scale_about_pivot() {
        let p = Point::new(4, 6);
        assert_eq!(p.scale(Point::new(2, 2), 3), Point::new(8, 14));
        assert_eq!(p.scale(Point::new(2, 2), -1), Point::new(0, -2));
        assert_eq!(p.scale(Point::new(2, 2), 0), Point::new(2, 2));
    }

    #[test]
    fn test_arithmetic_saturates() {
        let far = Point::new(2_000_000_000, -2_000_000_000);
        assert_eq!(far.translate(2_000_000_000, -2_000_000_000), Point::new(i32::MAX, i32::MIN));
        assert_eq!(far.scale(Point::new(0, 0), 3), Point::new(i32::MAX, i32::MIN));
        assert_eq!(
            far.rotate(Point::new(-2_000_000_000, 0), 0.0),
            Point::new(2_000_000_000, -2_000_000_000)
        );
        assert_eq!(far * 2, Point::new(i32::MAX, i32::MIN));
        assert_eq!(far + far, Point::new(i32::MAX, i32::MIN));
        assert_eq!(far - Point::new(-2_000_000_000, 0), Point::new(i32::MAX, -2_000_000_000));
    }

    #[test]
    fn test_display() {
        assert_eq!(Point::new(-3, 7).to_string(), "(-3, 7)");
    }
}
