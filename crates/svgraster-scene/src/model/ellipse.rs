use serde::{Deserialize, Serialize};
use svgraster_core::{Color, Point};

use super::{Bounds, SceneShape, Shape};
use crate::canvas::RasterCanvas;

/// A filled, axis-aligned ellipse.
///
/// Radii are plain magnitudes: scaling multiplies them by the factor, while
/// rotation only moves the center. A non-right-angle rotation therefore keeps
/// the axes aligned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ellipse {
    pub fill: Color,
    pub center: Point,
    pub radius_x: i32,
    pub radius_y: i32,
}

impl Ellipse {
    pub fn new(fill: Color, center: Point, radius_x: i32, radius_y: i32) -> Self {
        Self {
            fill,
            center,
            radius_x,
            radius_y,
        }
    }

    /// An ellipse with equal radii.
    pub fn circle(fill: Color, center: Point, radius: i32) -> Self {
        Self::new(fill, center, radius, radius)
    }

    /// Radii as drawn, always non-negative.
    pub fn radii(&self) -> Point {
        Point::new(self.radius_x.saturating_abs(), self.radius_y.saturating_abs())
    }
}

impl SceneShape for Ellipse {
    fn draw(&self, canvas: &mut dyn RasterCanvas) {
        canvas.draw_ellipse(self.center, self.radii(), self.fill);
    }

    fn translate(&mut self, dx: i32, dy: i32) {
        self.center = self.center.translate(dx, dy);
    }

    fn rotate(&mut self, origin_x: i32, origin_y: i32, angle: f64) {
        self.center = self.center.rotate(Point::new(origin_x, origin_y), angle);
    }

    fn scale(&mut self, origin_x: i32, origin_y: i32, factor: i32) {
        self.center = self.center.scale(Point::new(origin_x, origin_y), factor);
        self.radius_x = self.radius_x.saturating_mul(factor);
        self.radius_y = self.radius_y.saturating_mul(factor);
    }

    fn duplicate(&self) -> Shape {
        Shape::Ellipse(self.clone())
    }

    fn bounds(&self) -> Option<Bounds> {
        let r = self.radii();
        Some((
            self.center.x.saturating_sub(r.x),
            self.center.y.saturating_sub(r.y),
            self.center.x.saturating_add(r.x),
            self.center.y.saturating_add(r.y),
        ))
    }
}
