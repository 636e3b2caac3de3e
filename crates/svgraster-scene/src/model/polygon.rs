use serde::{Deserialize, Serialize};
use svgraster_core::{Color, Point, SceneError};

use super::{points_bounds, Bounds, SceneShape, Shape};
use crate::canvas::RasterCanvas;

/// A filled closed contour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Polygon {
    pub fill: Color,
    points: Vec<Point>,
}

impl Polygon {
    /// Builds a polygon, rejecting fewer than two points.
    pub fn new(fill: Color, points: Vec<Point>) -> Result<Self, SceneError> {
        if points.len() < 2 {
            return Err(SceneError::TooFewPoints {
                element: "polygon".to_string(),
                required: 2,
                actual: points.len(),
            });
        }
        Ok(Self { fill, points })
    }

    /// Expands a rectangle into its four corners.
    ///
    /// The far edges are inclusive pixel positions, so a 10x5 rectangle at
    /// the origin spans `(0,0)..=(9,4)`.
    pub fn rect(fill: Color, x: i32, y: i32, width: i32, height: i32) -> Self {
        let right = x.saturating_add(width.saturating_sub(1));
        let bottom = y.saturating_add(height.saturating_sub(1));
        Self {
            fill,
            points: vec![
                Point::new(x, y),
                Point::new(right, y),
                Point::new(right, bottom),
                Point::new(x, bottom),
            ],
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

impl SceneShape for Polygon {
    fn draw(&self, canvas: &mut dyn RasterCanvas) {
        canvas.draw_polygon(&self.points, self.fill);
    }

    fn translate(&mut self, dx: i32, dy: i32) {
        for p in &mut self.points {
            *p = p.translate(dx, dy);
        }
    }

    fn rotate(&mut self, origin_x: i32, origin_y: i32, angle: f64) {
        let pivot = Point::new(origin_x, origin_y);
        for p in &mut self.points {
            *p = p.rotate(pivot, angle);
        }
    }

    fn scale(&mut self, origin_x: i32, origin_y: i32, factor: i32) {
        let pivot = Point::new(origin_x, origin_y);
        for p in &mut self.points {
            *p = p.scale(pivot, factor);
        }
    }

    fn duplicate(&self) -> Shape {
        Shape::Polygon(self.clone())
    }

    fn bounds(&self) -> Option<Bounds> {
        points_bounds(&self.points)
    }
}
