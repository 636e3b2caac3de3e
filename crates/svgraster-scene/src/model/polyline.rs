use serde::{Deserialize, Serialize};
use svgraster_core::{Color, Point, SceneError};

use super::{points_bounds, Bounds, SceneShape, Shape};
use crate::canvas::RasterCanvas;

/// An open chain of stroked segments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Polyline {
    pub stroke: Color,
    points: Vec<Point>,
}

impl Polyline {
    /// Builds a polyline, rejecting fewer than two points.
    pub fn new(stroke: Color, points: Vec<Point>) -> Result<Self, SceneError> {
        if points.len() < 2 {
            return Err(SceneError::TooFewPoints {
                element: "polyline".to_string(),
                required: 2,
                actual: points.len(),
            });
        }
        Ok(Self { stroke, points })
    }

    /// A single segment from `a` to `b`.
    pub fn line(stroke: Color, a: Point, b: Point) -> Self {
        Self {
            stroke,
            points: vec![a, b],
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

impl SceneShape for Polyline {
    fn draw(&self, canvas: &mut dyn RasterCanvas) {
        for segment in self.points.windows(2) {
            canvas.draw_line(segment[0], segment[1], self.stroke);
        }
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
        Shape::Polyline(self.clone())
    }

    fn bounds(&self) -> Option<Bounds> {
        points_bounds(&self.points)
    }
}
