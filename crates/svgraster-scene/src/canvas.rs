//! Raster canvas capability set
//!
//! Shapes never touch pixels themselves. They describe their geometry through
//! the three primitives below, and any backend that implements
//! [`RasterCanvas`] can render a scene.

use serde::{Deserialize, Serialize};
use svgraster_core::{Color, Point};

/// The drawing primitives a scene needs from a raster backend.
pub trait RasterCanvas {
    /// Fills an axis-aligned ellipse. `radii` holds the x and y radius.
    fn draw_ellipse(&mut self, center: Point, radii: Point, color: Color);

    /// Draws a one pixel wide segment from `a` to `b`.
    fn draw_line(&mut self, a: Point, b: Point, color: Color);

    /// Fills the closed contour through `points`.
    fn draw_polygon(&mut self, points: &[Point], color: Color);
}

/// One primitive call captured by [`RecordingCanvas`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawCommand {
    Ellipse {
        center: Point,
        radii: Point,
        color: Color,
    },
    Line {
        a: Point,
        b: Point,
        color: Color,
    },
    Polygon {
        points: Vec<Point>,
        color: Color,
    },
}

/// Canvas that records primitive calls instead of rasterizing them.
///
/// Used to compare what two scenes would draw without a pixel backend.
#[derive(Debug, Default, Clone)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded calls, in draw order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }
}

impl RasterCanvas for RecordingCanvas {
    fn draw_ellipse(&mut self, center: Point, radii: Point, color: Color) {
        self.commands.push(DrawCommand::Ellipse {
            center,
            radii,
            color,
        });
    }

    fn draw_line(&mut self, a: Point, b: Point, color: Color) {
        self.commands.push(DrawCommand::Line { a, b, color });
    }

    fn draw_polygon(&mut self, points: &[Point], color: Color) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            color,
        });
    }
}
