use serde::{Deserialize, Serialize};

use crate::canvas::RasterCanvas;

mod ellipse;
mod group;
mod polygon;
mod polyline;

pub use ellipse::Ellipse;
pub use group::Group;
pub use polygon::Polygon;
pub use polyline::Polyline;

/// Axis-aligned bounds as `(min_x, min_y, max_x, max_y)`.
pub type Bounds = (i32, i32, i32, i32);

/// Operations every scene node supports.
///
/// Transforms rewrite the node's own coordinates in place. Rotation and
/// scaling always happen about an external pivot, so applying the same call
/// to every member of a group moves the group as one rigid assembly.
pub trait SceneShape {
    /// Emits the node's primitives. Never mutates the node.
    fn draw(&self, canvas: &mut dyn RasterCanvas);

    fn translate(&mut self, dx: i32, dy: i32);

    fn rotate(&mut self, origin_x: i32, origin_y: i32, angle: f64);

    fn scale(&mut self, origin_x: i32, origin_y: i32, factor: i32);

    /// Returns an independent copy. Groups copy their whole subtree.
    fn duplicate(&self) -> Shape;

    /// Bounds over every coordinate, `None` for an empty group.
    fn bounds(&self) -> Option<Bounds>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeType {
    Ellipse,
    Polyline,
    Polygon,
    Group,
}

/// A node of the scene graph.
///
/// Circles, lines and rectangles are built through [`Ellipse::circle`],
/// [`Polyline::line`] and [`Polygon::rect`] and have no variant of their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Ellipse(Ellipse),
    Polyline(Polyline),
    Polygon(Polygon),
    Group(Group),
}

impl SceneShape for Shape {
    fn draw(&self, canvas: &mut dyn RasterCanvas) {
        match self {
            Shape::Ellipse(s) => s.draw(canvas),
            Shape::Polyline(s) => s.draw(canvas),
            Shape::Polygon(s) => s.draw(canvas),
            Shape::Group(s) => s.draw(canvas),
        }
    }

    fn translate(&mut self, dx: i32, dy: i32) {
        match self {
            Shape::Ellipse(s) => s.translate(dx, dy),
            Shape::Polyline(s) => s.translate(dx, dy),
            Shape::Polygon(s) => s.translate(dx, dy),
            Shape::Group(s) => s.translate(dx, dy),
        }
    }

    fn rotate(&mut self, origin_x: i32, origin_y: i32, angle: f64) {
        match self {
            Shape::Ellipse(s) => s.rotate(origin_x, origin_y, angle),
            Shape::Polyline(s) => s.rotate(origin_x, origin_y, angle),
            Shape::Polygon(s) => s.rotate(origin_x, origin_y, angle),
            Shape::Group(s) => s.rotate(origin_x, origin_y, angle),
        }
    }

    fn scale(&mut self, origin_x: i32, origin_y: i32, factor: i32) {
        match self {
            Shape::Ellipse(s) => s.scale(origin_x, origin_y, factor),
            Shape::Polyline(s) => s.scale(origin_x, origin_y, factor),
            Shape::Polygon(s) => s.scale(origin_x, origin_y, factor),
            Shape::Group(s) => s.scale(origin_x, origin_y, factor),
        }
    }

    fn duplicate(&self) -> Shape {
        match self {
            Shape::Ellipse(s) => s.duplicate(),
            Shape::Polyline(s) => s.duplicate(),
            Shape::Polygon(s) => s.duplicate(),
            Shape::Group(s) => s.duplicate(),
        }
    }

    fn bounds(&self) -> Option<Bounds> {
        match self {
            Shape::Ellipse(s) => s.bounds(),
            Shape::Polyline(s) => s.bounds(),
            Shape::Polygon(s) => s.bounds(),
            Shape::Group(s) => s.bounds(),
        }
    }
}

impl Shape {
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Ellipse(_) => ShapeType::Ellipse,
            Shape::Polyline(_) => ShapeType::Polyline,
            Shape::Polygon(_) => ShapeType::Polygon,
            Shape::Group(_) => ShapeType::Group,
        }
    }

    /// Children of a group, empty for leaf shapes.
    pub fn children(&self) -> &[Shape] {
        match self {
            Shape::Group(g) => g.children(),
            _ => &[],
        }
    }
}

impl From<Ellipse> for Shape {
    fn from(s: Ellipse) -> Self {
        Shape::Ellipse(s)
    }
}

impl From<Polyline> for Shape {
    fn from(s: Polyline) -> Self {
        Shape::Polyline(s)
    }
}

impl From<Polygon> for Shape {
    fn from(s: Polygon) -> Self {
        Shape::Polygon(s)
    }
}

impl From<Group> for Shape {
    fn from(s: Group) -> Self {
        Shape::Group(s)
    }
}

/// Smallest bounds covering every point, `None` when `points` is empty.
pub(crate) fn points_bounds(points: &[svgraster_core::Point]) -> Option<Bounds> {
    let first = points.first()?;
    Some(points.iter().fold(
        (first.x, first.y, first.x, first.y),
        |(min_x, min_y, max_x, max_y), p| {
            (min_x.min(p.x), min_y.min(p.y), max_x.max(p.x), max_y.max(p.y))
        },
    ))
}

/// Union of two optional bounds.
pub(crate) fn merge_bounds(a: Option<Bounds>, b: Option<Bounds>) -> Option<Bounds> {
    match (a, b) {
        (Some(a), Some(b)) => Some((a.0.min(b.0), a.1.min(b.1), a.2.max(b.2), a.3.max(b.3))),
        (a, None) => a,
        (None, b) => b,
    }
}
