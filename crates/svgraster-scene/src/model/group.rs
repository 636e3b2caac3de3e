use serde::{Deserialize, Serialize};

use super::{merge_bounds, Bounds, SceneShape, Shape};
use crate::canvas::RasterCanvas;

/// An ordered set of owned shapes with no geometry of its own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Group {
    children: Vec<Shape>,
}

impl Group {
    pub fn new(children: Vec<Shape>) -> Self {
        Self { children }
    }

    pub fn children(&self) -> &[Shape] {
        &self.children
    }
}

impl SceneShape for Group {
    fn draw(&self, canvas: &mut dyn RasterCanvas) {
        for child in &self.children {
            child.draw(canvas);
        }
    }

    fn translate(&mut self, dx: i32, dy: i32) {
        for child in &mut self.children {
            child.translate(dx, dy);
        }
    }

    fn rotate(&mut self, origin_x: i32, origin_y: i32, angle: f64) {
        for child in &mut self.children {
            child.rotate(origin_x, origin_y, angle);
        }
    }

    fn scale(&mut self, origin_x: i32, origin_y: i32, factor: i32) {
        for child in &mut self.children {
            child.scale(origin_x, origin_y, factor);
        }
    }

    fn duplicate(&self) -> Shape {
        Shape::Group(Group::new(
            self.children.iter().map(|child| child.duplicate()).collect(),
        ))
    }

    fn bounds(&self) -> Option<Bounds> {
        self.children
            .iter()
            .fold(None, |acc, child| merge_bounds(acc, child.bounds()))
    }
}
