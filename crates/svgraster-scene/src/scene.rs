use serde::{Deserialize, Serialize};

use crate::canvas::RasterCanvas;
use crate::model::{merge_bounds, Bounds, SceneShape, Shape};

/// A finished scene: canvas size plus top-level shapes in draw order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub shapes: Vec<Shape>,
}

impl Scene {
    pub fn new(width: u32, height: u32, shapes: Vec<Shape>) -> Self {
        Self {
            width,
            height,
            shapes,
        }
    }

    /// Draws every top-level shape in order.
    pub fn draw(&self, canvas: &mut dyn RasterCanvas) {
        for shape in &self.shapes {
            shape.draw(canvas);
        }
    }

    /// Enlarges the scene by an integer factor about the top-left corner.
    pub fn upscale(&mut self, factor: u32) {
        if factor == 1 {
            return;
        }
        let factor_i = i32::try_from(factor).unwrap_or(i32::MAX);
        for shape in &mut self.shapes {
            shape.scale(0, 0, factor_i);
        }
        self.width = self.width.saturating_mul(factor);
        self.height = self.height.saturating_mul(factor);
    }

    /// Bounds over every shape, `None` for an empty scene.
    pub fn bounds(&self) -> Option<Bounds> {
        self.shapes
            .iter()
            .fold(None, |acc, shape| merge_bounds(acc, shape.bounds()))
    }

    /// Serializes the scene as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
