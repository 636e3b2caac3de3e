//! # svgraster Raster
//!
//! Pixel backend for svgraster scenes, built on `tiny-skia`.
//!
//! Scene coordinates are integer pixel indices. Every primitive is laid
//! out over pixel centers so that, with anti-aliasing off, a shape covers
//! exactly the pixels its integer geometry names:
//!
//! - ellipses fill the oval inscribed in `(cx-rx, cy-ry, 2rx+1, 2ry+1)`
//! - lines are 1px strokes with square caps, endpoints included
//! - polygons are filled with the nonzero rule and every edge is stroked
//!   like a line, so boundary pixels are covered

use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage};
use svgraster_core::{Color, Point};
use svgraster_scene::{RasterCanvas, Scene};
use thiserror::Error;
use tiny_skia::{FillRule, LineCap, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform};
use tracing::{debug, info};

/// Errors raised by the raster backend
#[derive(Error, Debug)]
pub enum RasterError {
    #[error("Cannot allocate a {width}x{height} canvas")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Options applied when rendering a whole scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub background: Color,
    pub anti_alias: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            anti_alias: false,
        }
    }
}

/// A [`RasterCanvas`] drawing into a `tiny_skia::Pixmap`.
pub struct PixmapCanvas {
    pixmap: Pixmap,
    anti_alias: bool,
}

impl PixmapCanvas {
    /// Creates a canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: Color) -> Result<Self, RasterError> {
        let mut pixmap =
            Pixmap::new(width, height).ok_or(RasterError::InvalidDimensions { width, height })?;
        pixmap.fill(skia_color(background));
        Ok(Self {
            pixmap,
            anti_alias: false,
        })
    }

    pub fn with_anti_alias(mut self, anti_alias: bool) -> Self {
        self.anti_alias = anti_alias;
        self
    }

    /// Renders every shape of `scene` onto a fresh canvas of the scene's size.
    pub fn render(scene: &Scene, options: &RenderOptions) -> Result<Self, RasterError> {
        let mut canvas = Self::new(scene.width, scene.height, options.background)?
            .with_anti_alias(options.anti_alias);
        scene.draw(&mut canvas);
        debug!(
            "Rendered {} shapes onto {}x{} canvas",
            scene.len(),
            scene.width,
            scene.height
        );
        Ok(canvas)
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Color at a pixel, `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.pixmap.pixel(x, y).map(|p| {
            let c = p.demultiply();
            Color::new(c.red(), c.green(), c.blue())
        })
    }

    pub fn to_rgba_image(&self) -> RgbaImage {
        let width = self.width();
        let data = self.pixmap.data();
        RgbaImage::from_fn(width, self.height(), |x, y| {
            let idx = ((y * width + x) * 4) as usize;
            Rgba([data[idx], data[idx + 1], data[idx + 2], data[idx + 3]])
        })
    }

    /// Writes the canvas as a PNG file.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), RasterError> {
        let path = path.as_ref();
        self.to_rgba_image()
            .save_with_format(path, ImageFormat::Png)?;
        info!(
            "Wrote {}x{} PNG to {}",
            self.width(),
            self.height(),
            path.display()
        );
        Ok(())
    }

    fn paint(&self, color: Color) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color(skia_color(color));
        paint.anti_alias = self.anti_alias;
        paint
    }

    fn fill_cells(&mut self, x: i64, y: i64, w: i64, h: i64, color: Color) {
        if let Some(rect) = Rect::from_xywh(x as f32, y as f32, w as f32, h as f32) {
            let paint = self.paint(color);
            self.pixmap.fill_rect(rect, &paint, Transform::identity(), None);
        }
    }
}

impl RasterCanvas for PixmapCanvas {
    fn draw_ellipse(&mut self, center: Point, radii: Point, color: Color) {
        let (rx, ry) = (radii.x.unsigned_abs(), radii.y.unsigned_abs());
        let x = i64::from(center.x) - i64::from(rx);
        let y = i64::from(center.y) - i64::from(ry);
        let (w, h) = (2 * i64::from(rx) + 1, 2 * i64::from(ry) + 1);
        if rx == 0 || ry == 0 {
            // Degenerate ovals collapse to a row, a column or a single pixel.
            self.fill_cells(x, y, w, h, color);
            return;
        }
        let Some(path) = Rect::from_xywh(x as f32, y as f32, w as f32, h as f32)
            .and_then(PathBuilder::from_oval)
        else {
            return;
        };
        let paint = self.paint(color);
        self.pixmap
            .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    }

    fn draw_line(&mut self, a: Point, b: Point, color: Color) {
        if a == b {
            self.fill_cells(a.x.into(), a.y.into(), 1, 1, color);
            return;
        }
        let mut pb = PathBuilder::new();
        pb.move_to(a.x as f32 + 0.5, a.y as f32 + 0.5);
        pb.line_to(b.x as f32 + 0.5, b.y as f32 + 0.5);
        if let Some(path) = pb.finish() {
            let paint = self.paint(color);
            self.pixmap
                .stroke_path(&path, &paint, &pixel_stroke(), Transform::identity(), None);
        }
    }

    fn draw_polygon(&mut self, points: &[Point], color: Color) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        if rest.iter().all(|p| p == first) {
            self.fill_cells(first.x.into(), first.y.into(), 1, 1, color);
            return;
        }

        let mut fill = PathBuilder::new();
        fill.move_to(first.x as f32 + 0.5, first.y as f32 + 0.5);
        for p in rest {
            fill.line_to(p.x as f32 + 0.5, p.y as f32 + 0.5);
        }
        fill.close();

        // Each edge is its own subpath so degenerate outlines still cover
        // their pixels under the nonzero rule.
        let mut outline = PathBuilder::new();
        for (a, b) in points.iter().zip(points.iter().cycle().skip(1)) {
            outline.move_to(a.x as f32 + 0.5, a.y as f32 + 0.5);
            outline.line_to(b.x as f32 + 0.5, b.y as f32 + 0.5);
        }

        let paint = self.paint(color);
        if let Some(path) = fill.finish() {
            self.pixmap
                .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        }
        if let Some(path) = outline.finish() {
            self.pixmap
                .stroke_path(&path, &paint, &pixel_stroke(), Transform::identity(), None);
        }
    }
}

fn pixel_stroke() -> Stroke {
    Stroke {
        width: 1.0,
        line_cap: LineCap::Square,
        ..Default::default()
    }
}

fn skia_color(color: Color) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(color.r, color.g, color.b, 255)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_size_canvas_is_rejected() {
        let err = PixmapCanvas::new(0, 10, Color::WHITE).err().unwrap();
        assert!(matches!(
            err,
            RasterError::InvalidDimensions {
                width: 0,
                height: 10
            }
        ));
    }

    #[test]
    fn test_background_fill() {
        let canvas = PixmapCanvas::new(3, 2, Color::BLUE).unwrap();
        assert_eq!(canvas.pixel(2, 1), Some(Color::BLUE));
        assert_eq!(canvas.pixel(3, 0), None);
    }

    #[test]
    fn test_zero_radius_ellipse_is_one_pixel() {
        let mut canvas = PixmapCanvas::new(5, 5, Color::WHITE).unwrap();
        canvas.draw_ellipse(Point::new(2, 2), Point::new(0, 0), Color::RED);
        assert_eq!(canvas.pixel(2, 2), Some(Color::RED));
        assert_eq!(canvas.pixel(1, 2), Some(Color::WHITE));
        assert_eq!(canvas.pixel(3, 2), Some(Color::WHITE));
    }

    #[test]
    fn test_extreme_radii_do_not_overflow() {
        let mut canvas = PixmapCanvas::new(10, 10, Color::WHITE).unwrap();
        canvas.draw_ellipse(Point::new(5, 5), Point::new(i32::MIN, 0), Color::RED);
        canvas.draw_ellipse(
            Point::new(i32::MAX, i32::MIN),
            Point::new(i32::MAX, i32::MAX),
            Color::RED,
        );
        assert!(canvas.pixel(9, 9).is_some());
    }

    #[test]
    fn test_single_point_line() {
        let mut canvas = PixmapCanvas::new(4, 4, Color::WHITE).unwrap();
        canvas.draw_line(Point::new(1, 1), Point::new(1, 1), Color::BLACK);
        assert_eq!(canvas.pixel(1, 1), Some(Color::BLACK));
        assert_eq!(canvas.pixel(2, 1), Some(Color::WHITE));
    }

    #[test]
    fn test_rgba_image_matches_pixels() {
        let mut canvas = PixmapCanvas::new(4, 3, Color::WHITE).unwrap();
        canvas.draw_line(Point::new(0, 1), Point::new(3, 1), Color::RED);
        let image = canvas.to_rgba_image();
        assert_eq!(image.dimensions(), (4, 3));
        assert_eq!(image.get_pixel(2, 1).0, [255, 0, 0, 255]);
        assert_eq!(image.get_pixel(2, 0).0, [255, 255, 255, 255]);
    }
}
