//! # svgraster Scene
//!
//! Scene graph and transform engine for svgraster.
//!
//! ## Core Components
//!
//! - **Model**: ellipse, polyline, polygon and group nodes behind the
//!   [`SceneShape`] trait. Circles, lines and rectangles are constructors
//!   that normalize into those four.
//! - **Transforms**: `translate`/`rotate`/`scale` about an external pivot,
//!   distributed over group children.
//! - **Builder**: turns element descriptions into shapes, applying each
//!   element's transform once and registering ids for later `use`.
//! - **Registry**: resolves `use` references into deep duplicates.
//! - **Import**: reads SVG text with `roxmltree`.
//!
//! ## Architecture
//!
//! ```text
//! SVG text ──► import (Element tree)
//!                └── builder ──► Scene { width, height, shapes }
//!                      └── registry (id ──► live node)
//!
//! Scene ──► RasterCanvas (draw_ellipse / draw_line / draw_polygon)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use svgraster_scene::{RecordingCanvas, SvgImporter};
//!
//! let svg = r##"<svg width="20" height="20">
//!     <circle id="c" cx="0" cy="0" r="5" fill="red" transform="translate(10,0)"/>
//!     <use href="#c" transform="translate(0,10)"/>
//! </svg>"##;
//! let imported = SvgImporter::new().import_string(svg).unwrap();
//!
//! let mut canvas = RecordingCanvas::new();
//! imported.scene.draw(&mut canvas);
//! assert_eq!(canvas.commands().len(), 2);
//! ```

pub mod builder;
pub mod canvas;
pub mod document;
pub mod import;
pub mod model;
pub mod points;
pub mod registry;
pub mod scene;
pub mod transform;

pub use builder::{ImportedScene, SceneBuilder};
pub use canvas::{DrawCommand, RasterCanvas, RecordingCanvas};
pub use document::Element;
pub use import::{parse_document, SvgImporter};
pub use model::{Bounds, Ellipse, Group, Polygon, Polyline, SceneShape, Shape, ShapeType};
pub use points::parse_points;
pub use registry::{IdRegistry, Registration};
pub use scene::Scene;
pub use transform::{parse_origin, Transform};
