//! # svgraster Core
//!
//! Core types shared by every svgraster crate.
//! Provides integer geometry, flat colors and the error taxonomy used by the
//! scene builder, the raster backend and the settings layer.

pub mod color;
pub mod error;
pub mod geometry;

pub use color::Color;
pub use error::{ColorError, DocumentError, Error, Result, SceneError};
pub use geometry::Point;
