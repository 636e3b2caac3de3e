//! Scene builder
//!
//! Walks an [`Element`] tree in document order and turns it into shapes:
//!
//! ```text
//! element ──► construct (groups: children first) ──► transform ──► register id ──► output
//! ```
//!
//! Every id is registered as soon as its element is complete, so a `use`
//! can reference any earlier element, including earlier siblings and
//! elements inside already-closed groups. A registered node keeps tracking
//! the transforms of the groups that enclose it, and a redefined id refers
//! to its latest node. Forward references do not resolve. Elements that fail to build are logged, recorded as
//! diagnostics and skipped; their siblings are unaffected.

use svgraster_core::{DocumentError, Point, SceneError};
use tracing::{debug, info, warn};

use crate::document::{parse_int, Element};
use crate::model::{Ellipse, Group, Polygon, Polyline, Shape};
use crate::points::parse_points;
use crate::registry::{IdRegistry, Registration};
use crate::scene::Scene;
use crate::transform::{parse_origin, Transform};

/// Result of building a document: the scene plus every recoverable problem
/// encountered on the way.
#[derive(Debug, Clone)]
pub struct ImportedScene {
    pub scene: Scene,
    pub diagnostics: Vec<SceneError>,
}

/// One build session. Owns the id registry for the duration of a parse.
#[derive(Debug, Default)]
pub struct SceneBuilder {
    registry: IdRegistry,
    /// Every id registered so far, in document order
    registered: Vec<Registration>,
    diagnostics: Vec<SceneError>,
}

impl SceneBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a whole document from its root element.
    ///
    /// The root must be `<svg>` with positive `width` and `height` (or a
    /// `viewBox` supplying them).
    pub fn build_document(mut self, root: &Element) -> Result<ImportedScene, DocumentError> {
        if root.tag != "svg" {
            return Err(DocumentError::UnexpectedRoot {
                found: root.tag.clone(),
            });
        }
        let width = canvas_dimension(root, "width", 2)?;
        let height = canvas_dimension(root, "height", 3)?;

        let shapes = self.build_children(&root.children);
        info!(
            "Built scene {}x{} with {} top-level shapes ({} skipped elements)",
            width,
            height,
            shapes.len(),
            self.diagnostics.len()
        );

        Ok(ImportedScene {
            scene: Scene::new(width, height, shapes),
            diagnostics: self.diagnostics,
        })
    }

    /// Builds a sequence of sibling elements, skipping the ones that fail.
    pub fn build_children(&mut self, elements: &[Element]) -> Vec<Shape> {
        let mut shapes = Vec::with_capacity(elements.len());
        for element in elements {
            match self.build_element(element) {
                Ok(Some(shape)) => shapes.push(shape),
                Ok(None) => {}
                Err(e) => {
                    warn!("Skipping element: {}", e);
                    self.diagnostics.push(e);
                }
            }
        }
        shapes
    }

    /// Builds one element, applies its transform and registers its id.
    ///
    /// Returns `Ok(None)` for elements that produce no shape.
    pub fn build_element(&mut self, element: &Element) -> Result<Option<Shape>, SceneError> {
        if element.tag == "defs" {
            // Definitions register ids but are never drawn.
            self.build_children(&element.children);
            return Ok(None);
        }

        let mark = self.registered.len();
        let Some(mut shape) = self.construct(element)? else {
            debug!("Ignoring unsupported element <{}>", element.tag);
            return Ok(None);
        };

        if let Some(raw) = element.attribute("transform") {
            match Transform::parse(raw) {
                Some(transform) => {
                    let origin = element
                        .attribute("transform-origin")
                        .map(parse_origin)
                        .unwrap_or_default();
                    debug!("Applying {:?} about {} to <{}>", transform, origin, element.tag);
                    transform.apply(&mut shape, origin);
                    // Ids registered inside this node move with it.
                    self.registry
                        .update(&self.registered[mark..], |entry| transform.apply(entry, origin));
                }
                None => warn!(
                    "Ignoring unsupported transform {:?} on <{}>",
                    raw, element.tag
                ),
            }
        }

        if let Some(id) = element.attribute("id") {
            let registration = self.registry.register(id, &shape);
            self.registered.push(registration);
        }

        Ok(Some(shape))
    }

    fn construct(&mut self, el: &Element) -> Result<Option<Shape>, SceneError> {
        let shape: Shape = match el.tag.as_str() {
            "ellipse" => Ellipse::new(
                el.color_attribute("fill")?,
                center(el)?,
                el.non_negative_attribute("rx")?,
                el.non_negative_attribute("ry")?,
            )
            .into(),
            "circle" => Ellipse::circle(
                el.color_attribute("fill")?,
                center(el)?,
                el.non_negative_attribute("r")?,
            )
            .into(),
            "polyline" => {
                let points = parse_points(&el.tag, required(el, "points")?)?;
                Polyline::new(el.color_attribute("stroke")?, points)?.into()
            }
            "line" => Polyline::line(
                el.color_attribute("stroke")?,
                Point::new(el.int_attribute_or("x1", 0)?, el.int_attribute_or("y1", 0)?),
                Point::new(el.int_attribute_or("x2", 0)?, el.int_attribute_or("y2", 0)?),
            )
            .into(),
            "polygon" => {
                let points = parse_points(&el.tag, required(el, "points")?)?;
                Polygon::new(el.color_attribute("fill")?, points)?.into()
            }
            "rect" => Polygon::rect(
                el.color_attribute("fill")?,
                el.int_attribute_or("x", 0)?,
                el.int_attribute_or("y", 0)?,
                el.positive_attribute("width")?,
                el.positive_attribute("height")?,
            )
            .into(),
            "g" => Group::new(self.build_children(&el.children)).into(),
            "use" => self.registry.resolve(required(el, "href")?)?,
            _ => return Ok(None),
        };
        Ok(Some(shape))
    }
}

fn required<'a>(el: &'a Element, name: &str) -> Result<&'a str, SceneError> {
    el.attribute(name).ok_or_else(|| SceneError::MissingAttribute {
        element: el.tag.clone(),
        attribute: name.to_string(),
    })
}

fn center(el: &Element) -> Result<Point, SceneError> {
    Ok(Point::new(
        el.int_attribute_or("cx", 0)?,
        el.int_attribute_or("cy", 0)?,
    ))
}

/// Reads a root dimension, falling back to the matching `viewBox` entry.
fn canvas_dimension(root: &Element, name: &str, view_box_index: usize) -> Result<u32, DocumentError> {
    let invalid = |reason: String| DocumentError::InvalidDimensions {
        attribute: name.to_string(),
        reason,
    };

    let raw = match root.attribute(name) {
        Some(raw) => raw.to_string(),
        None => root
            .attribute("viewBox")
            .and_then(|vb| {
                vb.split(|c: char| c == ',' || c.is_whitespace())
                    .filter(|token| !token.is_empty())
                    .nth(view_box_index)
                    .map(str::to_string)
            })
            .ok_or_else(|| invalid("attribute is missing".to_string()))?,
    };

    let value = parse_int(&raw).ok_or_else(|| invalid(format!("{:?} is not a number", raw)))?;
    u32::try_from(value)
        .ok()
        .filter(|v| *v > 0)
        .ok_or_else(|| invalid(format!("{} is not positive", value)))
}
