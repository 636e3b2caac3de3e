//! # SVG Import
//!
//! Reads SVG source into [`Element`] trees and hands them to the
//! [`SceneBuilder`].
//!
//! Supports:
//! - `ellipse`, `circle`, `polyline`, `line`, `polygon`, `rect`
//! - `g` groups and `defs`
//! - `use` references (`href` or `xlink:href`)
//! - one `translate`/`rotate`/`scale` transform per element
//!
//! Attributes are keyed by local name, so namespaced attributes such as
//! `xlink:href` are seen as `href`. Text and comments are dropped.

use std::path::Path;

use svgraster_core::{DocumentError, Result};
use tracing::{debug, info};

use crate::builder::{ImportedScene, SceneBuilder};
use crate::document::Element;

/// SVG importer producing scenes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SvgImporter;

impl SvgImporter {
    pub fn new() -> Self {
        Self
    }

    /// Import SVG from string content
    pub fn import_string(&self, svg_content: &str) -> Result<ImportedScene> {
        let root = parse_document(svg_content)?;
        let imported = SceneBuilder::new().build_document(&root)?;
        Ok(imported)
    }

    /// Import SVG from a file
    pub fn import_file(&self, path: impl AsRef<Path>) -> Result<ImportedScene> {
        let path = path.as_ref();
        info!("Importing {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|source| DocumentError::Unreadable {
            path: path.display().to_string(),
            source,
        })?;
        self.import_string(&content)
    }
}

/// Parses XML text into an owned element tree rooted at the document element.
pub fn parse_document(content: &str) -> std::result::Result<Element, DocumentError> {
    let doc = roxmltree::Document::parse(content).map_err(|e| DocumentError::Malformed {
        reason: e.to_string(),
    })?;
    let root = to_element(doc.root_element());
    debug!("Parsed document with root <{}>", root.tag);
    Ok(root)
}

fn to_element(node: roxmltree::Node<'_, '_>) -> Element {
    let mut element = Element::new(node.tag_name().name());
    for attr in node.attributes() {
        element
            .attributes
            .insert(attr.name().to_string(), attr.value().to_string());
    }
    element.children = node
        .children()
        .filter(|child| child.is_element())
        .map(to_element)
        .collect();
    element
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_document_keeps_structure() {
        let root = parse_document(
            r##"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="5" height="6">
                <!-- comment -->
                <g id="a"><rect width="1" height="1" fill="red"/>text</g>
                <use xlink:href="#a"/>
            </svg>"##,
        )
        .unwrap();
        assert_eq!(root.tag, "svg");
        assert_eq!(root.attribute("width"), Some("5"));
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[0].children.len(), 1);
        assert_eq!(root.children[1].attribute("href"), Some("#a"));
    }

    #[test]
    fn test_malformed_document() {
        let err = parse_document("<svg><g></svg>").unwrap_err();
        assert!(matches!(err, DocumentError::Malformed { .. }));
    }
}
