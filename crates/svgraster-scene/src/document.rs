//! Element descriptions consumed by the scene builder
//!
//! An [`Element`] is the reader-independent form of one source element: its
//! tag, a flat string attribute map and its element children. The SVG
//! importer produces these from XML; tests build them directly.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use svgraster_core::{Color, SceneError};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub tag: String,
    pub attributes: BTreeMap<String, String>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Adds an attribute, builder style.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Appends a child element, builder style.
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Reads a required integer attribute.
    pub fn int_attribute(&self, name: &str) -> Result<i32, SceneError> {
        let raw = self
            .attribute(name)
            .ok_or_else(|| SceneError::MissingAttribute {
                element: self.tag.clone(),
                attribute: name.to_string(),
            })?;
        parse_int(raw).ok_or_else(|| SceneError::InvalidNumber {
            element: self.tag.clone(),
            attribute: name.to_string(),
            value: raw.to_string(),
        })
    }

    /// Reads an optional integer attribute, falling back to `default` when
    /// it is absent. A present but unparseable value is still an error.
    pub fn int_attribute_or(&self, name: &str, default: i32) -> Result<i32, SceneError> {
        if self.attribute(name).is_none() {
            return Ok(default);
        }
        self.int_attribute(name)
    }

    /// Reads a required integer attribute that must be zero or positive.
    pub fn non_negative_attribute(&self, name: &str) -> Result<i32, SceneError> {
        let value = self.int_attribute(name)?;
        if value < 0 {
            return Err(SceneError::OutOfRange {
                element: self.tag.clone(),
                attribute: name.to_string(),
                value,
                expected: "non-negative".to_string(),
            });
        }
        Ok(value)
    }

    /// Reads a required integer attribute that must be strictly positive.
    pub fn positive_attribute(&self, name: &str) -> Result<i32, SceneError> {
        let value = self.int_attribute(name)?;
        if value <= 0 {
            return Err(SceneError::OutOfRange {
                element: self.tag.clone(),
                attribute: name.to_string(),
                value,
                expected: "positive".to_string(),
            });
        }
        Ok(value)
    }

    /// Reads a required color attribute.
    pub fn color_attribute(&self, name: &str) -> Result<Color, SceneError> {
        let raw = self
            .attribute(name)
            .ok_or_else(|| SceneError::MissingAttribute {
                element: self.tag.clone(),
                attribute: name.to_string(),
            })?;
        Color::from_str(raw).map_err(|source| SceneError::InvalidColor {
            element: self.tag.clone(),
            attribute: name.to_string(),
            source,
        })
    }
}

/// Parses an integer coordinate.
///
/// Accepts an optional `px` suffix. Decimal values are rounded to the
/// nearest integer.
pub fn parse_int(raw: &str) -> Option<i32> {
    let value = raw.trim();
    let value = value.strip_suffix("px").unwrap_or(value).trim_end();
    if let Ok(v) = value.parse::<i32>() {
        return Some(v);
    }
    let v = value.parse::<f64>().ok()?;
    if !v.is_finite() || v < f64::from(i32::MIN) || v > f64::from(i32::MAX) {
        return None;
    }
    Some(v.round() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int_variants() {
        assert_eq!(parse_int("42"), Some(42));
        assert_eq!(parse_int(" -7 "), Some(-7));
        assert_eq!(parse_int("12px"), Some(12));
        assert_eq!(parse_int("2.6"), Some(3));
        assert_eq!(parse_int("abc"), None);
        assert_eq!(parse_int("NaN"), None);
        assert_eq!(parse_int(""), None);
    }

    #[test]
    fn test_missing_attribute_error() {
        let el = Element::new("circle");
        assert_eq!(
            el.int_attribute("r").unwrap_err(),
            SceneError::MissingAttribute {
                element: "circle".to_string(),
                attribute: "r".to_string(),
            }
        );
        assert_eq!(el.int_attribute_or("cx", 0), Ok(0));
    }

    #[test]
    fn test_present_but_invalid_is_not_defaulted() {
        let el = Element::new("circle").with_attribute("cx", "left");
        assert!(matches!(
            el.int_attribute_or("cx", 0),
            Err(SceneError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_positive_attribute() {
        let el = Element::new("rect").with_attribute("width", "0");
        assert!(matches!(
            el.positive_attribute("width"),
            Err(SceneError::OutOfRange { value: 0, .. })
        ));
    }

    #[test]
    fn test_color_attribute() {
        let el = Element::new("rect").with_attribute("fill", "#00ff00");
        assert_eq!(el.color_attribute("fill"), Ok(Color::new(0, 255, 0)));
        let bad = Element::new("rect").with_attribute("fill", "plaid");
        assert!(matches!(
            bad.color_attribute("fill"),
            Err(SceneError::InvalidColor { .. })
        ));
    }
}
