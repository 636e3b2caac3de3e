//! Transform attribute grammar
//!
//! One transform per element:
//! - `translate(dx[, dy])`
//! - `rotate(angle)` or `rotate(angle cx cy)`
//! - `scale(factor)`
//!
//! Rotation and scaling pivot on the `transform-origin` attribute
//! (`"ox oy"`, default `0 0`) unless `rotate` names its own center.

use serde::{Deserialize, Serialize};
use svgraster_core::Point;
use tracing::warn;

use crate::document::parse_int;
use crate::model::SceneShape;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Transform {
    Translate { dx: i32, dy: i32 },
    Rotate { angle: f64, center: Option<Point> },
    Scale { factor: i32 },
}

impl Transform {
    /// Parses a transform attribute value. Returns `None` for an unknown
    /// function or argument count; non-numeric arguments read as `0`.
    pub fn parse(raw: &str) -> Option<Transform> {
        let raw = raw.trim();
        let open = raw.find('(')?;
        let close = raw.rfind(')')?;
        if close < open || !raw[close + 1..].trim().is_empty() {
            return None;
        }
        let name = raw[..open].trim();
        let args = parse_numbers(&raw[open + 1..close]);

        match (name, args.as_slice()) {
            ("translate", [dx]) => Some(Transform::Translate {
                dx: round(*dx),
                dy: 0,
            }),
            ("translate", [dx, dy]) => Some(Transform::Translate {
                dx: round(*dx),
                dy: round(*dy),
            }),
            ("rotate", [angle]) => Some(Transform::Rotate {
                angle: *angle,
                center: None,
            }),
            ("rotate", [angle, cx, cy]) => Some(Transform::Rotate {
                angle: *angle,
                center: Some(Point::new(round(*cx), round(*cy))),
            }),
            ("scale", [factor]) => Some(Transform::Scale {
                factor: round(*factor),
            }),
            ("scale", [sx, sy]) if sx == sy => Some(Transform::Scale {
                factor: round(*sx),
            }),
            _ => None,
        }
    }

    /// Applies this transform to `shape` using `origin` as the pivot.
    pub fn apply(&self, shape: &mut impl SceneShape, origin: Point) {
        match *self {
            Transform::Translate { dx, dy } => shape.translate(dx, dy),
            Transform::Rotate { angle, center } => {
                let pivot = center.unwrap_or(origin);
                shape.rotate(pivot.x, pivot.y, angle);
            }
            Transform::Scale { factor } => shape.scale(origin.x, origin.y, factor),
        }
    }
}

/// Parses a `transform-origin` value such as `"10 20"`.
///
/// Unparseable components fall back to zero.
pub fn parse_origin(raw: &str) -> Point {
    let mut parts = raw
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty());
    let mut next = |axis: &str| match parts.next() {
        None => 0,
        Some(token) => parse_int(token).unwrap_or_else(|| {
            warn!("Ignoring invalid transform-origin {} value {:?}", axis, token);
            0
        }),
    };
    let x = next("x");
    let y = next("y");
    Point::new(x, y)
}

/// Splits transform arguments. A token that is not a finite number counts
/// as `0`.
fn parse_numbers(args: &str) -> Vec<f64> {
    args.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| match token.parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            _ => {
                warn!("Transform argument {:?} is not a number, using 0", token);
                0.0
            }
        })
        .collect()
}

/// Nearest integer, saturating at the `i32` bounds.
fn round(v: f64) -> i32 {
    v.round() as i32
}
