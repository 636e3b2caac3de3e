//! Parsing of `points` attribute lists.

use svgraster_core::{Point, SceneError};

use crate::document::parse_int;

/// Parses a `points` list such as `"0,0 10,0 10,10"` or `"0 0 10 0 10 10"`.
///
/// Coordinates may be separated by commas, whitespace or both. Order is
/// preserved. A non-numeric token or an unpaired trailing coordinate is an
/// error for `element`.
pub fn parse_points(element: &str, raw: &str) -> Result<Vec<Point>, SceneError> {
    let coords = raw
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            parse_int(token).ok_or_else(|| SceneError::InvalidPoints {
                element: element.to_string(),
                reason: format!("'{}' is not a number", token),
            })
        })
        .collect::<Result<Vec<i32>, SceneError>>()?;

    if coords.len() % 2 != 0 {
        return Err(SceneError::InvalidPoints {
            element: element.to_string(),
            reason: format!("odd number of coordinates ({})", coords.len()),
        });
    }

    Ok(coords
        .chunks_exact(2)
        .map(|pair| Point::new(pair[0], pair[1]))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected() -> Vec<Point> {
        vec![Point::new(0, 0), Point::new(10, 0), Point::new(10, 10)]
    }

    #[test]
    fn test_comma_separated_pairs() {
        assert_eq!(parse_points("polyline", "0,0 10,0 10,10").unwrap(), expected());
    }

    #[test]
    fn test_whitespace_only() {
        assert_eq!(parse_points("polyline", "0 0 10 0 10 10").unwrap(), expected());
    }

    #[test]
    fn test_mixed_separators_and_padding() {
        assert_eq!(
            parse_points("polygon", "  0 , 0\n10,0\t10, 10 ").unwrap(),
            expected()
        );
    }

    #[test]
    fn test_empty_list_is_empty() {
        assert!(parse_points("polygon", "   ").unwrap().is_empty());
    }

    #[test]
    fn test_odd_count_rejected() {
        let err = parse_points("polygon", "0,0 10").unwrap_err();
        assert_eq!(
            err.to_string(),
            "<polygon> has a malformed points list: odd number of coordinates (3)"
        );
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(matches!(
            parse_points("polyline", "0,0 x,1"),
            Err(SceneError::InvalidPoints { .. })
        ));
    }
}
