use crate::point::Point;
use thiserror::Error;

/// Structural geometry violations, raised at construction or query time.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    #[error("too few points: need at least {required}, got {actual}")]
    TooFewPoints { required: usize, actual: usize },

    /// `ring` is the index inside the owning polygon, `None` for a stand-alone ring.
    #[error("ring not closed{}: first point {first} differs from last point {last}", ring_suffix(.ring))]
    RingNotClosed {
        ring: Option<usize>,
        first: Point,
        last: Point,
    },

    #[error("polygon has no rings")]
    EmptyPolygon,

    #[error("multipolygon has no polygons")]
    EmptyMultiPolygon,
}

impl ShapeError {
    /// Attach the ring index inside a polygon to a ring-level error.
    pub(crate) fn at_ring(self, index: usize) -> Self {
        match self {
            ShapeError::RingNotClosed { first, last, .. } => ShapeError::RingNotClosed {
                ring: Some(index),
                first,
                last,
            },
            other => other,
        }
    }
}

fn ring_suffix(ring: &Option<usize>) -> String {
    match ring {
        Some(idx) => format!(" (ring {})", idx),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_few_points_message() {
        let err = ShapeError::TooFewPoints {
            required: 4,
            actual: 3,
        };
        assert_eq!(err.to_string(), "too few points: need at least 4, got 3");
    }

    #[test]
    fn test_ring_not_closed_message() {
        let err = ShapeError::RingNotClosed {
            ring: None,
            first: Point::new(0.0, 0.0),
            last: Point::new(1.0, 1.0),
        };
        assert!(err.to_string().starts_with("ring not closed: first point"));

        let err = err.at_ring(2);
        assert!(err.to_string().starts_with("ring not closed (ring 2)"));
    }

    #[test]
    fn test_at_ring_keeps_other_variants() {
        assert_eq!(ShapeError::EmptyPolygon.at_ring(1), ShapeError::EmptyPolygon);
    }
}
