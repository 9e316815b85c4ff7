use crate::error::ShapeError;
use crate::point::Point;
use serde::{Deserialize, Serialize};

/// Minimum number of points of an open line string.
pub const MIN_LINE_POINTS: usize = 2;

/// Minimum number of points of a closed ring (three distinct points plus the closing one).
pub const MIN_RING_POINTS: usize = 4;

/// An ordered sequence of points, used either as a path or as a polygon ring.
///
/// # Examples
///
/// ```
/// use geofence_types::{LineString, Point, ShapeError};
///
/// let open = vec![Point::new(0.0, 0.0), Point::new(0.0, 1.0), Point::new(1.0, 1.0)];
/// assert!(LineString::new(open.clone()).is_ok());
/// assert!(matches!(
///     LineString::new_ring(open),
///     Err(ShapeError::TooFewPoints { required: 4, actual: 3 })
/// ));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineString {
    points: Vec<Point>,
}

impl LineString {
    /// Build an open line string with at least two points.
    pub fn new(points: Vec<Point>) -> Result<Self, ShapeError> {
        ensure_len(&points, MIN_LINE_POINTS)?;
        Ok(Self { points })
    }

    /// Build a closed ring: at least four points, first equal to last.
    ///
    /// An open ring is rejected rather than silently closed.
    pub fn new_ring(points: Vec<Point>) -> Result<Self, ShapeError> {
        ensure_len(&points, MIN_RING_POINTS)?;
        let line = Self { points };
        line.ensure_closed()?;
        Ok(line)
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&Point> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&Point> {
        self.points.last()
    }

    /// Whether the first and last points are identical.
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => first == last,
            _ => false,
        }
    }

    /// Consecutive point pairs. For a closed ring this visits every edge exactly once.
    pub fn segments(&self) -> impl Iterator<Item = (&Point, &Point)> + '_ {
        self.points.windows(2).map(|pair| (&pair[0], &pair[1]))
    }

    pub(crate) fn ensure_ring(&self) -> Result<(), ShapeError> {
        ensure_len(&self.points, MIN_RING_POINTS)?;
        self.ensure_closed()
    }

    fn ensure_closed(&self) -> Result<(), ShapeError> {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) if first != last => Err(ShapeError::RingNotClosed {
                ring: None,
                first: *first,
                last: *last,
            }),
            _ => Ok(()),
        }
    }
}

fn ensure_len(points: &[Point], required: usize) -> Result<(), ShapeError> {
    if points.len() < required {
        return Err(ShapeError::TooFewPoints {
            required,
            actual: points.len(),
        });
    }
    Ok(())
}

impl From<&LineString> for geo::LineString<f64> {
    fn from(line: &LineString) -> Self {
        line.points
            .iter()
            .map(|p| geo::Coord::from(*p))
            .collect::<Vec<_>>()
            .into()
    }
}

impl TryFrom<&geo::LineString<f64>> for LineString {
    type Error = ShapeError;

    /// Converts a `geo` ring. `geo` keeps polygon rings closed, so this uses ring validation.
    fn try_from(line: &geo::LineString<f64>) -> Result<Self, Self::Error> {
        LineString::new_ring(line.coords().map(|c| Point::from(*c)).collect())
    }
}
