use crate::error::ShapeError;
use crate::line_string::LineString;
use serde::{Deserialize, Serialize};

/// A polygon: ring 0 is the exterior, every following ring is a hole.
///
/// Holes are not checked to lie inside the exterior, and self-intersection or
/// winding order are not rejected.
///
/// Serde deserialization does not run the constructor checks, so a
/// deserialized polygon may have zero rings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    rings: Vec<LineString>,
}

impl Polygon {
    /// Build a polygon from its rings, validating each as a closed ring.
    ///
    /// # Examples
    ///
    /// ```
    /// use geofence_types::{LineString, Point, Polygon, ShapeError};
    ///
    /// let open = LineString::new(vec![
    ///     Point::new(0.0, 0.0),
    ///     Point::new(0.0, 1.0),
    ///     Point::new(1.0, 1.0),
    ///     Point::new(1.0, 0.0),
    /// ])?;
    /// assert!(matches!(
    ///     Polygon::new(vec![open]),
    ///     Err(ShapeError::RingNotClosed { ring: Some(0), .. })
    /// ));
    /// # Ok::<(), ShapeError>(())
    /// ```
    pub fn new(rings: Vec<LineString>) -> Result<Self, ShapeError> {
        if rings.is_empty() {
            return Err(ShapeError::EmptyPolygon);
        }
        for (idx, ring) in rings.iter().enumerate() {
            ring.ensure_ring().map_err(|e| e.at_ring(idx))?;
        }
        Ok(Self { rings })
    }

    /// Build a polygon from an exterior ring and holes.
    pub fn with_holes(exterior: LineString, holes: Vec<LineString>) -> Result<Self, ShapeError> {
        let mut rings = Vec::with_capacity(holes.len() + 1);
        rings.push(exterior);
        rings.extend(holes);
        Self::new(rings)
    }

    /// The outer boundary, `None` only for a zero-ring value produced outside [`Polygon::new`].
    pub fn exterior(&self) -> Option<&LineString> {
        self.rings.first()
    }

    pub fn holes(&self) -> &[LineString] {
        self.rings.get(1..).unwrap_or(&[])
    }

    pub fn rings(&self) -> &[LineString] {
        &self.rings
    }

    pub fn into_rings(self) -> Vec<LineString> {
        self.rings
    }

    /// Total vertex count across all rings.
    pub fn num_points(&self) -> usize {
        self.rings.iter().map(LineString::len).sum()
    }
}

impl From<&Polygon> for geo::Polygon<f64> {
    fn from(polygon: &Polygon) -> Self {
        let mut rings = polygon.rings.iter().map(geo::LineString::from);
        let exterior = rings.next().unwrap_or_else(|| geo::LineString::new(Vec::new()));
        geo::Polygon::new(exterior, rings.collect())
    }
}

impl TryFrom<&geo::Polygon<f64>> for Polygon {
    type Error = ShapeError;

    fn try_from(polygon: &geo::Polygon<f64>) -> Result<Self, Self::Error> {
        let mut rings = Vec::with_capacity(polygon.interiors().len() + 1);
        rings.push(LineString::try_from(polygon.exterior()).map_err(|e| e.at_ring(0))?);
        for (idx, interior) in polygon.interiors().iter().enumerate() {
            rings.push(LineString::try_from(interior).map_err(|e| e.at_ring(idx + 1))?);
        }
        Polygon::new(rings)
    }
}
