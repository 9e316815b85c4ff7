use crate::error::ShapeError;
use crate::polygon::Polygon;
use serde::{Deserialize, Serialize};

/// Independent member polygons. Overlap between members is allowed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiPolygon {
    polygons: Vec<Polygon>,
}

impl MultiPolygon {
    /// Build a multi-polygon from already validated members.
    pub fn new(polygons: Vec<Polygon>) -> Result<Self, ShapeError> {
        if polygons.is_empty() {
            return Err(ShapeError::EmptyMultiPolygon);
        }
        Ok(Self { polygons })
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn into_polygons(self) -> Vec<Polygon> {
        self.polygons
    }

    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }
}

impl From<Polygon> for MultiPolygon {
    fn from(polygon: Polygon) -> Self {
        Self {
            polygons: vec![polygon],
        }
    }
}

impl From<&MultiPolygon> for geo::MultiPolygon<f64> {
    fn from(multi: &MultiPolygon) -> Self {
        geo::MultiPolygon::new(multi.polygons.iter().map(geo::Polygon::from).collect())
    }
}

impl TryFrom<&geo::MultiPolygon<f64>> for MultiPolygon {
    type Error = ShapeError;

    fn try_from(multi: &geo::MultiPolygon<f64>) -> Result<Self, Self::Error> {
        let polygons = multi
            .iter()
            .map(Polygon::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        MultiPolygon::new(polygons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line_string::LineString;
    use crate::point::Point;

    fn square(min_lat: f64, min_lng: f64, size: f64) -> Polygon {
        let ring = LineString::new_ring(vec![
            Point::new(min_lat, min_lng),
            Point::new(min_lat, min_lng + size),
            Point::new(min_lat + size, min_lng + size),
            Point::new(min_lat + size, min_lng),
            Point::new(min_lat, min_lng),
        ])
        .unwrap();
        Polygon::new(vec![ring]).unwrap()
    }

    #[test]
    fn test_new() {
        let multi = MultiPolygon::new(vec![square(0.0, 0.0, 10.0), square(0.0, 20.0, 10.0)]).unwrap();
        assert_eq!(multi.len(), 2);
        assert_eq!(multi.polygons()[1], square(0.0, 20.0, 10.0));
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(
            MultiPolygon::new(Vec::new()),
            Err(ShapeError::EmptyMultiPolygon)
        );
    }

    #[test]
    fn test_overlapping_members_accepted() {
        let multi = MultiPolygon::new(vec![square(0.0, 0.0, 10.0), square(5.0, 5.0, 10.0)]);
        assert!(multi.is_ok());
    }

    #[test]
    fn test_from_single_polygon() {
        let multi = MultiPolygon::from(square(0.0, 0.0, 1.0));
        assert_eq!(multi.len(), 1);
    }

    #[test]
    fn test_geo_roundtrip() {
        let multi = MultiPolygon::new(vec![square(0.0, 0.0, 10.0), square(0.0, 20.0, 10.0)]).unwrap();
        let geo_multi = geo::MultiPolygon::from(&multi);
        assert_eq!(geo_multi.0.len(), 2);
        assert_eq!(MultiPolygon::try_from(&geo_multi).unwrap(), multi);
    }
}
