use serde::{Deserialize, Serialize};
use std::fmt;

/// A geographic point stored as latitude/longitude.
///
/// No normalization is applied: out-of-range values (e.g. `lat = 140.0`) are
/// kept exactly as given.
///
/// # Examples
///
/// ```
/// use geofence_types::Point;
///
/// let nashville = Point::new(36.1627, -86.7816);
/// assert_eq!(nashville.lat(), 36.1627);
/// assert_eq!(nashville.lng(), -86.7816);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    lat: f64,
    lng: f64,
}

impl Point {
    /// Create a point from latitude and longitude, in that order.
    #[inline]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Create a point from GeoJSON ordering (longitude first).
    #[inline]
    pub fn from_lng_lat(lng: f64, lat: f64) -> Self {
        Self { lat, lng }
    }

    #[inline]
    pub fn lat(&self) -> f64 {
        self.lat
    }

    #[inline]
    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// GeoJSON position `[lng, lat]`.
    #[inline]
    pub fn to_lng_lat(&self) -> [f64; 2] {
        [self.lng, self.lat]
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lng)
    }
}

impl From<Point> for geo::Point<f64> {
    fn from(point: Point) -> Self {
        geo::Point::new(point.lng, point.lat)
    }
}

impl From<Point> for geo::Coord<f64> {
    fn from(point: Point) -> Self {
        geo::Coord {
            x: point.lng,
            y: point.lat,
        }
    }
}

impl From<geo::Point<f64>> for Point {
    fn from(point: geo::Point<f64>) -> Self {
        Point::from_lng_lat(point.x(), point.y())
    }
}

impl From<geo::Coord<f64>> for Point {
    fn from(coord: geo::Coord<f64>) -> Self {
        Point::from_lng_lat(coord.x, coord.y)
    }
}
