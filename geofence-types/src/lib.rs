//! # geofence-types
//!
//! Geometry value types for the geofence containment engine.
//!
//! - **Point**: a `(lat, lng)` pair
//! - **LineString**: an ordered run of points, optionally validated as a closed ring
//! - **Polygon**: an exterior ring followed by zero or more holes
//! - **MultiPolygon**: independent member polygons
//!
//! Constructors validate structure eagerly and return a [`ShapeError`] instead of
//! producing a value that would fail later at query time. All types are
//! serializable with Serde and convert to and from the `geo` crate's primitives
//! (`x` = longitude, `y` = latitude).
//!
//! ## Examples
//!
//! ```rust
//! use geofence_types::{LineString, Point, Polygon};
//!
//! let ring = LineString::new_ring(vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(0.0, 100.0),
//!     Point::new(100.0, 100.0),
//!     Point::new(100.0, 0.0),
//!     Point::new(0.0, 0.0),
//! ])?;
//! let square = Polygon::new(vec![ring])?;
//! assert!(square.holes().is_empty());
//! # Ok::<(), geofence_types::ShapeError>(())
//! ```

pub mod error;
pub mod line_string;
pub mod multi_polygon;
pub mod point;
pub mod polygon;

pub use error::ShapeError;
pub use line_string::LineString;
pub use multi_polygon::MultiPolygon;
pub use point::Point;
pub use polygon::Polygon;
