//! Triangulation of simple polygons by ear clipping.
//!
//! ```
//! use earclip::Triangulate;
//!
//! let square = vec![[0f32, 0.], [1., 0.], [1., 1.], [0., 1.]];
//! let triangles = square.triangulate().expect("Triangulation failed");
//! assert_eq!(triangles.len(), 2);
//! ```

mod ring;
mod classification;
mod ear_polygon;
mod driver;
mod triangle;
mod config;
mod inputs;
mod outputs;
mod errors;
pub mod geometry;

#[cfg(feature = "debugging")]
pub(crate) mod debug;

#[cfg(any(test, feature = "benchmarking"))]
pub mod tests;

pub use errors::{ErrorKind, InternalError, TriangulationError};
pub use config::{InputWinding, TriangulationConfig};
pub use driver::{ClipState, EarClipper};
pub use ear_polygon::EarClipPolygon;
pub use triangle::{Coords, IndexTriangle, RealTriangle, Triangle};

pub use inputs::*;
pub use outputs::*;

pub use num_traits::real::Real;

/// Triangulates a counterclockwise simple polygon into `points.len() - 2` triangles of point indices.
///
/// Fails with [TriangulationError::NotEnoughVertices] for fewer than 3 points, and
/// [TriangulationError::NonSimplePolygon] when the contour self-intersects, is wound
/// clockwise, or is degenerate.
pub fn triangulate<V: Vertex>(points: &[V]) -> Result<Vec<IndexTriangle>, TriangulationError> {
    points.triangulate()
}
