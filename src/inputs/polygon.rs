use crate::{List, TriangulationConfig, TriangulationError, IndexTriangle, driver::EarClipper};

use super::vertex::Vertex;

/// An indexable, read-only sequence of polygon vertices.
///
/// Vertices must be listed in a consistent winding order (see [TriangulationConfig]),
/// without repeating the initial vertex. The contour is implicitly closed.
pub trait Polygon {
    /// The type of vertices of the polygon.
    type Vertex: Vertex;

    /// Provides the number of vertices in the contour.
    fn vertex_count(&self) -> usize;

    /// Get the `Vertex` at `index`, or `None` if `index` is out of bounds
    fn get_vertex(&self, index: usize) -> Option<&Self::Vertex>;
}

impl<V: Vertex> Polygon for [V] {
    type Vertex = V;

    fn vertex_count(&self) -> usize {
        self.len()
    }

    fn get_vertex(&self, index: usize) -> Option<&Self::Vertex> {
        self.get(index)
    }
}

impl<V: Vertex> Polygon for Vec<V> {
    type Vertex = V;

    fn vertex_count(&self) -> usize {
        self.len()
    }

    fn get_vertex(&self, index: usize) -> Option<&Self::Vertex> {
        self.get(index)
    }
}

impl<V: Vertex, const N: usize> Polygon for [V; N] {
    type Vertex = V;

    fn vertex_count(&self) -> usize {
        N
    }

    fn get_vertex(&self, index: usize) -> Option<&Self::Vertex> {
        self.get(index)
    }
}

/// `Triangulate` provides the `triangulate()` family of functions to implementers of [Polygon].
///
/// This trait is sealed and is not intended to be manually implemented.
pub trait Triangulate: private::Sealed {
    /// Triangulates this polygon, assuming counterclockwise winding.
    ///
    /// On success, returns exactly `vertex_count() - 2` triangles of vertex indices.
    fn triangulate(&self) -> Result<Vec<IndexTriangle>, TriangulationError>;

    /// Triangulates this polygon with the given configuration.
    fn triangulate_with(&self, config: &TriangulationConfig) -> Result<Vec<IndexTriangle>, TriangulationError>;

    /// Triangulates this polygon, appending the triangles to `list`.
    ///
    /// If triangulation fails, `list` is truncated back to its length before the call.
    fn triangulate_into<L: List<usize>>(&self, list: &mut L, config: &TriangulationConfig) -> Result<(), TriangulationError>;
}

impl<P: Polygon + ?Sized> Triangulate for P {
    #[inline]
    fn triangulate(&self) -> Result<Vec<IndexTriangle>, TriangulationError> {
        self.triangulate_with(&TriangulationConfig::default())
    }

    fn triangulate_with(&self, config: &TriangulationConfig) -> Result<Vec<IndexTriangle>, TriangulationError> {
        let mut output: Vec<IndexTriangle> = Vec::with_capacity(self.vertex_count().saturating_sub(2));
        self.triangulate_into(&mut output, config)?;
        Ok(output)
    }

    fn triangulate_into<L: List<usize>>(&self, list: &mut L, config: &TriangulationConfig) -> Result<(), TriangulationError> {
        let initial_len = <L as List<usize>>::len(list);
        let result = EarClipper::new(self, config).and_then(|clipper| clipper.run(&mut *list));
        if result.is_err() {
            <L as List<usize>>::truncate(list, initial_len);
        }
        result
    }
}

mod private {
    pub trait Sealed { }

    impl<P: super::Polygon + ?Sized> Sealed for P { }
}
