use log::trace;
use smallvec::SmallVec;

use crate::{
    classification::Classification,
    geometry::{self, Turn},
    ring::Ring,
    Coords, IndexTriangle, Polygon, RealTriangle, Triangle, TriangleWinding, TriangulationError, Vertex,
};

/// A polygon being reduced by ear clipping.
///
/// Tracks the ring of vertices still on the boundary along with their convex, reflex and
/// ear classifications. Vertices are always identified by their index in the source
/// [Polygon], which is only ever read.
pub struct EarClipPolygon<'a, P: Polygon + ?Sized> {
    polygon: &'a P,
    winding: TriangleWinding,
    ring: Ring,
    classification: Classification,
}

impl<'a, P: Polygon + ?Sized> EarClipPolygon<'a, P> {
    /// Builds the ring `0..n` and classifies every vertex.
    ///
    /// Fails with [TriangulationError::NotEnoughVertices] if `polygon` has fewer than 3 vertices.
    pub fn new(polygon: &'a P, winding: TriangleWinding) -> Result<Self, TriangulationError> {
        let vertex_count = polygon.vertex_count();
        if vertex_count < 3 {
            return Err(TriangulationError::NotEnoughVertices(vertex_count));
        }

        let mut model = Self {
            polygon,
            winding,
            ring: Ring::new(vertex_count),
            classification: Classification::new(vertex_count),
        };

        for vertex in 0..vertex_count {
            let turn = model.compute_turn(vertex)?;
            model.classification.seed(vertex, turn);
        }

        let convex: SmallVec<[usize; 16]> = model.classification.convex().collect();
        for vertex in convex {
            let is_ear = model.is_ear(vertex, false)?;
            model.classification.set_ear(vertex, is_ear);
        }

        Ok(model)
    }

    /// The neighbor triangle of the vertex at `position` in the ring
    pub fn triangle_at_index(&self, position: usize) -> Result<IndexTriangle, TriangulationError> {
        let vertex = self.ring.nth(position).ok_or(TriangulationError::IndexOutOfRange {
            index: position,
            len: self.ring.len(),
        })?;
        self.triangle_at_vertex(vertex)
    }

    /// `(prev, vertex, next)` for the current ring neighbors of `vertex`
    pub fn triangle_at_vertex(&self, vertex: usize) -> Result<IndexTriangle, TriangulationError> {
        let (prev, next) = self.ring.neighbors(vertex).ok_or(TriangulationError::VertexNotFound(vertex))?;
        Ok(Triangle::new(prev, vertex, next))
    }

    /// Looks up the coordinates of each corner of `triangle`
    pub fn real_triangle(&self, triangle: IndexTriangle) -> Result<RealTriangle<<P::Vertex as Vertex>::Coordinate>, TriangulationError> {
        triangle.try_map(|index| self.coords(index))
    }

    fn real_triangle_at(&self, vertex: usize) -> Result<RealTriangle<<P::Vertex as Vertex>::Coordinate>, TriangulationError> {
        self.real_triangle(self.triangle_at_vertex(vertex)?)
    }

    fn coords(&self, index: usize) -> Result<Coords<<P::Vertex as Vertex>::Coordinate>, TriangulationError> {
        self.polygon
            .get_vertex(index)
            .map(Vertex::coords)
            .ok_or(TriangulationError::IndexOutOfRange {
                index,
                len: self.polygon.vertex_count(),
            })
    }

    /// The turn at `vertex` computed from its current neighbors, ignoring the cache
    pub fn compute_turn(&self, vertex: usize) -> Result<Turn, TriangulationError> {
        Ok(Turn::of(&self.real_triangle_at(vertex)?, self.winding))
    }

    pub fn is_convex(&self, vertex: usize) -> Result<bool, TriangulationError> {
        if self.classification.is_convex(vertex) {
            return Ok(true);
        }
        Ok(self.compute_turn(vertex)? == Turn::Convex)
    }

    pub fn is_reflex(&self, vertex: usize) -> Result<bool, TriangulationError> {
        if self.classification.is_reflex(vertex) {
            return Ok(true);
        }
        Ok(self.compute_turn(vertex)? == Turn::Reflex)
    }

    /// Tests whether the neighbor triangle of `vertex` is free of reflex vertices.
    ///
    /// With `use_pre_test`, a vertex already cached as an ear is accepted without
    /// looking at the geometry. A vertex that is not convex is never an ear. Otherwise
    /// every reflex vertex other than the two neighbors is checked, and one lying inside
    /// the triangle or on its boundary rejects it.
    pub fn is_ear(&self, vertex: usize, use_pre_test: bool) -> Result<bool, TriangulationError> {
        if use_pre_test && self.classification.is_ear(vertex) {
            return Ok(true);
        }
        if !self.is_convex(vertex)? {
            return Ok(false);
        }

        let triangle = self.triangle_at_vertex(vertex)?;
        let real = self.real_triangle(triangle)?;

        for reflex in self.classification.reflex() {
            if reflex == triangle.a || reflex == triangle.c {
                continue;
            }
            if geometry::point_in_triangle(&real, &self.coords(reflex)?) {
                return Ok(false);
            }
        }

        Ok(true)
    }

    /// Reclassifies `vertex` after one of its neighbors changed.
    ///
    /// A convex vertex has its ear status recomputed from scratch. Anything else is
    /// removed from the ears.
    pub fn update_vertex(&mut self, vertex: usize) -> Result<(), TriangulationError> {
        match self.compute_turn(vertex)? {
            Turn::Convex => {
                self.classification.mark_convex(vertex);
                let is_ear = self.is_ear(vertex, false)?;
                self.classification.set_ear(vertex, is_ear);
                trace!("v{} reclassified convex (ear: {})", vertex, is_ear);
            }
            turn => {
                self.classification.mark_not_convex(vertex, turn);
                trace!("v{} reclassified {:?}", vertex, turn);
            }
        }
        Ok(())
    }

    /// Removes `vertex` from the ring, returning its neighbor triangle.
    ///
    /// Only the two former neighbors of `vertex` are reclassified.
    pub fn remove_vertex(&mut self, vertex: usize) -> Result<IndexTriangle, TriangulationError> {
        let triangle = self.triangle_at_vertex(vertex)?;

        if !self.ring.remove(vertex) {
            return Err(TriangulationError::internal(format!("v{} vanished from the ring during removal", vertex)));
        }
        self.classification.forget(vertex);

        self.update_vertex(triangle.a)?;
        if triangle.c != triangle.a {
            self.update_vertex(triangle.c)?;
        }

        Ok(triangle)
    }

    pub fn has_ear(&self) -> bool {
        self.classification.has_ear()
    }

    /// The ear with the smallest vertex index
    pub fn next_ear(&self) -> Result<usize, TriangulationError> {
        self.classification
            .first_ear()
            .ok_or_else(|| TriangulationError::internal("next_ear: ear set is empty"))
    }

    /// The number of vertices still in the ring
    pub fn size(&self) -> usize {
        self.ring.len()
    }

    pub fn contains(&self, vertex: usize) -> bool {
        self.ring.contains(vertex)
    }

    pub fn winding(&self) -> TriangleWinding {
        self.winding
    }

    pub fn polygon(&self) -> &'a P {
        self.polygon
    }

    /// The vertices still in the ring, in winding order
    pub fn ring(&self) -> impl Iterator<Item = usize> + '_ {
        self.ring.iter()
    }

    /// Vertices cached as convex, in ascending order
    pub fn convex(&self) -> impl Iterator<Item = usize> + '_ {
        self.classification.convex()
    }

    /// Vertices cached as reflex, in ascending order
    pub fn reflex(&self) -> impl Iterator<Item = usize> + '_ {
        self.classification.reflex()
    }

    /// Vertices cached as ears, in ascending order
    pub fn ears(&self) -> impl Iterator<Item = usize> + '_ {
        self.classification.ears()
    }

    /// The cached turn of `vertex`, if any
    pub fn cached_turn(&self, vertex: usize) -> Option<Turn> {
        self.classification.turn(vertex)
    }
}
