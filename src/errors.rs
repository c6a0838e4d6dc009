use std::{error, fmt};

use backtrace::Backtrace;

/// The broad category of a [TriangulationError]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An index or size exceeded the bounds of the ring or the vertex array
    OutOfRange,
    /// A vertex was referenced after it left the ring
    NotFound,
    /// No ear remained before the polygon was reduced to a triangle
    NonSimplePolygon,
    /// An internal invariant was violated
    Internal,
}

/// Describes an error which occurred during triangulation
#[derive(Debug)]
#[non_exhaustive]
pub enum TriangulationError {
    /// A polygon was provided with fewer than 3 vertices
    NotEnoughVertices(usize),
    /// A ring position or vertex index was out of bounds
    IndexOutOfRange {
        index: usize,
        len: usize,
    },
    /// The vertex is no longer part of the polygon ring
    VertexNotFound(usize),
    /// No ear could be found while more than 2 vertices remained.
    ///
    /// By the two ears theorem this only happens for polygons which self-intersect,
    /// are wound against the configured direction, or contain degenerate geometry.
    NonSimplePolygon {
        /// The number of vertices left in the ring
        remaining: usize,
        /// The number of triangles clipped before failing
        clipped: usize,
    },
    /// A triangulation invariant was violated.
    InternalError(InternalError),
}

impl TriangulationError {
    #[cold]
    #[inline(always)]
    pub(crate) fn internal(msg: impl Into<String>) -> Self {
        TriangulationError::InternalError(InternalError::new(msg))
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotEnoughVertices(_) | Self::IndexOutOfRange { .. } => ErrorKind::OutOfRange,
            Self::VertexNotFound(_) => ErrorKind::NotFound,
            Self::NonSimplePolygon { .. } => ErrorKind::NonSimplePolygon,
            Self::InternalError(_) => ErrorKind::Internal,
        }
    }
}

impl fmt::Display for TriangulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotEnoughVertices(vertices) => write!(f, "Polygon only contains {} vertices", vertices),
            Self::IndexOutOfRange { index, len } => write!(f, "Index {} is out of range for length {}", index, len),
            Self::VertexNotFound(vertex) => write!(f, "Vertex {} is not in the polygon ring", vertex),
            Self::NonSimplePolygon { remaining, clipped } => write!(f, "Triangulation failed; polygon is non-simple (no ear among {} remaining vertices after {} triangles)", remaining, clipped),
            Self::InternalError(error) => fmt::Display::fmt(error, f),
        }
    }
}

impl error::Error for TriangulationError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::InternalError(error) => Some(error),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct InternalError {
    pub msg: String,
    pub backtrace: Backtrace,
}

impl InternalError {
    #[cold]
    #[inline(always)]
    pub(crate) fn new(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            backtrace: Backtrace::new_unresolved(),
        }
    }
}

impl fmt::Display for InternalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{:?}", self.msg, self.backtrace)
    }
}

impl error::Error for InternalError { }
