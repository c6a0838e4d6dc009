use std::fmt::Debug;

use num_traits::real::Real;

use crate::Coords;

/// A two-dimensional point.
///
/// The coordinate type must implement [num_traits::real::Real], reexported as [crate::Real].
pub trait Vertex {
    /// The type of the individual `x` and `y` coordinates
    type Coordinate: Real;

    /// The x [Vertex::Coordinate] value
    fn x(&self) -> Self::Coordinate;
    /// The y [Vertex::Coordinate] value
    fn y(&self) -> Self::Coordinate;

    /// A copy of this vertex's coordinates
    #[inline(always)]
    fn coords(&self) -> Coords<Self::Coordinate> {
        Coords::new(self.x(), self.y())
    }
}

impl<C: Debug + Real> Vertex for [C; 2] {
    type Coordinate = C;

    #[inline(always)]
    fn x(&self) -> Self::Coordinate {
        self[0]
    }

    #[inline(always)]
    fn y(&self) -> Self::Coordinate {
        self[1]
    }
}

impl<C: Debug + Real> Vertex for (C, C) {
    type Coordinate = C;

    #[inline(always)]
    fn x(&self) -> Self::Coordinate {
        self.0
    }

    #[inline(always)]
    fn y(&self) -> Self::Coordinate {
        self.1
    }
}

impl<C: Real> Vertex for Coords<C> {
    type Coordinate = C;

    #[inline(always)]
    fn x(&self) -> Self::Coordinate {
        Coords::x(self)
    }

    #[inline(always)]
    fn y(&self) -> Self::Coordinate {
        Coords::y(self)
    }

    #[inline(always)]
    fn coords(&self) -> Coords<Self::Coordinate> {
        *self
    }
}
