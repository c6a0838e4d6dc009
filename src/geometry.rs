//! Orientation and containment predicates over 2D coordinates.
//!
//! All predicates use plain floating-point comparisons; there is no exact
//! arithmetic fallback.

use num_traits::{real::Real, One, Zero};

use crate::{Coords, Polygon, RealTriangle, TriangleWinding, Vertex};

/// The sign of the result tells which side of the line through `q` and `r` the point `p` lies on.
#[inline]
pub fn orientation_sign<C: Real>(p: &Coords<C>, q: &Coords<C>, r: &Coords<C>) -> C {
    (p.x() - r.x()) * (q.y() - r.y()) - (q.x() - r.x()) * (p.y() - r.y())
}

/// `true` if `p` lies inside `tri` or on its boundary.
///
/// Points on an edge or a corner count as contained. The test does not depend on
/// the winding of `tri`.
pub fn point_in_triangle<C: Real>(tri: &RealTriangle<C>, p: &Coords<C>) -> bool {
    let d1 = orientation_sign(p, &tri.a, &tri.b);
    let d2 = orientation_sign(p, &tri.b, &tri.c);
    let d3 = orientation_sign(p, &tri.c, &tri.a);

    let zero = C::zero();
    let has_neg = d1 < zero || d2 < zero || d3 < zero;
    let has_pos = d1 > zero || d2 > zero || d3 > zero;

    !(has_neg && has_pos)
}

/// The determinant of the turn `a` -> `b` -> `c`.
///
/// Positive for a left (counterclockwise) turn, negative for a right turn, zero when collinear.
#[inline]
pub fn signed_area_sign<C: Real>(tri: &RealTriangle<C>) -> C {
    let ab_x = tri.b.x() - tri.a.x();
    let ab_y = tri.b.y() - tri.a.y();
    let bc_x = tri.c.x() - tri.b.x();
    let bc_y = tri.c.y() - tri.b.y();
    ab_x * bc_y - bc_x * ab_y
}

#[inline]
pub fn is_convex<C: Real>(tri: &RealTriangle<C>) -> bool {
    signed_area_sign(tri) > C::zero()
}

#[inline]
pub fn is_reflex<C: Real>(tri: &RealTriangle<C>) -> bool {
    signed_area_sign(tri) < C::zero()
}

/// The local turn at the middle corner of a vertex's neighbor triangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    Convex,
    Reflex,
    /// Zero signed area (or an undefined one, e.g. from NaN coordinates)
    Collinear,
}

impl Turn {
    /// Classifies `tri` for a polygon wound in the `winding` direction.
    pub fn of<C: Real>(tri: &RealTriangle<C>, winding: TriangleWinding) -> Self {
        let tri = match winding {
            TriangleWinding::Counterclockwise => *tri,
            TriangleWinding::Clockwise => RealTriangle::new(tri.c, tri.b, tri.a),
        };

        if is_convex(&tri) {
            Turn::Convex
        } else if is_reflex(&tri) {
            Turn::Reflex
        } else {
            Turn::Collinear
        }
    }
}

/// The signed area of the closed contour, positive when wound counterclockwise.
pub fn signed_area<P: Polygon + ?Sized>(polygon: &P) -> <P::Vertex as Vertex>::Coordinate {
    let zero: <P::Vertex as Vertex>::Coordinate = Zero::zero();
    let one: <P::Vertex as Vertex>::Coordinate = One::one();

    let n = polygon.vertex_count();
    let twice = (0..n)
        .filter_map(|i| Some((polygon.get_vertex(i)?.coords(), polygon.get_vertex((i + 1) % n)?.coords())))
        .fold(zero, |acc, (p, q)| acc + (p.x() * q.y() - q.x() * p.y()));
    twice / (one + one)
}

/// The unsigned area of a triangle
pub fn triangle_area<C: Real>(tri: &RealTriangle<C>) -> C {
    signed_area_sign(tri).abs() / (C::one() + C::one())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tri(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> RealTriangle<f64> {
        RealTriangle::new(Coords::new(a.0, a.1), Coords::new(b.0, b.1), Coords::new(c.0, c.1))
    }

    #[test]
    fn turns() {
        let ccw = tri((0., 0.), (1., 0.), (1., 1.));
        assert!(is_convex(&ccw));
        assert!(!is_reflex(&ccw));
        assert_eq!(Turn::of(&ccw, TriangleWinding::Counterclockwise), Turn::Convex);
        assert_eq!(Turn::of(&ccw, TriangleWinding::Clockwise), Turn::Reflex);

        let line = tri((0., 0.), (1., 0.), (2., 0.));
        assert!(!is_convex(&line));
        assert!(!is_reflex(&line));
        assert_eq!(Turn::of(&line, TriangleWinding::Counterclockwise), Turn::Collinear);
        assert_eq!(Turn::of(&line, TriangleWinding::Clockwise), Turn::Collinear);
    }

    #[test]
    fn containment_includes_boundary() {
        let t = tri((0., 0.), (2., 0.), (0., 2.));
        assert!(point_in_triangle(&t, &Coords::new(0.5, 0.5)));
        // Edge midpoint and corner
        assert!(point_in_triangle(&t, &Coords::new(1., 0.)));
        assert!(point_in_triangle(&t, &Coords::new(0., 0.)));
        assert!(point_in_triangle(&t, &Coords::new(1., 1.)));
        assert!(!point_in_triangle(&t, &Coords::new(1.5, 1.5)));
        assert!(!point_in_triangle(&t, &Coords::new(-0.1, 0.5)));

        // Winding of the triangle does not matter
        let cw = RealTriangle::new(t.c, t.b, t.a);
        assert!(point_in_triangle(&cw, &Coords::new(0.5, 0.5)));
        assert!(!point_in_triangle(&cw, &Coords::new(1.5, 1.5)));
    }

    #[test]
    fn orientation_sides() {
        let q = Coords::new(0., 0.);
        let r = Coords::new(1., 0.);
        assert!(orientation_sign(&Coords::new(0.5, 1.), &q, &r) > 0.);
        assert!(orientation_sign(&Coords::new(0.5, -1.), &q, &r) < 0.);
        assert_eq!(orientation_sign(&Coords::new(3., 0.), &q, &r), 0.);
    }

    #[test]
    fn contour_area() {
        let square = vec![[0f64, 0.], [1., 0.], [1., 1.], [0., 1.]];
        assert_eq!(signed_area(&square), 1.);
        let reversed: Vec<_> = square.iter().rev().copied().collect();
        assert_eq!(signed_area(&reversed), -1.);
        assert_eq!(triangle_area(&tri((0., 0.), (1., 0.), (0., 1.))), 0.5);
    }
}
