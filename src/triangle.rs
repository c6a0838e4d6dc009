use std::fmt;

use num_traits::real::Real;

/// An ordered triple of `T`, listed in the winding order of the source polygon.
///
/// `T` is either a vertex index ([IndexTriangle]) or a coordinate pair ([RealTriangle]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triangle<T> {
    pub a: T,
    pub b: T,
    pub c: T,
}

/// A triangle whose corners are indices into the source polygon
pub type IndexTriangle = Triangle<usize>;

/// A triangle whose corners are resolved coordinates
pub type RealTriangle<C> = Triangle<Coords<C>>;

impl<T> Triangle<T> {
    pub fn new(a: T, b: T, c: T) -> Self {
        Self { a, b, c }
    }

    /// Uses function `f` to map all three corners to `U`
    pub fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> Triangle<U> {
        Triangle {
            a: f(self.a),
            b: f(self.b),
            c: f(self.c),
        }
    }

    /// Like [Triangle::map], stopping at the first corner `f` fails on
    pub fn try_map<U, E, F: FnMut(T) -> Result<U, E>>(self, mut f: F) -> Result<Triangle<U>, E> {
        Ok(Triangle {
            a: f(self.a)?,
            b: f(self.b)?,
            c: f(self.c)?,
        })
    }

    pub fn into_array(self) -> [T; 3] {
        [self.a, self.b, self.c]
    }
}

impl<T> From<[T; 3]> for Triangle<T> {
    fn from([a, b, c]: [T; 3]) -> Self {
        Self { a, b, c }
    }
}

impl<T> From<(T, T, T)> for Triangle<T> {
    fn from((a, b, c): (T, T, T)) -> Self {
        Self { a, b, c }
    }
}

impl<T> From<Triangle<T>> for [T; 3] {
    fn from(t: Triangle<T>) -> Self {
        t.into_array()
    }
}

impl<T: fmt::Display> fmt::Display for Triangle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.a, self.b, self.c)
    }
}

/// A snapshot of a vertex's coordinates
#[derive(Clone, Copy, PartialEq)]
pub struct Coords<C: Real>([C; 2]);

impl<C: Real> Coords<C> {
    pub fn new(x: C, y: C) -> Self { Self([x, y]) }

    pub fn x(&self) -> C { self.0[0] }
    pub fn y(&self) -> C { self.0[1] }

    pub fn zero() -> Self { Self([C::zero(), C::zero()]) }
}

impl<C: Real> fmt::Debug for Coords<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tuple = f.debug_tuple("Coords");
        for value in &[self.x(), self.y()] {
            match value.to_f64() {
                Some(value) => tuple.field(&value),
                None => tuple.field(&format_args!("<{}>", std::any::type_name::<C>())),
            };
        }
        tuple.finish()
    }
}

impl<C: Real> fmt::Display for Coords<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let (Some(x), Some(y)) = (self.x().to_f64(), self.y().to_f64()) {
            write!(f, "({}, {})", x, y)
        } else {
            write!(f, "Coords<{}>", std::any::type_name::<C>())
        }
    }
}
