use crate::inputs::Vertex;

#[derive(Default, Copy, Clone, PartialEq, PartialOrd)]
pub struct VTest {
    x: f64,
    y: f64,
}

impl VTest {
    pub fn new(x: f64, y: f64) -> Self { VTest {x, y} }
}

impl std::fmt::Debug for VTest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl std::fmt::Display for VTest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Vertex for VTest {
    type Coordinate = f64;

    #[inline(always)]
    fn x(&self) -> Self::Coordinate { self.x }

    #[inline(always)]
    fn y(&self) -> Self::Coordinate { self.y }
}

impl From<(f64, f64)> for VTest {
    fn from((x, y): (f64, f64)) -> Self {
        VTest::new(x, y)
    }
}
