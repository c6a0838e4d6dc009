use num_traits::Zero;

use crate::{geometry, Polygon, TriangleWinding, Vertex};

/// The winding order of the input contour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputWinding {
    /// Vertices are listed counterclockwise: a left turn is convex.
    Counterclockwise,
    /// Vertices are listed clockwise: a right turn is convex.
    Clockwise,
    /// Determined from the sign of the contour's area. Zero area is treated as counterclockwise.
    Detect,
}

impl Default for InputWinding {
    fn default() -> Self {
        InputWinding::Counterclockwise
    }
}

impl InputWinding {
    /// Resolves this setting against `polygon`
    pub fn resolve<P: Polygon + ?Sized>(self, polygon: &P) -> TriangleWinding {
        match self {
            InputWinding::Counterclockwise => TriangleWinding::Counterclockwise,
            InputWinding::Clockwise => TriangleWinding::Clockwise,
            InputWinding::Detect => {
                let zero: <P::Vertex as Vertex>::Coordinate = Zero::zero();
                if geometry::signed_area(polygon) < zero {
                    TriangleWinding::Clockwise
                } else {
                    TriangleWinding::Counterclockwise
                }
            }
        }
    }
}

/// Options for a single triangulation call
#[derive(Debug, Clone, Default)]
pub struct TriangulationConfig {
    pub winding: InputWinding,
}

impl TriangulationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_winding(mut self, winding: InputWinding) -> Self {
        self.winding = winding;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_winding() {
        let ccw = vec![[0f32, 0.], [1., 0.], [1., 1.], [0., 1.]];
        let cw: Vec<_> = ccw.iter().rev().copied().collect();
        assert_eq!(InputWinding::Detect.resolve(&ccw), TriangleWinding::Counterclockwise);
        assert_eq!(InputWinding::Detect.resolve(&cw), TriangleWinding::Clockwise);
        assert_eq!(InputWinding::Counterclockwise.resolve(&cw), TriangleWinding::Counterclockwise);
        assert_eq!(InputWinding::Clockwise.resolve(&ccw), TriangleWinding::Clockwise);
    }

    #[test]
    fn degenerate_defaults_to_counterclockwise() {
        let line = vec![[0f64, 0.], [1., 0.], [2., 0.]];
        assert_eq!(InputWinding::Detect.resolve(&line), TriangleWinding::Counterclockwise);
    }
}
