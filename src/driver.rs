use log::{debug, trace};

use crate::{EarClipPolygon, IndexTriangle, List, Polygon, TriangleWinding, TriangulationConfig, TriangulationError};

#[cfg(feature = "debugging")]
use crate::debug;

/// Progress of an [EarClipper]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClipState {
    /// More than 2 vertices remain and at least one of them is an ear
    Running,
    /// The polygon has been reduced to 2 vertices
    Done,
    /// More than 2 vertices remain but none of them is an ear
    Failed,
}

/// Drives ear clipping over a polygon, one ear at a time.
///
/// Each [step](EarClipper::step) clips the lowest-indexed ear and yields its triangle,
/// so a polygon with `n` vertices takes `n - 2` steps.
pub struct EarClipper<'a, P: Polygon + ?Sized> {
    polygon: EarClipPolygon<'a, P>,
    clipped: usize,
    failed: bool,
    #[cfg(feature = "debugging")]
    svg_context: Option<debug::svg::SvgContext>,
}

impl<'a, P: Polygon + ?Sized> EarClipper<'a, P> {
    pub fn new(polygon: &'a P, config: &TriangulationConfig) -> Result<Self, TriangulationError> {
        let winding = config.winding.resolve(polygon);
        let polygon = EarClipPolygon::new(polygon, winding)?;

        debug!(
            "Clipping {} vertices ({:?}): {} convex, {} reflex, {} ears",
            polygon.size(),
            winding,
            polygon.convex().count(),
            polygon.reflex().count(),
            polygon.ears().count(),
        );

        #[cfg(feature = "debugging")]
        let svg_context = debug::svg::SvgContext::from_env(polygon.polygon());

        Ok(Self {
            polygon,
            clipped: 0,
            failed: false,
            #[cfg(feature = "debugging")]
            svg_context,
        })
    }

    pub fn state(&self) -> ClipState {
        if self.polygon.size() <= 2 {
            ClipState::Done
        } else if self.polygon.has_ear() {
            ClipState::Running
        } else {
            ClipState::Failed
        }
    }

    /// Clips one ear.
    ///
    /// Returns `Ok(None)` once the polygon is fully triangulated, and
    /// [TriangulationError::NonSimplePolygon] if no ear is left before that.
    pub fn step(&mut self) -> Result<Option<IndexTriangle>, TriangulationError> {
        match self.state() {
            ClipState::Done => Ok(None),
            ClipState::Failed => {
                debug!(
                    "No ear after {} triangles, remaining ring: {:?}",
                    self.clipped,
                    self.polygon.ring().collect::<Vec<_>>(),
                );
                self.failed = true;
                Err(TriangulationError::NonSimplePolygon {
                    remaining: self.polygon.size(),
                    clipped: self.clipped,
                })
            }
            ClipState::Running => {
                let ear = self.polygon.next_ear()?;
                let triangle = self.polygon.remove_vertex(ear)?;
                self.clipped += 1;
                trace!("Clipped ear v{} as {}, {} vertices remain", ear, triangle, self.polygon.size());

                #[cfg(feature = "debugging")]
                self.output_svg(debug::svg::SvgOutputLevel::AllSteps, Some(triangle));

                Ok(Some(triangle))
            }
        }
    }

    /// Clips every ear, pushing the triangles to `list`.
    ///
    /// `list` is left as-is on failure; callers that need rollback should truncate it.
    pub fn run<L: List<usize>>(mut self, mut list: L) -> Result<(), TriangulationError> {
        while let Some(triangle) = self.step()? {
            list.push(triangle.a, triangle.b, triangle.c);
        }

        debug!("Triangulation complete with {} triangles", self.clipped);

        #[cfg(feature = "debugging")]
        self.output_svg(debug::svg::SvgOutputLevel::ResultOnly, None);

        Ok(())
    }

    /// Clips every ear, collecting the triangles.
    pub fn finish(self) -> Result<Vec<IndexTriangle>, TriangulationError> {
        let mut triangles: Vec<IndexTriangle> = Vec::with_capacity(self.polygon.size().saturating_sub(2));
        self.run(&mut triangles)?;
        Ok(triangles)
    }

    /// The number of triangles clipped so far
    pub fn clipped(&self) -> usize {
        self.clipped
    }

    pub fn winding(&self) -> TriangleWinding {
        self.polygon.winding()
    }

    pub fn polygon(&self) -> &EarClipPolygon<'a, P> {
        &self.polygon
    }

    #[cfg(feature = "debugging")]
    fn output_svg(&mut self, level: debug::svg::SvgOutputLevel, clipped: Option<IndexTriangle>) {
        if let Some(svg_context) = &mut self.svg_context {
            let _ = svg_context.save_step(level, &self.polygon, clipped, self.clipped);
        }
    }
}

impl<'a, P: Polygon + ?Sized> Iterator for EarClipper<'a, P> {
    type Item = Result<IndexTriangle, TriangulationError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let result = self.step().transpose();
        if let Some(Err(_)) = &result {
            self.failed = true;
        }
        result
    }
}
