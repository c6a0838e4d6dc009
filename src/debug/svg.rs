use std::{fmt, io, path};

use num_traits::ToPrimitive;

use crate::{debug, EarClipPolygon, IndexTriangle, Polygon, Vertex};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum SvgOutputLevel {
    None,
    ResultOnly,
    AllSteps,
}

pub(crate) struct SvgContext {
    pub output_path: path::PathBuf,
    pub output_level: SvgOutputLevel,
    pub view_x_min: f32,
    pub view_x_max: f32,
    pub view_y_min: f32,
    pub view_y_max: f32,
    pub show_labels: bool,
    /// Triangles clipped so far, accumulated for drawing
    clipped: Vec<IndexTriangle>,
}

impl SvgContext {
    /// Returns `None` unless an output path and a nonzero output level are set in the environment.
    pub fn from_env<P: Polygon + ?Sized>(polygon: &P) -> Option<Self> {
        let output_path = debug::env::svg::output_path()?;
        let output_level = debug::env::svg::output_level();
        let show_labels = debug::env::svg::show_labels();

        if output_level == SvgOutputLevel::None {
            return None;
        }

        let mut view_x_min = f32::MAX;
        let mut view_x_max = f32::MIN;
        let mut view_y_min = f32::MAX;
        let mut view_y_max = f32::MIN;
        for index in 0..polygon.vertex_count() {
            if let Some([x, y]) = polygon.get_vertex(index).and_then(to_f32) {
                view_x_min = view_x_min.min(x);
                view_x_max = view_x_max.max(x);
                view_y_min = view_y_min.min(y);
                view_y_max = view_y_max.max(y);
            }
        }

        let w = view_x_max - view_x_min;
        let h = view_y_max - view_y_min;
        let margin_scale = 0.1;
        view_x_min -= w * margin_scale;
        view_x_max += w * margin_scale;
        view_y_min -= h * margin_scale;
        view_y_max += h * margin_scale;

        Some(Self {
            output_path,
            output_level,
            view_x_min,
            view_x_max,
            view_y_min,
            view_y_max,
            show_labels,
            clipped: Vec::new(),
        })
    }

    pub fn view_w(&self) -> f32 { self.view_x_max - self.view_x_min }
    pub fn view_h(&self) -> f32 { self.view_y_max - self.view_y_min }

    pub fn view_min_size(&self) -> f32 { self.view_w().min(self.view_h()) }

    pub fn percent(&self, p: f32) -> f32 { self.view_min_size() * p / 100.0 }

    /// Writes `step.svg` showing the remaining ring, clipped triangles and current ears.
    pub fn save_step<P: Polygon + ?Sized>(&mut self, level: SvgOutputLevel, polygon: &EarClipPolygon<'_, P>, clipped: Option<IndexTriangle>, step: usize) -> io::Result<()> {
        if let Some(triangle) = clipped {
            self.clipped.push(triangle);
        }
        if self.output_level < level {
            return Ok(());
        }

        let mut svg = SvgOutput::new(self);
        svg.write_polygon(polygon, clipped)
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "SVG formatting failed"))?;
        svg.save(format!("{:04}.svg", step))
    }
}

pub(crate) struct SvgOutput<'a> {
    pub context: &'a SvgContext,
    content: String,
}

impl<'a> SvgOutput<'a> {
    pub fn new(context: &'a SvgContext) -> Self {
        Self {
            context,
            content: String::new(),
        }
    }

    fn write_polygon<P: Polygon + ?Sized>(&mut self, polygon: &EarClipPolygon<'_, P>, latest: Option<IndexTriangle>) -> fmt::Result {
        use svg_fmt::{black, green, red, rgb, text, Fill, Stroke};
        use fmt::Write;

        let context = self.context;
        let source = polygon.polygon();
        let point = |index: usize| source.get_vertex(index).and_then(to_f32).unwrap_or([0.0, 0.0]);

        for triangle in &context.clipped {
            let color = if Some(*triangle) == latest { rgb(255, 126, 0) } else { rgb(200, 200, 255) };
            let vs = [point(triangle.a), point(triangle.b), point(triangle.c)];
            writeln!(self, "{}",
                svg_fmt::polygon(&vs[..])
                    .fill(Fill::Color(color))
                    .stroke(Stroke::Color(rgb(0, 0, 255), context.percent(0.1)))
            )?;
        }

        let ring: Vec<[f32; 2]> = polygon.ring().map(point).collect();
        if ring.len() > 2 {
            writeln!(self, "{}",
                svg_fmt::polygon(&ring[..])
                    .fill(Fill::None)
                    .stroke(Stroke::Color(rgb(255, 0, 255), context.percent(0.3)))
            )?;
        }

        let r = context.percent(0.5);
        for vertex in polygon.ring() {
            let color = if polygon.ears().any(|ear| ear == vertex) {
                green()
            } else if polygon.reflex().any(|reflex| reflex == vertex) {
                red()
            } else {
                black()
            };
            let [x, y] = point(vertex);
            writeln!(self, "{}", circle(x, y, r).fill(Fill::Color(color)))?;
            if context.show_labels {
                writeln!(self, "{}", text(x + r, y - r, format!("v{}", vertex)).size(r * 2.0))?;
            }
        }
        Ok(())
    }

    pub fn save<P: AsRef<path::Path>>(self, file_name: P) -> io::Result<()> {
        use std::io::Write;

        let path = self.context.output_path.join(file_name);
        let f = std::fs::File::create(path)?;
        let mut w = io::BufWriter::new(&f);

        writeln!(w, "<svg viewBox=\"{}, {}, {}, {}\" xmlns=\"http://www.w3.org/2000/svg\">", self.context.view_x_min, self.context.view_y_min, self.context.view_w(), self.context.view_h())?;
        writeln!(w, "{}", self.content)?;
        writeln!(w, "</svg>")?;
        Ok(())
    }
}

impl<'a> fmt::Write for SvgOutput<'a> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.content.write_str(s)
    }
}

fn to_f32<V: Vertex>(v: &V) -> Option<[f32; 2]> {
    Some([v.x().to_f32()?, v.y().to_f32()?])
}

// svg_fmt is missing a function for Circle
pub(crate) fn circle(x: f32, y: f32, r: f32) -> svg_fmt::Circle {
    svg_fmt::Circle {
        x,
        y,
        radius: r,
        style: svg_fmt::Style::default(),
    }
}
