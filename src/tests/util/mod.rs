pub mod polygon;
mod vtest;

pub use vtest::VTest;

use crate::{geometry, Coords, IndexTriangle, RealTriangle, Vertex};

#[cfg(test)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn real<V: Vertex<Coordinate = f64>>(points: &[V], triangle: &IndexTriangle) -> RealTriangle<f64> {
    triangle.map(|i| points[i].coords())
}

fn strictly_inside(tri: &RealTriangle<f64>, p: &Coords<f64>) -> bool {
    let d1 = geometry::orientation_sign(p, &tri.a, &tri.b);
    let d2 = geometry::orientation_sign(p, &tri.b, &tri.c);
    let d3 = geometry::orientation_sign(p, &tri.c, &tri.a);
    (d1 > 0. && d2 > 0. && d3 > 0.) || (d1 < 0. && d2 < 0. && d3 < 0.)
}

/// Panics unless `triangles` is a complete, non-overlapping triangulation of `points`
pub fn assert_valid_triangulation<V: Vertex<Coordinate = f64>>(points: &[V], triangles: &[IndexTriangle]) {
    assert_eq!(triangles.len(), points.len() - 2, "Wrong triangle count");

    let mut seen = vec![false; points.len()];
    for t in triangles {
        assert!(t.a != t.b && t.b != t.c && t.a != t.c, "Repeated index in {}", t);
        for &i in &[t.a, t.b, t.c] {
            assert!(i < points.len(), "Index out of range in {}", t);
            seen[i] = true;
        }
    }
    assert!(seen.iter().all(|&s| s), "Not every vertex was used");

    let polygon_area = geometry::signed_area(points);
    let polygon_sign = polygon_area.signum();
    let reals: Vec<_> = triangles.iter().map(|t| real(points, t)).collect();
    let mut total = 0.;
    for (t, r) in triangles.iter().zip(&reals) {
        let turn = geometry::signed_area_sign(r);
        assert!(turn * polygon_sign > 0., "Triangle {} is degenerate or wound against the polygon", t);
        total += geometry::triangle_area(r);
    }
    let tolerance = 1e-9 * polygon_area.abs().max(1.);
    assert!((total - polygon_area.abs()).abs() <= tolerance, "Triangle area {} != polygon area {}", total, polygon_area.abs());

    for (i, a) in reals.iter().enumerate() {
        let centroid = Coords::new((a.a.x() + a.b.x() + a.c.x()) / 3., (a.a.y() + a.b.y() + a.c.y()) / 3.);
        for (j, b) in reals.iter().enumerate() {
            if i != j {
                assert!(!strictly_inside(b, &centroid), "Triangles {} and {} overlap", triangles[i], triangles[j]);
            }
        }
    }
}

