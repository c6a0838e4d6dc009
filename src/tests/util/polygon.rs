use rand::Rng;

use super::vtest::VTest;

pub fn square() -> Vec<VTest> {
    vec![
        (0.0, 0.0).into(),
        (1.0, 0.0).into(),
        (1.0, 1.0).into(),
        (0.0, 1.0).into(),
    ]
}

pub fn star() -> Vec<VTest> {
    vec![
        (1.0, 0.0).into(),
        (2.0, 2.0).into(),
        (0.0, 1.0).into(),
        (-2.0, 2.0).into(),
        (-1.0, 0.0).into(),
        (-2.0, -2.0).into(),
        (0.0, -1.0).into(),
        (2.0, -2.0).into(),
    ]
}

// Clockwise
pub fn half_frame() -> Vec<VTest> {
    vec![
        (0., 0.).into(), (0.05, 0.05).into(), (0.95, 0.05).into(), (0.95, 0.95).into(), (1., 1.).into(), (1., 0.).into()
    ]
}

//  4-----3
//  |    /
//  |   2
//  |    \
//  0-----1
pub fn dented_square() -> Vec<VTest> {
    vec![
        (0.0, 0.0).into(),
        (1.0, 0.0).into(),
        (0.5, 0.5).into(),
        (1.0, 1.0).into(),
        (0.0, 1.0).into(),
    ]
}

pub fn comb() -> Vec<VTest> {
    vec![
        (0., 0.).into(), (5., 0.).into(), (5., 2.).into(), (4., 2.).into(),
        (4., 1.).into(), (3., 1.).into(), (3., 2.).into(), (2., 2.).into(),
        (2., 1.).into(), (1., 1.).into(), (1., 2.).into(), (0., 2.).into(),
    ]
}

pub fn u_shape() -> Vec<VTest> {
    vec![
        (0., 0.).into(), (3., 0.).into(), (3., 3.).into(), (2., 3.).into(),
        (2., 1.).into(), (1., 1.).into(), (1., 3.).into(), (0., 3.).into(),
    ]
}

/// Counterclockwise regular polygon with `n` corners
pub fn regular(n: usize, radius: f64) -> Vec<VTest> {
    (0..n)
        .map(|i| {
            let theta = std::f64::consts::PI * 2. * (i as f64) / (n as f64);
            let (sin, cos) = theta.sin_cos();
            (cos * radius, sin * radius).into()
        })
        .collect()
}

/// A counterclockwise polygon which is star-shaped around the origin.
///
/// Each vertex gets its own angular sector, so the contour never self-intersects.
pub fn star_shaped(radii_and_jitter: &[(f64, f64)]) -> Vec<VTest> {
    let n = radii_and_jitter.len() as f64;
    radii_and_jitter
        .iter()
        .enumerate()
        .map(|(i, &(radius, jitter))| {
            let theta = std::f64::consts::PI * 2. * (i as f64 + jitter * 0.8) / n;
            let (sin, cos) = theta.sin_cos();
            (cos * radius, sin * radius).into()
        })
        .collect()
}

pub fn random_star_shaped<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<VTest> {
    let params: Vec<_> = (0..n).map(|_| (rng.gen_range(0.2..1.0), rng.gen_range(0.0..1.0))).collect();
    star_shaped(&params)
}

pub fn all() -> Vec<Vec<VTest>> {
    vec![square(), star(), dented_square(), comb(), u_shape(), regular(17, 10.)]
}
