use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::error::IrisGeometryError;

/// Inclusion tolerance for the enclosing-circle test, in pixels.
const CONTAIN_EPS: f32 = 1e-4;

/// A circle in pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point2<f32>,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Point2<f32>, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Center rounded to integer pixel coordinates, for drawing.
    pub fn center_rounded(&self) -> (i32, i32) {
        (
            self.center.x.round() as i32,
            self.center.y.round() as i32,
        )
    }

    /// Whether `p` lies inside the circle, within tolerance.
    pub fn contains(&self, p: Point2<f32>) -> bool {
        let d = self.center - p;
        d.norm() <= self.radius + CONTAIN_EPS
    }
}

fn circle_from_two(a: Point2<f32>, b: Point2<f32>) -> Circle {
    let center = nalgebra::center(&a, &b);
    Circle::new(center, (a - b).norm() * 0.5)
}

/// Circumcircle of a non-collinear triple; `None` when (nearly) collinear.
fn circumcircle(a: Point2<f32>, b: Point2<f32>, c: Point2<f32>) -> Option<Circle> {
    let abx = b.x - a.x;
    let aby = b.y - a.y;
    let acx = c.x - a.x;
    let acy = c.y - a.y;
    let d = 2.0 * (abx * acy - aby * acx);
    if d.abs() < 1e-9 {
        return None;
    }
    let ab2 = abx * abx + aby * aby;
    let ac2 = acx * acx + acy * acy;
    let ux = (acy * ab2 - aby * ac2) / d;
    let uy = (abx * ac2 - acx * ab2) / d;
    let center = Point2::new(a.x + ux, a.y + uy);
    Some(Circle::new(center, (center - a).norm()))
}

/// Smallest circle through `p` and `q` that also covers `points`.
fn enclosing_with_two(points: &[Point2<f32>], p: Point2<f32>, q: Point2<f32>) -> Circle {
    let mut circle = circle_from_two(p, q);
    for &r in points {
        if circle.contains(r) {
            continue;
        }
        match circumcircle(p, q, r) {
            Some(c) => circle = c,
            // Collinear triple: the widest pair spans all three.
            None => {
                for cand in [circle_from_two(p, r), circle_from_two(q, r)] {
                    if cand.radius > circle.radius {
                        circle = cand;
                    }
                }
            }
        }
    }
    circle
}

/// Smallest circle with `q` on its boundary covering `points`.
fn enclosing_with_one(points: &[Point2<f32>], q: Point2<f32>) -> Circle {
    let mut circle = Circle::new(q, 0.0);
    for (j, &p) in points.iter().enumerate() {
        if !circle.contains(p) {
            circle = enclosing_with_two(&points[..j], p, q);
        }
    }
    circle
}

/// Minimum enclosing circle of a point set (incremental Welzl over the
/// fixed input order, no shuffling, so results are deterministic).
///
/// A single point yields a zero-radius circle centered on it; an empty
/// slice is an error.
pub fn min_enclosing_circle(points: &[Point2<f32>]) -> Result<Circle, IrisGeometryError> {
    let (&first, rest) = points
        .split_first()
        .ok_or(IrisGeometryError::EmptyPointSet)?;

    let mut circle = Circle::new(first, 0.0);
    for (i, &p) in rest.iter().enumerate() {
        if !circle.contains(p) {
            circle = enclosing_with_one(&points[..=i], p);
        }
    }
    Ok(circle)
}
