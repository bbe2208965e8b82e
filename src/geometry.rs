//! Point representation and the line-line intersection test.
//!
//! Intersections are computed on the infinite lines through two segments:
//! each segment only contributes a fixed point and a direction. Two diverging
//! lane-edge rays therefore "meet" even when the visible pieces never cross,
//! which is exactly what a vanishing point estimate needs.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Pixel coordinate pair `(x, y)`.
pub type Point = [f32; 2];

/// Integer pixel location of an estimated convergence point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConvergencePoint {
    pub x: i32,
    pub y: i32,
}

impl ConvergencePoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// 2-D cross product `v1.x * v2.y - v1.y * v2.x`.
#[inline]
pub fn cross(v1: &Vector2<f32>, v2: &Vector2<f32>) -> f32 {
    v1.perp(v2)
}

/// Intersects the infinite line through `a1 -> a2` with the one through
/// `b1 -> b2`.
///
/// Returns `None` when the direction vectors have an exactly zero cross
/// product (parallel or coincident lines). The returned point need not lie
/// inside either segment.
pub fn intersect(a1: Point, a2: Point, b1: Point, b2: Point) -> Option<Point> {
    let p = Vector2::from(a1);
    let q = Vector2::from(b1);
    let r = Vector2::from(a2) - p;
    let s = Vector2::from(b2) - q;

    let denom = cross(&r, &s);
    if denom == 0.0 {
        return None;
    }
    let t = cross(&(q - p), &s) / denom;
    let hit = p + r * t;
    Some([hit.x, hit.y])
}
