use super::segment::LineSegment;
use crate::angle::normalize_half_pi;
use serde::{Deserialize, Serialize};

/// Polar line `x cos θ + y sin θ = ρ` as reported by a standard Hough
/// transform.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HoughLine {
    pub rho: f32,
    pub theta: f32,
}

impl HoughLine {
    pub fn new(rho: f32, theta: f32) -> Self {
        Self { rho, theta }
    }

    /// Column where the line crosses row `y`, if the line is not horizontal.
    pub fn x_at_row(&self, y: f32) -> Option<f32> {
        let c = self.theta.cos();
        if c == 0.0 {
            return None;
        }
        let x = (self.rho - y * self.theta.sin()) / c;
        x.is_finite().then_some(x)
    }

    /// Clips the line to the first and last image rows.
    ///
    /// The resulting segment keeps `theta` as its angle. Returns `None` for
    /// lines that never cross those rows at a finite column.
    pub fn to_segment(&self, height: f32) -> Option<LineSegment> {
        let top = self.x_at_row(0.0)?;
        let bottom = self.x_at_row(height)?;
        Some(LineSegment::new(
            [top, 0.0],
            [bottom, height],
            normalize_half_pi(self.theta),
        ))
    }
}
