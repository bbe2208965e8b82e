use crate::angle::normal_angle;
use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Line segment handed over by the upstream line detector.
///
/// `angle` is the Hough normal angle of the supporting line in [0, π); it is
/// what the convergence filter compares, the endpoints only fix the line.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub p0: Point,
    pub p1: Point,
    pub angle: f32,
}

impl LineSegment {
    pub fn new(p0: Point, p1: Point, angle: f32) -> Self {
        Self { p0, p1, angle }
    }

    /// Builds a segment whose angle is derived from the endpoint direction.
    pub fn from_endpoints(p0: Point, p1: Point) -> Self {
        let dir = [p1[0] - p0[0], p1[1] - p0[1]];
        Self::new(p0, p1, normal_angle(dir))
    }

    pub fn length(&self) -> f32 {
        let dx = self.p1[0] - self.p0[0];
        let dy = self.p1[1] - self.p0[1];
        (dx * dx + dy * dy).sqrt()
    }

    /// Translates both endpoints, e.g. from ROI to full-frame coordinates.
    pub fn shifted(&self, offset: [f32; 2]) -> Self {
        Self {
            p0: [self.p0[0] + offset[0], self.p0[1] + offset[1]],
            p1: [self.p1[0] + offset[0], self.p1[1] + offset[1]],
            angle: self.angle,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.p0.iter().chain(self.p1.iter()).all(|v| v.is_finite()) && self.angle.is_finite()
    }
}
