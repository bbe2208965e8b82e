//! Angle utilities shared by the segment sources and the convergence filter.
//!
//! Angles follow the Hough convention: a line's angle is the direction of its
//! normal, taken modulo π. A vertical image line has angle 0, a horizontal
//! one π/2.

use std::f32::consts::{FRAC_PI_2, PI};

/// Normalizes an angle into the range [0, π).
#[inline]
pub fn normalize_half_pi(angle: f32) -> f32 {
    let mut norm = angle.rem_euclid(PI);
    if norm >= PI {
        norm -= PI;
    }
    if norm >= PI - 1e-6 {
        0.0
    } else {
        norm
    }
}

/// Hough normal angle of the line running along `dir`, in [0, π).
#[inline]
pub fn normal_angle(dir: [f32; 2]) -> f32 {
    normalize_half_pi(dir[1].atan2(dir[0]) + FRAC_PI_2)
}

/// Open angular windows a polar line must fall into to count as a lane
/// candidate. Everything outside is treated as near-vertical or
/// near-horizontal clutter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObliqueWindow {
    /// Lines leaning one way: `(low, high)` exclusive.
    pub leading: (f32, f32),
    /// Lines leaning the other way: `(low, high)` exclusive.
    pub trailing: (f32, f32),
}

impl Default for ObliqueWindow {
    fn default() -> Self {
        Self {
            leading: (0.09, 1.48),
            trailing: (1.66, 3.14),
        }
    }
}

impl ObliqueWindow {
    /// True when `theta` lies strictly inside either window.
    #[inline]
    pub fn contains(&self, theta: f32) -> bool {
        let inside = |(lo, hi): (f32, f32)| theta > lo && theta < hi;
        inside(self.leading) || inside(self.trailing)
    }
}

/// True when exactly one of the two angles sits below `threshold`.
///
/// Two lane edges seen ahead of the camera lean in opposite senses, so their
/// normal angles land on opposite sides of the threshold.
#[inline]
pub fn straddles(theta1: f32, theta2: f32, threshold: f32) -> bool {
    (theta1 < threshold) != (theta2 < threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn normalize_half_pi_basic() {
        assert!(approx_eq(normalize_half_pi(0.5), 0.5));
        assert!(approx_eq(
            normalize_half_pi(-std::f32::consts::FRAC_PI_4),
            3.0 * std::f32::consts::FRAC_PI_4
        ));
        assert!(approx_eq(normalize_half_pi(PI), 0.0));
        assert!(approx_eq(normalize_half_pi(3.0 * PI), 0.0));
    }

    #[test]
    fn normal_angle_of_axis_aligned_lines() {
        // vertical image line -> normal points along x
        assert!(approx_eq(normal_angle([0.0, 1.0]), 0.0));
        assert!(approx_eq(normal_angle([0.0, -1.0]), 0.0));
        // horizontal image line -> normal points along y
        assert!(approx_eq(normal_angle([1.0, 0.0]), FRAC_PI_2));
        assert!(approx_eq(normal_angle([-1.0, 0.0]), FRAC_PI_2));
    }

    #[test]
    fn oblique_window_rejects_axis_aligned_angles() {
        let window = ObliqueWindow::default();
        assert!(!window.contains(0.0));
        assert!(!window.contains(0.05));
        assert!(!window.contains(FRAC_PI_2));
        assert!(!window.contains(3.141));
        assert!(window.contains(0.7));
        assert!(window.contains(2.4));
    }

    #[test]
    fn straddles_requires_opposite_sides() {
        assert!(straddles(0.8, 2.3, 1.48));
        assert!(straddles(2.3, 0.8, 1.48));
        assert!(straddles(1.47, 1.48, 1.48));
        assert!(!straddles(0.8, 1.0, 1.48));
        assert!(!straddles(2.0, 2.3, 1.48));
        assert!(!straddles(1.48, 1.48, 1.48));
    }
}
