use lane_convergence::{FrameSegments, HoughLine, LineSegment};

pub const WIDTH: usize = 800;
pub const HEIGHT: usize = 600;

/// Lane edges converging on `vp`: two lines on each side, each represented by
/// a segment from the bottom row covering `reach` of the way to `vp`.
pub fn lane_segments(vp: [f32; 2], height: f32, reach: f32) -> Vec<LineSegment> {
    let bottoms = [
        vp[0] - 350.0,
        vp[0] - 300.0,
        vp[0] + 300.0,
        vp[0] + 350.0,
    ];
    bottoms
        .iter()
        .map(|&bx| {
            let p0 = [bx, height];
            let p1 = [bx + (vp[0] - bx) * reach, height + (vp[1] - height) * reach];
            LineSegment::from_endpoints(p0, p1)
        })
        .collect()
}

/// Frame whose lane edges meet at `vp`.
pub fn lane_frame(vp: [f32; 2]) -> FrameSegments {
    FrameSegments::with_segments(WIDTH, HEIGHT, lane_segments(vp, HEIGHT as f32, 0.4))
}

/// Frame with the vanishing point inside the default 800x600 band.
pub fn hit_frame() -> FrameSegments {
    lane_frame([400.5, 300.5])
}

/// Frame with a vanishing point well above the band.
pub fn high_frame() -> FrameSegments {
    lane_frame([400.5, 120.5])
}

/// Polar lines through `vp` at the given normal angles.
pub fn hough_lines_through(vp: [f32; 2], thetas: &[f32]) -> Vec<HoughLine> {
    thetas
        .iter()
        .map(|&theta| HoughLine::new(vp[0] * theta.cos() + vp[1] * theta.sin(), theta))
        .collect()
}
