use super::*;
use crate::angle::ObliqueWindow;
use crate::types::FrameSegments;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn hough_line_is_clipped_to_first_and_last_rows() {
    let theta = 0.6f32;
    let rho = 250.0f32;
    let seg = HoughLine::new(rho, theta).to_segment(600.0).expect("segment");
    assert!(approx_eq(seg.p0[0], rho / theta.cos()));
    assert!(approx_eq(seg.p0[1], 0.0));
    assert!(approx_eq(
        seg.p1[0],
        (rho - 600.0 * theta.sin()) / theta.cos()
    ));
    assert!(approx_eq(seg.p1[1], 600.0));
    assert!(approx_eq(seg.angle, theta));
}

#[test]
fn from_endpoints_uses_normal_angle() {
    // Left lane edge rising to the right: normal at 45 degrees.
    let left = LineSegment::from_endpoints([100.0, 600.0], [400.0, 300.0]);
    assert!(approx_eq(left.angle, std::f32::consts::FRAC_PI_4));
    // Right lane edge rising to the left: normal at 135 degrees.
    let right = LineSegment::from_endpoints([700.0, 600.0], [400.0, 300.0]);
    assert!(approx_eq(right.angle, 3.0 * std::f32::consts::FRAC_PI_4));
}

#[test]
fn shifted_moves_both_endpoints() {
    let seg = LineSegment::new([1.0, 2.0], [3.0, 4.0], 0.5).shifted([10.0, 20.0]);
    assert_eq!(seg.p0, [11.0, 22.0]);
    assert_eq!(seg.p1, [13.0, 24.0]);
    assert_eq!(seg.angle, 0.5);
}

#[test]
fn gather_applies_filters_and_offset() {
    let frame = FrameSegments {
        width: 800,
        height: 600,
        segments: vec![
            LineSegment::from_endpoints([100.0, 600.0], [400.0, 300.0]),
            LineSegment::from_endpoints([0.0, 0.0], [1.0, 1.0]),
            LineSegment::new([f32::NAN, 0.0], [1.0, 1.0], 0.3),
        ],
        hough_lines: vec![
            HoughLine::new(300.0, 0.8),
            HoughLine::new(300.0, 0.02),
            HoughLine::new(300.0, std::f32::consts::FRAC_PI_2),
        ],
    };
    let params = SegmentFilterParams {
        orientation: ObliqueWindow::default(),
        min_length_px: 5.0,
        offset: [0.0, 2.0],
    };
    let mut out = vec![LineSegment::new([9.0, 9.0], [9.0, 9.0], 0.0)];
    let stats = gather_segments(&frame, &params, &mut out);

    assert_eq!(out.len(), 2);
    assert_eq!(stats.kept(), 2);
    assert_eq!(stats.explicit_kept, 1);
    assert_eq!(stats.hough_kept, 1);
    assert_eq!(stats.rejected_short, 1);
    assert_eq!(stats.rejected_degenerate, 1);
    assert_eq!(stats.rejected_orientation, 2);
    assert_eq!(out[0].p0, [100.0, 602.0]);
    assert!(approx_eq(out[1].p0[1], 2.0));
}

#[test]
fn empty_frame_yields_no_segments() {
    let frame = FrameSegments::empty(640, 480);
    let mut out = Vec::new();
    let stats = gather_segments(&frame, &SegmentFilterParams::default(), &mut out);
    assert!(out.is_empty());
    assert_eq!(stats, GatherStats::default());
}
