//! Line segments entering the convergence pipeline.
//!
//! The upstream detector is external; it hands over either explicit
//! segments (two endpoints plus a normal angle) or polar Hough lines. This
//! module turns both into one frame-scoped list of [`LineSegment`]s:
//!
//! - Explicit segments shorter than `min_length_px` are dropped.
//! - Hough lines are kept only inside the oblique orientation windows, then
//!   clipped to the first and last image rows.
//! - Every surviving segment is translated by the configured ROI offset.
//!
//! Lines that cannot be represented with finite coordinates are skipped with
//! a debug log line; nothing here fails.

mod hough;
mod options;
mod segment;

pub use hough::HoughLine;
pub use options::SegmentFilterParams;
pub use segment::LineSegment;

use crate::types::FrameSegments;
use log::debug;

/// Counters describing what `gather_segments` kept and dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GatherStats {
    pub explicit_kept: usize,
    pub hough_kept: usize,
    pub rejected_short: usize,
    pub rejected_orientation: usize,
    pub rejected_degenerate: usize,
}

impl GatherStats {
    pub fn kept(&self) -> usize {
        self.explicit_kept + self.hough_kept
    }
}

/// Refills `out` with the frame's usable segments.
///
/// `out` is cleared first so the caller can reuse one buffer for every frame.
pub fn gather_segments(
    frame: &FrameSegments,
    params: &SegmentFilterParams,
    out: &mut Vec<LineSegment>,
) -> GatherStats {
    out.clear();
    let mut stats = GatherStats::default();

    for seg in &frame.segments {
        if !seg.is_finite() {
            stats.rejected_degenerate += 1;
            continue;
        }
        if seg.length() < params.min_length_px {
            stats.rejected_short += 1;
            continue;
        }
        out.push(seg.shifted(params.offset));
        stats.explicit_kept += 1;
    }

    let height = frame.height as f32;
    for line in &frame.hough_lines {
        if !params.orientation.contains(line.theta) {
            stats.rejected_orientation += 1;
            continue;
        }
        match line.to_segment(height) {
            Some(seg) => {
                out.push(seg.shifted(params.offset));
                stats.hough_kept += 1;
            }
            None => {
                debug!(
                    "segments: skipping degenerate Hough line rho={:.2} theta={:.4}",
                    line.rho, line.theta
                );
                stats.rejected_degenerate += 1;
            }
        }
    }

    stats
}

#[cfg(test)]
mod tests;
