#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod detector;
pub mod diagnostics;
pub mod geometry;
pub mod tracker;
pub mod types;

// Building blocks – public so callers can run single stages on their own
// segment sets.
pub mod angle;
pub mod estimator;
pub mod mode;
pub mod segments;
pub mod vote;

// Tooling
pub mod config;
pub mod io;
pub mod logger;

// --- High-level re-exports -------------------------------------------------

pub use crate::detector::{ConvergenceDetector, DetectorParams};
pub use crate::geometry::ConvergencePoint;
pub use crate::types::{FrameResult, FrameSegments};

pub use crate::estimator::ConvergenceEstimator;
pub use crate::mode::{extract_mode, MODE_NOT_FOUND};
pub use crate::segments::{HoughLine, LineSegment};
pub use crate::tracker::{TemporalTracker, TrackerParams, TrackerState, TrackingBand};
pub use crate::vote::{AxisVotes, IntersectionVoter, VoteHistogram};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use lane_convergence::prelude::*;
///
/// # fn main() {
/// let segments = vec![
///     LineSegment::from_endpoints([100.0, 600.0], [200.0, 500.0]),
///     LineSegment::from_endpoints([700.0, 600.0], [600.0, 500.0]),
/// ];
/// let frame = FrameSegments::with_segments(800, 600, segments);
///
/// let mut det = ConvergenceDetector::new(DetectorParams::default());
/// let res = det.process(&frame);
/// println!("point={:?} confirmed={}", res.point, res.confirmed);
/// # }
/// ```
pub mod prelude {
    pub use crate::segments::{HoughLine, LineSegment};
    pub use crate::{ConvergenceDetector, DetectorParams, FrameResult, FrameSegments};
}
