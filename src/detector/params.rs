//! Parameter types configuring the detector stages.
//!
//! Defaults reproduce the reference lane setup: a 1.48 rad convergence
//! threshold, 2-pixel mode windows, a band 50 rows tall whose lower edge
//! sits 25 rows below the frame middle, confirmation after more than 3 hits
//! and a grace of 5 missed frames.

use crate::estimator::DEFAULT_MODE_TOLERANCE;
use crate::segments::SegmentFilterParams;
use crate::tracker::TrackerParams;
use crate::vote::VoterParams;

/// Detector-wide parameters; fixed for the lifetime of a detector.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DetectorParams {
    /// Which incoming lines reach the voter, and the ROI offset.
    pub segment_filter: SegmentFilterParams,
    /// Convergence filter applied to every intersecting pair.
    pub voter: VoterParams,
    /// Mode extraction settings.
    pub mode: ModeParams,
    /// Hysteresis settings and target band.
    pub tracker: TrackerParams,
}

/// Window width used when extracting per-axis modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModeParams {
    pub tolerance: usize,
}

impl Default for ModeParams {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_MODE_TOLERANCE,
        }
    }
}
