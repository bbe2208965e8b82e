//! Per-frame pipeline: segments → votes → point → tracker.
//!
//! ```no_run
//! use lane_convergence::{ConvergenceDetector, DetectorParams, FrameSegments};
//!
//! # fn example(frames: Vec<FrameSegments>) {
//! let mut detector = ConvergenceDetector::new(DetectorParams::default());
//! for frame in &frames {
//!     let res = detector.process(frame);
//!     if res.confirmed {
//!         println!("tracking at {:?}", res.point);
//!     }
//! }
//! # }
//! ```

use super::params::DetectorParams;
use super::workspace::FrameWorkspace;
use crate::diagnostics::{elapsed_ms, FrameReport, TimingBreakdown};
use crate::estimator::ConvergenceEstimator;
use crate::segments::gather_segments;
use crate::tracker::{TemporalTracker, TrackPhase};
use crate::types::{FrameResult, FrameSegments};
use crate::vote::{AxisVotes, IntersectionVoter};
use log::debug;
use std::time::Instant;

/// Frame-by-frame convergence detector with hysteresis tracking.
///
/// Frames must be fed in arrival order; the tracker is the only state that
/// carries over between calls.
pub struct ConvergenceDetector {
    params: DetectorParams,
    voter: IntersectionVoter,
    estimator: ConvergenceEstimator,
    tracker: TemporalTracker,
    workspace: FrameWorkspace,
    frames_processed: u64,
}

impl ConvergenceDetector {
    pub fn new(params: DetectorParams) -> Self {
        Self {
            voter: IntersectionVoter::new(params.voter),
            estimator: ConvergenceEstimator::new(params.mode.tolerance),
            tracker: TemporalTracker::new(params.tracker),
            workspace: FrameWorkspace::new(),
            frames_processed: 0,
            params,
        }
    }

    pub fn params(&self) -> &DetectorParams {
        &self.params
    }

    pub fn tracker(&self) -> &TemporalTracker {
        &self.tracker
    }

    /// Vote histograms of the most recently processed frame.
    pub fn last_votes(&self) -> &AxisVotes {
        self.workspace.votes()
    }

    pub fn frames_processed(&self) -> u64 {
        self.frames_processed
    }

    /// Drops any streak and restarts frame numbering.
    pub fn reset(&mut self) {
        self.tracker.reset();
        self.frames_processed = 0;
    }

    /// Process one frame and return its point and tracking flag.
    pub fn process(&mut self, frame: &FrameSegments) -> FrameResult {
        self.process_detailed(frame).result
    }

    /// Process one frame and keep segment counters, band and stage timings.
    pub fn process_detailed(&mut self, frame: &FrameSegments) -> FrameReport {
        let total_start = Instant::now();
        let mut timing = TimingBreakdown::default();
        let frame_index = self.frames_processed;
        self.frames_processed += 1;

        let stage = Instant::now();
        self.workspace.reset(frame.width, frame.height);
        let gather = gather_segments(
            frame,
            &self.params.segment_filter,
            &mut self.workspace.segments,
        );
        timing.push_since("gather", stage);

        let stage = Instant::now();
        self.voter
            .vote_into(&self.workspace.segments, &mut self.workspace.votes);
        timing.push_since("vote", stage);

        let stage = Instant::now();
        let point = self.estimator.estimate(&self.workspace.votes);
        timing.push_since("estimate", stage);

        let stage = Instant::now();
        let band = self.tracker.band_for_height(frame.height);
        let update = self.tracker.update(point, band);
        timing.push_since("track", stage);

        let latency_ms = elapsed_ms(total_start);
        timing.total_ms = latency_ms;

        let vote_count = self.workspace.votes.votes;
        debug!(
            "detector: frame={} segments={} votes={} point={:?} event={:?} streak={} grace={} confirmed={}",
            frame_index,
            gather.kept(),
            vote_count,
            point,
            update.event,
            update.state.hit_streak,
            update.state.miss_grace,
            update.confirmed
        );

        FrameReport {
            frame_index,
            width: frame.width,
            height: frame.height,
            band,
            segment_counts: gather.into(),
            result: FrameResult {
                point,
                confirmed: update.confirmed,
                state: update.state,
                phase: TrackPhase::of(&update.state, self.params.tracker.confirm_threshold),
                event: update.event,
                segment_count: gather.kept(),
                vote_count,
                latency_ms,
            },
            timing,
        }
    }
}
