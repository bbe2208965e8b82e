//! Serializable per-frame reports and run summaries.
//!
//! [`FrameReport`] is what the detector emits when asked for details: the
//! frame result plus segment bookkeeping, the band used for hit testing and
//! stage timings. [`TrackingReport`] collects the reports of a whole run
//! together with a few aggregate counters.

mod timing;

pub use timing::{elapsed_ms, StageTiming, TimingBreakdown};

use crate::segments::GatherStats;
use crate::tracker::TrackingBand;
use crate::types::FrameResult;
use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentCounts {
    pub explicit_kept: usize,
    pub hough_kept: usize,
    pub rejected_short: usize,
    pub rejected_orientation: usize,
    pub rejected_degenerate: usize,
}

impl From<GatherStats> for SegmentCounts {
    fn from(stats: GatherStats) -> Self {
        Self {
            explicit_kept: stats.explicit_kept,
            hough_kept: stats.hough_kept,
            rejected_short: stats.rejected_short,
            rejected_orientation: stats.rejected_orientation,
            rejected_degenerate: stats.rejected_degenerate,
        }
    }
}

/// Detailed outcome of one processed frame.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameReport {
    pub frame_index: u64,
    pub width: usize,
    pub height: usize,
    pub band: TrackingBand,
    pub segment_counts: SegmentCounts,
    #[serde(flatten)]
    pub result: FrameResult,
    pub timing: TimingBreakdown,
}

/// Report for a sequence of frames processed in order.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingReport {
    pub frame_count: usize,
    pub frames_with_point: usize,
    pub confirmed_frames: usize,
    /// Index of the first frame reported as confirmed, if any.
    pub first_confirmed_frame: Option<u64>,
    pub total_ms: f64,
    pub frames: Vec<FrameReport>,
}

impl TrackingReport {
    pub fn push(&mut self, report: FrameReport) {
        self.frame_count += 1;
        if report.result.point.is_some() {
            self.frames_with_point += 1;
        }
        if report.result.confirmed {
            self.confirmed_frames += 1;
            if self.first_confirmed_frame.is_none() {
                self.first_confirmed_frame = Some(report.frame_index);
            }
        }
        self.total_ms += report.timing.total_ms;
        self.frames.push(report);
    }
}
