use crate::geometry::ConvergencePoint;
use crate::segments::{HoughLine, LineSegment};
use crate::tracker::{TrackPhase, TrackerEvent, TrackerState};
use serde::{Deserialize, Serialize};

/// Everything the external line detector reports for one frame.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameSegments {
    pub width: usize,
    pub height: usize,
    #[serde(default)]
    pub segments: Vec<LineSegment>,
    #[serde(default)]
    pub hough_lines: Vec<HoughLine>,
}

impl FrameSegments {
    pub fn empty(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            segments: Vec::new(),
            hough_lines: Vec::new(),
        }
    }

    pub fn with_segments(width: usize, height: usize, segments: Vec<LineSegment>) -> Self {
        Self {
            width,
            height,
            segments,
            hough_lines: Vec::new(),
        }
    }
}

/// Per-frame output of the convergence detector.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameResult {
    pub point: Option<ConvergencePoint>,
    pub confirmed: bool,
    pub state: TrackerState,
    pub phase: TrackPhase,
    pub event: TrackerEvent,
    pub segment_count: usize,
    pub vote_count: usize,
    pub latency_ms: f64,
}
