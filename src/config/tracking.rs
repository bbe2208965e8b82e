use crate::angle::ObliqueWindow;
use crate::detector::{DetectorParams, ModeParams};
use crate::segments::SegmentFilterParams;
use crate::tracker::TrackerParams;
use crate::vote::VoterParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct TrackDemoConfig {
    /// JSON file holding the frame sequence.
    pub input: PathBuf,
    #[serde(default)]
    pub detector: DetectorConfig,
    pub output: TrackOutputConfig,
}

/// Optional overrides on top of [`DetectorParams::default`].
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct DetectorConfig {
    /// Convergence threshold on segment normal angles (radians).
    pub angle_threshold: Option<f32>,
    /// Window width for per-axis mode extraction (pixels).
    pub mode_tolerance: Option<usize>,
    /// Explicit segments shorter than this are ignored (pixels).
    pub min_segment_length: Option<f32>,
    /// Offset added to every segment, `[dx, dy]`.
    pub roi_offset: Option<[f32; 2]>,
    /// Accepted Hough angle windows, `[low, high]` each, exclusive.
    pub hough_leading_window: Option<[f32; 2]>,
    pub hough_trailing_window: Option<[f32; 2]>,
    pub confirm_threshold: Option<u32>,
    pub allowable_frame_skip: Option<u32>,
    /// Band lower edge below the middle row.
    pub y_shift: Option<i32>,
    pub band_height: Option<i32>,
}

impl DetectorConfig {
    pub fn resolve(&self) -> DetectorParams {
        let defaults = DetectorParams::default();
        let window = defaults.segment_filter.orientation;
        let [dx, dy] = self.roi_offset.unwrap_or(defaults.segment_filter.offset);
        DetectorParams {
            segment_filter: SegmentFilterParams {
                orientation: ObliqueWindow {
                    leading: self
                        .hough_leading_window
                        .map_or(window.leading, |[lo, hi]| (lo, hi)),
                    trailing: self
                        .hough_trailing_window
                        .map_or(window.trailing, |[lo, hi]| (lo, hi)),
                },
                ..defaults.segment_filter
            }
            .with_min_length(
                self.min_segment_length
                    .unwrap_or(defaults.segment_filter.min_length_px),
            )
            .with_offset(dx, dy),
            voter: VoterParams {
                angle_threshold: self
                    .angle_threshold
                    .unwrap_or(defaults.voter.angle_threshold),
            },
            mode: ModeParams {
                tolerance: self.mode_tolerance.unwrap_or(defaults.mode.tolerance),
            },
            tracker: TrackerParams {
                confirm_threshold: self
                    .confirm_threshold
                    .unwrap_or(defaults.tracker.confirm_threshold),
                allowable_frame_skip: self
                    .allowable_frame_skip
                    .unwrap_or(defaults.tracker.allowable_frame_skip),
                y_shift: self.y_shift.unwrap_or(defaults.tracker.y_shift),
                band_height: self.band_height.unwrap_or(defaults.tracker.band_height),
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TrackOutputConfig {
    pub result_json: PathBuf,
}

pub fn load_config(path: &Path) -> Result<TrackDemoConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub fn parse_config(data: &str) -> Result<TrackDemoConfig, serde_json::Error> {
    serde_json::from_str(data)
}
