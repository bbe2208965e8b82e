use crate::angle::ObliqueWindow;

/// Options controlling which incoming lines reach the intersection voter.
///
/// - `orientation`: polar Hough lines outside these angular windows are
///   dropped as near-vertical or near-horizontal clutter.
/// - `min_length_px`: explicit segments shorter than this are dropped; `0`
///   keeps everything.
/// - `offset`: translation added to every segment, used when the detector ran
///   on a region of interest rather than the full frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentFilterParams {
    pub orientation: ObliqueWindow,
    pub min_length_px: f32,
    pub offset: [f32; 2],
}

impl Default for SegmentFilterParams {
    fn default() -> Self {
        Self {
            orientation: ObliqueWindow::default(),
            min_length_px: 0.0,
            offset: [0.0, 0.0],
        }
    }
}

impl SegmentFilterParams {
    pub fn with_offset(mut self, dx: f32, dy: f32) -> Self {
        self.offset = [dx, dy];
        self
    }

    pub fn with_min_length(mut self, min_length_px: f32) -> Self {
        self.min_length_px = min_length_px;
        self
    }
}
