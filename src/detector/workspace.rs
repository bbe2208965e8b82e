//! Frame-scoped buffers reused across frames.
//!
//! The segment list and both vote histograms are allocated once and cleared
//! at the start of every frame, so steady-state processing does not allocate
//! unless the frame size grows.
use crate::segments::LineSegment;
use crate::vote::AxisVotes;

#[derive(Debug, Default)]
pub struct FrameWorkspace {
    pub(super) segments: Vec<LineSegment>,
    pub(super) votes: AxisVotes,
}

impl FrameWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the segment list and zeroes histograms sized to the frame.
    pub fn reset(&mut self, width: usize, height: usize) {
        self.segments.clear();
        self.votes.reset(width, height);
    }

    pub fn votes(&self) -> &AxisVotes {
        &self.votes
    }
}
