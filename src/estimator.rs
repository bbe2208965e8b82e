//! Combines the per-axis modes into a single convergence point.
//!
//! X and Y are estimated independently, so the returned point is the pair of
//! marginal modes and need not coincide with any single recorded
//! intersection.

use crate::geometry::ConvergencePoint;
use crate::mode::find_mode;
use crate::vote::AxisVotes;
use log::debug;

/// Default window width (pixels) for mode extraction.
pub const DEFAULT_MODE_TOLERANCE: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConvergenceEstimator {
    pub tolerance: usize,
}

impl Default for ConvergenceEstimator {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_MODE_TOLERANCE,
        }
    }
}

impl ConvergenceEstimator {
    pub fn new(tolerance: usize) -> Self {
        Self { tolerance }
    }

    /// Returns the point only when both axes produced a mode.
    pub fn estimate(&self, votes: &AxisVotes) -> Option<ConvergencePoint> {
        match (
            find_mode(votes.x.bins(), self.tolerance),
            find_mode(votes.y.bins(), self.tolerance),
        ) {
            (Some(x), Some(y)) => Some(ConvergencePoint::new(x as i32, y as i32)),
            (x, y) => {
                debug!(
                    "estimator: no convergence point (votes={} x={:?} y={:?})",
                    votes.votes, x, y
                );
                None
            }
        }
    }
}
