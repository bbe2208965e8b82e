//! Pairwise intersection voting.
//!
//! Every unordered pair of segments in a frame is intersected on the infinite
//! lines. A pair votes only when it is convergent, meaning exactly one of the
//! two normal angles sits below `angle_threshold` (the lines lean in opposite
//! senses, like the two edges of a lane seen ahead), and when the
//! intersection lands inside the frame. A vote adds one count to the X
//! histogram at `floor(x)` and one to the Y histogram at `floor(y)`.
//!
//! The scan is O(n²) in the number of segments. With the `parallel` feature
//! the outer loop is split across rayon workers; each worker owns partial
//! histograms which are merged once all pairs are done, so the counts match
//! the sequential scan exactly.

mod histogram;

pub use histogram::VoteHistogram;

use crate::angle::straddles;
use crate::geometry::{intersect, Point};
use crate::segments::LineSegment;
use serde::Serialize;

/// Default convergence threshold on the Hough normal angle (≈ 84.8°).
pub const DEFAULT_ANGLE_THRESHOLD: f32 = 1.48;

/// Parameters of the intersection voter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VoterParams {
    pub angle_threshold: f32,
}

impl Default for VoterParams {
    fn default() -> Self {
        Self {
            angle_threshold: DEFAULT_ANGLE_THRESHOLD,
        }
    }
}

/// Transient result of intersecting two segments.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionCandidate {
    pub point: Point,
    pub angles: [f32; 2],
}

impl IntersectionCandidate {
    pub fn is_convergent(&self, threshold: f32) -> bool {
        straddles(self.angles[0], self.angles[1], threshold)
    }
}

/// X and Y vote histograms for one frame.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisVotes {
    pub x: VoteHistogram,
    pub y: VoteHistogram,
    /// Number of pairs that contributed a vote.
    pub votes: usize,
}

impl AxisVotes {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            x: VoteHistogram::new(width),
            y: VoteHistogram::new(height),
            votes: 0,
        }
    }

    /// Zeroes all counts and resizes to the frame dimensions.
    pub fn reset(&mut self, width: usize, height: usize) {
        self.x.reset(width);
        self.y.reset(height);
        self.votes = 0;
    }

    pub fn width(&self) -> usize {
        self.x.len()
    }

    pub fn height(&self) -> usize {
        self.y.len()
    }

    /// Records a vote if `point` lies inside the frame. Both axes are checked
    /// before either histogram is touched.
    #[inline]
    pub fn cast(&mut self, point: Point) -> bool {
        match (self.x.index_of(point[0]), self.y.index_of(point[1])) {
            (Some(ix), Some(iy)) => {
                self.x.increment(ix);
                self.y.increment(iy);
                self.votes += 1;
                true
            }
            _ => false,
        }
    }

    pub fn merge(&mut self, other: &AxisVotes) {
        self.x.merge(&other.x);
        self.y.merge(&other.y);
        self.votes += other.votes;
    }
}

/// Accumulates convergent segment-pair intersections into axis histograms.
#[derive(Clone, Debug, Default)]
pub struct IntersectionVoter {
    pub params: VoterParams,
}

impl IntersectionVoter {
    pub fn new(params: VoterParams) -> Self {
        Self { params }
    }

    /// Intersects two segments, carrying their angles along for the
    /// convergence test.
    pub fn candidate(&self, a: &LineSegment, b: &LineSegment) -> Option<IntersectionCandidate> {
        let point = intersect(a.p0, a.p1, b.p0, b.p1)?;
        Some(IntersectionCandidate {
            point,
            angles: [a.angle, b.angle],
        })
    }

    /// Votes over all segment pairs into freshly allocated histograms.
    pub fn vote(&self, segments: &[LineSegment], width: usize, height: usize) -> AxisVotes {
        let mut votes = AxisVotes::new(width, height);
        self.vote_into(segments, &mut votes);
        votes
    }

    /// Votes into `votes`, which must already be sized to the frame. Existing
    /// counts are cleared first.
    pub fn vote_into(&self, segments: &[LineSegment], votes: &mut AxisVotes) {
        let (width, height) = (votes.width(), votes.height());
        votes.reset(width, height);

        #[cfg(feature = "parallel")]
        {
            self.vote_parallel(segments, votes);
        }
        #[cfg(not(feature = "parallel"))]
        {
            for i in 0..segments.len() {
                self.vote_row(segments, i, votes);
            }
        }
    }

    /// Votes the pairs `(i, j)` for every `j > i`.
    fn vote_row(&self, segments: &[LineSegment], i: usize, votes: &mut AxisVotes) {
        let a = &segments[i];
        for b in &segments[i + 1..] {
            if let Some(cand) = self.candidate(a, b) {
                if cand.is_convergent(self.params.angle_threshold) {
                    votes.cast(cand.point);
                }
            }
        }
    }

    #[cfg(feature = "parallel")]
    fn vote_parallel(&self, segments: &[LineSegment], votes: &mut AxisVotes) {
        use rayon::prelude::*;

        let (width, height) = (votes.width(), votes.height());
        let merged = (0..segments.len())
            .into_par_iter()
            .fold(
                || AxisVotes::new(width, height),
                |mut acc, i| {
                    self.vote_row(segments, i, &mut acc);
                    acc
                },
            )
            .reduce(
                || AxisVotes::new(width, height),
                |mut a, b| {
                    a.merge(&b);
                    a
                },
            );
        votes.merge(&merged);
    }
}
