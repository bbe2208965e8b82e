//! Hysteresis tracker over per-frame convergence points.
//!
//! Each frame is classified as a hit when the convergence point falls inside
//! the target band on the Y axis. Hits grow `hit_streak`; a miss during an
//! active streak only consumes one frame of grace (`miss_grace`), and the
//! streak is dropped once the grace is used up. The track counts as
//! confirmed while `hit_streak > confirm_threshold`.
//!
//! State machine, evaluated once per frame:
//!
//! | condition                                         | event           | effect                          |
//! |---------------------------------------------------|-----------------|---------------------------------|
//! | point inside band                                 | `Hit`           | `hit_streak += 1`, grace → 0    |
//! | `hit_streak > 0 && miss_grace < allowable_skip`   | `ToleratedMiss` | `miss_grace += 1`               |
//! | otherwise                                         | `Lost`          | both counters → 0               |

use crate::geometry::ConvergencePoint;
use serde::Serialize;

pub const DEFAULT_CONFIRM_THRESHOLD: u32 = 3;
pub const DEFAULT_ALLOWABLE_FRAME_SKIP: u32 = 5;
pub const DEFAULT_Y_SHIFT: i32 = 25;
pub const DEFAULT_BAND_HEIGHT: i32 = 50;

/// Tracker configuration; immutable for a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrackerParams {
    /// Confirmed once the hit streak exceeds this value.
    pub confirm_threshold: u32,
    /// Consecutive misses tolerated before a streak is dropped.
    pub allowable_frame_skip: u32,
    /// Offset of the band's lower edge below the frame's middle row.
    pub y_shift: i32,
    /// Band extent upward from its lower edge.
    pub band_height: i32,
}

impl Default for TrackerParams {
    fn default() -> Self {
        Self {
            confirm_threshold: DEFAULT_CONFIRM_THRESHOLD,
            allowable_frame_skip: DEFAULT_ALLOWABLE_FRAME_SKIP,
            y_shift: DEFAULT_Y_SHIFT,
            band_height: DEFAULT_BAND_HEIGHT,
        }
    }
}

/// Inclusive row interval a convergence point must fall into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TrackingBand {
    pub low: i32,
    pub high: i32,
}

impl TrackingBand {
    pub fn new(low: i32, high: i32) -> Self {
        Self { low, high }
    }

    /// `[height/2 + y_shift - band_height, height/2 + y_shift]`.
    pub fn from_frame_height(height: usize, y_shift: i32, band_height: i32) -> Self {
        let high = (height / 2) as i32 + y_shift;
        Self {
            low: high - band_height,
            high,
        }
    }

    #[inline]
    pub fn contains(&self, y: i32) -> bool {
        y >= self.low && y <= self.high
    }
}

/// Cross-frame counters; both start at zero and reset together.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerState {
    pub hit_streak: u32,
    pub miss_grace: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum TrackPhase {
    Idle,
    Accumulating,
    Confirmed,
}

impl TrackPhase {
    pub fn of(state: &TrackerState, confirm_threshold: u32) -> Self {
        match state.hit_streak {
            0 => TrackPhase::Idle,
            n if n > confirm_threshold => TrackPhase::Confirmed,
            _ => TrackPhase::Accumulating,
        }
    }
}

/// Which transition fired for a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum TrackerEvent {
    Hit,
    ToleratedMiss,
    Lost,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerUpdate {
    pub state: TrackerState,
    pub event: TrackerEvent,
    pub confirmed: bool,
}

/// Owns the only state that survives between frames.
#[derive(Clone, Debug, Default)]
pub struct TemporalTracker {
    params: TrackerParams,
    state: TrackerState,
}

impl TemporalTracker {
    pub fn new(params: TrackerParams) -> Self {
        Self {
            params,
            state: TrackerState::default(),
        }
    }

    pub fn params(&self) -> &TrackerParams {
        &self.params
    }

    pub fn state(&self) -> TrackerState {
        self.state
    }

    pub fn phase(&self) -> TrackPhase {
        TrackPhase::of(&self.state, self.params.confirm_threshold)
    }

    pub fn is_confirmed(&self) -> bool {
        self.state.hit_streak > self.params.confirm_threshold
    }

    /// Band derived from the configured offsets for a frame of `height` rows.
    pub fn band_for_height(&self, height: usize) -> TrackingBand {
        TrackingBand::from_frame_height(height, self.params.y_shift, self.params.band_height)
    }

    pub fn reset(&mut self) {
        self.state = TrackerState::default();
    }

    /// Classifies the frame's point against `band` and advances the state.
    pub fn update(&mut self, point: Option<ConvergencePoint>, band: TrackingBand) -> TrackerUpdate {
        let hit = point.is_some_and(|p| band.contains(p.y));
        self.observe(hit)
    }

    /// Advances the state machine by one frame given its hit/miss outcome.
    pub fn observe(&mut self, hit: bool) -> TrackerUpdate {
        let event = if hit {
            self.state.hit_streak = self.state.hit_streak.saturating_add(1);
            self.state.miss_grace = 0;
            TrackerEvent::Hit
        } else if self.state.hit_streak > 0
            && self.state.miss_grace < self.params.allowable_frame_skip
        {
            self.state.miss_grace += 1;
            TrackerEvent::ToleratedMiss
        } else {
            self.state = TrackerState::default();
            TrackerEvent::Lost
        };
        TrackerUpdate {
            state: self.state,
            event,
            confirmed: self.is_confirmed(),
        }
    }
}
