//! Lane convergence detector orchestrating the per-frame pipeline.
//!
//! Overview
//! - Gathers the frame's segments (explicit segments and clipped Hough
//!   lines) into a reusable buffer, applying length/orientation filters and
//!   the ROI offset.
//! - Votes every convergent segment pair into X and Y histograms sized to the
//!   frame.
//! - Extracts the windowed mode of each histogram; both must exist for the
//!   frame to have a convergence point.
//! - Feeds the optional point to the hysteresis tracker, which decides
//!   whether the track is confirmed.
//!
//! Modules
//! - [`params`] – configuration types used by the detector and demo tool.
//! - `pipeline` – the [`ConvergenceDetector`] implementation.
//! - `workspace` – frame-scoped buffers reused across frames.

pub mod params;
mod pipeline;
mod workspace;

pub use params::{DetectorParams, ModeParams};
pub use pipeline::ConvergenceDetector;
pub use workspace::FrameWorkspace;
