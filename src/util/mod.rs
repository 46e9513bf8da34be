//! Shared utilities for the viewer.

/// Per-frame delta-time measurement and smoothed FPS.
pub mod frame_timing;

pub use frame_timing::FrameClock;
