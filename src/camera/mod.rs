//! Fly camera for first-person scene navigation.
//!
//! Provides the camera state (position + yaw/pitch with a derived
//! orthonormal basis) and the controller that integrates per-frame input
//! into it.

/// Input integration: translation and look rotation per frame.
pub mod controller;
/// Core camera struct and GPU uniform types.
pub mod core;

pub use self::controller::CameraController;
pub use self::core::{Camera, CameraUniform};
