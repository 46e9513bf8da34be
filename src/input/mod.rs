//! Input handling: key-state tracking and per-frame pointer-delta
//! accumulation consumed by the camera controller.

/// Key booleans and relative pointer delta, drained once per frame.
pub mod state;

pub use state::{InputSnapshot, InputState};
