use glam::Vec2;
use winit::keyboard::KeyCode;

/// Immutable per-frame view of the input surface, consumed by
/// [`CameraController::advance`](crate::camera::CameraController::advance).
///
/// The four directional booleans reflect key state at snapshot time; the
/// pointer delta is the relative motion accumulated since the previous
/// snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    /// W held.
    pub forward: bool,
    /// S held.
    pub back: bool,
    /// A held.
    pub strafe_left: bool,
    /// D held.
    pub strafe_right: bool,
    /// Relative pointer motion since the last snapshot, in pixels.
    pub pointer_delta: Vec2,
}

/// Accumulates raw window/device input between frames.
///
/// Key events toggle the directional booleans; raw mouse motion adds into
/// the pointer delta. [`snapshot`](Self::snapshot) drains the delta so each
/// frame sees only the motion that happened during it.
#[derive(Debug, Default)]
pub struct InputState {
    forward: bool,
    back: bool,
    strafe_left: bool,
    strafe_right: bool,
    pointer_delta: Vec2,
}

impl InputState {
    /// Create an input state with no keys held and no pending motion.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press or release. Returns `true` if the key is one the
    /// viewer consumes.
    pub fn handle_key(&mut self, code: KeyCode, pressed: bool) -> bool {
        match code {
            KeyCode::KeyW => self.forward = pressed,
            KeyCode::KeyS => self.back = pressed,
            KeyCode::KeyA => self.strafe_left = pressed,
            KeyCode::KeyD => self.strafe_right = pressed,
            _ => return false,
        }
        true
    }

    /// Accumulate a relative pointer motion event.
    pub fn accumulate_pointer(&mut self, dx: f64, dy: f64) {
        self.pointer_delta += Vec2::new(dx as f32, dy as f32);
    }

    /// Produce this frame's snapshot and reset the pointer delta. Key
    /// state carries over until the matching release event arrives.
    pub fn snapshot(&mut self) -> InputSnapshot {
        let snapshot = InputSnapshot {
            forward: self.forward,
            back: self.back,
            strafe_left: self.strafe_left,
            strafe_right: self.strafe_right,
            pointer_delta: self.pointer_delta,
        };
        self.pointer_delta = Vec2::ZERO;
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_drains_pointer_delta() {
        let mut input = InputState::new();
        input.accumulate_pointer(3.0, -2.0);
        input.accumulate_pointer(1.0, 1.0);
        let first = input.snapshot();
        assert_eq!(first.pointer_delta, Vec2::new(4.0, -1.0));
        let second = input.snapshot();
        assert_eq!(second.pointer_delta, Vec2::ZERO);
    }

    #[test]
    fn key_state_persists_across_snapshots() {
        let mut input = InputState::new();
        assert!(input.handle_key(KeyCode::KeyW, true));
        assert!(input.snapshot().forward);
        assert!(input.snapshot().forward);
        assert!(input.handle_key(KeyCode::KeyW, false));
        assert!(!input.snapshot().forward);
    }

    #[test]
    fn unbound_keys_are_not_consumed() {
        let mut input = InputState::new();
        assert!(!input.handle_key(KeyCode::KeyQ, true));
        assert_eq!(input.snapshot(), InputSnapshot::default());
    }
}
