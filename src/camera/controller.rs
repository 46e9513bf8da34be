use glam::Vec3;

use crate::camera::core::Camera;
use crate::input::InputSnapshot;
use crate::options::CameraOptions;

/// Integrates per-frame input into the camera.
///
/// Translation scales by the frame's delta time so motion is frame-rate
/// independent; rotation is a direct pointer-delta accumulation (pointer
/// motion is already a per-frame quantity).
pub struct CameraController {
    /// The camera being driven.
    pub camera: Camera,
    move_speed: f32,
    look_sensitivity: f32,
}

impl CameraController {
    /// Create a controller driving a default camera with the given motion
    /// parameters.
    #[must_use]
    pub fn new(options: &CameraOptions) -> Self {
        Self {
            camera: Camera::default(),
            move_speed: options.move_speed,
            look_sensitivity: options.look_sensitivity,
        }
    }

    /// Advance the camera by one frame.
    ///
    /// Translation uses the basis from before this frame's rotation, then
    /// the pointer delta is applied: horizontal motion adds to yaw,
    /// vertical motion subtracts from pitch (moving the pointer up looks
    /// up). The pitch clamp and basis rebuild run unconditionally inside
    /// [`Camera::rotate`], even for a zero delta.
    pub fn advance(&mut self, delta_time: f32, input: &InputSnapshot) {
        let step = self.move_speed * delta_time;
        let mut offset = Vec3::ZERO;
        if input.forward {
            offset += self.camera.forward() * step;
        }
        if input.back {
            offset -= self.camera.forward() * step;
        }
        if input.strafe_left {
            offset -= self.camera.right() * step;
        }
        if input.strafe_right {
            offset += self.camera.right() * step;
        }
        self.camera.translate(offset);

        let look = input.pointer_delta * self.look_sensitivity;
        self.camera.rotate(look.x, -look.y);
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;

    const TOL: f32 = 1e-5;

    fn controller() -> CameraController {
        CameraController::new(&CameraOptions::default())
    }

    #[test]
    fn zero_input_leaves_position_unchanged() {
        let mut ctl = controller();
        let start = ctl.camera.position();
        for dt in [0.0, 1.0 / 240.0, 1.0 / 30.0, 0.5, 10.0] {
            ctl.advance(dt, &InputSnapshot::default());
        }
        assert_eq!(ctl.camera.position(), start);
    }

    #[test]
    fn forward_moves_along_negative_z_at_default_facing() {
        // Default facing is yaw -90°, pitch 0° => forward = (0, 0, -1).
        let mut ctl = controller();
        let start = ctl.camera.position();
        let dt = 0.25;
        let input = InputSnapshot {
            forward: true,
            ..InputSnapshot::default()
        };
        ctl.advance(dt, &input);
        let moved = ctl.camera.position() - start;
        let expected = Vec3::new(0.0, 0.0, -2.0 * dt);
        assert!((moved - expected).length() < TOL, "moved {moved}");
    }

    #[test]
    fn motion_scales_linearly_with_delta_time() {
        let mut short = controller();
        let mut long = controller();
        let input = InputSnapshot {
            strafe_right: true,
            ..InputSnapshot::default()
        };
        short.advance(0.1, &input);
        long.advance(0.3, &input);
        let short_dist =
            (short.camera.position() - Camera::default().position()).length();
        let long_dist =
            (long.camera.position() - Camera::default().position()).length();
        assert!((long_dist - 3.0 * short_dist).abs() < TOL);
    }

    #[test]
    fn one_simulated_second_of_forward_moves_speed_units() {
        // Sixty 1/60 s frames at speed 2.0 travel exactly 2.0 units along
        // the initial forward vector, with yaw/pitch untouched.
        let mut ctl = controller();
        let start = ctl.camera.position();
        let initial_forward = ctl.camera.forward();
        let input = InputSnapshot {
            forward: true,
            ..InputSnapshot::default()
        };
        for _ in 0..60 {
            ctl.advance(1.0 / 60.0, &input);
        }
        let moved = ctl.camera.position() - start;
        assert!((moved - initial_forward * 2.0).length() < 1e-4);
        assert_eq!(ctl.camera.yaw(), -90.0);
        assert_eq!(ctl.camera.pitch(), 0.0);
    }

    #[test]
    fn pointer_up_looks_up() {
        // Upward pointer motion arrives as a negative vertical delta.
        let mut ctl = controller();
        let input = InputSnapshot {
            pointer_delta: Vec2::new(0.0, -40.0),
            ..InputSnapshot::default()
        };
        ctl.advance(1.0 / 60.0, &input);
        assert!(ctl.camera.pitch() > 0.0);
        assert!(ctl.camera.forward().y > 0.0);
    }

    #[test]
    fn wild_pointer_deltas_never_escape_pitch_bounds() {
        let mut ctl = controller();
        for dy in [1.0e5, -1.0e5, 3.0e4, -7.0e4] {
            let input = InputSnapshot {
                pointer_delta: Vec2::new(0.0, dy),
                ..InputSnapshot::default()
            };
            ctl.advance(1.0 / 60.0, &input);
            assert!(ctl.camera.pitch().abs() <= 89.0);
        }
    }

    #[test]
    fn translation_uses_pre_rotation_basis() {
        // A frame that both moves forward and turns 90° must travel along
        // the facing at the start of the frame, not the new one.
        let mut ctl = controller();
        let start_forward = ctl.camera.forward();
        let input = InputSnapshot {
            forward: true,
            pointer_delta: Vec2::new(900.0, 0.0),
            ..InputSnapshot::default()
        };
        ctl.advance(0.5, &input);
        let moved = ctl.camera.position() - Camera::default().position();
        assert!((moved - start_forward).length() < TOL);
    }
}
