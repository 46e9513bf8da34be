use glam::Vec3;

/// World-space up axis used to derive the camera's right vector.
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Pitch bound in degrees. At exactly ±90° the forward vector becomes
/// parallel to [`WORLD_UP`] and the cross product deriving `right`
/// degenerates to zero, so pitch is held one degree short of the poles.
pub const PITCH_LIMIT: f32 = 89.0;

/// First-person camera: world-space position plus yaw/pitch Euler angles in
/// degrees, with the derived orthonormal `{forward, right, up}` basis.
///
/// The angles and basis are private: every mutation goes through
/// [`rotate`](Self::rotate) or [`set_orientation`](Self::set_orientation),
/// which clamp pitch and rebuild the basis, so a stale or degenerate basis
/// is unrepresentable.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    position: Vec3,
    /// Yaw accumulates unbounded; it is only ever consumed through
    /// `sin`/`cos`, so wrap-around past 360° is harmless.
    yaw: f32,
    pitch: f32,
    forward: Vec3,
    right: Vec3,
    up: Vec3,
}

impl Default for Camera {
    /// Camera at `(0, 0, 5)` facing `-Z` (yaw −90°, pitch level).
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 5.0), -90.0, 0.0)
    }
}

impl Camera {
    /// Create a camera at `position` with the given yaw/pitch in degrees.
    /// Pitch is clamped to `[-89, 89]`.
    #[must_use]
    pub fn new(position: Vec3, yaw: f32, pitch: f32) -> Self {
        let mut camera = Self {
            position,
            yaw,
            pitch: pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            forward: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
        };
        camera.rebuild_basis();
        camera
    }

    /// Apply a yaw/pitch delta in degrees, clamp pitch, and rebuild the
    /// basis. The clamp runs on every call, including zero deltas, so it is
    /// idempotent when the pitch is already in range.
    pub fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch = (self.pitch + delta_pitch).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.rebuild_basis();
    }

    /// Set absolute yaw/pitch in degrees. Pitch is clamped to `[-89, 89]`.
    pub fn set_orientation(&mut self, yaw: f32, pitch: f32) {
        self.yaw = yaw;
        self.pitch = pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.rebuild_basis();
    }

    /// Move the camera by `offset` in world space.
    pub fn translate(&mut self, offset: Vec3) {
        self.position += offset;
    }

    fn rebuild_basis(&mut self) {
        let (yaw_rad, pitch_rad) =
            (self.yaw.to_radians(), self.pitch.to_radians());
        self.forward = Vec3::new(
            yaw_rad.cos() * pitch_rad.cos(),
            pitch_rad.sin(),
            yaw_rad.sin() * pitch_rad.cos(),
        )
        .normalize();
        self.right = self.forward.cross(WORLD_UP).normalize();
        self.up = self.right.cross(self.forward).normalize();
    }

    /// World-space position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Yaw in degrees (unbounded).
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch in degrees, always within `[-89, 89]`.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Unit view direction.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    /// Unit right vector (`normalize(forward × world-up)`).
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Unit up vector (`right × forward`).
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.up
    }
}

/// GPU uniform mirror of [`Camera`]: four vec3 fields padded to the WGSL
/// std140-style layout (16-byte member alignment, 64 bytes total). The
/// member order matches the `RayCamera` struct in the compute kernel;
/// changing either side is a breaking change to the kernel/loop contract.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    /// Camera world-space position.
    pub position: [f32; 3],
    _pad0: f32,
    /// Unit view direction.
    pub forward: [f32; 3],
    _pad1: f32,
    /// Unit right vector.
    pub right: [f32; 3],
    _pad2: f32,
    /// Unit up vector.
    pub up: [f32; 3],
    _pad3: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a uniform for a camera at the origin facing `-Z`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: [0.0; 3],
            _pad0: 0.0,
            forward: [0.0, 0.0, -1.0],
            _pad1: 0.0,
            right: [1.0, 0.0, 0.0],
            _pad2: 0.0,
            up: [0.0, 1.0, 0.0],
            _pad3: 0.0,
        }
    }

    /// Update all fields from the given camera's current state.
    pub fn update(&mut self, camera: &Camera) {
        self.position = camera.position().to_array();
        self.forward = camera.forward().to_array();
        self.right = camera.right().to_array();
        self.up = camera.up().to_array();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f32 = 1e-5;

    fn assert_orthonormal(camera: &Camera) {
        let (f, r, u) = (camera.forward(), camera.right(), camera.up());
        assert!((f.length() - 1.0).abs() < TOL, "forward not unit: {f}");
        assert!((r.length() - 1.0).abs() < TOL, "right not unit: {r}");
        assert!((u.length() - 1.0).abs() < TOL, "up not unit: {u}");
        assert!(f.dot(r).abs() < TOL, "forward·right = {}", f.dot(r));
        assert!(f.dot(u).abs() < TOL, "forward·up = {}", f.dot(u));
        assert!(r.dot(u).abs() < TOL, "right·up = {}", r.dot(u));
    }

    #[test]
    fn default_faces_negative_z() {
        let camera = Camera::default();
        assert!((camera.forward() - Vec3::NEG_Z).length() < TOL);
        assert!((camera.right() - Vec3::X).length() < TOL);
        assert!((camera.up() - Vec3::Y).length() < TOL);
    }

    #[test]
    fn basis_is_orthonormal_across_orientations() {
        let mut camera = Camera::default();
        for yaw_step in 0..24 {
            for pitch_step in -8..=8 {
                let yaw = yaw_step as f32 * 15.0;
                let pitch = pitch_step as f32 * 11.0;
                camera.set_orientation(yaw, pitch);
                assert_orthonormal(&camera);
            }
        }
    }

    #[test]
    fn pitch_stays_in_bounds_under_any_sequence() {
        let mut camera = Camera::default();
        for delta in [200.0, -500.0, 88.9, 0.2, -0.2, 1.0e6, -1.0e6, 45.0] {
            camera.rotate(0.0, delta);
            assert!(camera.pitch() >= -PITCH_LIMIT);
            assert!(camera.pitch() <= PITCH_LIMIT);
            assert_orthonormal(&camera);
        }
    }

    #[test]
    fn pitch_clamp_is_idempotent() {
        let mut camera = Camera::new(Vec3::ZERO, -90.0, 42.0);
        let before = camera.pitch();
        camera.rotate(0.0, 0.0);
        camera.rotate(0.0, 0.0);
        assert_eq!(camera.pitch(), before);
    }

    #[test]
    fn yaw_accumulates_unbounded() {
        let mut camera = Camera::default();
        camera.rotate(4000.0, 0.0);
        assert_eq!(camera.yaw(), -90.0 + 4000.0);
        assert_orthonormal(&camera);
    }

    #[test]
    fn uniform_tracks_camera_state() {
        let mut uniform = CameraUniform::new();
        let camera =
            Camera::new(Vec3::new(1.0, 2.0, 3.0), -90.0, 0.0);
        uniform.update(&camera);
        assert_eq!(uniform.position, [1.0, 2.0, 3.0]);
        assert!((uniform.forward[2] - (-1.0)).abs() < TOL);
        assert_eq!(size_of::<CameraUniform>(), 64);
    }
}
