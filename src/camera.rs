use glam::{Mat4, Vec3};

use crate::config::CameraConfig;
use crate::types::CameraUniform;

// === Default camera values ===

pub const DEFAULT_YAW: f32 = -90.0;
pub const DEFAULT_PITCH: f32 = 0.0;
pub const DEFAULT_SPEED: f32 = 2.5;
pub const DEFAULT_SENSITIVITY: f32 = 0.1;
pub const DEFAULT_ZOOM: f32 = 45.0;

/// Pitch is kept strictly inside +/-90 so `front` never becomes parallel
/// to the world up axis.
pub const PITCH_LIMIT: f32 = 89.0;
pub const ZOOM_MIN: f32 = 1.0;
pub const ZOOM_MAX: f32 = 45.0;

/// Movement direction, abstracted from window-system key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    Forward,
    Backward,
    Left,
    Right,
    WorldUp,
}

/// How a look update interacts with the rollback snapshot.
///
/// `Preview` rotates without touching the snapshot, `Commit` rotates and
/// makes the result the new rollback point, `Revert` discards the deltas
/// and restores the last committed orientation. Together these support a
/// held-button free-look that commits on release and snaps back on cancel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookMode {
    Preview,
    Commit,
    Revert,
}

/// Orientation snapshot: Euler angles plus the basis derived from them.
///
/// Copied wholesale for commit/revert/restore, so round-trips are
/// bit-exact rather than recomputed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Yaw angle in degrees.
    pub yaw: f32,
    /// Pitch angle in degrees, always within [-89, 89].
    pub pitch: f32,
    /// Unit view direction.
    pub front: Vec3,
    /// Unit right vector, orthogonal to `front` and the world up axis.
    pub right: Vec3,
    /// Unit up vector, orthogonal to `front` and `right`.
    pub up: Vec3,
}

/// First-person camera with preview/commit/revert look handling.
///
/// Holds the live orientation plus two snapshots: the last committed pose
/// (rollback point for `LookMode::Revert`) and the construction-time pose
/// (target of [`Camera::restore_initial`]).
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    world_up: Vec3,
    pose: Pose,
    prev_pose: Pose,
    initial_pose: Pose,
    initial_position: Vec3,
    /// Movement speed in world units per second.
    pub movement_speed: f32,
    /// Scale applied to raw pointer deltas before they become degrees.
    pub look_sensitivity: f32,
    zoom: f32,
    /// When false, every `apply_look` call is ignored entirely.
    pub look_enabled: bool,
}

impl Camera {
    /// Create a camera from construction-time configuration.
    ///
    /// Computes the initial basis from yaw/pitch, then captures both the
    /// rollback and the initial snapshot equal to the starting state.
    pub fn new(config: CameraConfig) -> Self {
        let pose = Pose {
            yaw: config.yaw,
            pitch: config.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            front: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
        };

        let mut camera = Self {
            position: config.position,
            world_up: config.world_up,
            pose,
            prev_pose: pose,
            initial_pose: pose,
            initial_position: config.position,
            movement_speed: config.movement_speed,
            look_sensitivity: config.look_sensitivity,
            zoom: config.zoom.clamp(ZOOM_MIN, ZOOM_MAX),
            look_enabled: config.look_enabled,
        };

        camera.update_vectors();
        camera.prev_pose = camera.pose;
        camera.initial_pose = camera.pose;
        camera
    }

    /// View matrix placing the eye at `position`, looking along `front`.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(
            self.position,
            self.position + self.pose.front,
            self.pose.up,
        )
    }

    /// Current world-space position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Current orientation snapshot.
    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// Vertical field of view in degrees for projection-matrix construction.
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Fixed world up axis set at construction.
    pub fn world_up(&self) -> Vec3 {
        self.world_up
    }

    /// Displace the camera along its basis by `movement_speed * delta_time`.
    ///
    /// Orientation and snapshots are untouched; position is not clamped.
    pub fn apply_movement(&mut self, direction: MoveDirection, delta_time: f32) {
        let velocity = self.movement_speed * delta_time;
        match direction {
            MoveDirection::Forward => self.position += self.pose.front * velocity,
            MoveDirection::Backward => self.position -= self.pose.front * velocity,
            MoveDirection::Left => self.position -= self.pose.right * velocity,
            MoveDirection::Right => self.position += self.pose.right * velocity,
            MoveDirection::WorldUp => self.position += self.world_up * velocity,
        }
    }

    /// Apply raw pointer deltas according to `mode`.
    ///
    /// No-op while `look_enabled` is false: deltas are discarded and no
    /// snapshot is touched, regardless of mode.
    pub fn apply_look(&mut self, x_delta: f32, y_delta: f32, mode: LookMode) {
        if !self.look_enabled {
            return;
        }

        match mode {
            LookMode::Revert => {
                // Deltas are intentionally ignored; position stays put.
                self.pose = self.prev_pose;
            }
            LookMode::Preview | LookMode::Commit => {
                self.pose.yaw += x_delta * self.look_sensitivity;
                self.pose.pitch = (self.pose.pitch + y_delta * self.look_sensitivity)
                    .clamp(-PITCH_LIMIT, PITCH_LIMIT);
                self.update_vectors();

                if mode == LookMode::Commit {
                    self.prev_pose = self.pose;
                }
            }
        }
    }

    /// Scroll-wheel zoom: subtracts the delta and clamps to [1, 45].
    pub fn apply_zoom(&mut self, scroll_delta: f32) {
        self.zoom = (self.zoom - scroll_delta).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Restore the construction-time pose and position.
    ///
    /// Also commits the restored pose as the rollback point, so a
    /// subsequent revert lands on the restored state rather than whatever
    /// was live before the reset.
    pub fn restore_initial(&mut self) {
        self.pose = self.initial_pose;
        self.position = self.initial_position;
        self.prev_pose = self.pose;
    }

    /// Pack current state into a GPU uniform buffer layout.
    pub fn to_uniform(&self) -> CameraUniform {
        CameraUniform {
            position: self.position.to_array(),
            _pad1: 0.0,
            front: self.pose.front.to_array(),
            _pad2: 0.0,
            right: self.pose.right.to_array(),
            _pad3: 0.0,
            up: self.pose.up.to_array(),
            zoom: self.zoom,
        }
    }

    /// Recompute `front`, `right`, `up` from the current Euler angles.
    ///
    /// `right` and `up` are always rebuilt together from the fresh `front`
    /// and the fixed world up axis, never stored independently of an angle
    /// change, which keeps the basis orthonormal.
    fn update_vectors(&mut self) {
        // The pitch clamp keeps front away from the poles, so the cross
        // products below never degenerate.
        debug_assert!(self.pose.pitch.abs() <= PITCH_LIMIT);

        let yaw = self.pose.yaw.to_radians();
        let pitch = self.pose.pitch.to_radians();

        let front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        );
        self.pose.front = front.normalize();
        self.pose.right = self.pose.front.cross(self.world_up).normalize();
        self.pose.up = self.pose.right.cross(self.pose.front).normalize();
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(CameraConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn assert_vec3_near(actual: Vec3, expected: Vec3) {
        assert!(
            (actual - expected).length() < EPSILON,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    fn assert_orthonormal(pose: &Pose) {
        assert!((pose.front.length() - 1.0).abs() < EPSILON);
        assert!((pose.right.length() - 1.0).abs() < EPSILON);
        assert!((pose.up.length() - 1.0).abs() < EPSILON);
        assert!(pose.front.dot(pose.right).abs() < EPSILON);
        assert!(pose.front.dot(pose.up).abs() < EPSILON);
        assert!(pose.right.dot(pose.up).abs() < EPSILON);
    }

    #[test]
    fn test_default_orientation_looks_down_negative_z() {
        let camera = Camera::default();
        let pose = camera.pose();

        assert_vec3_near(pose.front, Vec3::new(0.0, 0.0, -1.0));
        assert_vec3_near(pose.right, Vec3::new(1.0, 0.0, 0.0));
        assert_vec3_near(pose.up, Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_construction_captures_snapshots() {
        let mut camera = Camera::default();
        let start = camera.pose();

        // Revert right after construction lands on the starting pose.
        camera.apply_look(0.0, 0.0, LookMode::Revert);
        assert_eq!(camera.pose(), start);
    }

    #[test]
    fn test_basis_stays_orthonormal_after_looks() {
        let mut camera = Camera::default();

        for i in 0..500 {
            let x = (i as f32 * 0.37).sin() * 25.0;
            let y = (i as f32 * 0.73).cos() * 25.0;
            camera.apply_look(x, y, LookMode::Preview);
            assert_orthonormal(&camera.pose());
        }
    }

    #[test]
    fn test_pitch_saturates_at_limit() {
        let mut camera = Camera::default();

        for _ in 0..1000 {
            camera.apply_look(0.0, 1000.0, LookMode::Preview);
        }
        assert_eq!(camera.pose().pitch, PITCH_LIMIT);

        for _ in 0..1000 {
            camera.apply_look(0.0, -1000.0, LookMode::Preview);
        }
        assert_eq!(camera.pose().pitch, -PITCH_LIMIT);
    }

    #[test]
    fn test_zoom_subtracts_scroll_delta() {
        let mut camera = Camera::default();
        assert_eq!(camera.zoom(), 45.0);

        camera.apply_zoom(10.0);
        assert_eq!(camera.zoom(), 35.0);
    }

    #[test]
    fn test_zoom_clamps_to_range() {
        let mut camera = Camera::default();

        camera.apply_zoom(-100.0);
        assert_eq!(camera.zoom(), 45.0);

        camera.apply_zoom(1000.0);
        assert_eq!(camera.zoom(), 1.0);

        camera.apply_zoom(1000.0);
        assert_eq!(camera.zoom(), 1.0);
    }

    #[test]
    fn test_preview_then_revert_is_bit_exact() {
        let mut camera = Camera::default();
        camera.apply_look(33.0, -12.0, LookMode::Commit);
        let committed = camera.pose();

        camera.apply_look(100.0, 50.0, LookMode::Preview);
        assert_ne!(camera.pose(), committed);

        camera.apply_look(-3.0, 8.0, LookMode::Revert);
        // Snapshot copy, not recomputation: exact equality is required.
        assert_eq!(camera.pose(), committed);
    }

    #[test]
    fn test_commit_becomes_the_rollback_point() {
        let mut camera = Camera::default();

        camera.apply_look(15.0, 5.0, LookMode::Preview);
        camera.apply_look(0.0, 0.0, LookMode::Commit);
        let committed = camera.pose();

        camera.apply_look(40.0, -40.0, LookMode::Preview);
        camera.apply_look(0.0, 0.0, LookMode::Revert);

        assert_eq!(camera.pose(), committed);
    }

    #[test]
    fn test_revert_leaves_position_untouched() {
        let mut camera = Camera::default();
        camera.apply_movement(MoveDirection::Forward, 1.0);
        let moved = camera.position();

        camera.apply_look(90.0, 0.0, LookMode::Preview);
        camera.apply_look(0.0, 0.0, LookMode::Revert);

        assert_eq!(camera.position(), moved);
    }

    #[test]
    fn test_restore_initial_cascades_into_rollback() {
        let config = CameraConfig::default();
        let mut camera = Camera::new(config);
        let initial_pose = camera.pose();
        let initial_position = camera.position();

        camera.apply_look(120.0, 30.0, LookMode::Commit);
        camera.apply_movement(MoveDirection::Right, 2.0);
        camera.restore_initial();

        assert_eq!(camera.pose(), initial_pose);
        assert_eq!(camera.position(), initial_position);

        // The cascade: revert after restore lands on the initial pose,
        // not on the pre-restore commit.
        camera.apply_look(50.0, 10.0, LookMode::Preview);
        camera.apply_look(0.0, 0.0, LookMode::Revert);
        assert_eq!(camera.pose(), initial_pose);
    }

    #[test]
    fn test_disabled_look_is_a_complete_no_op() {
        let mut camera = Camera::default();
        camera.apply_look(10.0, 10.0, LookMode::Commit);
        camera.look_enabled = false;

        let pose = camera.pose();

        camera.apply_look(500.0, 500.0, LookMode::Preview);
        assert_eq!(camera.pose(), pose);

        camera.apply_look(500.0, 500.0, LookMode::Commit);
        assert_eq!(camera.pose(), pose);

        camera.apply_look(0.0, 0.0, LookMode::Revert);
        assert_eq!(camera.pose(), pose);

        // Re-enabled, the rollback point is still the pre-disable commit.
        camera.look_enabled = true;
        camera.apply_look(25.0, 0.0, LookMode::Preview);
        camera.apply_look(0.0, 0.0, LookMode::Revert);
        assert_eq!(camera.pose(), pose);
    }

    #[test]
    fn test_movement_round_trip_returns_home() {
        let mut camera = Camera::default();
        let home = camera.position();

        camera.apply_movement(MoveDirection::Forward, 0.5);
        camera.apply_movement(MoveDirection::Backward, 0.5);

        assert!((camera.position() - home).length() < EPSILON);
    }

    #[test]
    fn test_movement_scales_with_speed_and_delta() {
        let config = CameraConfig {
            movement_speed: 4.0,
            ..CameraConfig::default()
        };
        let mut camera = Camera::new(config);

        camera.apply_movement(MoveDirection::WorldUp, 0.25);
        assert_vec3_near(camera.position(), Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_movement_never_touches_orientation() {
        let mut camera = Camera::default();
        let pose = camera.pose();

        camera.apply_movement(MoveDirection::Left, 3.0);
        camera.apply_movement(MoveDirection::WorldUp, 1.5);

        assert_eq!(camera.pose(), pose);
    }

    #[test]
    fn test_view_matrix_matches_look_at() {
        let camera = Camera::default();
        let pose = camera.pose();
        let expected = Mat4::look_at_rh(
            camera.position(),
            camera.position() + pose.front,
            pose.up,
        );

        assert_eq!(camera.view_matrix(), expected);
    }

    #[test]
    fn test_uniform_mirrors_state() {
        let mut camera = Camera::default();
        camera.apply_look(45.0, -10.0, LookMode::Preview);
        camera.apply_zoom(5.0);

        let uniform = camera.to_uniform();
        assert_eq!(uniform.position, camera.position().to_array());
        assert_eq!(uniform.front, camera.pose().front.to_array());
        assert_eq!(uniform.right, camera.pose().right.to_array());
        assert_eq!(uniform.up, camera.pose().up.to_array());
        assert_eq!(uniform.zoom, camera.zoom());
    }

    #[test]
    fn test_out_of_range_config_is_clamped() {
        let config = CameraConfig {
            pitch: 135.0,
            zoom: 90.0,
            ..CameraConfig::default()
        };
        let camera = Camera::new(config);

        assert_eq!(camera.pose().pitch, PITCH_LIMIT);
        assert_eq!(camera.zoom(), ZOOM_MAX);
    }
}
