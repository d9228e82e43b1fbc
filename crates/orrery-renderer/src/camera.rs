//! First-person fly camera: WASD movement, mouse look, scroll zoom.

use orrery_config::schema::CameraConfig;

use crate::sphere::matrix::{self as mat, Mat4, Vec3};

const WORLD_UP: Vec3 = [0.0, 1.0, 0.0];
const PITCH_LIMIT: f32 = 89.0;
const MIN_FOV: f32 = 1.0;

/// Direction of a keyboard movement step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
}

/// Camera pose and projection parameters. Angles in degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    max_fov: f32,
    move_speed: f32,
    sensitivity: f32,
}

impl Camera {
    pub fn from_config(config: &CameraConfig) -> Self {
        let fov = config.fov as f32;
        Self {
            position: config.position.map(|c| c as f32),
            yaw: config.yaw as f32,
            pitch: (config.pitch as f32).clamp(-PITCH_LIMIT, PITCH_LIMIT),
            fov,
            near: config.near as f32,
            far: config.far as f32,
            max_fov: fov,
            move_speed: config.move_speed as f32,
            sensitivity: config.mouse_sensitivity as f32,
        }
    }

    /// Unit view direction derived from yaw and pitch.
    pub fn front(&self) -> Vec3 {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();
        mat::normalize([
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        ])
    }

    /// Unit vector to the camera's right, parallel to the ground plane.
    pub fn right(&self) -> Vec3 {
        mat::normalize(mat::cross(self.front(), WORLD_UP))
    }

    /// Move along the view direction or strafe, scaled by `dt` seconds.
    pub fn process_keyboard(&mut self, movement: CameraMovement, dt: f32) {
        let velocity = self.move_speed * dt;
        let step = match movement {
            CameraMovement::Forward => mat::mul_scalar(self.front(), velocity),
            CameraMovement::Backward => mat::mul_scalar(self.front(), -velocity),
            CameraMovement::Right => mat::mul_scalar(self.right(), velocity),
            CameraMovement::Left => mat::mul_scalar(self.right(), -velocity),
        };
        self.position = mat::add(self.position, step);
    }

    /// Apply a mouse delta in pixels. Positive `dy` looks up.
    pub fn process_mouse(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.sensitivity;
        self.pitch = (self.pitch + dy * self.sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Zoom by narrowing or widening the field of view.
    pub fn process_scroll(&mut self, dy: f32) {
        self.fov = (self.fov - dy).clamp(MIN_FOV, self.max_fov);
    }

    pub fn view_matrix(&self) -> Mat4 {
        mat::look_at(
            self.position,
            mat::add(self.position, self.front()),
            WORLD_UP,
        )
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        mat::perspective(self.fov.to_radians(), aspect, self.near, self.far)
    }

    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        mat::mul(&self.projection_matrix(aspect), &self.view_matrix())
    }
}

// =============================================================================
// Tests
// =============================================================================
