use raylib::prelude::*;

use crate::config::StageConfig;
use crate::constants::*;

const FOVY: f32 = 60.0;
const NEAR: f32 = 0.1;
pub const MIN_DISTANCE: f32 = 6.0;
pub const MAX_DISTANCE: f32 = 30.0;
pub const MAX_PITCH: f32 = 1.4;

/// Camera orbiting the origin. Yaw, pitch and distance ease toward their
/// targets so drags and zooms settle smoothly.
pub struct OrbitCamera {
    yaw: f32,
    pitch: f32,
    distance: f32,

    target_yaw: f32,
    target_pitch: f32,
    target_distance: f32,

    damping: f32,
    sensitivity: f32,
    zoom_step: f32,
    auto_orbit: f32,
}

impl OrbitCamera {
    pub fn new(config: &StageConfig) -> Self {
        let (yaw, pitch, distance) = (0.0, 0.15, 14.0);
        Self {
            yaw,
            pitch,
            distance,
            target_yaw: yaw,
            target_pitch: pitch,
            target_distance: distance,
            damping: config.damping,
            sensitivity: config.orbit_sensitivity,
            zoom_step: config.zoom_step,
            auto_orbit: config.auto_orbit,
        }
    }

    pub fn orbit(&mut self, drag: Vector2) {
        self.target_yaw -= drag.x * self.sensitivity;
        self.target_pitch = (self.target_pitch + drag.y * self.sensitivity).clamp(-MAX_PITCH, MAX_PITCH);
    }

    pub fn zoom(&mut self, notches: f32) {
        self.target_distance = (self.target_distance - notches * self.zoom_step).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    pub fn update(&mut self, dt: f32) {
        self.target_yaw += self.auto_orbit * dt;

        // Frame-rate independent exponential smoothing
        let k = 1.0 - (-self.damping * dt).exp();
        self.yaw += (self.target_yaw - self.yaw) * k;
        self.pitch += (self.target_pitch - self.pitch) * k;
        self.distance += (self.target_distance - self.distance) * k;
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn position(&self) -> Vector3 {
        Vector3::new(
            self.distance * self.pitch.cos() * self.yaw.sin(),
            self.distance * self.pitch.sin(),
            self.distance * self.pitch.cos() * self.yaw.cos(),
        )
    }

    pub fn camera(&self) -> Camera3D {
        Camera3D::perspective(self.position(), Vector3::zero(), Vector3::up(), FOVY)
    }

    /// Projects a world point onto the render texture. Returns the screen
    /// point and its depth along the view direction, or `None` behind the camera.
    pub fn project(&self, point: Vector3) -> Option<(Vector2, f32)> {
        let eye = self.position();
        let forward = (Vector3::zero() - eye).normalized();
        let right = forward.cross(Vector3::up()).normalized();
        let up = right.cross(forward);

        let rel = point - eye;
        let depth = rel.dot(forward);
        if depth <= NEAR {
            return None;
        }

        let half_height = RENDER_HEIGHT as f32 * 0.5;
        let focal = half_height / (FOVY.to_radians() * 0.5).tan();
        Some((
            Vector2::new(
                RENDER_WIDTH as f32 * 0.5 + rel.dot(right) / depth * focal,
                half_height - rel.dot(up) / depth * focal,
            ),
            depth,
        ))
    }
}
