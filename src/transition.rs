use raylib::prelude::*;

use crate::constants::*;
use crate::scene::Scene;

/// Entrance animation played each time a scene becomes current.
pub struct Entrance {
    opacity: f32,
    scale: f32,
    offset: Vector2,

    elapsed: f32,
    pub is_animating: bool,

    tween_opacity: ease::Tween,
    tween_scale: ease::Tween,
    tween_offset_x: ease::Tween,
    tween_offset_y: ease::Tween,
}

impl Entrance {
    pub fn new(scene: Scene) -> Self {
        // (start scale, start offset) per scene
        let (start_scale, start_offset) = match scene {
            Scene::Introduction => (0.8, Vector2::new(0.0, 0.0)),
            Scene::Skills => (1.0, Vector2::new(0.0, 50.0)),
            Scene::Projects => (1.0, Vector2::new(100.0, 0.0)),
            Scene::Contact => (0.5, Vector2::new(0.0, 0.0)),
        };

        Self {
            opacity: 0.0,
            scale: start_scale,
            offset: start_offset,

            elapsed: 0.0,
            is_animating: true,

            tween_opacity:  ease::Tween::new(ease::linear_none, 0.0, 1.0, ENTRANCE_DURATION),
            tween_scale:    ease::Tween::new(ease::cubic_out, start_scale, 1.0, ENTRANCE_DURATION),
            tween_offset_x: ease::Tween::new(ease::cubic_out, start_offset.x, 0.0, ENTRANCE_DURATION),
            tween_offset_y: ease::Tween::new(ease::cubic_out, start_offset.y, 0.0, ENTRANCE_DURATION),
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.elapsed += dt;
        if !self.is_animating {
            return;
        }

        self.opacity  = self.tween_opacity.apply(dt);
        self.scale    = self.tween_scale.apply(dt);
        self.offset.x = self.tween_offset_x.apply(dt);
        self.offset.y = self.tween_offset_y.apply(dt);

        if self.elapsed >= ENTRANCE_DURATION {
            self.is_animating = false;
            self.opacity = 1.0;
            self.scale = 1.0;
            self.offset = Vector2::new(0.0, 0.0);
        }
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn offset(&self) -> Vector2 {
        self.offset
    }

    /// Eased 0..1 progress of a child element that starts `delay` seconds in.
    pub fn staggered(&self, delay: f32) -> f32 {
        let t = ((self.elapsed - delay) / ENTRANCE_DURATION).clamp(0.0, 1.0);
        ease::cubic_out(t, 0.0, 1.0, 1.0)
    }
}
