use raylib::prelude::*;

use crate::input::Pointer;
use crate::portfolio::Portfolio;
use crate::scene::Scene;

/// A rendering strategy for the scenes. Draws into the render texture,
/// overlays are drawn on top by the caller.
pub trait Engine {
    fn initialize(&mut self, portfolio: &Portfolio);
    fn scene_changed(&mut self, scene: Scene);
    fn update(&mut self, dt: f32, pointer: &Pointer);
    fn render_frame<D: RaylibDraw + RaylibMode3DExt>(&self, d: &mut D);
}
