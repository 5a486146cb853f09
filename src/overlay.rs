//! Chrome drawn over either renderer: progress bar, scene title, control bar.

use raylib::prelude::*;

use crate::constants::*;
use crate::controls::{Button, ControlBar, contains, progress_fraction};
use crate::scene::Scene;

const PROGRESS_HEIGHT: i32 = 6;

/// Playback flags the control bar reflects.
#[derive(Debug, Clone, Copy)]
pub struct Status {
    pub scene: Scene,
    pub playing: bool,
    pub muted: bool,
}

pub struct Overlay {
    bar: ControlBar,
    progress: ease::Tween,
    progress_value: f32,
    title_timer: f32,
}

impl Default for Overlay {
    fn default() -> Self {
        Self::new()
    }
}

impl Overlay {
    pub fn new() -> Self {
        let start = progress_fraction(0);
        Self {
            bar: ControlBar::layout(),
            progress: ease::Tween::new(ease::linear_none, start, start, PROGRESS_DURATION),
            progress_value: start,
            title_timer: 0.0,
        }
    }

    pub fn control_bar(&self) -> &ControlBar {
        &self.bar
    }

    pub fn scene_changed(&mut self, scene: Scene) {
        let target = progress_fraction(scene.index());
        self.progress = ease::Tween::new(ease::cubic_out, self.progress_value, target, PROGRESS_DURATION);
        self.title_timer = 0.0;
    }

    pub fn update(&mut self, dt: f32) {
        self.progress_value = self.progress.apply(dt);
        self.title_timer += dt;
    }

    pub fn progress(&self) -> f32 {
        self.progress_value
    }

    pub fn draw<D: RaylibDraw>(&self, d: &mut D, status: Status, pointer: Vector2) {
        self.draw_progress(d);
        self.draw_title(d, status.scene);
        self.draw_controls(d, status, pointer);
    }

    fn draw_progress<D: RaylibDraw>(&self, d: &mut D) {
        d.draw_rectangle(0, 0, RENDER_WIDTH, PROGRESS_HEIGHT, faded(MUTED, 0.3));
        let width = (RENDER_WIDTH as f32 * self.progress_value) as i32;
        d.draw_rectangle_gradient_h(0, 0, width, PROGRESS_HEIGHT, PRIMARY, SECONDARY);
    }

    fn draw_title<D: RaylibDraw>(&self, d: &mut D, scene: Scene) {
        let t = (self.title_timer / TITLE_SLIDE_DURATION).min(1.0);
        let eased = ease::cubic_out(t, 0.0, 1.0, 1.0);
        let x = 48.0 - 100.0 * (1.0 - eased);
        d.draw_text(scene.name(), x as i32, 40, 40, faded(PRIMARY, eased));
    }

    fn draw_controls<D: RaylibDraw>(&self, d: &mut D, status: Status, pointer: Vector2) {
        d.draw_rectangle_rounded(self.bar.panel, 0.3, 8, Color::new(16, 22, 44, 200));
        d.draw_rectangle_lines_ex(self.bar.panel, 2.0, faded(PRIMARY, 0.4));

        for (button, rect) in &self.bar.buttons {
            let hovered = contains(rect, pointer);

            match button {
                Button::SceneDot(i) => {
                    let center = Vector2::new(rect.x + rect.width * 0.5, rect.y + rect.height * 0.5);
                    let color = if *i == status.scene.index() {
                        d.draw_circle_v(center, rect.width * 0.7, faded(PRIMARY, 0.3));
                        PRIMARY
                    } else if hovered {
                        faded(PRIMARY, 0.5)
                    } else {
                        MUTED
                    };
                    d.draw_circle_v(center, rect.width * 0.5, color);
                }
                _ => {
                    let fill = if hovered { faded(PRIMARY, 0.25) } else { faded(PRIMARY, 0.1) };
                    d.draw_rectangle_rounded(*rect, 0.3, 8, fill);
                    d.draw_rectangle_lines_ex(*rect, 2.0, PRIMARY);
                    draw_icon(d, *button, *rect, status);
                }
            }
        }
    }
}

fn draw_icon<D: RaylibDraw>(d: &mut D, button: Button, rect: Rectangle, status: Status) {
    let cx = rect.x + rect.width * 0.5;
    let cy = rect.y + rect.height * 0.5;
    let s = rect.width * 0.22;

    // Triangles are listed counter-clockwise
    let right = |d: &mut D, x: f32| {
        d.draw_triangle(Vector2::new(x - s, cy - s), Vector2::new(x - s, cy + s), Vector2::new(x + s, cy), PRIMARY);
    };
    let left = |d: &mut D, x: f32| {
        d.draw_triangle(Vector2::new(x + s, cy - s), Vector2::new(x - s, cy), Vector2::new(x + s, cy + s), PRIMARY);
    };
    let bar = |d: &mut D, x: f32| {
        d.draw_rectangle_rec(Rectangle::new(x - s * 0.2, cy - s, s * 0.4, s * 2.0), PRIMARY);
    };

    match button {
        Button::Previous => {
            bar(d, cx - s * 1.1);
            left(d, cx + s * 0.3);
        }
        Button::Next => {
            right(d, cx - s * 0.3);
            bar(d, cx + s * 1.1);
        }
        Button::PlayPause if status.playing => {
            bar(d, cx - s * 0.5);
            bar(d, cx + s * 0.5);
        }
        Button::PlayPause => right(d, cx),
        Button::Mute => {
            d.draw_rectangle_rec(Rectangle::new(cx - s * 1.2, cy - s * 0.4, s * 0.6, s * 0.8), PRIMARY);
            d.draw_triangle(
                Vector2::new(cx - s * 0.6, cy - s * 0.4),
                Vector2::new(cx - s * 0.6, cy + s * 0.4),
                Vector2::new(cx + s * 0.2, cy + s),
                PRIMARY,
            );
            d.draw_triangle(
                Vector2::new(cx - s * 0.6, cy - s * 0.4),
                Vector2::new(cx + s * 0.2, cy + s),
                Vector2::new(cx + s * 0.2, cy - s),
                PRIMARY,
            );
            if status.muted {
                d.draw_line_ex(Vector2::new(cx + s * 0.5, cy - s * 0.5), Vector2::new(cx + s * 1.3, cy + s * 0.5), 3.0, SECONDARY);
                d.draw_line_ex(Vector2::new(cx + s * 0.5, cy + s * 0.5), Vector2::new(cx + s * 1.3, cy - s * 0.5), 3.0, SECONDARY);
            } else {
                d.draw_circle_sector_lines(Vector2::new(cx + s * 0.2, cy), s * 0.9, -45.0, 45.0, 8, PRIMARY);
            }
        }
        Button::SceneDot(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_starts_at_first_quarter() {
        let overlay = Overlay::new();
        assert_eq!(overlay.progress(), 0.25);
    }

    #[test]
    fn progress_eases_toward_scene() {
        let mut overlay = Overlay::new();
        overlay.scene_changed(Scene::Contact);
        overlay.update(PROGRESS_DURATION * 0.5);
        assert!(overlay.progress() > 0.25 && overlay.progress() < 1.0);
        overlay.update(PROGRESS_DURATION);
        assert!((overlay.progress() - 1.0).abs() < 1e-4);
    }
}
