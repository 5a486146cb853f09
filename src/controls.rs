//! Control bar geometry. Everything is in render-texture coordinates so the
//! same layout serves drawing and hit testing.

use raylib::prelude::*;

use crate::constants::*;
use crate::cycler::Event;
use crate::input::Command;
use crate::scene::Scene;

pub const BUTTON_SIZE: f32 = 64.0;
pub const DOT_SIZE: f32 = 24.0;
const GAP: f32 = 16.0;
const DOT_GAP: f32 = 12.0;
const PADDING: f32 = 16.0;
const BOTTOM_MARGIN: f32 = 48.0;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Button {
    Previous,
    PlayPause,
    Next,
    Mute,
    SceneDot(usize),
}

impl Button {
    pub fn command(self) -> Command {
        match self {
            Button::Previous => Command::Cycle(Event::Previous),
            Button::PlayPause => Command::Cycle(Event::TogglePlay),
            Button::Next => Command::Cycle(Event::Next),
            Button::Mute => Command::ToggleMute,
            Button::SceneDot(i) => Command::Cycle(Event::Jump(i)),
        }
    }
}

pub struct ControlBar {
    pub panel: Rectangle,
    pub buttons: Vec<(Button, Rectangle)>,
}

impl ControlBar {
    pub fn layout() -> Self {
        let dots_width = Scene::COUNT as f32 * DOT_SIZE + (Scene::COUNT - 1) as f32 * DOT_GAP;
        let inner_width = 4.0 * BUTTON_SIZE + 4.0 * GAP + dots_width;
        let panel = Rectangle::new(
            (RENDER_WIDTH as f32 - inner_width) * 0.5 - PADDING,
            RENDER_HEIGHT as f32 - BOTTOM_MARGIN - BUTTON_SIZE - 2.0 * PADDING,
            inner_width + 2.0 * PADDING,
            BUTTON_SIZE + 2.0 * PADDING,
        );

        let top = panel.y + PADDING;
        let mut x = panel.x + PADDING;
        let mut buttons = Vec::new();
        for button in [Button::Previous, Button::PlayPause, Button::Next, Button::Mute] {
            buttons.push((button, Rectangle::new(x, top, BUTTON_SIZE, BUTTON_SIZE)));
            x += BUTTON_SIZE + GAP;
        }

        let dot_top = top + (BUTTON_SIZE - DOT_SIZE) * 0.5;
        for i in 0..Scene::COUNT {
            buttons.push((Button::SceneDot(i), Rectangle::new(x, dot_top, DOT_SIZE, DOT_SIZE)));
            x += DOT_SIZE + DOT_GAP;
        }

        Self { panel, buttons }
    }

    pub fn hit_test(&self, point: Vector2) -> Option<Command> {
        self.buttons
            .iter()
            .find(|(_, rect)| contains(rect, point))
            .map(|(button, _)| button.command())
    }
}

pub fn contains(rect: &Rectangle, point: Vector2) -> bool {
    point.x >= rect.x
        && point.x <= rect.x + rect.width
        && point.y >= rect.y
        && point.y <= rect.y + rect.height
}

/// Fraction of the progress bar filled when showing scene `index`.
pub fn progress_fraction(index: usize) -> f32 {
    (index % Scene::COUNT + 1) as f32 / Scene::COUNT as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn center(rect: &Rectangle) -> Vector2 {
        Vector2::new(rect.x + rect.width * 0.5, rect.y + rect.height * 0.5)
    }

    #[test]
    fn every_button_hits_its_command() {
        let bar = ControlBar::layout();
        assert_eq!(bar.buttons.len(), 4 + Scene::COUNT);
        for (button, rect) in &bar.buttons {
            assert_eq!(bar.hit_test(center(rect)), Some(button.command()));
        }
    }

    #[test]
    fn scene_dots_jump() {
        let bar = ControlBar::layout();
        let (_, third) = bar.buttons[4 + 2];
        assert_eq!(bar.hit_test(center(&third)), Some(Command::Cycle(Event::Jump(2))));
    }

    #[test]
    fn bar_is_centered_at_the_bottom() {
        let bar = ControlBar::layout();
        let middle = bar.panel.x + bar.panel.width * 0.5;
        assert!((middle - RENDER_WIDTH as f32 * 0.5).abs() < 0.01);
        assert!(bar.panel.y + bar.panel.height < RENDER_HEIGHT as f32);
    }

    #[test]
    fn misses_outside_buttons() {
        let bar = ControlBar::layout();
        assert_eq!(bar.hit_test(Vector2::new(10.0, 10.0)), None);
        // Padding between the panel edge and the first button
        assert_eq!(bar.hit_test(Vector2::new(bar.panel.x + 2.0, bar.panel.y + 2.0)), None);
    }

    #[test]
    fn progress_grows_with_scene() {
        assert_eq!(progress_fraction(0), 0.25);
        assert_eq!(progress_fraction(3), 1.0);
        assert_eq!(progress_fraction(4), 0.25);
    }
}
