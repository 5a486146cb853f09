use raylib::prelude::*;

use crate::constants::*;
use crate::cycler::Event;

/// What the user asked for, before it is routed to the cycler or the view.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Command {
    Cycle(Event),
    ToggleMute,
    SwitchRenderer,
}

/// Mouse state for one frame, in render-texture space.
#[derive(Debug, Clone, Copy)]
pub struct Pointer {
    pub position: Vector2,
    /// Movement while the orbit button is held
    pub drag: Vector2,
    pub wheel: f32,
}

impl Default for Pointer {
    fn default() -> Self {
        Self {
            position: Vector2::new(0.0, 0.0),
            drag: Vector2::new(0.0, 0.0),
            wheel: 0.0,
        }
    }
}

pub fn command_for_key(key: KeyboardKey) -> Option<Command> {
    use KeyboardKey::*;

    let command = match key {
        KEY_SPACE => Command::Cycle(Event::TogglePlay),
        KEY_RIGHT | KEY_PAGE_DOWN => Command::Cycle(Event::Next),
        KEY_LEFT | KEY_PAGE_UP => Command::Cycle(Event::Previous),
        KEY_ONE => Command::Cycle(Event::Jump(0)),
        KEY_TWO => Command::Cycle(Event::Jump(1)),
        KEY_THREE => Command::Cycle(Event::Jump(2)),
        KEY_FOUR => Command::Cycle(Event::Jump(3)),
        KEY_M => Command::ToggleMute,
        KEY_TAB => Command::SwitchRenderer,
        _ => return None,
    };
    Some(command)
}

/// Maps a window-space point into render-texture space.
pub fn to_render_space(point: Vector2, screen_width: f32, screen_height: f32) -> Vector2 {
    if screen_width <= 0.0 || screen_height <= 0.0 {
        return point;
    }
    Vector2::new(
        point.x * RENDER_WIDTH as f32 / screen_width,
        point.y * RENDER_HEIGHT as f32 / screen_height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_keys() {
        assert_eq!(command_for_key(KeyboardKey::KEY_RIGHT), Some(Command::Cycle(Event::Next)));
        assert_eq!(command_for_key(KeyboardKey::KEY_PAGE_UP), Some(Command::Cycle(Event::Previous)));
        assert_eq!(command_for_key(KeyboardKey::KEY_SPACE), Some(Command::Cycle(Event::TogglePlay)));
        assert_eq!(command_for_key(KeyboardKey::KEY_FOUR), Some(Command::Cycle(Event::Jump(3))));
    }

    #[test]
    fn view_keys() {
        assert_eq!(command_for_key(KeyboardKey::KEY_M), Some(Command::ToggleMute));
        assert_eq!(command_for_key(KeyboardKey::KEY_TAB), Some(Command::SwitchRenderer));
        assert_eq!(command_for_key(KeyboardKey::KEY_Q), None);
    }

    #[test]
    fn half_size_window_doubles_coordinates() {
        let p = to_render_space(Vector2::new(480.0, 270.0), 960.0, 540.0);
        assert_eq!(p.x, 960.0);
        assert_eq!(p.y, 540.0);
    }
}
