use std::time::Duration;

use log::info;
use raylib::prelude::*;

use crate::chime::Chime;
use crate::config::{AppConfig, RendererKind};
use crate::cycler::{Event, SceneCycler};
use crate::engine::Engine;
use crate::flat::engine::FlatEngine;
use crate::input::{Command, Pointer};
use crate::overlay::{Overlay, Status};
use crate::portfolio::Portfolio;
use crate::scene::Scene;
use crate::stage::engine::StageEngine;

/// The presentation: one cycler driving whichever renderer is selected.
pub struct Show {
    cycler: SceneCycler,
    renderer: RendererKind,
    flat: FlatEngine,
    stage: StageEngine,
    overlay: Overlay,
}

impl Show {
    pub fn new(config: &AppConfig, portfolio: &Portfolio) -> Self {
        let mut flat = FlatEngine::new();
        let mut stage = StageEngine::new(&config.stage);
        flat.initialize(portfolio);
        stage.initialize(portfolio);

        let mut cycler = SceneCycler::new();
        if config.playback.autoplay {
            cycler.play();
        }

        Self {
            cycler,
            renderer: config.playback.renderer,
            flat,
            stage,
            overlay: Overlay::new(),
        }
    }

    pub fn scene(&self) -> Scene {
        self.cycler.scene()
    }

    pub fn renderer(&self) -> RendererKind {
        self.renderer
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    pub fn apply(&mut self, command: Command, chime: &mut Chime) {
        match command {
            Command::Cycle(event) => {
                if let Some(index) = self.cycler.handle(event) {
                    let scene = Scene::from_index(index);
                    info!("Scene {} ({})", index, scene.name());
                    self.flat.scene_changed(scene);
                    self.stage.scene_changed(scene);
                    self.overlay.scene_changed(scene);
                    chime.play(scene);
                }
                if event == Event::TogglePlay {
                    info!("Playback {}", if self.cycler.is_playing() { "started" } else { "paused" });
                }
            }
            Command::ToggleMute => {
                let muted = chime.toggle_mute();
                info!("Chime {}", if muted { "muted" } else { "unmuted" });
            }
            Command::SwitchRenderer => {
                self.renderer = self.renderer.toggled();
                info!("Renderer switched to {:?}", self.renderer);
            }
        }
    }

    /// Advances timers and animations by one frame.
    pub fn update(&mut self, dt: f32, pointer: &Pointer, chime: &mut Chime) {
        self.apply(Command::Cycle(Event::Tick(Duration::from_secs_f32(dt))), chime);
        match self.renderer {
            RendererKind::Flat => self.flat.update(dt, pointer),
            RendererKind::Stage => self.stage.update(dt, pointer),
        }
        self.overlay.update(dt);
    }

    pub fn render_frame<D: RaylibDraw + RaylibMode3DExt>(&self, d: &mut D, chime: &Chime, pointer: Vector2) {
        match self.renderer {
            RendererKind::Flat => self.flat.render_frame(d),
            RendererKind::Stage => self.stage.render_frame(d),
        }
        let status = Status {
            scene: self.scene(),
            playing: self.cycler.is_playing(),
            muted: chime.is_muted(),
        };
        self.overlay.draw(d, status, pointer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show(autoplay: bool) -> Show {
        let mut config = AppConfig::default();
        config.playback.autoplay = autoplay;
        Show::new(&config, &Portfolio::sample())
    }

    #[test]
    fn autoplay_advances_on_update() {
        let mut chime = Chime::silent(true);
        let mut show = show(true);
        show.update(6.0, &Pointer::default(), &mut chime);
        assert_eq!(show.scene(), Scene::Skills);
    }

    #[test]
    fn paused_show_only_moves_on_command() {
        let mut chime = Chime::silent(true);
        let mut show = show(false);
        show.update(30.0, &Pointer::default(), &mut chime);
        assert_eq!(show.scene(), Scene::Introduction);

        show.apply(Command::Cycle(Event::Previous), &mut chime);
        assert_eq!(show.scene(), Scene::Contact);
    }

    #[test]
    fn commands_toggle_view_state() {
        let mut chime = Chime::silent(false);
        let mut show = show(false);
        let before = show.renderer();
        show.apply(Command::SwitchRenderer, &mut chime);
        assert_eq!(show.renderer(), before.toggled());

        show.apply(Command::ToggleMute, &mut chime);
        assert!(chime.is_muted());
    }
}
