use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use log::{info, warn};
use raylib::prelude::*;

mod chime;
mod config;
mod constants;
mod controls;
mod cycler;
mod engine;
mod flat;
mod input;
mod overlay;
mod portfolio;
mod scene;
mod show;
mod stage;
mod state;
mod transition;

use crate::chime::Chime;
use crate::config::{AppConfig, RendererKind};
use crate::constants::*;
use crate::input::{Pointer, command_for_key, to_render_space};
use crate::portfolio::Portfolio;
use crate::show::Show;

/// Animated portfolio presentation
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Portfolio record (TOML). Uses a built-in sample when omitted
    #[arg(short, long)]
    portfolio: Option<PathBuf>,

    /// Scene renderer
    #[arg(short, long, value_enum)]
    renderer: Option<RendererKind>,

    /// Directory holding default.toml and user.toml
    #[arg(long, default_value = "config")]
    config_dir: PathBuf,

    /// Start cycling scenes immediately
    #[arg(long)]
    autoplay: bool,

    /// Start with the scene chime silenced
    #[arg(long)]
    muted: bool,
}

impl Args {
    fn apply(&self, config: &mut AppConfig) {
        if let Some(renderer) = self.renderer {
            config.playback.renderer = renderer;
        }
        config.playback.autoplay |= self.autoplay;
        config.playback.muted |= self.muted;
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut config = AppConfig::load_from(&args.config_dir).unwrap_or_else(|e| {
        warn!("{}. Using defaults.", e);
        AppConfig::default()
    });
    args.apply(&mut config);

    let portfolio = match &args.portfolio {
        Some(path) => Portfolio::load(path)?,
        None => Portfolio::sample(),
    };
    info!("Presenting portfolio of {}", portfolio.name);

    let mut builder = raylib::init();
    builder
        .size(config.window.width, config.window.height)
        .title(&config.window.title);
    if config.window.vsync {
        builder.vsync();
    }
    if config.window.resizable {
        builder.resizable();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.window.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let audio = match RaylibAudio::init_audio_device() {
        Ok(audio) => Some(audio),
        Err(e) => {
            warn!("Audio unavailable, chime disabled: {}", e);
            None
        }
    };
    let mut chime = match &audio {
        Some(audio) => Chime::new(audio, config.playback.muted),
        None => Chime::silent(config.playback.muted),
    };

    let mut framebuffer = rl
        .load_render_texture(&thread, RENDER_WIDTH as u32, RENDER_HEIGHT as u32)
        .map_err(|e| anyhow!("{}", e))
        .context("Failed to create render texture")?;

    let mut show = Show::new(&config, &portfolio);
    chime.play(show.scene());

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        // --- Input ---
        let screen_width = rl.get_screen_width() as f32;
        let screen_height = rl.get_screen_height() as f32;
        let position = to_render_space(rl.get_mouse_position(), screen_width, screen_height);
        let pointer = Pointer {
            position,
            drag: if rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_RIGHT) {
                rl.get_mouse_delta()
            } else {
                Vector2::new(0.0, 0.0)
            },
            wheel: rl.get_mouse_wheel_move(),
        };

        while let Some(key) = rl.get_key_pressed() {
            if let Some(command) = command_for_key(key) {
                show.apply(command, &mut chime);
            }
        }
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            if let Some(command) = show.overlay().control_bar().hit_test(position) {
                show.apply(command, &mut chime);
            }
        }

        // --- Update ---
        show.update(dt, &pointer, &mut chime);

        // --- Render into the fixed size framebuffer, then scale to the window ---
        let mut d = rl.begin_drawing(&thread);
        {
            let mut tmd = d.begin_texture_mode(&thread, &mut framebuffer);
            show.render_frame(&mut tmd, &chime, position);
        }

        d.clear_background(Color::BLACK);
        d.draw_texture_pro(
            &framebuffer,
            Rectangle::new(0.0, 0.0, framebuffer.width() as f32, -(framebuffer.height() as f32)),
            Rectangle::new(0.0, 0.0, screen_width, screen_height),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }

    info!("Presentation closed");
    Ok(())
}
