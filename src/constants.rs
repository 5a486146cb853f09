use raylib::prelude::Color;

pub const RENDER_WIDTH: i32 = 1920;           // Width of the render texture
pub const RENDER_HEIGHT: i32 = 1080;          // Height of the render texture
pub const FPS: u32 = 60;                      // Default target frames per second

pub const ENTRANCE_DURATION: f32 = 0.6;       // Scene entrance animation (seconds)
pub const PROGRESS_DURATION: f32 = 0.5;       // Progress bar catch-up (seconds)
pub const TITLE_SLIDE_DURATION: f32 = 0.5;    // Scene title slide-in (seconds)

// Neon palette shared by both renderers
pub const BACKGROUND: Color = Color::new(8, 10, 22, 255);
pub const PRIMARY: Color = Color::new(0, 255, 255, 255);
pub const SECONDARY: Color = Color::new(255, 0, 255, 255);
pub const ACCENT: Color = Color::new(255, 255, 0, 255);
pub const MUTED: Color = Color::new(68, 68, 68, 255);
pub const FOREGROUND: Color = Color::new(235, 240, 255, 255);
pub const LINKEDIN_BLUE: Color = Color::new(0, 119, 181, 255);
pub const SIGNAL_GREEN: Color = Color::new(0, 255, 0, 255);

/// Scales a color's alpha by `opacity` (clamped to 0..1).
pub fn faded(color: Color, opacity: f32) -> Color {
    Color::new(color.r, color.g, color.b, (color.a as f32 * opacity.clamp(0.0, 1.0)) as u8)
}
