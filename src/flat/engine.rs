use raylib::prelude::*;

use crate::constants::*;
use crate::flat::layout::*;
use crate::flat::particles::{Particle, scatter};
use crate::input::Pointer;
use crate::portfolio::Portfolio;
use crate::scene::{LEVEL_DOTS, Scene, skill_level};
use crate::transition::Entrance;

const GRID_STEP: i32 = 60;

pub struct FlatEngine {
    portfolio: Portfolio,
    scene: Scene,
    entrance: Entrance,
    particles: Vec<Particle>,
    time: f32,
}

/// Everything a scene draw call needs for this frame.
struct Frame {
    opacity: f32,
    scale: f32,
    offset: Vector2,
}

impl Frame {
    fn color(&self, color: Color) -> Color {
        faded(color, self.opacity)
    }

    /// Applies the entrance scale (about the screen center) and offset.
    fn point(&self, x: f32, y: f32) -> Vector2 {
        let cx = RENDER_WIDTH as f32 * 0.5;
        let cy = RENDER_HEIGHT as f32 * 0.5;
        Vector2::new(
            cx + (x - cx) * self.scale + self.offset.x,
            cy + (y - cy) * self.scale + self.offset.y,
        )
    }

    fn rect(&self, r: Rectangle) -> Rectangle {
        let p = self.point(r.x, r.y);
        Rectangle::new(p.x, p.y, r.width * self.scale, r.height * self.scale)
    }

    fn size(&self, px: i32) -> i32 {
        ((px as f32 * self.scale) as i32).max(1)
    }
}

fn centered_text<D: RaylibDraw>(d: &mut D, text: &str, center: Vector2, size: i32, color: Color) {
    let width = measure_text(text, size);
    d.draw_text(text, center.x as i32 - width / 2, center.y as i32 - size / 2, size, color);
}

fn panel<D: RaylibDraw>(d: &mut D, rect: Rectangle, f: &Frame, glow: Color) {
    d.draw_rectangle_rounded(rect, 0.12, 8, f.color(Color::new(16, 22, 44, 220)));
    d.draw_rectangle_lines_ex(rect, 2.0, f.color(faded(glow, 0.6)));
}

impl FlatEngine {
    pub fn new() -> Self {
        let mut rng = rand::rng();
        Self {
            portfolio: Portfolio::sample(),
            scene: Scene::Introduction,
            entrance: Entrance::new(Scene::Introduction),
            particles: scatter(&mut rng),
            time: 0.0,
        }
    }

    fn frame(&self) -> Frame {
        Frame {
            opacity: self.entrance.opacity(),
            scale: self.entrance.scale(),
            offset: self.entrance.offset(),
        }
    }

    fn draw_background<D: RaylibDraw>(&self, d: &mut D) {
        d.clear_background(BACKGROUND);

        let line = faded(PRIMARY, 0.06);
        for x in (0..RENDER_WIDTH).step_by(GRID_STEP as usize) {
            d.draw_line(x, 0, x, RENDER_HEIGHT, line);
        }
        for y in (0..RENDER_HEIGHT).step_by(GRID_STEP as usize) {
            d.draw_line(0, y, RENDER_WIDTH, y, line);
        }

        for particle in &self.particles {
            d.draw_circle_v(particle.position(self.time), 2.0, faded(PRIMARY, 0.7));
        }
    }

    fn draw_heading<D: RaylibDraw>(&self, d: &mut D, f: &Frame) {
        if let Some(heading) = self.scene.heading() {
            centered_text(d, heading, f.point(RENDER_WIDTH as f32 * 0.5, 170.0), f.size(64), f.color(PRIMARY));
        }
    }

    fn draw_intro<D: RaylibDraw>(&self, d: &mut D, f: &Frame) {
        let cx = RENDER_WIDTH as f32 * 0.5;
        let pulse = 0.5 + 0.5 * (self.time * 2.0).sin();
        let bob = (self.time * 1.5).sin() * 10.0;

        let avatar = f.point(cx, 280.0);
        d.draw_circle_v(avatar, 150.0 * f.scale, f.color(faded(PRIMARY, 0.1 + 0.2 * pulse)));
        d.draw_circle_gradient(avatar.x as i32, avatar.y as i32, 80.0 * f.scale, f.color(PRIMARY), f.color(SECONDARY));
        d.draw_circle_v(Vector2::new(avatar.x, avatar.y + bob), 50.0 * f.scale, f.color(BACKGROUND));

        let p = &self.portfolio;
        centered_text(d, &p.name, f.point(cx, 480.0), f.size(96), f.color(PRIMARY));
        centered_text(d, &p.title, f.point(cx, 580.0), f.size(48), f.color(SECONDARY));
        centered_text(d, &p.field, f.point(cx, 650.0), f.size(32), f.color(FOREGROUND));

        for i in 0..6 {
            let x = cx + (i as f32 - 2.5) * 48.0;
            let y = 740.0 + (self.time * 2.0 + i as f32 * 0.5).sin() * 8.0;
            d.draw_circle_v(f.point(x, y), 8.0 * f.scale, f.color(PRIMARY));
        }
    }

    fn draw_skills<D: RaylibDraw>(&self, d: &mut D, f: &Frame) {
        self.draw_heading(d, f);

        let skills: Vec<_> = self.portfolio.skills.iter().take(MAX_SKILL_CARDS).collect();
        for (index, skill) in skills.iter().enumerate() {
            let appear = self.entrance.staggered(index as f32 * SKILL_STAGGER);
            if appear <= 0.0 {
                continue;
            }
            let cell = grid_cell(index, skills.len(), SKILL_COLUMNS, SKILL_CARD, CARD_GAP, CONTENT_TOP);
            let card = f.rect(Rectangle::new(
                cell.x + cell.width * (1.0 - appear) * 0.5,
                cell.y + cell.height * (1.0 - appear) * 0.5,
                cell.width * appear,
                cell.height * appear,
            ));
            let cf = Frame { opacity: f.opacity * appear, scale: f.scale * appear, offset: f.offset };
            panel(d, card, &cf, PRIMARY);

            let cx = card.x + card.width * 0.5;
            let (inner, outer) = skill_gradient(index);
            let disc = Vector2::new(cx, card.y + 50.0 * cf.scale);
            d.draw_circle_gradient(disc.x as i32, disc.y as i32, 28.0 * cf.scale, cf.color(inner), cf.color(outer));
            d.draw_circle_v(disc, 12.0 * cf.scale, cf.color(BACKGROUND));

            centered_text(d, skill, Vector2::new(cx, card.y + 108.0 * cf.scale), cf.size(22), cf.color(FOREGROUND));

            let level = skill_level(index);
            for dot in 0..LEVEL_DOTS {
                let color = if dot < level { PRIMARY } else { MUTED };
                let x = cx + (dot as f32 - 2.0) * 16.0 * cf.scale;
                d.draw_circle_v(Vector2::new(x, card.y + 145.0 * cf.scale), 5.0 * cf.scale, cf.color(color));
            }
        }
    }

    fn draw_projects<D: RaylibDraw>(&self, d: &mut D, f: &Frame) {
        self.draw_heading(d, f);

        let projects: Vec<_> = self.portfolio.projects.iter().take(MAX_PROJECT_CARDS).collect();
        for (index, project) in projects.iter().enumerate() {
            let appear = self.entrance.staggered(index as f32 * PROJECT_STAGGER);
            if appear <= 0.0 {
                continue;
            }
            let cell = grid_cell(index, projects.len(), PROJECT_COLUMNS, PROJECT_CARD, CARD_GAP, CONTENT_TOP);
            // Cards swing in edge-on, so only the width grows
            let cell = Rectangle::new(
                cell.x + cell.width * (1.0 - appear) * 0.5,
                cell.y,
                cell.width * appear,
                cell.height,
            );
            let card = f.rect(cell);
            let cf = Frame { opacity: f.opacity * appear, scale: f.scale, offset: f.offset };
            panel(d, card, &cf, SECONDARY);

            let pad = 20.0 * cf.scale;
            let banner = Rectangle::new(card.x + pad, card.y + pad, card.width - 2.0 * pad, 90.0 * cf.scale);
            d.draw_rectangle_gradient_h(
                banner.x as i32,
                banner.y as i32,
                banner.width as i32,
                banner.height as i32,
                cf.color(faded(PRIMARY, 0.8)),
                cf.color(faded(SECONDARY, 0.8)),
            );
            centered_text(
                d,
                &project.name,
                Vector2::new(banner.x + banner.width * 0.5, banner.y + banner.height * 0.5),
                cf.size(30),
                cf.color(Color::WHITE),
            );
            for (i, _) in project.technologies.iter().take(MAX_TECH_DOTS).enumerate() {
                let x = banner.x + banner.width - (12.0 + i as f32 * 18.0) * cf.scale;
                let y = banner.y + banner.height - 12.0 * cf.scale;
                d.draw_circle_v(Vector2::new(x, y), 6.0 * cf.scale, cf.color(tech_dot_color(MAX_TECH_DOTS - 1 - i)));
            }

            let mut y = banner.y + banner.height + 16.0 * cf.scale;
            for line in wrap(&project.description, 52) {
                d.draw_text(&line, (card.x + pad) as i32, y as i32, cf.size(22), cf.color(faded(FOREGROUND, 0.7)));
                y += 28.0 * cf.scale;
            }

            // Technology chips flow left to right, wrapping at the card edge
            let chip_size = cf.size(18);
            let mut x = card.x + pad;
            y += 10.0 * cf.scale;
            for tech in &project.technologies {
                let width = measure_text(tech, chip_size) as f32 + 20.0 * cf.scale;
                if x + width > card.x + card.width - pad {
                    x = card.x + pad;
                    y += 34.0 * cf.scale;
                }
                let chip = Rectangle::new(x, y, width, 28.0 * cf.scale);
                d.draw_rectangle_rounded(chip, 1.0, 8, cf.color(faded(PRIMARY, 0.2)));
                d.draw_text(tech, (x + 10.0 * cf.scale) as i32, (y + 5.0 * cf.scale) as i32, chip_size, cf.color(PRIMARY));
                x += width + 8.0 * cf.scale;
            }
        }
    }

    fn draw_contact<D: RaylibDraw>(&self, d: &mut D, f: &Frame) {
        self.draw_heading(d, f);

        let cx = RENDER_WIDTH as f32 * 0.5;
        let pulse = 0.5 + 0.5 * (self.time * 2.0).sin();
        let outer = f.rect(Rectangle::new(cx - 420.0, 240.0, 840.0, 600.0));
        d.draw_rectangle_rounded(outer, 0.1, 8, f.color(faded(SECONDARY, 0.05 + 0.1 * pulse)));
        panel(d, outer, f, PRIMARY);

        let orb = f.point(cx, 330.0 + (self.time * 1.5).sin() * 10.0);
        d.draw_circle_gradient(orb.x as i32, orb.y as i32, 48.0 * f.scale, f.color(SIGNAL_GREEN), f.color(LINKEDIN_BLUE));
        d.draw_circle_v(orb, 24.0 * f.scale, f.color(BACKGROUND));

        let entries = [
            ("Email", self.portfolio.email.as_str(), PRIMARY, 420.0),
            ("LinkedIn", self.portfolio.linkedin.as_str(), SECONDARY, 560.0),
        ];
        for (caption, value, color, top) in entries {
            let rect = f.rect(Rectangle::new(cx - 340.0, top, 680.0, 110.0));
            panel(d, rect, f, color);
            centered_text(d, caption, Vector2::new(rect.x + rect.width * 0.5, rect.y + 35.0 * f.scale), f.size(28), f.color(color));
            centered_text(d, value, Vector2::new(rect.x + rect.width * 0.5, rect.y + 75.0 * f.scale), f.size(26), f.color(FOREGROUND));
        }

        centered_text(d, "Thank You!", f.point(cx, 760.0), f.size(44), f.color(faded(ACCENT, 0.6 + 0.4 * pulse)));
    }
}

impl Default for FlatEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl crate::engine::Engine for FlatEngine {
    fn initialize(&mut self, portfolio: &Portfolio) {
        self.portfolio = portfolio.clone();
        self.entrance = Entrance::new(self.scene);
    }

    fn scene_changed(&mut self, scene: Scene) {
        self.scene = scene;
        self.entrance = Entrance::new(scene);
    }

    fn update(&mut self, dt: f32, _pointer: &Pointer) {
        self.time += dt;
        self.entrance.update(dt);
    }

    fn render_frame<D: RaylibDraw + RaylibMode3DExt>(&self, d: &mut D) {
        self.draw_background(d);

        let f = self.frame();
        match self.scene {
            Scene::Introduction => self.draw_intro(d, &f),
            Scene::Skills => self.draw_skills(d, &f),
            Scene::Projects => self.draw_projects(d, &f),
            Scene::Contact => self.draw_contact(d, &f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Engine;

    #[test]
    fn scene_change_restarts_entrance() {
        let mut engine = FlatEngine::new();
        engine.initialize(&Portfolio::sample());
        engine.update(2.0, &Pointer::default());
        assert_eq!(engine.frame().opacity, 1.0);

        engine.scene_changed(Scene::Projects);
        let f = engine.frame();
        assert_eq!(f.opacity, 0.0);
        assert_eq!(f.offset.x, 100.0);
    }

    #[test]
    fn frame_scales_about_center() {
        let f = Frame { opacity: 1.0, scale: 0.5, offset: Vector2::new(0.0, 0.0) };
        let c = f.point(RENDER_WIDTH as f32 * 0.5, RENDER_HEIGHT as f32 * 0.5);
        assert_eq!(c.x, RENDER_WIDTH as f32 * 0.5);
        let corner = f.point(0.0, 0.0);
        assert_eq!(corner.x, RENDER_WIDTH as f32 * 0.25);
    }
}
