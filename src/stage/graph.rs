//! Scene graph construction for the 3D renderer. Each scene becomes a flat
//! list of nodes; the whole group spins about Y while the scene is active.

use std::f32::consts::{PI, TAU};

use rand::Rng;
use raylib::prelude::*;

use crate::constants::*;
use crate::portfolio::Portfolio;
use crate::scene::{LEVEL_DOTS, Scene, skill_level};

pub const MAX_SKILLS: usize = 8;
pub const MAX_PROJECTS: usize = 6;
pub const MAX_TECH_ORBS: usize = 4;

const SKILL_RADIUS: f32 = 4.0;
const PROJECT_RADIUS: f32 = 5.0;

#[derive(Debug, Clone)]
pub enum Shape {
    Sphere { radius: f32 },
    WireSphere { radius: f32 },
    Cube { size: Vector3 },
    /// Circle outline rotated `angle` degrees about `axis`
    Ring { radius: f32, axis: Vector3, angle: f32 },
    /// Cylinder from the node position to `end`
    Beam { end: Vector3, radius: f32 },
    /// Square line grid, horizontal unless `vertical`
    Grid { size: f32, divisions: i32, vertical: bool },
    Label { text: String, size: f32 },
}

/// Gentle bobbing applied on top of the node position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Float {
    pub speed: f32,
    pub amplitude: f32,
    pub phase: f32,
}

impl Float {
    fn new(speed: f32, amplitude: f32, phase: f32) -> Self {
        Self { speed, amplitude, phase }
    }

    pub fn offset(&self, time: f32) -> f32 {
        (time * self.speed + self.phase).sin() * self.amplitude
    }
}

/// What a node stands for, so callers can find the data-driven parts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tag {
    Decoration,
    Heading,
    Profile,
    SkillOrb(usize),
    LevelDot { skill: usize, lit: bool },
    ProjectScreen(usize),
    TechOrb { project: usize, tech: usize },
    ContactPanel,
}

#[derive(Debug, Clone)]
pub struct Node {
    pub shape: Shape,
    pub position: Vector3,
    pub color: Color,
    pub float: Option<Float>,
    pub tag: Tag,
}

impl Node {
    fn new(shape: Shape, position: Vector3, color: Color) -> Self {
        Self {
            shape,
            position,
            color,
            float: None,
            tag: Tag::Decoration,
        }
    }

    fn label(text: &str, size: f32, position: Vector3, color: Color) -> Self {
        Self::new(Shape::Label { text: text.to_string(), size }, position, color)
    }

    fn floating(mut self, float: Float) -> Self {
        self.float = Some(float);
        self
    }

    fn tagged(mut self, tag: Tag) -> Self {
        self.tag = tag;
        self
    }

    /// World position at `time` with the group turned by `angle` about Y.
    pub fn world_position(&self, time: f32, angle: f32) -> Vector3 {
        let mut p = rotate_y(self.position, angle);
        if let Some(float) = self.float {
            p.y += float.offset(time);
        }
        p
    }
}

pub fn rotate_y(v: Vector3, angle: f32) -> Vector3 {
    let (sin, cos) = angle.sin_cos();
    Vector3::new(v.x * cos + v.z * sin, v.y, -v.x * sin + v.z * cos)
}

pub struct SceneGraph {
    pub nodes: Vec<Node>,
    /// Group rotation rate while active (rad/s)
    pub spin: f32,
}

impl SceneGraph {
    pub fn build(scene: Scene, portfolio: &Portfolio, rng: &mut impl Rng) -> Self {
        match scene {
            Scene::Introduction => intro(portfolio),
            Scene::Skills => skills(portfolio),
            Scene::Projects => projects(portfolio, rng),
            Scene::Contact => contact(portfolio),
        }
    }

    pub fn tagged(&self, pred: impl Fn(&Tag) -> bool) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(move |n| pred(&n.tag))
    }
}

// Dimmed stand-in for an emissive panel surface
fn glow(color: Color) -> Color {
    Color::new(color.r / 6, color.g / 6, color.b / 6, 220)
}

fn grid(y: f32, size: f32, divisions: i32, color: Color) -> Node {
    Node::new(Shape::Grid { size, divisions, vertical: false }, Vector3::new(0.0, y, 0.0), faded(color, 0.25))
}

fn intro(portfolio: &Portfolio) -> SceneGraph {
    let mut nodes = Vec::new();
    let core = Vector3::new(0.0, 0.0, -2.0);

    nodes.push(
        Node::new(Shape::WireSphere { radius: 2.0 }, core, faded(PRIMARY, 0.35))
            .floating(Float::new(2.0, 0.5, 0.0)),
    );

    for i in 0..3 {
        let ring = Shape::Ring {
            radius: 2.5 + i as f32 * 0.5,
            axis: Vector3::new(1.0, 0.0, i as f32 * 0.4).normalized(),
            angle: 90.0,
        };
        nodes.push(Node::new(ring, core, faded(SECONDARY, 0.6)).floating(Float::new(1.0 + i as f32 * 0.5, 0.2, i as f32)));
    }

    nodes.push(Node::label(&portfolio.name, 0.8, Vector3::new(0.0, 3.0, 0.0), PRIMARY).tagged(Tag::Profile));
    nodes.push(Node::label(&portfolio.title, 0.4, Vector3::new(0.0, 1.5, 0.0), SECONDARY).tagged(Tag::Profile));
    nodes.push(Node::label(&portfolio.field, 0.3, Vector3::new(0.0, 0.5, 0.0), FOREGROUND).tagged(Tag::Profile));

    for i in 0..8 {
        let a = i as f32 / 8.0 * TAU;
        let position = Vector3::new(a.cos() * 6.0, a.sin() * 2.0, (a * 2.0).sin() * 3.0 - 2.0);
        let color = if i % 2 == 0 { PRIMARY } else { SECONDARY };
        nodes.push(
            Node::new(Shape::Cube { size: Vector3::new(0.2, 0.2, 0.2) }, position, faded(color, 0.7))
                .floating(Float::new(1.0 + i as f32 * 0.12, 0.3, a)),
        );
    }

    let mut floor = grid(-3.0, 20.0, 32, PRIMARY);
    floor.position.z = -2.0;
    nodes.push(floor);

    SceneGraph { nodes, spin: 0.1 }
}

fn skill_color(index: usize) -> Color {
    match index % 3 {
        0 => PRIMARY,
        1 => SECONDARY,
        _ => ACCENT,
    }
}

fn skills(portfolio: &Portfolio) -> SceneGraph {
    let mut nodes = vec![
        Node::label("Technical Skills", 0.6, Vector3::new(0.0, 4.0, 0.0), PRIMARY).tagged(Tag::Heading),
    ];

    let skills: Vec<_> = portfolio.skills.iter().take(MAX_SKILLS).collect();
    for (index, skill) in skills.iter().enumerate() {
        let angle = index as f32 / skills.len() as f32 * TAU;
        let x = angle.cos() * SKILL_RADIUS;
        let z = angle.sin() * SKILL_RADIUS;
        let at = |dx: f32, y: f32| Vector3::new(x + dx, y, z);

        nodes.push(
            Node::new(Shape::Sphere { radius: 0.8 }, at(0.0, 0.0), faded(skill_color(index), 0.7))
                .floating(Float::new(1.0 + index as f32 * 0.2, 0.3, index as f32))
                .tagged(Tag::SkillOrb(index)),
        );
        nodes.push(Node::label(skill, 0.2, at(0.0, -1.5), FOREGROUND));
        nodes.push(Node::new(
            Shape::Beam { end: Vector3::zero(), radius: 0.02 },
            at(0.0, 0.0),
            faded(PRIMARY, 0.4),
        ));

        let level = skill_level(index);
        for dot in 0..LEVEL_DOTS {
            let lit = dot < level;
            let color = if lit { SIGNAL_GREEN } else { MUTED };
            nodes.push(
                Node::new(Shape::Sphere { radius: 0.05 }, at((dot as f32 - 2.0) * 0.15, 1.2), color)
                    .tagged(Tag::LevelDot { skill: index, lit }),
            );
        }
    }

    nodes.push(
        Node::new(Shape::WireSphere { radius: 1.0 }, Vector3::zero(), faded(FOREGROUND, 0.2))
            .floating(Float::new(0.5, 0.2, 0.0)),
    );

    for i in 0..12 {
        let a = i as f32 / 12.0 * TAU;
        let position = Vector3::new(a.cos() * 3.0, (i as f32 / 6.0 * PI).sin() * 2.0, a.sin() * 3.0);
        nodes.push(
            Node::new(Shape::Sphere { radius: 0.03 }, position, ACCENT)
                .floating(Float::new(2.0 + i as f32 * 0.1, 0.2, a)),
        );
    }

    nodes.push(grid(-2.0, 16.0, 16, PRIMARY));

    SceneGraph { nodes, spin: 0.05 }
}

fn tech_color(index: usize) -> Color {
    match index % 4 {
        0 => Color::new(255, 0, 0, 255),
        1 => Color::new(0, 255, 0, 255),
        2 => Color::new(0, 0, 255, 255),
        _ => Color::new(255, 255, 0, 255),
    }
}

fn projects(portfolio: &Portfolio, rng: &mut impl Rng) -> SceneGraph {
    let mut nodes = vec![
        Node::label("Featured Projects", 0.6, Vector3::new(0.0, 5.0, 0.0), SECONDARY).tagged(Tag::Heading),
    ];

    let projects: Vec<_> = portfolio.projects.iter().take(MAX_PROJECTS).collect();
    let count = projects.len() as f32;
    for (index, project) in projects.iter().enumerate() {
        let angle = index as f32 / count * TAU;
        let x = angle.cos() * PROJECT_RADIUS;
        let z = angle.sin() * PROJECT_RADIUS;
        let y = (index as f32 - count / 2.0) * 1.5;
        let at = |dx: f32, dy: f32, dz: f32| Vector3::new(x + dx, y + dy, z + dz);

        nodes.push(
            Node::new(Shape::Cube { size: Vector3::new(3.0, 2.0, 0.1) }, at(0.0, 0.0, 0.0), glow(PRIMARY))
                .tagged(Tag::ProjectScreen(index)),
        );
        nodes.push(Node::new(
            Shape::Cube { size: Vector3::new(3.2, 2.2, 0.05) },
            at(0.0, 0.0, -0.1),
            faded(PRIMARY, 0.5),
        ));
        nodes.push(Node::label(&project.name, 0.15, at(0.0, 1.5, 0.1), FOREGROUND));

        for (tech, _) in project.technologies.iter().take(MAX_TECH_ORBS).enumerate() {
            nodes.push(
                Node::new(Shape::Sphere { radius: 0.1 }, at((tech as f32 - 1.5) * 0.4, -1.5, 0.2), tech_color(tech))
                    .floating(Float::new(1.0 + tech as f32 * 0.3, 0.1, tech as f32))
                    .tagged(Tag::TechOrb { project: index, tech }),
            );
        }

        // Bar chart on the screen face
        for bar in 0..5 {
            let height = rng.random_range(0.2..1.0);
            let base = at((bar as f32 - 2.0) * 0.3, -0.5 - height * 0.5, 0.2);
            nodes.push(Node::new(
                Shape::Beam { end: Vector3::new(base.x, base.y + height, base.z), radius: 0.05 },
                base,
                faded(SIGNAL_GREEN, 0.7),
            ));
        }

        nodes.push(Node::new(
            Shape::Beam { end: Vector3::zero(), radius: 0.01 },
            at(0.0, 0.0, 0.0),
            faded(SECONDARY, 0.6),
        ));

        for bit in 0..3 {
            let offset = Vector3::new(
                rng.random_range(-2.0..2.0),
                rng.random_range(-1.5..1.5),
                rng.random_range(0.5..1.0),
            );
            nodes.push(
                Node::new(Shape::Cube { size: Vector3::new(0.05, 0.05, 0.05) }, at(offset.x, offset.y, offset.z), FOREGROUND)
                    .floating(Float::new(1.5 + bit as f32 * 0.2, 0.2, bit as f32)),
            );
        }
    }

    nodes.push(
        Node::new(Shape::WireSphere { radius: 0.8 }, Vector3::zero(), faded(SECONDARY, 0.3))
            .floating(Float::new(0.3, 0.2, 0.0)),
    );

    for i in 0..3 {
        let ring = Shape::Ring {
            radius: 3.0 + i as f32 * 0.5,
            axis: Vector3::new(1.0, 0.0, 1.0).normalized(),
            angle: 60.0 * i as f32,
        };
        nodes.push(Node::new(ring, Vector3::zero(), faded(PRIMARY, 0.4)));
    }

    for i in 0..15 {
        let t = i as f32 / 15.0;
        let reach = 2.0 + (i as f32).sin() * 2.0;
        let position = Vector3::new((t * 2.0 * TAU).cos() * reach, (t * TAU).sin() * 4.0, (t * 2.0 * TAU).sin() * reach);
        nodes.push(
            Node::new(Shape::Sphere { radius: 0.02 }, position, FOREGROUND)
                .floating(Float::new(3.0 + i as f32 * 0.1, 0.2, i as f32)),
        );
    }

    nodes.push(Node::new(
        Shape::Grid { size: 20.0, divisions: 20, vertical: true },
        Vector3::new(0.0, 0.0, -8.0),
        faded(SECONDARY, 0.15),
    ));

    SceneGraph { nodes, spin: 0.02 }
}

fn contact(portfolio: &Portfolio) -> SceneGraph {
    let mut nodes = vec![
        Node::label("Let's Connect", 0.7, Vector3::new(0.0, 4.0, 0.0), SIGNAL_GREEN).tagged(Tag::Heading),
        Node::new(Shape::WireSphere { radius: 1.5 }, Vector3::zero(), faded(SIGNAL_GREEN, 0.6))
            .floating(Float::new(1.0, 0.3, 0.0)),
    ];

    let panels = [
        ("Email", portfolio.email.as_str(), -4.0, PRIMARY),
        ("LinkedIn", portfolio.linkedin.as_str(), 4.0, LINKEDIN_BLUE),
    ];
    for (caption, value, x, color) in panels {
        let float = Float::new(0.8, 0.4, x);
        nodes.push(
            Node::new(Shape::Cube { size: Vector3::new(3.0, 1.0, 0.1) }, Vector3::new(x, 1.0, 2.0), glow(color))
                .floating(float)
                .tagged(Tag::ContactPanel),
        );
        nodes.push(Node::label(caption, 0.15, Vector3::new(x, 1.0, 2.1), color).floating(float));
        nodes.push(Node::label(value, 0.1, Vector3::new(x, 0.7, 2.1), FOREGROUND).floating(float));
    }

    nodes.push(Node::label("Thank You!", 0.4, Vector3::new(0.0, -2.0, 0.0), ACCENT));

    for i in 0..8 {
        let a = i as f32 / 8.0 * TAU;
        nodes.push(Node::new(
            Shape::Beam { end: Vector3::new(a.cos() * 3.0, 0.0, a.sin() * 3.0), radius: 0.01 },
            Vector3::zero(),
            faded(SIGNAL_GREEN, 0.6),
        ));
    }

    let social = [Color::new(29, 161, 242, 255), LINKEDIN_BLUE, Color::new(51, 51, 51, 255)];
    for i in 0..6 {
        let a = i as f32 / 6.0 * TAU;
        nodes.push(
            Node::new(
                Shape::Cube { size: Vector3::new(0.3, 0.3, 0.1) },
                Vector3::new(a.cos() * 5.0, (a * 2.0).sin() * 2.0, a.sin() * 5.0),
                social[i % 3],
            )
            .floating(Float::new(1.0 + i as f32 * 0.2, 0.4, a)),
        );
    }

    for i in 0..12 {
        let a = i as f32 / 12.0 * TAU;
        let position = Vector3::new(a.cos() * 4.0, (i as f32 / 6.0 * PI).sin() * 3.0, a.sin() * 4.0);
        nodes.push(
            Node::new(Shape::Sphere { radius: 0.03 }, position, SIGNAL_GREEN)
                .floating(Float::new(2.0 + i as f32 * 0.1, 0.2, a)),
        );
    }

    for i in 0..4 {
        let ring = Shape::Ring {
            radius: 2.0 + i as f32 * 0.5,
            axis: Vector3::new(1.0, 0.0, 0.0),
            angle: 90.0 + i as f32 * 45.0,
        };
        nodes.push(Node::new(ring, Vector3::zero(), faded(SIGNAL_GREEN, 0.5 - i as f32 * 0.1)));
    }

    nodes.push(grid(-3.0, 16.0, 16, SIGNAL_GREEN));

    SceneGraph { nodes, spin: 0.1 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn build(scene: Scene, portfolio: &Portfolio) -> SceneGraph {
        SceneGraph::build(scene, portfolio, &mut StdRng::seed_from_u64(7))
    }

    fn labels(graph: &SceneGraph) -> Vec<&str> {
        graph
            .nodes
            .iter()
            .filter_map(|n| match &n.shape {
                Shape::Label { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn intro_shows_profile() {
        let portfolio = Portfolio::sample();
        let graph = build(Scene::Introduction, &portfolio);
        let profile: Vec<_> = graph.tagged(|t| *t == Tag::Profile).collect();
        assert_eq!(profile.len(), 3);
        assert!(labels(&graph).contains(&"Alex Johnson"));
        assert_eq!(graph.spin, 0.1);
    }

    #[test]
    fn skills_are_capped_and_placed_on_a_circle() {
        let mut portfolio = Portfolio::sample();
        portfolio.skills.push("Rust".to_string());
        portfolio.skills.push("Go".to_string());

        let graph = build(Scene::Skills, &portfolio);
        let orbs: Vec<_> = graph.tagged(|t| matches!(t, Tag::SkillOrb(_))).collect();
        assert_eq!(orbs.len(), MAX_SKILLS);
        for orb in orbs {
            let r = (orb.position.x.powi(2) + orb.position.z.powi(2)).sqrt();
            assert!((r - SKILL_RADIUS).abs() < 1e-4);
        }
        assert!(!labels(&graph).contains(&"Rust"));
    }

    #[test]
    fn level_meter_lights_by_position() {
        let graph = build(Scene::Skills, &Portfolio::sample());
        for skill in 0..3 {
            let lit = graph
                .tagged(|t| *t == Tag::LevelDot { skill, lit: true })
                .count();
            let total = graph
                .tagged(|t| matches!(t, Tag::LevelDot { skill: s, .. } if *s == skill))
                .count();
            assert_eq!(lit, 3 + skill);
            assert_eq!(total, LEVEL_DOTS);
        }
    }

    #[test]
    fn empty_lists_degrade_to_decoration() {
        let mut portfolio = Portfolio::sample();
        portfolio.skills.clear();
        portfolio.projects.clear();

        let skills = build(Scene::Skills, &portfolio);
        assert_eq!(skills.tagged(|t| matches!(t, Tag::SkillOrb(_))).count(), 0);
        let projects = build(Scene::Projects, &portfolio);
        assert_eq!(projects.tagged(|t| matches!(t, Tag::ProjectScreen(_))).count(), 0);
        assert!(projects.nodes.iter().all(|n| n.position.x.is_finite()));
    }

    #[test]
    fn projects_climb_a_helix() {
        let graph = build(Scene::Projects, &Portfolio::sample());
        let screens: Vec<_> = graph.tagged(|t| matches!(t, Tag::ProjectScreen(_))).collect();
        assert_eq!(screens.len(), 4);
        let heights: Vec<_> = screens.iter().map(|n| n.position.y).collect();
        assert_eq!(heights, [-3.0, -1.5, 0.0, 1.5]);
    }

    #[test]
    fn tech_orbs_are_capped_per_project() {
        let mut portfolio = Portfolio::sample();
        portfolio.projects[0].technologies.push("Kafka".to_string());
        let graph = build(Scene::Projects, &portfolio);
        let first = graph.tagged(|t| matches!(t, Tag::TechOrb { project: 0, .. })).count();
        assert_eq!(first, MAX_TECH_ORBS);
    }

    #[test]
    fn contact_panels_flank_the_orb() {
        let graph = build(Scene::Contact, &Portfolio::sample());
        let xs: Vec<_> = graph.tagged(|t| *t == Tag::ContactPanel).map(|n| n.position.x).collect();
        assert_eq!(xs, [-4.0, 4.0]);
        let text = labels(&graph);
        assert!(text.contains(&"alex.johnson@email.com"));
        assert!(text.contains(&"Thank You!"));
    }

    #[test]
    fn group_rotation_keeps_radius() {
        let node = Node::new(Shape::Sphere { radius: 1.0 }, Vector3::new(4.0, 1.0, 0.0), PRIMARY);
        let p = node.world_position(0.0, PI / 2.0);
        assert!(p.x.abs() < 1e-4);
        assert!((p.z.abs() - 4.0).abs() < 1e-4);
        assert_eq!(p.y, 1.0);
    }
}
