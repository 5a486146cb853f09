use log::debug;
use rand::rngs::ThreadRng;
use raylib::prelude::*;

use crate::config::StageConfig;
use crate::constants::*;
use crate::input::Pointer;
use crate::portfolio::Portfolio;
use crate::scene::Scene;
use crate::stage::camera::OrbitCamera;
use crate::stage::graph::{SceneGraph, Shape, rotate_y};

// Label pixel size per world unit at unit depth
const LABEL_SCALE: f32 = 900.0;
const MIN_LABEL_PX: i32 = 12;

struct ProjectedLabel {
    text: String,
    at: Vector2,
    font_size: i32,
    color: Color,
    depth: f32,
}

pub struct StageEngine {
    portfolio: Portfolio,
    scene: Scene,
    graph: SceneGraph,
    camera: OrbitCamera,
    rng: ThreadRng,

    time: f32,
    angle: f32,
    labels: Vec<ProjectedLabel>,
}

impl StageEngine {
    pub fn new(config: &StageConfig) -> Self {
        Self {
            portfolio: Portfolio::sample(),
            scene: Scene::Introduction,
            graph: SceneGraph { nodes: Vec::new(), spin: 0.0 },
            camera: OrbitCamera::new(config),
            rng: rand::rng(),
            time: 0.0,
            angle: 0.0,
            labels: Vec::new(),
        }
    }

    fn rebuild(&mut self) {
        self.graph = SceneGraph::build(self.scene, &self.portfolio, &mut self.rng);
        self.angle = 0.0;
        debug!("Stage graph for {}: {} nodes", self.scene.name(), self.graph.nodes.len());
    }

    fn project_labels(&mut self) {
        self.labels.clear();
        for node in &self.graph.nodes {
            let Shape::Label { text, size } = &node.shape else {
                continue;
            };
            let world = node.world_position(self.time, self.angle);
            if let Some((at, depth)) = self.camera.project(world) {
                self.labels.push(ProjectedLabel {
                    text: text.clone(),
                    at,
                    font_size: ((size * LABEL_SCALE / depth) as i32).max(MIN_LABEL_PX),
                    color: node.color,
                    depth,
                });
            }
        }
        // Far labels first so near ones draw on top
        self.labels.sort_by(|a, b| b.depth.total_cmp(&a.depth));
    }
}

impl crate::engine::Engine for StageEngine {
    fn initialize(&mut self, portfolio: &Portfolio) {
        self.portfolio = portfolio.clone();
        self.rebuild();
    }

    fn scene_changed(&mut self, scene: Scene) {
        self.scene = scene;
        self.rebuild();
    }

    fn update(&mut self, dt: f32, pointer: &Pointer) {
        self.time += dt;
        self.angle += self.graph.spin * dt;

        if pointer.drag.x != 0.0 || pointer.drag.y != 0.0 {
            self.camera.orbit(pointer.drag);
        }
        if pointer.wheel != 0.0 {
            self.camera.zoom(pointer.wheel);
        }
        self.camera.update(dt);

        self.project_labels();
    }

    fn render_frame<D: RaylibDraw + RaylibMode3DExt>(&self, d: &mut D) {
        d.clear_background(BACKGROUND);

        {
            let mut d3 = d.begin_mode3D(self.camera.camera());
            for node in &self.graph.nodes {
                let p = node.world_position(self.time, self.angle);
                match &node.shape {
                    Shape::Sphere { radius } => d3.draw_sphere(p, *radius, node.color),
                    Shape::WireSphere { radius } => d3.draw_sphere_wires(p, *radius, 12, 16, node.color),
                    Shape::Cube { size } => d3.draw_cube(p, size.x, size.y, size.z, node.color),
                    Shape::Ring { radius, axis, angle } => {
                        let axis = rotate_y(*axis, self.angle);
                        d3.draw_circle_3D(p, *radius, axis, *angle, node.color);
                    }
                    Shape::Beam { end, radius } => {
                        let end = rotate_y(*end, self.angle);
                        d3.draw_cylinder_ex(p, end, *radius, *radius, 6, node.color);
                    }
                    Shape::Grid { size, divisions, vertical } => {
                        let half = size * 0.5;
                        let step = size / *divisions as f32;
                        for i in 0..=*divisions {
                            let o = -half + i as f32 * step;
                            let (a, b, c, e) = if *vertical {
                                (
                                    Vector3::new(o, -half, 0.0),
                                    Vector3::new(o, half, 0.0),
                                    Vector3::new(-half, o, 0.0),
                                    Vector3::new(half, o, 0.0),
                                )
                            } else {
                                (
                                    Vector3::new(o, 0.0, -half),
                                    Vector3::new(o, 0.0, half),
                                    Vector3::new(-half, 0.0, o),
                                    Vector3::new(half, 0.0, o),
                                )
                            };
                            let at = |v: Vector3| rotate_y(node.position + v, self.angle);
                            d3.draw_line_3D(at(a), at(b), node.color);
                            d3.draw_line_3D(at(c), at(e), node.color);
                        }
                    }
                    Shape::Label { .. } => {}
                }
            }
        }

        for label in &self.labels {
            let width = measure_text(&label.text, label.font_size);
            d.draw_text(
                &label.text,
                label.at.x as i32 - width / 2,
                label.at.y as i32 - label.font_size / 2,
                label.font_size,
                label.color,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Engine;

    #[test]
    fn scene_change_rebuilds_graph() {
        let mut engine = StageEngine::new(&StageConfig::default());
        engine.initialize(&Portfolio::sample());
        engine.update(1.0, &Pointer::default());
        assert!(engine.angle > 0.0);

        engine.scene_changed(Scene::Contact);
        assert_eq!(engine.angle, 0.0);
        assert_eq!(engine.graph.spin, 0.1);
    }

    #[test]
    fn labels_are_projected_far_to_near() {
        let mut engine = StageEngine::new(&StageConfig::default());
        engine.initialize(&Portfolio::sample());
        engine.scene_changed(Scene::Skills);
        engine.update(1.0 / 60.0, &Pointer::default());

        assert!(!engine.labels.is_empty());
        assert!(engine.labels.windows(2).all(|w| w[0].depth >= w[1].depth));
        assert!(engine.labels.iter().all(|l| l.font_size >= MIN_LABEL_PX));
    }
}
