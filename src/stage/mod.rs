pub mod camera;
pub mod engine;
pub mod graph;
