mod component;
mod config;
mod render;
mod reveal;
mod scene;
mod state;
mod types;
mod viewport;

pub use component::LearningPathGraph;
