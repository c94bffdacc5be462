//! Rendering
//!
//! `scene` turns game state into colored rectangles without touching the GPU;
//! `pipeline` draws them with WebGPU.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::{ColoredRect, Scene};
pub use vertex::Vertex;
