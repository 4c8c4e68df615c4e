//! Rendering module
//!
//! `scene` turns the scene state into vertex lists; `pipeline` draws them
//! with WebGPU.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::{Frame, GeometrySink, Part, Primitive, build_frame, draw_scene};
pub use vertex::Vertex;
