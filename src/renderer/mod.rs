//! wgpu rendering module
//!
//! Everything is drawn as colored triangles in logical screen coordinates.
//! `scene` turns simulation state into vertices, `pipeline` puts them on screen.

pub mod font;
pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::{FrameBuilder, build_frame};
pub use vertex::Vertex;
