//! wgpu rendering module
//!
//! Draws each entity as a textured unit quad with its own model matrix.

pub mod pipeline;
pub mod shader;
pub mod texture;
pub mod vertex;

pub use pipeline::RenderState;
pub use shader::ShaderSources;
pub use texture::{TextureSet, decode_rgba};
pub use vertex::{QUAD, Vertex};
