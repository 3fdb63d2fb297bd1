//! Rendering - CPU scene pass and wgpu presentation

mod atlas;
mod frame;
mod renderer;
pub mod scene;

pub use atlas::TileAtlas;
pub use frame::FrameBuffer;
pub use renderer::Renderer;
