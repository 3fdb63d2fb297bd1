//! World management - biome classification and the tile grid

mod biome;
mod grid;

pub use biome::Biome;
pub use grid::{Tile, WorldError, WorldGrid};

/// Edge length of one tile, in world units and atlas pixels.
pub const TILE_SIZE: u32 = 32;
