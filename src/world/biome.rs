//! Biome classification from grid coordinates
//!
//! A cell's biome is a pure function of its coordinates: a fixed
//! trigonometric noise value banded into nine terrain types. Reproducing
//! the same world for the same inputs requires this exact f64 formula.

use serde::{Deserialize, Serialize};

/// Terrain types, ordered by ascending noise band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Biome {
    Ocean,
    Beach,
    River,
    Grass,
    Forest,
    Swamp,
    Mountain,
    Snow,
    Volcano,
}

impl Biome {
    /// All biomes in band order.
    pub const ALL: [Biome; 9] = [
        Biome::Ocean,
        Biome::Beach,
        Biome::River,
        Biome::Grass,
        Biome::Forest,
        Biome::Swamp,
        Biome::Mountain,
        Biome::Snow,
        Biome::Volcano,
    ];

    /// Classify a grid coordinate.
    ///
    /// `noise = sin(x * 0.05) + cos(y * 0.05)` ranges roughly [-2, 2].
    /// Deterministic: no randomness, no error conditions.
    pub fn classify(x: i32, y: i32) -> Biome {
        let noise = (x as f64 * 0.05).sin() + (y as f64 * 0.05).cos();
        Biome::from_noise(noise)
    }

    /// Map a noise value to its biome band via ascending thresholds.
    pub fn from_noise(noise: f64) -> Biome {
        if noise < -1.5 {
            Biome::Ocean
        } else if noise < -1.2 {
            Biome::Beach
        } else if noise < -0.5 {
            Biome::River
        } else if noise < 0.1 {
            Biome::Grass
        } else if noise < 0.4 {
            Biome::Forest
        } else if noise < 0.7 {
            Biome::Swamp
        } else if noise < 1.1 {
            Biome::Mountain
        } else if noise < 1.5 {
            Biome::Snow
        } else {
            Biome::Volcano
        }
    }

    /// Column of this biome in the horizontally-tiled sprite sheet.
    ///
    /// The sheet layout predates the band ordering, so River sits at
    /// column 7 rather than 2.
    pub fn sprite_column(self) -> u32 {
        match self {
            Biome::Ocean => 0,
            Biome::Beach => 1,
            Biome::Grass => 2,
            Biome::Forest => 3,
            Biome::Swamp => 4,
            Biome::Mountain => 5,
            Biome::Snow => 6,
            Biome::River => 7,
            Biome::Volcano => 8,
        }
    }

    /// Flat RGBA color used by the synthesized fallback atlas.
    pub fn base_color(self) -> [u8; 4] {
        match self {
            Biome::Ocean => [22, 60, 140, 255],
            Biome::Beach => [226, 204, 140, 255],
            Biome::River => [64, 120, 200, 255],
            Biome::Grass => [96, 170, 70, 255],
            Biome::Forest => [40, 110, 48, 255],
            Biome::Swamp => [92, 110, 60, 255],
            Biome::Mountain => [130, 126, 122, 255],
            Biome::Snow => [236, 240, 244, 255],
            Biome::Volcano => [140, 40, 32, 255],
        }
    }
}
