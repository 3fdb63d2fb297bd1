//! Tile sprite atlas
//!
//! One horizontally-tiled sheet, one 32px column per biome. Loaded from a
//! PNG when configured; otherwise synthesized from the flat biome palette
//! so the toy runs without external assets.

use std::path::Path;

use anyhow::{ensure, Context, Result};

use crate::world::{Biome, TILE_SIZE};

pub struct TileAtlas {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl TileAtlas {
    /// Load a sprite sheet from a PNG file. The sheet must hold one
    /// `TILE_SIZE` column per biome.
    pub fn load(path: &Path) -> Result<Self> {
        let img = image::open(path)
            .with_context(|| format!("Failed to load tile atlas {}", path.display()))?
            .to_rgba8();

        let width = img.width();
        let height = img.height();
        ensure!(
            width >= Biome::ALL.len() as u32 * TILE_SIZE && height >= TILE_SIZE,
            "tile atlas {} is {}x{}, need at least {}x{}",
            path.display(),
            width,
            height,
            Biome::ALL.len() as u32 * TILE_SIZE,
            TILE_SIZE
        );

        log::info!("Loaded tile atlas {} ({}x{})", path.display(), width, height);

        Ok(Self {
            width,
            height,
            data: img.into_raw(),
        })
    }

    /// Synthesize a sheet of solid-color tiles from the biome palette.
    pub fn flat_colors() -> Self {
        let width = Biome::ALL.len() as u32 * TILE_SIZE;
        let height = TILE_SIZE;
        let mut data = vec![0; (width * height * 4) as usize];

        for biome in Biome::ALL {
            let color = biome.base_color();
            let x0 = biome.sprite_column() * TILE_SIZE;
            for y in 0..height {
                for x in x0..x0 + TILE_SIZE {
                    let idx = ((y * width + x) * 4) as usize;
                    data[idx..idx + 4].copy_from_slice(&color);
                }
            }
        }

        log::info!("Using synthesized flat-color tile atlas");

        Self {
            width,
            height,
            data,
        }
    }

    /// Texel (u, v) within the tile at `column`. Returns transparent black
    /// outside the sheet.
    #[inline]
    pub fn tile_pixel(&self, column: u32, u: u32, v: u32) -> [u8; 4] {
        let x = column * TILE_SIZE + u;
        if x >= self.width || v >= self.height {
            return [0, 0, 0, 0];
        }
        let idx = ((v * self.width + x) * 4) as usize;
        [
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ]
    }
}
