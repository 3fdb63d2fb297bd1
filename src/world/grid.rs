//! World grid - a fixed-size tile map built once at startup

use thiserror::Error;

use super::Biome;

/// Errors from world generation.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("invalid grid dimensions {width}x{height}: both must be positive")]
    InvalidDimensions { width: i32, height: i32 },
}

/// A single cell of the world grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub biome: Biome,
}

/// Fixed-size 2D tile map. Immutable after generation.
pub struct WorldGrid {
    width: u32,
    height: u32,
    /// Row-major tile data. Index = y * width + x.
    tiles: Vec<Tile>,
}

impl WorldGrid {
    /// Build a `height x width` grid, classifying each cell by its
    /// (column, row) coordinate.
    pub fn generate(width: i32, height: i32) -> Result<Self, WorldError> {
        if width <= 0 || height <= 0 {
            return Err(WorldError::InvalidDimensions { width, height });
        }

        let mut tiles = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                tiles.push(Tile {
                    biome: Biome::classify(x, y),
                });
            }
        }

        log::info!("Generated world grid: {}x{} tiles", width, height);

        Ok(Self {
            width: width as u32,
            height: height as u32,
            tiles,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Tile at (x, y), or `None` outside the grid.
    #[inline]
    pub fn tile(&self, x: i32, y: i32) -> Option<&Tile> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        self.tiles.get(y as usize * self.width as usize + x as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_dimensions() {
        let grid = WorldGrid::generate(100, 100).unwrap();
        assert_eq!(grid.width(), 100);
        assert_eq!(grid.height(), 100);
    }

    #[test]
    fn test_generate_matches_classifier() {
        let grid = WorldGrid::generate(20, 15).unwrap();
        for y in 0..15 {
            for x in 0..20 {
                let tile = grid.tile(x, y).unwrap();
                assert_eq!(
                    tile.biome,
                    Biome::classify(x, y),
                    "mismatch at ({}, {})",
                    x,
                    y
                );
            }
        }
    }

    #[test]
    fn test_generate_invalid_dimensions() {
        assert!(matches!(
            WorldGrid::generate(0, 10),
            Err(WorldError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            WorldGrid::generate(10, -1),
            Err(WorldError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_tile_bounds() {
        let grid = WorldGrid::generate(10, 10).unwrap();
        assert!(grid.tile(0, 0).is_some());
        assert!(grid.tile(9, 9).is_some());
        assert!(grid.tile(-1, 0).is_none());
        assert!(grid.tile(0, 10).is_none());
        assert!(grid.tile(10, 0).is_none());
    }
}
