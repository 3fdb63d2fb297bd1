//! Static scenery - plants and buildings

use glam::Vec2;
use rand::Rng;

/// A plant. Position only.
#[derive(Debug, Clone)]
pub struct Plant {
    pub pos: Vec2,
}

/// Corner of the plant spawn region, world units.
pub const PLANT_SPAWN_ORIGIN: Vec2 = Vec2::new(900.0, 900.0);
/// Plant spawn jitter per axis, world units.
pub const PLANT_SPAWN_SPREAD: f32 = 300.0;

impl Plant {
    pub fn spawn(rng: &mut impl Rng) -> Self {
        Self {
            pos: PLANT_SPAWN_ORIGIN
                + Vec2::new(
                    rng.random_range(0.0..PLANT_SPAWN_SPREAD),
                    rng.random_range(0.0..PLANT_SPAWN_SPREAD),
                ),
        }
    }
}

/// A building. The diorama has exactly one, at a fixed spot.
#[derive(Debug, Clone)]
pub struct Building {
    pub pos: Vec2,
}

/// Where the single building stands, world units.
pub const BUILDING_POS: Vec2 = Vec2::new(960.0, 960.0);

impl Building {
    pub fn place() -> Self {
        Self { pos: BUILDING_POS }
    }
}
