//! Wild animals

use glam::Vec2;
use rand::Rng;

/// A wild animal. Friendliness is rolled once at spawn.
#[derive(Debug, Clone)]
pub struct Animal {
    pub pos: Vec2,
    pub friendly: bool,
}

/// Corner of the animal spawn region, world units.
pub const SPAWN_ORIGIN: Vec2 = Vec2::new(800.0, 800.0);
/// Spawn jitter per axis, world units.
pub const SPAWN_SPREAD: f32 = 400.0;

/// Probability that a spawned animal is friendly.
pub const FRIENDLY_CHANCE: f64 = 0.7;

impl Animal {
    pub fn spawn(rng: &mut impl Rng) -> Self {
        Self {
            pos: SPAWN_ORIGIN
                + Vec2::new(
                    rng.random_range(0.0..SPAWN_SPREAD),
                    rng.random_range(0.0..SPAWN_SPREAD),
                ),
            friendly: rng.random_bool(FRIENDLY_CHANCE),
        }
    }
}
