//! Top-level application state
//!
//! One struct owns everything the frame loop reads or writes: the grid,
//! the entity registry, the camera, and the cycle state. The app driver
//! holds the only instance and passes it by reference into update and
//! render calls.

use std::time::Duration;

use anyhow::Result;
use instant::Instant;
use rand::Rng;

use crate::camera::Camera;
use crate::config::GameConfig;
use crate::cycle::Cycle;
use crate::entity::Registry;
use crate::world::WorldGrid;

pub struct GameState {
    pub grid: WorldGrid,
    pub registry: Registry,
    pub camera: Camera,
    pub cycle: Cycle,
}

impl GameState {
    /// Generate the world and spawn all entities. Called exactly once at
    /// startup.
    pub fn new(config: &GameConfig, rng: &mut impl Rng, now: Instant) -> Result<Self> {
        let grid = WorldGrid::generate(config.world.width, config.world.height)?;

        let mut registry = Registry::new();
        registry.populate(rng);

        Ok(Self {
            grid,
            registry,
            camera: Camera::new(config.camera.min_zoom, config.camera.max_zoom),
            cycle: Cycle::new(Duration::from_millis(config.cycle.interval_ms), now),
        })
    }
}
