//! Thronglets - the player-relevant creatures of the diorama

use glam::Vec2;
use rand::Rng;

/// Items a thronglet can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Item {
    Berry,
    Wood,
    Stone,
}

/// Ordered, append-only sequence of carried items. Empty at spawn.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }
}

/// A thronglet. Stats are fixed at spawn; nothing in the diorama mutates
/// them afterwards.
#[derive(Debug, Clone)]
pub struct Thronglet {
    pub pos: Vec2,
    /// Body color, chosen from a random hue at spawn.
    pub color: [u8; 4],
    /// 0..=100
    pub health: u8,
    /// 0..=100
    pub energy: u8,
    /// 0..=100
    pub hunger: u8,
    pub inventory: Inventory,
}

/// Corner of the thronglet spawn region, world units.
pub const SPAWN_ORIGIN: Vec2 = Vec2::new(1000.0, 1000.0);
/// Spawn jitter per axis, world units.
pub const SPAWN_SPREAD: f32 = 100.0;

/// Saturation and lightness of every thronglet's body color.
const COLOR_SATURATION: f32 = 0.7;
const COLOR_LIGHTNESS: f32 = 0.6;

impl Thronglet {
    /// Spawn one thronglet at a jittered position with full stats and an
    /// empty inventory.
    pub fn spawn(rng: &mut impl Rng) -> Self {
        let pos = SPAWN_ORIGIN
            + Vec2::new(
                rng.random_range(0.0..SPAWN_SPREAD),
                rng.random_range(0.0..SPAWN_SPREAD),
            );
        let hue = rng.random_range(0.0..360.0);

        Self {
            pos,
            color: hsl_to_rgba(hue, COLOR_SATURATION, COLOR_LIGHTNESS),
            health: 100,
            energy: 100,
            hunger: 100,
            inventory: Inventory::new(),
        }
    }

    /// Health as a fraction of full, for the status bar.
    pub fn health_fraction(&self) -> f32 {
        self.health as f32 / 100.0
    }
}

/// Convert an HSL color (h in degrees, s/l in [0, 1]) to RGBA.
pub fn hsl_to_rgba(h: f32, s: f32, l: f32) -> [u8; 4] {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let h_prime = (h.rem_euclid(360.0)) / 60.0;
    let x = c * (1.0 - (h_prime % 2.0 - 1.0).abs());

    let (r, g, b) = match h_prime as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let m = l - c / 2.0;
    [
        ((r + m) * 255.0).round() as u8,
        ((g + m) * 255.0).round() as u8,
        ((b + m) * 255.0).round() as u8,
        255,
    ]
}
