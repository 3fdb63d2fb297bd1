//! Entity registry - flat collections populated once at startup

pub mod animal;
pub mod scenery;
pub mod thronglet;

pub use animal::Animal;
pub use scenery::{Building, Plant};
pub use thronglet::{Inventory, Item, Thronglet};

use rand::Rng;

/// Number of thronglets spawned at startup.
pub const THRONGLET_COUNT: usize = 10;
/// Number of animals spawned at startup.
pub const ANIMAL_COUNT: usize = 20;
/// Number of plants spawned at startup.
pub const PLANT_COUNT: usize = 50;

/// Flat entity collections. Append-only after `populate`; there is no
/// removal and no identity constraint (duplicate positions are fine).
#[derive(Default)]
pub struct Registry {
    pub thronglets: Vec<Thronglet>,
    pub animals: Vec<Animal>,
    pub plants: Vec<Plant>,
    pub buildings: Vec<Building>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run all spawn operations once, in generation order.
    pub fn populate(&mut self, rng: &mut impl Rng) {
        self.spawn_thronglets(rng);
        self.spawn_animals(rng);
        self.spawn_plants(rng);
        self.spawn_buildings();

        log::info!(
            "Populated registry: {} thronglets, {} animals, {} plants, {} buildings",
            self.thronglets.len(),
            self.animals.len(),
            self.plants.len(),
            self.buildings.len()
        );
    }

    pub fn spawn_thronglets(&mut self, rng: &mut impl Rng) {
        for _ in 0..THRONGLET_COUNT {
            self.thronglets.push(Thronglet::spawn(rng));
        }
    }

    pub fn spawn_animals(&mut self, rng: &mut impl Rng) {
        for _ in 0..ANIMAL_COUNT {
            self.animals.push(Animal::spawn(rng));
        }
    }

    pub fn spawn_plants(&mut self, rng: &mut impl Rng) {
        for _ in 0..PLANT_COUNT {
            self.plants.push(Plant::spawn(rng));
        }
    }

    pub fn spawn_buildings(&mut self) {
        self.buildings.push(Building::place());
    }
}
