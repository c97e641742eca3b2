//! Static scene objects and their startup placement.

use crate::rng::SimpleRng;
use crate::types::{ENTITY_COUNT, GRID_COLS, GRID_ROWS};

/// A static object on the grid.
///
/// Coordinates are plain integers: anything outside the interior is legal
/// to hold and simply never drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Entity {
    pub x: i32,
    pub y: i32,
}

impl Entity {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// True when the entity sits strictly inside the border.
    pub fn is_interior(&self) -> bool {
        self.x > 0 && self.x < GRID_COLS as i32 - 1 && self.y > 0 && self.y < GRID_ROWS as i32 - 1
    }
}

/// The fixed set of objects for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    entities: [Entity; ENTITY_COUNT],
}

impl Scene {
    pub fn new(entities: [Entity; ENTITY_COUNT]) -> Self {
        Self { entities }
    }

    /// Place `ENTITY_COUNT` objects uniformly over the interior.
    ///
    /// Objects may overlap each other and the player start; nothing is
    /// rerolled. For each entity x is drawn before y.
    pub fn generate(rng: &mut SimpleRng) -> Self {
        let mut entities = [Entity::default(); ENTITY_COUNT];
        for entity in entities.iter_mut() {
            let x = 1 + rng.next_range(GRID_COLS as u32 - 2) as i32;
            let y = 1 + rng.next_range(GRID_ROWS as u32 - 2) as i32;
            *entity = Entity::new(x, y);
        }
        Self { entities }
    }

    pub fn from_seed(seed: u32) -> Self {
        Self::generate(&mut SimpleRng::new(seed))
    }

    pub fn entities(&self) -> &[Entity; ENTITY_COUNT] {
        &self.entities
    }
}
