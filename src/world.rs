use crate::creature::{CreatureInstance, Ownership};
use crate::rng::TurnRng;
use schema::CreatureTemplate;
use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub x: u8,
    pub y: u8,
}

impl GridPos {
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explorer {
    pub position: GridPos,
    pub facing: Direction,
}

/// What a directional input did in the world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The destination held a wild creature; the explorer stays put.
    Collision { creature_id: String },
    /// The explorer moved (or bumped the grid edge) without meeting anything.
    Moved { position: GridPos },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldState {
    pub explorer: Explorer,
    grid_size: u8,
    /// Wild creatures in the order they were placed.
    wild: Vec<CreatureInstance>,
}

impl WorldState {
    pub fn new(grid_size: u8, explorer: Explorer) -> Self {
        let max = grid_size.saturating_sub(1);
        let position = GridPos::new(explorer.position.x.min(max), explorer.position.y.min(max));
        Self {
            explorer: Explorer {
                position,
                facing: explorer.facing,
            },
            grid_size: grid_size.max(1),
            wild: Vec::new(),
        }
    }

    pub fn grid_size(&self) -> u8 {
        self.grid_size
    }

    /// Scatter `count` wild creatures with uniformly drawn templates and
    /// positions. Positions may coincide with each other or with the explorer.
    pub fn populate(&mut self, templates: &[CreatureTemplate], count: usize, rng: &mut TurnRng) {
        if templates.is_empty() {
            return;
        }

        for i in 0..count {
            let template = &templates[rng.next_index(templates.len(), "wild template")];
            let x = rng.next_index(self.grid_size as usize, "wild x") as u8;
            let y = rng.next_index(self.grid_size as usize, "wild y") as u8;
            let creature = CreatureInstance::from_template(
                format!("wild-{}", i),
                template,
                Ownership::Wild {
                    position: GridPos::new(x, y),
                },
            );
            self.insert_wild(creature);
        }

        log::debug!("World populated with {} wild creatures", self.wild.len());
    }

    /// Add a wild creature, replacing any existing one with the same id in place.
    pub fn insert_wild(&mut self, creature: CreatureInstance) {
        match self.wild.iter_mut().find(|existing| existing.id == creature.id) {
            Some(existing) => *existing = creature,
            None => self.wild.push(creature),
        }
    }

    /// The cell one step in `direction`, clamped to the grid.
    pub fn destination(&self, direction: Direction) -> GridPos {
        let GridPos { x, y } = self.explorer.position;
        let max = self.grid_size - 1;
        match direction {
            Direction::Up => GridPos::new(x, y.saturating_sub(1)),
            Direction::Down => GridPos::new(x, (y + 1).min(max)),
            Direction::Left => GridPos::new(x.saturating_sub(1), y),
            Direction::Right => GridPos::new((x + 1).min(max), y),
        }
    }

    /// Try to walk one cell. Walking into a wild creature does not move the
    /// explorer (nor turn them); it reports the collision instead.
    pub fn step(&mut self, direction: Direction) -> StepOutcome {
        let destination = self.destination(direction);

        if let Some(creature) = self.wild_at(destination) {
            return StepOutcome::Collision {
                creature_id: creature.id.clone(),
            };
        }

        self.explorer = Explorer {
            position: destination,
            facing: direction,
        };
        StepOutcome::Moved {
            position: destination,
        }
    }

    /// First wild creature (in placement order) standing exactly on `position`.
    pub fn wild_at(&self, position: GridPos) -> Option<&CreatureInstance> {
        self.wild
            .iter()
            .find(|creature| creature.position() == Some(position))
    }

    pub fn wild(&self, id: &str) -> Option<&CreatureInstance> {
        self.wild.iter().find(|creature| creature.id == id)
    }

    pub fn wild_mut(&mut self, id: &str) -> Option<&mut CreatureInstance> {
        self.wild.iter_mut().find(|creature| creature.id == id)
    }

    pub fn remove_wild(&mut self, id: &str) -> Option<CreatureInstance> {
        let index = self.wild.iter().position(|creature| creature.id == id)?;
        let removed = self.wild.remove(index);
        log::debug!("Removed {} from the world, {} remain", id, self.wild.len());
        Some(removed)
    }

    pub fn wild_creatures(&self) -> impl Iterator<Item = &CreatureInstance> {
        self.wild.iter()
    }

    pub fn wild_count(&self) -> usize {
        self.wild.len()
    }

    /// A uniformly chosen wild creature id, or None if the world is empty.
    pub fn random_wild_id(&self, rng: &mut TurnRng) -> Option<String> {
        if self.wild.is_empty() {
            return None;
        }
        let index = rng.next_index(self.wild.len(), "ambient encounter target");
        self.wild.get(index).map(|creature| creature.id.clone())
    }
}
