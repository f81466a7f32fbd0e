use crate::world::GridPos;
use schema::{CreatureTemplate, ElementType};
use serde::{Deserialize, Serialize};

/// Who a creature belongs to, and where it is.
///
/// A wild creature always has a grid position; a player creature never does.
/// Capture is the only transition from one to the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ownership {
    Wild { position: GridPos },
    Player,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatureInstance {
    pub id: String,
    pub name: String,
    pub type_label: String,
    pub element: Option<ElementType>,
    pub moves: Vec<String>,
    pub workability: Option<u8>,
    pub special_skill: Option<String>,
    pub level: u16,
    pub ownership: Ownership,
    max_hp: u16,
    hp: u16,
}

impl CreatureInstance {
    /// Stamp a full-HP instance out of a template.
    pub fn from_template(id: String, template: &CreatureTemplate, ownership: Ownership) -> Self {
        Self {
            id,
            name: template.name.clone(),
            type_label: template.type_label.clone(),
            element: template.element,
            moves: template.moves.clone(),
            workability: template.workability,
            special_skill: template.special_skill.clone(),
            level: template.level.max(1),
            ownership,
            max_hp: template.max_hp.max(1),
            hp: template.max_hp.max(1),
        }
    }

    pub fn current_hp(&self) -> u16 {
        self.hp
    }

    pub fn max_hp(&self) -> u16 {
        self.max_hp
    }

    pub fn hp_ratio(&self) -> f64 {
        f64::from(self.hp) / f64::from(self.max_hp)
    }

    pub fn is_fainted(&self) -> bool {
        self.hp == 0
    }

    pub fn is_wild(&self) -> bool {
        matches!(self.ownership, Ownership::Wild { .. })
    }

    pub fn is_player(&self) -> bool {
        matches!(self.ownership, Ownership::Player)
    }

    /// Grid position, present only while roaming the world.
    pub fn position(&self) -> Option<GridPos> {
        match self.ownership {
            Ownership::Wild { position } => Some(position),
            Ownership::Player => None,
        }
    }

    /// Apply damage, saturating at zero. Returns true if this knocked the creature out.
    pub fn take_damage(&mut self, amount: u16) -> bool {
        let was_standing = self.hp > 0;
        self.hp = self.hp.saturating_sub(amount);
        log::debug!(
            "{} ({}) took {} damage: {}/{} HP",
            self.name,
            self.id,
            amount,
            self.hp,
            self.max_hp
        );
        was_standing && self.hp == 0
    }

    /// Set HP, clamped to `[0, max_hp]`.
    pub fn set_hp(&mut self, hp: u16) {
        self.hp = hp.min(self.max_hp);
    }

    pub fn heal_to_full(&mut self) {
        self.hp = self.max_hp;
    }

    /// One level gained from a victory: +1 level, +`hp_gain` max HP, full heal.
    pub fn level_up(&mut self, hp_gain: u16) {
        self.level = self.level.saturating_add(1);
        self.max_hp = self.max_hp.saturating_add(hp_gain);
        self.hp = self.max_hp;
        log::debug!(
            "{} ({}) reached level {} with {} max HP",
            self.name,
            self.id,
            self.level,
            self.max_hp
        );
    }

    /// The player-owned copy produced by a successful capture: fresh id, no
    /// position, and half of max HP rounded down but never zero.
    pub fn into_captured(self, new_id: String) -> Self {
        let hp = (self.max_hp / 2).max(1);
        Self {
            id: new_id,
            ownership: Ownership::Player,
            hp,
            ..self
        }
    }
}
