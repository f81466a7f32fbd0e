use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Turn {
    Player,
    Enemy,
}

/// The battle currently in progress.
///
/// The wild creature is referenced by id only; it still lives in the world
/// until it is defeated or captured.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BattleState {
    pub target_id: String,
    pub turn: Turn,
    /// Derived from the target's HP ratio; refreshed after every HP change.
    pub can_capture: bool,
}

impl BattleState {
    pub fn new(target_id: String, can_capture: bool) -> Self {
        Self {
            target_id,
            turn: Turn::Player,
            can_capture,
        }
    }

    pub fn is_player_turn(&self) -> bool {
        self.turn == Turn::Player
    }
}
