//! Read-only snapshots of a session for renderers.

use crate::battle::state::Turn;
use crate::creature::CreatureInstance;
use crate::game::{GameMode, GameSession};
use crate::world::{Direction, GridPos};
use schema::ElementType;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameView {
    pub mode: GameMode,
    pub grid_size: u8,
    pub position: GridPos,
    pub facing: Direction,
    pub wild: Vec<CreatureView>,
    pub battle: Option<BattleView>,
    pub roster: Vec<CreatureView>,
    pub message: String,
    pub pending_steps: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatureView {
    pub id: String,
    pub name: String,
    pub type_label: String,
    pub element: Option<ElementType>,
    pub level: u16,
    pub hp: u16,
    pub max_hp: u16,
    pub position: Option<GridPos>,
    pub is_wild: bool,
    pub is_player: bool,
    pub workability: Option<u8>,
    pub special_skill: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BattleView {
    pub target_id: String,
    pub target: Option<CreatureView>,
    pub turn: Turn,
    pub can_capture: bool,
}

impl From<&CreatureInstance> for CreatureView {
    fn from(creature: &CreatureInstance) -> Self {
        Self {
            id: creature.id.clone(),
            name: creature.name.clone(),
            type_label: creature.type_label.clone(),
            element: creature.element,
            level: creature.level,
            hp: creature.current_hp(),
            max_hp: creature.max_hp(),
            position: creature.position(),
            is_wild: creature.is_wild(),
            is_player: creature.is_player(),
            workability: creature.workability,
            special_skill: creature.special_skill.clone(),
        }
    }
}

impl GameView {
    pub fn from_session(session: &GameSession) -> Self {
        let world = session.world();
        Self {
            mode: session.mode(),
            grid_size: world.grid_size(),
            position: world.explorer.position,
            facing: world.explorer.facing,
            wild: world.wild_creatures().map(CreatureView::from).collect(),
            battle: session.battle().map(|battle| BattleView {
                target_id: battle.target_id.clone(),
                target: session.battle_target().map(CreatureView::from),
                turn: battle.turn,
                can_capture: battle.can_capture,
            }),
            roster: session
                .roster()
                .members()
                .iter()
                .map(CreatureView::from)
                .collect(),
            message: session.message().to_string(),
            pending_steps: session.queue.len(),
        }
    }

    fn write_grid(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.grid_size {
            for x in 0..self.grid_size {
                let cell = GridPos::new(x, y);
                let glyph = if cell == self.position {
                    match self.facing {
                        Direction::Up => '^',
                        Direction::Down => 'v',
                        Direction::Left => '<',
                        Direction::Right => '>',
                    }
                } else if self.wild.iter().any(|c| c.position == Some(cell)) {
                    '*'
                } else {
                    '.'
                };
                write!(f, "{} ", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for CreatureView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Lv.{} [{}] HP {}/{}",
            self.name, self.level, self.type_label, self.hp, self.max_hp
        )?;
        if let Some(skill) = &self.special_skill {
            write!(f, " ({})", skill)?;
        }
        Ok(())
    }
}

impl fmt::Display for GameView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            GameMode::Title => writeln!(f, "=== PAL QUEST ===")?,
            GameMode::World => self.write_grid(f)?,
            GameMode::Battle => {
                if let Some(battle) = &self.battle {
                    match &battle.target {
                        Some(target) => writeln!(f, "Wild {}", target)?,
                        None => writeln!(f, "The wild Pal is gone.")?,
                    }
                    if let Some(active) = self.roster.first() {
                        writeln!(f, "Your {}", active)?;
                    }
                    let b_action = if battle.can_capture { "Capture" } else { "Run" };
                    writeln!(f, "Turn: {} | A: Attack  B: {}", battle.turn, b_action)?;
                }
            }
            GameMode::Menu => {
                writeln!(f, "--- Your Team ---")?;
                for (i, member) in self.roster.iter().enumerate() {
                    writeln!(f, "{}. {}", i + 1, member)?;
                }
            }
        }
        write!(f, "> {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::tests::common::TestSessionBuilder;

    #[test]
    fn test_view_lists_world_and_roster() {
        let session = TestSessionBuilder::new()
            .with_wild("wild-0", "Embercub", 1, 1)
            .build();

        let view = session.view();
        assert_eq!(view.mode, GameMode::Title);
        assert_eq!(view.wild.len(), 1);
        assert_eq!(view.wild[0].position, Some(GridPos::new(1, 1)));
        assert_eq!(view.roster.len(), 1);
        assert_eq!(view.roster[0].position, None);
        assert!(view.battle.is_none());
    }

    #[test]
    fn test_world_frame_marks_explorer_and_creatures() {
        let mut session = TestSessionBuilder::new()
            .with_wild("wild-0", "Embercub", 0, 0)
            .build();
        session.handle_input(crate::input::Button::A); // leave the title screen

        let frame = session.view().to_string();
        let first_row = frame.lines().next().unwrap();
        assert!(first_row.starts_with("* "));
        assert!(frame.contains('v'));
        assert!(frame.ends_with(session.message()));
    }

    #[test]
    fn test_view_serializes_to_json() {
        let session = TestSessionBuilder::new().build();
        let json = serde_json::to_value(session.view()).unwrap();
        assert_eq!(json["mode"], "title");
        assert_eq!(json["facing"], "down");
        assert_eq!(json["roster"][0]["element"], "grass");
    }
}
