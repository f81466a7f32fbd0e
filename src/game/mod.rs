//! The game session aggregate and its top-level mode machine.
//!
//! `GameSession` owns every piece of mutable state. Renderers read it through
//! [`GameSession::view`] and the accessors below; the only ways to change it
//! are [`GameSession::handle_input`] and the clock methods that run deferred
//! battle steps.

pub mod controller;

#[cfg(test)]
pub(crate) mod tests;

use crate::battle::engine::run_deferred_step;
use crate::battle::state::BattleState;
use crate::catalog::{starter_templates, templates};
use crate::config::GameConfig;
use crate::creature::{CreatureInstance, Ownership};
use crate::errors::GameResult;
use crate::events::{EventBus, GameEvent};
use crate::rng::TurnRng;
use crate::roster::PlayerRoster;
use crate::scheduler::StepQueue;
use crate::view::GameView;
use crate::world::{Explorer, WorldState};
use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GameMode {
    Title,
    World,
    Battle,
    Menu,
}

const WELCOME_MESSAGE: &str = "Welcome to the world of Pals! Press any button to begin.";

#[derive(Debug, Clone)]
pub struct GameSession {
    pub(crate) mode: GameMode,
    pub(crate) world: WorldState,
    pub(crate) roster: PlayerRoster,
    pub(crate) battle: Option<BattleState>,
    pub(crate) config: GameConfig,
    pub(crate) rng: TurnRng,
    pub(crate) queue: StepQueue,
    pub(crate) events: EventBus,
    pub(crate) message: String,
}

impl GameSession {
    /// Start a fresh session: a random starter, and a world populated with
    /// `config.wild_count` random wild creatures.
    pub fn new(config: GameConfig) -> GameResult<Self> {
        let mut rng = match config.seed {
            Some(seed) => TurnRng::from_seed(seed),
            None => TurnRng::new_random(),
        };

        let starters = starter_templates()?;
        let starter_template = starters[rng.next_index(starters.len(), "starter template")];
        let starter = CreatureInstance::from_template(
            "player-1".to_string(),
            starter_template,
            Ownership::Player,
        );

        let mut world = WorldState::new(
            config.grid_size,
            Explorer {
                position: config.start_position,
                facing: config.start_facing,
            },
        );
        world.populate(templates()?, config.wild_count, &mut rng);

        log::debug!(
            "New session: starter {}, {} wild creatures",
            starter.name,
            world.wild_count()
        );
        Ok(Self::from_parts(config, world, PlayerRoster::new(starter), rng))
    }

    /// Assemble a session in the title mode from prepared state.
    pub fn from_parts(
        config: GameConfig,
        world: WorldState,
        roster: PlayerRoster,
        rng: TurnRng,
    ) -> Self {
        Self {
            mode: GameMode::Title,
            world,
            roster,
            battle: None,
            config,
            rng,
            queue: StepQueue::new(),
            events: EventBus::new(),
            message: WELCOME_MESSAGE.to_string(),
        }
    }

    /// Record an event; message-bearing events overwrite the status message.
    pub(crate) fn emit(&mut self, event: GameEvent) {
        if let Some(text) = event.format() {
            self.message = text;
        }
        self.events.push(event);
    }

    /// Let `elapsed_ms` of wall time pass, running every deferred step that
    /// falls due, one at a time and in order.
    ///
    /// If any step runs, the event bus is reset first and afterwards holds
    /// the events of every step run by this call.
    pub fn advance(&mut self, elapsed_ms: u64) {
        let horizon = self.queue.now_ms() + elapsed_ms;
        let mut first = true;
        while let Some(step) = self.queue.pop_due(horizon) {
            if std::mem::take(&mut first) {
                self.events.clear();
            }
            run_deferred_step(self, step);
        }
        self.queue.advance_clock_to(horizon);
    }

    /// Run deferred steps until none remain, regardless of their delays.
    /// Resets the event bus the same way [`GameSession::advance`] does.
    pub fn settle(&mut self) {
        let mut first = true;
        while let Some(step) = self.queue.pop_next() {
            if std::mem::take(&mut first) {
                self.events.clear();
            }
            run_deferred_step(self, step);
        }
    }

    /// Milliseconds until the next deferred step is due.
    pub fn next_step_in(&self) -> Option<u64> {
        self.queue.next_due_in()
    }

    pub fn has_pending_steps(&self) -> bool {
        !self.queue.is_idle()
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn world(&self) -> &WorldState {
        &self.world
    }

    pub fn roster(&self) -> &PlayerRoster {
        &self.roster
    }

    pub fn battle(&self) -> Option<&BattleState> {
        self.battle.as_ref()
    }

    /// The wild creature currently being fought, if it still exists.
    pub fn battle_target(&self) -> Option<&CreatureInstance> {
        self.battle
            .as_ref()
            .and_then(|battle| self.world.wild(&battle.target_id))
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Drain the events of the latest input or step batch.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        self.events.take()
    }

    pub fn view(&self) -> GameView {
        GameView::from_session(self)
    }
}
