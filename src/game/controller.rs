use crate::battle::engine::{attempt_capture, attempt_escape, player_attack, start_battle};
use crate::events::GameEvent;
use crate::game::{GameMode, GameSession};
use crate::input::Button;
use crate::world::{Direction, StepOutcome};

impl GameSession {
    /// Route one input to the world, the battle engine or the menu, depending
    /// on the current mode. Input that means nothing in the current mode is
    /// ignored.
    ///
    /// The event bus is reset first, so afterwards it holds only what this
    /// input caused.
    pub fn handle_input(&mut self, button: Button) {
        log::trace!("Input {:?} in mode {}", button, self.mode);
        self.events.clear();
        match self.mode {
            GameMode::Title => {
                self.mode = GameMode::World;
                self.emit(GameEvent::GameStarted);
            }
            GameMode::World => self.handle_world_input(button),
            GameMode::Battle => self.handle_battle_input(button),
            GameMode::Menu => {
                if button == Button::B {
                    self.mode = GameMode::World;
                    self.emit(GameEvent::MenuClosed);
                }
            }
        }
    }

    fn handle_world_input(&mut self, button: Button) {
        match button {
            Button::Direction(direction) => self.walk(direction),
            Button::A => {
                self.mode = GameMode::Menu;
                let roster_size = self.roster.len();
                self.emit(GameEvent::MenuOpened { roster_size });
            }
            Button::B => {}
        }
    }

    fn walk(&mut self, direction: Direction) {
        match self.world.step(direction) {
            StepOutcome::Collision { creature_id } => start_battle(self, &creature_id, false),
            StepOutcome::Moved { .. } => {
                if self.world.wild_count() == 0 {
                    self.emit(GameEvent::WorldCleared);
                    return;
                }

                // Only a collision-free step can roll for an ambient encounter.
                if self
                    .rng
                    .chance(self.config.ambient_encounter_chance, "ambient encounter")
                {
                    if let Some(creature_id) = self.world.random_wild_id(&mut self.rng) {
                        start_battle(self, &creature_id, true);
                    }
                }
            }
        }
    }

    fn handle_battle_input(&mut self, button: Button) {
        // A deferred step is in flight (enemy turn, or a battle winding down).
        if self.has_pending_steps() {
            return;
        }
        let Some(battle) = self.battle.as_ref() else {
            return;
        };
        if !battle.is_player_turn() {
            return;
        }
        let can_capture = battle.can_capture;

        match button {
            Button::A => player_attack(self),
            Button::B if can_capture => attempt_capture(self),
            Button::B => attempt_escape(self),
            Button::Direction(_) => {}
        }
    }
}
