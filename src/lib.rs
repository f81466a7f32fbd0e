// In: src/lib.rs

//! Pal Quest Game Core
//!
//! A small turn-based creature-collecting game: explore a grid, run into wild
//! Pals, battle them, and catch or defeat them. This crate is the game state
//! machine and battle engine only; rendering is left to whatever drives it
//! through [`GameSession::handle_input`] and reads [`GameSession::view`].

// --- MODULE DECLARATIONS ---
pub mod battle;
pub mod catalog;
pub mod config;
pub mod creature;
pub mod errors;
pub mod events;
pub mod game;
pub mod input;
pub mod rng;
pub mod roster;
pub mod scheduler;
pub mod view;
pub mod world;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{CatalogData, CreatureTemplate, Effectiveness, ElementType};

// --- From this crate's modules (`src/`) ---

// Session and state machine.
pub use game::{GameMode, GameSession};
pub use input::Button;

// Runtime model.
pub use battle::state::{BattleState, Turn};
pub use creature::{CreatureInstance, Ownership};
pub use roster::PlayerRoster;
pub use world::{Direction, Explorer, GridPos, WorldState};

// Events, scheduling and views.
pub use events::{EventBus, GameEvent, Side};
pub use scheduler::{DeferredStep, StepQueue};
pub use view::{BattleView, CreatureView, GameView};

// Configuration and randomness.
pub use config::{GameConfig, StepDelays};
pub use rng::TurnRng;

// Crate-specific error and result types.
pub use errors::{CatalogError, CatalogResult, ConfigError, ConfigResult, GameError, GameResult};
