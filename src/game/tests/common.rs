use crate::catalog::get_template;
use crate::config::GameConfig;
use crate::creature::{CreatureInstance, Ownership};
use crate::game::GameSession;
use crate::input::Button;
use crate::rng::TurnRng;
use crate::roster::PlayerRoster;
use crate::world::{Explorer, GridPos, WorldState};

/// A builder for sessions with a hand-placed world and scripted randomness.
///
/// # Example
/// ```ignore
/// let session = TestSessionBuilder::new()
///     .with_starter("Embercub")
///     .with_wild("wild-0", "Leafling", 5, 4)
///     .with_rng(vec![0.0, 0.5])
///     .build_in_world();
/// ```
pub struct TestSessionBuilder {
    config: GameConfig,
    starter: String,
    starter_hp: Option<u16>,
    wild: Vec<(String, String, GridPos, Option<u16>)>,
    rng: Vec<f64>,
}

impl TestSessionBuilder {
    /// Leafling starter at (5, 5) facing down, an empty world, no random draws.
    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
            starter: "Leafling".to_string(),
            starter_hp: None,
            wild: Vec::new(),
            rng: Vec::new(),
        }
    }

    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_start(mut self, x: u8, y: u8) -> Self {
        self.config.start_position = GridPos::new(x, y);
        self
    }

    pub fn with_starter(mut self, name: &str) -> Self {
        self.starter = name.to_string();
        self
    }

    pub fn with_starter_hp(mut self, hp: u16) -> Self {
        self.starter_hp = Some(hp);
        self
    }

    pub fn with_wild(mut self, id: &str, name: &str, x: u8, y: u8) -> Self {
        self.wild
            .push((id.to_string(), name.to_string(), GridPos::new(x, y), None));
        self
    }

    pub fn with_wild_hp(mut self, id: &str, name: &str, x: u8, y: u8, hp: u16) -> Self {
        self.wild
            .push((id.to_string(), name.to_string(), GridPos::new(x, y), Some(hp)));
        self
    }

    /// Unit draws in `[0, 1)` the session will consume, in order.
    pub fn with_rng(mut self, outcomes: Vec<f64>) -> Self {
        self.rng = outcomes;
        self
    }

    /// Builds the session, still on the title screen.
    pub fn build(self) -> GameSession {
        let mut starter = CreatureInstance::from_template(
            "player-1".to_string(),
            template(&self.starter),
            Ownership::Player,
        );
        if let Some(hp) = self.starter_hp {
            starter.set_hp(hp);
        }

        let mut world = WorldState::new(
            self.config.grid_size,
            Explorer {
                position: self.config.start_position,
                facing: self.config.start_facing,
            },
        );
        for (id, name, position, hp) in self.wild {
            let mut creature =
                CreatureInstance::from_template(id, template(&name), Ownership::Wild { position });
            if let Some(hp) = hp {
                creature.set_hp(hp);
            }
            world.insert_wild(creature);
        }

        GameSession::from_parts(
            self.config,
            world,
            PlayerRoster::new(starter),
            TurnRng::new_for_test(self.rng),
        )
    }

    /// Builds the session and presses past the title screen.
    pub fn build_in_world(self) -> GameSession {
        let mut session = self.build();
        session.handle_input(Button::A);
        session.take_events();
        session
    }
}

fn template(name: &str) -> &'static crate::CreatureTemplate {
    match get_template(name) {
        Ok(template) => template,
        Err(err) => panic!("Failed to load template {}: {}", name, err),
    }
}

/// The single wild creature a test placed, by id.
pub fn wild<'a>(session: &'a GameSession, id: &str) -> &'a CreatureInstance {
    session
        .world()
        .wild(id)
        .unwrap_or_else(|| panic!("Expected wild creature {} to still exist", id))
}
