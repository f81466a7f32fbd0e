use ordered_float::OrderedFloat;
use schema::Effectiveness;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of a battle acted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Player,
    Enemy,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameEvent {
    // Mode changes
    GameStarted,
    MenuOpened {
        roster_size: usize,
    },
    MenuClosed,
    RosterShown,
    WorldCleared,

    // Encounters
    WildEncounter {
        creature_id: String,
        name: String,
        ambient: bool,
    },

    // Combat
    AttackResolved {
        side: Side,
        attacker: String,
        move_used: String,
        damage: u16,
        effectiveness: Effectiveness,
        remaining_hp: u16,
    },
    CaptureEligibilityChanged {
        can_capture: bool,
    },
    WildDefeated {
        name: String,
    },
    LeveledUp {
        name: String,
        level: u16,
    },
    PlayerFainted {
        name: String,
    },
    SentBackToBase,

    // Capture & escape
    CaptureAttempted {
        name: String,
        probability: OrderedFloat<f64>,
    },
    CaptureSucceeded {
        name: String,
    },
    JoinedTeam {
        name: String,
    },
    CaptureFailed {
        name: String,
    },
    EscapeSucceeded,
    EscapeFailed,
}

impl GameEvent {
    /// Player-facing text for this event, or None for events that never
    /// replace the status message.
    pub fn format(&self) -> Option<String> {
        match self {
            GameEvent::GameStarted => Some(
                "Use the arrows to explore and find wild Pals! A opens your team, B runs or throws a capture sphere in battle."
                    .to_string(),
            ),
            GameEvent::MenuOpened { roster_size } => {
                Some(format!("Your team has {} Pal(s). Press B to close.", roster_size))
            }
            GameEvent::MenuClosed => Some("Back to exploring.".to_string()),
            GameEvent::RosterShown => None,
            GameEvent::WorldCleared => {
                Some("Congratulations! You have defeated or caught every wild Pal!".to_string())
            }

            GameEvent::WildEncounter { name, .. } => Some(format!("A wild {} appeared!", name)),

            GameEvent::AttackResolved {
                attacker,
                move_used,
                damage,
                effectiveness,
                ..
            } => {
                let prefix = match effectiveness {
                    Effectiveness::SuperEffective => "It's super effective! ",
                    Effectiveness::NotVeryEffective => "It's not very effective... ",
                    Effectiveness::Normal => "",
                };
                Some(format!(
                    "{}{} used {}! It dealt {} damage!",
                    prefix, attacker, move_used, damage
                ))
            }
            GameEvent::CaptureEligibilityChanged { .. } => None,
            GameEvent::WildDefeated { name } => {
                Some(format!("{} fainted! Gained experience!", name))
            }
            GameEvent::LeveledUp { name, level } => {
                Some(format!("{} grew to level {}!", name, level))
            }
            GameEvent::PlayerFainted { name } => Some(format!("{} fainted!", name)),
            GameEvent::SentBackToBase => Some("You were sent back to base...".to_string()),

            GameEvent::CaptureAttempted { .. } => None,
            GameEvent::CaptureSucceeded { name } => Some(format!("Caught {}!", name)),
            GameEvent::JoinedTeam { name } => Some(format!("{} joined your team!", name)),
            GameEvent::CaptureFailed { name } => Some(format!("{} broke free!", name)),
            GameEvent::EscapeSucceeded => Some("Got away safely!".to_string()),
            GameEvent::EscapeFailed => Some("Couldn't get away!".to_string()),
        }
    }
}

/// Events produced by the most recent input, or by the most recent batch of
/// deferred steps. The session clears it before each of those.
#[derive(Debug, Clone, Default)]
pub struct EventBus {
    events: Vec<GameEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: GameEvent) {
        log::debug!("Event: {:?}", event);
        self.events.push(event);
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn take(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Player-facing lines for every message-bearing event, in order.
    pub fn messages(&self) -> Vec<String> {
        self.events.iter().filter_map(GameEvent::format).collect()
    }
}

impl fmt::Display for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for event in &self.events {
            match event.format() {
                Some(text) => writeln!(f, "{}", text)?,
                None => writeln!(f, "{:?} (silent)", event)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attack(effectiveness: Effectiveness) -> GameEvent {
        GameEvent::AttackResolved {
            side: Side::Player,
            attacker: "Leafling".to_string(),
            move_used: "Vine Whip".to_string(),
            damage: 3,
            effectiveness,
            remaining_hp: 15,
        }
    }

    #[test]
    fn test_attack_message_carries_effectiveness_prefix() {
        assert_eq!(
            attack(Effectiveness::SuperEffective).format().unwrap(),
            "It's super effective! Leafling used Vine Whip! It dealt 3 damage!"
        );
        assert_eq!(
            attack(Effectiveness::NotVeryEffective).format().unwrap(),
            "It's not very effective... Leafling used Vine Whip! It dealt 3 damage!"
        );
        assert_eq!(
            attack(Effectiveness::Normal).format().unwrap(),
            "Leafling used Vine Whip! It dealt 3 damage!"
        );
    }

    #[test]
    fn test_event_bus_messages_skip_silent_events() {
        let mut bus = EventBus::new();
        bus.push(GameEvent::CaptureAttempted {
            name: "Embercub".to_string(),
            probability: OrderedFloat(0.4),
        });
        bus.push(GameEvent::CaptureFailed {
            name: "Embercub".to_string(),
        });

        assert_eq!(bus.len(), 2);
        assert_eq!(bus.messages(), vec!["Embercub broke free!".to_string()]);

        let display = format!("{}", bus);
        assert!(display.contains("CaptureAttempted"));
        assert!(display.contains("broke free"));

        let drained = bus.take();
        assert_eq!(drained.len(), 2);
        assert!(bus.is_empty());
    }
}
