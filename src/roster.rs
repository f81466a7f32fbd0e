use crate::creature::CreatureInstance;
use serde::{Deserialize, Serialize};

/// The player's creatures, in the order they joined. Index 0 battles.
///
/// There is no removal: fainting only ever heals the creature back up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerRoster {
    members: Vec<CreatureInstance>,
}

impl PlayerRoster {
    pub fn new(starter: CreatureInstance) -> Self {
        Self {
            members: vec![starter],
        }
    }

    pub fn active(&self) -> &CreatureInstance {
        &self.members[0]
    }

    pub fn active_mut(&mut self) -> &mut CreatureInstance {
        &mut self.members[0]
    }

    pub fn members(&self) -> &[CreatureInstance] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Id the next captured creature will receive.
    pub fn next_id(&self) -> String {
        format!("player-{}", self.members.len() + 1)
    }

    pub fn push(&mut self, creature: CreatureInstance) {
        log::debug!(
            "{} ({}) joined the roster in slot {}",
            creature.name,
            creature.id,
            self.members.len()
        );
        self.members.push(creature);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::get_template;
    use crate::creature::Ownership;

    fn player_creature(id: &str, name: &str) -> CreatureInstance {
        CreatureInstance::from_template(
            id.to_string(),
            get_template(name).unwrap(),
            Ownership::Player,
        )
    }

    #[test]
    fn test_roster_keeps_join_order() {
        let mut roster = PlayerRoster::new(player_creature("player-1", "Leafling"));
        assert_eq!(roster.next_id(), "player-2");

        roster.push(player_creature("player-2", "Palcat"));
        roster.push(player_creature("player-3", "Splashkin"));

        let names: Vec<&str> = roster.members().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Leafling", "Palcat", "Splashkin"]);
        assert_eq!(roster.active().name, "Leafling");
        assert_eq!(roster.next_id(), "player-4");
    }
}
