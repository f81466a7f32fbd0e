#[cfg(test)]
mod tests {
    use crate::config::GameConfig;
    use crate::game::{GameMode, GameSession};
    use crate::input::Button;
    use crate::rng::TurnRng;

    fn seeded_config(seed: u64) -> GameConfig {
        GameConfig {
            seed: Some(seed),
            ..GameConfig::default()
        }
    }

    #[test]
    fn test_new_session_starts_on_title_with_populated_world() {
        let session = GameSession::new(seeded_config(1)).unwrap();

        assert_eq!(session.mode(), GameMode::Title);
        assert_eq!(session.world().wild_count(), 5);
        assert_eq!(session.roster().len(), 1);

        let starter = session.roster().active();
        assert_eq!(starter.id, "player-1");
        assert!(starter.is_player());
        assert!(["Leafling", "Embercub", "Splashkin"].contains(&starter.name.as_str()));
        assert!(session.world().wild_creatures().all(|c| c.is_wild()));
    }

    #[test]
    fn test_same_seed_builds_same_world() {
        let a = GameSession::new(seeded_config(99)).unwrap();
        let b = GameSession::new(seeded_config(99)).unwrap();
        assert_eq!(a.view(), b.view());
    }

    /// Mash random buttons through whole battles and check the invariants that
    /// must hold after every input and every deferred step.
    #[test]
    fn test_hp_and_roster_invariants_hold_under_random_play() {
        let mut session = GameSession::new(seeded_config(2024)).unwrap();
        let mut picker = TurnRng::from_seed(7);
        let buttons = [
            Button::UP,
            Button::DOWN,
            Button::LEFT,
            Button::RIGHT,
            Button::A,
            Button::A,
            Button::B,
        ];
        let mut roster_len = session.roster().len();

        for _ in 0..3000 {
            let button = buttons[picker.next_index(buttons.len(), "button")];
            session.handle_input(button);
            session.advance(400);

            for creature in session.roster().members() {
                assert!(creature.current_hp() <= creature.max_hp());
                assert!(creature.level >= 5);
                assert!(creature.is_player());
            }
            for creature in session.world().wild_creatures() {
                assert!(creature.current_hp() <= creature.max_hp());
                assert!(creature.position().is_some());
            }

            assert!(session.roster().len() >= roster_len);
            roster_len = session.roster().len();

            let position = session.world().explorer.position;
            assert!(position.x < 10 && position.y < 10);

            if session.mode() != GameMode::Battle {
                assert!(session.battle().is_none());
            }
        }

        assert_eq!(session.roster().active().id, "player-1");
        assert!(session.roster().len() + session.world().wild_count() <= 6);
    }
}
