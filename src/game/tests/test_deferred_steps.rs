#[cfg(test)]
mod tests {
    use crate::battle::engine::{attempt_capture, player_attack, run_deferred_step};
    use crate::events::GameEvent;
    use crate::game::tests::common::TestSessionBuilder;
    use crate::game::GameMode;
    use crate::input::Button;
    use crate::scheduler::DeferredStep;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_enemy_attack_without_target_is_a_no_op() {
        let mut session = TestSessionBuilder::new()
            .with_wild("wild-0", "Embercub", 5, 4)
            .build_in_world();
        session.handle_input(Button::UP);
        session.world.remove_wild("wild-0");
        let message = session.message().to_string();
        session.take_events();

        run_deferred_step(&mut session, DeferredStep::EnemyAttack);

        assert_eq!(session.message(), message);
        assert!(session.events().is_empty());
        assert_eq!(session.roster().active().current_hp(), 20);
        assert!(!session.has_pending_steps());
    }

    #[test]
    fn test_enemy_attack_outside_battle_is_a_no_op() {
        let mut session = TestSessionBuilder::new()
            .with_wild("wild-0", "Embercub", 5, 4)
            .build_in_world();

        run_deferred_step(&mut session, DeferredStep::EnemyAttack);

        assert!(session.events().is_empty());
        assert_eq!(session.mode(), GameMode::World);
    }

    #[test]
    fn test_defeat_announcement_for_vanished_creature_is_a_no_op() {
        let mut session = TestSessionBuilder::new().build_in_world();

        run_deferred_step(
            &mut session,
            DeferredStep::AnnounceWildDefeat {
                creature_id: "wild-7".to_string(),
            },
        );

        assert!(session.events().is_empty());
        assert_eq!(session.roster().active().level, 5);
        assert!(!session.has_pending_steps());
    }

    #[test]
    fn test_engine_actions_without_battle_do_nothing() {
        let mut session = TestSessionBuilder::new()
            .with_wild("wild-0", "Embercub", 5, 4)
            .build_in_world();

        player_attack(&mut session);
        attempt_capture(&mut session);

        assert!(session.events().is_empty());
        assert_eq!(session.world().wild_count(), 1);
    }

    #[test]
    fn test_only_latest_message_is_visible() {
        let mut session = TestSessionBuilder::new()
            .with_starter("Embercub")
            .with_wild_hp("wild-0", "Leafling", 5, 4, 2)
            .with_rng(vec![0.0, 0.0])
            .build_in_world();
        session.handle_input(Button::UP);
        session.handle_input(Button::A);
        session.settle();

        // Both deferred steps produced a message, but only the last one is shown.
        let messages = session.events().messages();
        assert_eq!(
            messages,
            vec![
                "Leafling fainted! Gained experience!".to_string(),
                "Embercub grew to level 6!".to_string(),
            ]
        );
        assert_eq!(session.message(), "Embercub grew to level 6!");
    }

    #[test]
    fn test_event_bus_holds_only_the_latest_input() {
        let mut session = TestSessionBuilder::new().build();
        session.handle_input(Button::A);

        for _ in 0..50 {
            session.handle_input(Button::A);
            session.handle_input(Button::B);
        }

        assert_eq!(session.events().events(), &[GameEvent::MenuClosed]);

        // An ignored input leaves the bus empty.
        session.handle_input(Button::B);
        assert!(session.events().is_empty());
    }

    #[test]
    fn test_event_bus_is_reset_by_the_next_step_batch() {
        let mut session = TestSessionBuilder::new()
            .with_wild("wild-0", "Palcat", 5, 4)
            .with_rng(vec![0.0, 0.0, 0.0, 0.0])
            .build_in_world();
        session.handle_input(Button::UP);
        session.handle_input(Button::A);
        assert_eq!(session.events().len(), 1);

        // Nothing due yet: the input's events stay.
        session.advance(500);
        assert_eq!(session.events().len(), 1);

        session.advance(500);
        assert_eq!(session.events().len(), 1);
        assert!(matches!(
            session.events().events()[0],
            GameEvent::AttackResolved { ref attacker, .. } if attacker == "Palcat"
        ));
    }
}
