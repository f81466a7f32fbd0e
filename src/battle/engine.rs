//! Battle resolution: attacks, capture and escape attempts, and the deferred
//! steps that carry a battle to its end.
//!
//! Every function here re-reads the battle target from the world by id. If it
//! is gone (already defeated or captured), the function returns without
//! touching state or the status message.

use crate::battle::calculators::{
    calculate_attack_outcome, capture_probability, is_capture_eligible,
};
use crate::battle::state::{BattleState, Turn};
use crate::events::{GameEvent, Side};
use crate::game::{GameMode, GameSession};
use crate::scheduler::DeferredStep;
use ordered_float::OrderedFloat;

/// Enter battle with the wild creature `creature_id`. The player moves first.
pub fn start_battle(session: &mut GameSession, creature_id: &str, ambient: bool) {
    let Some(creature) = session.world.wild(creature_id) else {
        return;
    };

    let can_capture = is_capture_eligible(creature, session.config.capture_threshold);
    let name = creature.name.clone();
    log::debug!(
        "Battle started with {} ({}): {}/{} HP, capture allowed: {}",
        name,
        creature_id,
        creature.current_hp(),
        creature.max_hp(),
        can_capture
    );

    session.battle = Some(BattleState::new(creature_id.to_string(), can_capture));
    session.mode = GameMode::Battle;
    session.emit(GameEvent::WildEncounter {
        creature_id: creature_id.to_string(),
        name,
        ambient,
    });
}

/// Resolve the player's attack on the battle target.
pub fn player_attack(session: &mut GameSession) {
    let Some(target_id) = session.battle.as_ref().map(|b| b.target_id.clone()) else {
        return;
    };
    let Some(target) = session.world.wild(&target_id) else {
        return;
    };

    let attacker = session.roster.active();
    let outcome = calculate_attack_outcome(Side::Player, attacker, target, &mut session.rng);
    let attacker_name = attacker.name.clone();

    let Some(target) = session.world.wild_mut(&target_id) else {
        return;
    };
    target.take_damage(outcome.damage);
    let remaining_hp = target.current_hp();
    let can_capture = is_capture_eligible(target, session.config.capture_threshold);

    session.emit(GameEvent::AttackResolved {
        side: Side::Player,
        attacker: attacker_name,
        move_used: outcome.move_used,
        damage: outcome.damage,
        effectiveness: outcome.effectiveness,
        remaining_hp,
    });
    refresh_capture_flag(session, can_capture);

    if remaining_hp == 0 {
        // No counter-attack: the battle ends with the defeat sequence.
        session.queue.schedule(
            session.config.delays.defeat_announce,
            DeferredStep::AnnounceWildDefeat {
                creature_id: target_id,
            },
        );
    } else {
        pass_turn_to_enemy(session);
    }
}

/// Throw a capture sphere. Only offered while the target is capture eligible.
pub fn attempt_capture(session: &mut GameSession) {
    let Some(target_id) = session.battle.as_ref().map(|b| b.target_id.clone()) else {
        return;
    };
    let Some(target) = session.world.wild(&target_id) else {
        return;
    };

    let name = target.name.clone();
    let probability = capture_probability(target, session.config.capture_scale);
    session.emit(GameEvent::CaptureAttempted {
        name: name.clone(),
        probability: OrderedFloat(probability),
    });

    if !session.rng.chance(probability, "capture roll") {
        session.emit(GameEvent::CaptureFailed { name });
        pass_turn_to_enemy(session);
        return;
    }

    let Some(wild) = session.world.remove_wild(&target_id) else {
        return;
    };
    let captured = wild.into_captured(session.roster.next_id());
    session.roster.push(captured);
    session.emit(GameEvent::CaptureSucceeded { name: name.clone() });
    session.queue.schedule(
        session.config.delays.capture_return,
        DeferredStep::ReturnAfterCapture { name },
    );
}

/// Try to run. Only offered while the target is not capture eligible.
pub fn attempt_escape(session: &mut GameSession) {
    if session.battle.is_none() {
        return;
    }

    if session.rng.chance(session.config.escape_chance, "escape roll") {
        session.battle = None;
        session.mode = GameMode::World;
        session.emit(GameEvent::EscapeSucceeded);
    } else {
        session.emit(GameEvent::EscapeFailed);
        pass_turn_to_enemy(session);
    }
}

/// Execute one deferred step against the current state.
pub fn run_deferred_step(session: &mut GameSession, step: DeferredStep) {
    log::debug!("Running deferred step {:?}", step);
    match step {
        DeferredStep::EnemyAttack => enemy_attack(session),
        DeferredStep::AnnounceWildDefeat { creature_id } => {
            announce_wild_defeat(session, &creature_id)
        }
        DeferredStep::ReturnAfterVictory => {
            let active = session.roster.active();
            let event = GameEvent::LeveledUp {
                name: active.name.clone(),
                level: active.level,
            };
            end_battle(session);
            session.emit(event);
        }
        DeferredStep::AnnouncePlayerFaint => {
            let name = session.roster.active().name.clone();
            session.emit(GameEvent::PlayerFainted { name });
            session
                .queue
                .schedule(session.config.delays.recovery, DeferredStep::RecoverPlayer);
        }
        DeferredStep::RecoverPlayer => {
            session.roster.active_mut().heal_to_full();
            end_battle(session);
            session.emit(GameEvent::SentBackToBase);
        }
        DeferredStep::ReturnAfterCapture { name } => {
            end_battle(session);
            session.emit(GameEvent::JoinedTeam { name });
            session.queue.schedule(
                session.config.delays.capture_menu,
                DeferredStep::ShowRosterAfterCapture,
            );
        }
        DeferredStep::ShowRosterAfterCapture => {
            // The player may have walked into another battle in the meantime.
            if session.mode == GameMode::World {
                session.mode = GameMode::Menu;
                session.emit(GameEvent::RosterShown);
            }
        }
    }
}

fn enemy_attack(session: &mut GameSession) {
    let Some(target_id) = session.battle.as_ref().map(|b| b.target_id.clone()) else {
        return;
    };
    let Some(enemy) = session.world.wild(&target_id) else {
        return;
    };

    let defender = session.roster.active();
    let outcome = calculate_attack_outcome(Side::Enemy, enemy, defender, &mut session.rng);
    let attacker_name = enemy.name.clone();

    let defender = session.roster.active_mut();
    defender.take_damage(outcome.damage);
    let remaining_hp = defender.current_hp();

    session.emit(GameEvent::AttackResolved {
        side: Side::Enemy,
        attacker: attacker_name,
        move_used: outcome.move_used,
        damage: outcome.damage,
        effectiveness: outcome.effectiveness,
        remaining_hp,
    });

    if remaining_hp == 0 {
        session.queue.schedule(
            session.config.delays.faint_announce,
            DeferredStep::AnnouncePlayerFaint,
        );
    } else if let Some(battle) = session.battle.as_mut() {
        battle.turn = Turn::Player;
    }
}

fn announce_wild_defeat(session: &mut GameSession, creature_id: &str) {
    let Some(defeated) = session.world.remove_wild(creature_id) else {
        return;
    };

    session.emit(GameEvent::WildDefeated {
        name: defeated.name,
    });
    session
        .roster
        .active_mut()
        .level_up(session.config.level_up_hp_gain);
    session.queue.schedule(
        session.config.delays.level_up_return,
        DeferredStep::ReturnAfterVictory,
    );
}

fn pass_turn_to_enemy(session: &mut GameSession) {
    if let Some(battle) = session.battle.as_mut() {
        battle.turn = Turn::Enemy;
    }
    session.queue.schedule(
        session.config.delays.enemy_attack,
        DeferredStep::EnemyAttack,
    );
}

fn refresh_capture_flag(session: &mut GameSession, can_capture: bool) {
    let Some(battle) = session.battle.as_mut() else {
        return;
    };
    if battle.can_capture != can_capture {
        battle.can_capture = can_capture;
        session.emit(GameEvent::CaptureEligibilityChanged { can_capture });
    }
}

fn end_battle(session: &mut GameSession) {
    session.battle = None;
    session.mode = GameMode::World;
}
