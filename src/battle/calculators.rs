use crate::creature::CreatureInstance;
use crate::events::Side;
use crate::rng::TurnRng;
use schema::{Effectiveness, ElementType};

/// Result of one attack, before it is applied to the defender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackOutcome {
    pub move_used: String,
    pub base_damage: u16,
    pub effectiveness: Effectiveness,
    pub damage: u16,
}

/// Uniform base damage for each side, as (low, span): player 2-4, enemy 1-3.
fn base_damage_range(side: Side) -> (u16, u16) {
    match side {
        Side::Player => (2, 3),
        Side::Enemy => (1, 3),
    }
}

/// Pick a move for display and roll damage. Level and stats play no part.
pub fn calculate_attack_outcome(
    side: Side,
    attacker: &CreatureInstance,
    defender: &CreatureInstance,
    rng: &mut TurnRng,
) -> AttackOutcome {
    let move_used = if attacker.moves.is_empty() {
        "Struggle".to_string()
    } else {
        attacker.moves[rng.next_index(attacker.moves.len(), "move selection")].clone()
    };

    let (low, span) = base_damage_range(side);
    let base_damage = rng.roll_range(low, span, "base damage");

    let effectiveness = ElementType::effectiveness_between(attacker.element, defender.element);
    let damage = apply_effectiveness(base_damage, effectiveness);

    AttackOutcome {
        move_used,
        base_damage,
        effectiveness,
        damage,
    }
}

/// `floor(base * multiplier)`.
pub fn apply_effectiveness(base_damage: u16, effectiveness: Effectiveness) -> u16 {
    (f32::from(base_damage) * effectiveness.multiplier()).floor() as u16
}

/// Capture is offered while the HP ratio is strictly below `threshold`.
pub fn is_capture_eligible(creature: &CreatureInstance, threshold: f64) -> bool {
    creature.hp_ratio() < threshold
}

/// `scale * (1 - hp_ratio)`: zero at full HP, `scale` as HP approaches zero.
pub fn capture_probability(creature: &CreatureInstance, scale: f64) -> f64 {
    scale * (1.0 - creature.hp_ratio())
}
