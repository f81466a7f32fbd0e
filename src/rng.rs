use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of every random decision in a session.
///
/// Live sessions draw from a seedable `StdRng`. Tests script the exact unit
/// draws (values in `[0, 1)`) they want the engine to see, in order.
#[derive(Debug, Clone)]
pub struct TurnRng {
    source: RngSource,
}

#[derive(Debug, Clone)]
enum RngSource {
    Live(StdRng),
    Scripted { outcomes: Vec<f64>, index: usize },
}

impl TurnRng {
    pub fn new_random() -> Self {
        Self {
            source: RngSource::Live(StdRng::from_os_rng()),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            source: RngSource::Live(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn new_for_test(outcomes: Vec<f64>) -> Self {
        Self {
            source: RngSource::Scripted { outcomes, index: 0 },
        }
    }

    /// A uniform draw from `[0, 1)`.
    pub fn next_unit(&mut self, reason: &str) -> f64 {
        let outcome = match &mut self.source {
            RngSource::Live(rng) => rng.random::<f64>(),
            RngSource::Scripted { outcomes, index } => {
                if *index >= outcomes.len() {
                    panic!(
                        "TurnRng exhausted! Tried to get a value for: '{}'. Need more random values.",
                        reason
                    );
                }
                let outcome = outcomes[*index];
                *index += 1;
                outcome
            }
        };

        log::trace!("[RNG] Consumed {:.3} for: {}", outcome, reason);
        outcome
    }

    /// `true` with probability `chance`.
    pub fn chance(&mut self, chance: f64, reason: &str) -> bool {
        self.next_unit(reason) < chance
    }

    /// A uniform index into a collection of `len` items. `len` must be non-zero.
    pub fn next_index(&mut self, len: usize, reason: &str) -> usize {
        let index = (self.next_unit(reason) * len as f64).floor() as usize;
        index.min(len.saturating_sub(1))
    }

    /// `floor(low + unit * span)`, i.e. an integer in `low..low + span`.
    pub fn roll_range(&mut self, low: u16, span: u16, reason: &str) -> u16 {
        let roll = f64::from(low) + self.next_unit(reason) * f64::from(span);
        roll.floor() as u16
    }
}
