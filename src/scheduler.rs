use std::collections::VecDeque;

/// A battle continuation that runs after a fixed delay.
///
/// Steps carry ids and names only. Whatever they act on is looked up again
/// when they run, and a step whose subject has disappeared does nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeferredStep {
    /// The wild creature's counter-attack.
    EnemyAttack,
    /// Announce and remove a defeated wild creature, then level up.
    AnnounceWildDefeat { creature_id: String },
    /// Leave the finished battle and report the level gained.
    ReturnAfterVictory,
    /// Announce that the player's active creature fainted.
    AnnouncePlayerFaint,
    /// Heal the fainted creature and send the player back to the world.
    RecoverPlayer,
    /// Leave the battle after a successful capture.
    ReturnAfterCapture { name: String },
    /// Open the roster so the new team member is visible.
    ShowRosterAfterCapture,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledStep {
    pub due_ms: u64,
    pub step: DeferredStep,
}

/// Single-threaded queue of deferred steps on a virtual millisecond clock.
///
/// Steps are kept ordered by due time; steps due at the same instant keep
/// their scheduling order.
#[derive(Debug, Clone, Default)]
pub struct StepQueue {
    now_ms: u64,
    steps: VecDeque<ScheduledStep>,
}

impl StepQueue {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            steps: VecDeque::new(),
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn schedule(&mut self, delay_ms: u64, step: DeferredStep) {
        let due_ms = self.now_ms + delay_ms;
        log::debug!("Scheduling {:?} in {}ms", step, delay_ms);

        let insert_at = self
            .steps
            .iter()
            .position(|scheduled| scheduled.due_ms > due_ms)
            .unwrap_or(self.steps.len());
        self.steps.insert(insert_at, ScheduledStep { due_ms, step });
    }

    /// Pop the next step if it is due at or before `horizon_ms`, moving the
    /// clock to its due time.
    pub fn pop_due(&mut self, horizon_ms: u64) -> Option<DeferredStep> {
        if self.steps.front()?.due_ms > horizon_ms {
            return None;
        }
        let scheduled = self.steps.pop_front()?;
        self.now_ms = self.now_ms.max(scheduled.due_ms);
        Some(scheduled.step)
    }

    /// Pop the next step regardless of its delay.
    pub fn pop_next(&mut self) -> Option<DeferredStep> {
        let due_ms = self.steps.front()?.due_ms;
        self.pop_due(due_ms)
    }

    /// Move the clock forward without running anything.
    pub fn advance_clock_to(&mut self, time_ms: u64) {
        self.now_ms = self.now_ms.max(time_ms);
    }

    /// Milliseconds until the next step is due, or None when idle.
    pub fn next_due_in(&self) -> Option<u64> {
        self.steps
            .front()
            .map(|scheduled| scheduled.due_ms.saturating_sub(self.now_ms))
    }

    pub fn pending(&self) -> impl Iterator<Item = &ScheduledStep> {
        self.steps.iter()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_idle(&self) -> bool {
        self.steps.is_empty()
    }
}
