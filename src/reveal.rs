//! Staged reveal of the computer's hand.
//!
//! A [`RevealSequence`] is a small timer-driven task: the owner feeds it
//! elapsed time and applies the [`RevealStep`]s it emits. Card `k` flips at
//! `k * interval` (the first one immediately) and the round resolves one
//! interval after the last flip. Cancelling its [`CancelToken`] silences it
//! for good, so a sequence left over from an earlier round can never touch a
//! newer one.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Shared cancellation flag. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// One action of the reveal sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStep {
    /// Turn the computer card at this index face-up.
    Card(usize),
    /// All cards are up; decide the winner.
    Resolve,
}

#[derive(Debug, Clone)]
pub struct RevealSequence {
    cards: usize,
    interval: Duration,
    elapsed: Duration,
    /// Steps already emitted, `0..=cards + 1`.
    emitted: usize,
    token: CancelToken,
}

impl RevealSequence {
    pub fn new(cards: usize, interval: Duration, token: CancelToken) -> Self {
        Self { cards, interval, elapsed: Duration::ZERO, emitted: 0, token }
    }

    pub fn token(&self) -> &CancelToken {
        &self.token
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// True once the resolve step has been emitted.
    pub fn is_finished(&self) -> bool {
        self.emitted > self.cards
    }

    /// Number of cards flipped so far.
    pub fn revealed(&self) -> usize {
        self.emitted.min(self.cards)
    }

    /// Time until the next step is due, `None` when finished or cancelled.
    pub fn next_due(&self) -> Option<Duration> {
        if self.is_finished() || self.is_cancelled() {
            return None;
        }
        Some(self.due_at(self.emitted).saturating_sub(self.elapsed))
    }

    /// Advance the clock by `dt` and return every step that came due, in order.
    /// A cancelled sequence returns nothing.
    pub fn advance(&mut self, dt: Duration) -> Vec<RevealStep> {
        if self.is_cancelled() {
            return Vec::new();
        }
        self.elapsed = self.elapsed.saturating_add(dt);
        let mut steps = Vec::new();
        while !self.is_finished() && self.due_at(self.emitted) <= self.elapsed {
            let step = if self.emitted < self.cards {
                RevealStep::Card(self.emitted)
            } else {
                RevealStep::Resolve
            };
            steps.push(step);
            self.emitted += 1;
        }
        steps
    }

    fn due_at(&self, step: usize) -> Duration {
        let k = u32::try_from(step).unwrap_or(u32::MAX);
        self.interval.saturating_mul(k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEC: Duration = Duration::from_secs(1);

    #[test]
    fn first_card_flips_immediately() {
        let mut seq = RevealSequence::new(4, SEC, CancelToken::new());
        assert_eq!(seq.advance(Duration::ZERO), vec![RevealStep::Card(0)]);
        assert_eq!(seq.revealed(), 1);
        assert_eq!(seq.next_due(), Some(SEC));
    }

    #[test]
    fn one_step_per_interval_then_resolve() {
        let mut seq = RevealSequence::new(4, SEC, CancelToken::new());
        let _ = seq.advance(Duration::ZERO);
        assert!(seq.advance(Duration::from_millis(999)).is_empty());
        assert_eq!(seq.advance(Duration::from_millis(1)), vec![RevealStep::Card(1)]);
        assert_eq!(seq.advance(SEC), vec![RevealStep::Card(2)]);
        assert_eq!(seq.advance(SEC), vec![RevealStep::Card(3)]);
        assert!(!seq.is_finished());
        assert_eq!(seq.advance(SEC), vec![RevealStep::Resolve]);
        assert!(seq.is_finished());
        assert!(seq.advance(SEC * 10).is_empty());
        assert_eq!(seq.next_due(), None);
    }

    #[test]
    fn large_tick_emits_backlog_in_order() {
        let mut seq = RevealSequence::new(4, SEC, CancelToken::new());
        let steps = seq.advance(SEC * 60);
        assert_eq!(
            steps,
            vec![
                RevealStep::Card(0),
                RevealStep::Card(1),
                RevealStep::Card(2),
                RevealStep::Card(3),
                RevealStep::Resolve,
            ]
        );
    }

    #[test]
    fn cancelled_sequence_is_silent() {
        let token = CancelToken::new();
        let mut seq = RevealSequence::new(4, SEC, token.clone());
        let _ = seq.advance(Duration::ZERO);
        token.cancel();
        assert!(seq.is_cancelled());
        assert!(seq.advance(SEC * 10).is_empty());
        assert_eq!(seq.revealed(), 1);
        assert_eq!(seq.next_due(), None);
    }
}
