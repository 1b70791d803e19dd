//! # Card Reveal
//!
//! Each rendered card starts `Pending` (hidden). The first time at least
//! [`VISIBILITY_THRESHOLD`] of it is inside the viewport it becomes
//! `Revealed` and stops being observed. There is no way back to `Pending`,
//! so scrolling a card out and in again does not replay the animation.
//!
//! Reveal delays cascade across the three grid columns:
//!
//! ```text
//! column:   0        1        2
//! delay:    0ms      200ms    400ms
//! ```
//!
//! Time is passed in as a `Duration` since some fixed start, which keeps the
//! tracker free of clocks and easy to test.

use std::time::Duration;

/// Fraction of a card that must be visible before it is revealed.
pub const VISIBILITY_THRESHOLD: f32 = 0.2;
/// Cards per grid row; the stagger repeats every row.
pub const GRID_COLUMNS: usize = 3;
/// Extra delay per column position.
pub const STAGGER_UNIT: Duration = Duration::from_millis(200);
/// How long a card takes to animate in once its delay has passed.
pub const REVEAL_DURATION: Duration = Duration::from_millis(400);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Pending,
    Revealed { at: Duration, delay: Duration },
}

/// What a card should look like right now.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CardPhase {
    Hidden,
    /// Animating in; progress in `0.0..1.0`.
    Entering(f32),
    Shown,
}

/// Stagger delay for the card at `index` in the rendered grid.
pub fn stagger_delay(index: usize) -> Duration {
    STAGGER_UNIT * (index % GRID_COLUMNS) as u32
}

#[derive(Debug, Default)]
pub struct RevealTracker {
    states: Vec<RevealState>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every card, e.g. when the displayed list is replaced.
    pub fn clear(&mut self) {
        self.states.clear();
    }

    /// Register newly rendered cards as `Pending` until `len` cards are tracked.
    pub fn register_up_to(&mut self, len: usize) {
        if len > self.states.len() {
            self.states.resize(len, RevealState::Pending);
        }
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn state(&self, index: usize) -> Option<RevealState> {
        self.states.get(index).copied()
    }

    /// Report how much of card `index` is visible. Returns `true` only on
    /// the call that moves it from `Pending` to `Revealed`.
    pub fn observe(&mut self, index: usize, visible_fraction: f32, now: Duration) -> bool {
        let Some(state) = self.states.get_mut(index) else {
            return false;
        };
        if *state != RevealState::Pending || visible_fraction < VISIBILITY_THRESHOLD {
            return false;
        }
        *state = RevealState::Revealed {
            at: now,
            delay: stagger_delay(index),
        };
        true
    }

    pub fn phase(&self, index: usize, now: Duration) -> CardPhase {
        match self.states.get(index) {
            None | Some(RevealState::Pending) => CardPhase::Hidden,
            Some(RevealState::Revealed { at, delay }) => {
                let start = *at + *delay;
                if now < start {
                    CardPhase::Hidden
                } else {
                    let elapsed = now - start;
                    if elapsed >= REVEAL_DURATION {
                        CardPhase::Shown
                    } else {
                        CardPhase::Entering(elapsed.as_secs_f32() / REVEAL_DURATION.as_secs_f32())
                    }
                }
            }
        }
    }

    /// True while any revealed card is still waiting or animating.
    pub fn is_animating(&self, now: Duration) -> bool {
        (0..self.states.len()).any(|i| {
            matches!(self.states[i], RevealState::Revealed { .. })
                && self.phase(i, now) != CardPhase::Shown
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T0: Duration = Duration::from_secs(1);

    #[test]
    fn test_registered_cards_start_pending() {
        let mut tracker = RevealTracker::new();
        tracker.register_up_to(6);
        assert_eq!(tracker.len(), 6);
        assert_eq!(tracker.state(5), Some(RevealState::Pending));
        assert_eq!(tracker.phase(0, T0), CardPhase::Hidden);
    }

    #[test]
    fn test_below_threshold_stays_pending() {
        let mut tracker = RevealTracker::new();
        tracker.register_up_to(1);
        assert!(!tracker.observe(0, 0.1, T0));
        assert_eq!(tracker.state(0), Some(RevealState::Pending));
        assert!(tracker.observe(0, 0.2, T0));
    }

    #[test]
    fn test_reveal_fires_at_most_once() {
        let mut tracker = RevealTracker::new();
        tracker.register_up_to(3);

        let mut fired = 0;
        // In, out, in again, fully visible
        for fraction in [0.5, 0.0, 0.6, 1.0] {
            if tracker.observe(1, fraction, T0) {
                fired += 1;
            }
        }
        assert_eq!(fired, 1);
        assert_eq!(
            tracker.state(1),
            Some(RevealState::Revealed {
                at: T0,
                delay: STAGGER_UNIT
            })
        );
    }

    #[test]
    fn test_stagger_by_column() {
        assert_eq!(stagger_delay(0), Duration::ZERO);
        assert_eq!(stagger_delay(1), Duration::from_millis(200));
        assert_eq!(stagger_delay(2), Duration::from_millis(400));
        assert_eq!(stagger_delay(3), Duration::ZERO);
        assert_eq!(stagger_delay(7), Duration::from_millis(200));
    }

    #[test]
    fn test_phase_progression() {
        let mut tracker = RevealTracker::new();
        tracker.register_up_to(3);
        tracker.observe(2, 1.0, T0);

        // Column 2 waits 400ms before animating
        assert_eq!(tracker.phase(2, T0 + Duration::from_millis(399)), CardPhase::Hidden);
        match tracker.phase(2, T0 + Duration::from_millis(600)) {
            CardPhase::Entering(progress) => assert!((progress - 0.5).abs() < 0.01),
            other => panic!("expected Entering, got {other:?}"),
        }
        assert_eq!(tracker.phase(2, T0 + Duration::from_millis(800)), CardPhase::Shown);
        assert!(!tracker.is_animating(T0 + Duration::from_secs(5)));
        assert!(tracker.is_animating(T0 + Duration::from_millis(100)));
    }

    #[test]
    fn test_observe_unknown_index_is_ignored() {
        let mut tracker = RevealTracker::new();
        assert!(!tracker.observe(4, 1.0, T0));
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_clear_forgets_revealed_cards() {
        let mut tracker = RevealTracker::new();
        tracker.register_up_to(2);
        tracker.observe(0, 1.0, T0);
        tracker.clear();
        tracker.register_up_to(1);
        assert_eq!(tracker.state(0), Some(RevealState::Pending));
    }
}
