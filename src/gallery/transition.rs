//! Two-phase slide transition.
//!
//! Navigating slides the image out toward the direction of travel, snaps it
//! (unanimated) to the opposite side, then slides it back to rest. The first
//! phase is applied immediately; the other two are deferred and drained by
//! the host event loop through [`TransitionQueue::drain_due`].
//!
//! Every deferred step carries the epoch it was scheduled under. The
//! controller drops steps whose epoch is no longer current.

use std::time::{Duration, Instant};

/// Direction of travel through the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward higher positions (`next`).
    Forward,
    /// Toward lower positions (`previous`).
    Backward,
}

impl Direction {
    /// Horizontal offset (percent of width) the image leaves toward.
    fn exit_offset(self) -> i16 {
        match self {
            Direction::Forward => 100,
            Direction::Backward => -100,
        }
    }

    /// Horizontal offset the image re-enters from.
    fn entry_offset(self) -> i16 {
        -self.exit_offset()
    }
}

/// Visual state of the displayed image for one transition phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlideFrame {
    /// Horizontal translation as a percentage of the image width.
    pub offset_percent: i16,
    /// Whether the image is fully opaque (`false` means transparent).
    pub opaque: bool,
    /// Whether the surface should animate toward this frame rather than jump.
    pub animated: bool,
}

impl SlideFrame {
    /// Resting position: centred, opaque, no animation.
    pub const REST: SlideFrame = SlideFrame {
        offset_percent: 0,
        opaque: true,
        animated: false,
    };

    /// Phase one: slide out toward the direction of travel and fade.
    pub fn slide_out(direction: Direction) -> Self {
        Self {
            offset_percent: direction.exit_offset(),
            opaque: false,
            animated: true,
        }
    }

    /// Phase two: jump to the opposite side with animation disabled.
    pub fn reset(direction: Direction) -> Self {
        Self {
            offset_percent: direction.entry_offset(),
            opaque: false,
            animated: false,
        }
    }

    /// Phase three: animate back to the centre at full opacity.
    pub fn settle() -> Self {
        Self {
            offset_percent: 0,
            opaque: true,
            animated: true,
        }
    }
}

/// Transition timing, all tunable through configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionTiming {
    /// Delay between slide-out and the reset jump.
    pub reset_after: Duration,
    /// Delay between the reset jump and the settle animation.
    pub settle_after: Duration,
    /// Length of each animated phase. Surfaces use this to interpolate.
    pub slide_duration: Duration,
}

impl Default for TransitionTiming {
    fn default() -> Self {
        Self {
            reset_after: Duration::from_millis(300),
            settle_after: Duration::from_millis(50),
            slide_duration: Duration::from_millis(300),
        }
    }
}

/// A deferred transition phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingStep {
    /// When the step becomes due.
    pub due: Instant,
    /// Controller epoch the step was scheduled under.
    pub epoch: u64,
    /// Frame to apply when due.
    pub frame: SlideFrame,
}

/// Deferred transition phases waiting for their deadline.
#[derive(Debug, Clone, Default)]
pub struct TransitionQueue {
    pending: Vec<PendingStep>,
}

impl TransitionQueue {
    /// Empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the deferred phases of a transition started at `now`.
    ///
    /// Returns the frame to apply immediately.
    pub fn schedule(
        &mut self,
        direction: Direction,
        epoch: u64,
        now: Instant,
        timing: TransitionTiming,
    ) -> SlideFrame {
        let reset_due = now + timing.reset_after;
        self.pending.push(PendingStep {
            due: reset_due,
            epoch,
            frame: SlideFrame::reset(direction),
        });
        self.pending.push(PendingStep {
            due: reset_due + timing.settle_after,
            epoch,
            frame: SlideFrame::settle(),
        });
        SlideFrame::slide_out(direction)
    }

    /// Remove and return every step due at or before `now`, earliest first.
    pub fn drain_due(&mut self, now: Instant) -> Vec<PendingStep> {
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|step| step.due <= now);
        self.pending = pending;
        due.sort_by_key(|step| step.due);
        due
    }

    /// Earliest deadline still queued.
    pub fn next_due(&self) -> Option<Instant> {
        self.pending.iter().map(|step| step.due).min()
    }

    /// Number of queued steps.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_exits_right_and_reenters_from_left() {
        assert_eq!(SlideFrame::slide_out(Direction::Forward).offset_percent, 100);
        assert_eq!(SlideFrame::reset(Direction::Forward).offset_percent, -100);
    }

    #[test]
    fn backward_mirrors_forward() {
        assert_eq!(SlideFrame::slide_out(Direction::Backward).offset_percent, -100);
        assert_eq!(SlideFrame::reset(Direction::Backward).offset_percent, 100);
    }

    #[test]
    fn reset_phase_is_not_animated() {
        assert!(!SlideFrame::reset(Direction::Forward).animated);
        assert!(SlideFrame::settle().animated);
        assert!(SlideFrame::settle().opaque);
    }

    #[test]
    fn schedule_queues_reset_then_settle_with_default_timing() {
        let mut queue = TransitionQueue::new();
        let now = Instant::now();
        let timing = TransitionTiming::default();

        let first = queue.schedule(Direction::Forward, 7, now, timing);

        assert_eq!(first, SlideFrame::slide_out(Direction::Forward));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.next_due(), Some(now + Duration::from_millis(300)));
    }

    #[test]
    fn drain_due_returns_only_elapsed_steps_in_order() {
        let mut queue = TransitionQueue::new();
        let now = Instant::now();
        queue.schedule(Direction::Backward, 1, now, TransitionTiming::default());

        assert!(queue.drain_due(now).is_empty());

        let reset = queue.drain_due(now + Duration::from_millis(300));
        assert_eq!(reset.len(), 1);
        assert_eq!(reset[0].frame, SlideFrame::reset(Direction::Backward));

        let settle = queue.drain_due(now + Duration::from_millis(350));
        assert_eq!(settle.len(), 1);
        assert_eq!(settle[0].frame, SlideFrame::settle());
        assert!(queue.is_empty());
        assert_eq!(queue.next_due(), None);
    }

    #[test]
    fn drain_due_sorts_across_transitions() {
        let mut queue = TransitionQueue::new();
        let now = Instant::now();
        queue.schedule(Direction::Forward, 1, now, TransitionTiming::default());
        queue.schedule(
            Direction::Forward,
            2,
            now + Duration::from_millis(10),
            TransitionTiming::default(),
        );

        let all = queue.drain_due(now + Duration::from_secs(1));
        assert_eq!(all.len(), 4);
        assert!(all.windows(2).all(|pair| pair[0].due <= pair[1].due));
    }
}
