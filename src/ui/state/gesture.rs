// SPDX-License-Identifier: MPL-2.0
//! Drag gesture tracking.
//!
//! Converts a stream of pointer positions into cumulative offsets and
//! per-sample deltas relative to the drag origin. Both the tear strip and
//! the top card of the deck reuse this tracker.

use iced::{Point, Vector};

/// One sample of an in-progress drag.
///
/// `offset` is cumulative since the drag started; `delta` is the movement
/// since the previous sample. Samples are ephemeral value objects — the
/// owning state machine consumes them and decides what (if anything) to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    pub offset: Vector,
    pub delta: Vector,
}

/// Tracks a single pointer drag from start to release.
///
/// No state survives [`DragTracker::end`]; a fresh drag always starts at
/// offset zero.
#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    origin: Option<Point>,
    last: Option<Point>,
}

impl DragTracker {
    /// Whether a drag is currently in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.origin.is_some()
    }

    /// Begins a drag at the given pointer position.
    pub fn start(&mut self, position: Point) {
        self.origin = Some(position);
        self.last = Some(position);
    }

    /// Records a pointer movement, returning the resulting sample.
    ///
    /// Returns `None` when no drag is active.
    pub fn motion(&mut self, position: Point) -> Option<GestureSample> {
        let origin = self.origin?;
        let last = self.last?;
        self.last = Some(position);

        Some(GestureSample {
            offset: position - origin,
            delta: position - last,
        })
    }

    /// Current cumulative offset, zero when idle.
    #[must_use]
    pub fn offset(&self) -> Vector {
        match (self.origin, self.last) {
            (Some(origin), Some(last)) => last - origin,
            _ => Vector::new(0.0, 0.0),
        }
    }

    /// Ends the drag and returns the final cumulative offset.
    pub fn end(&mut self) -> Vector {
        let offset = self.offset();
        self.origin = None;
        self.last = None;
        offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tracker_is_idle() {
        let tracker = DragTracker::default();
        assert!(!tracker.is_active());
        assert_eq!(tracker.offset(), Vector::new(0.0, 0.0));
    }

    #[test]
    fn motion_without_start_yields_nothing() {
        let mut tracker = DragTracker::default();
        assert!(tracker.motion(Point::new(10.0, 10.0)).is_none());
    }

    #[test]
    fn offset_accumulates_across_samples() {
        let mut tracker = DragTracker::default();
        tracker.start(Point::new(100.0, 100.0));

        tracker.motion(Point::new(90.0, 100.0));
        let sample = tracker.motion(Point::new(70.0, 105.0)).unwrap();

        assert_eq!(sample.offset, Vector::new(-30.0, 5.0));
        assert_eq!(sample.delta, Vector::new(-20.0, 5.0));
    }

    #[test]
    fn end_returns_final_offset_and_resets() {
        let mut tracker = DragTracker::default();
        tracker.start(Point::new(0.0, 0.0));
        tracker.motion(Point::new(-210.0, 3.0));

        let final_offset = tracker.end();
        assert_eq!(final_offset, Vector::new(-210.0, 3.0));
        assert!(!tracker.is_active());
        assert_eq!(tracker.offset(), Vector::new(0.0, 0.0));
    }

    #[test]
    fn fresh_drag_starts_at_zero() {
        let mut tracker = DragTracker::default();
        tracker.start(Point::new(0.0, 0.0));
        tracker.motion(Point::new(-150.0, 0.0));
        tracker.end();

        tracker.start(Point::new(-150.0, 0.0));
        assert_eq!(tracker.offset(), Vector::new(0.0, 0.0));
        let sample = tracker.motion(Point::new(-151.0, 0.0)).unwrap();
        assert_eq!(sample.offset, Vector::new(-1.0, 0.0));
    }
}
