// SPDX-License-Identifier: MPL-2.0
//! Package seal component encapsulating state and update logic.
//!
//! Owns the tear-strip drag interpretation and the one-shot reveal timer.
//! All transitions commit synchronously inside [`State::update`]; effects
//! are reported to the orchestrator, which dispatches them after the commit.

use crate::config;
use crate::ui::state::{DragTracker, SealPhase};
use iced::{task, Point, Task, Vector};
use std::fmt;
use std::time::Duration;

/// Messages consumed by the package component.
#[derive(Debug, Clone)]
pub enum Message {
    /// The pull tab was grabbed.
    PullGrabbed,
    /// Raw pointer movement, routed from the global event subscription.
    PointerMoved(Point),
    /// The pointer was released.
    PullReleased,
    /// The reveal delay elapsed after opening.
    RevealElapsed,
}

/// Side effects the application should perform after handling a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// A tear drag session started — play the tear audio cue.
    TearStarted,
    /// The pull tab moved sharply enough for a haptic tick.
    TearTick,
    /// The package committed open: haptic burst, confetti, deck becomes
    /// interactive.
    Opened,
    /// The timed transition into the cards-only view fired.
    Revealed,
}

/// Package seal component state.
pub struct State {
    /// Authoritative phase. Only ever `Closed`, `Open` or `Revealed`;
    /// `Tearing` is derived in [`State::phase`] while a drag is live.
    phase: SealPhase,
    tear: DragTracker,
    cursor_position: Option<Point>,
    tear_threshold: f32,
    reveal_delay: Duration,
    /// Abort-on-drop handle for the armed reveal timer. Dropping the
    /// component before the delay elapses cancels the transition.
    reveal_timer: Option<task::Handle>,
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("package::State")
            .field("phase", &self.phase())
            .field("timer_armed", &self.reveal_timer.is_some())
            .finish()
    }
}

impl State {
    /// Creates a closed package with the supplied thresholds.
    #[must_use]
    pub fn new(tear_threshold: f32, reveal_delay: Duration) -> Self {
        Self {
            phase: SealPhase::Closed,
            tear: DragTracker::default(),
            cursor_position: None,
            tear_threshold,
            reveal_delay,
            reveal_timer: None,
        }
    }

    /// Current phase, reporting `Tearing` while a tear drag is live.
    #[must_use]
    pub fn phase(&self) -> SealPhase {
        if self.phase == SealPhase::Closed && self.tear.is_active() {
            SealPhase::Tearing
        } else {
            self.phase
        }
    }

    /// Current tear-strip offset for visual interpolation.
    #[must_use]
    pub fn tear_offset(&self) -> Vector {
        self.tear.offset()
    }

    #[must_use]
    pub fn is_tearing(&self) -> bool {
        self.tear.is_active()
    }

    /// Pending reveal timer handle, exposed for teardown assertions.
    #[cfg(test)]
    pub(crate) fn reveal_timer(&self) -> Option<&task::Handle> {
        self.reveal_timer.as_ref()
    }

    /// Handle a package message.
    pub fn update(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::PullGrabbed => {
                if !self.phase().accepts_tear() || self.tear.is_active() {
                    return (Effect::None, Task::none());
                }
                let Some(position) = self.cursor_position else {
                    return (Effect::None, Task::none());
                };
                self.tear.start(position);
                // Cue fires on drag start, regardless of how the drag ends.
                (Effect::TearStarted, Task::none())
            }
            Message::PointerMoved(position) => {
                self.cursor_position = Some(position);
                if let Some(sample) = self.tear.motion(position) {
                    if sample.delta.x.abs() > config::HAPTIC_TICK_MIN_DELTA {
                        return (Effect::TearTick, Task::none());
                    }
                }
                (Effect::None, Task::none())
            }
            Message::PullReleased => {
                if !self.tear.is_active() {
                    return (Effect::None, Task::none());
                }
                let offset = self.tear.end();
                if offset.x < -self.tear_threshold {
                    self.phase = SealPhase::Open;
                    let delay = self.reveal_delay;
                    let (timer, handle) = Task::future(async move {
                        tokio::time::sleep(delay).await;
                        Message::RevealElapsed
                    })
                    .abortable();
                    self.reveal_timer = Some(handle.abort_on_drop());
                    (Effect::Opened, timer)
                } else {
                    // Below threshold: pure snap-back, no transition.
                    (Effect::None, Task::none())
                }
            }
            Message::RevealElapsed => {
                if self.phase == SealPhase::Open {
                    self.phase = SealPhase::Revealed;
                    self.reveal_timer = None;
                    (Effect::Revealed, Task::none())
                } else {
                    (Effect::None, Task::none())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> State {
        State::new(
            config::DEFAULT_TEAR_OPEN_THRESHOLD,
            Duration::from_millis(config::DEFAULT_REVEAL_DELAY_MS),
        )
    }

    fn drag_to(state: &mut State, x: f32) {
        state.update(Message::PointerMoved(Point::new(300.0, 300.0)));
        state.update(Message::PullGrabbed);
        state.update(Message::PointerMoved(Point::new(300.0 + x, 300.0)));
    }

    #[test]
    fn starts_closed() {
        let state = state();
        assert_eq!(state.phase(), SealPhase::Closed);
    }

    #[test]
    fn grab_reports_tearing_and_fires_the_cue() {
        let mut state = state();
        state.update(Message::PointerMoved(Point::new(300.0, 300.0)));
        let (effect, _) = state.update(Message::PullGrabbed);
        assert_eq!(effect, Effect::TearStarted);
        assert_eq!(state.phase(), SealPhase::Tearing);
    }

    #[test]
    fn grab_without_cursor_is_ignored() {
        let mut state = state();
        let (effect, _) = state.update(Message::PullGrabbed);
        assert_eq!(effect, Effect::None);
        assert_eq!(state.phase(), SealPhase::Closed);
    }

    #[test]
    fn release_below_threshold_snaps_back() {
        let mut state = state();
        drag_to(&mut state, -199.0);
        let (effect, _) = state.update(Message::PullReleased);

        assert_eq!(effect, Effect::None);
        assert_eq!(state.phase(), SealPhase::Closed);
        assert_eq!(state.tear_offset(), Vector::new(0.0, 0.0));
    }

    #[test]
    fn release_past_threshold_opens() {
        let mut state = state();
        drag_to(&mut state, -201.0);
        let (effect, _) = state.update(Message::PullReleased);

        assert_eq!(effect, Effect::Opened);
        assert_eq!(state.phase(), SealPhase::Open);
    }

    #[test]
    fn reveal_fires_only_from_open() {
        let mut state = state();
        let (effect, _) = state.update(Message::RevealElapsed);
        assert_eq!(effect, Effect::None);
        assert_eq!(state.phase(), SealPhase::Closed);

        drag_to(&mut state, -250.0);
        state.update(Message::PullReleased);
        let (effect, _) = state.update(Message::RevealElapsed);
        assert_eq!(effect, Effect::Revealed);
        assert_eq!(state.phase(), SealPhase::Revealed);
    }

    #[test]
    fn revealed_is_terminal() {
        let mut state = state();
        drag_to(&mut state, -250.0);
        state.update(Message::PullReleased);
        state.update(Message::RevealElapsed);

        // No further input sequence leaves Revealed.
        state.update(Message::PointerMoved(Point::new(300.0, 300.0)));
        let (effect, _) = state.update(Message::PullGrabbed);
        assert_eq!(effect, Effect::None);
        state.update(Message::PullReleased);
        state.update(Message::RevealElapsed);
        assert_eq!(state.phase(), SealPhase::Revealed);
    }

    #[test]
    fn tear_strip_is_inert_once_open() {
        let mut state = state();
        drag_to(&mut state, -250.0);
        state.update(Message::PullReleased);

        state.update(Message::PointerMoved(Point::new(300.0, 300.0)));
        let (effect, _) = state.update(Message::PullGrabbed);
        assert_eq!(effect, Effect::None);
        assert!(!state.is_tearing());
    }

    #[test]
    fn sharp_motion_emits_haptic_tick_while_tearing() {
        let mut state = state();
        state.update(Message::PointerMoved(Point::new(300.0, 300.0)));
        state.update(Message::PullGrabbed);

        let (effect, _) = state.update(Message::PointerMoved(Point::new(295.0, 300.0)));
        assert_eq!(effect, Effect::TearTick);

        // Sub-pixel jitter stays silent.
        let (effect, _) = state.update(Message::PointerMoved(Point::new(294.5, 300.0)));
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn opening_arms_the_reveal_timer_until_it_fires() {
        let mut state = state();
        assert!(state.reveal_timer().is_none());

        drag_to(&mut state, -250.0);
        state.update(Message::PullReleased);
        assert!(state.reveal_timer().is_some());

        // Further pointer input while Open leaves the pending timer alone.
        state.update(Message::PointerMoved(Point::new(300.0, 300.0)));
        state.update(Message::PullGrabbed);
        state.update(Message::PullReleased);
        assert!(state.reveal_timer().is_some());

        state.update(Message::RevealElapsed);
        assert!(state.reveal_timer().is_none());
    }

    #[test]
    fn dropping_a_pending_seal_aborts_the_reveal() {
        let mut state = state();
        drag_to(&mut state, -250.0);
        state.update(Message::PullReleased);

        let timer = state
            .reveal_timer()
            .cloned()
            .expect("timer must be armed after opening");
        assert!(!timer.is_aborted());

        // Discarding the seal before the delay elapses cancels the
        // transition; Revealed can never fire afterwards.
        drop(state);
        assert!(timer.is_aborted());
    }

    #[test]
    fn abandoned_drag_replays_cue_on_next_grab() {
        let mut state = state();
        drag_to(&mut state, -50.0);
        state.update(Message::PullReleased);

        let (effect, _) = state.update(Message::PullGrabbed);
        assert_eq!(effect, Effect::TearStarted);
    }
}
