// SPDX-License-Identifier: MPL-2.0
//! Card deck component encapsulating state and update logic.
//!
//! The top card is the only interactive one, and only once the package has
//! been opened. A completed drag past the swipe threshold commits exactly
//! one rotation; anything less snaps the card back with no state change.

use crate::ui::gate;
use crate::ui::state::{CardDescriptor, DeckState, DragTracker};
use iced::{Point, Vector};

/// Messages consumed by the deck component.
#[derive(Debug, Clone)]
pub enum Message {
    /// The top card was grabbed.
    CardGrabbed,
    /// Raw pointer movement, routed from the global event subscription.
    PointerMoved(Point),
    /// The pointer was released.
    CardReleased,
    /// Message for the gate on the locked card.
    Gate(gate::Message),
}

/// Side effects the application should perform after handling a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The deck rotated by one card.
    Advanced,
    /// The gated card just unlocked — fire the celebratory burst once.
    Unlocked,
}

/// Card deck component state.
#[derive(Debug, Clone)]
pub struct State {
    deck: DeckState,
    drag: DragTracker,
    cursor_position: Option<Point>,
    /// Supplied by the package seal: drags only register once open.
    interactive: bool,
    swipe_threshold: f32,
    gate: gate::State,
}

impl State {
    #[must_use]
    pub fn new(deck: DeckState, swipe_threshold: f32, lock_pin: impl Into<String>) -> Self {
        Self {
            deck,
            drag: DragTracker::default(),
            cursor_position: None,
            interactive: false,
            swipe_threshold,
            gate: gate::State::new(lock_pin),
        }
    }

    /// Handle a deck message.
    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::CardGrabbed => {
                if !self.interactive || self.deck.is_empty() || self.drag.is_active() {
                    return Effect::None;
                }
                if let Some(position) = self.cursor_position {
                    self.drag.start(position);
                }
                Effect::None
            }
            Message::PointerMoved(position) => {
                self.cursor_position = Some(position);
                self.drag.motion(position);
                Effect::None
            }
            Message::CardReleased => {
                if !self.drag.is_active() {
                    return Effect::None;
                }
                let offset = self.drag.end();
                if offset.x.abs() > self.swipe_threshold {
                    self.deck.advance();
                    Effect::Advanced
                } else {
                    // Snap back, not a partial commit.
                    Effect::None
                }
            }
            Message::Gate(msg) => match self.gate.handle(msg) {
                gate::Effect::Unlocked => Effect::Unlocked,
                gate::Effect::None => Effect::None,
            },
        }
    }

    /// Flips gesture interactivity. Programmatic `advance` stays possible
    /// either way; this only gates user drags.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    #[must_use]
    pub fn deck(&self) -> &DeckState {
        &self.deck
    }

    #[must_use]
    pub fn top(&self) -> Option<&CardDescriptor> {
        self.deck.top()
    }

    /// Current drag offset of the top card, zero at rest.
    #[must_use]
    pub fn drag_offset(&self) -> Vector {
        self.drag.offset()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    #[must_use]
    pub fn gate(&self) -> &gate::State {
        &self.gate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::state::{CardDescriptor, CardKind};

    fn deck_of(n: u32) -> DeckState {
        DeckState::new((1..=n).map(|id| CardDescriptor {
            id,
            kind: CardKind::Message(id as u8),
            base_rotation: 0.0,
        }))
    }

    fn interactive_state(n: u32) -> State {
        let mut state = State::new(deck_of(n), 100.0, "2504");
        state.set_interactive(true);
        state
    }

    fn swipe(state: &mut State, dx: f32) -> Effect {
        state.update(Message::PointerMoved(Point::new(200.0, 200.0)));
        state.update(Message::CardGrabbed);
        state.update(Message::PointerMoved(Point::new(200.0 + dx, 200.0)));
        state.update(Message::CardReleased)
    }

    #[test]
    fn swipe_past_threshold_advances_once() {
        let mut state = interactive_state(4);
        assert_eq!(state.top().unwrap().id, 4);

        let effect = swipe(&mut state, 101.0);
        assert_eq!(effect, Effect::Advanced);
        assert_eq!(state.top().unwrap().id, 3);
    }

    #[test]
    fn swipe_below_threshold_snaps_back() {
        let mut state = interactive_state(4);
        let effect = swipe(&mut state, 99.0);

        assert_eq!(effect, Effect::None);
        assert_eq!(state.top().unwrap().id, 4);
        assert_eq!(state.drag_offset(), Vector::new(0.0, 0.0));
    }

    #[test]
    fn leftward_swipe_also_advances() {
        let mut state = interactive_state(4);
        let effect = swipe(&mut state, -150.0);
        assert_eq!(effect, Effect::Advanced);
        assert_eq!(state.top().unwrap().id, 3);
    }

    #[test]
    fn drags_are_ignored_while_not_interactive() {
        let mut state = State::new(deck_of(4), 100.0, "2504");
        let effect = swipe(&mut state, 150.0);

        assert_eq!(effect, Effect::None);
        assert_eq!(state.top().unwrap().id, 4);
    }

    #[test]
    fn swiping_a_single_card_keeps_it_on_top() {
        let mut state = interactive_state(1);
        let effect = swipe(&mut state, 150.0);

        // advance() on a one-card deck is a no-op, but the completed swipe
        // still reports the rotation attempt.
        assert_eq!(effect, Effect::Advanced);
        assert_eq!(state.top().unwrap().id, 1);
    }

    #[test]
    fn full_cycle_restores_original_top() {
        let mut state = interactive_state(4);
        for _ in 0..4 {
            swipe(&mut state, 120.0);
        }
        assert_eq!(state.top().unwrap().id, 4);
    }

    #[test]
    fn gate_unlock_bubbles_up() {
        let mut state = interactive_state(4);
        state.update(Message::Gate(gate::Message::InputChanged("2504".into())));
        let effect = state.update(Message::Gate(gate::Message::Submit));
        assert_eq!(effect, Effect::Unlocked);
        assert!(state.gate().is_unlocked());
    }
}
