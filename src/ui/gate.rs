// SPDX-License-Identifier: MPL-2.0
//! Locked-card gate sub-component encapsulating `GateState` and its handlers.

use crate::ui::state::GateState;

/// Gate sub-component state.
#[derive(Debug, Clone)]
pub struct State {
    /// The underlying gate state.
    pub inner: GateState,
}

/// Messages for the gate sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// PIN input text changed.
    InputChanged(String),
    /// PIN submitted (Enter pressed or unlock button).
    Submit,
}

/// Effects produced by gate transitions.
#[derive(Debug, Clone)]
pub enum Effect {
    /// No effect.
    None,
    /// The gate just unlocked — fire the celebratory burst once.
    Unlocked,
}

impl State {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            inner: GateState::new(secret),
        }
    }

    /// Handle a gate message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::InputChanged(raw) => {
                if !self.inner.is_unlocked() {
                    self.inner.set_buffer(&raw);
                }
                Effect::None
            }
            Message::Submit => {
                if self.inner.submit() {
                    Effect::Unlocked
                } else {
                    Effect::None
                }
            }
        }
    }

    #[must_use]
    pub fn is_unlocked(&self) -> bool {
        self.inner.is_unlocked()
    }

    #[must_use]
    pub fn buffer(&self) -> &str {
        self.inner.buffer()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_submit_emits_unlocked_once() {
        let mut state = State::new("2504");
        state.handle(Message::InputChanged("2504".to_string()));

        let effect = state.handle(Message::Submit);
        assert!(matches!(effect, Effect::Unlocked));
        assert!(state.is_unlocked());

        state.handle(Message::InputChanged("2504".to_string()));
        let effect = state.handle(Message::Submit);
        assert!(matches!(effect, Effect::None));
    }

    #[test]
    fn wrong_submit_clears_buffer() {
        let mut state = State::new("2504");
        state.handle(Message::InputChanged("9999".to_string()));

        let effect = state.handle(Message::Submit);
        assert!(matches!(effect, Effect::None));
        assert!(!state.is_unlocked());
        assert_eq!(state.buffer(), "");
    }

    #[test]
    fn input_is_sanitized_at_the_boundary() {
        let mut state = State::new("2504");
        state.handle(Message::InputChanged("25ab04xyz9".to_string()));
        assert_eq!(state.buffer(), "2504");
    }

    #[test]
    fn input_after_unlock_is_ignored() {
        let mut state = State::new("2504");
        state.handle(Message::InputChanged("2504".to_string()));
        state.handle(Message::Submit);

        state.handle(Message::InputChanged("1111".to_string()));
        assert_eq!(state.buffer(), "2504");
        assert!(state.is_unlocked());
    }
}
