// SPDX-License-Identifier: MPL-2.0
//! PIN gate for the locked card.
//!
//! A two-state machine: `Locked → Unlocked` on a successful code match is
//! the only transition, and `Unlocked` is terminal. A failed or short
//! submission clears the input buffer and stays locked — never a separate
//! error state.

/// Buffered PIN entry and unlock flag for the gated card.
#[derive(Debug, Clone)]
pub struct GateState {
    secret: String,
    buffer: String,
    unlocked: bool,
}

impl GateState {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            buffer: String::new(),
            unlocked: false,
        }
    }

    /// Required code length.
    #[must_use]
    pub fn pin_length(&self) -> usize {
        self.secret.len()
    }

    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    #[must_use]
    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    /// Replaces the buffer with a sanitized copy of `raw`: digits only,
    /// truncated to the code length. Non-digit input never reaches the
    /// comparison step.
    pub fn set_buffer(&mut self, raw: &str) {
        self.buffer = raw
            .chars()
            .filter(char::is_ascii_digit)
            .take(self.pin_length())
            .collect();
    }

    /// Compares the buffer against the secret.
    ///
    /// Returns `true` only for the submission that performs the
    /// `Locked → Unlocked` transition. Once unlocked, further submissions
    /// (right or wrong) change nothing.
    pub fn submit(&mut self) -> bool {
        if self.unlocked {
            return false;
        }
        if self.buffer == self.secret {
            self.unlocked = true;
            true
        } else {
            self.buffer.clear();
            false
        }
    }
}
