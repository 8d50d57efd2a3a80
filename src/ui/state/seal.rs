// SPDX-License-Identifier: MPL-2.0
//! Package seal phases.
//!
//! The authoritative phase only ever moves `Closed → Open → Revealed` and
//! never back. `Tearing` is a derived presentation phase: the package
//! component reports it while a tear drag is live from `Closed`, but never
//! stores it — an abandoned drag snaps straight back to `Closed`.

/// Discrete phase of the sealed package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SealPhase {
    Closed,
    Tearing,
    Open,
    Revealed,
}

impl SealPhase {
    /// Whether the tear strip still responds to drags.
    #[must_use]
    pub fn accepts_tear(self) -> bool {
        matches!(self, Self::Closed | Self::Tearing)
    }

    /// Whether the package has been committed open (deck is interactive).
    #[must_use]
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open | Self::Revealed)
    }

    /// `Revealed` is terminal for the session.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Revealed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_and_tearing_accept_tear() {
        assert!(SealPhase::Closed.accepts_tear());
        assert!(SealPhase::Tearing.accepts_tear());
        assert!(!SealPhase::Open.accepts_tear());
        assert!(!SealPhase::Revealed.accepts_tear());
    }

    #[test]
    fn open_and_revealed_are_open() {
        assert!(!SealPhase::Closed.is_open());
        assert!(SealPhase::Open.is_open());
        assert!(SealPhase::Revealed.is_open());
    }

    #[test]
    fn only_revealed_is_terminal() {
        assert!(SealPhase::Revealed.is_terminal());
        assert!(!SealPhase::Open.is_terminal());
    }
}
