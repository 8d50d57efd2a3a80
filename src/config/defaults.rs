// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for the tunable values
//! consumed by the state machines at construction time. Nothing in the core
//! reads these directly; they are threaded through [`crate::app`] so that
//! alternate decks and thresholds are swappable without touching core logic.
//!
//! # Categories
//!
//! - **Tear strip**: open threshold and strip fade distance
//! - **Deck**: swipe-to-advance threshold
//! - **Reveal**: delay between opening and the cards-only view
//! - **Gate**: lock PIN and voucher data
//! - **Effects**: haptic patterns, particle bursts, audio volume

// ==========================================================================
// Tear Strip Defaults
// ==========================================================================

/// Leftward drag distance (in logical pixels) past which releasing the pull
/// tab commits the package open. Compared against a negative x offset.
pub const DEFAULT_TEAR_OPEN_THRESHOLD: f32 = 200.0;

/// Distance over which the tear strip fades to fully transparent while the
/// pull tab travels. Presentation only.
pub const TEAR_STRIP_FADE_DISTANCE: f32 = 250.0;

/// Minimum per-sample pointer delta (either direction) that produces a
/// haptic tick while tearing. Keeps sub-pixel jitter from pulsing the motor.
pub const HAPTIC_TICK_MIN_DELTA: f32 = 2.0;

// ==========================================================================
// Deck Defaults
// ==========================================================================

/// Horizontal drag magnitude past which releasing the top card advances the
/// deck. Below it the card snaps back with no state change.
pub const DEFAULT_SWIPE_ADVANCE_THRESHOLD: f32 = 100.0;

// ==========================================================================
// Reveal Defaults
// ==========================================================================

/// Delay between entering `Open` and switching to the cards-only view.
pub const DEFAULT_REVEAL_DELAY_MS: u64 = 800;

// ==========================================================================
// Gate Defaults
// ==========================================================================

/// PIN that unlocks the gated card.
pub const DEFAULT_LOCK_PIN: &str = "2504";

/// Voucher code revealed by the unlocked card.
pub const VOUCHER_CODE: &str = "6002-9401-0323-8056";

/// Voucher PIN revealed by the unlocked card.
pub const VOUCHER_PIN: &str = "167400";

/// Voucher amount revealed by the unlocked card.
pub const VOUCHER_AMOUNT: &str = "₹3000";

// ==========================================================================
// Effects Defaults
// ==========================================================================

/// Haptic tick fired while the tear strip is dragged (milliseconds on).
pub const HAPTIC_TICK_PATTERN: &[u64] = &[5];

/// Haptic burst fired when the package opens (on/off/on milliseconds).
pub const OPEN_HAPTIC_PATTERN: &[u64] = &[50, 50, 50];

/// Particle count for the burst fired when the package opens.
pub const OPEN_BURST_COUNT: usize = 150;

/// Spread (degrees) for the open burst.
pub const OPEN_BURST_SPREAD: f32 = 100.0;

/// Particle count for the burst fired when the gated card unlocks.
pub const UNLOCK_BURST_COUNT: usize = 100;

/// Spread (degrees) for the unlock burst.
pub const UNLOCK_BURST_SPREAD: f32 = 70.0;

/// Default playback volume for the tear audio cue.
pub const DEFAULT_AUDIO_VOLUME: f32 = 0.5;

/// Minimum audio volume.
pub const MIN_AUDIO_VOLUME: f32 = 0.0;

/// Maximum audio volume.
pub const MAX_AUDIO_VOLUME: f32 = 1.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_TEAR_OPEN_THRESHOLD > 0.0);
    assert!(TEAR_STRIP_FADE_DISTANCE >= DEFAULT_TEAR_OPEN_THRESHOLD);
    assert!(HAPTIC_TICK_MIN_DELTA > 0.0);

    assert!(DEFAULT_SWIPE_ADVANCE_THRESHOLD > 0.0);
    assert!(DEFAULT_REVEAL_DELAY_MS > 0);

    assert!(!DEFAULT_LOCK_PIN.is_empty());

    assert!(OPEN_BURST_COUNT > 0);
    assert!(UNLOCK_BURST_COUNT > 0);
    assert!(OPEN_BURST_SPREAD > 0.0);
    assert!(UNLOCK_BURST_SPREAD > 0.0);

    assert!(DEFAULT_AUDIO_VOLUME >= MIN_AUDIO_VOLUME);
    assert!(DEFAULT_AUDIO_VOLUME <= MAX_AUDIO_VOLUME);
};
