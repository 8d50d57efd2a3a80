// SPDX-License-Identifier: MPL-2.0
//! Fire-and-forget side-effect dispatch.
//!
//! The [`EffectsBus`] fans discrete state transitions out to the platform
//! capabilities: haptic motor, audio cue player, and the particle field.
//! Every call is best-effort — a missing capability is skipped silently and
//! no state transition ever waits on an effect. Capabilities are injected so
//! tests can substitute fakes.

pub mod audio;
pub mod particles;

pub use audio::{CueId, CuePlayer};
pub use particles::{BurstConfig, Particle, ParticleField};

use crate::config;
use crate::ui::design_tokens::palette;

/// Haptic vibration capability.
///
/// `pattern` alternates on/off durations in milliseconds, matching the web
/// vibration API shape. Implementations must never block or fail loudly;
/// an unsupported platform simply ignores the pulse.
pub trait HapticMotor {
    fn pulse(&self, pattern: &[u64]);
}

/// The desktop adapter: no vibration hardware, every pulse is a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedMotor;

impl HapticMotor for UnsupportedMotor {
    fn pulse(&self, _pattern: &[u64]) {}
}

/// Dispatches side effects on behalf of the state machines.
///
/// The bus has no state machine of its own; calls are issued in the order
/// the transitions request them and complete independently.
pub struct EffectsBus {
    haptics: Box<dyn HapticMotor>,
    audio: Option<CuePlayer>,
    particles: ParticleField,
}

impl EffectsBus {
    pub fn new(haptics: Box<dyn HapticMotor>, audio: Option<CuePlayer>) -> Self {
        Self {
            haptics,
            audio,
            particles: ParticleField::default(),
        }
    }

    /// Bus wired to the desktop capabilities: no haptics, best-effort audio.
    #[must_use]
    pub fn desktop(volume: f32, muted: bool) -> Self {
        let audio = if muted {
            None
        } else {
            match CuePlayer::new(volume) {
                Ok(player) => Some(player),
                Err(err) => {
                    eprintln!("Audio unavailable, continuing without cues: {err}");
                    None
                }
            }
        };
        Self::new(Box::new(UnsupportedMotor), audio)
    }

    /// Fires a haptic pulse pattern, if the platform supports it.
    pub fn haptic_pulse(&self, pattern: &[u64]) {
        self.haptics.pulse(pattern);
    }

    /// Queues an audio cue, if a player is available.
    pub fn play_audio_cue(&self, cue: CueId) {
        if let Some(player) = &self.audio {
            player.play(cue);
        }
    }

    /// Spawns a particle burst into the shared field.
    pub fn burst_particles(&mut self, burst: &BurstConfig) {
        self.particles.burst(burst);
    }

    /// Advances the particle simulation by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        self.particles.step(dt);
    }

    #[must_use]
    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    #[must_use]
    pub fn has_audio(&self) -> bool {
        self.audio.is_some()
    }
}

impl std::fmt::Debug for EffectsBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EffectsBus")
            .field("has_audio", &self.audio.is_some())
            .field("live_particles", &self.particles.len())
            .finish()
    }
}

/// Burst fired when the package tears open: cardboard, white and black
/// confetti from the middle of the window.
#[must_use]
pub fn open_burst() -> BurstConfig {
    BurstConfig {
        count: config::OPEN_BURST_COUNT,
        spread: config::OPEN_BURST_SPREAD,
        origin: (0.5, 0.5),
        colors: vec![palette::CARDBOARD, palette::WHITE, palette::BLACK],
    }
}

/// Burst fired when the gated card unlocks: pink and white.
#[must_use]
pub fn unlock_burst() -> BurstConfig {
    BurstConfig {
        count: config::UNLOCK_BURST_COUNT,
        spread: config::UNLOCK_BURST_SPREAD,
        origin: (0.5, 0.5),
        colors: vec![palette::PRIMARY_PINK, palette::WHITE],
    }
}
