// SPDX-License-Identifier: MPL-2.0
//! Audio cue playback using cpal.
//!
//! Cues are synthesized once at startup and queued into a shared sample
//! buffer that the output stream callback drains. Playback is fire-and-forget:
//! queuing a cue never blocks, and a missing output device simply means no
//! player is constructed.

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use rand::Rng;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use crate::error::{Error, Result};

/// Cues the experience can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CueId {
    /// The zipper-like rasp played when a tear drag starts.
    TearStrip,
}

/// Shared state between the audio callback and the main thread.
struct SharedState {
    /// Current volume (stored as u32 bits of f32 for atomic access).
    volume_bits: AtomicU32,
}

impl SharedState {
    fn new(initial_volume: f32) -> Self {
        Self {
            volume_bits: AtomicU32::new(initial_volume.to_bits()),
        }
    }

    fn volume(&self) -> f32 {
        f32::from_bits(self.volume_bits.load(Ordering::Relaxed))
    }
}

/// Audio cue player backed by the system's default output device.
pub struct CuePlayer {
    /// Samples waiting to be consumed by the stream callback.
    buffer: Arc<Mutex<Vec<f32>>>,
    /// Pre-synthesized tear cue, interleaved at the device layout.
    tear_cue: Arc<Vec<f32>>,
    shared_state: Arc<SharedState>,
    sample_rate: u32,
    channels: u16,
    /// The audio stream (kept alive to maintain playback).
    _stream: cpal::Stream,
}

impl CuePlayer {
    /// Creates a player on the default output device and synthesizes the
    /// cue bank for its sample layout.
    ///
    /// # Errors
    ///
    /// Returns an error if no output device is found, its configuration
    /// cannot be retrieved, or the stream fails to start. Callers treat any
    /// of these as "capability unavailable" and carry on without audio.
    pub fn new(initial_volume: f32) -> Result<Self> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| Error::Audio("No audio output device found".to_string()))?;

        let supported_config = device
            .default_output_config()
            .map_err(|e| Error::Audio(format!("Failed to get audio config: {e}")))?;

        let sample_rate = supported_config.sample_rate().0;
        let channels = supported_config.channels();

        let shared_state = Arc::new(SharedState::new(initial_volume));
        let buffer: Arc<Mutex<Vec<f32>>> = Arc::new(Mutex::new(Vec::new()));

        let stream = match supported_config.sample_format() {
            cpal::SampleFormat::F32 => Self::build_stream::<f32>(
                &device,
                &supported_config.into(),
                Arc::clone(&buffer),
                Arc::clone(&shared_state),
            )?,
            cpal::SampleFormat::I16 => Self::build_stream::<i16>(
                &device,
                &supported_config.into(),
                Arc::clone(&buffer),
                Arc::clone(&shared_state),
            )?,
            cpal::SampleFormat::U16 => Self::build_stream::<u16>(
                &device,
                &supported_config.into(),
                Arc::clone(&buffer),
                Arc::clone(&shared_state),
            )?,
            _ => return Err(Error::Audio("Unsupported audio sample format".to_string())),
        };

        stream
            .play()
            .map_err(|e| Error::Audio(format!("Failed to start audio stream: {e}")))?;

        Ok(Self {
            buffer,
            tear_cue: Arc::new(synthesize_tear_cue(sample_rate, channels)),
            shared_state,
            sample_rate,
            channels,
            _stream: stream,
        })
    }

    /// Builds an output stream for a specific sample format.
    fn build_stream<T: cpal::SizedSample + cpal::FromSample<f32>>(
        device: &cpal::Device,
        config: &cpal::StreamConfig,
        buffer: Arc<Mutex<Vec<f32>>>,
        shared_state: Arc<SharedState>,
    ) -> Result<cpal::Stream> {
        let stream = device
            .build_output_stream(
                config,
                move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                    let volume = shared_state.volume();

                    let Ok(mut buf) = buffer.lock() else {
                        // Mutex poisoned, output silence
                        for sample in data.iter_mut() {
                            *sample = T::from_sample(0.0f32);
                        }
                        return;
                    };

                    // Quadratic curve keeps the volume setting perceptually
                    // linear.
                    let perceptual_volume = volume * volume;

                    for (i, sample) in data.iter_mut().enumerate() {
                        if i < buf.len() {
                            let amplified =
                                (buf[i] * perceptual_volume).clamp(-1.0, 0.999_999_9);
                            *sample = T::from_sample(amplified);
                        } else {
                            *sample = T::from_sample(0.0f32);
                        }
                    }

                    let consumed = data.len().min(buf.len());
                    buf.drain(..consumed);
                },
                |err| {
                    eprintln!("Audio output error: {err}");
                },
                None,
            )
            .map_err(|e| Error::Audio(format!("Failed to build audio stream: {e}")))?;

        Ok(stream)
    }

    /// Queues a cue for playback. Silently does nothing if the sample
    /// buffer is unavailable.
    pub fn play(&self, cue: CueId) {
        let samples = match cue {
            CueId::TearStrip => &self.tear_cue,
        };
        if let Ok(mut buf) = self.buffer.lock() {
            buf.extend_from_slice(samples);
        }
    }

    /// Returns the current volume.
    #[must_use]
    pub fn volume(&self) -> f32 {
        self.shared_state.volume()
    }

    /// Returns the output sample rate.
    #[must_use]
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Returns the number of output channels.
    #[must_use]
    pub fn channels(&self) -> u16 {
        self.channels
    }
}

/// Synthesizes the zipper rasp: filtered noise gated by a fast tooth pulse
/// under a decaying envelope, roughly 0.45 seconds long.
fn synthesize_tear_cue(sample_rate: u32, channels: u16) -> Vec<f32> {
    const DURATION_SECS: f32 = 0.45;
    const TOOTH_HZ: f32 = 28.0;

    let frames = (sample_rate as f32 * DURATION_SECS) as usize;
    let mut rng = rand::thread_rng();
    let mut samples = Vec::with_capacity(frames * channels as usize);

    let mut last = 0.0f32;
    for frame in 0..frames {
        let t = frame as f32 / sample_rate as f32;
        // Attack over the first 10 ms, then exponential decay.
        let envelope = (t / 0.01).min(1.0) * (-6.0 * t).exp();
        // Sawtooth gate emphasising the teeth of the zip.
        let tooth = 0.35 + 0.65 * (1.0 - (t * TOOTH_HZ).fract());
        // One-pole lowpass tames the raw noise.
        let noise: f32 = rng.gen_range(-1.0..1.0);
        last += 0.45 * (noise - last);

        let value = last * envelope * tooth;
        for _ in 0..channels {
            samples.push(value);
        }
    }
    samples
}
