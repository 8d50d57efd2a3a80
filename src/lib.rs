// SPDX-License-Identifier: MPL-2.0
//! `unboxed` is an interactive digital unboxing experience built with the
//! Iced GUI framework.
//!
//! A sealed package is torn open with a drag gesture, revealing a cyclic
//! stack of message cards, one of which is gated behind a PIN. The crate
//! separates the gesture-driven state machines (package seal, card deck,
//! locked-card gate) from the presentation layer and from the fire-and-forget
//! side effects (haptics, audio, particles).

pub mod app;
pub mod config;
pub mod effects;
pub mod error;
pub mod ui;
