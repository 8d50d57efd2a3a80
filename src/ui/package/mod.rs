// SPDX-License-Identifier: MPL-2.0
//! Sealed package component: tear-strip gesture handling and the
//! `Closed → Open → Revealed` state machine.

pub mod component;
pub mod view;

pub use component::{Effect, Message, State};
