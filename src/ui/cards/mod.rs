// SPDX-License-Identifier: MPL-2.0
//! Card stack component: cyclic deck, swipe-to-advance, and the PIN-gated
//! card.

pub mod component;
pub mod view;

pub use component::{Effect, Message, State};
