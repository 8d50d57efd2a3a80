// SPDX-License-Identifier: MPL-2.0
//! Reusable state management for the unboxing core.
//!
//! These types are pure — they know nothing about rendering or side effects.
//! The components under [`crate::ui`] wrap them with message handling and
//! report effects upward for the application to dispatch.

pub mod deck;
pub mod gate;
pub mod gesture;
pub mod seal;

pub use deck::{CardDescriptor, CardKind, DeckState};
pub use gate::GateState;
pub use gesture::{DragTracker, GestureSample};
pub use seal::SealPhase;
