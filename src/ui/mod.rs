// SPDX-License-Identifier: MPL-2.0
//! UI layer: interactive components, their views, and shared design tokens.

pub mod cards;
pub mod design_tokens;
pub mod gate;
pub mod package;
pub mod particles_overlay;
pub mod state;
