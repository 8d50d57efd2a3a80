// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the unboxing experience.
//!
//! Centralizes the palette and scale constants so components never hardcode
//! colors or sizes inline.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    /// Kraft cardboard of the package body.
    pub const CARDBOARD: Color = Color::from_rgb(0.796, 0.706, 0.596);
    /// Darker cardboard used for box-thickness shading.
    pub const CARDBOARD_SHADOW: Color = Color::from_rgb(0.549, 0.467, 0.376);
    /// Off-white card paper.
    pub const PAPER: Color = Color::from_rgb(0.980, 0.976, 0.965);
    /// Brand pink of the pull tab and unlock confetti.
    pub const PRIMARY_PINK: Color = Color::from_rgb(0.910, 0.0, 0.443);
    /// Red used by the FRAGILE sticker.
    pub const STICKER_RED: Color = Color::from_rgb(0.863, 0.149, 0.149);
}

// ============================================================================
// Spacing Scale (8px grid)
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    /// Card dimensions at rest.
    pub const CARD_WIDTH: f32 = 224.0;
    pub const CARD_HEIGHT: f32 = 384.0;
    /// Scale applied to cards in the revealed (cards-only) view.
    pub const REVEAL_ZOOM: f32 = 1.25;
    /// Diameter of the tear-strip pull tab.
    pub const PULL_TAB: f32 = 48.0;
    /// Package body dimensions.
    pub const BOX_WIDTH: f32 = 420.0;
    pub const BOX_HEIGHT: f32 = 600.0;
}

// ============================================================================
// Typography
// ============================================================================

pub mod typography {
    pub const TITLE: f32 = 28.0;
    pub const BODY: f32 = 16.0;
    pub const CAPTION: f32 = 12.0;
    pub const MONO_SMALL: f32 = 11.0;
}

const _: () = {
    assert!(sizing::CARD_WIDTH > 0.0);
    assert!(sizing::CARD_HEIGHT > sizing::CARD_WIDTH);
    assert!(sizing::REVEAL_ZOOM >= 1.0);
};
