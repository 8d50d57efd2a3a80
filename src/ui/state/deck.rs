// SPDX-License-Identifier: MPL-2.0
//! Cyclic card deck.
//!
//! The deck is an ordered sequence of immutable card descriptors: front of
//! the queue is the bottom of the stack, back is the interactive top.
//! Advancing rotates the top card to the bottom — a pure rotation that never
//! creates, drops, or duplicates a card.

use std::collections::VecDeque;

/// Closed set of card content variants.
///
/// Views dispatch on this exhaustively, so adding a variant is a compile
/// error until every consumer handles it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    Omg,
    Memory,
    Letter,
    Message(u8),
    Advice,
    LockedGift,
}

/// Immutable description of one card in the deck.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardDescriptor {
    /// Unique id, stable across reorders.
    pub id: u32,
    pub kind: CardKind,
    /// Decorative resting tilt in degrees. No semantic effect.
    pub base_rotation: f32,
}

/// Ordered cyclic deck of cards.
#[derive(Debug, Clone, Default)]
pub struct DeckState {
    cards: VecDeque<CardDescriptor>,
}

impl DeckState {
    pub fn new(cards: impl IntoIterator<Item = CardDescriptor>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// The deck the experience ships with: locked gift at the bottom,
    /// "OMG" card on top.
    #[must_use]
    pub fn authored() -> Self {
        Self::new([
            CardDescriptor {
                id: 4,
                kind: CardKind::LockedGift,
                base_rotation: -2.0,
            },
            CardDescriptor {
                id: 3,
                kind: CardKind::Advice,
                base_rotation: 3.0,
            },
            CardDescriptor {
                id: 2,
                kind: CardKind::Memory,
                base_rotation: -1.0,
            },
            CardDescriptor {
                id: 1,
                kind: CardKind::Omg,
                base_rotation: 2.0,
            },
        ])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The current interactive top card (back of the queue).
    #[must_use]
    pub fn top(&self) -> Option<&CardDescriptor> {
        self.cards.back()
    }

    /// Rotates the top card to the bottom.
    ///
    /// A no-op for decks of one or zero cards — rotating a single element
    /// yields the same order.
    pub fn advance(&mut self) {
        if self.cards.len() > 1 {
            self.cards.rotate_right(1);
        }
    }

    /// Cards from bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &CardDescriptor> {
        self.cards.iter()
    }
}
