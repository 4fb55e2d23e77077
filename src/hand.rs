//! Draw-hand support.
//!
//! The editor's "draw hand" preview deals a random opening hand from the
//! deck's playable cards. Eight cards are drawn; if any of them is an
//! event, one extra card is drawn (events are revealed at setup), for a
//! hand of at most nine.
//!
//! Draws are deterministic given a seed, so a preview can be reproduced.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::catalog::{CardId, CardType};
use crate::deck::DeckComposition;
use crate::rules::DRAW_HAND_THRESHOLD;

/// Cards in a drawn hand.
pub const HAND_SIZE: usize = 8;
/// Hand size cap after the event extra draw.
pub const MAX_HAND_SIZE: usize = 9;

/// Seeded RNG for hand draws.
///
/// ChaCha8: fast, deterministic, same seed reproduces the same hands.
#[derive(Clone, Debug)]
pub struct DeckRng {
    inner: ChaCha8Rng,
}

impl DeckRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}

/// Whether the deck has enough playable cards to draw a hand.
#[must_use]
pub fn can_draw_hand(composition: &DeckComposition) -> bool {
    composition.playable_count() >= DRAW_HAND_THRESHOLD
}

/// The quantity-expanded pile of playable cards a hand is drawn from.
///
/// Characters, locations, and missions never appear in a hand; every
/// copy of everything else is one pile position.
#[derive(Clone, Debug, Default)]
pub struct DrawPile {
    cards: Vec<(CardType, CardId)>,
}

impl DrawPile {
    /// Build the pile from a composition.
    #[must_use]
    pub fn from_composition(composition: &DeckComposition) -> Self {
        let mut cards = Vec::with_capacity(composition.playable_count() as usize);
        for entry in composition.entries() {
            if entry.card_type.is_playable() {
                for _ in 0..entry.quantity {
                    cards.push((entry.card_type, entry.card_id.clone()));
                }
            }
        }
        Self { cards }
    }

    /// Number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Draw a hand: 8 distinct pile positions, plus one extra card when
    /// the hand contains an event and the pile has cards left. Never
    /// more than 9; never more than the pile holds.
    #[must_use]
    pub fn draw(&self, rng: &mut DeckRng) -> Vec<(CardType, CardId)> {
        let mut order: Vec<usize> = (0..self.cards.len()).collect();
        rng.shuffle(&mut order);

        let mut hand: Vec<(CardType, CardId)> = order
            .iter()
            .take(HAND_SIZE)
            .map(|&i| self.cards[i].clone())
            .collect();

        let has_event = hand.iter().any(|(ty, _)| *ty == CardType::Event);
        if has_event && hand.len() < MAX_HAND_SIZE {
            if let Some(&extra) = order.get(HAND_SIZE) {
                hand.push(self.cards[extra].clone());
            }
        }
        hand
    }
}
