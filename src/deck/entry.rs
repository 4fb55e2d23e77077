//! Deck entries - one line of a deck composition.

use serde::{Deserialize, Serialize};

use crate::catalog::{CardId, CardType};

/// Locally generated unique token for a deck entry.
///
/// Allocated by the composition that owns the entry; stable across
/// reorders and quantity changes, never reused within a composition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId(pub u64);

impl EntryId {
    /// Get the raw token value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entry({})", self.0)
    }
}

/// One line of a deck composition: a card reference plus quantity.
///
/// Singleton types (character, location, mission) always carry
/// `quantity == 1`; other types accumulate copies in a single entry.
/// `selected_art` indexes into the catalog card's `alternate_images`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckEntry {
    /// Unique within the owning composition.
    pub id: EntryId,

    /// Mirrors the catalog card's type.
    pub card_type: CardType,

    /// Foreign key into the catalog.
    pub card_id: CardId,

    /// Number of copies; always positive.
    pub quantity: u32,

    /// Selected alternate art, if any (characters and power cards).
    #[serde(default)]
    pub selected_art: Option<usize>,
}

impl DeckEntry {
    /// Check whether this entry references the given card.
    #[must_use]
    pub fn references(&self, card_type: CardType, card_id: &CardId) -> bool {
        self.card_type == card_type && self.card_id == *card_id
    }
}
