//! Structured refusals for deck mutations.
//!
//! Constraint violations are non-fatal: the operation is refused, state
//! is untouched, and the caller gets one of these. Nothing here unwinds
//! or rolls back.

use thiserror::Error;

use crate::catalog::{CardId, CardType};
use super::entry::EntryId;

/// Why a deck mutation was refused.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Card is flagged one-per-deck and already present.
    #[error("{card_type} card {card_id} is limited to one per deck")]
    OnePerDeck {
        card_type: CardType,
        card_id: CardId,
    },

    /// Adding a 5th distinct character.
    #[error("character limit reached (max {max} different characters)")]
    CharacterLimit { max: u32 },

    /// Adding an 8th mission card.
    #[error("mission limit reached (max {max})")]
    MissionLimit { max: u32 },

    /// Adding a 2nd location.
    #[error("location limit reached (max {max})")]
    LocationLimit { max: u32 },

    /// Singleton-type card (character/location/mission) already in the deck.
    #[error("{card_type} card {card_id} is already in the deck")]
    AlreadyInDeck {
        card_type: CardType,
        card_id: CardId,
    },

    /// Quantity adjustment on a singleton type; use add/remove instead.
    #[error("{card_type} cards have a fixed quantity of 1")]
    QuantityFixed { card_type: CardType },

    /// No entry with this id in the composition.
    #[error("no deck entry {entry_id}")]
    UnknownEntry { entry_id: EntryId },

    /// Reserve selection must reference a character entry in the deck.
    #[error("reserve character {card_id} is not a character in this deck")]
    ReserveNotInDeck { card_id: CardId },

    /// Deck description over the persistence limit.
    #[error("description is {len} characters (max {max})")]
    DescriptionTooLong { len: usize, max: usize },
}
