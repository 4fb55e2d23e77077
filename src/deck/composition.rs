//! Deck composition store.
//!
//! The ordered list of deck entries for the deck currently open in the
//! editor. Mutations enforce the construction caps proactively (a refusal
//! leaves the composition untouched); aggregate queries feed the
//! evaluator and the UI.
//!
//! Insertion order is preserved and is meaningful for display grouping,
//! not for legality.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{CardCatalog, CardId, CardType};

use super::entry::{DeckEntry, EntryId};
use super::error::DeckError;

/// Maximum distinct characters in a deck.
pub const MAX_CHARACTERS: u32 = 4;
/// Maximum mission cards in a deck.
pub const MAX_MISSIONS: u32 = 7;
/// Maximum locations in a deck.
pub const MAX_LOCATIONS: u32 = 1;

/// Ordered sequence of deck entries, owned by one editing session.
///
/// Every mutating operation marks the composition dirty for save
/// purposes; persistence itself belongs to the external collaborator.
///
/// ## Example
///
/// ```
/// use overdeck::catalog::{CardCatalog, CardDefinition, CardId, CardType};
/// use overdeck::deck::DeckComposition;
///
/// let mut catalog = CardCatalog::new();
/// catalog.insert(CardDefinition::new(CardId::new("p-1"), "Energy 5", CardType::Power));
///
/// let mut deck = DeckComposition::new();
/// deck.add_card(&catalog, CardType::Power, CardId::new("p-1"), None).unwrap();
/// deck.add_card(&catalog, CardType::Power, CardId::new("p-1"), None).unwrap();
///
/// // Same card merges into one entry with quantity 2
/// assert_eq!(deck.entries().len(), 1);
/// assert_eq!(deck.total_count(None), 2);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DeckComposition {
    entries: Vec<DeckEntry>,
    next_entry: u64,
    #[serde(skip)]
    dirty: bool,
}

impl DeckComposition {
    /// Create a new empty composition.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a composition from persisted or imported entries.
    ///
    /// Entries are taken as-is, without re-running the add-time guards;
    /// the evaluator re-checks one-per-deck and the caps defensively for
    /// exactly this case.
    #[must_use]
    pub fn from_entries(entries: Vec<DeckEntry>) -> Self {
        let next_entry = entries.iter().map(|e| e.id.raw() + 1).max().unwrap_or(0);
        Self {
            entries,
            next_entry,
            dirty: false,
        }
    }

    /// Add a card, merging into an existing entry of the same
    /// `(type, card_id)` when present.
    ///
    /// Refusals (caps, one-per-deck, singleton duplicates) leave the
    /// composition untouched. A card missing from the catalog is allowed
    /// in - the evaluator surfaces it as an unresolved-card note instead.
    pub fn add_card(
        &mut self,
        catalog: &CardCatalog,
        card_type: CardType,
        card_id: CardId,
        selected_art: Option<usize>,
    ) -> Result<EntryId, DeckError> {
        let one_per_deck = catalog
            .get(card_type, &card_id)
            .is_some_and(|c| c.one_per_deck);

        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|e| e.references(card_type, &card_id))
        {
            if card_type.is_singleton() {
                return Err(DeckError::AlreadyInDeck { card_type, card_id });
            }
            if one_per_deck {
                return Err(DeckError::OnePerDeck { card_type, card_id });
            }
            entry.quantity += 1;
            if selected_art.is_some() {
                entry.selected_art = selected_art;
            }
            let id = entry.id;
            let quantity = entry.quantity;
            self.dirty = true;
            debug!(%id, %card_id, quantity, "incremented deck entry");
            return Ok(id);
        }

        match card_type {
            CardType::Character if self.distinct_count(CardType::Character) >= MAX_CHARACTERS => {
                return Err(DeckError::CharacterLimit { max: MAX_CHARACTERS });
            }
            CardType::Mission if self.total_count(Some(CardType::Mission)) >= MAX_MISSIONS => {
                return Err(DeckError::MissionLimit { max: MAX_MISSIONS });
            }
            CardType::Location if self.total_count(Some(CardType::Location)) >= MAX_LOCATIONS => {
                return Err(DeckError::LocationLimit { max: MAX_LOCATIONS });
            }
            _ => {}
        }

        let id = EntryId(self.next_entry);
        self.next_entry += 1;
        self.entries.push(DeckEntry {
            id,
            card_type,
            card_id: card_id.clone(),
            quantity: 1,
            selected_art,
        });
        self.dirty = true;
        debug!(%id, %card_id, %card_type, "added deck entry");
        Ok(id)
    }

    /// Remove an entry, returning it if it existed.
    ///
    /// The caller (session layer) is responsible for clearing a matching
    /// reserve-character selection.
    pub fn remove_card(&mut self, entry_id: EntryId) -> Option<DeckEntry> {
        let index = self.entries.iter().position(|e| e.id == entry_id)?;
        let entry = self.entries.remove(index);
        self.dirty = true;
        debug!(id = %entry_id, card_id = %entry.card_id, "removed deck entry");
        Some(entry)
    }

    /// Change an entry's quantity by `delta`, returning the new quantity.
    ///
    /// Floor is 0, which removes the entry. Singleton types refuse
    /// adjustment (their quantity is fixed at 1; use add/remove), and
    /// one-per-deck cards refuse any increment past 1.
    pub fn adjust_quantity(
        &mut self,
        catalog: &CardCatalog,
        entry_id: EntryId,
        delta: i32,
    ) -> Result<u32, DeckError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id == entry_id)
            .ok_or(DeckError::UnknownEntry { entry_id })?;

        if entry.card_type.is_singleton() {
            return Err(DeckError::QuantityFixed {
                card_type: entry.card_type,
            });
        }

        if delta > 0 {
            let one_per_deck = catalog
                .get(entry.card_type, &entry.card_id)
                .is_some_and(|c| c.one_per_deck);
            if one_per_deck && entry.quantity >= 1 {
                return Err(DeckError::OnePerDeck {
                    card_type: entry.card_type,
                    card_id: entry.card_id.clone(),
                });
            }
            entry.quantity += delta as u32;
        } else {
            entry.quantity = entry.quantity.saturating_sub(delta.unsigned_abs());
        }

        let quantity = entry.quantity;
        self.dirty = true;
        if quantity == 0 {
            self.remove_card(entry_id);
        } else {
            debug!(id = %entry_id, quantity, "adjusted deck entry quantity");
        }
        Ok(quantity)
    }

    /// Move the entry at `from` to position `to`.
    ///
    /// Plain list splice: the store does not check that the two
    /// positions share a card type (the presentation layer constrains
    /// drag targets to same-type sections). Out-of-range `from` is a
    /// no-op; `to` is clamped. Returns whether anything moved.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        if from >= self.entries.len() || from == to {
            return false;
        }
        let entry = self.entries.remove(from);
        let to = to.min(self.entries.len());
        self.entries.insert(to, entry);
        self.dirty = true;
        true
    }

    /// All entries, in insertion/display order.
    #[must_use]
    pub fn entries(&self) -> &[DeckEntry] {
        &self.entries
    }

    /// Look up an entry by id.
    #[must_use]
    pub fn get(&self, entry_id: EntryId) -> Option<&DeckEntry> {
        self.entries.iter().find(|e| e.id == entry_id)
    }

    /// Find the entry for a given card, if present.
    #[must_use]
    pub fn find(&self, card_type: CardType, card_id: &CardId) -> Option<&DeckEntry> {
        self.entries.iter().find(|e| e.references(card_type, card_id))
    }

    /// Sum of quantities, optionally filtered by type.
    #[must_use]
    pub fn total_count(&self, card_type: Option<CardType>) -> u32 {
        self.entries
            .iter()
            .filter(|e| card_type.map_or(true, |t| e.card_type == t))
            .map(|e| e.quantity)
            .sum()
    }

    /// Number of distinct cards of a type (one entry per distinct card).
    #[must_use]
    pub fn distinct_count(&self, card_type: CardType) -> u32 {
        self.entries
            .iter()
            .filter(|e| e.card_type == card_type)
            .count() as u32
    }

    /// Quantity-weighted count of playable cards (everything except
    /// characters, locations, and missions).
    #[must_use]
    pub fn playable_count(&self) -> u32 {
        self.entries
            .iter()
            .filter(|e| e.card_type.is_playable())
            .map(|e| e.quantity)
            .sum()
    }

    /// Whether there are unsaved mutations.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the dirty flag after a successful save.
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }
}
