//! Deck-editing session.
//!
//! One `EditorSession` owns one deck being edited: the composition, its
//! metadata, and the evaluator. Every mutation re-evaluates legality
//! synchronously before returning, so the session's result is never
//! stale - the UI reads it directly after any operation.
//!
//! Persistence is the external collaborator's job: the session produces
//! the save payload and tracks dirtiness, nothing more. Save failure
//! never rolls back in-memory state.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{CardCatalog, CardDefinition, CardId, CardType};
use crate::deck::{DeckComposition, DeckEntry, DeckError, DeckMetadata, EntryId};
use crate::hand::{can_draw_hand, DeckRng, DrawPile};
use crate::missions;
use crate::rules::{LegalityEvaluator, LegalityResult};

/// Who is editing: a registered account or an anonymous guest.
///
/// Assigned once at session start; guest decks persist locally instead
/// of to the account store, which is the collaborator's concern.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum UserKind {
    Registered { user_id: String },
    Guest,
}

impl UserKind {
    /// Whether this session belongs to a guest.
    #[must_use]
    pub fn is_guest(&self) -> bool {
        matches!(self, UserKind::Guest)
    }
}

/// The deck payload exchanged with the persistence collaborator.
#[derive(Debug, Serialize)]
pub struct SavePayload<'a> {
    pub metadata: &'a DeckMetadata,
    pub cards: &'a [DeckEntry],
}

/// A deck as loaded from the persistence collaborator.
#[derive(Debug, Deserialize)]
pub struct LoadedDeck {
    pub metadata: DeckMetadata,
    pub cards: Vec<DeckEntry>,
}

/// One deck open in the editor.
///
/// ## Example
///
/// ```
/// use overdeck::catalog::{CardCatalog, CardDefinition, CardId, CardType};
/// use overdeck::rules::{LegalityEvaluator, ThreatOverrides};
/// use overdeck::session::{EditorSession, UserKind};
///
/// let mut catalog = CardCatalog::new();
/// catalog.insert(
///     CardDefinition::new(CardId::new("c-1"), "Carson of Venus", CardType::Character)
///         .with_threat_level(18),
/// );
///
/// let mut session = EditorSession::new(
///     catalog,
///     "Venus Rush",
///     LegalityEvaluator::new(ThreatOverrides::new()),
///     UserKind::Guest,
/// );
///
/// session.add_card(CardType::Character, CardId::new("c-1"), None).unwrap();
/// assert_eq!(session.result().total_threat, 18);
/// ```
pub struct EditorSession {
    catalog: CardCatalog,
    composition: DeckComposition,
    metadata: DeckMetadata,
    evaluator: LegalityEvaluator,
    user: UserKind,
    last_result: LegalityResult,
}

impl EditorSession {
    /// Start a session for a new, empty deck.
    #[must_use]
    pub fn new(
        catalog: CardCatalog,
        deck_name: impl Into<String>,
        evaluator: LegalityEvaluator,
        user: UserKind,
    ) -> Self {
        Self::open(
            catalog,
            DeckMetadata::new(deck_name),
            DeckComposition::new(),
            evaluator,
            user,
        )
    }

    /// Open a session on an existing deck (loaded or imported).
    ///
    /// A stale reserve selection (no matching character entry) is
    /// cleared rather than carried along.
    #[must_use]
    pub fn open(
        catalog: CardCatalog,
        mut metadata: DeckMetadata,
        composition: DeckComposition,
        evaluator: LegalityEvaluator,
        user: UserKind,
    ) -> Self {
        if let Some(reserve) = metadata.reserve_character().cloned() {
            if composition.find(CardType::Character, &reserve).is_none() {
                debug!(card_id = %reserve, "clearing stale reserve character");
                metadata.set_reserve_character(None);
            }
        }
        let last_result =
            evaluator.evaluate(&composition, &catalog, metadata.reserve_character());
        let mut session = Self {
            catalog,
            composition,
            metadata,
            evaluator,
            user,
            last_result,
        };
        session.metadata.apply_result(&session.last_result);
        session
    }

    /// Open a session on a deck payload from the persistence layer.
    #[must_use]
    pub fn from_loaded(
        catalog: CardCatalog,
        loaded: LoadedDeck,
        evaluator: LegalityEvaluator,
        user: UserKind,
    ) -> Self {
        Self::open(
            catalog,
            loaded.metadata,
            DeckComposition::from_entries(loaded.cards),
            evaluator,
            user,
        )
    }

    /// The card catalog for this session.
    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    /// The deck composition.
    #[must_use]
    pub fn composition(&self) -> &DeckComposition {
        &self.composition
    }

    /// The deck metadata.
    #[must_use]
    pub fn metadata(&self) -> &DeckMetadata {
        &self.metadata
    }

    /// Mutable deck metadata (name, description, server fields).
    pub fn metadata_mut(&mut self) -> &mut DeckMetadata {
        &mut self.metadata
    }

    /// Who is editing.
    #[must_use]
    pub fn user(&self) -> &UserKind {
        &self.user
    }

    /// The legality result for the current composition.
    ///
    /// Always current: every mutation re-evaluates before returning.
    #[must_use]
    pub fn result(&self) -> &LegalityResult {
        &self.last_result
    }

    /// Add a card to the deck.
    pub fn add_card(
        &mut self,
        card_type: CardType,
        card_id: CardId,
        selected_art: Option<usize>,
    ) -> Result<EntryId, DeckError> {
        let id = self
            .composition
            .add_card(&self.catalog, card_type, card_id, selected_art)?;
        self.refresh();
        Ok(id)
    }

    /// Remove an entry from the deck.
    ///
    /// Removing the entry the reserve selection points at clears the
    /// selection.
    pub fn remove_card(&mut self, entry_id: EntryId) -> Option<DeckEntry> {
        let removed = self.composition.remove_card(entry_id)?;
        if removed.card_type == CardType::Character
            && self.metadata.clear_reserve_if(&removed.card_id)
        {
            debug!(card_id = %removed.card_id, "reserve character removed from deck");
        }
        self.refresh();
        Some(removed)
    }

    /// Adjust an entry's quantity.
    pub fn adjust_quantity(&mut self, entry_id: EntryId, delta: i32) -> Result<u32, DeckError> {
        let quantity = self
            .composition
            .adjust_quantity(&self.catalog, entry_id, delta)?;
        self.refresh();
        Ok(quantity)
    }

    /// Reorder entries for display.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        let moved = self.composition.reorder(from, to);
        if moved {
            self.refresh();
        }
        moved
    }

    /// Set or clear the reserve character.
    ///
    /// The id must reference a character entry currently in the deck.
    pub fn set_reserve_character(&mut self, card_id: Option<CardId>) -> Result<(), DeckError> {
        if let Some(ref id) = card_id {
            if self.composition.find(CardType::Character, id).is_none() {
                return Err(DeckError::ReserveNotInDeck {
                    card_id: id.clone(),
                });
            }
        }
        self.metadata.set_reserve_character(card_id);
        self.refresh();
        Ok(())
    }

    /// The events from the catalog that the deck's missions make usable.
    #[must_use]
    pub fn usable_events(&self) -> Vec<&CardDefinition> {
        let sets = missions::deck_mission_sets(&self.composition, &self.catalog);
        missions::usable_events(self.catalog.cards_of_type(CardType::Event), &sets)
    }

    /// Whether the draw-hand feature is available.
    #[must_use]
    pub fn can_draw_hand(&self) -> bool {
        can_draw_hand(&self.composition)
    }

    /// Draw a preview hand from the deck's playable cards.
    #[must_use]
    pub fn draw_hand(&self, rng: &mut DeckRng) -> Vec<(CardType, CardId)> {
        DrawPile::from_composition(&self.composition).draw(rng)
    }

    /// Whether there are unsaved changes.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.composition.is_dirty()
    }

    /// The payload to hand to the persistence collaborator.
    #[must_use]
    pub fn save_payload(&self) -> SavePayload<'_> {
        SavePayload {
            metadata: &self.metadata,
            cards: self.composition.entries(),
        }
    }

    /// Record a successful save: server-assigned fields and a clean
    /// dirty flag. Save *failure* needs no call - state simply stays
    /// dirty and the user retries.
    pub fn mark_saved(
        &mut self,
        deck_id: impl Into<String>,
        last_modified: impl Into<String>,
    ) {
        let deck_id = deck_id.into();
        debug!(deck_id = %deck_id, "deck saved");
        let last_modified = last_modified.into();
        if self.metadata.created_at.is_none() {
            self.metadata.created_at = Some(last_modified.clone());
        }
        self.metadata.id = Some(deck_id);
        self.metadata.last_modified = Some(last_modified);
        self.composition.mark_saved();
    }

    /// Re-evaluate after a mutation and refresh the metadata caches.
    fn refresh(&mut self) {
        self.last_result = self.evaluator.evaluate(
            &self.composition,
            &self.catalog,
            self.metadata.reserve_character(),
        );
        self.metadata.apply_result(&self.last_result);
    }
}
