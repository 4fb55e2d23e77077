//! Card catalog for definition lookup.
//!
//! The `CardCatalog` stores every card definition the editor can see.
//! It is loaded once per editing session (per-type record sections from
//! the catalog endpoint) and treated as immutable afterwards.

use rustc_hash::FxHashMap;

use super::card::{CardDefinition, CardId, CardType, CatalogRecord};

/// Read-only lookup from `(CardType, CardId)` to card attributes.
///
/// Card IDs are unique within a type, not globally, so lookups carry
/// both. Internally one map per card type, indexed by the dense
/// `CardType` index.
///
/// ## Example
///
/// ```
/// use overdeck::catalog::{CardCatalog, CardDefinition, CardId, CardType};
///
/// let mut catalog = CardCatalog::new();
/// catalog.insert(
///     CardDefinition::new(CardId::new("c-1"), "Carson of Venus", CardType::Character)
///         .with_threat_level(18),
/// );
///
/// let found = catalog.get(CardType::Character, &CardId::new("c-1")).unwrap();
/// assert_eq!(found.name, "Carson of Venus");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    sections: [FxHashMap<CardId, CardDefinition>; CardType::COUNT],
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a card definition, replacing any previous definition with
    /// the same `(type, id)`.
    pub fn insert(&mut self, card: CardDefinition) {
        self.sections[card.card_type.index()].insert(card.id.clone(), card);
    }

    /// Load one per-type section of catalog records.
    ///
    /// The endpoint returns untyped records per section; the section's
    /// card type tags them here.
    pub fn load_records<I>(&mut self, card_type: CardType, records: I)
    where
        I: IntoIterator<Item = CatalogRecord>,
    {
        for record in records {
            self.insert(record.into_definition(card_type));
        }
    }

    /// Get a card definition.
    #[must_use]
    pub fn get(&self, card_type: CardType, id: &CardId) -> Option<&CardDefinition> {
        self.sections[card_type.index()].get(id)
    }

    /// Check whether a card is in the catalog.
    #[must_use]
    pub fn contains(&self, card_type: CardType, id: &CardId) -> bool {
        self.sections[card_type.index()].contains_key(id)
    }

    /// Get the number of cards in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.iter().map(FxHashMap::len).sum()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(FxHashMap::is_empty)
    }

    /// Iterate over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.sections.iter().flat_map(FxHashMap::values)
    }

    /// Iterate over the cards of one type.
    pub fn cards_of_type(&self, card_type: CardType) -> impl Iterator<Item = &CardDefinition> {
        self.sections[card_type.index()].values()
    }
}
