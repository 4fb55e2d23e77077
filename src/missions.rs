//! Mission-set filter.
//!
//! The missions in a deck determine which events are usable: collect the
//! mission sets of every mission entry, then an event is usable iff its
//! own set is among them.
//!
//! The empty-selection convention matters and is easy to get backwards:
//! a deck with no missions restricts nothing (every event is usable,
//! vacuous match), while once any mission is in the deck, an event with
//! no mission set of its own can never match and is unusable. The
//! `Any-Mission` wildcard is usable regardless.

use rustc_hash::FxHashSet;

use crate::catalog::{CardCatalog, CardDefinition, CardType};
use crate::deck::DeckComposition;

/// Mission-set wildcard: events with this set match any deck.
pub const ANY_MISSION: &str = "Any-Mission";

/// The set of mission sets represented by the deck's mission entries.
///
/// Missions missing from the catalog, or without a set tag, contribute
/// nothing.
#[must_use]
pub fn deck_mission_sets(composition: &DeckComposition, catalog: &CardCatalog) -> FxHashSet<String> {
    composition
        .entries()
        .iter()
        .filter(|e| e.card_type == CardType::Mission)
        .filter_map(|e| catalog.get(CardType::Mission, &e.card_id))
        .filter_map(|card| card.mission_set.clone())
        .collect()
}

/// Whether one event is usable given the deck's mission sets.
#[must_use]
pub fn event_is_usable(event: &CardDefinition, sets: &FxHashSet<String>) -> bool {
    if sets.is_empty() {
        return true;
    }
    match event.mission_set.as_deref() {
        Some(ANY_MISSION) => true,
        Some(set) => sets.contains(set),
        None => false,
    }
}

/// Filter an event pool down to the usable ones.
pub fn usable_events<'a, I>(events: I, sets: &FxHashSet<String>) -> Vec<&'a CardDefinition>
where
    I: IntoIterator<Item = &'a CardDefinition>,
{
    events
        .into_iter()
        .filter(|e| event_is_usable(e, sets))
        .collect()
}
