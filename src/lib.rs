//! # overdeck
//!
//! Deck validation and legality core for an OverPower-style card game.
//!
//! ## Design Principles
//!
//! 1. **Pure Evaluation**: Legality is a function of composition +
//!    catalog + reserve selection. No hidden state, no I/O; the same
//!    inputs always produce the same `LegalityResult`.
//!
//! 2. **Refuse vs Report**: The composition refuses mutations that
//!    would break hard structural rules (caps, one-per-deck), while the
//!    evaluator reports everything it finds - so imported decks that
//!    already break the rules are diagnosed, never panicked on.
//!
//! 3. **Never Trust Cached Stats**: Classification, card count, and
//!    threat are recomputed after every mutation; persisted copies are
//!    display caches only.
//!
//! ## Modules
//!
//! - `catalog`: Card definitions and the typed card catalog
//! - `deck`: Deck composition (entries, quantities, order) and metadata
//! - `rules`: Legality evaluation, violations, threat, formats
//! - `missions`: Mission-set filter for event usability
//! - `hand`: Draw-hand preview (seeded RNG, 8 + event extra)
//! - `session`: Editor session tying it all together

pub mod catalog;
pub mod deck;
pub mod hand;
pub mod missions;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::catalog::{CardCatalog, CardDefinition, CardId, CardType};

pub use crate::deck::{
    DeckComposition, DeckEntry, DeckError, DeckMetadata, EntryId, MAX_CHARACTERS, MAX_LOCATIONS,
    MAX_MISSIONS,
};

pub use crate::rules::{
    Classification, FormatContext, FormatRule, LegalityEvaluator, LegalityNote, LegalityResult,
    Severity, ThreatOverrides, TournamentFormat, TypeCounts, Violation, DRAW_HAND_THRESHOLD,
};

pub use crate::missions::{deck_mission_sets, event_is_usable, usable_events, ANY_MISSION};

pub use crate::hand::{can_draw_hand, DeckRng, DrawPile, HAND_SIZE, MAX_HAND_SIZE};

pub use crate::session::{EditorSession, LoadedDeck, SavePayload, UserKind};
