//! Deck composition store and metadata.
//!
//! ## Key Types
//!
//! - `EntryId`: Locally generated token for one deck entry
//! - `DeckEntry`: Card reference plus quantity and selected art
//! - `DeckComposition`: Ordered entry list with guarded mutations
//! - `DeckMetadata`: Name, ownership, reserve selection, cached stats
//! - `DeckError`: Structured, non-fatal mutation refusals
//!
//! The store enforces the construction caps proactively (4 characters,
//! 7 missions, 1 location, one-per-deck); a refusal leaves state
//! untouched so editing can continue.

pub mod composition;
pub mod entry;
pub mod error;
pub mod metadata;

pub use composition::{DeckComposition, MAX_CHARACTERS, MAX_LOCATIONS, MAX_MISSIONS};
pub use entry::{DeckEntry, EntryId};
pub use error::DeckError;
pub use metadata::{DeckMetadata, MAX_DESCRIPTION};
