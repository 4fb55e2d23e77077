//! Card catalog: definitions and read-only lookup.
//!
//! ## Key Types
//!
//! - `CardId`: Opaque card identifier, unique within a card type
//! - `CardType`: Closed enum of the twelve card types
//! - `CardDefinition`: Static card data from the catalog
//! - `CatalogRecord`: Wire shape of one catalog endpoint record
//! - `CardCatalog`: `(CardType, CardId)` keyed lookup
//!
//! The catalog is supplied by the external data collaborator and is
//! immutable for the duration of a deck-editing session.

pub mod card;
pub mod store;

pub use card::{AltImages, CardDefinition, CardId, CardType, CatalogRecord};
pub use store::CardCatalog;
