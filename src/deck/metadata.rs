//! Deck metadata: name, ownership, reserve selection, cached stats.

use serde::{Deserialize, Serialize};

use crate::catalog::CardId;
use crate::rules::{Classification, LegalityResult};

use super::error::DeckError;

/// Maximum deck description length, in characters.
pub const MAX_DESCRIPTION: usize = 200;

/// Metadata for one deck.
///
/// `id` and the timestamps are server-assigned on save and absent for a
/// deck that has never been persisted. `classification`, `card_count`,
/// and `threat` are derived caches, refreshed from the latest
/// `LegalityResult` by the session after every mutation - the
/// authoritative values are always recomputed, never trusted from disk.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DeckMetadata {
    /// Server-assigned deck id.
    #[serde(default)]
    pub id: Option<String>,

    /// Deck name.
    pub name: String,

    /// Free-text description, at most [`MAX_DESCRIPTION`] characters.
    /// Over-long persisted values are clamped on load.
    #[serde(default, deserialize_with = "clamped_description")]
    description: String,

    /// Owning user, when the deck belongs to a registered account.
    #[serde(default)]
    pub user_id: Option<String>,

    /// Server-assigned creation timestamp.
    #[serde(default)]
    pub created_at: Option<String>,

    /// Server-assigned last-modified timestamp.
    #[serde(default)]
    pub last_modified: Option<String>,

    /// Designated reserve character, referencing a character entry in
    /// the composition.
    #[serde(default)]
    reserve_character: Option<CardId>,

    /// Cached classification from the last evaluation.
    #[serde(default)]
    pub classification: Classification,

    /// Cached total card count from the last evaluation.
    #[serde(default)]
    pub card_count: u32,

    /// Cached total threat from the last evaluation.
    #[serde(default)]
    pub threat: u32,
}

/// Persisted payloads can predate the limit or come from other clients;
/// clamp rather than refuse the whole deck.
fn clamped_description<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let description = String::deserialize(deserializer)?;
    if description.chars().count() > MAX_DESCRIPTION {
        Ok(description.chars().take(MAX_DESCRIPTION).collect())
    } else {
        Ok(description)
    }
}

impl DeckMetadata {
    /// Create metadata for a new, unsaved deck.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// The deck description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Set the description, refusing anything over [`MAX_DESCRIPTION`]
    /// characters.
    pub fn set_description(&mut self, description: impl Into<String>) -> Result<(), DeckError> {
        let description = description.into();
        let len = description.chars().count();
        if len > MAX_DESCRIPTION {
            return Err(DeckError::DescriptionTooLong {
                len,
                max: MAX_DESCRIPTION,
            });
        }
        self.description = description;
        Ok(())
    }

    /// The current reserve-character selection.
    #[must_use]
    pub fn reserve_character(&self) -> Option<&CardId> {
        self.reserve_character.as_ref()
    }

    /// Set or clear the reserve character.
    ///
    /// Referential validation (the id must be a character entry in the
    /// composition) is the session's job; this is plain storage.
    pub fn set_reserve_character(&mut self, card_id: Option<CardId>) {
        self.reserve_character = card_id;
    }

    /// Clear the reserve selection if it matches `card_id`.
    ///
    /// Called when a character entry is removed from the composition.
    /// Returns whether anything was cleared.
    pub fn clear_reserve_if(&mut self, card_id: &CardId) -> bool {
        if self.reserve_character.as_ref() == Some(card_id) {
            self.reserve_character = None;
            true
        } else {
            false
        }
    }

    /// Refresh the cached derived fields from an evaluation result.
    pub fn apply_result(&mut self, result: &LegalityResult) {
        self.classification = result.classification;
        self.card_count = result.counts.total();
        self.threat = result.total_threat;
    }
}
