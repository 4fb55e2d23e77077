//! Reserve-character threat overrides.
//!
//! A handful of characters have their threat level adjusted when they
//! are the deck's designated reserve. Which characters, and to what
//! value, is game-balance data shipped alongside the catalog - there is
//! no rule to derive it from, so this is a plain lookup table.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::catalog::CardId;

/// Character-id → adjusted threat value, applied only to the reserve
/// character.
///
/// ## Example
///
/// ```
/// use overdeck::catalog::CardId;
/// use overdeck::rules::ThreatOverrides;
///
/// let mut overrides = ThreatOverrides::new();
/// overrides.insert(CardId::new("carson"), 19);
///
/// assert_eq!(overrides.get(&CardId::new("carson")), Some(19));
/// assert_eq!(overrides.get(&CardId::new("tarzan")), None);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThreatOverrides(FxHashMap<CardId, u32>);

impl ThreatOverrides {
    /// Create an empty override table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an override.
    pub fn insert(&mut self, card_id: CardId, threat: u32) {
        self.0.insert(card_id, threat);
    }

    /// The adjusted threat for a character, if it has an override.
    #[must_use]
    pub fn get(&self, card_id: &CardId) -> Option<u32> {
        self.0.get(card_id).copied()
    }

    /// Number of overrides in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(CardId, u32)> for ThreatOverrides {
    fn from_iter<I: IntoIterator<Item = (CardId, u32)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let overrides: ThreatOverrides = [
            (CardId::new("carson"), 19),
            (CardId::new("morgan"), 20),
            (CardId::new("victory"), 20),
        ]
        .into_iter()
        .collect();

        assert_eq!(overrides.len(), 3);
        assert_eq!(overrides.get(&CardId::new("morgan")), Some(20));
        assert_eq!(overrides.get(&CardId::new("unknown")), None);
    }

    #[test]
    fn test_config_deserialization() {
        // The table ships as plain configuration next to the catalog.
        let overrides: ThreatOverrides = serde_json::from_str(
            r#"{"carson": 19, "morgan": 20, "victory": 20}"#,
        )
        .unwrap();

        assert_eq!(overrides.get(&CardId::new("carson")), Some(19));
        assert_eq!(overrides.get(&CardId::new("victory")), Some(20));
    }
}
