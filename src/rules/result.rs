//! Evaluation output: violations, notes, counts, classification.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{CardId, CardType};

/// Playable cards needed before the draw-hand feature unlocks.
///
/// A UI-gating threshold, deliberately not a legality violation.
pub const DRAW_HAND_THRESHOLD: u32 = 8;

/// How bad a violation is.
///
/// Hard violations make a deck illegal outright; format findings only
/// keep an otherwise-sound deck out of tournament play (`Limited`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Hard,
    Format,
}

/// A violated construction constraint.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum Violation {
    // Hard violations - structural, make the deck illegal.
    #[error("deck has {count} characters (max {max})")]
    CharacterLimitExceeded { count: u32, max: u32 },

    #[error("deck has {count} mission cards (max {max})")]
    MissionLimitExceeded { count: u32, max: u32 },

    #[error("{card_type} card {card_id} is limited to one per deck (found {quantity})")]
    OnePerDeckExceeded {
        card_type: CardType,
        card_id: CardId,
        quantity: u32,
    },

    // Format findings - the deck is playable in casual but not complete
    // for tournament play.
    #[error("deck must have exactly {required} characters (found {count})")]
    CharacterCountNotExact { count: u32, required: u32 },

    #[error("deck must have exactly {required} mission cards (found {count})")]
    MissionCountNotExact { count: u32, required: u32 },

    #[error("all missions must share one mission set (found: {})", .sets.join(", "))]
    MixedMissionSets { sets: Vec<String> },

    #[error("deck may have at most {max} location (found {count})")]
    LocationLimitExceeded { count: u32, max: u32 },

    #[error("deck threat is {threat} (max {max})")]
    ThreatOverLimit { threat: u32, max: u32 },

    #[error("deck has {count} cards (minimum {required})")]
    DeckTooSmall { count: u32, required: u32 },

    #[error("\"{name}\" requires character \"{requires}\" in your team")]
    UnusableSpecial {
        card_id: CardId,
        name: String,
        requires: String,
    },

    #[error("\"{name}\" requires mission set \"{mission_set}\" in your deck")]
    UnusableEvent {
        card_id: CardId,
        name: String,
        mission_set: String,
    },
}

impl Violation {
    /// The severity tier this violation belongs to.
    #[must_use]
    pub fn severity(&self) -> Severity {
        match self {
            Violation::CharacterLimitExceeded { .. }
            | Violation::MissionLimitExceeded { .. }
            | Violation::OnePerDeckExceeded { .. } => Severity::Hard,
            _ => Severity::Format,
        }
    }
}

/// Non-fatal diagnostics attached to an evaluation.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum LegalityNote {
    /// A deck entry references a card the catalog no longer has.
    /// Its contribution to counts and threat is zero.
    #[error("deck references unknown {card_type} card {card_id}")]
    UnresolvedCard {
        card_type: CardType,
        card_id: CardId,
    },
}

/// Three-tier classification of a deck's construction validity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    #[default]
    Legal,
    Limited,
    Illegal,
}

impl Classification {
    /// Derive the classification from a violation list.
    #[must_use]
    pub fn from_violations(violations: &[Violation]) -> Self {
        if violations.iter().any(|v| v.severity() == Severity::Hard) {
            Classification::Illegal
        } else if !violations.is_empty() {
            Classification::Limited
        } else {
            Classification::Legal
        }
    }
}

/// Quantity-weighted card counts per type.
///
/// Entries whose card is missing from the catalog contribute zero here;
/// they show up as `UnresolvedCard` notes instead.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeCounts([u32; CardType::COUNT]);

impl TypeCounts {
    /// Count for one type.
    #[must_use]
    pub fn get(&self, card_type: CardType) -> u32 {
        self.0[card_type.index()]
    }

    /// Add quantity to one type's count.
    pub fn add(&mut self, card_type: CardType, quantity: u32) {
        self.0[card_type.index()] += quantity;
    }

    /// Total across all types.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    /// Character count.
    #[must_use]
    pub fn characters(&self) -> u32 {
        self.get(CardType::Character)
    }

    /// Mission count.
    #[must_use]
    pub fn missions(&self) -> u32 {
        self.get(CardType::Mission)
    }

    /// Location count.
    #[must_use]
    pub fn locations(&self) -> u32 {
        self.get(CardType::Location)
    }
}

/// Result of one legality evaluation.
///
/// Derived data, recomputed on demand; never persisted as primary state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalityResult {
    /// Quantity-weighted counts per card type.
    pub counts: TypeCounts,

    /// Total threat across characters and locations, with the reserve
    /// override applied.
    pub total_threat: u32,

    /// Quantity-weighted playable-card count (everything except
    /// characters, locations, missions). Counts every entry, resolved
    /// or not - the draw pile is built from entries alone and the two
    /// gates must agree.
    pub playable_cards: u32,

    /// Violated constraints, hard and format tiers mixed.
    pub violations: Vec<Violation>,

    /// Non-fatal diagnostics (unresolved cards).
    pub notes: Vec<LegalityNote>,

    /// Overall classification.
    pub classification: Classification,
}

impl LegalityResult {
    /// Whether the deck is fully legal.
    #[must_use]
    pub fn is_legal(&self) -> bool {
        self.classification == Classification::Legal
    }

    /// Whether the deck is limited (hard-legal but format-incomplete).
    #[must_use]
    pub fn is_limited(&self) -> bool {
        self.classification == Classification::Limited
    }

    /// Whether the deck is illegal.
    #[must_use]
    pub fn is_illegal(&self) -> bool {
        self.classification == Classification::Illegal
    }

    /// Whether the draw-hand feature is available (≥ 8 playable cards).
    ///
    /// Kept distinct from the classification: a deck can be limited and
    /// still draw hands, or legal and too thin to draw.
    #[must_use]
    pub fn can_draw_hand(&self) -> bool {
        self.playable_cards >= DRAW_HAND_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_split() {
        let hard = Violation::CharacterLimitExceeded { count: 5, max: 4 };
        assert_eq!(hard.severity(), Severity::Hard);

        let format = Violation::DeckTooSmall {
            count: 12,
            required: 51,
        };
        assert_eq!(format.severity(), Severity::Format);
    }

    #[test]
    fn test_classification_from_violations() {
        assert_eq!(Classification::from_violations(&[]), Classification::Legal);

        let limited = [Violation::ThreatOverLimit { threat: 80, max: 76 }];
        assert_eq!(
            Classification::from_violations(&limited),
            Classification::Limited
        );

        // One hard violation trumps any number of format findings
        let illegal = [
            Violation::DeckTooSmall {
                count: 3,
                required: 51,
            },
            Violation::MissionLimitExceeded { count: 9, max: 7 },
        ];
        assert_eq!(
            Classification::from_violations(&illegal),
            Classification::Illegal
        );
    }

    #[test]
    fn test_type_counts() {
        let mut counts = TypeCounts::default();
        counts.add(CardType::Character, 4);
        counts.add(CardType::Power, 12);
        counts.add(CardType::Power, 3);

        assert_eq!(counts.characters(), 4);
        assert_eq!(counts.get(CardType::Power), 15);
        assert_eq!(counts.get(CardType::Event), 0);
        assert_eq!(counts.total(), 19);
    }

    #[test]
    fn test_violation_messages() {
        let v = Violation::MixedMissionSets {
            sets: vec!["Infiltration".into(), "Conquest".into()],
        };
        assert_eq!(
            v.to_string(),
            "all missions must share one mission set (found: Infiltration, Conquest)"
        );

        let v = Violation::UnusableEvent {
            card_id: CardId::new("e-1"),
            name: "Ambushed!".into(),
            mission_set: "Infiltration".into(),
        };
        assert_eq!(
            v.to_string(),
            "\"Ambushed!\" requires mission set \"Infiltration\" in your deck"
        );
    }
}
