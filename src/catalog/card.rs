//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card as the
//! catalog ships it: its type, threat level, restriction flags, and
//! grouping tags. Per-deck data (quantity, selected art) lives in
//! `DeckEntry`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Ordered list of alternate image references. Most cards have none or one.
pub type AltImages = SmallVec<[String; 2]>;

/// Unique identifier for a card within its type.
///
/// The catalog collaborator assigns these (opaque strings, UUIDs in
/// practice). Uniqueness holds per card type, so catalog lookups are
/// keyed by `(CardType, CardId)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(String);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Closed set of card types in the game.
///
/// The wire format uses kebab-case tags; older payloads use snake_case,
/// which the serde aliases absorb. Matching on this enum is exhaustive -
/// adding a type is a compile-visible change everywhere it matters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardType {
    Character,
    Location,
    Mission,
    Event,
    Aspect,
    Teamwork,
    #[serde(alias = "ally-universe", alias = "ally_universe")]
    Ally,
    Training,
    #[serde(alias = "basic_universe")]
    BasicUniverse,
    #[serde(alias = "advanced_universe")]
    AdvancedUniverse,
    Power,
    Special,
}

impl CardType {
    /// Number of card types.
    pub const COUNT: usize = 12;

    /// All card types, in display order.
    pub const ALL: [CardType; Self::COUNT] = [
        CardType::Character,
        CardType::Location,
        CardType::Mission,
        CardType::Event,
        CardType::Aspect,
        CardType::Teamwork,
        CardType::Ally,
        CardType::Training,
        CardType::BasicUniverse,
        CardType::AdvancedUniverse,
        CardType::Power,
        CardType::Special,
    ];

    /// Dense index for per-type count tables.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Playable cards are everything that is drawn into a hand:
    /// not characters, locations, or missions.
    #[must_use]
    pub const fn is_playable(self) -> bool {
        !self.is_singleton()
    }

    /// Singleton types carry quantity 1 per distinct card and are
    /// managed by add/remove only: characters, locations, missions.
    #[must_use]
    pub const fn is_singleton(self) -> bool {
        matches!(
            self,
            CardType::Character | CardType::Location | CardType::Mission
        )
    }

    /// The wire tag for this type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CardType::Character => "character",
            CardType::Location => "location",
            CardType::Mission => "mission",
            CardType::Event => "event",
            CardType::Aspect => "aspect",
            CardType::Teamwork => "teamwork",
            CardType::Ally => "ally",
            CardType::Training => "training",
            CardType::BasicUniverse => "basic-universe",
            CardType::AdvancedUniverse => "advanced-universe",
            CardType::Power => "power",
            CardType::Special => "special",
        }
    }
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static card definition.
///
/// Immutable for the duration of an editing session. Optional fields are
/// populated per type: `threat_level` for characters and locations,
/// `mission_set` for missions and events, `character_name` for specials.
///
/// ## Example
///
/// ```
/// use overdeck::catalog::{CardDefinition, CardId, CardType};
///
/// let carson = CardDefinition::new(CardId::new("c-1"), "Carson of Venus", CardType::Character)
///     .with_threat_level(18);
///
/// assert_eq!(carson.threat_level, Some(18));
/// assert!(!carson.one_per_deck);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique within `card_type`.
    pub id: CardId,

    /// Card name (display and special-card matching).
    pub name: String,

    /// Card type.
    pub card_type: CardType,

    /// Threat contribution; characters and locations only.
    #[serde(default)]
    pub threat_level: Option<u32>,

    /// At most one copy per legal deck.
    #[serde(default)]
    pub one_per_deck: bool,

    /// Grouping tag on missions and events.
    #[serde(default)]
    pub mission_set: Option<String>,

    /// For special cards: the character that can field this card,
    /// or "Any Character".
    #[serde(default)]
    pub character_name: Option<String>,

    /// Alternate art references, possibly empty.
    #[serde(default)]
    pub alternate_images: AltImages,
}

impl CardDefinition {
    /// Create a new card definition.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, card_type: CardType) -> Self {
        Self {
            id,
            name: name.into(),
            card_type,
            threat_level: None,
            one_per_deck: false,
            mission_set: None,
            character_name: None,
            alternate_images: AltImages::new(),
        }
    }

    /// Set the threat level (builder pattern).
    #[must_use]
    pub fn with_threat_level(mut self, threat: u32) -> Self {
        self.threat_level = Some(threat);
        self
    }

    /// Mark the card one-per-deck.
    #[must_use]
    pub fn with_one_per_deck(mut self) -> Self {
        self.one_per_deck = true;
        self
    }

    /// Set the mission set tag.
    #[must_use]
    pub fn with_mission_set(mut self, set: impl Into<String>) -> Self {
        self.mission_set = Some(set.into());
        self
    }

    /// Set the required character name (special cards).
    #[must_use]
    pub fn with_character_name(mut self, name: impl Into<String>) -> Self {
        self.character_name = Some(name.into());
        self
    }

    /// Append an alternate image reference.
    #[must_use]
    pub fn with_alternate_image(mut self, image: impl Into<String>) -> Self {
        self.alternate_images.push(image.into());
        self
    }
}

/// Wire shape of one catalog record.
///
/// The catalog endpoint returns records per card type, so the type tag is
/// not part of the record - it is supplied by the section being loaded.
/// Field spellings vary across payload generations (`one_per_deck` vs
/// `is_one_per_deck`); aliases accept both.
#[derive(Clone, Debug, Deserialize)]
pub struct CatalogRecord {
    pub id: CardId,
    pub name: String,
    #[serde(default)]
    pub threat_level: Option<u32>,
    #[serde(default, alias = "is_one_per_deck")]
    pub one_per_deck: bool,
    #[serde(default)]
    pub mission_set: Option<String>,
    #[serde(default)]
    pub character_name: Option<String>,
    #[serde(default)]
    pub alternate_images: AltImages,
}

impl CatalogRecord {
    /// Tag this record with the card type of the section it came from.
    #[must_use]
    pub fn into_definition(self, card_type: CardType) -> CardDefinition {
        CardDefinition {
            id: self.id,
            name: self.name,
            card_type,
            threat_level: self.threat_level,
            one_per_deck: self.one_per_deck,
            mission_set: self.mission_set,
            character_name: self.character_name,
            alternate_images: self.alternate_images,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new("abc-123");
        assert_eq!(id.as_str(), "abc-123");
        assert_eq!(format!("{}", id), "abc-123");
    }

    #[test]
    fn test_card_type_classes() {
        assert!(CardType::Character.is_singleton());
        assert!(CardType::Location.is_singleton());
        assert!(CardType::Mission.is_singleton());
        assert!(!CardType::Power.is_singleton());

        assert!(CardType::Power.is_playable());
        assert!(CardType::Event.is_playable());
        assert!(!CardType::Character.is_playable());
    }

    #[test]
    fn test_card_type_indices_are_dense() {
        for (i, ty) in CardType::ALL.iter().enumerate() {
            assert_eq!(ty.index(), i);
        }
    }

    #[test]
    fn test_card_type_wire_tags() {
        let ty: CardType = serde_json::from_str("\"basic-universe\"").unwrap();
        assert_eq!(ty, CardType::BasicUniverse);

        // Legacy snake_case payloads
        let ty: CardType = serde_json::from_str("\"basic_universe\"").unwrap();
        assert_eq!(ty, CardType::BasicUniverse);
        let ty: CardType = serde_json::from_str("\"ally_universe\"").unwrap();
        assert_eq!(ty, CardType::Ally);

        assert_eq!(
            serde_json::to_string(&CardType::AdvancedUniverse).unwrap(),
            "\"advanced-universe\""
        );
    }

    #[test]
    fn test_definition_builder() {
        let card = CardDefinition::new(CardId::new("m-1"), "Sabotage", CardType::Mission)
            .with_mission_set("Infiltration");

        assert_eq!(card.name, "Sabotage");
        assert_eq!(card.mission_set.as_deref(), Some("Infiltration"));
        assert_eq!(card.threat_level, None);
    }

    #[test]
    fn test_record_alias_one_per_deck() {
        let record: CatalogRecord =
            serde_json::from_str(r#"{"id": "s-1", "name": "Gift", "is_one_per_deck": true}"#)
                .unwrap();
        assert!(record.one_per_deck);

        let card = record.into_definition(CardType::Special);
        assert_eq!(card.card_type, CardType::Special);
        assert!(card.one_per_deck);
    }

    #[test]
    fn test_definition_serialization() {
        let card = CardDefinition::new(CardId::new("c-9"), "Morgan Le Fay", CardType::Character)
            .with_threat_level(19)
            .with_alternate_image("morgan-alt.png");

        let json = serde_json::to_string(&card).unwrap();
        let back: CardDefinition = serde_json::from_str(&json).unwrap();

        assert_eq!(back.id, card.id);
        assert_eq!(back.threat_level, Some(19));
        assert_eq!(back.alternate_images.len(), 1);
    }
}
