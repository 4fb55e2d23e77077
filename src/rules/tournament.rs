//! Tournament-format completeness rules.
//!
//! The construction rules for a finished, tournament-playable deck.
//! An in-progress deck fails most of these - that makes it `Limited`,
//! not `Illegal`, so the editor can keep saving drafts.

use crate::catalog::CardType;
use crate::missions;

use super::evaluator::{FormatContext, FormatRule};
use super::result::Violation;

/// Characters a tournament deck fields.
pub const REQUIRED_CHARACTERS: u32 = 4;
/// Mission cards a tournament deck carries.
pub const REQUIRED_MISSIONS: u32 = 7;
/// Locations allowed.
pub const MAX_LOCATIONS: u32 = 1;
/// Threat ceiling across characters and locations.
pub const MAX_THREAT: u32 = 76;
/// Minimum deck size.
pub const MIN_DECK_SIZE: u32 = 51;
/// Minimum deck size when the deck contains events.
pub const MIN_DECK_SIZE_WITH_EVENTS: u32 = 56;
/// Special cards usable by any fielded character.
pub const ANY_CHARACTER: &str = "Any Character";

/// The standard tournament format.
#[derive(Clone, Copy, Debug, Default)]
pub struct TournamentFormat;

impl FormatRule for TournamentFormat {
    fn name(&self) -> &str {
        "tournament"
    }

    fn check(&self, ctx: &FormatContext<'_>) -> Vec<Violation> {
        let mut findings = Vec::new();

        if ctx.counts.characters() != REQUIRED_CHARACTERS {
            findings.push(Violation::CharacterCountNotExact {
                count: ctx.counts.characters(),
                required: REQUIRED_CHARACTERS,
            });
        }

        let mission_sets = missions::deck_mission_sets(ctx.composition, ctx.catalog);
        if ctx.counts.missions() != REQUIRED_MISSIONS {
            findings.push(Violation::MissionCountNotExact {
                count: ctx.counts.missions(),
                required: REQUIRED_MISSIONS,
            });
        } else if mission_sets.len() > 1 {
            let mut sets: Vec<String> = mission_sets.iter().cloned().collect();
            sets.sort();
            findings.push(Violation::MixedMissionSets { sets });
        }

        if ctx.counts.locations() > MAX_LOCATIONS {
            findings.push(Violation::LocationLimitExceeded {
                count: ctx.counts.locations(),
                max: MAX_LOCATIONS,
            });
        }

        if ctx.total_threat > MAX_THREAT {
            findings.push(Violation::ThreatOverLimit {
                threat: ctx.total_threat,
                max: MAX_THREAT,
            });
        }

        let has_events = ctx.counts.get(CardType::Event) > 0;
        let required_size = if has_events {
            MIN_DECK_SIZE_WITH_EVENTS
        } else {
            MIN_DECK_SIZE
        };
        let total = ctx.counts.total();
        if total < required_size {
            findings.push(Violation::DeckTooSmall {
                count: total,
                required: required_size,
            });
        }

        // Specials must name a fielded character (or Any Character).
        let fielded: Vec<&str> = ctx
            .composition
            .entries()
            .iter()
            .filter(|e| e.card_type == CardType::Character)
            .filter_map(|e| ctx.catalog.get(CardType::Character, &e.card_id))
            .map(|c| c.name.as_str())
            .collect();

        for entry in ctx.composition.entries() {
            if entry.card_type != CardType::Special {
                continue;
            }
            let Some(card) = ctx.catalog.get(CardType::Special, &entry.card_id) else {
                continue;
            };
            if let Some(requires) = card.character_name.as_deref() {
                if requires != ANY_CHARACTER && !fielded.contains(&requires) {
                    findings.push(Violation::UnusableSpecial {
                        card_id: entry.card_id.clone(),
                        name: card.name.clone(),
                        requires: requires.to_string(),
                    });
                }
            }
        }

        // Events must match a fielded mission set (Any-Mission is exempt).
        for entry in ctx.composition.entries() {
            if entry.card_type != CardType::Event {
                continue;
            }
            let Some(card) = ctx.catalog.get(CardType::Event, &entry.card_id) else {
                continue;
            };
            if let Some(set) = card.mission_set.as_deref() {
                if set != missions::ANY_MISSION
                    && !mission_sets.is_empty()
                    && !mission_sets.contains(set)
                {
                    findings.push(Violation::UnusableEvent {
                        card_id: entry.card_id.clone(),
                        name: card.name.clone(),
                        mission_set: set.to_string(),
                    });
                }
            }
        }

        findings
    }
}
