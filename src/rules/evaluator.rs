//! Legality evaluation.
//!
//! `LegalityEvaluator::evaluate` is a pure function over the composition,
//! the catalog, and the reserve-character selection. Calling it twice on
//! unchanged inputs yields the same `LegalityResult`; there is no hidden
//! state and nothing to invalidate.

use rustc_hash::FxHashMap;

use crate::catalog::{CardCatalog, CardId, CardType};
use crate::deck::{DeckComposition, MAX_CHARACTERS, MAX_MISSIONS};

use super::result::{Classification, LegalityNote, LegalityResult, TypeCounts, Violation};
use super::threat::ThreatOverrides;

/// Everything a format rule gets to look at.
///
/// The core aggregates (counts, threat) are computed once by the
/// evaluator and shared, so format rules never recompute them.
pub struct FormatContext<'a> {
    pub composition: &'a DeckComposition,
    pub catalog: &'a CardCatalog,
    pub reserve: Option<&'a CardId>,
    pub counts: &'a TypeCounts,
    pub total_threat: u32,
}

/// A pluggable set of format-specific completeness checks.
///
/// Hard constraints (caps, one-per-deck) live in the evaluator itself;
/// format rules report the softer findings that mark a deck `Limited`.
/// The external rules collaborator can supply additional formats.
pub trait FormatRule {
    /// Short name for diagnostics.
    fn name(&self) -> &str;

    /// Check the deck, returning format-severity findings.
    fn check(&self, ctx: &FormatContext<'_>) -> Vec<Violation>;
}

/// Computes `LegalityResult`s.
///
/// Owns the reserve-threat override table and the installed format
/// rules; both are fixed game data for the session.
///
/// ## Example
///
/// ```
/// use overdeck::catalog::{CardCatalog, CardDefinition, CardId, CardType};
/// use overdeck::deck::DeckComposition;
/// use overdeck::rules::{LegalityEvaluator, ThreatOverrides};
///
/// let mut catalog = CardCatalog::new();
/// catalog.insert(
///     CardDefinition::new(CardId::new("c-1"), "Carson of Venus", CardType::Character)
///         .with_threat_level(18),
/// );
///
/// let mut deck = DeckComposition::new();
/// deck.add_card(&catalog, CardType::Character, CardId::new("c-1"), None).unwrap();
///
/// let evaluator = LegalityEvaluator::new(ThreatOverrides::new());
/// let result = evaluator.evaluate(&deck, &catalog, None);
///
/// assert_eq!(result.total_threat, 18);
/// assert!(result.is_legal());
/// ```
#[derive(Default)]
pub struct LegalityEvaluator {
    overrides: ThreatOverrides,
    formats: Vec<Box<dyn FormatRule>>,
}

impl LegalityEvaluator {
    /// Create an evaluator with the given reserve-threat overrides and
    /// no format rules.
    #[must_use]
    pub fn new(overrides: ThreatOverrides) -> Self {
        Self {
            overrides,
            formats: Vec::new(),
        }
    }

    /// Install a format rule (builder pattern).
    #[must_use]
    pub fn with_format(mut self, rule: impl FormatRule + 'static) -> Self {
        self.formats.push(Box::new(rule));
        self
    }

    /// The reserve-threat override table.
    #[must_use]
    pub fn overrides(&self) -> &ThreatOverrides {
        &self.overrides
    }

    /// Evaluate a deck. Pure and idempotent.
    #[must_use]
    pub fn evaluate(
        &self,
        composition: &DeckComposition,
        catalog: &CardCatalog,
        reserve: Option<&CardId>,
    ) -> LegalityResult {
        let mut counts = TypeCounts::default();
        let mut notes = Vec::new();
        let mut total_threat: u32 = 0;
        let mut playable_cards: u32 = 0;

        // Aggregate one-per-deck quantities across entries; imported
        // decks can carry several entries for the same card.
        let mut per_card: FxHashMap<(CardType, &CardId), (bool, u32)> = FxHashMap::default();
        let mut reserve_override_used = false;

        for entry in composition.entries() {
            // The draw pile is built from entries alone, so the playable
            // tally must count unresolved cards too or the two draw-hand
            // gates disagree on stale imported decks.
            if entry.card_type.is_playable() {
                playable_cards += entry.quantity;
            }

            let Some(card) = catalog.get(entry.card_type, &entry.card_id) else {
                notes.push(LegalityNote::UnresolvedCard {
                    card_type: entry.card_type,
                    card_id: entry.card_id.clone(),
                });
                continue;
            };

            counts.add(entry.card_type, entry.quantity);

            let slot = per_card
                .entry((entry.card_type, &entry.card_id))
                .or_insert((card.one_per_deck, 0));
            slot.1 += entry.quantity;

            if matches!(entry.card_type, CardType::Character | CardType::Location) {
                let base = card.threat_level.unwrap_or(0);
                let is_reserve = entry.card_type == CardType::Character
                    && reserve == Some(&entry.card_id)
                    && !reserve_override_used;
                let adjusted = if is_reserve {
                    reserve_override_used = true;
                    self.overrides.get(&entry.card_id).unwrap_or(base)
                } else {
                    base
                };
                // The override replaces exactly one copy's contribution;
                // further copies or duplicate entries (never legal, but
                // representable) keep the base value.
                total_threat += adjusted + base * entry.quantity.saturating_sub(1);
            }
        }

        let mut violations = Vec::new();

        if counts.characters() > MAX_CHARACTERS {
            violations.push(Violation::CharacterLimitExceeded {
                count: counts.characters(),
                max: MAX_CHARACTERS,
            });
        }
        if counts.missions() > MAX_MISSIONS {
            violations.push(Violation::MissionLimitExceeded {
                count: counts.missions(),
                max: MAX_MISSIONS,
            });
        }

        // The store refuses these proactively; re-check defensively for
        // decks loaded from imported state that bypassed the guards.
        for ((card_type, card_id), (one_per_deck, quantity)) in &per_card {
            if *one_per_deck && *quantity > 1 {
                violations.push(Violation::OnePerDeckExceeded {
                    card_type: *card_type,
                    card_id: (*card_id).clone(),
                    quantity: *quantity,
                });
            }
        }

        let ctx = FormatContext {
            composition,
            catalog,
            reserve,
            counts: &counts,
            total_threat,
        };
        for format in &self.formats {
            violations.extend(format.check(&ctx));
        }

        let classification = Classification::from_violations(&violations);

        LegalityResult {
            counts,
            total_threat,
            playable_cards,
            violations,
            notes,
            classification,
        }
    }
}
