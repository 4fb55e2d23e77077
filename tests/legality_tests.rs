//! End-to-end legality tests: catalog + composition + evaluator,
//! exercised together the way the editor drives them.

use overdeck::catalog::{CardCatalog, CardDefinition, CardId, CardType};
use overdeck::deck::{DeckComposition, DeckError, MAX_CHARACTERS, MAX_MISSIONS};
use overdeck::missions;
use overdeck::rules::{
    Classification, LegalityEvaluator, ThreatOverrides, TournamentFormat, Violation,
};

fn catalog() -> CardCatalog {
    let mut catalog = CardCatalog::new();
    for (id, name, threat) in [
        ("carson", "Carson of Venus", 18),
        ("morgan", "Morgan Le Fay", 19),
        ("victory", "Victory Harben", 18),
        ("tarzan", "Tarzan", 20),
        ("carter", "John Carter", 20),
    ] {
        catalog.insert(
            CardDefinition::new(CardId::new(id), name, CardType::Character)
                .with_threat_level(threat),
        );
    }
    for (set, n) in [("Infiltration", 7), ("Conquest", 3)] {
        for i in 1..=n {
            catalog.insert(
                CardDefinition::new(
                    CardId::new(format!("{}-m{i}", set.to_lowercase())),
                    format!("{set} Mission {i}"),
                    CardType::Mission,
                )
                .with_mission_set(set),
            );
        }
    }
    for (id, set) in [
        ("e-inf", Some("Infiltration")),
        ("e-con", Some("Conquest")),
        ("e-any", Some(missions::ANY_MISSION)),
        ("e-none", None),
    ] {
        let card = CardDefinition::new(CardId::new(id), format!("Event {id}"), CardType::Event);
        catalog.insert(match set {
            Some(set) => card.with_mission_set(set),
            None => card,
        });
    }
    catalog.insert(CardDefinition::new(
        CardId::new("p-1"),
        "Energy 5",
        CardType::Power,
    ));
    catalog.insert(
        CardDefinition::new(CardId::new("s-opd"), "Gift of Wonder", CardType::Special)
            .with_one_per_deck(),
    );
    catalog
}

/// The published reserve-threat adjustments.
fn overrides() -> ThreatOverrides {
    [
        (CardId::new("carson"), 19),
        (CardId::new("morgan"), 20),
        (CardId::new("victory"), 20),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_character_cap_refused_at_add_time() {
    let catalog = catalog();
    let mut deck = DeckComposition::new();
    for id in ["carson", "morgan", "victory", "tarzan"] {
        deck.add_card(&catalog, CardType::Character, CardId::new(id), None)
            .unwrap();
    }

    let err = deck
        .add_card(&catalog, CardType::Character, CardId::new("carter"), None)
        .unwrap_err();
    assert_eq!(
        err,
        DeckError::CharacterLimit {
            max: MAX_CHARACTERS
        }
    );
    assert_eq!(deck.total_count(Some(CardType::Character)), 4);

    // The refused add never reaches the evaluator; the deck stays clean
    let result = LegalityEvaluator::new(overrides()).evaluate(&deck, &catalog, None);
    assert!(result.is_legal());
}

#[test]
fn test_mission_cap_refused_at_add_time() {
    let catalog = catalog();
    let mut deck = DeckComposition::new();
    for i in 1..=7 {
        deck.add_card(
            &catalog,
            CardType::Mission,
            CardId::new(format!("infiltration-m{i}")),
            None,
        )
        .unwrap();
    }

    let err = deck
        .add_card(&catalog, CardType::Mission, CardId::new("conquest-m1"), None)
        .unwrap_err();
    assert_eq!(err, DeckError::MissionLimit { max: MAX_MISSIONS });
}

#[test]
fn test_one_per_deck_refused_on_duplicate() {
    let catalog = catalog();
    let mut deck = DeckComposition::new();
    let entry_id = deck
        .add_card(&catalog, CardType::Special, CardId::new("s-opd"), None)
        .unwrap();

    let err = deck
        .add_card(&catalog, CardType::Special, CardId::new("s-opd"), None)
        .unwrap_err();
    assert_eq!(
        err,
        DeckError::OnePerDeck {
            card_type: CardType::Special,
            card_id: CardId::new("s-opd"),
        }
    );

    let err = deck.adjust_quantity(&catalog, entry_id, 1).unwrap_err();
    assert_eq!(
        err,
        DeckError::OnePerDeck {
            card_type: CardType::Special,
            card_id: CardId::new("s-opd"),
        }
    );
}

#[test]
fn test_reserve_override_changes_published_threat() {
    let catalog = catalog();
    let mut deck = DeckComposition::new();
    for id in ["carson", "morgan", "victory", "tarzan"] {
        deck.add_card(&catalog, CardType::Character, CardId::new(id), None)
            .unwrap();
    }
    let evaluator = LegalityEvaluator::new(overrides());

    // Base: 18 + 19 + 18 + 20
    let result = evaluator.evaluate(&deck, &catalog, None);
    assert_eq!(result.total_threat, 75);

    // Carson reserve: 18 -> 19
    let reserve = CardId::new("carson");
    let result = evaluator.evaluate(&deck, &catalog, Some(&reserve));
    assert_eq!(result.total_threat, 76);

    // Victory reserve: 18 -> 20
    let reserve = CardId::new("victory");
    let result = evaluator.evaluate(&deck, &catalog, Some(&reserve));
    assert_eq!(result.total_threat, 77);

    // Tarzan has no override entry, so reserve status changes nothing
    let reserve = CardId::new("tarzan");
    let result = evaluator.evaluate(&deck, &catalog, Some(&reserve));
    assert_eq!(result.total_threat, 75);
}

#[test]
fn test_event_usability_tracks_deck_missions() {
    let catalog = catalog();
    let mut deck = DeckComposition::new();

    // No missions: all four events usable
    let sets = missions::deck_mission_sets(&deck, &catalog);
    let usable = missions::usable_events(catalog.cards_of_type(CardType::Event), &sets);
    assert_eq!(usable.len(), 4);

    deck.add_card(
        &catalog,
        CardType::Mission,
        CardId::new("infiltration-m1"),
        None,
    )
    .unwrap();
    deck.add_card(&catalog, CardType::Mission, CardId::new("conquest-m1"), None)
        .unwrap();

    // {Infiltration, Conquest}: tagged matches and the wildcard pass,
    // the untagged event does not
    let sets = missions::deck_mission_sets(&deck, &catalog);
    let mut ids: Vec<&str> = missions::usable_events(catalog.cards_of_type(CardType::Event), &sets)
        .iter()
        .map(|e| e.id.as_str())
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, ["e-any", "e-con", "e-inf"]);
}

#[test]
fn test_classification_progression_while_building() {
    let catalog = catalog();
    let evaluator = LegalityEvaluator::new(overrides()).with_format(TournamentFormat);
    let mut deck = DeckComposition::new();

    // Empty deck fails completeness checks: Limited
    let result = evaluator.evaluate(&deck, &catalog, None);
    assert_eq!(result.classification, Classification::Limited);

    for id in ["carson", "morgan", "victory", "tarzan"] {
        deck.add_card(&catalog, CardType::Character, CardId::new(id), None)
            .unwrap();
    }
    for i in 1..=7 {
        deck.add_card(
            &catalog,
            CardType::Mission,
            CardId::new(format!("infiltration-m{i}")),
            None,
        )
        .unwrap();
    }
    let id = deck
        .add_card(&catalog, CardType::Power, CardId::new("p-1"), None)
        .unwrap();
    for _ in 0..39 {
        deck.adjust_quantity(&catalog, id, 1).unwrap();
    }

    // 4 characters, 7 missions, 51 cards, threat 75: Legal
    let result = evaluator.evaluate(&deck, &catalog, None);
    assert_eq!(result.counts.total(), 51);
    assert_eq!(
        result.classification,
        Classification::Legal,
        "violations: {:?}",
        result.violations
    );

    // Dropping a power card drops it back to Limited, not Illegal
    let entry_id = deck.find(CardType::Power, &CardId::new("p-1")).unwrap().id;
    deck.adjust_quantity(&catalog, entry_id, -1).unwrap();
    let result = evaluator.evaluate(&deck, &catalog, None);
    assert_eq!(result.classification, Classification::Limited);
    assert!(result
        .violations
        .contains(&Violation::DeckTooSmall {
            count: 50,
            required: 51
        }));
}

#[test]
fn test_playable_threshold_ignores_singletons() {
    let catalog = catalog();
    let mut deck = DeckComposition::new();

    // 4 characters + 7 missions never count toward the draw threshold
    for id in ["carson", "morgan", "victory", "tarzan"] {
        deck.add_card(&catalog, CardType::Character, CardId::new(id), None)
            .unwrap();
    }
    for i in 1..=7 {
        deck.add_card(
            &catalog,
            CardType::Mission,
            CardId::new(format!("infiltration-m{i}")),
            None,
        )
        .unwrap();
    }
    let id = deck
        .add_card(&catalog, CardType::Power, CardId::new("p-1"), None)
        .unwrap();
    for _ in 0..6 {
        deck.adjust_quantity(&catalog, id, 1).unwrap();
    }

    let evaluator = LegalityEvaluator::new(ThreatOverrides::new());
    let result = evaluator.evaluate(&deck, &catalog, None);
    assert_eq!(result.playable_cards, 7);
    assert!(!result.can_draw_hand());

    deck.adjust_quantity(&catalog, id, 1).unwrap();
    let result = evaluator.evaluate(&deck, &catalog, None);
    assert!(result.can_draw_hand());
}
