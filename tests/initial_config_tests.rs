//! Builder-to-engine tests: options loaded from JSON, built, then resolved.

use gitcg::{
    CreateOptions, CreateParam, Deck, DefinitionId, Error, ErrorLevel, GameConfig, InitialConfig,
    Who,
};

fn standard_options() -> CreateOptions {
    CreateOptions::new()
        .with_deck(Who::Player0, Deck::new([1411u32, 1510, 2103], 311_503u32..311_533))
        .with_deck(Who::Player1, Deck::new([1609u32, 2203, 1608], 312_004u32..312_034))
        .with_version("v4.1.0")
}

// =============================================================================
// Resolution
// =============================================================================

#[test]
fn test_defaults_fill_unset_fields() {
    let config = CreateParam::create(standard_options().with_random_seed(3))
        .unwrap()
        .into_initial_config()
        .unwrap();

    assert_eq!(config.version.as_deref(), Some("v4.1.0"));
    assert_eq!(config.game, GameConfig::with_seed(3));
    assert_eq!(config.decks[Who::Player0].cards.len(), 30);
    assert!(!config.players[Who::Player1].always_omni);
}

#[test]
fn test_overrides_applied() {
    let mut param = CreateParam::create(
        standard_options()
            .with_max_rounds_count(3)
            .with_initial_dice_count(10)
            .with_always_omni(false, true),
    )
    .unwrap();
    param.set_raw_attr(17, "toleratePreview").unwrap();

    let config = param.into_initial_config().unwrap();
    assert_eq!(config.game.max_rounds_count, 3);
    assert_eq!(config.game.initial_dice_count, 10);
    assert_eq!(config.game.max_dice_count, GameConfig::DEFAULT_MAX_DICE_COUNT);
    assert_eq!(config.game.error_level, ErrorLevel::ToleratePreview);
    assert!(!config.players[Who::Player0].always_omni);
    assert!(config.players[Who::Player1].always_omni);
}

#[test]
fn test_missing_deck_reported_on_resolve() {
    // The builder accepts a half-specified match.
    let mut param = CreateParam::new().unwrap();
    param.set_characters(0, [1u32, 2, 3]).unwrap();
    param.set_cards(0, [101u32]).unwrap();
    param.set_characters(1, [4u32, 5, 6]).unwrap();

    let err = param.into_initial_config().unwrap_err();
    assert!(matches!(err, Error::MissingField("cards[1]")));
}

#[test]
fn test_out_of_range_count_reported_on_resolve() {
    let mut param = CreateParam::create(standard_options()).unwrap();
    // Accepted at build time.
    param.set_max_hands_count(-1).unwrap();

    let err = param.into_initial_config().unwrap_err();
    assert!(matches!(err, Error::InvalidConfig { field: "max_hands_count", .. }));
}

#[test]
fn test_small_decks_accepted() {
    let config = CreateParam::create(
        CreateOptions::new()
            .with_deck(Who::Player0, Deck::new([1u32], [101u32]))
            .with_deck(Who::Player1, Deck::new([2u32], Vec::<u32>::new())),
    )
    .unwrap()
    .into_initial_config()
    .unwrap();

    assert_eq!(config.decks[Who::Player0].characters.len(), 1);
    assert!(config.decks[Who::Player1].cards.is_empty());
}

// =============================================================================
// Initial piles
// =============================================================================

#[test]
fn test_no_shuffle_keeps_deck_order() {
    let config = CreateParam::create(standard_options().with_no_shuffle(true, false))
        .unwrap()
        .into_initial_config()
        .unwrap();

    let expected: Vec<DefinitionId> = (311_503u32..311_533).map(DefinitionId).collect();
    assert_eq!(config.initial_pile(Who::Player0), expected);
}

#[test]
fn test_shuffle_deterministic_per_seed() {
    let build = |seed| {
        CreateParam::create(standard_options().with_random_seed(seed))
            .unwrap()
            .into_initial_config()
            .unwrap()
    };
    let a = build(42);
    let b = build(42);

    assert_eq!(a.initial_pile(Who::Player1), b.initial_pile(Who::Player1));

    let mut sorted = a.initial_pile(Who::Player1);
    sorted.sort();
    assert_eq!(sorted, a.decks[Who::Player1].cards.to_vec());
}

// =============================================================================
// Serialized forms
// =============================================================================

#[test]
fn test_options_from_json() {
    let json = r#"{
        "deck0": { "characters": [1411, 1510, 2103], "cards": [311503, 311503] },
        "deck1": { "characters": [1609, 2203, 1608], "cards": [312004] },
        "version": "v4.1.0",
        "random_seed": 9,
        "no_shuffle": [true, true]
    }"#;
    let options: CreateOptions = serde_json::from_str(json).unwrap();

    let config = CreateParam::create(options)
        .unwrap()
        .into_initial_config()
        .unwrap();
    assert_eq!(config.game.random_seed, 9);
    assert_eq!(
        config.initial_pile(Who::Player0),
        vec![DefinitionId(311_503), DefinitionId(311_503)]
    );
}

#[test]
fn test_unknown_option_rejected() {
    let json = r#"{ "max_pile_count": 120 }"#;
    assert!(serde_json::from_str::<CreateOptions>(json).is_err());
}

#[test]
fn test_initial_config_bytes() {
    let config = CreateParam::create(standard_options().with_random_seed(5))
        .unwrap()
        .into_initial_config()
        .unwrap();

    let bytes = config.to_bytes().unwrap();
    assert_eq!(InitialConfig::from_bytes(&bytes).unwrap(), config);
}
