//! Deal and configuration tests.
//!
//! These tests verify that a new game partitions exactly one deck across the
//! tableau, for the standard board and for variant layouts.

use fourcell::cards::{build_full_deck, is_full_deck, shuffle, Card};
use fourcell::core::{ConfigError, GameConfig, GameRng, GameState, ZoneKind, ZoneLayout};
use fourcell::zones::Zone;

/// Every column holds 6 or 7 cards, 52 in total, no duplicates.
#[test]
fn test_new_game_columns() {
    for seed in 0..20 {
        let state = GameState::new(seed);

        let sizes: Vec<_> = state.tableau().map(Zone::len).collect();
        assert_eq!(sizes.len(), 8);
        assert!(sizes.iter().all(|&n| n == 6 || n == 7));
        assert_eq!(sizes.iter().sum::<usize>(), 52);
        assert_eq!(sizes.iter().filter(|&&n| n == 7).count(), 4);

        let cards: Vec<Card> = state.zones().all_cards().copied().collect();
        assert!(is_full_deck(&cards));
    }
}

#[test]
fn test_new_game_leaves_cells_and_foundations_empty() {
    let state = GameState::new_game(&GameConfig::new().with_seed(5));

    assert_eq!(state.free_cells().count(), 4);
    assert_eq!(state.foundations().count(), 4);
    assert!(state.free_cells().all(Zone::is_empty));
    assert!(state.foundations().all(Zone::is_empty));
}

#[test]
fn test_seeded_deals_replay() {
    let config = GameConfig::new().with_seed(2024);
    let a = GameState::new_game(&config);
    let b = GameState::new_game(&config);

    assert_eq!(a, b);
    assert_eq!(a.seed(), 2024);
}

#[test]
fn test_entropy_deals_report_their_seed() {
    let state = GameState::new_game(&GameConfig::new());
    let replay = GameState::new(state.seed());

    assert_eq!(state, replay);
}

#[test]
fn test_deal_matches_injected_shuffle() {
    let expected = shuffle(build_full_deck(), &mut GameRng::new(77));
    let state = GameState::with_rng(ZoneLayout::standard(), &mut GameRng::new(77));

    // First row of the deal is the first eight shuffled cards
    let first_row: Vec<Card> = state
        .tableau()
        .map(|z| *z.cards().next().unwrap())
        .collect();
    assert_eq!(first_row, expected[..8].to_vec());
}

#[test]
fn test_variant_layout() {
    let config = GameConfig::new()
        .with_seed(3)
        .with_tableau_columns(4)
        .and_then(|c| c.with_free_cells(1))
        .unwrap();
    let state = GameState::new_game(&config);

    assert_eq!(state.layout().len(), 9);
    assert_eq!(state.zones().of_kind(ZoneKind::FreeCell).count(), 1);
    let sizes: Vec<_> = state.tableau().map(Zone::len).collect();
    assert_eq!(sizes, vec![13, 13, 13, 13]);
    assert!(state.is_conserved());
}

/// A column count too large for the id space never reaches the deal.
#[test]
fn test_oversized_config_is_rejected() {
    let lookup = |key: &str| (key == "FOURCELL_TABLEAU_COLUMNS").then(|| "65535".to_string());
    assert_eq!(
        GameConfig::from_lookup(lookup),
        Err(ConfigError::TooManyZones { total: 65543 })
    );

    let lookup = |key: &str| (key == "FOURCELL_TABLEAU_COLUMNS").then(|| "300".to_string());
    let config = GameConfig::from_lookup(lookup).unwrap();
    let state = GameState::new_game(&config.with_seed(1));
    assert_eq!(state.layout().len(), 308);
    assert!(state.is_conserved());
}

#[test]
fn test_view_of_new_game() {
    let state = GameState::new(9);
    let view = state.view();

    assert_eq!(view.tableau.len(), 8);
    assert_eq!(view.depth(), 7);
    assert!(view.free_cells.iter().all(|s| s.is_empty()));
    assert!(view.foundations.iter().all(|s| s.is_empty()));

    let text = view.to_string();
    assert!(text.starts_with("_   _   _   _"));
    assert_eq!(text.lines().count(), 2 + 7);
}
