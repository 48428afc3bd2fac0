//! Property tests over random move sequences.
//!
//! Random (mostly illegal) intents are fired at a dealt board. After every
//! attempt the board must still hold one full deck, rejected attempts must
//! leave it untouched, free cells never overflow and foundations only grow
//! by the next card of their suit.

use proptest::prelude::*;

use fourcell::core::{GameState, MoveIntent, ZoneId, ZoneKind};
use fourcell::rules;

/// Zone ids including a few past the end of the standard board.
fn zone_id() -> impl Strategy<Value = ZoneId> {
    (0u16..18).prop_map(ZoneId::new)
}

fn intent() -> impl Strategy<Value = MoveIntent> {
    (zone_id(), zone_id()).prop_map(|(from, to)| MoveIntent::new(from, to))
}

fn check_invariants(state: &GameState) {
    assert!(state.is_conserved());
    assert_eq!(state.zones().total_cards(), 52);

    for cell in state.free_cells() {
        assert!(cell.len() <= 1);
    }

    for foundation in state.foundations() {
        let cards: Vec<_> = foundation.cards().copied().collect();
        for (i, card) in cards.iter().enumerate() {
            assert_eq!(card.rank.value() as usize, i + 1);
            assert_eq!(card.suit, cards[0].suit);
        }
    }
}

proptest! {
    #[test]
    fn prop_random_intents_keep_invariants(
        seed in any::<u64>(),
        intents in prop::collection::vec(intent(), 0..200),
    ) {
        let mut state = GameState::new(seed);
        check_invariants(&state);

        for intent in intents {
            let before = state.clone();
            match state.apply(intent) {
                Ok(_) => {
                    prop_assert_eq!(state.moves_made(), before.moves_made() + 1);
                    prop_assert_eq!(
                        state.zones().zone_size(intent.from) + 1,
                        before.zones().zone_size(intent.from)
                    );
                    prop_assert_eq!(
                        state.zones().zone_size(intent.to),
                        before.zones().zone_size(intent.to) + 1
                    );
                }
                Err(_) => {
                    prop_assert_eq!(&state, &before);
                }
            }
            check_invariants(&state);
        }
    }

    #[test]
    fn prop_legal_moves_always_succeed(
        seed in any::<u64>(),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 1..100),
    ) {
        let mut state = GameState::new(seed);

        for pick in picks {
            let moves = state.legal_moves();
            if moves.is_empty() {
                break;
            }
            let intent = moves[pick.index(moves.len())];
            prop_assert!(state.apply(intent).is_ok());
            check_invariants(&state);
        }
    }

    #[test]
    fn prop_predicates_are_deterministic(
        seed in any::<u64>(),
        from in 0u16..8,
        to in 0u16..16,
    ) {
        let state = GameState::new(seed);
        let source = state.zone(ZoneId::new(from)).unwrap();
        let dest = state.zone(ZoneId::new(to)).unwrap();
        let card = source.top().unwrap();

        let first = rules::accepts(card, dest);
        prop_assert_eq!(first, rules::accepts(card, dest));

        let by_kind = match dest.kind() {
            ZoneKind::Tableau => rules::accepts_onto_tableau(card, dest),
            ZoneKind::FreeCell => rules::accepts_onto_free_cell(card, dest),
            ZoneKind::Foundation => rules::accepts_onto_foundation(card, dest),
        };
        prop_assert_eq!(first, by_kind);
    }
}
