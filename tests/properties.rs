//! Property tests for the resolver and full games.

use std::collections::HashSet;

use oldmaid::deck::{build_deck, deal, shuffle};
use oldmaid::pairs::{find_and_remove_pairs, has_pairs};
use oldmaid::{Card, DECK_SIZE, Game, GameOptions, GamePhase, PlayerIndex, Suit};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn any_suit() -> impl Strategy<Value = Suit> {
    prop_oneof![
        Just(Suit::Spades),
        Just(Suit::Hearts),
        Just(Suit::Diamonds),
        Just(Suit::Clubs),
    ]
}

fn any_card() -> impl Strategy<Value = Card> {
    prop_oneof![
        10 => (any_suit(), 1u8..=13u8).prop_map(|(s, r)| Card::new(s, r)),
        1 => Just(Card::JOKER),
    ]
}

/// Distinct cards from one deck, in random order.
fn any_hand() -> impl Strategy<Value = Vec<Card>> {
    Just(build_deck())
        .prop_shuffle()
        .prop_flat_map(|deck| (0..=DECK_SIZE).prop_map(move |n| deck[..n].to_vec()))
}

fn assert_table_consistent(game: &Game) {
    let snapshot = game.snapshot();
    assert_eq!(snapshot.card_count(), DECK_SIZE);

    let mut ids = HashSet::new();
    for player in &snapshot.players {
        ids.extend(player.hand.cards().iter().map(Card::id));
    }
    for pair in &snapshot.discarded_pairs {
        assert_eq!(pair.cards[0].rank, pair.cards[1].rank);
        ids.extend(pair.cards.iter().map(Card::id));
    }
    assert_eq!(ids.len(), DECK_SIZE);
}

proptest! {
    #[test]
    fn resolver_conserves_and_clears_pairs(hand in any_hand()) {
        let (remaining, pairs) = find_and_remove_pairs(&hand);

        prop_assert_eq!(remaining.len() + 2 * pairs.len(), hand.len());
        prop_assert!(!has_pairs(&remaining));
        for [a, b] in &pairs {
            prop_assert_eq!(a.rank, b.rank);
            prop_assert!(!a.is_joker());
        }

        // Remaining cards keep their relative order.
        let mut cursor = hand.iter();
        for card in &remaining {
            prop_assert!(cursor.any(|c| c == card));
        }

        let (again, none) = find_and_remove_pairs(&remaining);
        prop_assert_eq!(again, remaining);
        prop_assert!(none.is_empty());
    }

    #[test]
    fn resolver_leaves_one_card_per_odd_rank(cards in prop::collection::vec(any_card(), 0..40)) {
        let (remaining, _) = find_and_remove_pairs(&cards);

        for rank in 1..=13u8 {
            let before = cards.iter().filter(|c| c.rank == rank).count();
            let after = remaining.iter().filter(|c| c.rank == rank).count();
            prop_assert_eq!(after, before % 2);
        }
        let jokers = cards.iter().filter(|c| c.is_joker()).count();
        prop_assert_eq!(remaining.iter().filter(|c| c.is_joker()).count(), jokers);
    }

    #[test]
    fn every_shuffle_deals_26_and_27(seed in any::<u64>()) {
        let mut deck = build_deck();
        shuffle(&mut deck, &mut ChaCha8Rng::seed_from_u64(seed));
        let (first, second) = deal(deck);
        prop_assert_eq!(first.len(), 26);
        prop_assert_eq!(second.len(), 27);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn full_games_conserve_cards_and_alternate_turns(seed in any::<u64>()) {
        let game = Game::new(GameOptions::default(), seed);
        prop_assert!(game.start());
        assert_table_consistent(&game);

        let first = game.toss_coin().unwrap();
        assert_table_consistent(&game);
        for player in PlayerIndex::BOTH {
            prop_assert!(!has_pairs(game.hand(player).cards()));
        }

        prop_assert!(game.begin_play());
        let mut expected = Some(first);
        let mut draws = 0;

        while game.phase() == GamePhase::Playing {
            prop_assert_eq!(game.current_turn(), expected);
            let outcome = match game.current_turn() {
                Some(PlayerIndex::Human) => {
                    let npc_cards = game.hand(PlayerIndex::Npc).len();
                    game.select_card(seed as usize % npc_cards)
                }
                _ => game.npc_draw(),
            };
            let outcome = outcome.unwrap();
            assert_table_consistent(&game);
            draws += 1;
            prop_assert!(draws < 10_000);

            match outcome.result {
                None => expected = Some(outcome.drawer.other()),
                Some(result) => {
                    let drawer_hand = game.hand(outcome.drawer);
                    if result.has_joker {
                        prop_assert_eq!(result.winner, outcome.drawer.other());
                        prop_assert!(drawer_hand.is_lone_joker());
                    } else {
                        prop_assert_eq!(result.winner, outcome.drawer);
                        prop_assert!(drawer_hand.is_empty());
                        prop_assert!(game.hand(outcome.drawer.other()).has_joker());
                    }
                }
            }
        }

        prop_assert_eq!(game.phase(), GamePhase::GameOver);
        prop_assert!(game.result().is_some());

        prop_assert!(game.reset());
        prop_assert!(game.start());
        prop_assert!(game.discarded_pairs().is_empty());
        assert_table_consistent(&game);
    }
}
