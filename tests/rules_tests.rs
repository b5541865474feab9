//! Tableau rule tests driven through the public API.

use spider_engine::cards::{Card, Suit};
use spider_engine::game::{Foundation, Game, GameMode, COLUMN_COUNT, DECK_SIZE, SEQUENCE_BONUS};
use spider_engine::{Action, GameResult, GameRng, RulesEngine};

fn run(suit: Suit, high: u8, low: u8) -> Vec<Card> {
    (low..=high).rev().map(|rank| Card::revealed(suit, rank)).collect()
}

fn empty_columns() -> [Vec<Card>; COLUMN_COUNT] {
    std::array::from_fn(|_| Vec::new())
}

fn every_card(game: &Game) -> Vec<Card> {
    game.columns()
        .iter()
        .flatten()
        .chain(game.stock())
        .chain(game.foundations().iter().flatten())
        .copied()
        .collect()
}

/// Play `steps` random legal actions, returning how many were played.
fn play_randomly(game: &mut Game, rng: &mut GameRng, steps: usize) -> usize {
    for played in 0..steps {
        let actions = game.legal_actions();
        if actions.is_empty() {
            return played;
        }
        let action = actions[rng.gen_range_usize(0..actions.len())];
        assert!(game.apply_action(&action), "legal action {action} was rejected");
    }
    steps
}

// =============================================================================
// Dealing
// =============================================================================

#[test]
fn test_deal_distribution_per_mode() {
    for mode in GameMode::ALL {
        let game = Game::with_seed(mode, 2024);
        let cards = every_card(&game);
        assert_eq!(cards.len(), DECK_SIZE);

        for suit in Suit::ALL {
            let of_suit: Vec<&Card> = cards.iter().filter(|c| c.suit() == suit).collect();
            if !mode.uses_suit(suit) {
                assert!(of_suit.is_empty(), "{mode} dealt a {suit:?}");
                continue;
            }
            for rank in 1..=13 {
                let copies = of_suit.iter().filter(|c| c.rank() == rank).count();
                assert_eq!(copies, mode.copies_per_suit(), "{mode}: {suit:?} rank {rank}");
            }
        }
    }
}

#[test]
fn test_single_suit_first_deal() {
    let mut game = Game::with_seed(GameMode::SingleSuit, 1);
    let heights: Vec<usize> = game.columns().iter().map(Vec::len).collect();
    assert_eq!(game.stock().len(), 50);

    assert!(game.deal_row());

    assert_eq!(game.stock().len(), 40);
    for (column, height) in game.columns().iter().zip(heights) {
        assert_eq!(column.len(), height + 1);
        assert!(column.last().is_some_and(|c| c.face_up));
    }
    assert_eq!(game.score(), 0);
    assert_eq!(game.deals(), 1);
}

#[test]
fn test_deal_scoring_and_exhaustion() {
    let mut game = Game::with_seed(GameMode::TwoSuits, 5);
    let mut expected_deals = 0;

    while game.can_deal_row() {
        assert!(game.deal_row());
        expected_deals += 1;
        if game.completed_sequences() == 0 {
            // The penalty never takes the score below zero.
            assert_eq!(game.score(), 0);
        }
    }
    assert_eq!(game.deals(), expected_deals);
    assert_eq!(expected_deals, 5);
    assert!(game.stock().is_empty());

    let before = game.clone();
    assert!(!game.deal_row());
    assert_eq!(game, before);
}

// =============================================================================
// Moving
// =============================================================================

#[test]
fn test_move_legality_matches_effect() {
    let mut game = Game::with_seed(GameMode::FourSuits, 88);
    let mut rng = GameRng::new(3);
    play_randomly(&mut game, &mut rng, 20);

    for from in 0..COLUMN_COUNT {
        for start in 0..=game.column(from).len() {
            for to in 0..=COLUMN_COUNT {
                let mut attempt = game.clone();
                let allowed = game.can_drop(from, start, to);
                assert_eq!(attempt.move_sequence(from, start, to), allowed);
                if !allowed {
                    assert_eq!(attempt, game);
                    continue;
                }
                assert_eq!(attempt.moves(), game.moves() + 1);

                let moving = &game.column(from)[start..];
                // The source keeps everything below the run; its new top is exposed.
                let left = attempt.column(from);
                assert_eq!(left.len(), start);
                if let Some((top, rest)) = left.split_last() {
                    assert_eq!(rest, &game.column(from)[..start - 1]);
                    assert_eq!(top.suit(), game.column(from)[start - 1].suit());
                    assert_eq!(top.rank(), game.column(from)[start - 1].rank());
                    assert!(top.face_up);
                }
                if attempt.completed_sequences() == game.completed_sequences() {
                    let target = attempt.column(to);
                    assert_eq!(target.len(), game.column(to).len() + moving.len());
                    assert_eq!(&target[..game.column(to).len()], game.column(to));
                    assert_eq!(&target[game.column(to).len()..], moving);
                }
            }
        }
    }
}

#[test]
fn test_moved_run_arrives_in_order() {
    let mut columns = empty_columns();
    columns[2] = vec![Card::new(Suit::Diamond, 12), Card::new(Suit::Club, 3)];
    columns[2].extend(run(Suit::Heart, 9, 6));
    columns[5] = vec![Card::revealed(Suit::Club, 13), Card::revealed(Suit::Spade, 10)];
    let mut game = Game::from_layout(GameMode::FourSuits, columns, Vec::new(), Vec::new());

    assert!(game.move_sequence(2, 2, 5));

    assert_eq!(game.column(2), &[Card::new(Suit::Diamond, 12), Card::revealed(Suit::Club, 3)]);
    let mut expected = vec![Card::revealed(Suit::Club, 13), Card::revealed(Suit::Spade, 10)];
    expected.extend(run(Suit::Heart, 9, 6));
    assert_eq!(game.column(5), &expected[..]);
}

#[test]
fn test_cross_suit_drop_then_blocked_pickup() {
    let mut columns = empty_columns();
    columns[0] = run(Suit::Heart, 8, 8);
    columns[1] = run(Suit::Spade, 7, 6);
    let mut game = Game::from_layout(GameMode::TwoSuits, columns, Vec::new(), Vec::new());

    assert!(game.move_sequence(1, 0, 0));

    // 8♥ 7♠ 6♠: only the spades move together.
    assert!(!game.can_start_drag(0, 0));
    assert!(game.can_start_drag(0, 1));
    assert_eq!(game.movable_sequence(0, 1).len(), 2);
}

#[test]
fn test_completion_on_move() {
    let mut columns = empty_columns();
    columns[0] = vec![Card::new(Suit::Spade, 9)];
    columns[0].extend(run(Suit::Spade, 13, 4));
    columns[1] = run(Suit::Spade, 3, 1);
    let mut game = Game::from_layout(GameMode::SingleSuit, columns, Vec::new(), Vec::new());

    assert!(game.move_sequence(1, 0, 0));

    assert_eq!(game.completed_sequences(), 1);
    assert_eq!(game.score(), SEQUENCE_BONUS);
    assert_eq!(game.column(0), &[Card::revealed(Suit::Spade, 9)]);
}

// =============================================================================
// Winning
// =============================================================================

#[test]
fn test_eighth_run_wins() {
    let full: Foundation = run(Suit::Club, 13, 1).into_iter().collect();
    let mut columns = empty_columns();
    columns[4] = run(Suit::Club, 13, 2);
    columns[7] = run(Suit::Club, 1, 1);
    let mut game = Game::from_layout(GameMode::FourSuits, columns, Vec::new(), vec![full; 7]);
    assert_eq!(game.is_terminal(), None);

    assert!(game.move_sequence(7, 0, 4));

    assert!(game.is_game_won());
    assert_eq!(game.is_terminal(), Some(GameResult::Won));
    assert!(game.legal_actions().is_empty());
}

#[test]
fn test_hint_follows_scan_order() {
    let mut game = Game::with_seed(GameMode::SingleSuit, 404);
    let mut rng = GameRng::new(9);
    play_randomly(&mut game, &mut rng, 15);

    let expected = (0..COLUMN_COUNT)
        .flat_map(|from| {
            let len = game.column(from).len();
            (0..len).flat_map(move |start| (0..COLUMN_COUNT).map(move |to| (from, start, to)))
        })
        .find(|&(from, start, to)| game.can_drop(from, start, to))
        .map(|(from, start, to)| Action::move_run(from, start, to))
        .or_else(|| game.can_deal_row().then_some(Action::Deal));

    assert_eq!(game.hint(), expected);
}

// =============================================================================
// Snapshots
// =============================================================================

#[test]
fn test_snapshot_survives_further_play() {
    let mut game = Game::with_seed(GameMode::TwoSuits, 61);
    let snapshot = game.copy();

    let mut rng = GameRng::new(1);
    let played = play_randomly(&mut game, &mut rng, 40);
    assert!(played > 0);

    assert_eq!(snapshot, Game::with_seed(GameMode::TwoSuits, 61));

    game.restore_from(snapshot.clone());
    assert_eq!(game, snapshot);
}

#[test]
fn test_random_play_keeps_position_consistent() {
    for (index, mode) in GameMode::ALL.into_iter().enumerate() {
        let mut game = Game::with_seed(mode, 7 + index as u64);
        let mut rng = GameRng::new(100 + index as u64);

        for _ in 0..10 {
            play_randomly(&mut game, &mut rng, 25);
            assert_eq!(game.card_count(), DECK_SIZE);
            assert!(game.is_consistent(), "{mode} position damaged");
        }
    }
}
