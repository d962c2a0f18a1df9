//! Game integration tests.

use triors::{
    Card, CardOrigin, ConfigError, DECK_SIZE, ExchangeError, Game, GameOptions, Hand, HandError,
    NeighborTable, Phase, RevealError, StartError, Trio, TrioError, TurnError, Victory,
};

const NAMES: [&str; 6] = ["Ana", "Bo", "Cy", "Dee", "Eli", "Fay"];

const fn card(id: u8, denomination: u8) -> Card {
    Card::new(id, denomination)
}

/// Builds a stacked deck whose round-robin deal produces the given hand
/// rows, with the center denominations left over. Ids are positional.
fn deck_from_rows(rows: &[&[u8]], center: &[u8]) -> Vec<Card> {
    let mut deck = Vec::new();
    let mut id = 0;
    for round in 0..rows[0].len() {
        for row in rows {
            deck.push(Card::new(id, row[round]));
            id += 1;
        }
    }
    for &denomination in center {
        deck.push(Card::new(id, denomination));
        id += 1;
    }
    deck
}

// Three-actor layout. Actor hands get ids 0/3/6/.., 1/4/7/.., 2/5/8/..;
// the center keeps ids 27..36 with denominations [2,3,4,5,6,7,7,7,8].
const SOLO_ROWS: [&[u8]; 3] = [
    &[2, 3, 4, 8, 8, 9, 9, 10, 10],
    &[2, 3, 4, 10, 11, 11, 11, 12, 12],
    &[1, 1, 1, 5, 5, 6, 6, 9, 12],
];
const SOLO_CENTER: [u8; 9] = [2, 3, 4, 5, 6, 7, 7, 7, 8];

fn solo_game_with(options: GameOptions) -> Game {
    let mut game = Game::new(&NAMES[..3], options, 0).unwrap();
    game.center
        .set_cards(deck_from_rows(&SOLO_ROWS, &SOLO_CENTER));
    game.start_game().unwrap();
    game
}

fn solo_game() -> Game {
    solo_game_with(GameOptions::default())
}

// Four-actor team layout; all 36 cards are dealt, the center is empty.
// Actor 0 gets ids 0/4/../32, actor 1 ids 1/5/../33, and so on.
const TEAM_ROWS: [&[u8]; 4] = [
    &[1, 2, 2, 3, 3, 4, 4, 5, 5],
    &[1, 5, 6, 6, 8, 8, 9, 9, 10],
    &[1, 2, 3, 10, 10, 11, 11, 12, 12],
    &[4, 6, 7, 7, 7, 8, 9, 11, 12],
];

fn team_game() -> Game {
    let mut game = Game::new(
        &NAMES[..4],
        GameOptions::default().with_team_mode(true),
        0,
    )
    .unwrap();
    game.center.set_cards(deck_from_rows(&TEAM_ROWS, &[]));
    game.start_game().unwrap();
    game
}

fn hand_has(game: &Game, actor: usize, id: u8) -> bool {
    game.hand_of(actor).iter().any(|held| held.id == id)
}

#[test]
fn card_identity_is_by_id() {
    assert_ne!(card(0, 5), card(1, 5));
    assert_eq!(card(0, 5), card(0, 5));

    assert!(card(0, 4).forms_trio(&card(1, 4), &card(2, 4)));
    assert!(!card(0, 4).forms_trio(&card(1, 4), &card(2, 5)));
}

#[test]
fn neighbor_table_consecutive_and_pairs() {
    let table = NeighborTable::consecutive();
    assert!(table.are_neighbors(1, 2));
    assert!(table.are_neighbors(2, 1));
    assert!(!table.are_neighbors(4, 6));
    assert!(!table.are_neighbors(0, 1));
    assert!(!table.are_neighbors(12, 13));

    assert!(!NeighborTable::empty().are_neighbors(1, 2));

    let table = NeighborTable::from_pairs(&[(1, 12), (0, 5), (13, 1)]);
    assert!(table.are_neighbors(12, 1));
    assert!(!table.are_neighbors(0, 5));
    assert!(!table.are_neighbors(13, 1));
    assert!(!table.are_neighbors(1, 2));
}

#[test]
fn hand_stays_sorted_and_reports_bounds() {
    let mut hand = Hand::new(vec![card(0, 5), card(1, 2), card(2, 9)]);
    assert_eq!(
        hand.cards().iter().map(|c| c.denomination).collect::<Vec<_>>(),
        [2, 5, 9]
    );

    hand.add_card(card(3, 4));
    assert_eq!(
        hand.cards().iter().map(|c| c.denomination).collect::<Vec<_>>(),
        [2, 4, 5, 9]
    );

    assert_eq!(hand.smallest().unwrap(), card(1, 2));
    assert_eq!(hand.largest().unwrap(), card(2, 9));

    assert!(hand.remove_card(card(1, 2)));
    assert!(!hand.remove_card(card(1, 2)));
    assert_eq!(hand.len(), 3);
}

#[test]
fn empty_hand_has_no_bounds() {
    let hand = Hand::default();
    assert!(hand.is_empty());
    assert_eq!(hand.smallest().unwrap_err(), HandError::Empty);
    assert_eq!(hand.largest().unwrap_err(), HandError::Empty);
}

#[test]
fn trio_rejects_mixed_denominations() {
    let err = Trio::new([card(0, 1), card(1, 1), card(2, 2)]).unwrap_err();
    assert_eq!(err, TrioError::MixedDenominations);

    let trio = Trio::new([card(0, 9), card(1, 9), card(2, 9)]).unwrap();
    assert_eq!(trio.denomination(), 9);
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default()
        .with_team_mode(true)
        .with_piquant(true)
        .with_turn_limit(50)
        .with_neighbors(NeighborTable::from_pairs(&[(1, 12)]));

    assert!(options.team_mode);
    assert!(options.piquant);
    assert_eq!(options.turn_limit, 50);
    assert!(options.neighbors.are_neighbors(1, 12));
}

#[test]
fn construction_rejects_bad_rosters() {
    assert_eq!(
        Game::new(&[], GameOptions::default(), 0).unwrap_err(),
        ConfigError::NoActors
    );
    assert_eq!(
        Game::new(&["Ana", ""], GameOptions::default(), 0).unwrap_err(),
        ConfigError::EmptyName
    );
    assert_eq!(
        Game::new(&NAMES[..2], GameOptions::default(), 0).unwrap_err(),
        ConfigError::UnsupportedSoloCount(2)
    );

    let seven = ["A"; 7];
    assert_eq!(
        Game::new(&seven, GameOptions::default(), 0).unwrap_err(),
        ConfigError::UnsupportedSoloCount(7)
    );

    let team = GameOptions::default().with_team_mode(true);
    assert_eq!(
        Game::new(&NAMES[..3], team.clone(), 0).unwrap_err(),
        ConfigError::UnsupportedTeamCount(3)
    );
    assert_eq!(
        Game::new(&NAMES[..5], team, 0).unwrap_err(),
        ConfigError::UnsupportedTeamCount(5)
    );
}

#[test]
fn hand_sizes_follow_the_dealing_table() {
    for (count, per) in [(3, 9), (4, 7), (5, 6), (6, 5)] {
        let mut game = Game::new(&NAMES[..count], GameOptions::default(), 1).unwrap();
        game.start_game().unwrap();
        for actor in 0..count {
            assert_eq!(game.hand_of(actor).len(), per);
        }
        assert_eq!(game.center.len(), DECK_SIZE - count * per);
    }

    let team = GameOptions::default().with_team_mode(true);
    for (count, per) in [(4, 9), (6, 6)] {
        let mut game = Game::new(&NAMES[..count], team.clone(), 1).unwrap();
        game.start_game().unwrap();
        for actor in 0..count {
            assert_eq!(game.hand_of(actor).len(), per);
        }
        assert_eq!(game.center.len(), DECK_SIZE - count * per);
    }
}

#[test]
fn deal_partitions_the_deck() {
    let mut game = Game::new(&NAMES[..3], GameOptions::default(), 7).unwrap();
    game.start_game().unwrap();

    let mut ids: Vec<u8> = game.center.cards().iter().map(|c| c.id).collect();
    for actor in 0..3 {
        ids.extend(game.hand_of(actor).iter().map(|c| c.id));
    }
    ids.sort_unstable();
    let expected: Vec<u8> = (0..DECK_SIZE as u8).collect();
    assert_eq!(ids, expected);
}

#[test]
fn starting_twice_is_rejected() {
    let mut game = Game::new(&NAMES[..3], GameOptions::default(), 1).unwrap();
    game.start_game().unwrap();
    assert_eq!(game.start_game().unwrap_err(), StartError::AlreadyStarted);
}

#[test]
fn same_seed_deals_identically() {
    let a = Game::new(&NAMES[..3], GameOptions::default(), 99).unwrap();
    let b = Game::new(&NAMES[..3], GameOptions::default(), 99).unwrap();
    assert_eq!(a.center.cards(), b.center.cards());

    let c = Game::new(&NAMES[..3], GameOptions::default(), 100).unwrap();
    assert_ne!(a.center.cards(), c.center.cards());
}

#[test]
fn mismatched_reveals_leave_cards_in_place() {
    let mut game = solo_game();

    let first = game.reveal_smallest_from_actor(0).unwrap();
    assert_eq!(first, card(0, 2));
    game.reveal_from_center(card(28, 3)).unwrap();

    assert!(!game.can_reveal_card());
    assert_eq!(
        game.reveal_from_center(card(29, 4)).unwrap_err(),
        RevealError::TurnComplete
    );

    let revealed = game.revealed_cards();
    assert_eq!(revealed.len(), 2);
    assert_eq!(revealed[0].origin, CardOrigin::Hand(0));
    assert_eq!(revealed[1].origin, CardOrigin::Center);

    assert!(!game.next_turn().unwrap());
    assert_eq!(game.current_actor(), 1);
    assert!(game.revealed_cards().is_empty());

    // Nothing moved.
    assert_eq!(game.hand_of(0).len(), 9);
    assert_eq!(game.center.len(), 9);
    assert!(game.center.contains(card(28, 3)));
}

#[test]
fn turn_can_stop_after_two_matching_reveals() {
    let mut game = solo_game();

    game.reveal_smallest_from_actor(0).unwrap();
    game.reveal_from_center(card(27, 2)).unwrap();
    assert!(game.can_reveal_card());

    assert!(!game.next_turn().unwrap());
    assert_eq!(game.current_actor(), 1);
    assert_eq!(game.hand_of(0).len(), 9);
    assert_eq!(game.center.len(), 9);
}

#[test]
fn trio_resolves_from_three_origins() {
    let mut game = solo_game();

    game.reveal_smallest_from_actor(0).unwrap();
    game.reveal_from_center(card(27, 2)).unwrap();
    game.reveal_smallest_from_actor(1).unwrap();

    assert_eq!(game.trio_count(0), 1);
    let trio = game.trios_for(0)[0];
    assert_eq!(trio.denomination(), 2);
    let mut ids: Vec<u8> = trio.cards().iter().map(|c| c.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, [0, 1, 27]);

    // The cards left their exact origins.
    assert!(!hand_has(&game, 0, 0));
    assert!(!hand_has(&game, 1, 1));
    assert!(!game.center.contains(card(27, 2)));
    assert_eq!(game.hand_of(0).len(), 8);
    assert_eq!(game.hand_of(1).len(), 8);
    assert_eq!(game.hand_of(2).len(), 9);
    assert_eq!(game.center.len(), 8);

    // The deck partition still accounts for every card.
    let held = game.hand_of(0).len() + game.hand_of(1).len() + game.hand_of(2).len();
    assert_eq!(held + game.center.len() + 3, DECK_SIZE);

    // Solo mode: the completing actor keeps the turn.
    assert_eq!(game.phase(), Phase::Playing);
    assert!(game.next_turn().unwrap());
    assert_eq!(game.current_actor(), 0);
    assert!(game.revealed_cards().is_empty());
}

#[test]
fn reveal_rejections_leave_state_unchanged() {
    let mut game = solo_game();

    assert_eq!(
        game.reveal_from_center(card(99, 5)).unwrap_err(),
        RevealError::CardNotInCenter
    );
    assert_eq!(
        game.reveal_smallest_from_actor(7).unwrap_err(),
        RevealError::ActorNotFound
    );

    game.reveal_smallest_from_actor(0).unwrap();
    assert_eq!(
        game.reveal_smallest_from_actor(0).unwrap_err(),
        RevealError::AlreadyRevealed
    );
    assert_eq!(game.revealed_cards().len(), 1);

    // A mismatching second reveal closes the window.
    let largest = game.reveal_largest_from_actor(0).unwrap();
    assert_eq!(largest.denomination, 10);
    assert_eq!(
        game.reveal_smallest_from_actor(1).unwrap_err(),
        RevealError::TurnComplete
    );
}

#[test]
fn three_trios_win() {
    let mut game = solo_game();

    game.reveal_smallest_from_actor(0).unwrap();
    game.reveal_smallest_from_actor(1).unwrap();
    game.reveal_from_center(card(27, 2)).unwrap();
    assert!(game.next_turn().unwrap());

    game.reveal_smallest_from_actor(0).unwrap();
    game.reveal_smallest_from_actor(1).unwrap();
    game.reveal_from_center(card(28, 3)).unwrap();
    assert!(game.next_turn().unwrap());

    game.reveal_smallest_from_actor(0).unwrap();
    game.reveal_smallest_from_actor(1).unwrap();
    game.reveal_from_center(card(29, 4)).unwrap();

    assert!(game.is_game_ended());
    assert_eq!(game.winner(), Some(0));
    assert_eq!(game.victory(), Some(Victory::ThreeTrios));
    assert_eq!(game.trio_count(0), 3);

    assert_eq!(game.next_turn().unwrap_err(), TurnError::GameEnded);
    assert_eq!(
        game.reveal_smallest_from_actor(0).unwrap_err(),
        RevealError::InvalidState
    );
}

#[test]
fn seven_trio_wins_instantly() {
    let mut game = solo_game();

    game.reveal_from_center(card(32, 7)).unwrap();
    game.reveal_from_center(card(33, 7)).unwrap();
    game.reveal_from_center(card(34, 7)).unwrap();

    assert!(game.is_game_ended());
    assert_eq!(game.winner(), Some(0));
    assert_eq!(game.victory(), Some(Victory::SevenTrio));
    assert_eq!(game.trio_count(0), 1);
    assert_eq!(game.center.len(), 6);
    assert_eq!(game.hand_of(0).len(), 9);
}

#[test]
fn linked_trios_win_with_piquant() {
    let mut game = solo_game_with(GameOptions::default().with_piquant(true));

    game.reveal_smallest_from_actor(0).unwrap();
    game.reveal_smallest_from_actor(1).unwrap();
    game.reveal_from_center(card(27, 2)).unwrap();
    assert!(game.next_turn().unwrap());

    game.reveal_smallest_from_actor(0).unwrap();
    game.reveal_smallest_from_actor(1).unwrap();
    game.reveal_from_center(card(28, 3)).unwrap();

    // Denominations 2 and 3 are neighbors in the default table.
    assert!(game.is_game_ended());
    assert_eq!(game.winner(), Some(0));
    assert_eq!(game.victory(), Some(Victory::LinkedTrios));
}

#[test]
fn turn_limit_ends_in_a_draw() {
    let mut game = solo_game_with(GameOptions::default().with_turn_limit(2));

    assert!(!game.next_turn().unwrap());
    assert!(!game.is_game_ended());

    assert!(!game.next_turn().unwrap());
    assert!(game.is_game_ended());
    assert_eq!(game.winner(), None);
    assert_eq!(game.victory(), None);
    assert_eq!(game.turns_played(), 2);
    assert_eq!(game.next_turn().unwrap_err(), TurnError::GameEnded);
}

#[test]
fn initial_exchange_gates_play() {
    let mut game = team_game();

    assert_eq!(game.phase(), Phase::InitialExchange);
    assert_eq!(game.awaiting_exchange(), [0, 1, 2, 3]);
    assert_eq!(game.teammate_of(0), Some(2));
    assert_eq!(game.teammate_of(1), Some(3));

    assert_eq!(
        game.reveal_smallest_from_actor(0).unwrap_err(),
        RevealError::InvalidState
    );
    assert_eq!(game.next_turn().unwrap_err(), TurnError::InvalidState);

    // Actor 0 gives a 5 to actor 2 and receives a 12.
    game.exchange_cards(0, card(32, 5), card(30, 12)).unwrap();
    assert!(hand_has(&game, 0, 30));
    assert!(!hand_has(&game, 0, 32));
    assert!(hand_has(&game, 2, 32));
    assert!(!hand_has(&game, 2, 30));
    assert_eq!(game.awaiting_exchange(), [1, 3]);

    assert_eq!(
        game.exchange_cards(0, card(28, 5), card(34, 12)).unwrap_err(),
        ExchangeError::AlreadyExchanged
    );
    assert_eq!(
        game.exchange_cards(2, card(32, 5), card(28, 5)).unwrap_err(),
        ExchangeError::AlreadyExchanged
    );

    game.exchange_cards(1, card(33, 10), card(35, 12)).unwrap();
    assert_eq!(game.phase(), Phase::Playing);
    assert!(game.awaiting_exchange().is_empty());
}

#[test]
fn failed_exchange_leaves_both_hands_untouched() {
    let mut game = team_game();

    // id 5 belongs to actor 1, not to actor 0's teammate.
    assert_eq!(
        game.exchange_cards(0, card(32, 5), card(5, 5)).unwrap_err(),
        ExchangeError::CardNotInHand
    );
    assert!(hand_has(&game, 0, 32));
    assert!(hand_has(&game, 1, 5));
    assert_eq!(game.hand_of(0).len(), 9);
    assert_eq!(game.hand_of(2).len(), 9);
    assert_eq!(game.awaiting_exchange(), [0, 1, 2, 3]);

    assert_eq!(
        game.exchange_cards(9, card(32, 5), card(30, 12)).unwrap_err(),
        ExchangeError::ActorNotFound
    );

    let mut solo = solo_game();
    assert_eq!(
        solo.exchange_cards(0, card(0, 2), card(1, 2)).unwrap_err(),
        ExchangeError::InvalidState
    );
}

#[test]
fn post_trio_exchange_for_the_completing_team() {
    let mut game = team_game();

    // Initial exchanges that keep each denomination-1 card in place.
    game.exchange_cards(0, card(32, 5), card(30, 12)).unwrap();
    game.exchange_cards(1, card(33, 10), card(35, 12)).unwrap();
    assert_eq!(game.phase(), Phase::Playing);

    game.reveal_smallest_from_actor(0).unwrap();
    game.reveal_smallest_from_actor(1).unwrap();
    game.reveal_smallest_from_actor(2).unwrap();
    assert_eq!(game.trio_count(0), 1);
    assert_eq!(game.team_trio_count(2), 1);

    assert!(game.next_turn().unwrap());
    assert_eq!(game.phase(), Phase::PostTrioExchange);
    assert_eq!(game.current_actor(), 0);
    assert_eq!(game.awaiting_exchange(), [0, 2]);

    assert_eq!(
        game.reveal_smallest_from_actor(0).unwrap_err(),
        RevealError::InvalidState
    );
    assert_eq!(game.next_turn().unwrap_err(), TurnError::InvalidState);
    assert_eq!(
        game.exchange_cards(1, card(9, 6), card(3, 4)).unwrap_err(),
        ExchangeError::AlreadyExchanged
    );

    game.exchange_cards(0, card(4, 2), card(6, 2)).unwrap();
    assert_eq!(game.phase(), Phase::Playing);
    assert_eq!(game.current_actor(), 0);

    // Every card is still accounted for.
    let held: usize = (0..4).map(|actor| game.hand_of(actor).len()).sum();
    assert_eq!(held + game.center.len() + 3, DECK_SIZE);
}
