//! FreeCell integration tests through the public API.

use freecell_core::core::{FixedSeed, DECK_SIZE};
use freecell_core::{
    Board, Card, Deck, Destination, FreeCell, FreeCellBuilder, GameStatus, Move, MoveError,
    RulesEngine, Suit, SuitMap,
};

fn card(text: &str) -> Card {
    text.parse().unwrap()
}

fn cards(texts: &[&str]) -> Vec<Card> {
    texts.iter().map(|t| card(t)).collect()
}

fn empty_columns() -> Vec<Vec<Card>> {
    vec![Vec::new(); 8]
}

// =============================================================================
// Deck
// =============================================================================

#[test]
fn test_seed_42_is_reproducible() {
    let first = Deck::new(42).cards_shuffled();
    let second = Deck::new(42).cards_shuffled();

    assert_eq!(first.len(), DECK_SIZE);
    assert_eq!(first, second);
}

#[test]
fn test_different_seeds_give_different_deals() {
    assert_ne!(Deck::new(1).cards_shuffled(), Deck::new(617).cards_shuffled());
}

// =============================================================================
// Board scenarios
// =============================================================================

#[test]
fn test_ace_first_stacking() {
    let mut columns = empty_columns();
    columns[0] = cards(&["2h", "Ah"]);
    columns[1] = cards(&["2d", "Ad"]);
    columns[2] = cards(&["2c", "Ac"]);
    columns[3] = cards(&["2s", "As"]);
    let mut board = Board::from_parts(columns, vec![None; 4], SuitMap::default()).unwrap();

    // Expose the Two of Hearts; it cannot go home before its Ace.
    board.move_to_free_cell(card("Ah")).unwrap();
    assert!(board.move_to_stack(card("2h")).is_err());
    assert_eq!(board.stack_top(Suit::Hearts), None);

    for text in ["Ah", "Ad", "Ac", "As"] {
        board.move_to_stack(card(text)).unwrap();
    }
    for suit in Suit::ALL {
        assert_eq!(board.stack_top(suit), Card::new(1, suit).ok());
    }
}

#[test]
fn test_two_before_ace_fails_for_every_suit() {
    let mut columns = empty_columns();
    columns[0] = cards(&["2h"]);
    columns[1] = cards(&["2d"]);
    columns[2] = cards(&["2c"]);
    columns[3] = cards(&["2s"]);
    let mut board = Board::from_parts(columns, vec![None; 4], SuitMap::default()).unwrap();
    let before = board.clone();

    for text in ["2h", "2d", "2c", "2s"] {
        assert!(board.move_to_stack(card(text)).is_err());
    }
    assert_eq!(board, before);
}

#[test]
fn test_free_cell_capacity() {
    let mut columns = empty_columns();
    columns[0] = cards(&["9c", "8h"]);
    let mut board = Board::from_parts(
        columns,
        vec![Some(card("Th")), Some(card("Td")), Some(card("Ts")), Some(card("Tc"))],
        SuitMap::default(),
    )
    .unwrap();
    let before = board.snapshot();

    assert!(board.move_to_free_cell(card("8h")).is_err());
    assert_eq!(board.snapshot(), before);
}

#[test]
fn test_move_to_card_places_on_top() {
    let mut columns = empty_columns();
    columns[1] = cards(&["Kd", "9s"]);
    columns[6] = cards(&["4c", "8h"]);
    let mut board = Board::from_parts(columns, vec![None; 4], SuitMap::default()).unwrap();

    board.move_to_card(card("8h"), card("9s")).unwrap();
    assert_eq!(board.columns()[1], cards(&["Kd", "9s", "8h"]));
    assert_eq!(board.columns()[6], cards(&["4c"]));
}

// =============================================================================
// Game scenarios
// =============================================================================

#[test]
fn test_won_board() {
    let kings = SuitMap::new(|s| Card::new(13, s).ok());
    let board = Board::from_parts(empty_columns(), vec![None; 4], kings).unwrap();
    let game = FreeCellBuilder::new().seed(1).position(board).build();

    assert_eq!(game.classify_state(), GameStatus::Won);
    assert_eq!(game.is_terminal(), Some(GameStatus::Won));
}

#[test]
fn test_illegal_king_to_stack() {
    let mut game = FreeCell::new(1);
    assert!(game.board().stack_top(Suit::Hearts).is_none());

    let mv = Move::parse("Kh", "S").unwrap();
    assert!(!game.is_legal(&mv));
    assert_eq!(game.apply_move(&mv), Err(MoveError::Illegal(mv)));
    assert_eq!(game.move_count(), 0);
}

#[test]
fn test_notation_round_trip_through_enumeration() {
    let mut game = FreeCell::new(42);
    let (card_text, dest_text) = game.enumerate_move_pairs()[0].clone();

    game.apply_notation(&card_text, &dest_text).unwrap();
    assert_eq!(game.move_count(), 1);
}

#[test]
fn test_play_out_first_move_policy() {
    let mut game = FreeCellBuilder::new().seed_source(FixedSeed(617)).build();
    assert_eq!(game.seed(), 617);

    let mut turns = 0;
    while game.is_terminal().is_none() && turns < 200 {
        let moves = game.enumerate_moves();
        // Prefer sending cards home, then anything else.
        let mv = moves
            .iter()
            .find(|m| m.destination == Destination::SuitStack)
            .copied()
            .unwrap_or(moves[0]);
        game.apply_move(&mv).unwrap();
        turns += 1;
        assert_eq!(game.board().card_count(), DECK_SIZE);
    }

    assert_eq!(game.move_count(), turns);
}

#[test]
fn test_start_game_resets() {
    let mut game = FreeCell::new(3);
    let first = game.enumerate_moves()[0];
    game.apply_move(&first).unwrap();

    game.start_game(Some(3));
    assert_eq!(game.move_count(), 0);
    assert_eq!(game.snapshot(), FreeCell::new(3).snapshot());
}
