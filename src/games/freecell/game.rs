//! FreeCell game implementation.

use smallvec::SmallVec;

use crate::board::{Board, BoardSnapshot};
use crate::core::{
    Card, Deck, Destination, EntropySource, FreeCellConfig, Move, MoveError, SeedSource,
    FREE_CELL_COUNT,
};
use crate::rules::{GameStatus, RulesEngine};

/// A FreeCell game: the deck it was dealt from, the board, and a move counter.
///
/// Seeds come from an injected [`SeedSource`] whenever a game starts without
/// an explicit one. The seed actually used is kept so the deal can be
/// replayed.
#[derive(Debug)]
pub struct FreeCell {
    deck: Deck,
    board: Board,
    move_count: u32,
    seeds: Box<dyn SeedSource>,
}

/// Builder for creating a FreeCell game.
#[derive(Debug, Default)]
pub struct FreeCellBuilder {
    config: FreeCellConfig,
    seeds: Option<Box<dyn SeedSource>>,
    position: Option<Board>,
}

impl FreeCellBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deal from a fixed seed.
    pub fn seed(mut self, seed: u32) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn config(mut self, config: FreeCellConfig) -> Self {
        self.config = config;
        self
    }

    /// Where seeds come from when none is given. Defaults to OS entropy.
    pub fn seed_source(mut self, source: impl SeedSource + 'static) -> Self {
        self.seeds = Some(Box::new(source));
        self
    }

    /// Start from a given position instead of the seeded deal.
    pub fn position(mut self, board: Board) -> Self {
        self.position = Some(board);
        self
    }

    /// Build the game and deal.
    pub fn build(self) -> FreeCell {
        let mut seeds = self
            .seeds
            .unwrap_or_else(|| Box::new(EntropySource::new()) as Box<dyn SeedSource>);
        let seed = self.config.seed.unwrap_or_else(|| seeds.next_seed());

        let deck = Deck::new(seed);
        let board = self
            .position
            .unwrap_or_else(|| Board::deal(&deck.cards_shuffled()));

        FreeCell {
            deck,
            board,
            move_count: 0,
            seeds,
        }
    }
}

impl FreeCell {
    /// Deal a game from a fixed seed.
    pub fn new(seed: u32) -> Self {
        FreeCellBuilder::new().seed(seed).build()
    }

    /// The seed of the current deal.
    pub fn seed(&self) -> u32 {
        self.deck.seed()
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Moves applied since the deal.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Apply a move written in two-token notation, e.g. `("Ah", "S")`.
    ///
    /// Tokens are parsed before the board is consulted, so malformed input
    /// fails with `MoveError::Config` and changes nothing.
    pub fn apply_notation(&mut self, card: &str, destination: &str) -> Result<(), MoveError> {
        let mv = Move::parse(card, destination)?;
        self.apply_move(&mv)
    }

    /// Legal moves in two-token notation.
    pub fn enumerate_move_pairs(&self) -> Vec<(String, String)> {
        self.enumerate_moves().iter().map(Move::to_pair).collect()
    }
}

/// Moves of `card` onto any of the column tops.
fn push_card_destinations(card: Card, tops: &[Card], moves: &mut Vec<Move>) {
    for &top in tops {
        if card != top && card.is_smaller_and_different_color(top) {
            moves.push(Move::new(card, Destination::Card(top)));
        }
    }
}

impl RulesEngine for FreeCell {
    type Move = Move;
    type Snapshot = BoardSnapshot;
    type Error = MoveError;

    /// Order: empty-column moves (free cells first, then column tops),
    /// free-cell moves, then per free-cell card and per column top a
    /// suit-stack move followed by moves onto column tops.
    fn enumerate_moves(&self) -> Vec<Move> {
        let board = &self.board;
        let tops = board.get_movable_cards();
        let celled: SmallVec<[Card; FREE_CELL_COUNT]> = board.free_cell_cards().collect();
        let mut moves = Vec::new();

        if board.has_empty_column() {
            for &card in celled.iter().chain(tops.iter()) {
                moves.push(Move::new(card, Destination::EmptyColumn));
            }
        }

        if board.empty_free_cells() > 0 {
            for &card in &tops {
                moves.push(Move::new(card, Destination::FreeCell));
            }
        }

        for &card in celled.iter().chain(tops.iter()) {
            if card.is_larger_and_same_suit(board.stack_top(card.suit())) {
                moves.push(Move::new(card, Destination::SuitStack));
            }
            push_card_destinations(card, &tops, &mut moves);
        }

        moves
    }

    fn apply_move(&mut self, mv: &Move) -> Result<(), MoveError> {
        if !self.is_legal(mv) {
            return Err(MoveError::Illegal(*mv));
        }

        let result = match mv.destination {
            Destination::FreeCell => self.board.move_to_free_cell(mv.card),
            Destination::SuitStack => self.board.move_to_stack(mv.card),
            Destination::EmptyColumn => self.board.move_to_free_column(mv.card),
            Destination::Card(target) => self.board.move_to_card(mv.card, target),
        };

        debug_assert!(result.is_ok(), "legal move {mv} refused by board: {result:?}");
        result.map_err(|source| MoveError::InternalInconsistency { mv: *mv, source })?;

        self.move_count += 1;
        Ok(())
    }

    fn classify_state(&self) -> GameStatus {
        if self.board.is_complete() {
            GameStatus::Won
        } else if self.enumerate_moves().is_empty() {
            GameStatus::Lost
        } else {
            GameStatus::Ongoing
        }
    }

    fn snapshot(&self) -> BoardSnapshot {
        self.board.snapshot()
    }

    fn start_game(&mut self, seed: Option<u32>) {
        let seed = seed.unwrap_or_else(|| self.seeds.next_seed());
        self.deck = Deck::new(seed);
        self.board = Board::deal(&self.deck.cards_shuffled());
        self.move_count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ConfigError, FixedSeed, SeededSource, Suit, SuitMap};

    fn card(text: &str) -> Card {
        text.parse().unwrap()
    }

    fn column(texts: &[&str]) -> Vec<Card> {
        texts.iter().map(|t| card(t)).collect()
    }

    fn tens() -> Vec<Option<Card>> {
        ["Th", "Td", "Ts", "Tc"].iter().map(|t| Some(card(t))).collect()
    }

    fn stacks_at(rank: u8) -> SuitMap<Option<Card>> {
        SuitMap::new(|s| Card::new(rank, s).ok())
    }

    fn game_at(columns: Vec<Vec<Card>>, free_cells: Vec<Option<Card>>, rank: u8) -> FreeCell {
        let board = Board::from_parts(columns, free_cells, stacks_at(rank)).unwrap();
        FreeCellBuilder::new().seed(1).position(board).build()
    }

    fn pairs(game: &FreeCell) -> Vec<(String, String)> {
        game.enumerate_move_pairs()
    }

    fn pair(a: &str, b: &str) -> (String, String) {
        (a.to_string(), b.to_string())
    }

    #[test]
    fn test_game_creation() {
        let game = FreeCell::new(1);
        assert_eq!(game.seed(), 1);
        assert_eq!(game.move_count(), 0);
        assert_eq!(game.board().card_count(), 52);
        assert_eq!(game.classify_state(), GameStatus::Ongoing);
    }

    #[test]
    fn test_initial_moves_seed_1() {
        let game = FreeCell::new(1);
        let expected = vec![
            pair("Kd", "F"),
            pair("7c", "F"),
            pair("Ah", "F"),
            pair("5s", "F"),
            pair("Kc", "F"),
            pair("9s", "F"),
            pair("6c", "F"),
            pair("4c", "F"),
            pair("Ah", "S"),
        ];
        assert_eq!(pairs(&game), expected);
    }

    #[test]
    fn test_apply_counts_moves() {
        let mut game = FreeCell::new(1);
        game.apply_notation("Ah", "S").unwrap();
        assert_eq!(game.move_count(), 1);
        assert_eq!(game.board().stack_top(Suit::Hearts), Some(card("Ah")));

        // Four cards off column 0 into the free cells.
        for _ in 0..4 {
            assert_eq!(game.classify_state(), GameStatus::Ongoing);
            let top = *game.board().columns()[0].last().unwrap();
            game.apply_move(&Move::new(top, Destination::FreeCell)).unwrap();
        }
        assert_eq!(game.move_count(), 5);
        assert_eq!(game.board().empty_free_cells(), 0);
    }

    #[test]
    fn test_illegal_move_rejected() {
        let mut game = FreeCell::new(1);
        let before = game.snapshot();

        let err = game.apply_notation("Kh", "S").unwrap_err();
        assert_eq!(err, MoveError::Illegal(Move::parse("Kh", "S").unwrap()));
        assert!(!err.is_internal());
        assert_eq!(game.move_count(), 0);
        assert_eq!(game.snapshot(), before);
    }

    #[test]
    fn test_buried_card_rejected() {
        let mut game = FreeCell::new(1);
        // Jh sits at the bottom of column 0.
        assert!(matches!(
            game.apply_notation("Jh", "F"),
            Err(MoveError::Illegal(_))
        ));
        assert_eq!(game.move_count(), 0);
    }

    #[test]
    fn test_malformed_notation_rejected() {
        let mut game = FreeCell::new(1);
        assert_eq!(
            game.apply_notation("", "S"),
            Err(MoveError::Config(ConfigError::EmptyToken))
        );
        assert!(matches!(
            game.apply_notation("Ah", "Q"),
            Err(MoveError::Config(ConfigError::InvalidDestination(_)))
        ));
        assert_eq!(game.move_count(), 0);
    }

    #[test]
    fn test_free_column_scenario() {
        let mut game = game_at(
            vec![
                vec![],
                column(&["Kd", "7c"]),
                column(&["Ks"]),
                column(&["Kc"]),
                column(&["3h"]),
                column(&["3d"]),
                column(&["3s"]),
                column(&["3c"]),
            ],
            tens(),
            1,
        );

        let moves = game.enumerate_moves();
        assert_eq!(moves.len(), 11);
        assert!(moves.iter().all(|m| m.destination == Destination::EmptyColumn));
        // Free-cell occupants come before column tops.
        assert_eq!(moves[0].card, card("Th"));
        assert_eq!(moves[4].card, card("7c"));
        assert_eq!(game.classify_state(), GameStatus::Ongoing);

        game.apply_notation("7c", "0").unwrap();
        assert_eq!(game.move_count(), 1);
        assert_eq!(game.board().columns()[0], column(&["7c"]));
        assert_eq!(game.classify_state(), GameStatus::Lost);

        assert!(matches!(
            game.apply_notation("Kh", "0"),
            Err(MoveError::Illegal(_))
        ));
        assert_eq!(game.move_count(), 1);
    }

    #[test]
    fn test_stack_move_scenario() {
        let mut game = game_at(
            vec![
                column(&["Kh"]),
                column(&["Kd"]),
                column(&["Ks"]),
                column(&["Kc"]),
                column(&["4h"]),
                column(&["4d", "2c"]),
                column(&["4s"]),
                column(&["4c"]),
            ],
            tens(),
            1,
        );

        assert_eq!(pairs(&game), vec![pair("2c", "S")]);
        assert_eq!(game.classify_state(), GameStatus::Ongoing);

        game.apply_notation("2c", "S").unwrap();
        assert_eq!(game.board().stack_top(Suit::Clubs), Some(card("2c")));
        assert_eq!(game.classify_state(), GameStatus::Lost);
        assert!(game.apply_notation("Kh", "S").is_err());
        assert_eq!(game.move_count(), 1);
    }

    #[test]
    fn test_no_moves_is_lost() {
        let game = game_at(
            vec![
                column(&["Kh"]),
                column(&["Kd"]),
                column(&["Ks"]),
                column(&["Kc"]),
                column(&["3h"]),
                column(&["3d"]),
                column(&["3s"]),
                column(&["3c"]),
            ],
            tens(),
            1,
        );
        assert!(game.enumerate_moves().is_empty());
        assert_eq!(game.classify_state(), GameStatus::Lost);
        assert_eq!(game.is_terminal(), Some(GameStatus::Lost));
    }

    #[test]
    fn test_won_board() {
        let game = game_at(vec![vec![]; 8], vec![None; 4], 13);
        assert!(game.enumerate_moves().is_empty());
        assert_eq!(game.classify_state(), GameStatus::Won);
        assert_eq!(game.snapshot().suit_stacks, stacks_at(13).to_array());
    }

    #[test]
    fn test_free_cell_to_card_and_stack_moves() {
        let game = game_at(
            vec![
                column(&["Qs"]),
                column(&["Kc", "3c"]),
                column(&["9d"]),
                column(&["8h"]),
                column(&["Td"]),
                column(&["5c"]),
                column(&["6s"]),
                column(&["7d"]),
            ],
            vec![Some(card("Jh")), Some(card("2h")), None, None],
            1,
        );

        let moves = pairs(&game);
        assert!(moves.contains(&pair("Jh", "Qs")));
        assert!(moves.contains(&pair("2h", "S")));
        assert!(moves.contains(&pair("9d", "F")));
        assert!(moves.contains(&pair("6s", "7d")));
        assert!(!moves.iter().any(|(_, d)| d == "0"));

        // Free-cell moves come before the free-cell occupant's moves, which
        // come before column-top moves.
        let jh = moves.iter().position(|m| *m == pair("Jh", "Qs")).unwrap();
        let f = moves.iter().position(|m| *m == pair("7d", "F")).unwrap();
        let six = moves.iter().position(|m| *m == pair("6s", "7d")).unwrap();
        assert!(f < jh && jh < six);
    }

    #[test]
    fn test_enumeration_has_no_duplicates() {
        let game = FreeCell::new(617);
        let moves = game.enumerate_moves();
        for (i, a) in moves.iter().enumerate() {
            assert!(!moves[i + 1..].contains(a), "duplicate move {a}");
        }
    }

    #[test]
    fn test_start_game_with_seed() {
        let mut game = FreeCell::new(1);
        game.apply_notation("Ah", "S").unwrap();

        game.start_game(Some(42));
        assert_eq!(game.seed(), 42);
        assert_eq!(game.move_count(), 0);
        assert_eq!(game.board(), FreeCell::new(42).board());
    }

    #[test]
    fn test_start_game_draws_from_source() {
        let mut game = FreeCellBuilder::new().seed_source(FixedSeed(617)).build();
        assert_eq!(game.seed(), 617);

        game.start_game(None);
        assert_eq!(game.seed(), 617);
    }

    #[test]
    fn test_seeded_source_replays_series() {
        let mut a = FreeCellBuilder::new().seed_source(SeededSource::new(5)).build();
        let mut b = FreeCellBuilder::new().seed_source(SeededSource::new(5)).build();
        assert_eq!(a.seed(), b.seed());

        a.start_game(None);
        b.start_game(None);
        assert_eq!(a.seed(), b.seed());
        assert_eq!(a.board(), b.board());
    }

    #[test]
    fn test_explicit_seed_wins_over_source() {
        let game = FreeCellBuilder::new()
            .seed_source(FixedSeed(3))
            .config(FreeCellConfig::new().with_seed(9))
            .build();
        assert_eq!(game.seed(), 9);
    }

    #[test]
    fn test_deterministic_replay() {
        let mut game1 = FreeCell::new(12345);
        let mut game2 = FreeCell::new(12345);

        let mut taken = Vec::new();
        while game1.is_terminal().is_none() && taken.len() < 100 {
            let mv = game1.enumerate_moves()[0];
            game1.apply_move(&mv).unwrap();
            taken.push(mv);
        }

        for mv in &taken {
            game2.apply_move(mv).unwrap();
        }

        assert_eq!(game1.snapshot(), game2.snapshot());
        assert_eq!(game1.move_count(), game2.move_count());
        assert_eq!(game1.board().card_count(), 52);
    }
}
