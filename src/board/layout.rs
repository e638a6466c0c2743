//! Board layout and single-card transitions.
//!
//! The `Board` owns the 8 columns, 4 free cells and 4 suit stacks, and every
//! rule about which card may go where. Each transition checks all of its
//! preconditions before touching state, so a refused move leaves the board
//! exactly as it was.
//!
//! Only single cards move. A run of alternating cards is never carried
//! across in one step (no supermoves); the top card of a column or a
//! free-cell occupant is the only thing that can be picked up.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use super::snapshot::BoardSnapshot;
use crate::core::card::{Card, Suit, ACE};
use crate::core::config::{COLUMN_COUNT, DEAL_PATTERN, FREE_CELL_COUNT};
use crate::core::error::{BoardError, ConfigError};
use crate::core::suit_map::SuitMap;

/// A tableau column, bottom card first.
pub type Column = Vec<Card>;

/// Where an exposed card currently sits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Location {
    /// Top of the column at this index.
    Column(usize),
    /// Free cell at this index.
    FreeCell(usize),
}

/// The FreeCell layout.
///
/// Every card of the deal is in exactly one place: a column, a free cell, or
/// under the top of its suit stack. Suit stacks only record their top card,
/// since a stack always holds the full run from the Ace up.
///
/// ## Usage
///
/// ```
/// use freecell_core::board::Board;
/// use freecell_core::core::Deck;
///
/// let mut board = Board::deal(&Deck::new(1).cards_shuffled());
/// assert_eq!(board.card_count(), 52);
///
/// // The Ace of Hearts is on top of column 2 in deal 1.
/// let ace = board.find_card("Ah").unwrap();
/// board.move_to_stack(ace).unwrap();
/// assert_eq!(board.stack_top(ace.suit()), Some(ace));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    columns: [Column; COLUMN_COUNT],
    free_cells: [Option<Card>; FREE_CELL_COUNT],
    suit_stacks: SuitMap<Option<Card>>,
}

impl Board {
    /// An empty board: no cards anywhere.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Deal cards into columns of 6, 6, 6, 6, 7, 7, 7, 7.
    ///
    /// The first card lands at the bottom of column 0. A short slice fills
    /// the columns in the same order and leaves the rest empty.
    #[must_use]
    pub fn deal(cards: &[Card]) -> Self {
        let mut board = Self::new();
        let mut start = 0;

        for (column, &size) in board.columns.iter_mut().zip(DEAL_PATTERN.iter()) {
            let end = (start + size).min(cards.len());
            if start < end {
                column.extend_from_slice(&cards[start..end]);
            }
            start = end;
        }

        board
    }

    /// Build an arbitrary position.
    ///
    /// Requires exactly 8 columns and 4 free cells, suit stacks holding cards
    /// of their own suit, and no card placed twice (a stack counts as holding
    /// every card from its Ace to its top). Cards may be missing.
    pub fn from_parts(
        columns: Vec<Column>,
        free_cells: Vec<Option<Card>>,
        suit_stacks: SuitMap<Option<Card>>,
    ) -> Result<Self, ConfigError> {
        let column_count = columns.len();
        let columns: [Column; COLUMN_COUNT] =
            columns.try_into().map_err(|_| ConfigError::ColumnCount {
                expected: COLUMN_COUNT,
                actual: column_count,
            })?;

        let cell_count = free_cells.len();
        let free_cells: [Option<Card>; FREE_CELL_COUNT] =
            free_cells.try_into().map_err(|_| ConfigError::FreeCellCount {
                expected: FREE_CELL_COUNT,
                actual: cell_count,
            })?;

        for (suit, top) in suit_stacks.iter() {
            if let Some(card) = top {
                if card.suit() != suit {
                    return Err(ConfigError::WrongStackSuit {
                        suit: suit.name().to_string(),
                        card: card.to_string(),
                    });
                }
            }
        }

        let board = Self {
            columns,
            free_cells,
            suit_stacks,
        };

        let mut seen = FxHashSet::default();
        for card in board.all_cards() {
            if !seen.insert(card) {
                return Err(ConfigError::DuplicateCard(card.to_string()));
            }
        }

        Ok(board)
    }

    /// Rebuild a board from a snapshot.
    pub fn from_snapshot(snapshot: &BoardSnapshot) -> Result<Self, ConfigError> {
        Self::from_parts(
            snapshot.columns.clone(),
            snapshot.free_cells.to_vec(),
            SuitMap::from_array(snapshot.suit_stacks),
        )
    }

    // === Accessors ===

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    #[must_use]
    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    #[must_use]
    pub fn free_cells(&self) -> &[Option<Card>] {
        &self.free_cells
    }

    #[must_use]
    pub fn suit_stacks(&self) -> &SuitMap<Option<Card>> {
        &self.suit_stacks
    }

    /// Top card of a suit stack, `None` while empty.
    #[must_use]
    pub fn stack_top(&self, suit: Suit) -> Option<Card> {
        self.suit_stacks[suit]
    }

    /// Cards currently in free cells, in slot order.
    pub fn free_cell_cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.free_cells.iter().flatten().copied()
    }

    /// Top card of every non-empty column, in column order.
    #[must_use]
    pub fn get_movable_cards(&self) -> SmallVec<[Card; COLUMN_COUNT]> {
        self.columns.iter().filter_map(|c| c.last().copied()).collect()
    }

    // === Capacity ===

    /// Empty free cells plus empty columns.
    #[must_use]
    pub fn empty_cells(&self) -> usize {
        self.empty_free_cells() + self.columns.iter().filter(|c| c.is_empty()).count()
    }

    #[must_use]
    pub fn empty_free_cells(&self) -> usize {
        self.free_cells.iter().filter(|c| c.is_none()).count()
    }

    #[must_use]
    pub fn has_empty_column(&self) -> bool {
        self.first_empty_column().is_some()
    }

    fn first_empty_column(&self) -> Option<usize> {
        self.columns.iter().position(Vec::is_empty)
    }

    fn first_empty_free_cell(&self) -> Option<usize> {
        self.free_cells.iter().position(Option::is_none)
    }

    // === Lookup ===

    /// Find an exposed card by its short text.
    ///
    /// Only column tops and free cells are searched; buried cards and stacked
    /// cards are not addressable.
    #[must_use]
    pub fn find_card(&self, text: &str) -> Option<Card> {
        let card: Card = text.parse().ok()?;
        self.locate_exposed(card).map(|_| card)
    }

    /// Where `card` sits, if it is exposed.
    #[must_use]
    pub fn locate_exposed(&self, card: Card) -> Option<Location> {
        self.locate_column_top(card)
            .map(Location::Column)
            .or_else(|| self.locate_free_cell(card).map(Location::FreeCell))
    }

    #[must_use]
    pub fn is_exposed(&self, card: Card) -> bool {
        self.locate_exposed(card).is_some()
    }

    fn locate_column_top(&self, card: Card) -> Option<usize> {
        self.columns.iter().position(|c| c.last() == Some(&card))
    }

    fn locate_free_cell(&self, card: Card) -> Option<usize> {
        self.free_cells.iter().position(|c| *c == Some(card))
    }

    /// Remove and return the card at an exposed location.
    fn take(&mut self, location: Location) -> Option<Card> {
        match location {
            Location::Column(i) => self.columns[i].pop(),
            Location::FreeCell(i) => self.free_cells[i].take(),
        }
    }

    // === Transitions ===

    /// Put an exposed card onto its suit stack.
    ///
    /// The card must be the next rank of its suit (an Ace on an empty stack).
    pub fn move_to_stack(&mut self, card: Card) -> Result<(), BoardError> {
        let location = self.locate_exposed(card).ok_or(BoardError::NotExposed)?;
        if !card.is_larger_and_same_suit(self.suit_stacks[card.suit()]) {
            return Err(BoardError::NotStackable);
        }

        let card = self.take(location).ok_or(BoardError::NotExposed)?;
        self.suit_stacks[card.suit()] = Some(card);
        Ok(())
    }

    /// Move the top card of a column into the lowest-numbered empty free cell.
    pub fn move_to_free_cell(&mut self, card: Card) -> Result<(), BoardError> {
        let column = match self.locate_exposed(card) {
            Some(Location::Column(i)) => i,
            Some(Location::FreeCell(_)) => return Err(BoardError::AlreadyInFreeCell),
            None => return Err(BoardError::NotExposed),
        };
        let slot = self.first_empty_free_cell().ok_or(BoardError::FreeCellsFull)?;

        let card = self.take(Location::Column(column)).ok_or(BoardError::NotExposed)?;
        self.free_cells[slot] = Some(card);
        Ok(())
    }

    /// Move an exposed card into the lowest-numbered empty column.
    pub fn move_to_free_column(&mut self, card: Card) -> Result<(), BoardError> {
        let target = self.first_empty_column().ok_or(BoardError::NoEmptyColumn)?;
        let location = self.locate_exposed(card).ok_or(BoardError::NotExposed)?;

        let card = self.take(location).ok_or(BoardError::NotExposed)?;
        self.columns[target].push(card);
        Ok(())
    }

    /// Move an exposed card onto the top card of another column.
    ///
    /// `card_to_move` must be one rank below `destination_card` and of the
    /// other color. `destination_card` must be a column top.
    pub fn move_to_card(
        &mut self,
        card_to_move: Card,
        destination_card: Card,
    ) -> Result<(), BoardError> {
        if !card_to_move.is_smaller_and_different_color(destination_card) {
            return Err(BoardError::NotPlayable);
        }
        let target = self
            .locate_column_top(destination_card)
            .ok_or(BoardError::NotExposed)?;
        let source = self.locate_exposed(card_to_move).ok_or(BoardError::NotExposed)?;

        let card = self.take(source).ok_or(BoardError::NotExposed)?;
        self.columns[target].push(card);
        Ok(())
    }

    // === Whole-board queries ===

    /// True when every suit stack is topped by its King.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.suit_stacks.values().all(|top| top.is_some_and(Card::is_king))
    }

    /// Every card on the board: columns, then free cells, then the full run
    /// under each suit stack top.
    #[must_use]
    pub fn all_cards(&self) -> Vec<Card> {
        let mut cards: Vec<Card> = self.columns.iter().flatten().copied().collect();
        cards.extend(self.free_cell_cards());

        for (suit, top) in self.suit_stacks.iter() {
            if let Some(top) = top {
                cards.extend((ACE..=top.rank()).filter_map(|rank| Card::new(rank, suit).ok()));
            }
        }

        cards
    }

    #[must_use]
    pub fn card_count(&self) -> usize {
        let stacked: usize = self
            .suit_stacks
            .values()
            .map(|top| top.map_or(0, |c| c.rank() as usize))
            .sum();
        let celled = FREE_CELL_COUNT - self.empty_free_cells();
        self.columns.iter().map(Vec::len).sum::<usize>() + celled + stacked
    }

    /// Copy the layout out for callers.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            columns: self.columns.to_vec(),
            free_cells: self.free_cells,
            suit_stacks: self.suit_stacks.to_array(),
        }
    }
}
