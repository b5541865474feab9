//! The Spider tableau: ten columns, a stock and the completed foundations.
//!
//! `Game` owns every rule of play. Each mutator either applies completely
//! or returns `false` and leaves the game untouched, so the caller can
//! snapshot before a command and trust the snapshot if it is rejected.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::mode::{GameMode, RUNS_PER_DECK};
use crate::cards::{Card, Suit, ACE, KING};
use crate::core::{Action, GameRng};
use crate::rules::{GameResult, RulesEngine};

/// Number of tableau columns.
pub const COLUMN_COUNT: usize = 10;

/// Cards in a completed run (King down to Ace).
pub const SEQUENCE_LENGTH: usize = 13;

/// Cards in every deck.
pub const DECK_SIZE: usize = RUNS_PER_DECK * SEQUENCE_LENGTH;

/// Score lost per deal from the stock.
pub const DEAL_PENALTY: u32 = 5;

/// Score gained per completed run.
pub const SEQUENCE_BONUS: u32 = 100;

/// A completed King..Ace run of one suit.
pub type Foundation = SmallVec<[Card; SEQUENCE_LENGTH]>;

/// Cards dealt to a column at the start: the first four get one extra.
const fn initial_column_size(column: usize) -> usize {
    if column < 4 {
        6
    } else {
        5
    }
}

/// One game of Spider.
///
/// ## Example
///
/// ```
/// use spider_engine::game::{Game, GameMode};
///
/// let mut game = Game::with_seed(GameMode::SingleSuit, 7);
/// assert_eq!(game.stock().len(), 50);
///
/// assert!(game.deal_row());
/// assert_eq!(game.stock().len(), 40);
/// assert_eq!(game.score(), 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    mode: GameMode,

    /// Shuffle seed of this deal (0 for hand-built layouts).
    seed: u64,

    /// Index 0 is the bottom card, the last card is exposed.
    columns: [Vec<Card>; COLUMN_COUNT],

    /// Face-down; deals take from the end.
    stock: Vec<Card>,

    /// Completed runs in completion order.
    foundations: Vec<Foundation>,

    score: u32,
    moves: u32,
    deals: u32,

    /// Driven by the presentation clock, kept here for snapshots.
    elapsed_seconds: u64,
}

impl Game {
    /// Shuffle and deal a new game with a random seed.
    #[must_use]
    pub fn new(mode: GameMode) -> Self {
        Self::deal_with(mode, GameRng::from_entropy())
    }

    /// Shuffle and deal a reproducible game.
    #[must_use]
    pub fn with_seed(mode: GameMode, seed: u64) -> Self {
        Self::deal_with(mode, GameRng::new(seed))
    }

    fn deal_with(mode: GameMode, mut rng: GameRng) -> Self {
        let mut deck = mode.build_deck();
        rng.shuffle(&mut deck);

        let mut columns: [Vec<Card>; COLUMN_COUNT] = std::array::from_fn(|_| Vec::new());
        for (index, column) in columns.iter_mut().enumerate() {
            let size = initial_column_size(index);
            column.extend(deck.drain(deck.len() - size..).rev());
            if let Some(top) = column.last_mut() {
                top.face_up = true;
            }
        }

        log::debug!("dealt {} game with seed {}", mode, rng.seed());

        Self {
            mode,
            seed: rng.seed(),
            columns,
            stock: deck,
            foundations: Vec::new(),
            score: 0,
            moves: 0,
            deals: 0,
            elapsed_seconds: 0,
        }
    }

    /// Build a game from an explicit layout.
    ///
    /// Counters start at zero and the seed is 0. No rule is enforced on the
    /// layout; use [`Game::is_consistent`] to check a full 104-card position.
    #[must_use]
    pub fn from_layout(
        mode: GameMode,
        columns: [Vec<Card>; COLUMN_COUNT],
        stock: Vec<Card>,
        foundations: Vec<Foundation>,
    ) -> Self {
        Self {
            mode,
            seed: 0,
            columns,
            stock,
            foundations,
            score: 0,
            moves: 0,
            deals: 0,
            elapsed_seconds: 0,
        }
    }

    /// Replace this game with a fresh deal in `mode`.
    pub fn new_game(&mut self, mode: GameMode) {
        *self = Self::new(mode);
    }

    /// Deal the same cards again from the start.
    pub fn restart(&mut self) {
        *self = Self::with_seed(self.mode, self.seed);
    }

    // === Queries ===

    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn columns(&self) -> &[Vec<Card>; COLUMN_COUNT] {
        &self.columns
    }

    /// Cards of one column, bottom first. Empty for an unknown index.
    #[must_use]
    pub fn column(&self, index: usize) -> &[Card] {
        self.columns.get(index).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn stock(&self) -> &[Card] {
        &self.stock
    }

    #[must_use]
    pub fn foundations(&self) -> &[Foundation] {
        &self.foundations
    }

    #[must_use]
    pub fn completed_sequences(&self) -> usize {
        self.foundations.len()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    #[must_use]
    pub fn deals(&self) -> u32 {
        self.deals
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    pub fn set_elapsed_seconds(&mut self, seconds: u64) {
        self.elapsed_seconds = seconds;
    }

    /// Advance the clock by one second.
    pub fn tick(&mut self) {
        self.elapsed_seconds = self.elapsed_seconds.saturating_add(1);
    }

    /// Cards in columns, stock and foundations together.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.columns.iter().map(Vec::len).sum::<usize>()
            + self.stock.len()
            + self.foundations.iter().map(|f| f.len()).sum::<usize>()
    }

    #[must_use]
    pub fn is_game_won(&self) -> bool {
        self.completed_sequences() == RUNS_PER_DECK
    }

    // === Dealing ===

    #[must_use]
    pub fn can_deal_row(&self) -> bool {
        self.stock.len() >= COLUMN_COUNT
    }

    /// Deal one face-up card from the stock onto every column.
    ///
    /// Costs [`DEAL_PENALTY`] points (never below zero). A dealt card that
    /// finishes a King..Ace run completes it at once.
    pub fn deal_row(&mut self) -> bool {
        if !self.can_deal_row() {
            log::debug!("deal rejected: {} cards left in stock", self.stock.len());
            return false;
        }

        for column in &mut self.columns {
            // can_deal_row guarantees a card per column
            if let Some(mut card) = self.stock.pop() {
                card.face_up = true;
                column.push(card);
            }
        }
        self.score = self.score.saturating_sub(DEAL_PENALTY);
        self.deals = self.deals.saturating_add(1);

        for index in 0..COLUMN_COUNT {
            self.check_complete_sequence(index);
        }
        true
    }

    // === Moving runs ===

    /// Can the cards from `index` to the top of `column` be picked up?
    ///
    /// They must all be face-up, one suit, and descend by one rank.
    #[must_use]
    pub fn can_start_drag(&self, column: usize, index: usize) -> bool {
        let Some(cards) = self.columns.get(column) else {
            return false;
        };
        match cards.get(index) {
            Some(start) if start.face_up => cards[index..]
                .windows(2)
                .all(|pair| pair[0].continues_run(&pair[1])),
            _ => false,
        }
    }

    /// Can the run starting at `start` in `from` be dropped on `to`?
    ///
    /// Any run fits an empty column. Otherwise the exposed target card must
    /// be face-up and one rank higher than the run's first card; its suit
    /// does not matter.
    #[must_use]
    pub fn can_drop(&self, from: usize, start: usize, to: usize) -> bool {
        if from == to || to >= COLUMN_COUNT || !self.can_start_drag(from, start) {
            return false;
        }
        let moving = self.columns[from][start];
        match self.columns[to].last() {
            None => true,
            Some(top) => top.face_up && top.rank() == moving.rank() + 1,
        }
    }

    /// Move a run from one column to another.
    ///
    /// The run keeps its order. The newly exposed source card is turned
    /// face-up and the target column is checked for a completed run.
    pub fn move_sequence(&mut self, from: usize, start: usize, to: usize) -> bool {
        if !self.can_drop(from, start, to) {
            log::debug!("move rejected: column {from} card {start} -> column {to}");
            return false;
        }

        let moving = self.columns[from].split_off(start);
        self.columns[to].extend(moving);
        Self::expose_top(&mut self.columns[from]);
        self.check_complete_sequence(to);
        self.moves = self.moves.saturating_add(1);
        true
    }

    /// The run a drag from `start` would carry, or nothing if the drag is
    /// not allowed.
    #[must_use]
    pub fn movable_sequence(&self, column: usize, start: usize) -> &[Card] {
        if self.can_start_drag(column, start) {
            &self.columns[column][start..]
        } else {
            &[]
        }
    }

    /// Collect a finished King..Ace run from the top of `column`.
    ///
    /// Only the last 13 cards are examined, so at most one run completes.
    fn check_complete_sequence(&mut self, column: usize) -> bool {
        let cards = &mut self.columns[column];
        if cards.len() < SEQUENCE_LENGTH {
            return false;
        }
        let start = cards.len() - SEQUENCE_LENGTH;
        if !is_complete_run(&cards[start..]) {
            return false;
        }

        let run: Foundation = cards.drain(start..).collect();
        Self::expose_top(cards);
        log::debug!(
            "column {column} completed a {:?} run ({} of {RUNS_PER_DECK})",
            run[0].suit(),
            self.foundations.len() + 1
        );
        self.foundations.push(run);
        self.score = self.score.saturating_add(SEQUENCE_BONUS);
        true
    }

    fn expose_top(column: &mut [Card]) {
        if let Some(top) = column.last_mut() {
            top.face_up = true;
        }
    }

    // === Snapshots ===

    /// Independent deep copy, for undo and saving.
    #[must_use]
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Take over every field of `other`.
    pub fn restore_from(&mut self, other: Game) {
        *self = other;
    }

    /// Does this position hold exactly the mode's deck in a legal shape?
    ///
    /// Checks the card census (every suit/rank exactly as often as the deck
    /// has it), that every foundation is a King..Ace run of one suit, and
    /// that every non-empty column shows its top card. Used to reject
    /// damaged save files that still decode.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        if self.card_count() != DECK_SIZE || self.foundations.len() > RUNS_PER_DECK {
            return false;
        }
        if !self.foundations.iter().all(|run| is_complete_run(run)) {
            return false;
        }
        if self
            .columns
            .iter()
            .any(|column| column.last().is_some_and(|top| !top.face_up))
        {
            return false;
        }

        let mut census = [[0usize; KING as usize + 1]; Suit::ALL.len()];
        let all_cards = self
            .columns
            .iter()
            .flatten()
            .chain(&self.stock)
            .chain(self.foundations.iter().flatten());
        for card in all_cards {
            if !card.has_valid_rank() || !self.mode.uses_suit(card.suit()) {
                return false;
            }
            census[card.suit() as usize][card.rank() as usize] += 1;
        }

        let copies = self.mode.copies_per_suit();
        self.mode
            .suits()
            .iter()
            .all(|&suit| (ACE..=KING).all(|rank| census[suit as usize][rank as usize] == copies))
    }
}

impl RulesEngine for Game {
    fn legal_actions(&self) -> Vec<Action> {
        let mut actions = Vec::new();

        for from in 0..COLUMN_COUNT {
            for start in 0..self.columns[from].len() {
                if !self.can_start_drag(from, start) {
                    continue;
                }
                actions.extend(
                    (0..COLUMN_COUNT)
                        .filter(|&to| self.can_drop(from, start, to))
                        .map(|to| Action::move_run(from, start, to)),
                );
            }
        }

        if self.can_deal_row() {
            actions.push(Action::Deal);
        }
        actions
    }

    fn apply_action(&mut self, action: &Action) -> bool {
        match *action {
            Action::Deal => self.deal_row(),
            Action::Move { from, start, to } => self.move_sequence(from, start, to),
        }
    }

    fn is_terminal(&self) -> Option<GameResult> {
        if self.is_game_won() {
            Some(GameResult::Won)
        } else if self.legal_actions().is_empty() {
            Some(GameResult::Stalled)
        } else {
            None
        }
    }

    fn is_legal(&self, action: &Action) -> bool {
        match *action {
            Action::Deal => self.can_deal_row(),
            Action::Move { from, start, to } => self.can_drop(from, start, to),
        }
    }
}

/// Thirteen face-up cards of one suit from King down to Ace.
fn is_complete_run(cards: &[Card]) -> bool {
    cards.len() == SEQUENCE_LENGTH
        && cards[0].face_up
        && cards[0].rank() == KING
        && cards.windows(2).all(|pair| pair[0].continues_run(&pair[1]))
}
