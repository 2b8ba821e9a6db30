//! The Ultimate Tic-Tac-Toe state machine.

use crate::board::Board;
use crate::position::{Cell, Position};
use crate::rules;
use crate::types::{GameStatus, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Error returned when a move attempt is illegal.
///
/// This is the engine's only recoverable failure mode; a failed
/// [`GameState::apply_move`] leaves the state untouched and the caller
/// simply picks a different move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The previous move forces play in a different sub-board.
    #[display("Play is forced in the {_0} sub-board")]
    WrongSubBoard(Position),

    /// The target cell is already occupied.
    #[display("{_0} is already occupied")]
    CellOccupied(Cell),
}

impl std::error::Error for MoveError {}

/// Complete game state.
///
/// Holds the 81-cell grid as two bitmasks, the sub-board the next move
/// is forced into, and whose turn it is. [`GameState::apply_move`] is
/// the sole mutator; every other operation is a pure query.
///
/// The engine does not lock out moves once the game is decided —
/// callers check [`GameState::status`] after each successful move and
/// stop playing on `Won`/`Draw`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    /// Sub-board the next move must land in; `None` means any.
    active_board: Option<Position>,
    to_move: Player,
}

impl GameState {
    /// Creates a new game: empty board, free choice of sub-board,
    /// X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            active_board: None,
            to_move: Player::X,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the sub-board the next move is forced into, or `None`
    /// when the mover may choose any open sub-board.
    pub fn active_board(&self) -> Option<Position> {
        self.active_board
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Checks whether a cell is unoccupied.
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.board.is_empty(cell)
    }

    /// Attempts to place the current player's mark at `pos` inside
    /// `board`.
    ///
    /// On success the mover's bit is set, the opponent is routed to the
    /// sub-board mirroring `pos` (or freed to choose when that
    /// sub-board is already won or full), and the turn flips. The
    /// operation is atomic: on error nothing changes.
    ///
    /// # Errors
    ///
    /// - [`MoveError::WrongSubBoard`] if a forced sub-board is in
    ///   effect and `board` is not it.
    /// - [`MoveError::CellOccupied`] if the target cell is taken.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn apply_move(&mut self, board: Position, pos: Position) -> Result<(), MoveError> {
        if let Some(forced) = self.active_board {
            if forced != board {
                return Err(MoveError::WrongSubBoard(forced));
            }
        }
        let cell = Cell::new(board, pos);
        if !self.board.is_empty(cell) {
            return Err(MoveError::CellOccupied(cell));
        }

        self.board.mark(cell, self.to_move);

        // The landing cell's local position names the opponent's
        // sub-board. A decided destination frees the choice instead.
        self.active_board = Some(pos);
        if rules::is_sub_board_won(&self.board, pos) || rules::is_sub_board_full(&self.board, pos)
        {
            self.active_board = None;
        }
        self.to_move = self.to_move.opponent();

        debug!(%cell, next_board = ?self.active_board, "move applied");
        Ok(())
    }

    /// Returns the winner of a sub-board, if any.
    pub fn sub_board_winner(&self, board: Position) -> Option<Player> {
        rules::sub_board_winner(&self.board, board)
    }

    /// Checks whether either player has won a sub-board.
    pub fn is_sub_board_won(&self, board: Position) -> bool {
        rules::is_sub_board_won(&self.board, board)
    }

    /// Checks whether all 9 cells of a sub-board are occupied.
    pub fn is_sub_board_full(&self, board: Position) -> bool {
        rules::is_sub_board_full(&self.board, board)
    }

    /// Returns the winner of the whole game, if any.
    pub fn game_winner(&self) -> Option<Player> {
        rules::game_winner(&self.board)
    }

    /// Checks whether either player has won the whole game.
    pub fn is_game_won(&self) -> bool {
        rules::is_game_won(&self.board)
    }

    /// Checks whether the game is a draw (board full, nobody won).
    pub fn is_game_draw(&self) -> bool {
        rules::is_game_draw(&self.board)
    }

    /// Derives the current status from the board.
    pub fn status(&self) -> GameStatus {
        if let Some(winner) = self.game_winner() {
            GameStatus::Won(winner)
        } else if self.is_game_draw() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GameState {
    /// Board dump plus forced-board and turn lines.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.board)?;
        match self.active_board {
            Some(board) => writeln!(f, "Next move must be in the {board} sub-board")?,
            None => writeln!(f, "Next player can choose any board")?,
        }
        writeln!(f, "{}'s turn", self.to_move)
    }
}
