//! Core domain types for Ultimate Tic-Tac-Toe.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Character used for this player in board dumps.
    pub fn mark(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mark())
    }
}

/// Current status of the game, derived from the board on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended with a winner on the meta-board.
    Won(Player),
    /// All 81 cells are occupied and nobody won.
    Draw,
}

impl GameStatus {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(*player),
            _ => None,
        }
    }

    /// Returns true if the game has ended.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(player) => write!(f, "Player {player} wins"),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}
