//! Ultimate Tic-Tac-Toe engine.
//!
//! A meta-game of nine 3×3 tic-tac-toe sub-boards arranged on a 3×3
//! grid. Each move lands in one sub-board and forces the opponent into
//! the sub-board mirroring the landing cell's local position; winning
//! three sub-boards in a row wins the game.
//!
//! The whole 9×9 grid lives in two 81-bit masks, one per player —
//! see [`Board`]. [`GameState`] layers move legality, routing, and
//! win/draw detection on top. The engine is synchronous, allocation-free
//! on the hot path, and has a single recoverable failure mode
//! ([`MoveError`]).
//!
//! # Example
//!
//! ```
//! use u3t_engine::{GameState, GameStatus, Player, Position};
//!
//! let mut game = GameState::new();
//! game.apply_move(Position::TopLeft, Position::Center)?;
//! assert_eq!(game.active_board(), Some(Position::Center));
//! assert_eq!(game.to_move(), Player::O);
//! assert_eq!(game.status(), GameStatus::InProgress);
//! # Ok::<(), u3t_engine::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod game;
mod position;
mod types;

pub mod rules;

pub use board::Board;
pub use game::{GameState, MoveError};
pub use position::{Cell, Position};
pub use types::{GameStatus, Player};
