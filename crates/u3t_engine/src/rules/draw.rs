//! Draw and fullness detection.

use super::win::game_winner;
use crate::board::Board;
use crate::position::{Cell, Position};
use strum::IntoEnumIterator;

/// Checks whether all 9 cells of a sub-board are occupied.
pub fn is_sub_board_full(board: &Board, sub: Position) -> bool {
    Position::iter().all(|pos| !board.is_empty(Cell::new(sub, pos)))
}

/// Checks whether the game is a draw: all 81 cells occupied and no
/// winner on the meta-board.
pub fn is_game_draw(board: &Board) -> bool {
    board.is_full() && game_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    #[test]
    fn test_empty_board_is_not_full() {
        let board = Board::new();
        assert!(!is_sub_board_full(&board, Position::TopLeft));
        assert!(!is_game_draw(&board));
    }

    #[test]
    fn test_sub_board_full() {
        let mut board = Board::new();
        for (idx, pos) in Position::ALL.iter().enumerate() {
            let player = if idx % 2 == 0 { Player::X } else { Player::O };
            board.mark(Cell::new(Position::BottomLeft, *pos), player);
        }
        assert!(is_sub_board_full(&board, Position::BottomLeft));
        assert!(!is_sub_board_full(&board, Position::BottomCenter));
    }

    #[test]
    fn test_full_board_without_winner_is_a_draw() {
        // Fill every sub-board with a lineless pattern:
        //   X X O
        //   O O X
        //   X X O
        let mut board = Board::new();
        for sub in Position::ALL {
            for pos in Position::ALL {
                let player = match pos.to_index() {
                    0 | 1 | 5 | 6 | 7 => Player::X,
                    _ => Player::O,
                };
                board.mark(Cell::new(sub, pos), player);
            }
        }
        assert!(board.is_full());
        assert!(is_game_draw(&board));
    }

    #[test]
    fn test_full_board_with_winner_is_not_a_draw() {
        // Top meta row won by X (top row of each sub-board), the rest
        // filled linelessly.
        let mut board = Board::new();
        for sub in Position::ALL {
            let won = sub.to_index() < 3;
            for pos in Position::ALL {
                let player = match (won, pos.to_index()) {
                    (true, 0 | 1 | 2 | 5 | 6) => Player::X,
                    (true, _) => Player::O,
                    (false, 0 | 1 | 5 | 6 | 7) => Player::X,
                    (false, _) => Player::O,
                };
                board.mark(Cell::new(sub, pos), player);
            }
        }
        assert!(board.is_full());
        assert_eq!(game_winner(&board), Some(Player::X));
        assert!(!is_game_draw(&board));
    }

    #[test]
    fn test_one_empty_cell_is_not_a_draw() {
        let mut board = Board::new();
        for sub in Position::ALL {
            for pos in Position::ALL {
                if sub == Position::Center && pos == Position::Center {
                    continue;
                }
                let player = match pos.to_index() {
                    0 | 1 | 5 | 6 | 7 => Player::X,
                    _ => Player::O,
                };
                board.mark(Cell::new(sub, pos), player);
            }
        }
        assert!(!board.is_full());
        assert!(!is_game_draw(&board));
    }
}
