//! Win detection for sub-boards and the meta-board.

use crate::board::Board;
use crate::position::Position;
use crate::types::Player;
use strum::IntoEnumIterator;

/// The eight 3-in-a-row lines of a 3×3 grid as 9-bit masks
/// (3 rows, 3 columns, 2 diagonals), bit `i` = position `i`.
const WIN_LINES: [u16; 8] = [
    0b000_000_111, // top row
    0b000_111_000, // middle row
    0b111_000_000, // bottom row
    0b001_001_001, // left column
    0b010_010_010, // center column
    0b100_100_100, // right column
    0b100_010_001, // main diagonal
    0b001_010_100, // anti-diagonal
];

/// Checks whether a 9-bit occupancy pattern contains a full line.
pub fn pattern_wins(pattern: u16) -> bool {
    WIN_LINES.iter().any(|&line| pattern & line == line)
}

/// Returns the winner of a sub-board, if any.
///
/// Both players cannot satisfy a line in any state reachable through
/// [`crate::GameState::apply_move`], since a sub-board stops routing
/// moves once decided; X is checked first regardless.
pub fn sub_board_winner(board: &Board, sub: Position) -> Option<Player> {
    if pattern_wins(board.sub_board_pattern(Player::X, sub)) {
        Some(Player::X)
    } else if pattern_wins(board.sub_board_pattern(Player::O, sub)) {
        Some(Player::O)
    } else {
        None
    }
}

/// Checks whether either player has won a sub-board.
pub fn is_sub_board_won(board: &Board, sub: Position) -> bool {
    sub_board_winner(board, sub).is_some()
}

/// 9-bit pattern over the meta-grid: bit `b` set iff `player` won
/// sub-board `b`.
fn meta_pattern(board: &Board, player: Player) -> u16 {
    let mut pattern = 0u16;
    for sub in Position::iter() {
        if sub_board_winner(board, sub) == Some(player) {
            pattern |= 1 << sub.to_index();
        }
    }
    pattern
}

/// Returns the winner of the whole game, if any.
///
/// The nine sub-boards are treated as one meta tic-tac-toe board and
/// tested against the same eight lines.
pub fn game_winner(board: &Board) -> Option<Player> {
    if pattern_wins(meta_pattern(board, Player::X)) {
        Some(Player::X)
    } else if pattern_wins(meta_pattern(board, Player::O)) {
        Some(Player::O)
    } else {
        None
    }
}

/// Checks whether either player has won the whole game.
pub fn is_game_won(board: &Board) -> bool {
    game_winner(board).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Cell;

    #[test]
    fn test_no_winner_empty_pattern() {
        assert!(!pattern_wins(0));
        assert_eq!(sub_board_winner(&Board::new(), Position::Center), None);
    }

    #[test]
    fn test_every_line_wins() {
        for line in WIN_LINES {
            assert!(pattern_wins(line));
        }
    }

    #[test]
    fn test_two_in_a_row_is_not_a_win() {
        assert!(!pattern_wins(0b011));
        assert!(!pattern_wins(0b100_010_000));
    }

    #[test]
    fn test_sub_board_winner_column() {
        let mut board = Board::new();
        for pos in [Position::TopCenter, Position::Center, Position::BottomCenter] {
            board.mark(Cell::new(Position::TopRight, pos), Player::O);
        }
        assert_eq!(sub_board_winner(&board, Position::TopRight), Some(Player::O));
        assert!(is_sub_board_won(&board, Position::TopRight));
        assert_eq!(sub_board_winner(&board, Position::TopLeft), None);
    }

    #[test]
    fn test_meta_win_middle_row() {
        let mut board = Board::new();
        for sub in [Position::MiddleLeft, Position::Center, Position::MiddleRight] {
            for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
                board.mark(Cell::new(sub, pos), Player::X);
            }
        }
        assert_eq!(game_winner(&board), Some(Player::X));
        assert!(is_game_won(&board));
    }

    #[test]
    fn test_won_sub_boards_off_a_line_do_not_win_the_game() {
        let mut board = Board::new();
        // X wins sub-boards 0 and 5 only, which share no meta line.
        for sub in [Position::TopLeft, Position::MiddleRight] {
            for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
                board.mark(Cell::new(sub, pos), Player::X);
            }
        }
        assert_eq!(game_winner(&board), None);
    }
}
