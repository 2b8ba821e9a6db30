//! Win and draw detection over bitmask boards.
//!
//! Both nesting levels use the same eight 3-in-a-row line masks: a
//! sub-board is judged on its 9-bit occupancy patterns, the whole game
//! on the 9-bit meta-pattern of sub-board winners.

mod draw;
mod win;

pub use draw::{is_game_draw, is_sub_board_full};
pub use win::{game_winner, is_game_won, is_sub_board_won, pattern_wins, sub_board_winner};
