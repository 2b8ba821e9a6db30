//! Bitmask representation of the 9×9 grid.
//!
//! The whole board lives in two 81-bit masks, one per player, indexed
//! by the global flat index of a cell. No per-cell objects exist; every
//! query is a handful of bitwise operations.

use crate::position::{Cell, Position};
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// Mask with all 81 board bits set.
const ALL_CELLS: u128 = (1u128 << 81) - 1;

/// The 9×9 grid as two disjoint bitmasks.
///
/// Invariant: `x_mask & o_mask == 0` — a cell is owned by at most one
/// player. [`Board::mark`] is unchecked with respect to game rules;
/// [`crate::GameState::apply_move`] is the validated path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    x: u128,
    o: u128,
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self { x: 0, o: 0 }
    }

    /// Returns the bitmask of X's cells.
    pub fn x_mask(&self) -> u128 {
        self.x
    }

    /// Returns the bitmask of O's cells.
    pub fn o_mask(&self) -> u128 {
        self.o
    }

    /// Checks whether a cell is unoccupied by either player.
    pub fn is_empty(&self, cell: Cell) -> bool {
        let mask = 1u128 << cell.global_index();
        (self.x | self.o) & mask == 0
    }

    /// Returns the owner of a cell, if any.
    pub fn player_at(&self, cell: Cell) -> Option<Player> {
        let mask = 1u128 << cell.global_index();
        if self.x & mask != 0 {
            Some(Player::X)
        } else if self.o & mask != 0 {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Sets a player's bit at a cell.
    ///
    /// Does not validate game rules (routing, turn order);
    /// [`crate::GameState::apply_move`] is the validated path.
    ///
    /// # Panics
    ///
    /// Panics if the cell is already occupied — overwriting a mark
    /// would break the disjointness invariant.
    pub fn mark(&mut self, cell: Cell, player: Player) {
        assert!(self.is_empty(cell), "marking occupied cell {cell}");
        let mask = 1u128 << cell.global_index();
        match player {
            Player::X => self.x |= mask,
            Player::O => self.o |= mask,
        }
    }

    /// 9-bit occupancy pattern of a player over one sub-board.
    ///
    /// Bit `i` is set iff local position `i` of `board` is occupied by
    /// `player`. The sub-board's cells are not contiguous in the global
    /// row-major masks, so this gathers them bit by bit.
    pub fn sub_board_pattern(&self, player: Player, board: Position) -> u16 {
        let mask = match player {
            Player::X => self.x,
            Player::O => self.o,
        };
        let mut pattern = 0u16;
        for pos in Position::ALL {
            let bit = 1u128 << Cell::new(board, pos).global_index();
            if mask & bit != 0 {
                pattern |= 1 << pos.to_index();
            }
        }
        pattern
    }

    /// Checks whether all 81 cells are occupied.
    pub fn is_full(&self) -> bool {
        (self.x | self.o) == ALL_CELLS
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    /// Renders the grid as 9 rows of `.`/`X`/`O` with dividers every
    /// third row and column. Debug convenience, not a wire format.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..9 {
            if row > 0 && row % 3 == 0 {
                writeln!(f, "---+---+---")?;
            }
            for col in 0..9 {
                if col > 0 && col % 3 == 0 {
                    write!(f, "|")?;
                }
                let cell = Cell::from_global(row, col).expect("rows and cols stay below 9");
                let mark = match self.player_at(cell) {
                    Some(player) => player.mark(),
                    None => '.',
                };
                write!(f, "{mark}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
