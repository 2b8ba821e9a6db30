//! Coordinates for the nested 3×3 grids.
//!
//! Ultimate Tic-Tac-Toe uses the same 3×3 coordinate space twice: once
//! to pick a sub-board on the meta-grid, and once to pick a cell inside
//! that sub-board. Both are modeled by [`Position`]; a concrete cell on
//! the 9×9 grid is a [`Cell`] pairing the two.

use serde::{Deserialize, Serialize};

/// A position on a 3×3 grid (0-8, row-major).
///
/// Serves both as a sub-board selector on the meta-grid and as a local
/// cell position inside a sub-board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (index 0)
    TopLeft,
    /// Top-center (index 1)
    TopCenter,
    /// Top-right (index 2)
    TopRight,
    /// Middle-left (index 3)
    MiddleLeft,
    /// Center (index 4)
    Center,
    /// Middle-right (index 5)
    MiddleRight,
    /// Bottom-left (index 6)
    BottomLeft,
    /// Bottom-center (index 7)
    BottomCenter,
    /// Bottom-right (index 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Converts position to grid index (0-8).
    pub fn to_index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopCenter => 1,
            Position::TopRight => 2,
            Position::MiddleLeft => 3,
            Position::Center => 4,
            Position::MiddleRight => 5,
            Position::BottomLeft => 6,
            Position::BottomCenter => 7,
            Position::BottomRight => 8,
        }
    }

    /// Creates a position from a grid index.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Position::TopLeft),
            1 => Some(Position::TopCenter),
            2 => Some(Position::TopRight),
            3 => Some(Position::MiddleLeft),
            4 => Some(Position::Center),
            5 => Some(Position::MiddleRight),
            6 => Some(Position::BottomLeft),
            7 => Some(Position::BottomCenter),
            8 => Some(Position::BottomRight),
            _ => None,
        }
    }

    /// Creates a position from (row, column), both in 0-2.
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Self::from_index(row * 3 + col)
        } else {
            None
        }
    }

    /// Row of this position (0-2).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of this position (0-2).
    pub fn column(self) -> usize {
        self.to_index() % 3
    }

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A concrete cell on the 9×9 grid: a sub-board plus a local position.
///
/// The 81 `(board, pos)` pairs map bijectively onto the 81 global
/// flat indices via `global_index = global_row * 9 + global_col`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// The sub-board on the meta-grid.
    pub board: Position,
    /// The cell inside that sub-board.
    pub pos: Position,
}

impl Cell {
    /// Creates a cell from a sub-board and a local position.
    pub fn new(board: Position, pos: Position) -> Self {
        Self { board, pos }
    }

    /// Row on the full 9×9 grid (0-8).
    pub fn global_row(self) -> usize {
        self.board.row() * 3 + self.pos.row()
    }

    /// Column on the full 9×9 grid (0-8).
    pub fn global_col(self) -> usize {
        self.board.column() * 3 + self.pos.column()
    }

    /// Flat index on the full 9×9 grid (0-80), row-major.
    pub fn global_index(self) -> usize {
        self.global_row() * 9 + self.global_col()
    }

    /// Creates a cell from global (row, column) on the 9×9 grid.
    pub fn from_global(row: usize, col: usize) -> Option<Self> {
        if row >= 9 || col >= 9 {
            return None;
        }
        let board = Position::from_row_col(row / 3, col / 3)?;
        let pos = Position::from_row_col(row % 3, col % 3)?;
        Some(Self { board, pos })
    }

    /// Creates a cell from a flat global index (0-80).
    pub fn from_global_index(index: usize) -> Option<Self> {
        if index >= 81 {
            return None;
        }
        Self::from_global(index / 9, index % 9)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "board {}, cell {}", self.board.to_index(), self.pos.to_index())
    }
}
