use std::fmt::{self, Display, Write};
use std::ops::Index;

use itertools::iproduct;
use smallvec::SmallVec;
use thiserror::Error;

use crate::action::Action;

/// A zero-based (column, row) board coordinate.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct Loc {
    pub x: usize,
    pub y: usize,
}

impl Loc {
    pub fn new(x: usize, y: usize) -> Loc {
        Loc { x, y }
    }

    pub fn manhattan(self, other: Loc) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl Display for Loc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("board size must be positive")]
    ZeroSize,
    #[error("goal layout needs an even size of at least 2, got {0}")]
    GoalSize(usize),
    #[error("malformed board text: {0}")]
    Parse(String),
}

/// At most this many towers fit on a board; later insertions are dropped.
pub const MAX_TOWERS: usize = 4;

const TOWER: char = 'T';
const EMPTY: char = '-';

/// A quadratic board of squares, each either holding a tower or empty.
///
/// Boards are value objects: equality and hashing are structural, and every
/// transition produces a fresh board, so a search frontier can hold one
/// without it changing underneath.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Board {
    size: usize,
    squares: Vec<bool>,
}

impl Board {
    /// Creates an empty `size` x `size` board.
    pub fn new(size: usize) -> Result<Board, BoardError> {
        if size == 0 {
            return Err(BoardError::ZeroSize);
        }
        Ok(Board {
            size,
            squares: vec![false; size * size],
        })
    }

    /// The canonical starting position: one tower in each corner.
    pub fn with_corner_towers(size: usize) -> Result<Board, BoardError> {
        let mut board = Board::new(size)?;
        board.add_tower(Loc::new(0, 0));
        board.add_tower(Loc::new(size - 1, 0));
        board.add_tower(Loc::new(0, size - 1));
        board.add_tower(Loc::new(size - 1, size - 1));
        Ok(board)
    }

    /// The goal layout: the four center squares occupied. Only defined for
    /// even sizes, where a unique center block exists.
    pub fn goal(size: usize) -> Result<Board, BoardError> {
        if size < 2 || size % 2 != 0 {
            return Err(BoardError::GoalSize(size));
        }
        let mut board = Board::new(size)?;
        let lo = size / 2 - 1;
        let hi = size / 2;
        board.add_tower(Loc::new(lo, lo));
        board.add_tower(Loc::new(lo, hi));
        board.add_tower(Loc::new(hi, lo));
        board.add_tower(Loc::new(hi, hi));
        Ok(board)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn tower_at(&self, loc: Loc) -> bool {
        self[loc]
    }

    pub fn tower_count(&self) -> usize {
        self.squares.iter().filter(|occupied| **occupied).count()
    }

    /// Occupies `loc` while the board holds fewer than [`MAX_TOWERS`] towers;
    /// past the cap this is a silent no-op. Callers that need confirmation
    /// check occupancy afterward.
    pub fn add_tower(&mut self, loc: Loc) {
        if self.tower_count() < MAX_TOWERS {
            let ix = self.square_index(loc);
            self.squares[ix] = true;
        }
    }

    /// Clears `loc`; clearing an empty square is a no-op.
    pub fn remove_tower(&mut self, loc: Loc) {
        let ix = self.square_index(loc);
        self.squares[ix] = false;
    }

    /// Complete-state move: empties the whole column of `loc`, then occupies
    /// `loc`. Models "exactly one tower per column, moved vertically".
    pub fn slide_to(&mut self, loc: Loc) {
        for y in 0..self.size {
            self.squares[loc.x * self.size + y] = false;
        }
        let ix = self.square_index(loc);
        self.squares[ix] = true;
    }

    /// Incremental move: applied only when `from` is occupied and `to` is
    /// empty; illegal moves are silently dropped.
    pub fn move_tower(&mut self, from: Loc, to: Loc) {
        if self.tower_at(from) && !self.tower_at(to) {
            self.remove_tower(from);
            self.add_tower(to);
        }
    }

    /// Occupied squares in column-major, then row-major scan order. Downstream
    /// code pairs these positionally with goal layouts, so the ordering is
    /// part of the contract.
    pub fn occupied_positions(&self) -> SmallVec<[Loc; MAX_TOWERS]> {
        iproduct!(0..self.size, 0..self.size)
            .filter(|&(x, y)| self.squares[x * self.size + y])
            .map(|(x, y)| Loc::new(x, y))
            .collect()
    }

    // same-row and same-column towers other than the square itself
    pub fn attack_count(&self, loc: Loc) -> usize {
        self.occupied_positions()
            .iter()
            .filter(|pos| **pos != loc && (pos.x == loc.x || pos.y == loc.y))
            .count()
    }

    pub fn is_under_attack(&self, loc: Loc) -> bool {
        self.attack_count(loc) > 0
    }

    fn square_index(&self, loc: Loc) -> usize {
        loc.x * self.size + loc.y
    }
}

impl Index<Loc> for Board {
    type Output = bool;

    fn index(&self, loc: Loc) -> &Self::Output {
        &self.squares[loc.x * self.size + loc.y]
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for y in 0..self.size {
            if !first {
                f.write_char('\n')?;
            } else {
                first = false;
            }

            for x in 0..self.size {
                f.write_char(if self.squares[x * self.size + y] {
                    TOWER
                } else {
                    EMPTY
                })?;
            }
        }

        Ok(())
    }
}

/// Parses the textual format produced by [`Board`]'s `Display`: one line per
/// row, `T` for a tower and `-` for an empty square.
pub fn parse_board(text: &str) -> Result<Board, BoardError> {
    let rows: Vec<&str> = text.trim().lines().map(str::trim).collect();
    let mut board = Board::new(rows.len())?;

    for (y, row) in rows.iter().enumerate() {
        if row.chars().count() != rows.len() {
            return Err(BoardError::Parse(format!(
                "row {} has {} squares, expected {}",
                y,
                row.chars().count(),
                rows.len()
            )));
        }
        for (x, square) in row.chars().enumerate() {
            match square {
                TOWER => board.add_tower(Loc::new(x, y)),
                EMPTY => {}
                other => {
                    return Err(BoardError::Parse(format!("unexpected square '{other}'")));
                }
            }
        }
    }

    Ok(board)
}

/// An ordered slot array of tower positions. The slot index is a stable piece
/// identity that survives moves, which the plain occupancy grid cannot offer;
/// identity-aware heuristics search over this representation instead.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Towers {
    size: usize,
    slots: SmallVec<[Loc; MAX_TOWERS]>,
}

impl Towers {
    /// Fixes piece identities in the board's scan order.
    pub fn from_board(board: &Board) -> Towers {
        Towers {
            size: board.size(),
            slots: board.occupied_positions(),
        }
    }

    pub fn slots(&self) -> &[Loc] {
        &self.slots
    }

    /// Applies a move without renumbering: the slot holding the source keeps
    /// its index at the destination. Illegal or non-move actions yield an
    /// unchanged copy.
    pub fn apply(&self, action: &Action) -> Towers {
        let mut next = self.clone();
        if let Action::Move { from, to } = *action {
            if !next.slots.contains(&to) {
                if let Some(slot) = next.slots.iter_mut().find(|slot| **slot == from) {
                    *slot = to;
                }
            }
        }
        next
    }

    /// Projects back onto a plain occupancy grid.
    pub fn board(&self) -> Board {
        let mut board = Board {
            size: self.size,
            squares: vec![false; self.size * self.size],
        };
        for loc in &self.slots {
            board.add_tower(*loc);
        }
        board
    }
}
