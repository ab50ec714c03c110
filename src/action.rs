use std::fmt::{self, Display};

use crate::board::Loc;

/// The four directions a tower can travel in.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

pub const DIRECTIONS: [Direction; 4] = [
    Direction::Left,
    Direction::Right,
    Direction::Up,
    Direction::Down,
];

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        })
    }
}

/// A proposed board transition.
///
/// `Move` is the only action the mature formulation generates and always
/// carries its source square; `Place` and `Remove` exist for the incremental
/// formulation and for external callers that edit a board directly.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Action {
    Place(Loc),
    Remove(Loc),
    Move { from: Loc, to: Loc },
}

impl Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Place(loc) => write!(f, "place {loc}"),
            Action::Remove(loc) => write!(f, "remove {loc}"),
            Action::Move { from, to } => write!(f, "move {from} -> {to}"),
        }
    }
}
