use smallvec::SmallVec;

use crate::action::{Action, Direction, DIRECTIONS};
use crate::board::{Board, Loc, MAX_TOWERS};

// squares from `from` toward the board edge, nearest first
#[auto_enums::auto_enum(Iterator)]
fn ray(from: Loc, dir: Direction, size: usize) -> impl Iterator<Item = Loc> {
    match dir {
        Direction::Left => (0..from.x).rev().map(move |x| Loc::new(x, from.y)),
        Direction::Right => (from.x + 1..size).map(move |x| Loc::new(x, from.y)),
        Direction::Up => (0..from.y).rev().map(move |y| Loc::new(from.x, y)),
        Direction::Down => (from.y + 1..size).map(move |y| Loc::new(from.x, y)),
    }
}

/// How a tower travels in one action.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveRule {
    /// Slide in a straight line until the board edge, or until the square
    /// before another tower.
    Slide,
    /// Step one square into an empty in-bounds neighbor.
    Step,
}

/// Action-generation configuration.
///
/// With `keep_self_moves` unset (the default), a tower already against a wall
/// or another tower in some direction produces no action for that direction,
/// so every emitted move has a distinct, empty destination. Setting it emits
/// those degenerate moves with destination equal to the source instead.
#[derive(Clone, Copy, Debug)]
pub struct MoveGen {
    pub rule: MoveRule,
    pub keep_self_moves: bool,
}

impl Default for MoveGen {
    fn default() -> Self {
        MoveGen {
            rule: MoveRule::Slide,
            keep_self_moves: false,
        }
    }
}

impl MoveGen {
    pub fn slide() -> MoveGen {
        MoveGen::default()
    }

    pub fn step() -> MoveGen {
        MoveGen {
            rule: MoveRule::Step,
            ..MoveGen::default()
        }
    }

    /// Enumerates the legal actions on `board`: per tower, at most one move
    /// in each of the four directions.
    pub fn actions(&self, board: &Board) -> SmallVec<[Action; MAX_TOWERS * 4]> {
        let mut out = SmallVec::new();

        for from in board.occupied_positions() {
            for dir in DIRECTIONS {
                match self.rule {
                    MoveRule::Slide => {
                        let mut to = from;
                        for square in ray(from, dir, board.size()) {
                            if board.tower_at(square) {
                                break;
                            }
                            to = square;
                        }
                        if to != from || self.keep_self_moves {
                            out.push(Action::Move { from, to });
                        }
                    }
                    MoveRule::Step => {
                        if let Some(to) = ray(from, dir, board.size()).next() {
                            if !board.tower_at(to) {
                                out.push(Action::Move { from, to });
                            }
                        }
                    }
                }
            }
        }

        out
    }
}

/// The transition function: a fresh board with the action's effect applied.
///
/// Only `Move` has an effect here (itself dropped when illegal); any other
/// action resolves to the identity, so callers always get a well-formed
/// successor and never an error.
pub fn result(board: &Board, action: &Action) -> Board {
    let mut next = board.clone();
    match *action {
        Action::Move { from, to } => next.move_tower(from, to),
        // incremental-formulation tags; the search transition leaves them as
        // the identity
        Action::Place(_) | Action::Remove(_) => {}
    }
    next
}
