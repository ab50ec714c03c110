//! The four-towers sliding puzzle as a search problem: four towers start in
//! the corners of a board and must be slid, rook-fashion, into the four
//! center squares. This crate supplies the state space (boards, actions,
//! generators, transition and goal functions, heuristics) plus a genetic
//! encoding of it; the search algorithms themselves come from the
//! `pathfinding` crate.

pub mod action;
pub mod board;
pub mod genetic;
pub mod moves;
pub mod playfield;
pub mod problem;
pub mod solve;

pub use action::{Action, Direction};
pub use board::{parse_board, Board, BoardError, Loc, Towers, MAX_TOWERS};
pub use genetic::{EncodingError, Individual};
pub use moves::{result, MoveGen, MoveRule};
pub use playfield::Playfield;
pub use problem::{assignment_distance, center_distance, goal_reached, TowerProblem};
pub use solve::{solve, solve_bfs, solve_iddfs, solve_indexed};
