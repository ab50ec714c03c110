use smallvec::SmallVec;

use crate::action::Action;
use crate::board::{Board, BoardError, Towers, MAX_TOWERS};
use crate::moves::{self, MoveGen};

/// Whether `state` satisfies `goal`: every goal square is occupied. Towers
/// elsewhere do not disqualify a state on their own; under the four-tower
/// cap the two readings coincide.
pub fn goal_reached(state: &Board, goal: &Board) -> bool {
    goal.occupied_positions()
        .iter()
        .all(|loc| state.tower_at(*loc))
}

/// Sum over occupied squares of the Manhattan distance to the board's
/// geometric center, 3.5 on the canonical board. A lone tower at (0, 0) on
/// an 8x8 board scores 7.0.
pub fn center_distance(board: &Board) -> f64 {
    let center = (board.size() - 1) as f64 / 2.0;
    board
        .occupied_positions()
        .iter()
        .map(|loc| (center - loc.x as f64).abs() + (center - loc.y as f64).abs())
        .sum()
}

/// Sum of per-slot Manhattan distances between two indexed tower sets: slot
/// i of `current` is measured against slot i of `goal`. Needs the indexed
/// representation because scan-order identity does not survive moves.
pub fn assignment_distance(current: &Towers, goal: &Towers) -> f64 {
    current
        .slots()
        .iter()
        .zip(goal.slots())
        .map(|(at, want)| at.manhattan(*want) as f64)
        .sum()
}

/// The uniform problem contract search strategies consume: an initial state
/// plus `actions`, `result` and `is_goal`. The move generator is plugged in
/// at construction, so sliding and single-step formulations swap without
/// touching any search code.
pub struct TowerProblem {
    initial: Board,
    goal: Board,
    gen: MoveGen,
}

impl TowerProblem {
    /// A problem whose goal is the center layout for the initial board's
    /// size.
    pub fn new(initial: Board, gen: MoveGen) -> Result<TowerProblem, BoardError> {
        let goal = Board::goal(initial.size())?;
        Ok(TowerProblem { initial, goal, gen })
    }

    /// A problem against an arbitrary goal layout.
    pub fn with_goal(initial: Board, goal: Board, gen: MoveGen) -> TowerProblem {
        TowerProblem { initial, goal, gen }
    }

    pub fn initial(&self) -> &Board {
        &self.initial
    }

    pub fn goal(&self) -> &Board {
        &self.goal
    }

    pub fn actions(&self, state: &Board) -> SmallVec<[Action; MAX_TOWERS * 4]> {
        self.gen.actions(state)
    }

    pub fn result(&self, state: &Board, action: &Action) -> Board {
        moves::result(state, action)
    }

    pub fn is_goal(&self, state: &Board) -> bool {
        goal_reached(state, &self.goal)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::board::Loc;

    #[test]
    fn goal_test_matches_the_center_layout() {
        let problem =
            TowerProblem::new(Board::with_corner_towers(8).unwrap(), MoveGen::slide()).unwrap();

        assert!(problem.is_goal(&Board::goal(8).unwrap()));
        assert!(!problem.is_goal(&Board::new(8).unwrap()));
        assert!(!problem.is_goal(problem.initial()));

        // three of the four center squares are not enough
        let mut three = Board::new(8).unwrap();
        three.add_tower(Loc::new(3, 3));
        three.add_tower(Loc::new(3, 4));
        three.add_tower(Loc::new(4, 3));
        assert!(!problem.is_goal(&three));
    }

    #[test]
    fn center_distance_of_a_corner_tower() {
        let mut board = Board::new(8).unwrap();
        board.add_tower(Loc::new(0, 0));
        assert_eq!(center_distance(&board), 7.0);
    }

    #[test]
    fn center_distance_bottoms_out_on_the_goal_layout() {
        // each center square sits half a step from 3.5 on both axes
        assert_eq!(center_distance(&Board::goal(8).unwrap()), 4.0);
        assert_eq!(center_distance(&Board::new(8).unwrap()), 0.0);
        assert!(center_distance(&Board::with_corner_towers(8).unwrap()) > 4.0);
    }

    #[test]
    fn assignment_distance_is_zero_only_in_place() {
        let goal = Towers::from_board(&Board::goal(8).unwrap());
        assert_eq!(assignment_distance(&goal, &goal), 0.0);

        let mut board = Board::goal(8).unwrap();
        board.move_tower(Loc::new(4, 4), Loc::new(4, 6));
        let shifted = Towers::from_board(&board);
        assert_eq!(assignment_distance(&shifted, &goal), 2.0);
    }

    #[test]
    fn adapter_result_applies_generated_actions() {
        let problem =
            TowerProblem::new(Board::with_corner_towers(8).unwrap(), MoveGen::slide()).unwrap();
        for action in problem.actions(problem.initial()) {
            let next = problem.result(problem.initial(), &action);
            assert_ne!(next, *problem.initial());
            assert_eq!(next.tower_count(), 4);
        }
    }
}
