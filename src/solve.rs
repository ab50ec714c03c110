use pathfinding::directed::astar::astar;
use pathfinding::directed::bfs::bfs;
use pathfinding::directed::iddfs::iddfs;

use crate::board::{Board, Towers};
use crate::problem::{assignment_distance, center_distance, TowerProblem};

// All search strategy implementations live in the pathfinding crate; these
// wrappers only wire the problem contract into them and count the work done.

/// A* over plain boards with the center-distance estimate, in whole moves.
/// Returns (states expanded, actions generated, solution).
pub fn solve(problem: &TowerProblem) -> (usize, usize, Option<(Vec<Board>, u32)>) {
    let mut visited = 0;
    let mut generated = 0;

    let result = astar(
        problem.initial(),
        |board| {
            let actions = problem.actions(board);
            visited += 1;
            generated += actions.len();
            actions
                .into_iter()
                .map(|action| (problem.result(board, &action), 1))
                .collect::<Vec<_>>()
        },
        |board| center_distance(board) as u32,
        |board| problem.is_goal(board),
    );

    (visited, generated, result)
}

/// Uninformed breadth-first baseline over the same contract.
pub fn solve_bfs(problem: &TowerProblem) -> (usize, usize, Option<Vec<Board>>) {
    let mut visited = 0;
    let mut generated = 0;

    let result = bfs(
        problem.initial(),
        |board| {
            let actions = problem.actions(board);
            visited += 1;
            generated += actions.len();
            actions
                .into_iter()
                .map(|action| problem.result(board, &action))
                .collect::<Vec<_>>()
        },
        |board| problem.is_goal(board),
    );

    (visited, generated, result)
}

/// Iterative deepening. No duplicate detection, so only sensible close to
/// the goal.
pub fn solve_iddfs(problem: &TowerProblem) -> Option<Vec<Board>> {
    iddfs(
        problem.initial().clone(),
        |board| {
            problem
                .actions(board)
                .into_iter()
                .map(|action| problem.result(board, &action))
                .collect::<Vec<_>>()
        },
        |board| problem.is_goal(board),
    )
}

/// A* over the indexed tower representation with the per-slot assignment
/// estimate. Transitions go through [`Towers::apply`], so piece identities
/// survive the whole plan.
pub fn solve_indexed(problem: &TowerProblem) -> (usize, usize, Option<(Vec<Towers>, u32)>) {
    let start = Towers::from_board(problem.initial());
    let goal = Towers::from_board(problem.goal());
    let mut visited = 0;
    let mut generated = 0;

    let result = astar(
        &start,
        |towers| {
            let board = towers.board();
            let actions = problem.actions(&board);
            visited += 1;
            generated += actions.len();
            actions
                .into_iter()
                .map(|action| (towers.apply(&action), 1))
                .collect::<Vec<_>>()
        },
        |towers| assignment_distance(towers, &goal) as u32,
        |towers| problem.is_goal(&towers.board()),
    );

    (visited, generated, result)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::board::{parse_board, Loc};
    use crate::moves::MoveGen;

    // one legal slide up the fourth column finishes the center block
    const ONE_MOVE: &str = "--------
                            --------
                            --------
                            ---TT---
                            ---T----
                            --------
                            --------
                            ----T---";

    fn one_move_problem(gen: MoveGen) -> TowerProblem {
        TowerProblem::new(parse_board(ONE_MOVE).unwrap(), gen).unwrap()
    }

    #[test]
    fn astar_finds_the_single_slide() {
        let problem = one_move_problem(MoveGen::slide());
        let (visited, generated, result) = solve(&problem);
        let (path, cost) = result.unwrap();
        assert_eq!(cost, 1);
        assert_eq!(path.len(), 2);
        assert!(problem.is_goal(path.last().unwrap()));
        assert!(visited >= 1);
        assert!(generated >= visited);
    }

    #[test]
    fn both_generators_solve_the_same_fixture() {
        // swapping the formulation must not touch the search code
        for gen in [MoveGen::slide(), MoveGen::step()] {
            let problem = one_move_problem(gen);
            let (_, _, result) = solve(&problem);
            assert!(result.is_some());
        }
    }

    #[test]
    fn bfs_reaches_the_goal_uninformed() {
        let problem = one_move_problem(MoveGen::slide());
        let (_, _, result) = solve_bfs(&problem);
        assert_eq!(result.unwrap().len(), 2);
    }

    #[test]
    fn iddfs_reaches_the_goal() {
        let problem = one_move_problem(MoveGen::slide());
        let path = solve_iddfs(&problem).unwrap();
        assert!(problem.is_goal(path.last().unwrap()));
    }

    #[test]
    fn indexed_search_preserves_the_moving_piece() {
        let problem = one_move_problem(MoveGen::slide());
        let (_, _, result) = solve_indexed(&problem);
        let (path, cost) = result.unwrap();
        assert_eq!(cost, 1);

        let first = path.first().unwrap();
        let last = path.last().unwrap();
        // the tower that started at (4, 7) is the one that ends at (4, 4)
        assert_eq!(first.slots()[3], Loc::new(4, 7));
        assert_eq!(last.slots()[3], Loc::new(4, 4));
        assert_eq!(first.slots()[..3], last.slots()[..3]);
    }

    #[test]
    fn unsolvable_goal_exhausts_the_space() {
        // a lone tower can only ever stop at a wall, so the center block is
        // out of reach and the search must terminate empty-handed
        let mut board = Board::new(4).unwrap();
        board.add_tower(Loc::new(0, 0));
        let problem = TowerProblem::new(board, MoveGen::slide()).unwrap();
        let (visited, _, result) = solve(&problem);
        assert!(result.is_none());
        assert!(visited > 0);
    }
}
