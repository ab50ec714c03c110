use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tower_slider::{parse_board, solve, solve_bfs, solve_indexed, MoveGen, TowerProblem};

const NEAR_GOAL: &str = "
--------
--------
--------
---TT---
---T----
--------
--------
----T---";

const MID_GAME: &str = "
--------
------T-
--------
---T----
--------
--T-----
--------
-----T--";

fn criterion_bench(c: &mut Criterion) {
    c.bench_function("near_goal_astar", |b| {
        let problem = TowerProblem::new(parse_board(NEAR_GOAL).unwrap(), MoveGen::slide()).unwrap();
        b.iter(|| {
            solve(black_box(&problem));
        })
    });

    c.bench_function("near_goal_bfs", |b| {
        let problem = TowerProblem::new(parse_board(NEAR_GOAL).unwrap(), MoveGen::slide()).unwrap();
        b.iter(|| {
            solve_bfs(black_box(&problem));
        })
    });

    c.bench_function("mid_game_astar", |b| {
        let problem = TowerProblem::new(parse_board(MID_GAME).unwrap(), MoveGen::slide()).unwrap();
        b.iter(|| {
            solve(black_box(&problem));
        })
    });

    c.bench_function("corner_start_astar", |b| {
        let problem =
            TowerProblem::new(tower_slider::Board::with_corner_towers(8).unwrap(), MoveGen::slide())
                .unwrap();
        b.iter(|| {
            solve(black_box(&problem));
        })
    });

    c.bench_function("near_goal_indexed", |b| {
        let problem = TowerProblem::new(parse_board(NEAR_GOAL).unwrap(), MoveGen::slide()).unwrap();
        b.iter(|| {
            solve_indexed(black_box(&problem));
        })
    });
}

criterion_group!(benches, criterion_bench);
criterion_main!(benches);
