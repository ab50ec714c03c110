use tower_slider::{
    solve, solve_indexed, Action, Board, BoardError, MoveGen, Playfield, TowerProblem,
};

// the move that turned one board into the next, recovered from the diff
fn action_between(prev: &Board, next: &Board) -> Option<Action> {
    let from = prev
        .occupied_positions()
        .into_iter()
        .find(|loc| !next.tower_at(*loc))?;
    let to = next
        .occupied_positions()
        .into_iter()
        .find(|loc| !prev.tower_at(*loc))?;
    Some(Action::Move { from, to })
}

fn main() -> Result<(), BoardError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let start = Board::with_corner_towers(8)?;
    println!("Start:");
    println!("{start}");
    println!("----");

    let problem = TowerProblem::new(start.clone(), MoveGen::slide())?;
    let (visited, generated, result) = solve(&problem);
    let plan = match result {
        Some((path, cost)) => {
            println!(
                "slide: solved in {} moves; visited {} board positions (generated {} total)",
                cost, visited, generated
            );
            path
        }
        None => {
            println!("slide: no solution");
            Vec::new()
        }
    };
    println!("----");

    let stepwise = TowerProblem::new(start, MoveGen::step())?;
    let (visited, generated, result) = solve(&stepwise);
    match result {
        Some((_, cost)) => println!(
            "one-step: solved in {} moves; visited {} board positions (generated {} total)",
            cost, visited, generated
        ),
        None => println!("one-step: no solution"),
    }
    println!("----");

    let (visited, generated, result) = solve_indexed(&problem);
    if let Some((_, cost)) = result {
        println!(
            "indexed: solved in {} moves; visited {} states (generated {} total)",
            cost, visited, generated
        );
    }
    println!("----");

    // replay the winning plan through a playfield, the way an agent shell
    // would feed it back in
    let mut field = Playfield::new(problem.initial().clone());
    for window in plan.windows(2) {
        if let Some(action) = action_between(&window[0], &window[1]) {
            println!("{action}");
            field.execute(&action);
        }
    }
    if !plan.is_empty() {
        println!("{}", field.board());
        assert!(problem.is_goal(field.board()));
    }

    Ok(())
}
