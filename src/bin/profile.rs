use mazewalk::{Maze, MazeConfig, Solver, config::MAX_SIZE};

/// Solves `num_iters` seeded mazes of the largest size with every solver.
fn main() -> mazewalk::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(10);

    for seed in 0..num_iters {
        let config = MazeConfig::new(MAX_SIZE, MAX_SIZE).with_seed(seed);
        let mut maze = Maze::from_config(&config)?;
        for solver in Solver::ALL {
            let started = std::time::Instant::now();
            let found = maze.solve_with(solver)?;
            tracing::info!(
                "[profile] seed {} {}: found={} steps={} in {:?}",
                seed,
                solver,
                found,
                maze.path().steps(),
                started.elapsed()
            );
        }
    }
    Ok(())
}
