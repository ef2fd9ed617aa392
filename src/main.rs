use std::{
    ffi::OsStr,
    io::Write,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use mazewalk::{
    Coordinate, Maze, MazeConfig, Solver,
    config::{parse_coordinate, parse_odd_size},
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of rows, odd, 7 to 99
    #[arg(short, long, default_value_t = 21, value_parser = parse_odd_size)]
    rows: usize,

    /// Number of columns, odd, 7 to 99
    #[arg(short, long, default_value_t = 21, value_parser = parse_odd_size)]
    cols: usize,

    /// Start cell as ROW,COL (defaults to the top-left room)
    #[arg(long, value_parser = parse_coordinate)]
    start: Option<Coordinate>,

    /// Target cell as ROW,COL (defaults to the bottom-right room)
    #[arg(long, value_parser = parse_coordinate)]
    target: Option<Coordinate>,

    /// Solver to run: recursive, dfs, bfs or astar (1-4 also work)
    #[arg(short, long, default_value = "astar")]
    solver: Solver,

    /// Seed for reproducible mazes
    #[arg(long)]
    seed: Option<u64>,

    /// Print the maze with terminal colours
    #[arg(long)]
    color: bool,

    /// File that receives log output
    #[arg(long, default_value = "mazewalk.log")]
    log_file: PathBuf,

    /// Maximum log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: tracing::Level,
}

fn print_maze(maze: &Maze, color: bool) -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    if color {
        maze.print_styled(&mut stdout)
    } else {
        write!(stdout, "{}", maze.render())?;
        stdout.flush()
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = MazeConfig::new(args.rows, args.cols);
    if let Some(start) = args.start {
        config = config.with_start(start);
    }
    if let Some(target) = args.target {
        config = config.with_target(target);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mut maze = Maze::from_config(&config)?;
    tracing::info!(
        "[main] generated {}x{} maze, start {:?}, target {:?}",
        maze.rows(),
        maze.cols(),
        maze.start(),
        maze.target()
    );

    println!("Maze:");
    print_maze(&maze, args.color)?;

    println!();
    println!("Solving with {}...", args.solver);
    if maze.solve_with(args.solver)? {
        print_maze(&maze, args.color)?;
        println!();
        let shortest = if args.solver.is_optimal() {
            ", shortest"
        } else {
            ""
        };
        println!("Route ({} steps{}):", maze.path().steps(), shortest);
        println!("{}", maze.path());
    } else {
        println!("No path found to the target.");
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let log_dir = args
        .log_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let log_name = args
        .log_file
        .file_name()
        .unwrap_or(OsStr::new("mazewalk.log"));
    let (writer, _guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(log_dir, log_name));
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(args.log_level)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("[main] {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
