use clap::{Parser, ValueEnum};
use grid_search::heuristic::{bird_distance, chebyshev_distance, manhattan_distance, Weighted};
use grid_search::{
    find_and_mark_path, render, Scenario, SearchConfig, SearchError, SearchMode, SearchOutcome,
    TileSymbols, DEFAULT_ITERATION_BUDGET,
};
use grid_util::point::Point;
use log::{info, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    Dfs,
    #[value(name = "a*")]
    AStar,
    Maze,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum HeuristicKind {
    Bird,
    Chebyshev,
    Manhattan,
}

/// Searches the reference 10x10 grid from (4, 0) to (4, 9) and prints the route found.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Search mode
    #[arg(value_enum, default_value = "a*")]
    mode: Mode,

    /// Maximum number of expansions
    #[arg(short, long, default_value_t = DEFAULT_ITERATION_BUDGET)]
    budget: usize,

    /// Distance estimate used to rank candidates
    #[arg(long, value_enum, default_value = "bird")]
    heuristic: HeuristicKind,

    /// Multiplier applied to the heuristic estimate
    #[arg(short, long, default_value_t = 1.0)]
    factor: f64,
}

fn main() -> Result<(), SearchError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();
    let scenario = Scenario::reference();
    let mut grid = scenario.build_grid();
    let symbols = TileSymbols::default();

    let mode = match args.mode {
        Mode::Dfs => SearchMode::Dfs,
        Mode::AStar => SearchMode::AStar,
        Mode::Maze => {
            warn!("Maze generation is not available, showing the unsolved grid");
            print!("{}", render(&grid, &symbols));
            return Ok(());
        }
    };
    let base: fn(Point, Point) -> f64 = match args.heuristic {
        HeuristicKind::Bird => bird_distance,
        HeuristicKind::Chebyshev => chebyshev_distance,
        HeuristicKind::Manhattan => manhattan_distance,
    };
    let heuristic = Weighted::new(base, args.factor.max(0.0));
    if !grid.reachable(scenario.start, scenario.goal) {
        info!("{:?} and {:?} are on different components", scenario.start, scenario.goal);
    }

    let config = SearchConfig::new(mode, args.budget);
    match find_and_mark_path(&mut grid, scenario.start, scenario.goal, &heuristic, config)? {
        SearchOutcome::Found(result) => {
            info!(
                "{} search used {} of {} iterations",
                mode, result.iterations, args.budget
            );
            println!("PATH ({} steps)", result.path_length);
            print!("{}", render(&grid, &symbols));
        }
        SearchOutcome::NotFound { start, goal } => {
            println!("No path found from start: {:?}, to goal location: {:?}", start, goal);
        }
        SearchOutcome::BudgetExhausted {
            start,
            goal,
            iterations,
        } => {
            println!(
                "No path found from start: {:?}, to goal location: {:?} within {} iterations",
                start, goal, iterations
            );
        }
    }
    Ok(())
}
