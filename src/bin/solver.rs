use bestfirst::domains::{
    standard_report, Board, EightPuzzle, EightPuzzleHeuristic, ErraticVacuum, GreenPourProblem,
    PancakeProblem, PourProblem, RouteProblem,
};
use bestfirst::search::{
    and_or_search, reports_to_json, Problem, SearchConfig, SearchEngineName, SearchError,
    SearchResult, Verbosity,
};
use clap::{Parser, Subcommand};
use std::fmt::Display;
use std::path::PathBuf;
use std::process::ExitCode;
use strum::IntoEnumIterator;
use tracing::{error, info};

#[derive(Parser)]
#[command(version)]
/// Solve search problems with best-first search and its relatives.
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(
        value_enum,
        help = "The search engine to use",
        short = 'e',
        long = "engine",
        id = "ENGINE",
        global = true,
        default_value_t = SearchEngineName::Astar
    )]
    search_engine_name: SearchEngineName,
    #[arg(
        help = "TOML file with search parameters, see SearchConfig",
        short = 'f',
        long = "config",
        id = "CONFIG",
        global = true
    )]
    config: Option<PathBuf>,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        global = true,
        default_value_t = Verbosity::default()
    )]
    verbosity: Verbosity,
    #[arg(
        help = "Whether to use coloured output",
        short = 'c',
        long = "colour",
        global = true
    )]
    colour: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find a route between two cities on the map of Romania, given by their
    /// initials.
    Route { from: String, to: String },
    /// Solve an eight puzzle, tiles given row by row with 0 for the blank,
    /// e.g. 1,4,2,0,7,5,3,6,8.
    EightPuzzle {
        #[arg(value_delimiter = ',', required = true)]
        tiles: Vec<u8>,
        #[arg(
            value_enum,
            help = "The heuristic to guide informed engines",
            long = "heuristic",
            id = "HEURISTIC",
            default_value_t = EightPuzzleHeuristic::Manhattan
        )]
        heuristic: EightPuzzleHeuristic,
    },
    /// Measure out an amount of water with a set of jugs.
    Pour {
        #[arg(long, value_delimiter = ',', required = true)]
        sizes: Vec<u32>,
        #[arg(long)]
        goal: u32,
        #[arg(
            long,
            value_delimiter = ',',
            help = "Initial contents of the jugs, empty by default"
        )]
        initial: Option<Vec<u32>>,
        #[arg(long, help = "Count litres drawn from the tap instead of actions")]
        green: bool,
    },
    /// Sort a stack of pancakes, given top first, e.g. 2,1,4,6,3,5.
    Pancake {
        #[arg(value_delimiter = ',', required = true)]
        stack: Vec<u8>,
    },
    /// Find a conditional plan for the erratic vacuum world. Ignores the
    /// engine, this is always an AND-OR search.
    Vacuum {
        #[arg(value_parser = clap::value_parser!(u8).range(1..=8))]
        state: u8,
    },
    /// Compare engines on a fixed mix of problems.
    Report {
        #[arg(long, help = "Run every engine rather than just the selected one")]
        all: bool,
        #[arg(long, help = "Print every row as one JSON array instead of tables")]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match solve(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn solve(cli: Cli) -> Result<(), SearchError> {
    let config = match &cli.config {
        Some(path) => SearchConfig::from_path(path)?,
        None => SearchConfig::default(),
    };
    info!(?config);
    let engine = cli.search_engine_name;

    match cli.command {
        Commands::Route { from, to } => {
            let problem = RouteProblem::romania(&from, &to)?;
            print_result(&problem, &engine.search(&problem, &config)?);
        }
        Commands::EightPuzzle { tiles, heuristic } => {
            let board: Board = tiles
                .as_slice()
                .try_into()
                .map_err(|_| SearchError::InvalidBoard(tiles.clone()))?;
            let problem = EightPuzzle::new(board)?.with_heuristic(heuristic);
            print_result(&problem, &engine.search(&problem, &config)?);
        }
        Commands::Pour {
            sizes,
            goal,
            initial,
            green,
        } => {
            let initial = initial.unwrap_or_else(|| vec![0; sizes.len()]);
            if green {
                let problem = GreenPourProblem::new(&initial, &sizes, goal)?;
                print_result(&problem, &engine.search(&problem, &config)?);
            } else {
                let problem = PourProblem::new(&initial, &sizes, goal)?;
                print_result(&problem, &engine.search(&problem, &config)?);
            }
        }
        Commands::Pancake { stack } => {
            let problem = PancakeProblem::new(&stack);
            print_result(&problem, &engine.search(&problem, &config)?);
        }
        Commands::Vacuum { state } => match and_or_search(&ErraticVacuum::new(state)) {
            Some(plan) => {
                println!("Plan found:");
                println!("{plan:#?}");
                println!("Plan depth: {}", plan.depth());
            }
            None => println!("No plan found"),
        },
        Commands::Report { all, json } => {
            let engines: Vec<SearchEngineName> = if all {
                SearchEngineName::iter().collect()
            } else {
                vec![engine]
            };
            let reports = engines
                .into_iter()
                .map(|engine| standard_report(engine, &config))
                .collect::<Result<Vec<_>, _>>()?;
            if json {
                println!("{}", reports_to_json(&reports)?);
            } else {
                for report in &reports {
                    println!("{report}\n");
                }
            }
        }
    }
    Ok(())
}

fn print_result<P>(problem: &P, result: &SearchResult<P::State, P::Action>)
where
    P: Problem + Display,
{
    match result {
        SearchResult::Found(node) => {
            info!("solution found");
            info!(solution_cost = node.path_cost(), solution_length = node.depth());
            println!("Solution to {problem} found:");
            for (action, state) in node
                .path_actions()
                .iter()
                .zip(node.path_states().iter().skip(1))
            {
                println!("{action:?} -> {state:?}");
            }
            println!("Cost: {}", node.path_cost());
            println!("Length: {}", node.depth());
        }
        SearchResult::Failure => {
            info!("no solution found");
            println!("No solution to {problem}");
        }
        SearchResult::Cutoff => {
            info!("search cut off");
            println!("No solution to {problem} within the depth limit");
        }
    }
}
