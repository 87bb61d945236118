use std::error::Error;
use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use itertools::Itertools;
use rayon::prelude::*;
use tracing::{info, span, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::constant::{
    COMPLETION_BONUS_ENV, DEFAULT_STRATEGY, GENERATOR_BONUS, GENERATOR_COLS, GENERATOR_RIDES,
    GENERATOR_ROWS, GENERATOR_SEED, GENERATOR_STEPS, GENERATOR_VEHICLES, OUTPUT_EXTENSION,
    STRATEGY_ENV,
};
use crate::config::load_env;
use crate::evaluation::{check, find_score, ScoreBreakdown, ScoreConfig};
use crate::fixtures::{generate_problem, write_problem, GeneratorConfig};
use crate::output::{read_solution, save_vehicle_report, write_solution, ScoreSummary};
use crate::setup::read_problem;
use crate::solver::Strategy;

type SendError = Box<dyn Error + Send + Sync>;

#[derive(Debug, Parser)]
#[command(name = "ride-dispatch", version, about = "Assign rides to a vehicle fleet on a grid")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Schedule one or more instances and emit one line per vehicle
    Solve(SolveArgs),
    /// Replay a solution file against its instance and print the score
    Check(CheckArgs),
    /// Write a random valid instance
    Generate(GenerateArgs),
    /// List the available scheduling strategies
    Strategies,
}

#[derive(Debug, Args)]
pub struct SolveArgs {
    /// Instance files
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,
    #[arg(long, short, default_value = DEFAULT_STRATEGY, env = STRATEGY_ENV)]
    pub strategy: Strategy,
    /// Write `<stem>.out` files here instead of printing to stdout
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
    /// Per-vehicle CSV report (single input only)
    #[arg(long)]
    pub report: Option<PathBuf>,
    #[arg(long, env = COMPLETION_BONUS_ENV)]
    pub completion_bonus: Option<u64>,
    /// Print score summaries to stderr as JSON lines
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    pub input: PathBuf,
    pub solution: PathBuf,
    #[arg(long, env = COMPLETION_BONUS_ENV)]
    pub completion_bonus: Option<u64>,
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Destination file; stdout when omitted
    pub output: Option<PathBuf>,
    #[arg(long, default_value_t = GENERATOR_ROWS)]
    pub rows: u32,
    #[arg(long, default_value_t = GENERATOR_COLS)]
    pub cols: u32,
    #[arg(long, default_value_t = GENERATOR_VEHICLES)]
    pub vehicles: usize,
    #[arg(long, default_value_t = GENERATOR_RIDES)]
    pub rides: usize,
    #[arg(long, default_value_t = GENERATOR_BONUS)]
    pub bonus: u64,
    #[arg(long, default_value_t = GENERATOR_STEPS)]
    pub steps: u64,
    #[arg(long, default_value_t = GENERATOR_SEED)]
    pub seed: u64,
}

/// Logs go to stderr; stdout is reserved for solutions.
fn init_tracing() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_span_events(fmt::format::FmtSpan::CLOSE),
        )
        .try_init()?;
    Ok(())
}

/// Binary entry point: load `.env`, set up logging, parse arguments, execute.
pub fn run() -> Result<(), Box<dyn Error>> {
    let found_env = load_env();
    init_tracing()?;
    if found_env {
        info!("Loaded environment overrides from .env");
    }
    execute(Cli::parse())
}

pub fn execute(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Command::Solve(args) => solve(args),
        Command::Check(args) => check_solution(args),
        Command::Generate(args) => generate(args),
        Command::Strategies => {
            for strategy in Strategy::ALL {
                println!("{}", strategy);
            }
            Ok(())
        }
    }
}

fn score_config(completion_bonus: Option<u64>) -> ScoreConfig {
    ScoreConfig {
        completion_bonus,
        ..ScoreConfig::default()
    }
}

fn solve(args: SolveArgs) -> Result<(), Box<dyn Error>> {
    if args.report.is_some() && args.inputs.len() > 1 {
        return Err("--report takes a single input".into());
    }
    if args.out_dir.is_none() && args.inputs.len() > 1 {
        return Err("several inputs need --out-dir".into());
    }

    let config = score_config(args.completion_bonus);
    let solve_span = span!(Level::INFO, "solve", strategy = %args.strategy, inputs = args.inputs.len());
    let _guard = solve_span.enter();

    let summaries: Vec<ScoreSummary> = match &args.out_dir {
        None => vec![solve_one(
            &args.inputs[0],
            args.strategy,
            &config,
            None,
            args.report.as_deref(),
        )
        .map_err(|e| e as Box<dyn Error>)?],
        Some(dir) => {
            if let Some(clash) = args
                .inputs
                .iter()
                .map(|input| output_path(dir, input))
                .duplicates()
                .next()
            {
                return Err(format!("several inputs would write {}", clash.display()).into());
            }
            fs::create_dir_all(dir)?;
            // Instances are independent; each one is still scheduled on a single thread.
            args.inputs
                .par_iter()
                .map(|input| {
                    solve_one(input, args.strategy, &config, Some(dir.as_path()), args.report.as_deref())
                })
                .collect::<Result<Vec<_>, SendError>>()
                .map_err(|e| e as Box<dyn Error>)?
        }
    };

    for summary in &summaries {
        print_summary(summary, args.json)?;
    }
    if summaries.len() > 1 {
        let total: u64 = summaries.iter().map(|s| s.score.total).sum();
        eprintln!("{} {}", "total score:".bold(), total.to_string().green().bold());
    }
    Ok(())
}

fn solve_one(
    input: &Path,
    strategy: Strategy,
    config: &ScoreConfig,
    out_dir: Option<&Path>,
    report: Option<&Path>,
) -> Result<ScoreSummary, SendError> {
    let problem = read_problem(input)?;
    let solution = strategy.solve(&problem);
    let score = find_score(&problem, &solution, config)?;

    match out_dir {
        None => write_solution(io::stdout().lock(), &solution)?,
        Some(dir) => {
            let path = output_path(dir, input);
            write_solution(BufWriter::new(File::create(&path)?), &solution)?;
            info!("Wrote {}", path.display());
        }
    }
    if let Some(report) = report {
        save_vehicle_report(report, &problem, &solution)?;
        info!("Wrote vehicle report {}", report.display());
    }

    Ok(ScoreSummary {
        input: input.display().to_string(),
        strategy: Some(strategy.name().to_string()),
        vehicles: problem.fleet_size(),
        rides: problem.rides().len(),
        score,
    })
}

/// `<dir>/<input stem>.out`
pub fn output_path(dir: &Path, input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or(input.as_os_str());
    dir.join(format!("{}.{}", stem.to_string_lossy(), OUTPUT_EXTENSION))
}

fn check_solution(args: CheckArgs) -> Result<(), Box<dyn Error>> {
    let problem = read_problem(&args.input)?;
    let itineraries = read_solution(&args.solution)?;
    let config = score_config(args.completion_bonus);
    let (_, score) = check(&problem, itineraries.iter().map(Vec::as_slice), &config)?;

    let summary = ScoreSummary {
        input: args.input.display().to_string(),
        strategy: None,
        vehicles: problem.fleet_size(),
        rides: problem.rides().len(),
        score,
    };
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", describe(&summary.score));
    }
    Ok(())
}

fn generate(args: GenerateArgs) -> Result<(), Box<dyn Error>> {
    let config = GeneratorConfig {
        rows: args.rows,
        cols: args.cols,
        vehicles: args.vehicles,
        rides: args.rides,
        bonus: args.bonus,
        steps: args.steps,
        seed: args.seed,
    };
    let problem = generate_problem(&config)?;
    match &args.output {
        Some(path) => write_problem(BufWriter::new(File::create(path)?), &problem)?,
        None => write_problem(io::stdout().lock(), &problem)?,
    }
    Ok(())
}

fn describe(score: &ScoreBreakdown) -> String {
    let mut text = format!(
        "score {} = distance {} + bonus {} ({} on time)",
        score.total, score.distance, score.bonus, score.on_time
    );
    if score.completion_bonus > 0 {
        text.push_str(&format!(" + completion {}", score.completion_bonus));
    }
    text.push_str(&format!(
        "; {} rides assigned, {} unassigned",
        score.assigned, score.unassigned
    ));
    text
}

fn print_summary(summary: &ScoreSummary, json: bool) -> Result<(), Box<dyn Error>> {
    if json {
        eprintln!("{}", serde_json::to_string(summary)?);
        return Ok(());
    }

    let strategy = summary.strategy.as_deref().unwrap_or("-");
    let line = format!("{} [{}]: {}", summary.input, strategy, describe(&summary.score));
    if summary.score.unassigned == 0 {
        eprintln!("{}", line.green());
    } else {
        eprintln!("{}", line.yellow());
    }
    Ok(())
}
