use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use countdown::utils::{validate_operands, validate_pool, validate_target};
use countdown::{Expression, NumbersSolver, Round, validate_numbers};
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Countdown - Solve the numbers round
#[derive(Parser, Debug)]
#[command(name = "countdown")]
#[command(about = "Find arithmetic expressions over up to six numbers that hit a target")]
#[command(version)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Solve one round
    Solve {
        /// Source numbers, one to six of them
        #[arg(required = true, num_args = 1..=6)]
        numbers: Vec<u32>,

        /// Target value to hit
        #[arg(short, long)]
        target: u32,

        /// Report the closest value when the target cannot be reached
        #[arg(short, long)]
        closest: bool,

        /// Enforce the game's number pool and three-digit targets
        #[arg(short, long)]
        strict: bool,
    },
    /// Check a proposed answer against a round
    Check {
        /// The answer, e.g. "75 * (6 + 7) - 4 * 5"
        expression: String,

        /// Available numbers, comma separated
        #[arg(short, long, required = true, value_delimiter = ',')]
        numbers: Vec<u32>,

        /// Target value
        #[arg(short, long)]
        target: u32,
    },
    /// Play random rounds and solve them
    Random {
        /// How many rounds to play
        #[arg(short, long, default_value_t = 20)]
        rounds: usize,

        /// Big numbers per round (1 to 4 at random when omitted)
        #[arg(short, long)]
        big: Option<usize>,

        /// Seed for reproducible rounds
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub command: Command,
    pub log_level: LogLevel,
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    let args = CliArgs::parse();
    validate_command(&args.command)?;

    Ok(CliConfig {
        command: args.command,
        log_level: args.log_level,
    })
}

/// Reject input the solver should never see
pub fn validate_command(command: &Command) -> Result<()> {
    match command {
        Command::Solve {
            numbers,
            target,
            strict,
            ..
        } => {
            validate_numbers(numbers).context("Invalid numbers")?;
            if *strict {
                validate_pool(numbers).context("Invalid numbers")?;
                validate_target(*target).context("Invalid target")?;
            }
        }
        Command::Check { numbers, .. } => {
            validate_numbers(numbers).context("Invalid numbers")?;
        }
        Command::Random { rounds, .. } => {
            if *rounds == 0 {
                bail!("At least one round is required");
            }
        }
    }
    Ok(())
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// `<expr> = <value>`, with the miss appended when it is off target
pub fn format_result(expr: &Expression, target: u32) -> String {
    match expr.distance_to(target) {
        0 => format!("{} = {}", expr, expr.value()),
        distance => format!(
            "{} = {}, {} away from {}",
            expr,
            expr.value(),
            distance,
            target
        ),
    }
}

fn run_solve(round: &Round, closest: bool) {
    let solver = NumbersSolver::new();

    info!("Solving {}", round);

    let result = if closest {
        solver.find_closest(&round.numbers, round.target)
    } else {
        solver.find_expression(&round.numbers, round.target)
    };

    match result {
        Some(expr) => println!("{}", format_result(&expr, round.target)),
        None => {
            warn!("No matching expression found");
            println!("No solution.");
        }
    }
}

fn run_check(text: &str, numbers: &[u32], target: u32) -> Result<()> {
    let expr: Expression = text
        .parse()
        .with_context(|| format!("Cannot evaluate '{}'", text))?;
    validate_operands(numbers, &expr.operands()).context("Answer uses unavailable numbers")?;

    println!("{}", format_result(&expr, target));
    if expr.value() != target {
        warn!("Answer misses the target by {}", expr.distance_to(target));
    }
    Ok(())
}

fn run_random(rounds: usize, big: Option<usize>, seed: Option<u64>) {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let rounds: Vec<Round> = (0..rounds).map(|_| Round::random(&mut rng, big)).collect();

    info!("Solving {} random rounds", rounds.len());

    // Each search stays single-threaded; only independent rounds run side by side
    let results: Vec<(Option<Expression>, f64)> = rounds
        .par_iter()
        .map(|round| {
            let started = Instant::now();
            let solver = NumbersSolver::new();
            let expr = solver.find_closest(&round.numbers, round.target);
            (expr, started.elapsed().as_secs_f64())
        })
        .collect();

    for (round, (expr, seconds)) in rounds.iter().zip(results) {
        println!("{}", round);
        match expr {
            Some(expr) if expr.value() == round.target => {
                println!("  Solved: {}", format_result(&expr, round.target))
            }
            Some(expr) => println!("  Close: {}", format_result(&expr, round.target)),
            None => println!("  No solution."),
        }
        println!("  Time: {:.2}s", seconds);
    }
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    match config.command {
        Command::Solve {
            numbers,
            target,
            closest,
            ..
        } => run_solve(&Round::new(numbers, target), closest),
        Command::Check {
            expression,
            numbers,
            target,
        } => run_check(&expression, &numbers, target)?,
        Command::Random { rounds, big, seed } => run_random(rounds, big, seed),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_args_parsing() {
        let args = CliArgs::try_parse_from([
            "countdown", "solve", "3", "4", "5", "6", "7", "75", "--target", "955",
        ]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert_eq!(
                args.command,
                Command::Solve {
                    numbers: vec![3, 4, 5, 6, 7, 75],
                    target: 955,
                    closest: false,
                    strict: false,
                }
            );
            assert!(matches!(args.log_level, LogLevel::Warn));
        }
    }

    #[test]
    fn test_cli_rejects_negative_and_excess_numbers() {
        assert!(CliArgs::try_parse_from(["countdown", "solve", "-3", "--target", "10"]).is_err());
        assert!(
            CliArgs::try_parse_from([
                "countdown", "solve", "1", "2", "3", "4", "5", "6", "7", "-t", "10",
            ])
            .is_err()
        );
        assert!(CliArgs::try_parse_from(["countdown", "solve", "abc", "-t", "10"]).is_err());
    }

    #[test]
    fn test_check_numbers_are_comma_separated() {
        let args = CliArgs::try_parse_from([
            "countdown",
            "check",
            "(2 + 2)",
            "--numbers",
            "2,2,3",
            "--target",
            "4",
            "--log-level",
            "debug",
        ]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert_eq!(
                args.command,
                Command::Check {
                    expression: "(2 + 2)".to_string(),
                    numbers: vec![2, 2, 3],
                    target: 4,
                }
            );
            assert!(matches!(args.log_level, LogLevel::Debug));
        }
    }

    #[test]
    fn test_strict_mode_validation() {
        let lenient = Command::Solve {
            numbers: vec![11, 12],
            target: 23,
            closest: false,
            strict: false,
        };
        assert!(validate_command(&lenient).is_ok());

        let strict = Command::Solve {
            numbers: vec![11, 12],
            target: 23,
            closest: false,
            strict: true,
        };
        assert!(validate_command(&strict).is_err());

        let no_rounds = Command::Random {
            rounds: 0,
            big: None,
            seed: None,
        };
        assert!(validate_command(&no_rounds).is_err());
    }

    #[test]
    fn test_run_check_rejects_reused_numbers() {
        assert!(run_check("(2 + 2)", &[2, 3], 4).is_err());
        assert!(run_check("(2 + 2)", &[2, 2], 4).is_ok());
        assert!(run_check("3 - 5", &[3, 5], 4).is_err());

        let deep = format!("{}1{}", "(".repeat(200_000), ")".repeat(200_000));
        assert!(run_check(&deep, &[1], 1).is_err());
    }

    #[test]
    fn test_format_result() {
        let exact: Result<Expression, _> = "(6 + 3)".parse();
        assert!(exact.is_ok());
        if let Ok(expr) = exact {
            assert_eq!(format_result(&expr, 9), "(6 + 3) = 9");
            assert_eq!(format_result(&expr, 12), "(6 + 3) = 9, 3 away from 12");
        }
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }
}
