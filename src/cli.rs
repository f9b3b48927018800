use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use floorhunt::ExpressionSearch;
use floorhunt::search::constants::{
    DEFAULT_BUDGET, DEFAULT_MAX_EXPRESSIONS, DEFAULT_PRECISION, DEFAULT_TARGET, MAX_EXACT_TARGET,
    MAX_PRECISION,
};
use floorhunt::utils::{validate_precision, validate_target};
use log::{info, warn};

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

/// Floorhunt - Find expressions over e and pi whose floor equals a target
#[derive(Parser, Debug)]
#[command(name = "floorhunt")]
#[command(
    about = "Enumerate expression trees over e and pi and print those whose value floors to a target integer"
)]
#[command(version)]
pub struct CliArgs {
    /// Structural budget for expression generation
    #[arg(short, long, default_value_t = DEFAULT_BUDGET)]
    pub budget: usize,

    /// Integer that the floor of each value must equal
    #[arg(short, long, default_value_t = DEFAULT_TARGET, allow_negative_numbers = true)]
    pub target: i64,

    /// Decimal places printed for matching values
    #[arg(short, long, default_value_t = DEFAULT_PRECISION)]
    pub precision: usize,

    /// Refuse budgets that would generate more expressions than this
    #[arg(long, default_value_t = DEFAULT_MAX_EXPRESSIONS)]
    pub max_expressions: u64,

    /// Print how many expressions the budget generates and exit
    #[arg(long)]
    pub count_only: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub budget: usize,
    pub target: i64,
    pub precision: usize,
    pub max_expressions: u64,
    pub count_only: bool,
    pub log_level: LogLevel,
}

impl TryFrom<CliArgs> for CliConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self> {
        validate_precision(args.precision, MAX_PRECISION).context("Invalid precision")?;
        validate_target(args.target, MAX_EXACT_TARGET).context("Invalid target")?;

        Ok(CliConfig {
            budget: args.budget,
            target: args.target,
            precision: args.precision,
            max_expressions: args.max_expressions,
            count_only: args.count_only,
            log_level: args.log_level,
        })
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    CliConfig::try_from(CliArgs::parse())
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logger")
}

/// Produce the lines the application prints for a configuration
pub fn execute(config: &CliConfig) -> Result<Vec<String>> {
    let search = ExpressionSearch::new(config.budget)
        .with_max_expressions(u128::from(config.max_expressions));

    if config.count_only {
        // No expression limit here; only overflow is an error
        let count = search.count().context("Cannot size the enumeration")?;
        return Ok(vec![count.to_string()]);
    }

    info!(
        "Searching for expressions with budget {} whose floor equals {}",
        config.budget, config.target
    );

    let matches = search.find_matches(config.target).context("Search failed")?;

    if matches.is_empty() {
        warn!("No matching expression found");
    }
    Ok(matches
        .iter()
        .map(|found| found.render(config.precision))
        .collect())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    init_logging(&config.log_level)?;

    for line in execute(&config)? {
        println!("{}", line);
    }
    Ok(())
}
