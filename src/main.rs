//! clubfit: golf bag fitness grading and what-if scenario tool
//!
//! Grades a bag of clubs on eight fitting factors and projects how
//! equipment changes would move the grade.

#![allow(clippy::needless_pass_by_value)]

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use clubfit::{
    cli::{self, GradeConfig, ScenarioConfig},
    config::AppConfig,
    pipeline::{exit_codes, load_weights},
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with format support info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nInput Formats:",
        "\n  Bags and change lists as JSON or YAML",
        "\n\nOutput Formats:",
        "\n  summary, json, markdown",
        "\n\nFactors:",
        "\n  age, weight progression, loft gapping, flex, kickpoint, torque,",
        "\n  length progression, lie angle progression"
    )
}

#[derive(Parser)]
#[command(name = "clubfit")]
#[command(version, long_version = build_long_version())]
#[command(about = "Golf bag fitness grading and what-if scenarios", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Score below --min-score / scenario declined with --fail-on-decline
    3  Error occurred

EXAMPLES:
    # Grade a bag
    clubfit grade bag.json

    # Grade against a fixed year and export JSON
    clubfit grade bag.yaml --year 2024 -o json -O grade.json

    # What if I replace my 4-iron with a hybrid?
    clubfit scenario bag.json changes.yaml --fail-on-decline

    # Grade a fleet of bags
    clubfit grade-many bags/*.json")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "CLUBFIT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

// ============================================================================
// Command argument structs
// ============================================================================

/// Grading options shared by `grade`, `grade-many` and `scenario`
#[derive(clap::Args)]
struct GradingArgs {
    /// Factor weights file (JSON or YAML); missing factors keep their defaults
    #[arg(long, value_name = "FILE")]
    weights: Option<PathBuf>,

    /// Year clubs are aged against (defaults to the current year)
    #[arg(long, value_name = "YEAR")]
    year: Option<i32>,

    /// Output format (auto picks by output file extension, summary otherwise)
    #[arg(short, long, default_value = "auto")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

impl GradingArgs {
    /// CLI values as a config layer to merge over the config file
    fn overrides(&self, no_color: bool) -> Result<AppConfig> {
        let mut builder = AppConfig::builder()
            .reference_year(self.year)
            .output_format(self.output)
            .output_file(self.output_file.clone())
            .no_color(no_color);
        if let Some(path) = &self.weights {
            builder = builder.weights(load_weights(path)?);
        }
        Ok(builder.build())
    }
}

/// Arguments for the `grade` subcommand
#[derive(Parser)]
struct GradeArgs {
    /// Path to the bag file
    bag: PathBuf,

    #[command(flatten)]
    grading: GradingArgs,

    /// Exit with code 1 if the overall score is below this value
    #[arg(long)]
    min_score: Option<u32>,

    /// List at most this many issues
    #[arg(long)]
    max_issues: Option<usize>,
}

/// Arguments for the `grade-many` subcommand
#[derive(Parser)]
struct GradeManyArgs {
    /// Bag files to grade
    #[arg(required = true)]
    bags: Vec<PathBuf>,

    #[command(flatten)]
    grading: GradingArgs,

    /// Exit with code 1 if any bag scores below this value
    #[arg(long)]
    min_score: Option<u32>,
}

/// Arguments for the `scenario` subcommand
#[derive(Parser)]
struct ScenarioArgs {
    /// Path to the baseline bag file
    bag: PathBuf,

    /// Path to the change list (JSON or YAML)
    changes: PathBuf,

    #[command(flatten)]
    grading: GradingArgs,

    /// Most changes accepted in one scenario
    #[arg(long)]
    max_changes: Option<usize>,

    /// Exit with code 1 if the scenario lowers the overall score
    #[arg(long)]
    fail_on_decline: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Grade a bag
    Grade(GradeArgs),

    /// Grade several bags in parallel, one line per bag
    GradeMany(GradeManyArgs),

    /// Project how a list of equipment changes would move the grade
    Scenario(ScenarioArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .clubfit.yaml
    Init {
        /// Where to write (defaults to .clubfit.yaml in the current directory)
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    match run(cli) {
        Ok(code) if code != exit_codes::SUCCESS => std::process::exit(code),
        Ok(_) => {}
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}

/// Dispatch to command handlers, returning the process exit code
fn run(cli: Cli) -> Result<i32> {
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Grade(args) => {
            let overrides = args.grading.overrides(cli.no_color)?;
            let app = cli::resolve_config(config_path, &overrides)?;
            cli::run_grade(GradeConfig {
                bag_path: args.bag,
                app,
                min_score: args.min_score,
                max_issues: args.max_issues,
                quiet: cli.quiet,
            })
        }

        Commands::GradeMany(args) => {
            let overrides = args.grading.overrides(cli.no_color)?;
            let app = cli::resolve_config(config_path, &overrides)?;
            cli::run_grade_many(&args.bags, &app, args.min_score, cli.quiet)
        }

        Commands::Scenario(args) => {
            let mut overrides = args.grading.overrides(cli.no_color)?;
            if let Some(max) = args.max_changes {
                overrides.scenario.max_changes = max;
            }
            let app = cli::resolve_config(config_path, &overrides)?;
            cli::run_scenario(ScenarioConfig {
                bag_path: args.bag,
                changes_path: args.changes,
                app,
                fail_on_decline: args.fail_on_decline,
                quiet: cli.quiet,
            })
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "clubfit", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            cli::run_config_schema(output.as_deref())?;
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => {
            match action {
                ConfigAction::Show => cli::run_config_show(config_path)?,
                ConfigAction::Path => cli::run_config_path(config_path)?,
                ConfigAction::Init { path, force } => {
                    cli::run_config_init(path, force)?;
                }
            }
            Ok(exit_codes::SUCCESS)
        }
    }
}
