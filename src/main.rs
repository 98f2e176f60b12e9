use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use unitgen::diagnostics::Diagnostics;
use unitgen::extract::InputFormat;
use unitgen::generate::{self, FileStatus, GeneratorConfig, Generation};
use unitgen::naming::to_display_identifier;

const DEFAULT_INPUT: &str = "qtty/qtty-ffi/include/qtty_ffi.h";
const DEFAULT_OUTPUT_DIR: &str = "include/qtty";

#[derive(Parser)]
#[command(name = "unitgen")]
#[command(about = "Generate typed unit wrappers and literal operators from the units FFI header", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate wrapper modules and literals.hpp
    Generate {
        #[command(flatten)]
        input: InputArgs,

        /// Output directory (receives literals.hpp and units/)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Verify generated files are up to date without writing them
    Check {
        #[command(flatten)]
        input: InputArgs,

        /// Output directory to compare against
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List extracted units grouped by dimension
    List {
        #[command(flatten)]
        input: InputArgs,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Input file (FFI header or unit table)
    input: Option<PathBuf>,

    /// Input format (default: header)
    #[arg(short, long, value_enum)]
    format: Option<InputFormat>,

    /// Config file (default: ./unitgen.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("unitgen=info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate { input, output } => run_generate(&input, output.as_deref()),
        Commands::Check { input, output } => run_check(&input, output.as_deref()),
        Commands::List { input, json } => run_list(&input, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct Resolved {
    config: GeneratorConfig,
    input: PathBuf,
    format: InputFormat,
}

// CLI flags win over the config file, which wins over built-in defaults
fn resolve(args: &InputArgs) -> Result<Resolved, Box<dyn std::error::Error>> {
    let config = GeneratorConfig::discover(args.config.as_deref())?;
    let input = args
        .input
        .clone()
        .or_else(|| config.input.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));
    let format = args.format.unwrap_or(config.format);

    Ok(Resolved {
        config,
        input,
        format,
    })
}

fn output_dir(config: &GeneratorConfig, output: Option<&Path>) -> PathBuf {
    output
        .map(Path::to_path_buf)
        .or_else(|| config.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR))
}

fn run_pipeline(resolved: &Resolved) -> Result<Generation, Box<dyn std::error::Error>> {
    tracing::info!("reading units from {}", resolved.input.display());
    let content = generate::load_input(&resolved.input)?;
    let generation = generate::generate(
        &content,
        resolved.format,
        &resolved.config.render_options(),
    );
    report_warnings(&generation.diagnostics);
    Ok(generation)
}

fn report_warnings(diagnostics: &Diagnostics) {
    for warning in &diagnostics.warnings {
        tracing::warn!("{}", warning);
    }
}

fn run_generate(args: &InputArgs, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let resolved = resolve(args)?;
    let out_dir = output_dir(&resolved.config, output);
    let generation = run_pipeline(&resolved)?;

    let reports = generate::write_generation(&out_dir, &generation)?;
    for report in &reports {
        let label = match report.status {
            FileStatus::Written => "Generated",
            _ => "Unchanged",
        };
        println!("{} {}", label, report.path.display());
    }

    println!();
    println!("{}", generation.summary);
    Ok(())
}

fn run_check(args: &InputArgs, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let resolved = resolve(args)?;
    let out_dir = output_dir(&resolved.config, output);
    let generation = run_pipeline(&resolved)?;

    let outdated: Vec<_> = generate::check_generation(&out_dir, &generation)
        .into_iter()
        .filter(|r| r.status != FileStatus::Unchanged)
        .collect();

    if outdated.is_empty() {
        println!("All {} generated files are up to date", generation.files.len());
        return Ok(());
    }

    for report in &outdated {
        let label = match report.status {
            FileStatus::Missing => "missing",
            _ => "stale",
        };
        println!("  {} ({})", report.path.display(), label);
    }
    Err(format!(
        "{} generated file(s) out of date; run `unitgen generate`",
        outdated.len()
    )
    .into())
}

fn run_list(args: &InputArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let resolved = resolve(args)?;
    let generation = run_pipeline(&resolved)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&generation.groups)?);
        return Ok(());
    }

    for (dimension, units) in generation.groups.iter() {
        println!("{} ({}):", dimension, units.len());
        for unit in units {
            let name = to_display_identifier(&unit.constant_name);
            let literal = generation
                .registry
                .iter()
                .find(|(_, owner)| *owner == name)
                .map(|(suffix, _)| format!("_{}", suffix))
                .unwrap_or_else(|| "-".to_string());
            println!(
                "  - {} [{}] {} ({}) literal: {}",
                unit.display_name, unit.discriminant, unit.constant_name, unit.symbol, literal
            );
        }
    }

    println!();
    println!("{}", generation.summary);
    Ok(())
}
