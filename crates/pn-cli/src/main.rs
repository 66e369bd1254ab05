//! paramnormal CLI

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use pn_core::{Family, Mode};
use pn_prob::{ClosedFormEstimator, FrozenDistribution};
use pn_translate::{Kwargs, ParamSpec, signature, translate};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "paramnormal")]
#[command(about = "paramnormal - textbook parameters for scipy-style distributions")]
#[command(version)]
struct Cli {
    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate textbook parameters to library keywords
    Translate {
        /// Distribution family (e.g. normal, chi_squared)
        #[arg(short, long)]
        family: Family,

        /// Parameter assignment `name=value`; Greek names accepted, `none` is null.
        #[arg(short, long = "param")]
        params: Vec<String>,

        /// Emit fit-mode keys (floc, fscale, f0, ...)
        #[arg(long)]
        fit: bool,

        /// Output file for results (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Draw samples from a frozen distribution
    Sample {
        /// Distribution family
        #[arg(short, long)]
        family: Family,

        /// Parameter assignment `name=value`
        #[arg(short, long = "param")]
        params: Vec<String>,

        /// Number of draws
        #[arg(short, long, default_value = "10")]
        n: usize,

        /// RNG seed
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Output file for results (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Closed-form maximum-likelihood fit
    Fit {
        /// Distribution family
        #[arg(short, long)]
        family: Family,

        /// Input data (JSON array of numbers)
        #[arg(short, long)]
        input: PathBuf,

        /// Fixed parameter `name=value`
        #[arg(short, long = "param")]
        params: Vec<String>,

        /// Output file for results (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List supported families and their parameters
    Families {
        /// Output file for results (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print version
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt().with_max_level(cli.log_level).with_target(false).init();

    match cli.command {
        Commands::Translate { family, params, fit, output } => {
            cmd_translate(family, &params, fit, output.as_ref())
        }
        Commands::Sample { family, params, n, seed, output } => {
            cmd_sample(family, &params, n, seed, output.as_ref())
        }
        Commands::Fit { family, input, params, output } => {
            cmd_fit(family, &input, &params, output.as_ref())
        }
        Commands::Families { output } => cmd_families(output.as_ref()),
        Commands::Version => {
            println!("paramnormal {}", pn_core::VERSION);
            Ok(())
        }
    }
}

fn parse_params(assignments: &[String]) -> Result<Kwargs> {
    let mut kwargs = Kwargs::new();
    for a in assignments {
        kwargs.push_assignment(a)?;
    }
    Ok(kwargs)
}

fn cmd_translate(
    family: Family,
    params: &[String],
    fit: bool,
    output: Option<&PathBuf>,
) -> Result<()> {
    let kwargs = parse_params(params)?;
    let mode = if fit { Mode::Fit } else { Mode::Construct };
    let library = translate(family, &kwargs, mode)?;
    tracing::info!(%family, fit, keys = library.len(), "translated");
    write_json(output, serde_json::to_value(&library)?)
}

fn cmd_sample(
    family: Family,
    params: &[String],
    n: usize,
    seed: u64,
    output: Option<&PathBuf>,
) -> Result<()> {
    let dist = FrozenDistribution::from_kwargs(family, &parse_params(params)?)?;
    let mut rng = StdRng::seed_from_u64(seed);
    let draws = dist.sample_n(&mut rng, n);
    tracing::info!(%family, n, seed, "sampled");
    write_json(output, serde_json::to_value(draws)?)
}

fn cmd_fit(
    family: Family,
    input: &PathBuf,
    params: &[String],
    output: Option<&PathBuf>,
) -> Result<()> {
    let text = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let data: Vec<f64> = serde_json::from_str(&text)
        .with_context(|| format!("{} must be a JSON array of numbers", input.display()))?;
    if data.is_empty() {
        bail!("no data points in {}", input.display());
    }
    tracing::info!(%family, points = data.len(), "loaded data");

    let fixed = parse_params(params)?;
    let fitted = pn_prob::fit(family, &data, &fixed, &ClosedFormEstimator)?;
    tracing::info!(?fitted, "fit complete");
    write_json(output, serde_json::to_value(&fitted)?)
}

#[derive(Serialize)]
struct FamilyEntry {
    family: Family,
    parameters: &'static [ParamSpec],
}

fn cmd_families(output: Option<&PathBuf>) -> Result<()> {
    let entries: Vec<FamilyEntry> = Family::ALL
        .into_iter()
        .map(|family| FamilyEntry { family, parameters: signature(family) })
        .collect();
    write_json(output, serde_json::to_value(entries)?)
}

fn write_json(output: Option<&PathBuf>, value: serde_json::Value) -> Result<()> {
    if let Some(path) = output {
        std::fs::write(path, serde_json::to_string_pretty(&value)?)?;
    } else {
        println!("{}", serde_json::to_string_pretty(&value)?);
    }
    Ok(())
}
