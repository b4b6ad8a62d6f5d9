//! Rasterkit CLI - apply a single raster filter to an image file.

use anyhow::{anyhow, Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use log::info;
use rasterkit::prelude::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rasterkit")]
#[command(version, about = "Deterministic raster image filters", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Per-filter parameter flags. Each one maps onto the parameter of the same
/// name; the selected filter decides which of them it accepts.
#[derive(Args, Debug, Default)]
struct FilterFlags {
    /// Mosaic block size in pixels (1-100)
    #[arg(long, value_name = "N")]
    block_size: Option<i64>,

    /// Grayscale method: average or weighted
    #[arg(long, value_name = "METHOD")]
    method: Option<String>,

    /// High contrast threshold (0-255)
    #[arg(long, value_name = "N")]
    threshold: Option<i64>,

    /// Channel to keep: red, green or blue
    #[arg(long, value_name = "CHANNEL")]
    channel: Option<String>,

    /// Brightness delta (-255 to 255)
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    delta: Option<i64>,
}

impl FilterFlags {
    fn to_parameter_set(&self) -> ParameterSet {
        let mut params = ParameterSet::new();
        if let Some(v) = self.block_size {
            params.set("block_size", v);
        }
        if let Some(v) = &self.method {
            params.set("method", v.as_str());
        }
        if let Some(v) = self.threshold {
            params.set("threshold", v);
        }
        if let Some(v) = &self.channel {
            params.set("channel", v.as_str());
        }
        if let Some(v) = self.delta {
            params.set("delta", v);
        }
        params
    }
}

/// Resolve a filter name and its flags into a validated spec, attaching the
/// error's suggestion to the message.
fn resolve_spec(registry: &FilterRegistry, name: &str, flags: &FilterFlags) -> Result<FilterSpec> {
    FilterSpec::from_parameters(registry, name, &flags.to_parameter_set()).map_err(|e| {
        match e.suggested_fix() {
            Some(fix) => anyhow!("{}\n  Suggestion: {}", e, fix),
            None => anyhow!(e),
        }
    })
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a filter to an image
    Filter {
        /// Filter name (see `rasterkit list`)
        #[arg(value_name = "NAME")]
        name: String,

        /// Input image file
        #[arg(short, long, value_name = "PATH")]
        input: PathBuf,

        /// Output image file (defaults to <input>_<filter>.png next to the input)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        #[command(flatten)]
        params: FilterFlags,

        /// Process rows sequentially instead of in parallel
        #[arg(long)]
        sequential: bool,

        /// Number of parallel threads
        #[arg(short = 'j', long, value_name = "N")]
        threads: Option<usize>,

        /// TOML configuration file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Write a JSON run report to this file
        #[arg(long, value_name = "FILE")]
        report: Option<PathBuf>,
    },

    /// List all available filters
    List {
        /// Print the catalogue as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show detailed info about a filter
    Info {
        /// Filter name
        name: String,

        /// Print the metadata as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let registry = FilterRegistry::with_builtins();

    match cli.command {
        Commands::Filter {
            name,
            input,
            output,
            params,
            sequential,
            threads,
            config,
            report,
        } => {
            let spec = resolve_spec(&registry, &name, &params)?;

            let mut processing = match config {
                Some(path) => ProcessingConfig::from_toml_file(&path)
                    .with_context(|| format!("Failed to load config {}", path.display()))?,
                None => ProcessingConfig::default(),
            };
            if sequential {
                processing = processing.with_parallel(false);
            }
            if let Some(n) = threads {
                processing = processing.with_threads(n);
            }

            run_filter(&spec, input, output, processing, report)
        }
        Commands::List { json } => list_filters(&registry, json),
        Commands::Info { name, json } => filter_info(&registry, &name, json),
    }
}

fn run_filter(
    spec: &FilterSpec,
    input: PathBuf,
    output: Option<PathBuf>,
    config: ProcessingConfig,
    report: Option<PathBuf>,
) -> Result<()> {
    let output = output.unwrap_or_else(|| suggested_output_path(&input, spec));

    let image = load_image(&input, config.background_pixel())
        .with_context(|| format!("Failed to load {}", input.display()))?;

    info!("Processing {} -> {}", input.display(), output.display());
    let engine = ExecutionEngine::new(config);
    let result = engine.execute(spec, &image)?;

    save_image(&result.image, &output)
        .with_context(|| format!("Failed to save {}", output.display()))?;

    if let Some(report_path) = report {
        result
            .stats
            .write_json(&report_path)
            .with_context(|| format!("Failed to write report {}", report_path.display()))?;
    }

    println!("{}", output.display());
    Ok(())
}

fn list_filters(registry: &FilterRegistry, json: bool) -> Result<()> {
    if json {
        let all: Vec<_> = registry.filters().collect();
        println!("{}", serde_json::to_string_pretty(&all)?);
        return Ok(());
    }

    println!("Available filters ({} total):", registry.len());
    for metadata in registry.filters() {
        println!("  {:<16} {}", metadata.id, metadata.description);
    }
    Ok(())
}

fn filter_info(registry: &FilterRegistry, name: &str, json: bool) -> Result<()> {
    let metadata = registry
        .get_metadata(name)
        .ok_or_else(|| anyhow!(FilterError::UnknownFilter(name.to_string())))?;

    if json {
        println!("{}", serde_json::to_string_pretty(metadata)?);
        return Ok(());
    }

    println!("Filter: {}", metadata.name);
    println!("ID: {}", metadata.id);
    println!();
    println!("Description:");
    println!("  {}", metadata.description);

    if !metadata.parameters.is_empty() {
        println!();
        println!("Parameters:");
        for param in &metadata.parameters {
            let allowed: Vec<_> = param.constraints.iter().map(|c| c.describe()).collect();
            println!(
                "  --{} [{}] = {} ({})",
                param.name.replace('_', "-"),
                param.param_type,
                param.default_value,
                allowed.join(", ")
            );
            if !param.description.is_empty() {
                println!("    {}", param.description);
            }
        }
    }
    Ok(())
}
