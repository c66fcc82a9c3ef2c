//! # Etiqueta CLI
//!
//! Command-line interface for TSPL label generation.
//!
//! ## Usage
//!
//! ```bash
//! # List available label presets
//! etiqueta presets
//!
//! # Build one label to stdout
//! etiqueta build --preset 51x25 --name "Producto de Prueba" --barcode 1234567890123 --price 29.99
//!
//! # Build a JSON batch into a file for the spooler
//! etiqueta batch labels.json --output job.prn
//!
//! # Check a job before sending it
//! etiqueta validate job.prn
//!
//! # Serve the HTTP API
//! etiqueta serve --listen 0.0.0.0:8080
//! ```
//!
//! Logs go to stderr and are filtered by `RUST_LOG` (default
//! `etiqueta=info`), so stdout carries nothing but TSPL.

use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use etiqueta::{
    EtiquetaError, LabelBuilder, LabelContent,
    ir::{self, CommandStream},
    json_api::LabelRequest,
    label::parse_price,
    metrics::TableEstimator,
    printer::presets,
    server::{self, ServerConfig},
};

/// Etiqueta - TSPL product label generator
#[derive(Parser, Debug)]
#[command(name = "etiqueta")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Calibrated font width table (JSON) used instead of the built-in one
    #[arg(long, global = true, value_name = "FILE")]
    metrics: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List label presets
    Presets {
        /// Print as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Build a single label
    Build {
        /// Preset key (see `etiqueta presets`)
        #[arg(long, default_value = "51x25")]
        preset: String,

        /// Product name
        #[arg(long)]
        name: String,

        /// Barcode payload; omit for no barcode
        #[arg(long, default_value = "")]
        barcode: String,

        /// Price, e.g. 29.99 or '$29.99'; omit for no price line
        #[arg(long)]
        price: Option<String>,

        /// SKU line, on presets that have one
        #[arg(long)]
        sku: Option<String>,

        /// Copies of the label
        #[arg(long, default_value = "1")]
        copies: u32,

        /// Write to file instead of stdout
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Build a JSON batch request into one job
    Batch {
        /// Request file (`-` for stdin)
        file: PathBuf,

        /// Write to file instead of stdout
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Check a TSPL job for structural problems
    Validate {
        /// Job file (`-` for stdin)
        file: PathBuf,
    },

    /// Serve the HTTP API
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:8080")]
        listen: String,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("{}=info", env!("CARGO_PKG_NAME")))),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            if matches!(e, EtiquetaError::UnknownPreset(_)) {
                eprintln!(
                    "Available presets: {}",
                    presets::keys().collect::<Vec<_>>().join(", ")
                );
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode, EtiquetaError> {
    let cli = Cli::parse();
    let metrics = cli
        .metrics
        .as_deref()
        .map(TableEstimator::from_json_file)
        .transpose()?;

    match cli.command {
        Commands::Presets { json } => {
            if json {
                let summaries: Vec<_> = presets::list().iter().map(|p| p.summary()).collect();
                println!("{}", serde_json::to_string_pretty(&summaries)?);
            } else {
                println!("Available presets:");
                for p in presets::list() {
                    println!(
                        "  {:<8} {:>5} x {:<5} mm  {:>3} x {:<3} dots  {} DPI  {}",
                        p.key,
                        p.config.width,
                        p.config.height,
                        p.config.width_dots(),
                        p.config.height_dots(),
                        p.config.dpi,
                        p.description
                    );
                }
            }
        }

        Commands::Build {
            preset,
            name,
            barcode,
            price,
            sku,
            copies,
            output,
        } => {
            let content = LabelContent {
                name,
                barcode,
                price: price.as_deref().and_then(parse_price),
                sku,
            };
            let mut builder = LabelBuilder::from_preset(&preset)?.with_copies(copies);
            if let Some(table) = &metrics {
                let dpi = builder.config().dpi;
                builder = builder.with_estimator(table.for_dpi(dpi));
            }
            let stream = builder.build(&content)?;
            write_stream(&stream, output.as_deref())?;
        }

        Commands::Batch { file, output } => {
            let request = LabelRequest::from_json(&read_input(&file)?)?;
            let stream = match &metrics {
                Some(table) => request.to_commands_with_table(table)?,
                None => request.to_commands()?,
            };
            tracing::info!(
                preset = %request.preset,
                labels = request.labels.len(),
                "built batch"
            );
            write_stream(&stream, output.as_deref())?;
        }

        Commands::Validate { file } => {
            let stream = CommandStream::from_raw(read_input(&file)?);
            let violations = ir::validate(&stream);
            if violations.is_empty() {
                println!("OK: {} instructions", stream.lines().count());
            } else {
                for v in &violations {
                    println!("{}", v);
                }
                return Ok(ExitCode::FAILURE);
            }
        }

        Commands::Serve { listen } => {
            let config = ServerConfig {
                listen_addr: listen,
                metrics,
            };
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(server::serve(config))?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn read_input(path: &Path) -> Result<String, EtiquetaError> {
    if path == Path::new("-") {
        Ok(std::io::read_to_string(std::io::stdin())?)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}

fn write_stream(stream: &CommandStream, output: Option<&Path>) -> Result<(), EtiquetaError> {
    match output {
        Some(path) => {
            std::fs::write(path, stream.as_bytes())?;
            tracing::info!(path = %path.display(), bytes = stream.as_bytes().len(), "wrote job");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(stream.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
