//! qoyllur - Qoyllur Rit'i SPARQL explorer
//!
//! Command-line interface and web page launcher

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use qoyllur_explorer::ontology::shared_graph;
use qoyllur_explorer::web::render::MISSING_QUERY_WARNING;
use qoyllur_explorer::{
    export, web, AppState, DisplayMode, ExplorerConfig, Preset, QueryRunner, ResultSet,
};

#[derive(Parser)]
#[command(name = "qoyllur")]
#[command(version)]
#[command(about = "Qoyllur Rit'i SPARQL explorer", long_about = None)]
struct Cli {
    /// Config file (default: ./qoyllur.yaml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Turtle file to load instead of the configured one
    #[arg(long, global = true)]
    ontology: Option<PathBuf>,
    /// Enable verbose logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the explorer web page
    Serve {
        /// Listen address (e.g., 127.0.0.1:8501)
        #[arg(long)]
        bind: Option<String>,
    },
    /// List the preset queries
    Presets,
    /// Print the SPARQL text of a preset
    Show {
        /// Preset number (1-5)
        number: u8,
    },
    /// Run a preset query
    Run {
        /// Preset number (1-5)
        number: u8,
        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
        /// Also write the rows as CSV to this file
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Run a custom SPARQL query
    Query {
        /// Query text
        #[arg(required_unless_present = "file")]
        text: Option<String>,
        /// Read the query text from a file
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,
        /// Shorten festival identifiers and web IRIs
        #[arg(long)]
        short: bool,
        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
        /// Also write the rows as CSV to this file
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Show ontology file and triple count
    Stats,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Csv,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, matches!(cli.command, Commands::Serve { .. }));

    let mut config = load_config(&cli)?;

    match cli.command {
        Commands::Serve { bind } => {
            if let Some(bind) = bind {
                config.bind = bind;
            }
            config.validate()?;
            let addr = config.bind_addr()?;

            let state = Arc::new(AppState::new(shared_graph(&config.ontology), &config));
            web::serve(state, addr).await?;
        }

        Commands::Presets => {
            for preset in Preset::ALL {
                println!(
                    "{}  {:<18} {}",
                    preset.number().to_string().bold(),
                    preset.label(),
                    preset.title()
                );
            }
        }

        Commands::Show { number } => {
            let preset = Preset::from_number(number)?;
            println!("{}", preset.sparql());
        }

        Commands::Run { number, format, output } => {
            let preset = Preset::from_number(number)?;
            let graph = shared_graph(&config.ontology)?;
            let results = QueryRunner::new(config.namespace_marker.clone())
                .run(&graph, preset.sparql(), DisplayMode::Shortened)?;

            if format == OutputFormat::Table {
                println!("{}", preset.title().bold());
            }
            emit(&results, format, output, false)?;
        }

        Commands::Query { text, file, short, format, output } => {
            let sparql = match (text, file) {
                (Some(text), _) => text,
                (None, Some(path)) => std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read query file {}", path.display()))?,
                (None, None) => bail!(MISSING_QUERY_WARNING),
            };
            if sparql.trim().is_empty() {
                bail!(MISSING_QUERY_WARNING);
            }
            let mode = if short { DisplayMode::Shortened } else { DisplayMode::Raw };

            let graph = shared_graph(&config.ontology)?;
            let results = QueryRunner::new(config.namespace_marker.clone()).run(&graph, &sparql, mode)?;
            emit(&results, format, output, true)?;
        }

        Commands::Stats => {
            let graph = shared_graph(&config.ontology)?;
            println!("Ontology: {}", graph.source().display());
            println!("Triples:  {}", graph.triple_count());
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool, serving: bool) {
    let default_level = match (verbose, serving) {
        (true, _) => "debug",
        (false, true) => "info",
        (false, false) => "warn",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> anyhow::Result<ExplorerConfig> {
    let mut config = match &cli.config {
        Some(path) => ExplorerConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ExplorerConfig::load_or_default(std::env::current_dir()?)?,
    };

    if let Some(ontology) = &cli.ontology {
        config.ontology = ontology.clone();
    }

    Ok(config)
}

fn emit(
    results: &ResultSet,
    format: OutputFormat,
    output: Option<PathBuf>,
    custom: bool,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => print_table(results, custom),
        OutputFormat::Csv => print!("{}", export::to_csv(results)?),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(results)?),
    }

    if let Some(path) = output {
        let rows = export::write_csv(results, &path)?;
        eprintln!("📥 {} rows written to {}", rows, path.display());
    }

    Ok(())
}

fn print_table(results: &ResultSet, custom: bool) {
    if results.is_empty() {
        println!("{}", "⚠️  Sin resultados".yellow());
        return;
    }

    let banner = if custom {
        format!("✅ {} resultados", results.len())
    } else {
        format!("✅ Resultados: {}", results.len())
    };
    println!("{}", banner.green());

    let mut widths: Vec<usize> = results.variables().iter().map(|v| v.chars().count()).collect();
    for row in results.rows() {
        for (width, cell) in widths.iter_mut().zip(row.cells()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header: Vec<String> = results
        .variables()
        .iter()
        .zip(&widths)
        .map(|(v, w)| pad(v, *w))
        .collect();
    println!("{}", header.join("  ").bold());

    let rule: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
    println!("{}", rule.join("  "));

    for row in results.rows() {
        let line: Vec<String> = row.cells().iter().zip(&widths).map(|(c, w)| pad(c, *w)).collect();
        println!("{}", line.join("  ").trim_end());
    }
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.chars().count());
    format!("{}{}", text, " ".repeat(fill))
}
