//! ECS-to-PoP resolver binary.
//!
//! Loads the routing table, then answers ECS queries read line-by-line
//! from stdin, one result line per query on stdout.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use ecs_router::config::{load_config, ResolverConfig};
use ecs_router::{observability, query, table};

#[derive(Parser)]
#[command(name = "ecs-router")]
#[command(about = "Resolve ECS prefixes to serving PoPs over a static routing table", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Routing table path (overrides the config file).
    #[arg(short, long)]
    table: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Config drives the logging setup, so it is loaded first; failures
    // here can only go to stderr directly.
    let config = match cli.config {
        Some(path) => match load_config(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load config {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => ResolverConfig::default(),
    };

    observability::logging::init(&config.observability);

    tracing::info!("ecs-router v0.1.0 starting");

    let table_path = cli
        .table
        .unwrap_or_else(|| PathBuf::from(&config.table.path));

    tracing::info!(
        table_path = %table_path.display(),
        "Loading routing table"
    );

    // A bad table is fatal: serving queries against partial data is
    // worse than not serving at all.
    let trie = match table::load_from_path(&table_path) {
        Ok(trie) => trie,
        Err(e) => {
            tracing::error!(error = %e, "Routing table load failed");
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    if let Err(e) = query::run(&trie, stdin, stdout) {
        tracing::error!(error = %e, "Query stream failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
