use std::path::PathBuf;

use clap::Parser;

use maple_core::runtime::{run_with_options, RunOptions};

/// Knowledge search and quick-action launcher core
#[derive(Parser)]
#[command(name = "maple-core")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Search the knowledge base and detect create intents")]
struct Cli {
    /// Config file (.toml, .json or .json5)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print results as JSON lines
    #[arg(long)]
    json: bool,

    /// Query to run once; omit to read queries from stdin
    query: Vec<String>,
}

fn main() {
    let cli = Cli::parse();
    let query = if cli.query.is_empty() {
        None
    } else {
        Some(cli.query.join(" "))
    };
    let options = RunOptions {
        config_path: cli.config,
        json: cli.json,
        query,
    };

    if let Err(error) = run_with_options(options) {
        eprintln!("[maple-core] runtime failed: {error}");
        std::process::exit(error.exit_code());
    }
}
