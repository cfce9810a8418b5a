//! CLI entry point for the full tree view

use std::path::PathBuf;
use std::process;

use clap::Parser;
use sizetree::{OutputConfig, StreamingFormatter, cli};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "analyzer")]
#[command(about = "Show every file and directory, biggest first")]
#[command(version)]
struct Args {
    /// Directory to analyze
    #[arg(default_value = ".")]
    path: PathBuf,
}

fn main() {
    let args = Args::parse();
    cli::init_logging();

    let root = match cli::resolve_root(&args.path) {
        Ok(root) => root,
        Err(e) => {
            println!("{}", e);
            process::exit(1);
        }
    };

    info!(root = %root.display(), "analyzing tree");
    let mut formatter = StreamingFormatter::new(OutputConfig::with_color(cli::should_use_color()));
    if let Err(e) = cli::run_tree(&root, &mut formatter) {
        eprintln!("analyzer: error writing output: {}", e);
        process::exit(1);
    }
    info!("done");
}
