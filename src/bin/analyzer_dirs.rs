//! CLI entry point for the directories-only view

use std::path::PathBuf;
use std::process;

use clap::Parser;
use sizetree::{OutputConfig, StreamingFormatter, cli};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "analyzer-dirs")]
#[command(about = "Show the directory tree, biggest first")]
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

    info!(root = %root.display(), "analyzing directories");
    let mut formatter = StreamingFormatter::new(OutputConfig::with_color(cli::should_use_color()));
    if let Err(e) = cli::run_dirs(&root, &mut formatter) {
        eprintln!("analyzer-dirs: error writing output: {}", e);
        process::exit(1);
    }
    info!("done");
}
