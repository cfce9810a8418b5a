//! CLI entry point for the large-files view

use std::path::PathBuf;
use std::process;

use clap::Parser;
use sizetree::{OutputConfig, StreamingFormatter, Threshold, cli};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "analyzer-large")]
#[command(about = "List files above a size threshold, grouped by directory")]
#[command(version)]
struct Args {
    /// Directory to analyze
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Only show files bigger than this many MB (default: 98)
    #[arg(value_name = "THRESHOLD_MB", allow_hyphen_values = true)]
    threshold: Option<String>,
}

fn main() {
    let args = Args::parse();
    cli::init_logging();

    // An unusable threshold is not fatal: warn and keep the default.
    let threshold = match cli::parse_threshold(args.threshold.as_deref()) {
        Ok(t) => t,
        Err(e) => {
            debug!(error = ?e, "falling back to default threshold");
            println!("{}", e);
            Threshold::default()
        }
    };

    let root = match cli::resolve_root(&args.path) {
        Ok(root) => root,
        Err(e) => {
            println!("{}", e);
            process::exit(1);
        }
    };

    info!(root = %root.display(), threshold_mb = threshold.mb, "searching large files");
    let mut formatter = StreamingFormatter::new(OutputConfig::with_color(cli::should_use_color()));
    match cli::run_large(&root, threshold, &mut formatter) {
        Ok(count) => info!(count, "done"),
        Err(e) => {
            eprintln!("analyzer-large: error writing output: {}", e);
            process::exit(1);
        }
    }
}
