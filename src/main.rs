#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use dirtree::cli::Args;
use dirtree::render::{render_tree, summary_line, RenderConfig};
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run_app() {
        eprintln!("dirtree: {e:#}");
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let args = Args::parse().validated();
    init_logging(&args);

    let options = args.scan_options();
    let outcome = dirtree::scan_with_skipped(&args.path, &options)?;
    let root = outcome.root.sorted();

    let mut stdout = io::BufWriter::new(io::stdout().lock());
    if args.summary {
        writeln!(stdout, "{}", summary_line(&root))?;
    } else {
        let config = RenderConfig {
            use_color: !args.no_color,
        };
        render_tree(&mut stdout, &root, &config).context("failed to write tree")?;
    }
    stdout.flush()?;

    if !outcome.skipped.is_empty() && !args.quiet {
        eprintln!(
            "dirtree: skipped {} unreadable entr{}",
            outcome.skipped.len(),
            if outcome.skipped.len() == 1 { "y" } else { "ies" }
        );
    }
    Ok(())
}

/// Log to stderr so stdout only carries the tree. `RUST_LOG` overrides `-v`/`-q`.
fn init_logging(args: &Args) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}
