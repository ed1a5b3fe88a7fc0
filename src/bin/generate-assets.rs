#![forbid(unsafe_code)]
//! Writes shell completions and the man page for `dirtree`.
//!
//! Usage: `generate-assets [OUT_DIR]` (default `dist`). The output directory
//! is replaced on every run.

use anyhow::Context;
use clap::CommandFactory;
use clap_complete::{generate_to, Shell};
use clap_mangen::Man;
use dirtree::cli::Args;
use dirtree::fs_ops;
use std::path::PathBuf;

const BIN_NAME: &str = "dirtree";

fn main() -> anyhow::Result<()> {
    let out_dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("dist"));

    if fs_ops::exists(&out_dir) {
        fs_ops::remove(&out_dir).context("failed to clear previous assets")?;
    }
    let completions_dir = out_dir.join("completions");
    let man_dir = out_dir.join("man");
    fs_ops::create_directory(&completions_dir)?;
    fs_ops::create_directory(&man_dir)?;

    for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell] {
        generate_to(shell, &mut Args::command(), BIN_NAME, &completions_dir)
            .with_context(|| format!("failed to generate {shell} completions"))?;
    }

    let mut page = Vec::new();
    Man::new(Args::command()).render(&mut page)?;
    std::fs::write(man_dir.join(format!("{BIN_NAME}.1")), page)?;

    let written = dirtree::scan(&out_dir, &dirtree::ScanOptions::default())?;
    eprintln!(
        "generated {} files under {}",
        written.count_files(true),
        out_dir.display()
    );
    Ok(())
}
