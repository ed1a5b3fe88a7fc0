use clap::Parser;
use std::path::PathBuf;

use crate::tree::ScanOptions;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "dirtree",
    version,
    about = "Scan a directory into a filtered tree",
    after_help = "Examples:\n  dirtree src --ext rs\n  dirtree . --ignore-dir target --ignore-dir .git\n  dirtree assets --ignore-ext skip --summary"
)]
pub struct Args {
    /// Directory to scan (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Directory names to skip together with their contents (repeatable)
    #[arg(short = 'I', long = "ignore-dir", action = clap::ArgAction::Append)]
    pub ignore_dirs: Vec<String>,

    /// File names to skip (repeatable)
    #[arg(long = "ignore-file", action = clap::ArgAction::Append)]
    pub ignore_files: Vec<String>,

    /// File extensions to skip, without the dot (repeatable)
    #[arg(long = "ignore-ext", action = clap::ArgAction::Append)]
    pub ignore_exts: Vec<String>,

    /// Only keep files with these extensions (repeatable)
    #[arg(short = 'e', long = "ext", action = clap::ArgAction::Append)]
    pub allow_exts: Vec<String>,

    /// Follow symbolic links
    #[arg(short = 'f', long = "follow-symlinks")]
    pub follow_symlinks: bool,

    /// Print only the directory and file counts
    #[arg(short = 's', long = "summary")]
    pub summary: bool,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Args {
    /// Enforce invariants after parsing.
    pub fn validated(mut self) -> Self {
        if self.quiet {
            self.verbose = 0;
        }
        // Respect NO_COLOR env var
        if std::env::var_os("NO_COLOR").is_some() {
            self.no_color = true;
        }
        self
    }

    /// Scan options described by the flags.
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions::new()
            .ignore_directories(self.ignore_dirs.iter().cloned())
            .ignore_files(self.ignore_files.iter().cloned())
            .ignore_extensions(self.ignore_exts.iter().map(|e| strip_dot(e)))
            .allow_extensions(self.allow_exts.iter().map(|e| strip_dot(e)))
            .follow_symlinks(self.follow_symlinks)
    }

    /// Default log filter when `RUST_LOG` is unset.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Accept `.rs` as well as `rs`.
fn strip_dot(ext: &str) -> String {
    ext.strip_prefix('.').unwrap_or(ext).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_map_onto_scan_options() {
        let args = Args::parse_from([
            "dirtree",
            "assets",
            "-I",
            "target",
            "--ignore-file",
            "Cargo.lock",
            "--ignore-ext",
            ".skip",
            "--ext",
            "rs",
            "-f",
        ]);
        let opts = args.scan_options();
        assert!(opts.ignore_directories.contains("target"));
        assert!(opts.ignore_files.contains("Cargo.lock"));
        assert!(opts.ignore_extensions.contains("skip"));
        assert!(opts.allow_extensions.contains("rs"));
        assert!(opts.follow_symlinks);
        assert_eq!(args.path, PathBuf::from("assets"));
    }

    #[test]
    fn verbosity_levels() {
        let args = Args::parse_from(["dirtree", "-vv"]).validated();
        assert_eq!(args.verbose, 2);
        assert_eq!(args.log_level(), "trace");

        let args = Args::parse_from(["dirtree", "-vv", "-q"]).validated();
        assert_eq!(args.verbose, 0, "quiet should reset verbosity to 0");
        assert_eq!(args.log_level(), "error");

        let args = Args::parse_from(["dirtree"]).validated();
        assert_eq!(args.log_level(), "warn");
    }
}
