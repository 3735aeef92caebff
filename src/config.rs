//! Command line options and the resolved run configuration.

use crate::report::ReportFormat;
use clap::Parser;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Tokenize a C# source file, print it colour-coded and write token reports.
#[derive(Debug, Parser)]
#[command(name = "lexcolor", version, about)]
pub struct Cli {
    /// Source file to analyze
    pub file: PathBuf,

    /// Directory the reports are written to
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// Report formats to write (repeat or comma-separate; default: all)
    #[arg(short, long = "format", value_enum, value_delimiter = ',')]
    pub formats: Vec<ReportFormat>,

    /// Skip writing report files
    #[arg(long)]
    pub no_reports: bool,

    /// Disable ANSI colours (also honoured through NO_COLOR)
    #[arg(long)]
    pub no_color: bool,

    /// Browse the result in a full-screen viewer
    #[arg(short, long)]
    pub interactive: bool,

    /// Accept files without a `.cs` extension
    #[arg(long)]
    pub any_extension: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("file '{}' not found", .0.display())]
    NotFound(PathBuf),

    #[error("'{}' is not a regular file", .0.display())]
    NotAFile(PathBuf),

    #[error("'{}' does not have a .cs extension (use --any-extension to override)", .0.display())]
    NotCSharp(PathBuf),
}

/// Resolved options for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub out_dir: PathBuf,
    pub formats: Vec<ReportFormat>,
    pub write_reports: bool,
    pub color: bool,
    pub interactive: bool,
    pub require_cs_extension: bool,
}

impl Config {
    /// Resolve parsed arguments. `no_color_env` is whether `NO_COLOR` is set
    /// to a non-empty value.
    pub fn from_cli(cli: Cli, no_color_env: bool) -> Self {
        let formats = if cli.formats.is_empty() {
            ReportFormat::ALL.to_vec()
        } else {
            let mut formats = Vec::with_capacity(cli.formats.len());
            for format in cli.formats {
                if !formats.contains(&format) {
                    formats.push(format);
                }
            }
            formats
        };

        Self {
            input: cli.file,
            out_dir: cli.out_dir,
            formats,
            write_reports: !cli.no_reports,
            color: !(cli.no_color || no_color_env),
            interactive: cli.interactive,
            require_cs_extension: !cli.any_extension,
        }
    }

    /// Whether `NO_COLOR` is set in the environment.
    pub fn no_color_env() -> bool {
        std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty())
    }

    /// Check the input path before reading it.
    pub fn validate_input(&self) -> Result<(), ConfigError> {
        let path = self.input.as_path();
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        if !path.is_file() {
            return Err(ConfigError::NotAFile(path.to_path_buf()));
        }
        if self.require_cs_extension && !has_cs_extension(path) {
            return Err(ConfigError::NotCSharp(path.to_path_buf()));
        }
        Ok(())
    }

    /// File name shown in reports and the viewer title.
    pub fn source_name(&self) -> String {
        self.input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.input.display().to_string())
    }
}

fn has_cs_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("cs"))
}
