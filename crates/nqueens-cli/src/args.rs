use crate::settings::Settings;
use clap::{Parser, ValueEnum};
use nqueens_core::SolutionMode;
use std::path::PathBuf;

/// Solve the N-Queens problem
#[derive(Debug, Parser)]
#[command(name = "nqueens")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Place N non-attacking queens on an NxN board", long_about = None)]
pub struct Cli {
    /// Board size (number of queens)
    #[arg(short, long, value_name = "N", allow_negative_numbers = true)]
    pub size: Option<i64>,

    /// Which solutions to keep
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Draw the board live while searching
    #[arg(long)]
    pub visualize: bool,

    /// Pause after each placement when visualizing, in milliseconds
    #[arg(long, value_name = "MS")]
    pub delay: Option<u64>,

    /// Write a report to DIR (default: the local data directory)
    #[arg(long, value_name = "DIR", num_args = 0..=1)]
    pub export: Option<Option<PathBuf>>,

    /// Print the full result as JSON
    #[arg(long)]
    pub json: bool,

    /// Most solutions listed in a report
    #[arg(long, value_name = "COUNT")]
    pub max_output: Option<usize>,

    /// Log debug output
    #[arg(short, long)]
    pub verbose: bool,

    /// Settings file to use instead of the default location
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Single,
    Unique,
    All,
}

impl From<ModeArg> for SolutionMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Single => SolutionMode::Single,
            ModeArg::Unique => SolutionMode::Unique,
            ModeArg::All => SolutionMode::All,
        }
    }
}

/// Command line merged over the settings file.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOptions {
    /// Unvalidated board size
    pub size: i64,
    pub mode: SolutionMode,
    pub visualize: bool,
    pub delay_ms: u64,
    pub max_output: usize,
    pub export_dir: Option<PathBuf>,
    pub json: bool,
}

impl RunOptions {
    pub fn resolve(cli: &Cli, settings: &Settings) -> Self {
        Self {
            size: cli.size.unwrap_or(settings.board_size),
            mode: cli.mode.map(Into::into).unwrap_or(settings.mode),
            visualize: cli.visualize || settings.visualize,
            delay_ms: cli.delay.unwrap_or(settings.delay_ms),
            max_output: cli.max_output.unwrap_or(settings.max_output),
            export_dir: cli
                .export
                .as_ref()
                .map(|dir| dir.clone().unwrap_or_else(|| settings.results_dir())),
            json: cli.json,
        }
    }
}
