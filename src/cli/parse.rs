//! CLI parse: clap types for propfile. No behavior; definitions only.

use clap::Parser;
use std::path::PathBuf;

/// Show the merged result of layered `.properties` files
#[derive(Parser, Debug)]
#[command(name = "propfile")]
#[command(about = "Merge bundled, local and per-user .properties files and print the result")]
pub struct Cli {
    /// Logical configuration name (reads <NAME>.properties)
    pub name: String,

    /// Subdirectory of the home directory holding global overrides
    #[arg(long)]
    pub namespace: Option<String>,

    /// Directory with bundled defaults (default: `resources/` next to the executable)
    #[arg(long)]
    pub resources: Option<PathBuf>,

    /// Directory searched for the local override (default: current directory)
    #[arg(long)]
    pub workspace: Option<PathBuf>,

    /// Output format (text or json)
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    pub format: String,

    /// Show the layer each value came from
    #[arg(long, default_value = "false")]
    pub origins: bool,

    /// Enable verbose logging (debug level)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, value_parser = ["text", "json"])]
    pub log_format: Option<String>,

    /// Per-target log level, e.g. `propfile::loader=trace` (repeatable)
    #[arg(long = "log-module", value_name = "TARGET=LEVEL")]
    pub log_modules: Vec<String>,

    /// Disable ANSI colors in log output
    #[arg(long, default_value = "false")]
    pub no_color: bool,
}
