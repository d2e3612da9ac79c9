//! Command line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Convert a KNX project into the `knx:` section of a Home Assistant
/// configuration.
#[derive(Debug, Parser)]
#[command(name = "knxha", author, version, about, long_about = None)]
pub struct Cli {
    /// Project dump produced by xknxproject (JSON)
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Annotate every group address with its range path
    #[arg(short, long)]
    pub comments: bool,

    /// Log at debug level and list the group addresses left unconverted
    #[arg(short, long)]
    pub debug: bool,

    /// Configuration file [default: knxha.toml if present]
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write the configuration here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Project language, e.g. de-DE
    #[arg(short, long, value_name = "TAG")]
    pub language: Option<String>,
}
