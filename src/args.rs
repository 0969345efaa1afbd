use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

/// Render nested-box reports to PDF, from the command line or over HTTP.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace); overrides the config file
    #[arg(long, global = true)]
    pub log_level: Option<LevelFilter>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Render a report to a PDF file
    Render {
        /// JSON report template; defaults to the configured one, then the sample report
        #[arg(short, long)]
        template: Option<PathBuf>,

        /// Path to the output PDF file
        #[arg(short, long, default_value = "report.pdf")]
        output: PathBuf,
    },
    /// Start the web server
    Serve {
        /// Listen address; overrides the config file
        #[arg(short, long)]
        address: Option<String>,
    },
}
