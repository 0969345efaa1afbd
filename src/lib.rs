//! enroll: nested-box reports rendered to PDF.
//!
//! The element tree and its drawing rules live in `enroll-report`; this
//! crate wires them to configuration, logging, JSON templates, the PDF
//! surface, a command line and a small web server.

mod args;
pub mod config;
mod error;
pub mod logging;
pub mod report;
pub mod sample;
pub mod server;
pub mod template;

pub use args::{Args, Command};
pub use config::Config;
pub use error::AppError;
pub use report::{Report, load_report};
pub use template::ReportTemplate;

pub use enroll_report::{
    BoxNode, Element, ElementKind, ImageNode, LabelNode, ReportError, TitledBoxNode,
    TitledBoxOptions,
};
pub use enroll_types::{Color, Font, FontStyle, Offset, Position, RectStyle, Size};

use log::info;
use std::fs::File;
use std::io::BufWriter;

/// Runs a parsed command line against a loaded configuration.
pub fn run(args: Args, mut config: Config) -> Result<(), AppError> {
    match args.command {
        Command::Render { template, output } => {
            if template.is_some() {
                config.report.template = template;
            }
            let report = load_report(&config.report)?;
            let file = BufWriter::new(File::create(&output)?);
            report.write_pdf(file)?;
            info!("Report written to {}", output.display());
            Ok(())
        }
        Command::Serve { address } => {
            if let Some(address) = address {
                config.web_server.address = address;
            }
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?;
            runtime.block_on(server::serve(config))
        }
    }
}
