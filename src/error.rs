use enroll_render_core::RenderError;
use enroll_report::ReportError;
use enroll_types::GeometryError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing configuration file: {0}")]
    MissingConfig(PathBuf),

    #[error("Failed to parse configuration {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("Template error: {0}")]
    Template(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid style value: {0}")]
    Geometry(#[from] GeometryError),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    #[error("PDF generation error: {0}")]
    Render(#[from] RenderError),

    #[error("Logging setup failed: {0}")]
    Logging(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
