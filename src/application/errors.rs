//! Application layer error types

use std::path::PathBuf;
use thiserror::Error;

/// Application layer errors
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Generation error: {0}")]
    GenerationError(#[from] crate::generation::GenerationError),

    #[error("Template error: {0}")]
    TemplateError(#[from] crate::infrastructure::templates::TemplateError),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] crate::error::Error),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationError),

    #[error("Output error: {0}")]
    OutputError(String),

    #[error("Refusing to overwrite {} (use --force)", .0.display())]
    OutputExists(PathBuf),
}

/// Validation errors for requests
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Project name cannot be empty")]
    EmptyProjectName,

    #[error("Invalid project name: {0}")]
    InvalidProjectName(String),

    #[error("Missing required field: {0}")]
    MissingField(String),
}
