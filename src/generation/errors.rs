//! Error types for the generation domain

use crate::infrastructure::templates::TemplateError;
use thiserror::Error;

/// Errors that can occur while rendering build descriptors
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Unsupported {option}: {value}")]
    UnsupportedVersion { option: &'static str, value: String },

    #[error("Unsupported {option}: {value}")]
    UnsupportedOption { option: &'static str, value: String },

    #[error("Invalid descriptor: {0}")]
    InvalidDescriptor(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),
}

impl GenerationError {
    pub fn unsupported_version(option: &'static str, value: impl ToString) -> Self {
        Self::UnsupportedVersion {
            option,
            value: value.to_string(),
        }
    }

    pub fn unsupported_option(option: &'static str, value: impl ToString) -> Self {
        Self::UnsupportedOption {
            option,
            value: value.to_string(),
        }
    }

    /// Name of the caller-supplied option that was rejected, if any
    pub fn option(&self) -> Option<&'static str> {
        match self {
            Self::UnsupportedVersion { option, .. } | Self::UnsupportedOption { option, .. } => {
                Some(option)
            }
            _ => None,
        }
    }
}
