//! Error types for the collaborators around the merger.
//!
//! The merger itself cannot fail; every error here is raised before it runs.

use std::path::PathBuf;

/// Errors raised while decoding a translation dictionary.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input decoded but is not a flat object of string values.
    #[error("malformed dictionary: {0}")]
    Malformed(String),

    #[error("unsupported dictionary format '.{extension}' for {} (expected .json, .yaml or .yml)", .path.display())]
    UnsupportedFormat { path: PathBuf, extension: String },
}

/// Errors raised while obtaining template text.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("template unavailable: {}: {source}", .path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised by the scope conversion workflow.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("invalid file {found}: expected {expected}")]
    UnexpectedFileName { expected: &'static str, found: String },

    #[error("no dictionary supplied for any scope; nothing to convert")]
    NothingToConvert,

    #[error(transparent)]
    Dictionary(#[from] DictionaryError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type ConvertResult<T> = Result<T, ConvertError>;
