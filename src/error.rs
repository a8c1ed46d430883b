//! Error handling for the resgen CLI.
//!
//! This module defines the main error type `Error` used throughout the
//! binary, along with a convenient `Result` type alias. It uses `thiserror`
//! and implements conversions from common error types.

use std::io;
use std::path::Path;

use thiserror::Error;

use crate::catalog::GeneratorKind;

/// Result type for resgen operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for resgen operations
#[derive(Debug, Error)]
pub enum Error {
    /// A generator kind name that is not in the catalog
    #[error("unknown generator kind '{name}' (valid kinds: {known})")]
    UnknownKind { name: String, known: String },

    /// A named template absent from both search roots
    #[error(
        "template '{name}' not found for generator '{kind}'. Searched:\n  - {custom}\n  - {bundled}"
    )]
    TemplateNotFound {
        name: String,
        kind: String,
        custom: String,
        bundled: String,
    },

    /// A template that exists but is not part of the bundled set
    #[error(
        "template '{name}' is not a bundled template of generator '{kind}'; only bundled templates have online documentation"
    )]
    NotBundled { name: String, kind: String },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Template engine error
    #[error("template engine error: {0}")]
    Engine(#[from] tera::Error),
}

impl Error {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create an unknown-kind error listing the valid names
    pub fn unknown_kind(name: &str) -> Self {
        Self::UnknownKind {
            name: name.to_string(),
            known: GeneratorKind::known_names(),
        }
    }

    /// Create a not-found error naming both searched candidates
    pub fn template_not_found(
        name: &str,
        kind: &GeneratorKind,
        custom: &Path,
        bundled: &Path,
    ) -> Self {
        Self::TemplateNotFound {
            name: name.to_string(),
            kind: kind.name.to_string(),
            custom: custom.display().to_string(),
            bundled: bundled.display().to_string(),
        }
    }

    /// Wrap an I/O failure so the message carries the offending path
    pub fn io_at(path: &Path, source: io::Error) -> Self {
        Self::Io(io::Error::new(
            source.kind(),
            format!("{}: {source}", path.display()),
        ))
    }
}
