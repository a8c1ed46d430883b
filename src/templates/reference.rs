//! How the user names a template, and what a resolved template looks like.

use std::fmt;
use std::path::PathBuf;

/// User input identifying a template.
///
/// The variant is decided by which command-line argument or configuration
/// field carried the value, never by sniffing the string for path
/// separators, so a template name containing a `/` stays a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateRef {
    /// Bare identifier, resolved against the custom and bundled roots
    Name(String),
    /// Explicit filesystem path, used verbatim
    Path(PathBuf),
}

/// Which root a resolved template came from. Diagnostics only, never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// Found under the user-writable override root
    Custom,
    /// Found under the root installed with the tool
    Bundled,
    /// Supplied as an explicit path by the caller
    Explicit,
}

impl Provenance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Custom => "custom",
            Self::Bundled => "bundled",
            Self::Explicit => "explicit",
        }
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A template file pinned down on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateLocation {
    pub path: PathBuf,
    pub provenance: Provenance,
}
