//! The fixed registry of generator kinds.
//!
//! Every other part of the CLI validates user-supplied kind names against
//! this catalog before touching the filesystem. The registry is built at
//! compile time, performs no I/O, and its declaration order is the order
//! used for all listings.

use std::fmt;

use crate::error::{Error, Result};

/// One supported resource generator, identified by its CLI name and the
/// subfolder its templates live in under each search root.
#[derive(Debug, PartialEq, Eq)]
pub struct GeneratorKind {
    pub name: &'static str,
    pub template_folder: &'static str,
}

/// All supported generators, in the order they appear in listings.
const CATALOG: &[GeneratorKind] = &[
    GeneratorKind {
        name: "colors",
        template_folder: "colors",
    },
    GeneratorKind {
        name: "coredata",
        template_folder: "coredata",
    },
    GeneratorKind {
        name: "files",
        template_folder: "files",
    },
    GeneratorKind {
        name: "fonts",
        template_folder: "fonts",
    },
    GeneratorKind {
        name: "ib",
        template_folder: "ib",
    },
    GeneratorKind {
        name: "json",
        template_folder: "json",
    },
    GeneratorKind {
        name: "plist",
        template_folder: "plist",
    },
    GeneratorKind {
        name: "strings",
        template_folder: "strings",
    },
    GeneratorKind {
        name: "xcassets",
        template_folder: "xcassets",
    },
    GeneratorKind {
        name: "yaml",
        template_folder: "yaml",
    },
];

impl GeneratorKind {
    /// Returns every generator kind in declaration order
    pub fn all() -> &'static [GeneratorKind] {
        CATALOG
    }

    /// Case-sensitive lookup by CLI name
    pub fn lookup(name: &str) -> Option<&'static GeneratorKind> {
        CATALOG.iter().find(|kind| kind.name == name)
    }

    /// Lookup that fails with a validation error listing the valid names
    pub fn lookup_or_err(name: &str) -> Result<&'static GeneratorKind> {
        Self::lookup(name).ok_or_else(|| Error::unknown_kind(name))
    }

    /// Comma-separated list of valid kind names, for error messages
    pub fn known_names() -> String {
        CATALOG
            .iter()
            .map(|kind| kind.name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
