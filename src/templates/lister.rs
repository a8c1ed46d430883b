//! Enumerates the template files available for a generator kind.

use std::fs;
use std::io;
use std::path::Path;

use crate::catalog::GeneratorKind;
use crate::error::{Error, Result};

use super::{TEMPLATE_EXTENSION, TemplateRoots};

/// Template names found for one generator kind, split by root
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateListing {
    pub custom: Vec<String>,
    pub bundled: Vec<String>,
}

/// List the templates available for `kind` under both roots.
///
/// Names are the file names with the template extension stripped, sorted
/// lexicographically so repeated runs over an unchanged filesystem produce
/// identical output.
pub fn list_templates(roots: &TemplateRoots, kind: &GeneratorKind) -> Result<TemplateListing> {
    Ok(TemplateListing {
        custom: template_names(&roots.custom.join(kind.template_folder))?,
        bundled: template_names(&roots.bundled.join(kind.template_folder))?,
    })
}

/// Immediate children of `dir` that carry the template extension.
///
/// A missing directory (or missing root) reads as "no templates here":
/// most users never create an override directory, so that is the common,
/// expected case and not an error.
fn template_names(dir: &Path) -> Result<Vec<String>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(Error::Io(e)),
    };

    let mut names = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|ext| ext.to_str()) != Some(TEMPLATE_EXTENSION) {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
            names.push(stem.to_string());
        }
    }

    names.sort();
    Ok(names)
}
