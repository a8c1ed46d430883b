//! Resolves a template reference to a concrete file on disk.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::catalog::GeneratorKind;
use crate::error::{Error, Result};

use super::{Provenance, TEMPLATE_EXTENSION, TemplateLocation, TemplateRef, TemplateRoots};

/// Resolve `reference` for `kind` against the two search roots.
///
/// Named references try the custom root first so user overrides always
/// shadow a bundled template of the same name; this two-root,
/// first-match-wins order is the entire resolution policy. Nothing is
/// cached, there is exactly one resolution per command run.
///
/// Explicit paths are returned verbatim with `Explicit` provenance. The
/// path may point anywhere on disk, so its existence is checked by whoever
/// opens the file, not here.
pub fn resolve(
    roots: &TemplateRoots,
    reference: &TemplateRef,
    kind: &GeneratorKind,
) -> Result<TemplateLocation> {
    match reference {
        TemplateRef::Path(path) => Ok(TemplateLocation {
            path: path.clone(),
            provenance: Provenance::Explicit,
        }),
        TemplateRef::Name(name) => {
            let file_name = format!("{name}.{TEMPLATE_EXTENSION}");

            let custom = roots.custom.join(kind.template_folder).join(&file_name);
            if is_file(&custom)? {
                debug!(path = %custom.display(), "resolved custom template");
                return Ok(TemplateLocation {
                    path: custom,
                    provenance: Provenance::Custom,
                });
            }

            let bundled = roots.bundled.join(kind.template_folder).join(&file_name);
            if is_file(&bundled)? {
                debug!(path = %bundled.display(), "resolved bundled template");
                return Ok(TemplateLocation {
                    path: bundled,
                    provenance: Provenance::Bundled,
                });
            }

            Err(Error::template_not_found(name, kind, &custom, &bundled))
        }
    }
}

/// Stat a candidate, distinguishing "not there" from failures such as
/// permission errors, which must surface to the user.
fn is_file(path: &Path) -> Result<bool> {
    match fs::metadata(path) {
        Ok(metadata) => Ok(metadata.is_file()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(Error::Io(e)),
    }
}
