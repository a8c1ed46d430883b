//! Handlers for the `template` subcommand group.

use std::fs;
use std::path::PathBuf;

use tracing::debug;
use url::Url;

use crate::browser::UrlOpener;
use crate::catalog::GeneratorKind;
use crate::error::{Error, Result};
use crate::templates::{self, TemplateListing, TemplateRef, TemplateRoots};

/// Base page for the published template documentation
pub const DOCS_BASE_URL: &str =
    "https://github.com/resgen-tools/resgen/blob/main/Documentation/templates";

/// Arguments shared by `template which` and `template cat`
#[derive(clap::Args, Debug)]
#[command(group(clap::ArgGroup::new("template").required(true)))]
pub struct LocateArgs {
    /// Generator kind the template belongs to
    pub kind: String,
    /// Name of a bundled or custom template
    #[arg(group = "template")]
    pub template_name: Option<String>,
    /// Explicit path to a template file, bypassing the search roots
    #[arg(long = "path", group = "template")]
    pub template_path: Option<PathBuf>,
}

impl LocateArgs {
    /// The variant is decided by which argument carried the value, never
    /// by inspecting the string for path separators.
    fn template_ref(&self) -> TemplateRef {
        match (&self.template_name, &self.template_path) {
            (Some(name), None) => TemplateRef::Name(name.clone()),
            (None, Some(path)) => TemplateRef::Path(path.clone()),
            _ => unreachable!("clap enforces exactly one of <TEMPLATE_NAME> and --path"),
        }
    }
}

/// `template list [--only <kind>]`: one block per kind, custom entries
/// separated from bundled ones, followed by the override footer.
pub fn list(roots: &TemplateRoots, only: Option<&str>) -> Result<String> {
    let kinds: Vec<&'static GeneratorKind> = match only {
        Some(name) => vec![GeneratorKind::lookup_or_err(name)?],
        None => GeneratorKind::all().iter().collect(),
    };

    let mut output = String::new();
    for kind in kinds {
        let listing = templates::list_templates(roots, kind)?;
        write_section(&mut output, kind, &listing);
    }
    output.push_str(&footer(roots));
    Ok(output)
}

fn write_section(output: &mut String, kind: &GeneratorKind, listing: &TemplateListing) {
    output.push_str(&format!("{}:\n", kind.name));
    output.push_str("  custom:\n");
    for name in &listing.custom {
        output.push_str(&format!("   - {name}\n"));
    }
    output.push_str("  bundled:\n");
    for name in &listing.bundled {
        output.push_str(&format!("   - {name}\n"));
    }
}

fn footer(roots: &TemplateRoots) -> String {
    format!(
        "---\nYou can add custom templates in {}/<generator>,\nor use --template-path to point to a template file anywhere on disk.\n",
        roots.custom.display()
    )
}

/// `template which`: print the path the reference resolves to.
pub fn which(roots: &TemplateRoots, args: &LocateArgs) -> Result<String> {
    let kind = GeneratorKind::lookup_or_err(&args.kind)?;
    let location = templates::resolve(roots, &args.template_ref(), kind)?;
    debug!(provenance = %location.provenance, "template resolved");
    Ok(format!("{}\n", location.path.display()))
}

/// `template cat`: print the contents of the resolved template.
pub fn cat(roots: &TemplateRoots, args: &LocateArgs) -> Result<String> {
    let kind = GeneratorKind::lookup_or_err(&args.kind)?;
    let location = templates::resolve(roots, &args.template_ref(), kind)?;
    // Explicit paths get their existence check here, at first open.
    fs::read_to_string(&location.path).map_err(|e| Error::io_at(&location.path, e))
}

/// `template doc`: open the online documentation for the templates index,
/// one generator kind, or one bundled template.
pub fn doc(
    roots: &TemplateRoots,
    kind: Option<&str>,
    template: Option<&str>,
    opener: &dyn UrlOpener,
) -> Result<()> {
    let url = doc_url(roots, kind, template)?;
    println!("Opening documentation: {url}");
    opener.open(&url)?;
    Ok(())
}

fn doc_url(roots: &TemplateRoots, kind: Option<&str>, template: Option<&str>) -> Result<Url> {
    let page = match (kind, template) {
        // A template without a kind is rejected by the argument parser.
        (None, _) => format!("{DOCS_BASE_URL}/"),
        (Some(name), None) => {
            let kind = GeneratorKind::lookup_or_err(name)?;
            format!("{DOCS_BASE_URL}/{}/", kind.name)
        }
        (Some(name), Some(template)) => {
            let kind = GeneratorKind::lookup_or_err(name)?;
            // Only bundled templates are documented online; custom
            // overrides of the same name do not change the published docs.
            let listing = templates::list_templates(roots, kind)?;
            if !listing.bundled.iter().any(|bundled| bundled == template) {
                return Err(Error::NotBundled {
                    name: template.to_string(),
                    kind: kind.name.to_string(),
                });
            }
            format!("{DOCS_BASE_URL}/{}/{template}.md", kind.name)
        }
    };
    Url::parse(&page).map_err(|e| Error::config(format!("invalid documentation URL '{page}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::RecordingUrlOpener;
    use std::path::Path;
    use tempfile::TempDir;

    fn test_roots() -> (TempDir, TemplateRoots) {
        let dir = TempDir::new().unwrap();
        let roots = TemplateRoots {
            custom: dir.path().join("custom"),
            bundled: dir.path().join("bundled"),
        };
        (dir, roots)
    }

    fn write_template(root: &Path, folder: &str, name: &str, contents: &str) {
        let dir = root.join(folder);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(format!("{name}.tera")), contents).unwrap();
    }

    fn by_name(kind: &str, name: &str) -> LocateArgs {
        LocateArgs {
            kind: kind.to_string(),
            template_name: Some(name.to_string()),
            template_path: None,
        }
    }

    #[test]
    fn test_list_only_strings_block_format() {
        let (_dir, roots) = test_roots();
        fs::create_dir_all(roots.custom.join("strings")).unwrap();
        write_template(&roots.bundled, "strings", "flat-swift5", "");
        write_template(&roots.bundled, "strings", "structured-swift5", "");

        let output = list(&roots, Some("strings")).unwrap();
        let expected_block =
            "strings:\n  custom:\n  bundled:\n   - flat-swift5\n   - structured-swift5\n";
        assert!(output.starts_with(expected_block));
        assert!(output.contains(&roots.custom.display().to_string()));
        assert!(output.contains("--template-path"));
    }

    #[test]
    fn test_list_all_kinds_in_catalog_order() {
        let (_dir, roots) = test_roots();
        let output = list(&roots, None).unwrap();

        let positions: Vec<usize> = GeneratorKind::all()
            .iter()
            .map(|kind| output.find(&format!("{}:\n", kind.name)).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_list_unknown_only_filter() {
        let (_dir, roots) = test_roots();
        let error = list(&roots, Some("bogus")).unwrap_err();
        assert!(matches!(error, Error::UnknownKind { .. }));
        assert!(error.to_string().contains(&GeneratorKind::known_names()));
    }

    #[test]
    fn test_which_prefers_custom_over_bundled() {
        let (_dir, roots) = test_roots();
        write_template(&roots.custom, "strings", "flat-swift5", "custom");
        write_template(&roots.bundled, "strings", "flat-swift5", "bundled");

        let output = which(&roots, &by_name("strings", "flat-swift5")).unwrap();
        assert_eq!(
            output,
            format!("{}\n", roots.custom.join("strings/flat-swift5.tera").display())
        );
    }

    #[test]
    fn test_which_missing_template_fails() {
        let (_dir, roots) = test_roots();
        let error = which(&roots, &by_name("strings", "missing-template")).unwrap_err();
        assert!(matches!(error, Error::TemplateNotFound { .. }));
    }

    #[test]
    fn test_cat_emits_raw_contents() {
        let (_dir, roots) = test_roots();
        write_template(&roots.bundled, "fonts", "swift5", "import UIKit\n{{ generator }}\n");

        let output = cat(&roots, &by_name("fonts", "swift5")).unwrap();
        assert_eq!(output, "import UIKit\n{{ generator }}\n");
    }

    #[test]
    fn test_cat_explicit_path_missing_file() {
        let (dir, roots) = test_roots();
        let args = LocateArgs {
            kind: "fonts".to_string(),
            template_name: None,
            template_path: Some(dir.path().join("nope.tera")),
        };
        let error = cat(&roots, &args).unwrap_err();
        assert!(matches!(error, Error::Io(_)));
        assert!(error.to_string().contains("nope.tera"));
    }

    #[test]
    fn test_doc_url_without_kind() {
        let (_dir, roots) = test_roots();
        let url = doc_url(&roots, None, None).unwrap();
        assert_eq!(url.as_str(), format!("{DOCS_BASE_URL}/"));
    }

    #[test]
    fn test_doc_url_for_kind() {
        let (_dir, roots) = test_roots();
        let url = doc_url(&roots, Some("strings"), None).unwrap();
        assert_eq!(url.as_str(), format!("{DOCS_BASE_URL}/strings/"));
    }

    #[test]
    fn test_doc_url_for_bundled_template() {
        let (_dir, roots) = test_roots();
        write_template(&roots.bundled, "strings", "flat-swift5", "");

        let url = doc_url(&roots, Some("strings"), Some("flat-swift5")).unwrap();
        assert_eq!(
            url.as_str(),
            format!("{DOCS_BASE_URL}/strings/flat-swift5.md")
        );
    }

    #[test]
    fn test_doc_url_rejects_custom_only_template() {
        let (_dir, roots) = test_roots();
        // Present as a custom override but absent from the bundled set.
        write_template(&roots.custom, "strings", "mine", "");

        let error = doc_url(&roots, Some("strings"), Some("mine")).unwrap_err();
        assert!(matches!(error, Error::NotBundled { .. }));
    }

    #[test]
    fn test_doc_delegates_to_opener() {
        let (_dir, roots) = test_roots();
        let opener = RecordingUrlOpener::new();
        doc(&roots, Some("xcassets"), None, &opener).unwrap();

        let opened = opener.opened.borrow();
        assert_eq!(opened.len(), 1);
        assert_eq!(opened[0].as_str(), format!("{DOCS_BASE_URL}/xcassets/"));
    }

    #[test]
    fn test_doc_unknown_kind_opens_nothing() {
        let (_dir, roots) = test_roots();
        let opener = RecordingUrlOpener::new();
        let error = doc(&roots, Some("bogus"), None, &opener).unwrap_err();
        assert!(matches!(error, Error::UnknownKind { .. }));
        assert!(opener.opened.borrow().is_empty());
    }
}
