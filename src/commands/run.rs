//! The `run` command, its deprecated flat spellings, and the implicit
//! configuration-driven run.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{debug, info};

use crate::catalog::GeneratorKind;
use crate::config::{Config, DEFAULT_CONFIG_FILE};
use crate::engine::{GenerateRequest, GeneratorEngine, TeraEngine};
use crate::error::Result;
use crate::templates::{self, TemplateRef, TemplateRoots};

/// Arguments for `run <kind>`
#[derive(clap::Args, Debug)]
#[command(group(clap::ArgGroup::new("template").required(true)))]
pub struct RunArgs {
    /// Generator kind to run
    pub kind: String,
    /// Name of a bundled or custom template
    #[arg(long, group = "template")]
    pub template_name: Option<String>,
    /// Explicit path to a template file, bypassing the search roots
    #[arg(long, group = "template")]
    pub template_path: Option<PathBuf>,
    /// File to write generated code to (stdout when omitted)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
    /// Extra key=value pairs exposed to the template as `params`
    #[arg(long = "param", value_name = "KEY=VALUE", value_parser = parse_param)]
    pub params: Vec<(String, String)>,
    /// Resource files to generate code from
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,
}

fn parse_param(raw: &str) -> std::result::Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{raw}'")),
    }
}

impl RunArgs {
    fn template_ref(&self) -> TemplateRef {
        match (&self.template_name, &self.template_path) {
            (Some(name), None) => TemplateRef::Name(name.clone()),
            (None, Some(path)) => TemplateRef::Path(path.clone()),
            _ => unreachable!("clap enforces exactly one of --template-name and --template-path"),
        }
    }
}

/// Run one generator against explicit inputs.
pub fn run(roots: &TemplateRoots, args: &RunArgs) -> Result<()> {
    let kind = GeneratorKind::lookup_or_err(&args.kind)?;
    let template = templates::resolve(roots, &args.template_ref(), kind)?;
    debug!(
        generator = kind.name,
        template = %template.path.display(),
        provenance = %template.provenance,
        "running generator"
    );
    TeraEngine::new().generate(&GenerateRequest {
        kind,
        template,
        inputs: &args.inputs,
        output: args.output.as_deref(),
        params: &args.params,
    })
}

/// Wrapper so the deprecated flat spellings reparse with the exact `run`
/// argument set.
#[derive(Parser, Debug)]
#[command(name = "resgen", bin_name = "resgen")]
struct LegacyRun {
    #[command(flatten)]
    args: RunArgs,
}

/// Deprecated flat spelling: `resgen strings ...` routes to the same
/// handler as `resgen run strings ...`.
pub fn run_legacy(roots: &TemplateRoots, argv: Vec<OsString>) -> Result<()> {
    let name = argv
        .first()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_default();
    // Validate before reparsing so an unrecognized subcommand reports the
    // allowed set instead of a usage error.
    GeneratorKind::lookup_or_err(&name)?;

    let mut full: Vec<OsString> = vec![OsString::from("resgen")];
    full.extend(argv);
    let parsed = LegacyRun::try_parse_from(full).unwrap_or_else(|e| e.exit());
    run(roots, &parsed.args)
}

/// Implicit invocation with no subcommand: run every configured generator
/// in catalog order.
pub fn run_from_config(roots: &TemplateRoots) -> Result<()> {
    let config = Config::load(Path::new(DEFAULT_CONFIG_FILE))?;
    let engine = TeraEngine::new();

    // Catalog order keeps the run deterministic regardless of how the
    // configuration file is laid out.
    for kind in GeneratorKind::all() {
        let Some(section) = config.generators.get(kind.name) else {
            continue;
        };
        for output in &section.outputs {
            let template = templates::resolve(roots, &output.template_ref()?, kind)?;
            let params: Vec<(String, String)> = output
                .params
                .iter()
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect();
            info!(
                generator = kind.name,
                output = %output.output.display(),
                "configured generation"
            );
            engine.generate(&GenerateRequest {
                kind,
                template,
                inputs: &section.inputs,
                output: Some(&output.output),
                params: &params,
            })?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::fs;
    use tempfile::TempDir;

    fn test_roots() -> (TempDir, TemplateRoots) {
        let dir = TempDir::new().unwrap();
        let roots = TemplateRoots {
            custom: dir.path().join("custom"),
            bundled: dir.path().join("bundled"),
        };
        (dir, roots)
    }

    #[test]
    fn test_parse_param() {
        assert_eq!(
            parse_param("enumName=L10n").unwrap(),
            ("enumName".to_string(), "L10n".to_string())
        );
        assert_eq!(
            parse_param("key=a=b").unwrap(),
            ("key".to_string(), "a=b".to_string())
        );
        assert!(parse_param("novalue").is_err());
        assert!(parse_param("=orphan").is_err());
    }

    #[test]
    fn test_run_unknown_kind_fails_before_filesystem_access() {
        let (_dir, roots) = test_roots();
        let args = RunArgs {
            kind: "bogus".to_string(),
            template_name: Some("flat-swift5".to_string()),
            template_path: None,
            output: None,
            params: Vec::new(),
            inputs: vec![PathBuf::from("whatever")],
        };
        let error = run(&roots, &args).unwrap_err();
        assert!(matches!(error, Error::UnknownKind { .. }));
    }

    #[test]
    fn test_run_renders_resolved_template() {
        let (dir, roots) = test_roots();
        let template_dir = roots.bundled.join("strings");
        fs::create_dir_all(&template_dir).unwrap();
        fs::write(
            template_dir.join("flat-swift5.tera"),
            "// generated by {{ generator }}\n",
        )
        .unwrap();
        let output = dir.path().join("L10n.swift");

        let args = RunArgs {
            kind: "strings".to_string(),
            template_name: Some("flat-swift5".to_string()),
            template_path: None,
            output: Some(output.clone()),
            params: Vec::new(),
            inputs: vec![PathBuf::from("Localizable.strings")],
        };
        run(&roots, &args).unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "// generated by strings\n"
        );
    }

    #[test]
    fn test_run_legacy_rejects_unknown_command() {
        let (_dir, roots) = test_roots();
        let argv = vec![OsString::from("bogus"), OsString::from("input")];
        let error = run_legacy(&roots, argv).unwrap_err();
        assert!(matches!(error, Error::UnknownKind { .. }));
    }
}
