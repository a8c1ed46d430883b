//! The generation engine behind every `run` invocation.
//!
//! The CLI's job ends once a template reference is resolved; everything
//! after that happens behind [`GeneratorEngine`]. The default engine is a
//! thin Tera renderer: resource parsing proper lives in the generator
//! libraries and is out of the CLI's hands.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tera::{Context, Tera};
use tracing::info;

use crate::catalog::GeneratorKind;
use crate::error::{Error, Result};
use crate::templates::TemplateLocation;

/// One generation request, fully resolved by the command router
#[derive(Debug)]
pub struct GenerateRequest<'a> {
    pub kind: &'static GeneratorKind,
    pub template: TemplateLocation,
    pub inputs: &'a [PathBuf],
    /// Destination file; stdout when absent
    pub output: Option<&'a Path>,
    pub params: &'a [(String, String)],
}

/// Collaborator that turns a resolved request into generated code
pub trait GeneratorEngine {
    fn generate(&self, request: &GenerateRequest<'_>) -> Result<()>;
}

/// Default engine: renders the resolved template once with Tera
pub struct TeraEngine;

impl TeraEngine {
    pub fn new() -> Self {
        Self
    }

    fn context(request: &GenerateRequest<'_>) -> Context {
        let mut context = Context::new();
        context.insert("generator", request.kind.name);

        let inputs: Vec<String> = request
            .inputs
            .iter()
            .map(|path| path.display().to_string())
            .collect();
        context.insert("inputs", &inputs);

        let params: BTreeMap<&str, &str> = request
            .params
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
            .collect();
        context.insert("params", &params);

        context
    }
}

impl Default for TeraEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneratorEngine for TeraEngine {
    fn generate(&self, request: &GenerateRequest<'_>) -> Result<()> {
        // Explicit template paths were taken verbatim at resolution; their
        // existence check happens here, at first open.
        let source = fs::read_to_string(&request.template.path)
            .map_err(|e| Error::io_at(&request.template.path, e))?;

        let rendered = Tera::one_off(&source, &Self::context(request), false)?;

        match request.output {
            Some(path) => {
                fs::write(path, &rendered).map_err(|e| Error::io_at(path, e))?;
                info!(
                    generator = request.kind.name,
                    output = %path.display(),
                    "generation finished"
                );
            }
            None => print!("{rendered}"),
        }
        Ok(())
    }
}
