//! Configuration-driven generation (`resgen.yml`).
//!
//! Invoking the binary without a subcommand runs every generator section
//! of the configuration file in catalog order.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::catalog::GeneratorKind;
use crate::error::{Error, Result};
use crate::templates::TemplateRef;

/// Configuration file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "resgen.yml";

/// Top-level configuration: one section per generator kind
#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(flatten)]
    pub generators: BTreeMap<String, GeneratorConfig>,
}

/// One generator section
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Resource files fed to the generator
    #[serde(default)]
    pub inputs: Vec<PathBuf>,
    /// One generated artifact per entry
    pub outputs: Vec<OutputConfig>,
}

/// One template/output pairing within a generator section
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(rename = "templateName")]
    pub template_name: Option<String>,
    #[serde(rename = "templatePath")]
    pub template_path: Option<PathBuf>,
    pub output: PathBuf,
    #[serde(default)]
    pub params: BTreeMap<String, String>,
}

impl Config {
    /// Load and validate the configuration file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::config(format!(
                "no configuration file at {}; create one or invoke a subcommand",
                path.display()
            )));
        }
        let contents = fs::read_to_string(path).map_err(|e| Error::io_at(path, e))?;
        let config: Config = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Every section must name a known generator kind, checked before any
    /// generation starts so a typo fails the whole run up front.
    fn validate(&self) -> Result<()> {
        for name in self.generators.keys() {
            GeneratorKind::lookup_or_err(name)?;
        }
        Ok(())
    }
}

impl OutputConfig {
    /// Build the template reference from whichever field carried a value.
    pub fn template_ref(&self) -> Result<TemplateRef> {
        match (&self.template_name, &self.template_path) {
            (Some(name), None) => Ok(TemplateRef::Name(name.clone())),
            (None, Some(path)) => Ok(TemplateRef::Path(path.clone())),
            (Some(name), Some(_)) => Err(Error::config(format!(
                "output '{}' sets both templateName ('{name}') and templatePath",
                self.output.display()
            ))),
            (None, None) => Err(Error::config(format!(
                "output '{}' sets neither templateName nor templatePath",
                self.output.display()
            ))),
        }
    }
}
