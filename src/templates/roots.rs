//! Startup resolution of the two template search roots.
//!
//! Both roots are resolved exactly once per invocation and treated as
//! read-only constants afterwards; the resolution subsystem never creates
//! or mutates them.
//!
//! The custom root is the user-writable override location:
//! 1. Directory named by the `RESGEN_CUSTOM_TEMPLATES_DIR` environment variable
//! 2. `<config dir>/resgen/templates` (e.g. `~/.config/resgen/templates`)
//!
//! The bundled root ships with the tool:
//! 1. Directory named by the `RESGEN_TEMPLATES_DIR` environment variable
//! 2. `templates/` next to the executable
//! 3. `share/resgen/templates/` under the install prefix
//! 4. `templates/` in the crate root (for development)
//! 5. `templates/` in the current working directory

use std::env;
use std::path::PathBuf;

use tracing::debug;

/// Environment override for the custom (user) templates root
pub const CUSTOM_TEMPLATES_ENV: &str = "RESGEN_CUSTOM_TEMPLATES_DIR";

/// Environment override for the bundled templates root
pub const BUNDLED_TEMPLATES_ENV: &str = "RESGEN_TEMPLATES_DIR";

/// The two directories every template search runs against
#[derive(Debug, Clone)]
pub struct TemplateRoots {
    /// User-writable override location, searched first
    pub custom: PathBuf,
    /// Templates installed with the tool
    pub bundled: PathBuf,
}

impl TemplateRoots {
    /// Resolve both roots from the environment and standard locations.
    ///
    /// Either root may not exist on disk. A missing root behaves exactly
    /// like an empty one for listing and like a miss for resolution.
    pub fn discover() -> Self {
        let roots = Self {
            custom: Self::custom_root(),
            bundled: Self::bundled_root(),
        };
        debug!(
            custom = %roots.custom.display(),
            bundled = %roots.bundled.display(),
            "resolved template roots"
        );
        roots
    }

    fn custom_root() -> PathBuf {
        if let Ok(dir) = env::var(CUSTOM_TEMPLATES_ENV) {
            return PathBuf::from(dir);
        }
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("resgen")
            .join("templates")
    }

    fn bundled_root() -> PathBuf {
        if let Ok(dir) = env::var(BUNDLED_TEMPLATES_ENV) {
            return PathBuf::from(dir);
        }

        let candidates = Self::bundled_candidates();
        candidates
            .iter()
            .find(|candidate| candidate.exists())
            .or_else(|| candidates.last())
            .cloned()
            .unwrap_or_else(|| PathBuf::from("templates"))
    }

    /// Standard locations checked for the bundled templates, in order of
    /// preference.
    fn bundled_candidates() -> Vec<PathBuf> {
        let mut candidates = Vec::new();

        if let Ok(exe_path) = env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                candidates.push(exe_dir.join("templates"));
                if let Some(prefix) = exe_dir.parent() {
                    candidates.push(prefix.join("share").join("resgen").join("templates"));
                }
            }
        }

        if let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") {
            candidates.push(PathBuf::from(manifest_dir).join("templates"));
        }

        if let Ok(current_dir) = env::current_dir() {
            candidates.push(current_dir.join("templates"));
        }

        candidates
    }
}
