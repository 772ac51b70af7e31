use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use povercat_util::errors::{PovercatError, PovercatResult};

/// Name of the optional project configuration file.
pub const CONFIG_FILE_NAME: &str = "Povercat.toml";

/// Project configuration loaded from `Povercat.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default)]
    pub generator: GeneratorConfig,
}

/// Generator settings from the `[generator]` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Kotlin package of the generated classes.
    #[serde(default = "default_package")]
    pub package: String,

    /// Version catalog files to generate from.
    #[serde(default = "default_catalogs")]
    pub catalogs: Vec<PathBuf>,

    /// Base directory for generated sources.
    #[serde(default = "default_output_dir", rename = "output-dir")]
    pub output_dir: PathBuf,

    /// Project version shown in the generated class documentation.
    #[serde(default = "default_version")]
    pub version: String,

    /// Year in the license header; the current year when unset.
    #[serde(default, rename = "copyright-year")]
    pub copyright_year: Option<i32>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            package: default_package(),
            catalogs: default_catalogs(),
            output_dir: default_output_dir(),
            version: default_version(),
            copyright_year: None,
        }
    }
}

fn default_package() -> String {
    "org.gradle.version.catalog".to_string()
}

fn default_catalogs() -> Vec<PathBuf> {
    vec![PathBuf::from("gradle/libs.versions.toml")]
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("build/generated/sources")
}

fn default_version() -> String {
    "unspecified".to_string()
}

impl ProjectConfig {
    /// Load `Povercat.toml` from `path`, or return defaults if the file doesn't exist.
    pub fn load(path: &Path) -> PovercatResult<Self> {
        if !path.is_file() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| PovercatError::Config {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        Self::from_str(&content)
    }

    /// Parse a `Povercat.toml` from a string.
    pub fn from_str(content: &str) -> PovercatResult<Self> {
        toml::from_str(content).map_err(|e| {
            PovercatError::Config {
                message: format!("Failed to parse {CONFIG_FILE_NAME}: {e}"),
            }
            .into()
        })
    }
}

impl GeneratorConfig {
    /// Resolve relative catalog and output paths against `root`.
    pub fn rooted_at(mut self, root: &Path) -> Self {
        self.catalogs = self
            .catalogs
            .into_iter()
            .map(|catalog| root.join(catalog))
            .collect();
        self.output_dir = root.join(&self.output_dir);
        self
    }
}
