//! Operation: generate Kotlin catalog classes from TOML version catalogs.

use std::path::{Path, PathBuf};

use povercat_core::emit::EmitOptions;
use povercat_core::naming::to_type_name;
use povercat_util::errors::{PovercatError, PovercatResult};
use povercat_util::fs::{ensure_dir, package_dir};

use crate::read_catalog_text;

/// Options for `povercat generate`.
pub struct GenerateOptions {
    /// Kotlin package of the generated classes.
    pub package: String,
    /// Catalog files, processed in order.
    pub catalogs: Vec<PathBuf>,
    /// Base directory; classes land in `<output_dir>/<package path>/`.
    pub output_dir: PathBuf,
    /// Project version shown in the class documentation.
    pub version: String,
    /// Year in the license header.
    pub copyright_year: i32,
}

/// Outcome of a generate run.
#[derive(Debug, Default)]
pub struct GenerateReport {
    pub written: Vec<PathBuf>,
    pub skipped: Vec<(PathBuf, SkipReason)>,
    /// Catalogs that could not be read or parsed, with the error message.
    pub failed: Vec<(PathBuf, String)>,
}

impl GenerateReport {
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

/// Why an input produced no file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The file is not a `.toml` document.
    NotToml,
    /// Every entry of the catalog was empty.
    NothingToEmit,
}

/// Generate one Kotlin class per catalog.
///
/// All inputs are checked up front: a missing catalog aborts the run before
/// anything is written. A catalog that cannot be read or parsed is recorded
/// in the report and the remaining catalogs are still processed. Catalogs
/// that emit nothing produce no file.
pub fn generate(opts: &GenerateOptions) -> PovercatResult<GenerateReport> {
    let target_dir = opts.output_dir.join(package_dir(&opts.package));
    ensure_dir(&target_dir).map_err(PovercatError::Io)?;

    if let Some(missing) = opts.catalogs.iter().find(|path| !path.is_file()) {
        return Err(PovercatError::CatalogNotFound {
            path: missing.clone(),
        }
        .into());
    }

    let mut report = GenerateReport::default();
    for catalog in &opts.catalogs {
        if !is_toml(catalog) {
            tracing::warn!("Skipping {}: not a .toml file", catalog.display());
            report.skipped.push((catalog.clone(), SkipReason::NotToml));
            continue;
        }

        let type_name = class_name_for(catalog);
        tracing::debug!("Generating {type_name} from {}", catalog.display());

        let source = match render_catalog(catalog, &type_name, opts) {
            Ok(source) => source,
            Err(e) => {
                tracing::error!("Failed to generate catalog class {type_name}: {e}");
                report.failed.push((catalog.clone(), e.to_string()));
                continue;
            }
        };

        if source.trim().is_empty() {
            tracing::debug!("{} has no entries to emit", catalog.display());
            report.skipped.push((catalog.clone(), SkipReason::NothingToEmit));
            continue;
        }

        let output = target_dir.join(format!("{type_name}Catalog.kt"));
        std::fs::write(&output, source).map_err(PovercatError::Io)?;
        tracing::info!("Wrote {}", output.display());
        report.written.push(output);
    }

    Ok(report)
}

fn render_catalog(
    catalog: &Path,
    type_name: &str,
    opts: &GenerateOptions,
) -> PovercatResult<String> {
    let text = read_catalog_text(catalog)?;
    let options = EmitOptions {
        package: opts.package.clone(),
        type_name: type_name.to_string(),
        display_version: opts.version.clone(),
        copyright_year: opts.copyright_year,
    };
    let source =
        povercat_core::generate_source(&text, &options).map_err(|e| PovercatError::Catalog {
            path: catalog.to_path_buf(),
            message: e.to_string(),
        })?;
    Ok(source)
}

/// Class name derived from the catalog file stem (`libs.versions.toml` -> `LibsVersions`).
pub fn class_name_for(catalog: &Path) -> String {
    let stem = catalog
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    to_type_name(&stem)
}

fn is_toml(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "toml")
}
